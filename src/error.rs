use thiserror::Error;

/// Growing the ring buffer failed.
///
/// This is the only error a push can report: the deque never rejects a handle for being full,
/// it reallocates instead, and reallocation is the one thing that can run out of resources.
/// The deque is left unchanged when this is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReserveError {
    /// Requested capacity does not fit into `usize`.
    #[error("ring capacity overflow")]
    CapacityOverflow,
    /// Allocator refused to provide a buffer of the requested capacity.
    #[error("failed to allocate ring buffer of {capacity} slots")]
    AllocFailed { capacity: usize },
}
