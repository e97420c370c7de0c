use thiserror::Error;

/// Reason a blocking pop returned without an item.
///
/// Both are regular outcomes. No item was removed from the deque in either case.
#[derive(Error, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum WaitError {
    /// The [`CancelToken`](crate::CancelToken) passed to the pop has been cancelled.
    #[error("wait cancelled")]
    Cancelled,
    /// No item arrived before the timeout elapsed.
    #[error("wait timed out")]
    TimedOut,
}
