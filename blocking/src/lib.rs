//! Shared, blocking version of [`handle_deque`].
//!
//! [`BlockingDeque`] wraps a [`RingDeque`](handle_deque::RingDeque) into a mutex and a condition variable
//! so that any number of threads can push and pop at both ends.
//! Pushes never block. Pops either return immediately or wait until an item arrives,
//! a [`CancelToken`] fires or a timeout elapses.

mod cancel;
mod cons;
mod deque;
mod error;
mod sync;

pub use cancel::CancelToken;
pub use cons::{BlockingCons, PopAllIter};
pub use deque::BlockingDeque;
pub use error::WaitError;

pub use handle_deque;
pub use handle_deque::{Config, Handle, ReserveError};
