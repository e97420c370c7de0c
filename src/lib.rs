//! Growable double-ended ring queue of opaque handles.
//!
//! [`RingDeque`] keeps its handles in a single contiguous buffer whose capacity is always a power of two,
//! so logical indices are mapped to physical slots with a mask instead of a division.
//! The buffer doubles when a push finds it full and halves when a pop leaves it exactly one quarter full.
//!
//! This crate is single-threaded. See `handle-deque-blocking` for the shared, blocking version.
#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod config;
mod error;
mod handle;
mod ring;
mod storage;
pub mod traits;

pub use config::{Config, MIN_CAPACITY};
pub use error::ReserveError;
pub use handle::Handle;
pub use ring::{Iter, RingDeque};

#[cfg(test)]
mod tests;
