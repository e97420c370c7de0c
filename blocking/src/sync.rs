use crate::cancel::Wake;
use handle_deque::{Handle, RingDeque};
use std::{
    sync::{Condvar, Mutex, MutexGuard, PoisonError},
    time::{Duration, Instant},
};

/// Yields the time left until the deadline, or `None` forever if there is no deadline.
///
/// Stops once the deadline has passed.
#[derive(Clone, Debug)]
pub(crate) struct TimeoutIterator {
    start: Instant,
    timeout: Option<Duration>,
}

impl TimeoutIterator {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self {
            start: Instant::now(),
            timeout,
        }
    }
}

impl Iterator for TimeoutIterator {
    type Item = Option<Duration>;
    fn next(&mut self) -> Option<Self::Item> {
        match self.timeout {
            Some(dur) => {
                let elapsed = self.start.elapsed();
                if dur > elapsed {
                    Some(Some(dur - elapsed))
                } else {
                    None
                }
            }
            None => Some(None),
        }
    }
}

/// Ring guarded by a mutex, plus the condition variable consumers park on.
pub(crate) struct Shared<H: Handle> {
    ring: Mutex<RingDeque<H>>,
    condvar: Condvar,
    pub spin: bool,
}

impl<H: Handle> Shared<H> {
    pub fn new(ring: RingDeque<H>, spin: bool) -> Self {
        Self {
            ring: Mutex::new(ring),
            condvar: Condvar::new(),
            spin,
        }
    }

    /// Locks the ring.
    ///
    /// Ring operations cannot panic half way through, so a poisoned lock still guards a consistent ring.
    pub fn lock(&self) -> MutexGuard<'_, RingDeque<H>> {
        self.ring.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Releases the lock and parks until notified or until `timeout` elapses.
    pub fn wait<'a>(&self, guard: MutexGuard<'a, RingDeque<H>>, timeout: Option<Duration>) -> MutexGuard<'a, RingDeque<H>> {
        match timeout {
            Some(t) => {
                self.condvar
                    .wait_timeout(guard, t)
                    .unwrap_or_else(PoisonError::into_inner)
                    .0
            }
            None => self.condvar.wait(guard).unwrap_or_else(PoisonError::into_inner),
        }
    }

    pub fn notify_one(&self) {
        self.condvar.notify_one();
    }
}

impl<H: Handle + Send> Wake for Shared<H> {
    fn wake(&self) {
        // Taking the lock orders this notification after any waiter that has checked
        // the token but not parked yet.
        let _guard = self.lock();
        self.condvar.notify_all();
    }
}
