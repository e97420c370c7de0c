use std::{
    fmt,
    sync::{
        atomic::{AtomicBool, AtomicU64, Ordering},
        Arc, Mutex, MutexGuard, PoisonError, Weak,
    },
};

/// Something a blocked thread is parked on.
pub(crate) trait Wake: Send + Sync {
    /// Wakes every thread parked on it.
    fn wake(&self);
}

type Waiters = Vec<(u64, Weak<dyn Wake>)>;

#[derive(Default)]
struct Inner {
    cancelled: AtomicBool,
    next_id: AtomicU64,
    waiters: Mutex<Waiters>,
}

/// Cancellation signal for blocking pops.
///
/// Clones share the same signal. Once cancelled a token stays cancelled,
/// every pop waiting on it returns [`WaitError::Cancelled`](crate::WaitError::Cancelled),
/// and every later pop given it returns the same without waiting.
#[derive(Clone, Default)]
pub struct CancelToken {
    inner: Arc<Inner>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fires the signal and wakes the pops currently waiting on it.
    pub fn cancel(&self) {
        if self.inner.cancelled.swap(true, Ordering::SeqCst) {
            return;
        }
        let waiters = self.waiters().iter().map(|(_, waiter)| waiter.clone()).collect::<Vec<_>>();
        tracing::debug!(waiters = waiters.len(), "cancel token fired");
        for waiter in waiters.iter().filter_map(Weak::upgrade) {
            waiter.wake();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::SeqCst)
    }

    /// Adds `waiter` to the set woken by [`Self::cancel`] until the returned guard is dropped.
    pub(crate) fn register(&self, waiter: Weak<dyn Wake>) -> Registration<'_> {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.waiters().push((id, waiter));
        Registration { token: self, id }
    }

    #[cfg(test)]
    pub(crate) fn waiter_count(&self) -> usize {
        self.waiters().len()
    }

    fn waiters(&self) -> MutexGuard<'_, Waiters> {
        self.inner.waiters.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for CancelToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CancelToken")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

/// Keeps a waiter registered in a [`CancelToken`].
pub(crate) struct Registration<'a> {
    token: &'a CancelToken,
    id: u64,
}

impl Drop for Registration<'_> {
    fn drop(&mut self) {
        let mut waiters = self.token.waiters();
        if let Some(index) = waiters.iter().position(|(id, _)| *id == self.id) {
            waiters.swap_remove(index);
        }
    }
}
