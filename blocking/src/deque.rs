use crate::{
    cancel::{CancelToken, Wake},
    cons::BlockingCons,
    sync::{Shared, TimeoutIterator},
    WaitError,
};
use crossbeam_utils::Backoff;
use handle_deque::{
    traits::{Consumer, Observer, Producer},
    Config, Handle, ReserveError, RingDeque, MIN_CAPACITY,
};
use std::{
    fmt,
    sync::{Arc, Weak},
    time::Duration,
};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum End {
    Front,
    Back,
}

impl End {
    fn pop<H: Handle>(self, ring: &mut RingDeque<H>) -> Option<H> {
        match self {
            End::Front => ring.pop_front(),
            End::Back => ring.pop_back(),
        }
    }
}

/// Double-ended queue of handles shared between threads.
///
/// Clones refer to the same queue, like the halves of a channel except that every clone
/// may both push and pop at either end.
///
/// Every operation, reads included, runs under a single lock, so each call observes the queue
/// either completely before or completely after any other call.
/// Pushes never wait for space: the ring grows instead.
/// Pops come in two flavors, `try_pop_*` returning at once and `pop_*_wait` parking the thread
/// until an item arrives, a [`CancelToken`] fires or a timeout elapses.
///
/// Handles still in the queue when the last clone is dropped are discarded without being finalized.
pub struct BlockingDeque<H: Handle> {
    shared: Arc<Shared<H>>,
}

impl<H: Handle> Clone for BlockingDeque<H> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<H: Handle + Send + 'static> Default for BlockingDeque<H> {
    fn default() -> Self {
        Self::new(MIN_CAPACITY)
    }
}

impl<H: Handle + Send + 'static> BlockingDeque<H> {
    /// Creates an empty queue.
    ///
    /// `capacity` is rounded up to a power of two not less than [`MIN_CAPACITY`].
    pub fn new(capacity: usize) -> Self {
        Self::with_config(Config::new().with_initial_capacity(capacity))
    }

    pub fn with_config(config: Config) -> Self {
        Self::from_ring(RingDeque::with_config(config), config.spin())
    }

    /// Same as [`Self::with_config`] but reports allocation failure instead of aborting.
    pub fn try_with_config(config: Config) -> Result<Self, ReserveError> {
        Ok(Self::from_ring(RingDeque::try_with_config(config)?, config.spin()))
    }

    fn from_ring(ring: RingDeque<H>, spin: bool) -> Self {
        Self {
            shared: Arc::new(Shared::new(ring, spin)),
        }
    }

    /// Appends a handle to the back and wakes one waiting consumer.
    pub fn push_back(&self, item: H) -> Result<(), ReserveError> {
        self.shared.lock().push_back(item)?;
        self.shared.notify_one();
        Ok(())
    }

    /// Prepends a handle to the front and wakes one waiting consumer.
    pub fn push_front(&self, item: H) -> Result<(), ReserveError> {
        self.shared.lock().push_front(item)?;
        self.shared.notify_one();
        Ok(())
    }

    /// Removes the front handle, `None` if the queue is empty.
    pub fn try_pop_front(&self) -> Option<H> {
        self.shared.lock().pop_front()
    }

    /// Removes the back handle, `None` if the queue is empty.
    pub fn try_pop_back(&self) -> Option<H> {
        self.shared.lock().pop_back()
    }

    /// Removes the front handle, waiting for one to arrive if the queue is empty.
    ///
    /// Returns [`WaitError::Cancelled`] once `cancel` fires and [`WaitError::TimedOut`] once `timeout` elapses.
    /// Cancellation wins over an available item.
    /// `None` for either means waiting without that bound.
    pub fn pop_front_wait(&self, cancel: Option<&CancelToken>, timeout: Option<Duration>) -> Result<H, WaitError> {
        self.pop_wait(End::Front, cancel, timeout)
    }

    /// Removes the back handle, waiting for one to arrive if the queue is empty.
    ///
    /// Same as [`Self::pop_front_wait`] otherwise.
    pub fn pop_back_wait(&self, cancel: Option<&CancelToken>, timeout: Option<Duration>) -> Result<H, WaitError> {
        self.pop_wait(End::Back, cancel, timeout)
    }

    fn pop_wait(&self, end: End, cancel: Option<&CancelToken>, timeout: Option<Duration>) -> Result<H, WaitError> {
        let is_cancelled = || cancel.is_some_and(CancelToken::is_cancelled);

        if self.shared.spin && timeout != Some(Duration::ZERO) {
            let backoff = Backoff::new();
            while !backoff.is_completed() {
                if is_cancelled() {
                    return Err(WaitError::Cancelled);
                }
                if let Some(item) = end.pop(&mut self.shared.lock()) {
                    return Ok(item);
                }
                backoff.snooze();
            }
        }

        let waiter = Arc::downgrade(&self.shared) as Weak<dyn Wake>;
        let _registration = cancel.map(|token| token.register(waiter));

        let mut ring = self.shared.lock();
        let mut parked = false;
        let result = 'wait: {
            for remaining in TimeoutIterator::new(timeout) {
                if is_cancelled() {
                    break 'wait Err(WaitError::Cancelled);
                }
                if let Some(item) = end.pop(&mut ring) {
                    break 'wait Ok(item);
                }
                if !parked {
                    tracing::trace!(?end, ?timeout, "waiting for handle");
                    parked = true;
                }
                ring = self.shared.wait(ring, remaining);
            }
            if is_cancelled() {
                Err(WaitError::Cancelled)
            } else {
                end.pop(&mut ring).ok_or(WaitError::TimedOut)
            }
        };

        if let Err(err) = result {
            tracing::debug!(?end, %err, "stopped waiting for handle");
            // A push may have notified this thread just before it gave up, pass the wakeup on.
            if !ring.is_empty() {
                self.shared.notify_one();
            }
        }
        result
    }

    /// Consumer wrapper that carries its own timeout and cancellation token.
    pub fn consumer(&self) -> BlockingCons<H> {
        BlockingCons::new(self.clone())
    }

    pub fn front(&self) -> Option<H> {
        self.shared.lock().front()
    }

    pub fn back(&self) -> Option<H> {
        self.shared.lock().back()
    }

    /// Handle at logical `index` counted from the front, `None` if out of range.
    pub fn get(&self, index: usize) -> Option<H> {
        self.shared.lock().get(index)
    }

    pub fn len(&self) -> usize {
        self.shared.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.shared.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.shared.lock().capacity()
    }

    pub fn min_capacity(&self) -> usize {
        self.shared.lock().min_capacity()
    }

    /// Copies all handles front to back.
    pub fn snapshot(&self) -> Vec<H> {
        self.shared.lock().iter().collect()
    }

    /// Removes and returns all handles front to back, keeping the capacity.
    pub fn drain(&self) -> Vec<H> {
        let mut ring = self.shared.lock();
        let items = ring.iter().collect();
        ring.clear();
        items
    }

    /// Removes all handles keeping the capacity.
    pub fn clear(&self) {
        self.shared.lock().clear();
    }

    /// See [`RingDeque::rotate`].
    pub fn rotate(&self, n: isize) {
        self.shared.lock().rotate(n);
    }

    /// See [`RingDeque::set_min_capacity`].
    pub fn set_min_capacity(&self, bits: u32) {
        self.shared.lock().set_min_capacity(bits);
    }

    /// See [`RingDeque::reserve`].
    pub fn reserve(&self, additional: usize) -> Result<(), ReserveError> {
        self.shared.lock().reserve(additional)
    }
}

impl<H: Handle + fmt::Debug> fmt::Debug for BlockingDeque<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BlockingDeque").field(&*self.shared.lock()).finish()
    }
}
