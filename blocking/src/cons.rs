use crate::{BlockingDeque, CancelToken, WaitError};
use handle_deque::Handle;
use std::time::Duration;

/// Consumer side of a [`BlockingDeque`] with its own waiting policy.
///
/// Every blocking pop made through it uses the timeout and cancellation token set on it.
/// Handy for a worker thread that drains the queue until told to stop.
pub struct BlockingCons<H: Handle> {
    deque: BlockingDeque<H>,
    timeout: Option<Duration>,
    cancel: Option<CancelToken>,
}

impl<H: Handle + Send + 'static> BlockingCons<H> {
    pub fn new(deque: BlockingDeque<H>) -> Self {
        Self {
            deque,
            timeout: None,
            cancel: None,
        }
    }

    pub fn deque(&self) -> &BlockingDeque<H> {
        &self.deque
    }

    pub fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn set_cancel(&mut self, cancel: Option<CancelToken>) {
        self.cancel = cancel;
    }
    pub fn cancel(&self) -> Option<&CancelToken> {
        self.cancel.as_ref()
    }

    pub fn pop_front(&mut self) -> Result<H, WaitError> {
        self.deque.pop_front_wait(self.cancel.as_ref(), self.timeout)
    }

    pub fn pop_back(&mut self) -> Result<H, WaitError> {
        self.deque.pop_back_wait(self.cancel.as_ref(), self.timeout)
    }

    /// Iterator popping from the front until cancellation or timeout.
    ///
    /// The timeout applies to each item separately.
    pub fn pop_iter(&mut self) -> PopAllIter<'_, H> {
        PopAllIter { owner: self }
    }
}

pub struct PopAllIter<'a, H: Handle + Send + 'static> {
    owner: &'a mut BlockingCons<H>,
}

impl<H: Handle + Send + 'static> Iterator for PopAllIter<'_, H> {
    type Item = H;

    fn next(&mut self) -> Option<Self::Item> {
        self.owner.pop_front().ok()
    }
}
