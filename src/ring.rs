use crate::{
    config::min_capacity_from_bits,
    storage::Slots,
    traits::{Consumer, Observer, Producer},
    Config, Handle, ReserveError, MIN_CAPACITY,
};
use core::{fmt, iter::FusedIterator, slice};

/// Growable double-ended queue of handles stored in a single power-of-two ring.
///
/// # Details
///
/// The ring consists of a buffer and three counters: `head` is the slot of the front item,
/// `tail` is the slot the next item pushed to the back goes to, `count` is the number of items.
/// `head == tail` means either empty or full, `count` tells which.
///
/// Capacity is always a power of two, so logical index `i` maps to slot `(head + i) & (capacity - 1)`.
///
/// A push into a full ring doubles the buffer. A pop that leaves the ring exactly one quarter full halves it,
/// unless it is already at its minimal capacity. Since the ring is half full right after either reallocation,
/// occupancy oscillating around a boundary does not cause repeated reallocation.
///
/// Vacated slots are overwritten with [`Handle::NULL`].
#[derive(Clone)]
pub struct RingDeque<H: Handle> {
    buffer: Slots<H>,
    head: usize,
    tail: usize,
    count: usize,
    min_capacity: usize,
}

impl<H: Handle> RingDeque<H> {
    /// Creates an empty deque.
    ///
    /// `capacity` is rounded up to a power of two not less than [`MIN_CAPACITY`].
    pub fn new(capacity: usize) -> Self {
        Self::with_config(Config::new().with_initial_capacity(capacity))
    }

    pub fn with_config(config: Config) -> Self {
        Self::from_buffer(Slots::new(config.initial_capacity()), config.min_capacity())
    }

    /// Same as [`Self::with_config`] but reports allocation failure instead of aborting.
    pub fn try_with_config(config: Config) -> Result<Self, ReserveError> {
        Ok(Self::from_buffer(
            Slots::alloc(config.initial_capacity())?,
            config.min_capacity(),
        ))
    }

    fn from_buffer(buffer: Slots<H>, min_capacity: usize) -> Self {
        Self {
            buffer,
            head: 0,
            tail: 0,
            count: 0,
            min_capacity,
        }
    }

    /// Capacity below which the ring never shrinks.
    pub fn min_capacity(&self) -> usize {
        self.min_capacity
    }

    /// Sets the shrink floor to `max(2^bits, MIN_CAPACITY)`.
    ///
    /// The buffer is not reallocated right away, the new floor only affects subsequent shrinking.
    pub fn set_min_capacity(&mut self, bits: u32) {
        self.min_capacity = min_capacity_from_bits(bits);
        tracing::debug!(min_capacity = self.min_capacity, capacity = self.capacity(), "set ring min capacity");
    }

    /// Removes all items keeping the capacity.
    pub fn clear(&mut self) {
        self.buffer.clear(self.head, self.count);
        self.head = 0;
        self.tail = 0;
        self.count = 0;
    }

    /// Replaces the item at logical `index` and returns the old one.
    ///
    /// Returns `None` and leaves the deque untouched if `index >= len()`.
    pub fn set(&mut self, index: usize, item: H) -> Option<H> {
        if index < self.count {
            let slot = self.wrap(self.head + index);
            Some(self.buffer.replace(slot, item))
        } else {
            None
        }
    }

    /// Rotates the deque `n` steps front-to-back, or back-to-front if `n` is negative.
    ///
    /// Same result as `n` pairs of `pop_front` and `push_back`, but performed in place without reallocation.
    /// At most `count / 2` items are moved.
    pub fn rotate(&mut self, n: isize) {
        let count = self.count;
        if count <= 1 {
            return;
        }
        let rem = n.unsigned_abs() % count;
        let forward = if n < 0 && rem != 0 { count - rem } else { rem };
        if forward == 0 {
            return;
        }

        // Full ring has no gap between tail and head, so moving the origin is enough.
        if count == self.capacity() {
            self.head = self.wrap(self.head + forward);
            self.tail = self.head;
            return;
        }

        if forward <= count - forward {
            for _ in 0..forward {
                let item = self.buffer.take(self.head);
                self.buffer.replace(self.tail, item);
                self.head = self.next(self.head);
                self.tail = self.next(self.tail);
            }
        } else {
            for _ in 0..(count - forward) {
                self.head = self.prev(self.head);
                self.tail = self.prev(self.tail);
                let item = self.buffer.take(self.tail);
                self.buffer.replace(self.head, item);
            }
        }
    }

    /// Makes room for at least `additional` more items without further reallocation.
    pub fn reserve(&mut self, additional: usize) -> Result<(), ReserveError> {
        let required = self
            .count
            .checked_add(additional)
            .ok_or(ReserveError::CapacityOverflow)?;
        if required <= self.capacity() {
            return Ok(());
        }
        let capacity = required
            .checked_next_power_of_two()
            .ok_or(ReserveError::CapacityOverflow)?;
        self.resize(capacity)
    }

    /// Returns a pair of slices which contain, in order, the contents of the deque.
    pub fn as_slices(&self) -> (&[H], &[H]) {
        self.buffer.as_slices(self.head, self.count)
    }

    /// Iterates over the items from front to back.
    pub fn iter(&self) -> Iter<'_, H> {
        let (first, second) = self.as_slices();
        Iter {
            first: first.iter(),
            second: second.iter(),
        }
    }

    #[inline]
    fn wrap(&self, index: usize) -> usize {
        index & self.buffer.mask()
    }

    #[inline]
    fn next(&self, index: usize) -> usize {
        self.wrap(index + 1)
    }

    #[inline]
    fn prev(&self, index: usize) -> usize {
        self.wrap(index.wrapping_sub(1))
    }

    fn grow_if_full(&mut self) -> Result<(), ReserveError> {
        if self.count < self.capacity() {
            return Ok(());
        }
        let capacity = self
            .capacity()
            .checked_mul(2)
            .ok_or(ReserveError::CapacityOverflow)?;
        self.resize(capacity)
    }

    fn shrink_if_sparse(&mut self) {
        let capacity = self.capacity();
        if capacity > self.min_capacity && self.count == capacity / 4 {
            // The ring stays valid at its current size, so a failed shrink is not an error.
            if let Err(err) = self.resize(capacity / 2) {
                tracing::debug!(%err, capacity, len = self.count, "ring shrink skipped");
            }
        }
    }

    /// Moves the items into a new buffer of `capacity` slots starting at slot zero.
    fn resize(&mut self, capacity: usize) -> Result<(), ReserveError> {
        debug_assert!(capacity.is_power_of_two() && capacity >= MIN_CAPACITY);
        debug_assert!(capacity >= self.count);
        let buffer = self.buffer.relocate(self.head, self.count, capacity)?;
        tracing::trace!(from = self.capacity(), to = capacity, len = self.count, "resized ring");
        self.buffer = buffer;
        self.head = 0;
        self.tail = self.wrap(self.count);
        Ok(())
    }
}

#[cfg(test)]
impl<H: Handle + PartialEq + fmt::Debug> RingDeque<H> {
    /// Panics if the ring bookkeeping is inconsistent or a vacant slot is not null.
    pub(crate) fn assert_invariants(&self) {
        let capacity = self.capacity();
        assert!(capacity.is_power_of_two());
        assert!(capacity >= MIN_CAPACITY);
        assert!(self.count <= capacity);
        assert!(self.head < capacity);
        assert_eq!(self.tail, self.wrap(self.head + self.count));
        for index in self.count..capacity {
            assert_eq!(self.buffer.get(self.wrap(self.head + index)), H::NULL);
        }
    }
}

impl<H: Handle> Default for RingDeque<H> {
    fn default() -> Self {
        Self::new(MIN_CAPACITY)
    }
}

impl<H: Handle> Observer for RingDeque<H> {
    type Item = H;

    #[inline]
    fn capacity(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    fn len(&self) -> usize {
        self.count
    }

    #[inline]
    fn get(&self, index: usize) -> Option<H> {
        if index < self.count {
            Some(self.buffer.get(self.wrap(self.head + index)))
        } else {
            None
        }
    }
}

impl<H: Handle> Producer for RingDeque<H> {
    fn push_back(&mut self, item: H) -> Result<(), ReserveError> {
        self.grow_if_full()?;
        self.buffer.replace(self.tail, item);
        self.tail = self.next(self.tail);
        self.count += 1;
        Ok(())
    }

    fn push_front(&mut self, item: H) -> Result<(), ReserveError> {
        self.grow_if_full()?;
        self.head = self.prev(self.head);
        self.buffer.replace(self.head, item);
        self.count += 1;
        Ok(())
    }
}

impl<H: Handle> Consumer for RingDeque<H> {
    fn pop_front(&mut self) -> Option<H> {
        if self.count == 0 {
            return None;
        }
        let item = self.buffer.take(self.head);
        self.head = self.next(self.head);
        self.count -= 1;
        self.shrink_if_sparse();
        Some(item)
    }

    fn pop_back(&mut self) -> Option<H> {
        if self.count == 0 {
            return None;
        }
        self.tail = self.prev(self.tail);
        let item = self.buffer.take(self.tail);
        self.count -= 1;
        self.shrink_if_sparse();
        Some(item)
    }
}

impl<H: Handle + fmt::Debug> fmt::Debug for RingDeque<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, H: Handle> IntoIterator for &'a RingDeque<H> {
    type Item = H;
    type IntoIter = Iter<'a, H>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Front-to-back iterator over the items of a [`RingDeque`].
#[derive(Clone)]
pub struct Iter<'a, H: Handle> {
    first: slice::Iter<'a, H>,
    second: slice::Iter<'a, H>,
}

impl<H: Handle> Iterator for Iter<'_, H> {
    type Item = H;

    #[inline]
    fn next(&mut self) -> Option<H> {
        self.first.next().or_else(|| self.second.next()).copied()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.first.len() + self.second.len();
        (len, Some(len))
    }
}

impl<H: Handle> DoubleEndedIterator for Iter<'_, H> {
    #[inline]
    fn next_back(&mut self) -> Option<H> {
        self.second.next_back().or_else(|| self.first.next_back()).copied()
    }
}

impl<H: Handle> ExactSizeIterator for Iter<'_, H> {}

impl<H: Handle> FusedIterator for Iter<'_, H> {}
