use crate::{Handle, ReserveError};
use alloc::{boxed::Box, vec, vec::Vec};
use core::{mem, ops::Range};

/// Physical ranges occupied by `count` items starting at slot `head`.
///
/// The second range is empty unless the items wrap around the end of the buffer.
pub(crate) fn ranges(capacity: usize, head: usize, count: usize) -> (Range<usize>, Range<usize>) {
    debug_assert!(capacity.is_power_of_two());
    debug_assert!(head < capacity && count <= capacity);

    let end = head + count;
    if end <= capacity {
        (head..end, 0..0)
    } else {
        (head..capacity, 0..(end - capacity))
    }
}

/// Contiguous power-of-two sized array of handle slots.
///
/// Slots that hold no live handle contain [`Handle::NULL`].
#[derive(Clone)]
pub(crate) struct Slots<H: Handle> {
    slots: Box<[H]>,
}

impl<H: Handle> Slots<H> {
    /// Allocates `capacity` null slots, aborting on allocation failure like [`Vec`] does.
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity.is_power_of_two());
        Self {
            slots: vec![H::NULL; capacity].into_boxed_slice(),
        }
    }

    /// Allocates `capacity` null slots.
    ///
    /// Allocation failure is reported rather than aborting the process.
    pub fn alloc(capacity: usize) -> Result<Self, ReserveError> {
        debug_assert!(capacity.is_power_of_two());
        let mut vec = Vec::new();
        vec.try_reserve_exact(capacity)
            .map_err(|_| ReserveError::AllocFailed { capacity })?;
        vec.resize(capacity, H::NULL);
        Ok(Self {
            slots: vec.into_boxed_slice(),
        })
    }

    /// Copies `count` items starting at `head` into a new buffer of `capacity` slots, starting at slot zero.
    pub fn relocate(&self, head: usize, count: usize, capacity: usize) -> Result<Self, ReserveError> {
        debug_assert!(count <= capacity);
        let mut new = Self::alloc(capacity)?;
        let (first, second) = self.as_slices(head, count);
        new.slots[..first.len()].copy_from_slice(first);
        new.slots[first.len()..count].copy_from_slice(second);
        Ok(new)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn mask(&self) -> usize {
        self.slots.len() - 1
    }

    #[inline]
    pub fn get(&self, index: usize) -> H {
        self.slots[index]
    }

    #[inline]
    pub fn replace(&mut self, index: usize, handle: H) -> H {
        mem::replace(&mut self.slots[index], handle)
    }

    /// Moves the handle out of the slot, leaving it null.
    #[inline]
    pub fn take(&mut self, index: usize) -> H {
        self.replace(index, H::NULL)
    }

    pub fn as_slices(&self, head: usize, count: usize) -> (&[H], &[H]) {
        let (first, second) = ranges(self.len(), head, count);
        (&self.slots[first], &self.slots[second])
    }

    /// Nulls `count` slots starting at `head`.
    pub fn clear(&mut self, head: usize, count: usize) {
        let (first, second) = ranges(self.len(), head, count);
        self.slots[first].fill(H::NULL);
        self.slots[second].fill(H::NULL);
    }
}
