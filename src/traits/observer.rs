use crate::Handle;

/// Read access to a deque.
///
/// Indices are logical: `0` is the front, `len() - 1` is the back, regardless of where the items
/// physically live in the ring.
/// Reads never fail. An empty deque or an out-of-range index gives `None`.
pub trait Observer {
    type Item: Handle;

    /// Number of slots currently allocated.
    fn capacity(&self) -> usize;

    /// Number of stored items.
    fn len(&self) -> usize;

    /// Item at logical `index`, `None` if `index >= len()`.
    fn get(&self, index: usize) -> Option<Self::Item>;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the next push will reallocate.
    #[inline]
    fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    #[inline]
    fn front(&self) -> Option<Self::Item> {
        self.get(0)
    }

    #[inline]
    fn back(&self) -> Option<Self::Item> {
        self.len().checked_sub(1).and_then(|index| self.get(index))
    }

    /// Same as [`Self::get`] but accepts signed indices. Negative indices give `None`.
    #[inline]
    fn at(&self, index: isize) -> Option<Self::Item> {
        usize::try_from(index).ok().and_then(|index| self.get(index))
    }

    /// Logical index of the first item from the front satisfying `pred`.
    fn position<F: FnMut(Self::Item) -> bool>(&self, mut pred: F) -> Option<usize> {
        (0..self.len()).find(|&index| self.get(index).is_some_and(&mut pred))
    }

    /// Logical index of the first item from the back satisfying `pred`.
    fn rposition<F: FnMut(Self::Item) -> bool>(&self, mut pred: F) -> Option<usize> {
        (0..self.len()).rev().find(|&index| self.get(index).is_some_and(&mut pred))
    }
}
