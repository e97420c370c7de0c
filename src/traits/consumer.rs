use super::Observer;

/// Removing end of a deque.
pub trait Consumer: Observer {
    /// Removes the front item and returns it.
    ///
    /// Returns `None` if the deque is empty.
    fn pop_front(&mut self) -> Option<Self::Item>;

    /// Removes the back item and returns it.
    ///
    /// Returns `None` if the deque is empty.
    fn pop_back(&mut self) -> Option<Self::Item>;

    /// Returns an iterator that removes items one by one.
    ///
    /// Iterating forward pops from the front, iterating backward pops from the back.
    fn pop_iter(&mut self) -> PopIter<'_, Self> {
        PopIter { target: self }
    }

    /// Removes at most `count` items from the front.
    ///
    /// Returns the number of items removed.
    fn skip(&mut self, count: usize) -> usize {
        let mut removed = 0;
        while removed < count && self.pop_front().is_some() {
            removed += 1;
        }
        removed
    }
}

/// An iterator that removes items from the deque.
pub struct PopIter<'a, C: Consumer + ?Sized> {
    target: &'a mut C,
}

impl<C: Consumer + ?Sized> Iterator for PopIter<'_, C> {
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.target.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.target.len();
        (len, Some(len))
    }
}

impl<C: Consumer + ?Sized> DoubleEndedIterator for PopIter<'_, C> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.target.pop_back()
    }
}

impl<C: Consumer + ?Sized> ExactSizeIterator for PopIter<'_, C> {}
