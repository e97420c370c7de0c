use super::Observer;
use crate::ReserveError;

/// Inserting end of a deque.
///
/// Pushes never report that the deque is full. The buffer grows instead,
/// and the only possible error is failure to grow.
pub trait Producer: Observer {
    /// Appends an item to the back.
    fn push_back(&mut self, item: Self::Item) -> Result<(), ReserveError>;

    /// Prepends an item to the front.
    fn push_front(&mut self, item: Self::Item) -> Result<(), ReserveError>;

    /// Appends all items from an iterator to the back.
    ///
    /// Returns count of items been appended.
    /// Stops at the first failure, items pushed before it remain in the deque.
    fn push_iter<I: IntoIterator<Item = Self::Item>>(&mut self, iter: I) -> Result<usize, ReserveError> {
        let mut count = 0;
        for item in iter {
            self.push_back(item)?;
            count += 1;
        }
        Ok(count)
    }
}
