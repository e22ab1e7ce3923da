//! Iteration over a stream.

use std::iter::FusedIterator;

use super::Stream;
use super::cell::Cursor;

/// An iterator that forces a stream one cell at a time.
///
/// The tail of the cell just yielded is only forced when the *next* element
/// is requested, so stopping early (`find`, `any`, `take`) never evaluates
/// more than the elements actually produced.
///
/// # Examples
///
/// ```rust
/// use lazystate::stream::Stream;
///
/// let mut iter = Stream::from_values([1, 2]).iter();
/// assert_eq!(iter.next(), Some(1));
/// assert_eq!(iter.next(), Some(2));
/// assert_eq!(iter.next(), None);
/// ```
pub struct Iter<T> {
    cursor: Cursor<T>,
}

impl<T> Iter<T> {
    pub(super) const fn new(stream: Stream<T>) -> Self {
        Self {
            cursor: Cursor::At(stream),
        }
    }
}

impl<T: Clone> Iterator for Iter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let cursor = std::mem::replace(&mut self.cursor, Cursor::At(Stream::empty()));
        let node = cursor.resolve().node.clone()?;
        let value = node.head.force().clone();
        self.cursor = Cursor::After(node);
        Some(value)
    }
}

impl<T: Clone> FusedIterator for Iter<T> {}
