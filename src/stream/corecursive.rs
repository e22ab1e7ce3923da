//! Combinators built on [`unfold`].
//!
//! The seeds here are [`Cursor`]s rather than plain streams: a cursor that
//! points *after* a cell leaves that cell's tail unforced until the next
//! element is actually generated, which keeps these versions as lazy about
//! tails as their direct counterparts.

use super::cell::Cursor;
use super::{Element, Stream, unfold};

impl<T: Element> Stream<T> {
    /// [`map`](Self::map) written with [`unfold`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazystate::stream::from;
    ///
    /// assert_eq!(from(1).map_via_unfold(|n| n + 1).take(3).to_vec(), vec![2, 3, 4]);
    /// ```
    #[must_use]
    pub fn map_via_unfold<U, F>(&self, function: F) -> Stream<U>
    where
        U: Element,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        unfold(Cursor::At(self.clone()), move |cursor| {
            let node = cursor.resolve().node.clone()?;
            let value = function(node.head.force().clone());
            Some((value, Cursor::After(node)))
        })
    }

    /// [`take`](Self::take) written with [`unfold`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazystate::stream::ones;
    ///
    /// assert_eq!(ones().take_via_unfold(2).to_vec(), vec![1, 1]);
    /// ```
    #[must_use]
    pub fn take_via_unfold(&self, count: usize) -> Self {
        unfold((Cursor::At(self.clone()), count), |(cursor, remaining)| {
            if remaining == 0 {
                return None;
            }
            let node = cursor.resolve().node.clone()?;
            let value = node.head.force().clone();
            Some((value, (Cursor::After(node), remaining - 1)))
        })
    }

    /// [`take_while`](Self::take_while) written with [`unfold`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazystate::stream::from;
    ///
    /// assert_eq!(from(1).take_while_via_unfold(|n| *n < 3).to_vec(), vec![1, 2]);
    /// ```
    #[must_use]
    pub fn take_while_via_unfold<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        unfold(Cursor::At(self.clone()), move |cursor| {
            let node = cursor.resolve().node.clone()?;
            let value = node.head.force().clone();
            predicate(&value).then(|| (value, Cursor::After(node)))
        })
    }

    /// [`zip_with`](Self::zip_with) written with [`unfold`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazystate::stream::{ones, from};
    ///
    /// let stream = from(0).zip_with_via_unfold(&ones(), |a, b| a * i64::from(b));
    /// assert_eq!(stream.take(3).to_vec(), vec![0, 1, 2]);
    /// ```
    pub fn zip_with_via_unfold<U, V, F>(&self, other: &Stream<U>, function: F) -> Stream<V>
    where
        U: Element,
        V: Element,
        F: Fn(T, U) -> V + Send + Sync + 'static,
    {
        let seed = (Cursor::At(self.clone()), Cursor::At(other.clone()));
        unfold(seed, move |(left, right)| {
            let left = left.resolve().node.clone()?;
            let right = right.resolve().node.clone()?;
            let value = function(left.head.force().clone(), right.head.force().clone());
            Some((value, (Cursor::After(left), Cursor::After(right))))
        })
    }

    /// Pairs two streams element-wise for as long as *either* has elements,
    /// padding the exhausted side with `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazystate::stream::Stream;
    ///
    /// let pairs = Stream::from_values([1, 2]).zip_all(&Stream::from_values(['a']));
    /// assert_eq!(pairs.to_vec(), vec![(Some(1), Some('a')), (Some(2), None)]);
    /// ```
    pub fn zip_all<U: Element>(&self, other: &Stream<U>) -> Stream<(Option<T>, Option<U>)> {
        let seed = (Cursor::At(self.clone()), Cursor::At(other.clone()));
        unfold(seed, |(left, right)| {
            let left = left.resolve().node.clone();
            let right = right.resolve().node.clone();
            if left.is_none() && right.is_none() {
                return None;
            }
            let value = (
                left.as_ref().map(|node| node.head.force().clone()),
                right.as_ref().map(|node| node.head.force().clone()),
            );
            let next_left = left.map_or(Cursor::At(Stream::empty()), Cursor::After);
            let next_right = right.map_or(Cursor::At(Stream::empty()), Cursor::After);
            Some((value, (next_left, next_right)))
        })
    }

    /// Returns `true` if `prefix` is a prefix of this stream.
    ///
    /// Stops at the first mismatch or at the end of `prefix`, so it works on
    /// an infinite stream as long as `prefix` is finite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazystate::stream::{Stream, from};
    ///
    /// assert!(from(1).starts_with(&Stream::from_values([1, 2, 3])));
    /// assert!(!from(1).starts_with(&Stream::from_values([2])));
    /// ```
    pub fn starts_with(&self, prefix: &Self) -> bool
    where
        T: PartialEq,
    {
        self.zip_all(prefix)
            .take_while(|(_, expected)| expected.is_some())
            .for_all(|(actual, expected)| actual == expected)
    }

    /// Returns every suffix of this stream, starting with the stream itself
    /// and ending with the empty stream.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazystate::stream::Stream;
    ///
    /// let suffixes: Vec<Vec<i32>> = Stream::from_values([1, 2])
    ///     .tails()
    ///     .iter()
    ///     .map(|tail| tail.to_vec())
    ///     .collect();
    /// assert_eq!(suffixes, vec![vec![1, 2], vec![2], vec![]]);
    /// ```
    pub fn tails(&self) -> Stream<Self> {
        unfold(Some(self.clone()), |current: Option<Self>| {
            let stream = current?;
            if stream.is_empty() {
                return Some((stream, None));
            }
            let rest = stream.drop_first(1);
            Some((stream, Some(rest)))
        })
    }

    /// Returns `true` if `subsequence` occurs contiguously in this stream.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazystate::stream::{Stream, from};
    ///
    /// assert!(from(0).has_subsequence(&Stream::from_values([4, 5, 6])));
    /// ```
    pub fn has_subsequence(&self, subsequence: &Self) -> bool
    where
        T: PartialEq,
    {
        self.tails().exists(|tail| tail.starts_with(subsequence))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::from;
    use rstest::rstest;

    #[rstest]
    fn test_take_via_unfold_does_not_force_tail_past_count() {
        let stream = Stream::cons(|| 1, || panic!("tail must stay unevaluated"));
        assert_eq!(stream.take_via_unfold(1).to_vec(), vec![1]);
    }

    #[rstest]
    fn test_zip_with_via_unfold_stops_at_shorter() {
        let zipped = from(0).zip_with_via_unfold(&Stream::from_values([10, 20]), |a, b| a + b);
        assert_eq!(zipped.to_vec(), vec![10, 21]);
    }

    #[rstest]
    fn test_starts_with_empty_prefix() {
        assert!(from(0).starts_with(&Stream::empty()));
    }

    #[rstest]
    fn test_starts_with_longer_prefix_is_false() {
        let stream = Stream::from_values([1, 2]);
        assert!(!stream.starts_with(&Stream::from_values([1, 2, 3])));
    }

    #[rstest]
    fn test_has_subsequence_on_finite_stream() {
        let stream = Stream::from_values([1, 2, 3, 4]);
        assert!(stream.has_subsequence(&Stream::from_values([2, 3])));
        assert!(!stream.has_subsequence(&Stream::from_values([3, 2])));
        assert!(stream.has_subsequence(&Stream::empty()));
    }
}
