//! Combinators expressed purely through [`Stream::fold_right`].
//!
//! Each of these has a direct counterpart on [`Stream`] that is lazier at
//! construction time or stack safe on long runs; the versions here show that
//! `fold_right` alone is enough to express them. They still never force more
//! input than their result needs: `fold_right` hands the combining function
//! an unforced thunk for the rest, and these functions either drop it or
//! install it as the tail of the cell they build.
//!
//! Because `fold_right` forces the head of the first cell, building any of
//! these results forces one source head.

use std::sync::Arc;

use super::{Element, Stream};
use crate::control::Thunk;

impl<T: Element> Stream<T> {
    /// [`head_option`](Self::head_option) as a fold that ignores the rest.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazystate::stream::from;
    ///
    /// assert_eq!(from(3).head_option_via_fold(), Some(3));
    /// ```
    pub fn head_option_via_fold(&self) -> Option<T> {
        self.fold_right(None, |head, _| Some(head))
    }

    /// [`exists`](Self::exists) as a fold; recursion depth is the position
    /// of the first match.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazystate::stream::constant;
    ///
    /// assert!(constant(2).exists_via_fold(|x| *x == 2));
    /// ```
    pub fn exists_via_fold<P>(&self, predicate: P) -> bool
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.fold_right(false, move |head, rest| predicate(&head) || rest.into_inner())
    }

    /// [`take_while`](Self::take_while) as a fold.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazystate::stream::from;
    ///
    /// assert_eq!(from(1).take_while_via_fold(|n| *n <= 3).to_vec(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn take_while_via_fold<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.fold_right(Self::empty(), move |head, rest| {
            if predicate(&head) {
                Self::from_thunks(Thunk::evaluated(head), rest)
            } else {
                Self::empty()
            }
        })
    }

    /// [`map`](Self::map) as a fold. Mapped heads are still computed on
    /// demand.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazystate::stream::from;
    ///
    /// assert_eq!(from(1).map_via_fold(|n| n * n).take(3).to_vec(), vec![1, 4, 9]);
    /// ```
    #[must_use]
    pub fn map_via_fold<U, F>(&self, function: F) -> Stream<U>
    where
        U: Element,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        self.fold_right(Stream::empty(), move |head, rest| {
            let function = Arc::clone(&function);
            Stream::from_thunks(Thunk::new(move || function(head)), rest)
        })
    }

    /// [`filter`](Self::filter) as a fold. Each rejected element costs one
    /// level of recursion when the result is forced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazystate::stream::from;
    ///
    /// assert_eq!(from(1).filter_via_fold(|n| n % 2 == 0).take(3).to_vec(), vec![2, 4, 6]);
    /// ```
    #[must_use]
    pub fn filter_via_fold<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.fold_right(Self::empty(), move |head, rest| {
            if predicate(&head) {
                Self::from_thunks(Thunk::evaluated(head), rest)
            } else {
                rest.into_inner()
            }
        })
    }

    /// [`append`](Self::append) as a fold whose zero is `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazystate::stream::Stream;
    ///
    /// let joined = Stream::from_values([1]).append_via_fold(Stream::from_values([2, 3]));
    /// assert_eq!(joined.to_vec(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn append_via_fold(&self, other: Self) -> Self {
        self.fold_right(other, |head, rest| Self::from_thunks(Thunk::evaluated(head), rest))
    }

    /// Like a right fold, but returns the stream of every intermediate
    /// result, ending with `zero`.
    ///
    /// Forces the whole stream. Intermediate results are computed once, from
    /// the end backwards, in a loop.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazystate::stream::Stream;
    ///
    /// let sums = Stream::from_values([1, 2, 3]).scan_right(0, |value, sum| value + sum);
    /// assert_eq!(sums.to_vec(), vec![6, 5, 3, 0]);
    /// ```
    pub fn scan_right<B, F>(&self, zero: B, function: F) -> Stream<B>
    where
        B: Element,
        F: Fn(T, &B) -> B,
    {
        let mut accumulator = zero;
        let mut result = Stream::from_values([accumulator.clone()]);
        let mut values = self.to_vec();
        while let Some(value) = values.pop() {
            accumulator = function(value, &accumulator);
            result = Stream::from_thunks(
                Thunk::evaluated(accumulator.clone()),
                Thunk::evaluated(result),
            );
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_head_option_via_fold_on_empty() {
        assert_eq!(Stream::<i32>::empty().head_option_via_fold(), None);
    }

    #[rstest]
    fn test_take_while_via_fold_does_not_test_past_failure() {
        let stream = Stream::cons(|| 1, || Stream::cons(|| 5, || panic!("must not be reached")));
        assert_eq!(stream.take_while_via_fold(|n| *n < 3).to_vec(), vec![1]);
    }

    #[rstest]
    fn test_scan_right_on_empty_is_zero() {
        let sums = Stream::<i32>::empty().scan_right(0, |value, sum| value + sum);
        assert_eq!(sums.to_vec(), vec![0]);
    }
}
