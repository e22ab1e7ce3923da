//! Stream generators.
//!
//! [`unfold`] is the universal corecursive generator: every infinite stream
//! in this module can be written as a one-line specialization of it, and the
//! [`unfolded`] submodule does exactly that. The top-level generators are the
//! hand-written recursive versions; both families produce the same elements.

use std::sync::Arc;

use super::{Element, Stream};
use crate::control::Thunk;

/// Creates a cell whose head and tail are computed on demand.
///
/// Equivalent to [`Stream::cons`].
///
/// # Examples
///
/// ```rust
/// use lazystate::stream::{Stream, cons};
///
/// let stream = cons(|| "first", Stream::empty);
/// assert_eq!(stream.to_vec(), vec!["first"]);
/// ```
pub fn cons<T, H, L>(head: H, tail: L) -> Stream<T>
where
    H: FnOnce() -> T + Send + 'static,
    L: FnOnce() -> Stream<T> + Send + 'static,
{
    Stream::cons(head, tail)
}

/// Builds a stream from a seed and a step function.
///
/// `step` is applied to the seed right away. If it returns `None` the stream
/// is empty; otherwise it yields the first element and the next seed, and the
/// rest of the stream is generated from that seed when the tail is forced.
///
/// # Examples
///
/// ```rust
/// use lazystate::stream::unfold;
///
/// let countdown = unfold(3, |n| if n == 0 { None } else { Some((n, n - 1)) });
/// assert_eq!(countdown.to_vec(), vec![3, 2, 1]);
/// ```
pub fn unfold<S, A, F>(seed: S, step: F) -> Stream<A>
where
    S: Send + 'static,
    A: Send + Sync + 'static,
    F: Fn(S) -> Option<(A, S)> + Send + Sync + 'static,
{
    unfold_shared(seed, Arc::new(step))
}

fn unfold_shared<S, A, F>(seed: S, step: Arc<F>) -> Stream<A>
where
    S: Send + 'static,
    A: Send + Sync + 'static,
    F: Fn(S) -> Option<(A, S)> + Send + Sync + 'static,
{
    match step(seed) {
        None => Stream::empty(),
        Some((value, next)) => Stream::from_thunks(
            Thunk::evaluated(value),
            Thunk::new(move || unfold_shared(next, step)),
        ),
    }
}

/// An infinite stream of `1`s.
///
/// # Examples
///
/// ```rust
/// use lazystate::stream::ones;
///
/// assert_eq!(ones().take(3).to_vec(), vec![1, 1, 1]);
/// ```
pub fn ones() -> Stream<i32> {
    Stream::cons(|| 1, ones)
}

/// An infinite stream repeating `value`.
///
/// # Examples
///
/// ```rust
/// use lazystate::stream::constant;
///
/// assert_eq!(constant('x').take(2).to_vec(), vec!['x', 'x']);
/// ```
pub fn constant<T: Element>(value: T) -> Stream<T> {
    let head = value.clone();
    Stream::cons(move || head, move || constant(value))
}

/// The integers `start, start + 1, start + 2, ...`, wrapping on overflow.
///
/// # Examples
///
/// ```rust
/// use lazystate::stream::from;
///
/// assert_eq!(from(5).take(3).to_vec(), vec![5, 6, 7]);
/// ```
pub fn from(start: i64) -> Stream<i64> {
    Stream::cons(move || start, move || from(start.wrapping_add(1)))
}

/// The Fibonacci numbers `0, 1, 1, 2, 3, 5, ...`, wrapping on overflow.
///
/// # Examples
///
/// ```rust
/// use lazystate::stream::fibs;
///
/// assert_eq!(fibs().take(7).to_vec(), vec![0, 1, 1, 2, 3, 5, 8]);
/// ```
pub fn fibs() -> Stream<u64> {
    fn go(current: u64, next: u64) -> Stream<u64> {
        Stream::cons(move || current, move || go(next, current.wrapping_add(next)))
    }
    go(0, 1)
}

/// The same generators as the parent module, each written as a single
/// [`unfold`].
///
/// # Examples
///
/// ```rust
/// use lazystate::stream::{fibs, unfolded};
///
/// assert_eq!(unfolded::fibs().take(10).to_vec(), fibs().take(10).to_vec());
/// ```
pub mod unfolded {
    use super::unfold;
    use crate::stream::{Element, Stream};

    /// An infinite stream of `1`s.
    pub fn ones() -> Stream<i32> {
        unfold((), |()| Some((1, ())))
    }

    /// An infinite stream repeating `value`.
    pub fn constant<T: Element>(value: T) -> Stream<T> {
        unfold(value, |value| Some((value.clone(), value)))
    }

    /// The integers from `start` upwards, wrapping on overflow.
    pub fn from(start: i64) -> Stream<i64> {
        unfold(start, |current| Some((current, current.wrapping_add(1))))
    }

    /// The Fibonacci numbers.
    pub fn fibs() -> Stream<u64> {
        unfold((0_u64, 1_u64), |(current, next)| {
            Some((current, (next, current.wrapping_add(next))))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_unfold_stops_when_step_returns_none() {
        let stream = unfold(0, |n| if n < 3 { Some((n, n + 1)) } else { None });
        assert_eq!(stream.to_vec(), vec![0, 1, 2]);
    }

    #[rstest]
    fn test_unfold_empty_when_first_step_is_none() {
        let stream: Stream<i32> = unfold((), |()| None);
        assert!(stream.is_empty());
    }

    #[rstest]
    fn test_from_wraps_on_overflow() {
        assert_eq!(from(i64::MAX).take(2).to_vec(), vec![i64::MAX, i64::MIN]);
    }

    #[rstest]
    #[case(0, vec![])]
    #[case(1, vec![0])]
    #[case(7, vec![0, 1, 1, 2, 3, 5, 8])]
    fn test_fibs_prefix(#[case] count: usize, #[case] expected: Vec<u64>) {
        assert_eq!(fibs().take(count).to_vec(), expected);
        assert_eq!(unfolded::fibs().take(count).to_vec(), expected);
    }
}
