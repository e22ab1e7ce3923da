//! The stream cell and its direct combinators.

use std::fmt;
use std::iter::FromIterator;
use std::sync::Arc;

use super::Element;
use super::iter::Iter;
use crate::control::Thunk;

/// A non-empty stream cell.
///
/// The head sits behind its own `Arc` so that derived streams (`take`,
/// `append`, `filter`, ...) can share the very same thunk with their source.
pub(super) struct Node<T> {
    pub(super) head: Arc<Thunk<T>>,
    pub(super) tail: Thunk<Stream<T>>,
}

/// Position inside a stream that has not forced the next tail yet.
///
/// `After(node)` stands for "whatever follows `node`", so consumers can step
/// past a cell without evaluating its tail until they actually need it.
pub(super) enum Cursor<T> {
    At(Stream<T>),
    After(Arc<Node<T>>),
}

impl<T> Cursor<T> {
    pub(super) fn resolve(self) -> Stream<T> {
        match self {
            Self::At(stream) => stream,
            Self::After(node) => node.tail.force().clone(),
        }
    }
}

/// A lazy, memoized, possibly infinite sequence.
///
/// A stream is either empty or a cell holding a deferred head and a deferred
/// tail. Cells are reference counted: cloning a stream is O(1) and every
/// combinator shares the cells it does not change.
///
/// # Time Complexity
///
/// | Operation     | Complexity                       |
/// |---------------|----------------------------------|
/// | `empty`       | O(1)                             |
/// | `from_thunks` | O(1), evaluates nothing          |
/// | `head_option` | O(1) plus the head computation   |
/// | `take`        | O(1), lazy                       |
/// | `drop_first`  | O(n) tail evaluations, no heads  |
/// | `to_vec`      | O(n), stack safe                 |
///
/// # Examples
///
/// ```rust
/// use lazystate::stream::Stream;
///
/// let stream = Stream::from_values([1, 2, 3]);
/// assert_eq!(stream.head_option(), Some(1));
/// assert_eq!(stream.drop_first(1).to_vec(), vec![2, 3]);
///
/// // The original is unchanged
/// assert_eq!(stream.to_vec(), vec![1, 2, 3]);
/// ```
pub struct Stream<T> {
    pub(super) node: Option<Arc<Node<T>>>,
}

impl<T> Stream<T> {
    /// Creates an empty stream.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazystate::stream::Stream;
    ///
    /// let stream: Stream<i32> = Stream::empty();
    /// assert!(stream.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self { node: None }
    }

    /// Creates a cell from an already-built head thunk and tail thunk.
    ///
    /// Neither thunk is forced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazystate::control::Thunk;
    /// use lazystate::stream::Stream;
    ///
    /// let stream = Stream::from_thunks(
    ///     Thunk::new(|| 1),
    ///     Thunk::new(|| Stream::from_values([2])),
    /// );
    /// assert_eq!(stream.to_vec(), vec![1, 2]);
    /// ```
    pub fn from_thunks(head: Thunk<T>, tail: Thunk<Self>) -> Self {
        Self::with_shared_head(Arc::new(head), tail)
    }

    pub(super) fn with_shared_head(head: Arc<Thunk<T>>, tail: Thunk<Self>) -> Self {
        Self {
            node: Some(Arc::new(Node { head, tail })),
        }
    }

    /// Creates a cell whose head and tail are computed on demand.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazystate::stream::Stream;
    ///
    /// let stream = Stream::cons(|| 1, || Stream::cons(|| 2, Stream::empty));
    /// assert_eq!(stream.to_vec(), vec![1, 2]);
    /// ```
    pub fn cons<H, L>(head: H, tail: L) -> Self
    where
        H: FnOnce() -> T + Send + 'static,
        L: FnOnce() -> Self + Send + 'static,
    {
        Self::from_thunks(Thunk::new(head), Thunk::new(tail))
    }

    /// Builds a finite stream from already-computed values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazystate::stream::Stream;
    ///
    /// let stream = Stream::from_values(vec!["a", "b"]);
    /// assert_eq!(stream.to_vec(), vec!["a", "b"]);
    /// ```
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut values: Vec<T> = values.into_iter().collect();
        let mut stream = Self::empty();
        while let Some(value) = values.pop() {
            stream = Self::from_thunks(Thunk::evaluated(value), Thunk::evaluated(stream));
        }
        stream
    }

    /// Returns `true` if the stream has no cells.
    ///
    /// This never forces anything.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.node.is_none()
    }

    /// Returns the head and tail thunks of a non-empty stream, unforced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazystate::stream::Stream;
    ///
    /// let stream = Stream::cons(|| 1, Stream::empty);
    /// let (head, tail) = stream.uncons().unwrap();
    /// assert!(!head.is_evaluated());
    /// assert_eq!(*head.force(), 1);
    /// assert!(tail.force().is_empty());
    /// ```
    pub fn uncons(&self) -> Option<(&Thunk<T>, &Thunk<Self>)> {
        self.node.as_ref().map(|node| (node.head.as_ref(), &node.tail))
    }

    /// Skips the first `count` cells.
    ///
    /// Only tail thunks are forced along the way; the skipped heads are never
    /// evaluated. Runs in a loop, so `count` is not limited by stack depth.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazystate::stream::from;
    ///
    /// assert_eq!(from(0).drop_first(100_000).head_option(), Some(100_000));
    /// ```
    #[must_use]
    pub fn drop_first(&self, count: usize) -> Self {
        let mut current = self.clone();
        for _ in 0..count {
            let next = match &current.node {
                Some(node) => node.tail.force().clone(),
                None => break,
            };
            current = next;
        }
        current
    }

    /// Returns at most the first `count` cells.
    ///
    /// The result is built lazily: nothing is forced here, and traversing the
    /// result never touches the source beyond position `count - 1`. The
    /// `count`-th cell ends with a ready-made empty tail, so the source tail
    /// after it is never evaluated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazystate::stream::ones;
    ///
    /// assert_eq!(ones().take(3).to_vec(), vec![1, 1, 1]);
    /// assert!(ones().take(0).is_empty());
    /// ```
    #[must_use]
    pub fn take(&self, count: usize) -> Self
    where
        T: Send + Sync + 'static,
    {
        match &self.node {
            Some(node) if count > 0 => {
                let head = Arc::clone(&node.head);
                if count == 1 {
                    return Self::with_shared_head(head, Thunk::evaluated(Self::empty()));
                }
                let node = Arc::clone(node);
                Self::with_shared_head(head, Thunk::new(move || node.tail.force().take(count - 1)))
            }
            _ => Self::empty(),
        }
    }

    /// Appends `other` after the last cell of this stream.
    ///
    /// Neither stream is forced. If this stream is infinite, `other` is never
    /// reached.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazystate::stream::Stream;
    ///
    /// let joined = Stream::from_values([1, 2]).append(Stream::from_values([3]));
    /// assert_eq!(joined.to_vec(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn append(&self, other: Self) -> Self
    where
        T: Send + Sync + 'static,
    {
        append_deferred(self, Arc::new(Thunk::evaluated(other)))
    }

    /// Appends a stream that is only built once this one is exhausted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazystate::stream::{Stream, from};
    ///
    /// let stream = Stream::from_values([0]).append_with(|| from(10));
    /// assert_eq!(stream.take(3).to_vec(), vec![0, 10, 11]);
    /// ```
    #[must_use]
    pub fn append_with<F>(&self, other: F) -> Self
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> Self + Send + 'static,
    {
        append_deferred(self, Arc::new(Thunk::new(other)))
    }

    /// Returns an iterator that forces the stream cell by cell.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazystate::stream::from;
    ///
    /// let total: i64 = from(1).take(4).iter().sum();
    /// assert_eq!(total, 10);
    /// ```
    pub fn iter(&self) -> Iter<T> {
        Iter::new(self.clone())
    }
}

impl<T: Element> Stream<T> {
    /// Returns the first element, forcing only the head thunk.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazystate::stream::Stream;
    ///
    /// assert_eq!(Stream::from_values([7, 8]).head_option(), Some(7));
    /// assert_eq!(Stream::<i32>::empty().head_option(), None);
    /// ```
    pub fn head_option(&self) -> Option<T> {
        self.node.as_ref().map(|node| node.head.force().clone())
    }

    /// Forces every cell and collects the elements in order.
    ///
    /// Does not terminate on an infinite stream; bound it with
    /// [`take`](Self::take) or [`take_while`](Self::take_while) first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazystate::stream::fibs;
    ///
    /// assert_eq!(fibs().take(7).to_vec(), vec![0, 1, 1, 2, 3, 5, 8]);
    /// ```
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// Returns the longest prefix whose elements satisfy `predicate`.
    ///
    /// The first element is tested now; every later one only when the
    /// result is traversed that far. `predicate` is never applied past the
    /// first element that fails it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazystate::stream::from;
    ///
    /// assert_eq!(from(1).take_while(|n| *n < 4).to_vec(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn take_while<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        take_while_shared(self, &Arc::new(predicate))
    }

    /// Right-associative fold, the universal eliminator.
    ///
    /// `combine` receives the forced head and an *unforced* thunk holding the
    /// fold of the tail. A combining function that does not force that thunk
    /// stops the traversal, which is what makes short-circuiting folds work
    /// on infinite streams.
    ///
    /// Every forced thunk costs one level of recursion, so a fold that forces
    /// all of a long stream is limited by stack depth; prefer
    /// [`to_vec`](Self::to_vec) or [`iter`](Self::iter) for full traversals.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazystate::stream::{Stream, from};
    ///
    /// let sum = Stream::from_values([1, 2, 3]).fold_right(0, |head, rest| head + rest.into_inner());
    /// assert_eq!(sum, 6);
    ///
    /// // Stops as soon as the answer is known, even on an infinite stream
    /// let found = from(1).fold_right(false, |head, rest| head == 5 || rest.into_inner());
    /// assert!(found);
    /// ```
    pub fn fold_right<B, F>(&self, zero: B, combine: F) -> B
    where
        B: Send + 'static,
        F: Fn(T, Thunk<B>) -> B + Send + Sync + 'static,
    {
        fold_right_shared(self.clone(), zero, Arc::new(combine))
    }

    /// Returns `true` if any element satisfies `predicate`.
    ///
    /// Stops at the first match and runs in a loop, so it terminates on an
    /// infinite stream whenever a match exists.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazystate::stream::constant;
    ///
    /// assert!(constant(2).exists(|x| *x == 2));
    /// ```
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        self.iter().any(|element| predicate(&element))
    }

    /// Returns `true` if every element satisfies `predicate`.
    ///
    /// Stops at the first failure and runs in a loop, so it is stack safe on
    /// long streams and terminates on an infinite stream whenever a failing
    /// element exists.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazystate::stream::from;
    ///
    /// assert!(!from(0).for_all(|n| *n < 10));
    /// assert!(from(0).take(10).for_all(|n| *n < 10));
    /// ```
    pub fn for_all<P>(&self, predicate: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        self.iter().all(|element| predicate(&element))
    }

    /// Returns the first element satisfying `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazystate::stream::from;
    ///
    /// assert_eq!(from(1).find(|n| n % 7 == 0), Some(7));
    /// ```
    pub fn find<P>(&self, predicate: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        self.iter().find(|element| predicate(element))
    }

    /// Applies `function` to every element, lazily.
    ///
    /// Nothing is forced when the mapped stream is built; each mapped head
    /// forces the matching source head when it is demanded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazystate::stream::from;
    ///
    /// assert_eq!(from(1).map(|n| n * 10).take(3).to_vec(), vec![10, 20, 30]);
    /// ```
    #[must_use]
    pub fn map<U, F>(&self, function: F) -> Stream<U>
    where
        U: Element,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        map_shared(self, &Arc::new(function))
    }

    /// Keeps the elements satisfying `predicate`.
    ///
    /// Rejected elements are skipped in a loop, up to the first accepted one;
    /// later elements are examined only when the result is traversed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazystate::stream::from;
    ///
    /// assert_eq!(from(1).filter(|n| n % 3 == 0).take(3).to_vec(), vec![3, 6, 9]);
    /// ```
    #[must_use]
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        filter_shared(self, &Arc::new(predicate))
    }

    /// Maps every element to a stream and concatenates the results lazily.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazystate::stream::{Stream, from};
    ///
    /// let pairs = from(1).flat_map(|n| Stream::from_values([n, -n]));
    /// assert_eq!(pairs.take(4).to_vec(), vec![1, -1, 2, -2]);
    /// ```
    #[must_use]
    pub fn flat_map<U, F>(&self, function: F) -> Stream<U>
    where
        U: Element,
        F: Fn(T) -> Stream<U> + Send + Sync + 'static,
    {
        flat_map_shared(self.clone(), Arc::new(function))
    }

    /// Combines two streams element-wise, stopping at the shorter one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazystate::stream::{Stream, from};
    ///
    /// let sums = from(1).zip_with(&Stream::from_values([10, 20]), |a, b| a + b);
    /// assert_eq!(sums.to_vec(), vec![11, 22]);
    /// ```
    pub fn zip_with<U, V, F>(&self, other: &Stream<U>, function: F) -> Stream<V>
    where
        U: Element,
        V: Element,
        F: Fn(T, U) -> V + Send + Sync + 'static,
    {
        zip_with_shared(self, other, &Arc::new(function))
    }

    /// Pairs two streams element-wise, stopping at the shorter one.
    pub fn zip<U: Element>(&self, other: &Stream<U>) -> Stream<(T, U)> {
        self.zip_with(other, |left, right| (left, right))
    }
}

fn take_while_shared<T, P>(stream: &Stream<T>, predicate: &Arc<P>) -> Stream<T>
where
    T: Element,
    P: Fn(&T) -> bool + Send + Sync + 'static,
{
    match &stream.node {
        Some(node) if predicate(node.head.force()) => {
            let head = Arc::clone(&node.head);
            let node = Arc::clone(node);
            let predicate = Arc::clone(predicate);
            Stream::with_shared_head(
                head,
                Thunk::new(move || take_while_shared(node.tail.force(), &predicate)),
            )
        }
        _ => Stream::empty(),
    }
}

fn fold_right_shared<T, B, F>(stream: Stream<T>, zero: B, combine: Arc<F>) -> B
where
    T: Element,
    B: Send + 'static,
    F: Fn(T, Thunk<B>) -> B + Send + Sync + 'static,
{
    let Some(node) = stream.node.clone() else {
        return zero;
    };
    let head = node.head.force().clone();
    let rest_combine = Arc::clone(&combine);
    let rest = Thunk::new(move || fold_right_shared(node.tail.force().clone(), zero, rest_combine));
    combine(head, rest)
}

fn map_shared<T, U, F>(stream: &Stream<T>, function: &Arc<F>) -> Stream<U>
where
    T: Element,
    U: Element,
    F: Fn(T) -> U + Send + Sync + 'static,
{
    let Some(node) = &stream.node else {
        return Stream::empty();
    };
    let source_head = Arc::clone(&node.head);
    let head_function = Arc::clone(function);
    let node = Arc::clone(node);
    let tail_function = Arc::clone(function);
    Stream::cons(
        move || head_function(source_head.force().clone()),
        move || map_shared(node.tail.force(), &tail_function),
    )
}

fn filter_shared<T, P>(stream: &Stream<T>, predicate: &Arc<P>) -> Stream<T>
where
    T: Element,
    P: Fn(&T) -> bool + Send + Sync + 'static,
{
    let mut current = stream.clone();
    loop {
        let Some(node) = current.node.clone() else {
            return Stream::empty();
        };
        if predicate(node.head.force()) {
            let head = Arc::clone(&node.head);
            let predicate = Arc::clone(predicate);
            return Stream::with_shared_head(
                head,
                Thunk::new(move || filter_shared(node.tail.force(), &predicate)),
            );
        }
        current = node.tail.force().clone();
    }
}

fn append_deferred<T>(stream: &Stream<T>, other: Arc<Thunk<Stream<T>>>) -> Stream<T>
where
    T: Send + Sync + 'static,
{
    match &stream.node {
        None => other.force().clone(),
        Some(node) => {
            let head = Arc::clone(&node.head);
            let node = Arc::clone(node);
            Stream::with_shared_head(
                head,
                Thunk::new(move || append_deferred(node.tail.force(), other)),
            )
        }
    }
}

fn flat_map_shared<T, U, F>(stream: Stream<T>, function: Arc<F>) -> Stream<U>
where
    T: Element,
    U: Element,
    F: Fn(T) -> Stream<U> + Send + Sync + 'static,
{
    let mut current = stream;
    loop {
        let Some(node) = current.node.clone() else {
            return Stream::empty();
        };
        let inner = function(node.head.force().clone());
        if inner.is_empty() {
            current = node.tail.force().clone();
            continue;
        }
        return inner.append_with(move || flat_map_shared(node.tail.force().clone(), function));
    }
}

fn zip_with_shared<T, U, V, F>(left: &Stream<T>, right: &Stream<U>, function: &Arc<F>) -> Stream<V>
where
    T: Element,
    U: Element,
    V: Element,
    F: Fn(T, U) -> V + Send + Sync + 'static,
{
    let (Some(left_node), Some(right_node)) = (&left.node, &right.node) else {
        return Stream::empty();
    };
    let left_head = Arc::clone(&left_node.head);
    let right_head = Arc::clone(&right_node.head);
    let head_function = Arc::clone(function);
    let left_node = Arc::clone(left_node);
    let right_node = Arc::clone(right_node);
    let tail_function = Arc::clone(function);
    Stream::cons(
        move || head_function(left_head.force().clone(), right_head.force().clone()),
        move || zip_with_shared(left_node.tail.force(), right_node.tail.force(), &tail_function),
    )
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T> Clone for Stream<T> {
    fn clone(&self) -> Self {
        Self {
            node: self.node.clone(),
        }
    }
}

impl<T> Default for Stream<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Drop for Stream<T> {
    fn drop(&mut self) {
        // Unlink forced tails one cell at a time; the default recursive drop
        // would overflow the stack on long streams.
        let mut next = self.node.take();
        while let Some(node) = next {
            next = match Arc::try_unwrap(node) {
                Ok(mut node) => node.tail.take_value().and_then(|mut tail| tail.node.take()),
                Err(_) => None,
            };
        }
    }
}

impl<T> FromIterator<T> for Stream<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<T: Clone> IntoIterator for &Stream<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone> IntoIterator for Stream<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self)
    }
}

/// Shows the evaluated prefix only; formatting never forces a thunk.
///
/// An unevaluated head prints as `?` and an unevaluated tail as `..`.
impl<T: fmt::Debug> fmt::Debug for Stream<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries = formatter.debug_list();
        let mut current = self.node.as_ref();
        while let Some(node) = current {
            if let Some(value) = node.head.get() {
                entries.entry(value);
            } else {
                entries.entry(&format_args!("?"));
            }
            if let Some(tail) = node.tail.get() {
                current = tail.node.as_ref();
            } else {
                entries.entry(&format_args!(".."));
                current = None;
            }
        }
        entries.finish()
    }
}

static_assertions::assert_impl_all!(Stream<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Stream<String>: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counted(values: Vec<i32>, forced: &Arc<AtomicUsize>) -> Stream<i32> {
        let mut stream = Stream::empty();
        for value in values.into_iter().rev() {
            let forced = Arc::clone(forced);
            let rest = stream;
            stream = Stream::cons(
                move || {
                    forced.fetch_add(1, Ordering::SeqCst);
                    value
                },
                move || rest,
            );
        }
        stream
    }

    #[rstest]
    fn test_cons_does_not_force() {
        let forced = Arc::new(AtomicUsize::new(0));
        let stream = counted(vec![1, 2, 3], &forced);
        assert!(!stream.is_empty());
        assert_eq!(forced.load(Ordering::SeqCst), 0);
    }

    #[rstest]
    fn test_head_option_forces_only_head() {
        let forced = Arc::new(AtomicUsize::new(0));
        let stream = counted(vec![1, 2, 3], &forced);
        assert_eq!(stream.head_option(), Some(1));
        assert_eq!(forced.load(Ordering::SeqCst), 1);
        let (_, tail) = stream.uncons().unwrap();
        assert!(!tail.is_evaluated());
    }

    #[rstest]
    fn test_take_shares_head_thunks() {
        let forced = Arc::new(AtomicUsize::new(0));
        let stream = counted(vec![1, 2, 3], &forced);
        let taken = stream.take(2);
        assert_eq!(taken.to_vec(), vec![1, 2]);
        assert_eq!(stream.to_vec(), vec![1, 2, 3]);
        assert_eq!(forced.load(Ordering::SeqCst), 3);
    }

    #[rstest]
    fn test_take_does_not_force_tail_past_count() {
        let stream = Stream::cons(|| 1, || panic!("tail must stay unevaluated"));
        assert_eq!(stream.take(1).to_vec(), vec![1]);
    }

    #[rstest]
    fn test_drop_first_skips_heads() {
        let forced = Arc::new(AtomicUsize::new(0));
        let stream = counted(vec![1, 2, 3, 4], &forced);
        assert_eq!(stream.drop_first(3).head_option(), Some(4));
        assert_eq!(forced.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    fn test_drop_first_past_end_is_empty() {
        assert!(Stream::from_values([1, 2]).drop_first(5).is_empty());
    }

    #[rstest]
    fn test_debug_shows_forced_prefix() {
        let stream = Stream::cons(|| 1, || Stream::cons(|| 2, Stream::empty));
        assert_eq!(format!("{stream:?}"), "[?, ..]");
        stream.head_option();
        assert_eq!(format!("{stream:?}"), "[1, ..]");
        stream.to_vec();
        assert_eq!(format!("{stream:?}"), "[1, 2]");
    }

    #[rstest]
    fn test_drop_of_long_forced_stream_is_stack_safe() {
        let stream = Stream::from_values(0..1_000_000);
        assert_eq!(stream.iter().count(), 1_000_000);
        drop(stream);
    }

    #[rstest]
    fn test_append_to_empty_returns_other() {
        let stream = Stream::empty().append(Stream::from_values([1]));
        assert_eq!(stream.to_vec(), vec![1]);
    }
}
