//! Deferred computation with memoization.
//!
//! This module provides the [`Thunk<T>`] type. A thunk holds either a pending
//! initializer or the value that initializer produced, and moves from the
//! first state to the second exactly once.
//!
//! # Thread Safety
//!
//! `Thunk<T>` is `Send + Sync` whenever `T: Send + Sync`. The cached value
//! lives in a [`OnceLock`], so reads after initialization are lock-free, and
//! the initializer runs under a mutex, so concurrent callers of [`Thunk::force`]
//! wait for the single evaluation instead of repeating it.
//!
//! # Re-entry Warning
//!
//! Forcing a thunk from inside its own initializer deadlocks. Forcing *other*
//! thunks from an initializer is fine; lazy streams do it constantly.
//!
//! # Examples
//!
//! ```rust
//! use lazystate::control::Thunk;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let thunk = Arc::new(Thunk::new(|| (1..=10).sum::<i32>()));
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|_| {
//!         let thunk = Arc::clone(&thunk);
//!         thread::spawn(move || *thunk.force())
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     assert_eq!(handle.join().unwrap(), 55);
//! }
//! ```

use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind, resume_unwind};
use std::sync::OnceLock;

use parking_lot::Mutex;

type Initializer<T> = Box<dyn FnOnce() -> T + Send>;

/// Error returned when a thunk cannot produce its value because its
/// initializer panicked on an earlier evaluation.
///
/// # Examples
///
/// ```rust
/// use lazystate::control::{Thunk, ThunkPoisonedError};
/// use std::panic::{AssertUnwindSafe, catch_unwind};
///
/// let thunk: Thunk<i32> = Thunk::new(|| panic!("boom"));
/// let _ = catch_unwind(AssertUnwindSafe(|| thunk.force()));
///
/// assert_eq!(thunk.try_force(), Err(ThunkPoisonedError));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Thunk: initializer panicked on an earlier evaluation")]
pub struct ThunkPoisonedError;

/// A deferred computation whose result is cached after the first evaluation.
///
/// Creating a thunk is O(1) and never runs the initializer. The initializer
/// runs on the first call to [`force`](Self::force) (or
/// [`try_force`](Self::try_force)); every later call returns a reference to
/// the same cached value.
///
/// # Examples
///
/// ## Memoization
///
/// ```rust
/// use lazystate::control::Thunk;
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// let calls = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&calls);
/// let thunk = Thunk::new(move || {
///     counter.fetch_add(1, Ordering::SeqCst);
///     "value"
/// });
///
/// assert_eq!(calls.load(Ordering::SeqCst), 0); // Not called yet
///
/// assert_eq!(*thunk.force(), "value");
/// assert_eq!(*thunk.force(), "value");
/// assert_eq!(calls.load(Ordering::SeqCst), 1); // Called once
/// ```
pub struct Thunk<T> {
    value: OnceLock<T>,
    initializer: Mutex<Option<Initializer<T>>>,
}

impl<T> Thunk<T> {
    /// Creates a thunk that evaluates `initializer` on first demand.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazystate::control::Thunk;
    ///
    /// let thunk = Thunk::new(|| 6 * 7);
    /// assert!(!thunk.is_evaluated());
    /// ```
    pub fn new<F>(initializer: F) -> Self
    where
        F: FnOnce() -> T + Send + 'static,
    {
        Self {
            value: OnceLock::new(),
            initializer: Mutex::new(Some(Box::new(initializer))),
        }
    }

    /// Creates a thunk that is already evaluated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazystate::control::Thunk;
    ///
    /// let thunk = Thunk::evaluated(42);
    /// assert!(thunk.is_evaluated());
    /// assert_eq!(*thunk.force(), 42);
    /// ```
    pub fn evaluated(value: T) -> Self {
        Self {
            value: OnceLock::from(value),
            initializer: Mutex::new(None),
        }
    }

    /// Forces evaluation and returns a reference to the cached value.
    ///
    /// # Panics
    ///
    /// - If the initializer panics. The panic is propagated and the thunk
    ///   becomes poisoned.
    /// - If the thunk was poisoned by an earlier evaluation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazystate::control::Thunk;
    ///
    /// let thunk = Thunk::new(|| String::from("hello"));
    /// assert_eq!(thunk.force().len(), 5);
    /// ```
    pub fn force(&self) -> &T {
        match self.try_force() {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Forces evaluation, reporting a poisoned thunk as an error instead of
    /// panicking.
    ///
    /// # Errors
    ///
    /// Returns [`ThunkPoisonedError`] if the initializer panicked during an
    /// earlier evaluation.
    ///
    /// # Panics
    ///
    /// If the initializer panics during *this* call, the panic is propagated
    /// after the thunk is marked as poisoned.
    pub fn try_force(&self) -> Result<&T, ThunkPoisonedError> {
        if let Some(value) = self.value.get() {
            return Ok(value);
        }

        let mut pending = self.initializer.lock();

        // Another thread may have finished while we waited for the lock
        if let Some(value) = self.value.get() {
            return Ok(value);
        }

        let initializer = pending.take().ok_or(ThunkPoisonedError)?;

        match catch_unwind(AssertUnwindSafe(initializer)) {
            Ok(value) => Ok(self.value.get_or_init(|| value)),
            Err(payload) => {
                tracing::warn!("thunk initializer panicked; thunk is now poisoned");
                drop(pending);
                resume_unwind(payload)
            }
        }
    }

    /// Consumes the thunk and returns its value, evaluating it if needed.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`force`](Self::force).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazystate::control::Thunk;
    ///
    /// let thunk = Thunk::new(|| vec![1, 2, 3]);
    /// assert_eq!(thunk.into_inner(), vec![1, 2, 3]);
    /// ```
    pub fn into_inner(self) -> T {
        let Self { value, initializer } = self;
        if let Some(value) = value.into_inner() {
            return value;
        }
        match initializer.into_inner() {
            Some(initializer) => initializer(),
            None => panic!("{}", ThunkPoisonedError),
        }
    }

    /// Returns the cached value without forcing evaluation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazystate::control::Thunk;
    ///
    /// let thunk = Thunk::new(|| 42);
    /// assert!(thunk.get().is_none());
    ///
    /// thunk.force();
    /// assert_eq!(thunk.get(), Some(&42));
    /// ```
    pub fn get(&self) -> Option<&T> {
        self.value.get()
    }

    /// Returns whether the value has been computed.
    #[inline]
    pub fn is_evaluated(&self) -> bool {
        self.value.get().is_some()
    }

    /// Returns whether an earlier evaluation panicked.
    pub fn is_poisoned(&self) -> bool {
        self.value.get().is_none() && self.initializer.lock().is_none()
    }

    /// Moves the cached value out, leaving the thunk unevaluated and without
    /// an initializer. Used to tear down long chains of cells iteratively.
    pub(crate) fn take_value(&mut self) -> Option<T> {
        self.value.take()
    }
}

impl<T: fmt::Debug> fmt::Debug for Thunk<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value.get() {
            Some(value) => formatter.debug_tuple("Thunk").field(value).finish(),
            None => formatter.debug_tuple("Thunk").field(&"<pending>").finish(),
        }
    }
}
