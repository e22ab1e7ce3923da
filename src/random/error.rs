//! Errors raised while building random actions.

use thiserror::Error;

/// Error returned when a random action cannot be built from its arguments.
///
/// # Examples
///
/// ```rust
/// use lazystate::random::{RandomError, SimpleRng, non_negative_less_than};
///
/// let error = non_negative_less_than::<SimpleRng>(0).unwrap_err();
/// assert_eq!(error, RandomError::NonPositiveBound { bound: 0 });
/// assert_eq!(error.to_string(), "upper bound must be positive, got 0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum RandomError {
    /// The exclusive upper bound of a range was zero or negative.
    #[error("upper bound must be positive, got {bound}")]
    NonPositiveBound {
        /// The rejected bound.
        bound: i32,
    },
}
