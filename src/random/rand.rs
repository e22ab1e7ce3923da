//! Random actions.
//!
//! Every function here builds a [`Rand`] without drawing anything; values are
//! only produced when the action is run against a generator. All of them are
//! generic over the generator so that any [`Rng`] can drive them.

use super::{RandomError, Rng, SimpleRng};
use crate::state::{State, sequence};

/// A state action over a random number generator.
pub type Rand<A, R = SimpleRng> = State<R, A>;

/// Draws one `i32` from the generator.
///
/// # Examples
///
/// ```rust
/// use lazystate::random::{SimpleRng, int};
///
/// assert_eq!(int().eval(SimpleRng::new(42)), 16_159_453);
/// ```
#[must_use]
pub fn int<R: Rng>() -> Rand<i32, R> {
    State::new(|rng: R| rng.next_int())
}

/// Returns `value` without drawing.
#[must_use]
pub fn unit<A, R>(value: A) -> Rand<A, R>
where
    A: Clone + 'static,
    R: Rng,
{
    State::pure(value)
}

/// Draws an `i32` in `[0, i32::MAX]`.
///
/// Negative draws are negated. `i32::MIN` has no positive counterpart and
/// becomes `0`.
///
/// # Examples
///
/// ```rust
/// use lazystate::random::{SimpleRng, int, non_negative_int};
///
/// let rng = SimpleRng::new(42);
/// let (_, rng) = int().run(rng);
/// // The second draw from seed 42 is -1_281_479_697.
/// assert_eq!(non_negative_int().eval(rng), 1_281_479_697);
/// ```
#[must_use]
pub fn non_negative_int<R: Rng>() -> Rand<i32, R> {
    int().map(|value: i32| value.checked_abs().unwrap_or(0))
}

/// Draws an even `i32` in `[0, i32::MAX - 1]`.
#[must_use]
pub fn non_negative_even<R: Rng>() -> Rand<i32, R> {
    non_negative_int().map(|value: i32| value - value % 2)
}

/// Draws an `f64` in `[0, 1)`.
///
/// # Examples
///
/// ```rust
/// use lazystate::random::{SimpleRng, double};
///
/// let value = double().eval(SimpleRng::new(42));
/// assert!((0.0..1.0).contains(&value));
/// ```
#[must_use]
pub fn double<R: Rng>() -> Rand<f64, R> {
    non_negative_int().map(|value: i32| f64::from(value) / (f64::from(i32::MAX) + 1.0))
}

/// Runs `first` and then `second`, pairing their results.
///
/// # Examples
///
/// ```rust
/// use lazystate::random::{SimpleRng, both, int};
///
/// let (pair, _) = both(int(), int()).run(SimpleRng::new(42));
/// assert_eq!(pair, (16_159_453, -1_281_479_697));
/// ```
#[must_use]
pub fn both<A, B, R>(first: Rand<A, R>, second: Rand<B, R>) -> Rand<(A, B), R>
where
    A: 'static,
    B: 'static,
    R: Rng,
{
    first.map2(second, |a, b| (a, b))
}

/// Draws an `i32` and then an `f64`.
#[must_use]
pub fn int_double<R: Rng>() -> Rand<(i32, f64), R> {
    both(int(), double())
}

/// Draws an `f64` and then an `i32`.
#[must_use]
pub fn double_int<R: Rng>() -> Rand<(f64, i32), R> {
    both(double(), int())
}

/// Draws three `f64`s in order.
#[must_use]
pub fn double3<R: Rng>() -> Rand<(f64, f64, f64), R> {
    both(double(), double()).map2(double(), |(first, second), third| (first, second, third))
}

/// Draws `count` `i32`s in order.
///
/// # Examples
///
/// ```rust
/// use lazystate::random::{SimpleRng, ints};
///
/// let (values, _) = ints(3).run(SimpleRng::new(42));
/// assert_eq!(values, vec![16_159_453, -1_281_479_697, -340_305_902]);
/// ```
#[must_use]
pub fn ints<R: Rng>(count: usize) -> Rand<Vec<i32>, R> {
    sequence(std::iter::repeat_n(int(), count))
}

/// Draws an `i32` in `[0, bound)` with every value equally likely.
///
/// Uses rejection sampling: a draw that falls into the last, incomplete
/// block of `bound` values is discarded and the next generator is tried.
///
/// # Errors
///
/// Returns [`RandomError::NonPositiveBound`] if `bound <= 0`.
///
/// # Examples
///
/// ```rust
/// use lazystate::random::{SimpleRng, non_negative_less_than};
///
/// let below_ten = non_negative_less_than(10)?;
/// let value = below_ten.eval(SimpleRng::new(42));
/// assert!((0..10).contains(&value));
/// # Ok::<(), lazystate::random::RandomError>(())
/// ```
pub fn non_negative_less_than<R: Rng>(bound: i32) -> Result<Rand<i32, R>, RandomError> {
    if bound <= 0 {
        return Err(RandomError::NonPositiveBound { bound });
    }
    Ok(less_than(bound))
}

fn less_than<R: Rng>(bound: i32) -> Rand<i32, R> {
    non_negative_int().flat_map(move |draw: i32| {
        let remainder = draw % bound;
        if draw.checked_add(bound - 1 - remainder).is_some() {
            State::pure(remainder)
        } else {
            tracing::trace!(draw, bound, "draw falls in incomplete block, drawing again");
            less_than(bound)
        }
    })
}

/// Rolls a six-sided die, giving a value in `1..=6`.
///
/// # Examples
///
/// ```rust
/// use lazystate::random::{SimpleRng, roll_die};
///
/// let roll = roll_die().eval(SimpleRng::new(5));
/// assert!((1..=6).contains(&roll));
/// ```
#[must_use]
pub fn roll_die<R: Rng>() -> Rand<i32, R> {
    less_than(6).map(|face: i32| face + 1)
}
