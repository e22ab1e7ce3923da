//! Deterministic pseudo-random values as state actions.
//!
//! A generator is an immutable value: [`Rng::next_int`] returns a draw
//! *and* the generator to use next. [`Rand<A>`] is a [`State`] action over
//! that generator, so random values compose with the ordinary state
//! combinators and replay exactly from the same seed.
//!
//! [`State`]: crate::state::State
//!
//! # Examples
//!
//! ```rust
//! use lazystate::random::{SimpleRng, both, double, int, ints};
//!
//! let rng = SimpleRng::new(42);
//!
//! let ((value, fraction), rng) = both(int(), double()).run(rng);
//! assert_eq!(value, 16_159_453);
//! assert!((0.0..1.0).contains(&fraction));
//!
//! let (values, _) = ints(2).run(rng);
//! assert_eq!(values.len(), 2);
//! ```

#![forbid(unsafe_code)]

mod error;
mod rand;
mod rng;

pub use error::RandomError;
pub use rand::{
    Rand, both, double, double_int, double3, int, int_double, ints, non_negative_even,
    non_negative_int, non_negative_less_than, roll_die, unit,
};
pub use rng::{LcgParameters, Rng, SimpleRng};
