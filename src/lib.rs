//! # lazystate
//!
//! Deferred evaluation and explicit state threading for Rust.
//!
//! ## Overview
//!
//! This library replaces implicit evaluation order and hidden mutation with
//! values that make them explicit. It includes:
//!
//! - **Control**: [`Thunk`](control::Thunk), a memoized deferred computation
//!   that can be shared between threads
//! - **Streams**: [`Stream`](stream::Stream), a possibly infinite persistent
//!   sequence whose head and tail are evaluated on demand
//! - **State**: [`State`](state::State), a pure `S -> (A, S)` transition with
//!   composition combinators
//! - **Random**: a seeded linear-congruential generator and the
//!   [`Rand`](random::Rand) actions built on top of `State`
//!
//! ## Feature Flags
//!
//! - `control`: Memoized thunks
//! - `stream`: Lazy streams (implies `control`)
//! - `state`: State actions
//! - `random`: Pseudo-random actions (implies `state`)
//! - `serde`: `Serialize`/`Deserialize` for the generator state
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lazystate::prelude::*;
//!
//! let evens: Vec<u64> = fibs().filter(|n| n % 2 == 0).take(4).to_vec();
//! assert_eq!(evens, vec![0, 2, 8, 34]);
//!
//! let (pair, _) = both(int(), double()).run(SimpleRng::new(42));
//! assert_eq!(pair.0, 16_159_453);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use lazystate::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "stream")]
    pub use crate::stream::*;

    #[cfg(feature = "state")]
    pub use crate::state::*;

    #[cfg(feature = "random")]
    pub use crate::random::*;
}

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "stream")]
pub mod stream;

#[cfg(feature = "state")]
pub mod state;

#[cfg(feature = "random")]
pub mod random;
