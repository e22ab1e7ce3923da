//! Explicit state threading.
//!
//! A [`State<S, A>`] wraps a pure function `S -> (A, S)`: given a state it
//! produces a result and the *next* state, leaving the input untouched.
//! Actions compose with [`State::map`], [`State::map2`] and
//! [`State::flat_map`]; [`sequence`] threads one state through a whole list
//! of actions.
//!
//! # Laws
//!
//! ## Functor Laws
//!
//! - Identity: `state.map(|x| x) == state`
//! - Composition: `state.map(f).map(g) == state.map(|x| g(f(x)))`
//!
//! ## Monad Laws
//!
//! - Left Identity: `State::pure(a).flat_map(f) == f(a)`
//! - Right Identity: `m.flat_map(State::pure) == m`
//! - Associativity: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//!
//! ## Derived Combinators
//!
//! - `a.map2(b, f) == a.flat_map(|x| b.flat_map(|y| State::pure(f(x, y))))`
//!
//! # Examples
//!
//! ```rust
//! use lazystate::state::{State, sequence};
//!
//! let next_id: State<u32, u32> = State::new(|counter| (counter, counter + 1));
//!
//! let (ids, counter) = sequence(vec![next_id.clone(), next_id.clone(), next_id]).run(7);
//! assert_eq!(ids, vec![7, 8, 9]);
//! assert_eq!(counter, 10);
//! ```

#![forbid(unsafe_code)]

mod action;
mod combinators;
pub mod machine;

pub use action::State;
pub use combinators::{sequence, traverse};
