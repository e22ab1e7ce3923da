//! Control structures for deferred evaluation.
//!
//! - [`Thunk`]: a deferred computation that is evaluated at most once and
//!   whose result is cached for every later access
//!
//! # Examples
//!
//! ```rust
//! use lazystate::control::Thunk;
//!
//! let thunk = Thunk::new(|| {
//!     println!("Computing...");
//!     42
//! });
//! // "Computing..." is not printed yet
//!
//! assert_eq!(*thunk.force(), 42);
//! // Now it has been printed exactly once
//! assert_eq!(*thunk.force(), 42);
//! ```

mod thunk;

pub use thunk::{Thunk, ThunkPoisonedError};
