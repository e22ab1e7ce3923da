//! Lazy, memoized, possibly infinite streams.
//!
//! This module provides [`Stream`], a persistent sequence whose cells hold a
//! deferred head and a deferred tail. Nothing is computed until it is
//! demanded, and nothing is computed twice.
//!
//! # Overview
//!
//! - Construction: [`Stream::empty`], [`Stream::from_thunks`], [`cons`],
//!   [`Stream::from_values`], and the corecursive generator [`unfold`]
//! - Elimination: [`Stream::fold_right`], [`Stream::to_vec`],
//!   [`Stream::exists`], [`Stream::for_all`], [`Stream::find`]
//! - Transformation: [`Stream::map`], [`Stream::filter`], [`Stream::take`],
//!   [`Stream::take_while`], [`Stream::drop_first`], [`Stream::append`],
//!   [`Stream::flat_map`], [`Stream::zip_with`]
//! - Generators: [`ones`], [`constant`], [`from`], [`fibs`], each also
//!   available as an [`unfold`] specialization in [`unfolded`]
//!
//! # Laziness
//!
//! Constructing a cell never evaluates its head or tail, and `map`, `take`,
//! `append` and `zip_with` force nothing when they are called.
//! [`Stream::drop_first`] forces the tails it skips but none of their heads.
//! [`Stream::filter`] and [`Stream::take_while`] do force heads when called:
//! they must test elements to decide whether the result has a first cell,
//! so they force source heads up to the first element `filter` keeps or the
//! first one `take_while` looks at. The `*_via_fold` combinators force the
//! first source head for the same reason.
//!
//! After that, combinators wrap their source cell by cell, so a pipeline
//! such as `filter`, then `map`, then `take(5)` touches exactly the source
//! cells needed to produce five results:
//!
//! ```rust
//! use lazystate::stream::{Stream, from};
//!
//! let squares_of_odds: Vec<i64> = from(1)
//!     .filter(|n| n % 2 == 1)
//!     .map(|n| n * n)
//!     .take(5)
//!     .to_vec();
//!
//! assert_eq!(squares_of_odds, vec![1, 9, 25, 49, 81]);
//! ```
//!
//! # Stack Safety
//!
//! Full traversals ([`Stream::to_vec`], [`Stream::drop_first`],
//! [`Stream::exists`], [`Stream::for_all`], iteration) and the destruction
//! of long streams run in loops, not recursion. [`Stream::fold_right`] is
//! recursive by nature: its depth is the number of cells the combining
//! function chooses to force.

mod cell;
mod corecursive;
mod fold;
mod generators;
mod iter;

pub use cell::Stream;
pub use generators::{constant, cons, fibs, from, ones, unfold, unfolded};
pub use iter::Iter;

/// Bounds shared by every stream element.
///
/// Cells are shared between streams and between threads, so elements are
/// cloned out of them and must be `Send + Sync`.
pub trait Element: Clone + Send + Sync + 'static {}

impl<T: Clone + Send + Sync + 'static> Element for T {}
