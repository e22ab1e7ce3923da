#![cfg(feature = "control")]
//! Unit tests for Thunk<T>.
//!
//! Tests cover:
//! - Deferred evaluation and memoization
//! - Concurrent forcing from several threads
//! - Poisoned state handling

use lazystate::control::{Thunk, ThunkPoisonedError};
use rstest::rstest;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

// =============================================================================
// Basic Construction and Evaluation
// =============================================================================

#[rstest]
fn thunk_defers_computation() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let thunk = Thunk::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        42
    });

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(!thunk.is_evaluated());
    assert!(thunk.get().is_none());
}

#[rstest]
fn thunk_force_through_shared_reference() {
    let thunk = Arc::new(Thunk::new(|| vec![1, 2, 3]));
    let shared = Arc::clone(&thunk);
    assert_eq!(shared.force().len(), 3);
    assert!(thunk.is_evaluated());
}

// =============================================================================
// Concurrency
// =============================================================================

#[rstest]
fn concurrent_force_evaluates_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let thunk = Arc::new(Thunk::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        thread::yield_now();
        (1..=100).sum::<u64>()
    }));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let thunk = Arc::clone(&thunk);
            thread::spawn(move || *thunk.force())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 5050);
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

// =============================================================================
// Poisoning
// =============================================================================

#[rstest]
fn panicking_initializer_poisons_thunk() {
    let thunk: Thunk<i32> = Thunk::new(|| panic!("initializer failed"));

    let result = catch_unwind(AssertUnwindSafe(|| *thunk.force()));
    assert!(result.is_err());

    assert!(thunk.is_poisoned());
    assert!(!thunk.is_evaluated());
    assert_eq!(thunk.try_force(), Err(ThunkPoisonedError));
}

#[rstest]
fn poisoned_thunk_panics_again_on_force() {
    let thunk: Thunk<i32> = Thunk::new(|| panic!("initializer failed"));
    let _ = catch_unwind(AssertUnwindSafe(|| *thunk.force()));

    let second = catch_unwind(AssertUnwindSafe(|| *thunk.force()));
    assert!(second.is_err());
}

#[rstest]
fn healthy_thunk_is_not_poisoned() {
    let thunk = Thunk::new(|| 1);
    assert!(!thunk.is_poisoned());
    thunk.force();
    assert!(!thunk.is_poisoned());
}
