//! Combinators over collections of state actions.

use std::rc::Rc;

use super::State;

/// Runs `actions` in order, threading the state from each into the next,
/// and collects their results.
///
/// The first action sees the initial state and every later action sees the
/// state its predecessor returned. An empty list yields an empty vector and
/// leaves the state untouched. Runs in a loop, so long lists are fine.
///
/// # Examples
///
/// ```rust
/// use lazystate::state::{State, sequence};
///
/// let push = |tag: char| State::new(move |mut log: String| {
///     log.push(tag);
///     (log.len(), log)
/// });
///
/// let (lengths, log) = sequence([push('a'), push('b'), push('c')]).run(String::new());
/// assert_eq!(lengths, vec![1, 2, 3]);
/// assert_eq!(log, "abc");
/// ```
pub fn sequence<S, A, I>(actions: I) -> State<S, Vec<A>>
where
    S: 'static,
    A: 'static,
    I: IntoIterator<Item = State<S, A>>,
{
    let actions: Rc<[State<S, A>]> = actions.into_iter().collect();
    State::new(move |initial_state| {
        let mut results = Vec::with_capacity(actions.len());
        let mut state = initial_state;
        for action in actions.iter() {
            let (result, next_state) = action.run(state);
            results.push(result);
            state = next_state;
        }
        (results, state)
    })
}

/// Maps each item to an action with `function` and sequences the results.
///
/// Equivalent to `sequence(items.into_iter().map(function))`.
///
/// # Examples
///
/// ```rust
/// use lazystate::state::{State, traverse};
///
/// let scaled = traverse([1, 2, 3], |factor: i32| {
///     State::new(move |total: i32| (total * factor, total + 1))
/// });
/// assert_eq!(scaled.run(10), (vec![10, 22, 36], 13));
/// ```
pub fn traverse<S, A, B, I, F>(items: I, function: F) -> State<S, Vec<B>>
where
    S: 'static,
    B: 'static,
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> State<S, B>,
{
    sequence(items.into_iter().map(function))
}
