//! The state action type.

use std::fmt;
use std::rc::Rc;

type Transition<S, A> = Rc<dyn Fn(S) -> (A, S)>;

/// A pure transition `S -> (A, S)`.
///
/// Running an action hands it a state by value and gets back a result
/// together with the state to continue from. Nothing is mutated in place, so
/// the same action run on equal states always gives equal outputs, and an
/// action can be stored, cloned and run any number of times.
///
/// Every combinator here threads the state the same way: the first action
/// sees the input state, and whatever it returns is what the next action
/// sees.
///
/// # Examples
///
/// A turnstile counter kept entirely in the state:
///
/// ```rust
/// use lazystate::state::State;
///
/// let enter: State<u32, u32> = State::new(|inside| (inside + 1, inside + 1));
///
/// let twice = enter.clone().map2(enter, |first, second| [first, second]);
/// assert_eq!(twice.run(0), ([1, 2], 2));
/// assert_eq!(twice.run(0), twice.run(0));
/// ```
pub struct State<S, A>
where
    S: 'static,
    A: 'static,
{
    transition: Transition<S, A>,
}

impl<S, A> State<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Wraps a transition function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazystate::state::State;
    ///
    /// // Pops the top of a stack held in the state.
    /// let pop: State<Vec<char>, Option<char>> = State::new(|mut stack: Vec<char>| {
    ///     let top = stack.pop();
    ///     (top, stack)
    /// });
    /// assert_eq!(pop.run(vec!['a', 'b']), (Some('b'), vec!['a']));
    /// ```
    pub fn new<F>(transition: F) -> Self
    where
        F: Fn(S) -> (A, S) + 'static,
    {
        Self {
            transition: Rc::new(transition),
        }
    }

    /// Runs the action on `state`, returning the result and the next state.
    pub fn run(&self, state: S) -> (A, S) {
        (self.transition)(state)
    }

    /// Runs the action and keeps only the result.
    pub fn eval(&self, state: S) -> A {
        self.run(state).0
    }

    /// Runs the action and keeps only the next state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazystate::state::machine::{Input, Machine};
    /// use lazystate::state::State;
    ///
    /// let insert_coin = State::modify(|machine: Machine| machine.update(Input::Coin));
    /// let machine = Machine { locked: true, candies: 1, coins: 0 };
    /// assert!(!insert_coin.exec(machine).locked);
    /// ```
    pub fn exec(&self, state: S) -> S {
        self.run(state).1
    }

    /// An action that yields `value` and hands the state on untouched.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |state| (value.clone(), state))
    }

    /// Runs `self`, then feeds its result and the state it produced to
    /// `step`. Every sequencing combinator below is a specialization of this.
    fn and_continue<B, F>(self, step: F) -> State<S, B>
    where
        B: 'static,
        F: Fn(A, S) -> (B, S) + 'static,
    {
        let first = self.transition;
        State::new(move |state| {
            let (result, next_state) = first(state);
            step(result, next_state)
        })
    }

    /// Transforms the result; the state passes through as `self` leaves it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazystate::state::State;
    ///
    /// let length: State<String, usize> = State::gets(String::len);
    /// let is_long = length.map(|chars| chars > 3);
    /// assert_eq!(is_long.run(String::from("tick")), (true, String::from("tick")));
    /// ```
    #[must_use]
    pub fn map<B, F>(self, function: F) -> State<S, B>
    where
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        self.and_continue(move |result, state| (function(result), state))
    }

    /// Runs `self` on the input state and `other` on the state `self`
    /// returned, then combines both results.
    ///
    /// `other` never sees the original state, and the final state is the one
    /// `other` returns.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazystate::state::State;
    ///
    /// let next: State<u8, u8> = State::new(|tick| (tick, tick + 1));
    /// assert_eq!(next.clone().map2(next, |a, b| (a, b)).run(5), ((5, 6), 7));
    /// ```
    #[must_use]
    pub fn map2<B, C, F>(self, other: State<S, B>, function: F) -> State<S, C>
    where
        B: 'static,
        C: 'static,
        F: Fn(A, B) -> C + 'static,
    {
        self.and_continue(move |first, state| {
            let (second, final_state) = other.run(state);
            (function(first, second), final_state)
        })
    }

    /// Runs `self`, then runs the action `function` picks from its result on
    /// the state `self` returned.
    ///
    /// # Examples
    ///
    /// Only dispensing when a coin was actually accepted:
    ///
    /// ```rust
    /// use lazystate::state::machine::{Input, Machine};
    /// use lazystate::state::State;
    ///
    /// let coin = State::new(|machine: Machine| {
    ///     let after = machine.update(Input::Coin);
    ///     (after != machine, after)
    /// });
    /// let buy = coin.flat_map(|accepted| {
    ///     if accepted {
    ///         State::modify(|machine: Machine| machine.update(Input::Turn))
    ///     } else {
    ///         State::pure(())
    ///     }
    /// });
    ///
    /// let machine = Machine { locked: true, candies: 2, coins: 0 };
    /// assert_eq!(buy.exec(machine), Machine { locked: true, candies: 1, coins: 1 });
    /// ```
    #[must_use]
    pub fn flat_map<B, F>(self, function: F) -> State<S, B>
    where
        B: 'static,
        F: Fn(A) -> State<S, B> + 'static,
    {
        self.and_continue(move |result, state| function(result).run(state))
    }

    /// Runs `self` for its effect on the state, then `next`.
    #[must_use]
    pub fn then<B>(self, next: State<S, B>) -> State<S, B>
    where
        B: 'static,
    {
        self.and_continue(move |_, state| next.run(state))
    }

    /// [`map`](Self::map) expressed with [`flat_map`](Self::flat_map) and
    /// [`pure`](Self::pure) alone.
    #[must_use]
    pub fn map_via_flat_map<B, F>(self, function: F) -> State<S, B>
    where
        B: Clone + 'static,
        F: Fn(A) -> B + 'static,
    {
        self.flat_map(move |result| State::pure(function(result)))
    }

    /// [`map2`](Self::map2) expressed with [`flat_map`](Self::flat_map) and
    /// [`pure`](Self::pure) alone. Threads the state exactly like `map2`.
    #[must_use]
    pub fn map2_via_flat_map<B, C, F>(self, other: State<S, B>, function: F) -> State<S, C>
    where
        A: Clone,
        B: 'static,
        C: Clone + 'static,
        F: Fn(A, B) -> C + 'static,
    {
        let function = Rc::new(function);
        self.flat_map(move |first| {
            let function = Rc::clone(&function);
            other
                .clone()
                .flat_map(move |second| State::pure(function(first.clone(), second)))
        })
    }

    /// An action that reads a value out of the state without changing it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazystate::state::machine::Machine;
    /// use lazystate::state::State;
    ///
    /// let coins = State::gets(|machine: &Machine| machine.coins);
    /// assert_eq!(coins.eval(Machine { locked: true, candies: 4, coins: 9 }), 9);
    /// ```
    pub fn gets<F>(read: F) -> Self
    where
        F: Fn(&S) -> A + 'static,
    {
        Self::new(move |state| (read(&state), state))
    }
}

// =============================================================================
// Reading and Replacing the State
// =============================================================================

impl<S: Clone + 'static> State<S, S> {
    /// An action whose result is a copy of the current state.
    #[must_use]
    pub fn get() -> Self {
        Self::gets(S::clone)
    }
}

impl<S: 'static> State<S, ()> {
    /// An action that discards the current state in favour of `replacement`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazystate::state::State;
    ///
    /// let reset: State<u64, ()> = State::put(0);
    /// assert_eq!(reset.exec(1_000), 0);
    /// ```
    pub fn put(replacement: S) -> Self
    where
        S: Clone,
    {
        Self::new(move |_| ((), replacement.clone()))
    }

    /// An action that rewrites the state with `update`.
    pub fn modify<F>(update: F) -> Self
    where
        F: Fn(S) -> S + 'static,
    {
        Self::new(move |state| ((), update(state)))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<S: 'static, A: 'static> Clone for State<S, A> {
    fn clone(&self) -> Self {
        Self {
            transition: Rc::clone(&self.transition),
        }
    }
}

impl<S: 'static, A: 'static> fmt::Debug for State<S, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("State(<transition>)")
    }
}
