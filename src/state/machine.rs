//! A candy dispenser driven by [`State`].
//!
//! The machine has two inputs: inserting a coin and turning the knob.
//!
//! - Inserting a coin into a locked machine unlocks it if it has candy left.
//! - Turning the knob on an unlocked machine dispenses a candy and locks it.
//! - Turning the knob on a locked machine, or inserting a coin into an
//!   unlocked one, does nothing.
//! - A machine with no candy ignores every input.
//!
//! # Examples
//!
//! ```rust
//! use lazystate::state::machine::{Input, Machine, simulate_machine};
//!
//! let inputs = [Input::Coin, Input::Turn].repeat(4);
//! let machine = Machine { locked: true, candies: 5, coins: 10 };
//!
//! let ((coins, candies), _) = simulate_machine(inputs).run(machine);
//! assert_eq!((coins, candies), (14, 1));
//! ```

use super::{State, traverse};

/// An input to the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    /// Insert a coin.
    Coin,
    /// Turn the knob.
    Turn,
}

/// The observable state of the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Machine {
    /// Whether the knob is locked.
    pub locked: bool,
    /// Candies left.
    pub candies: u32,
    /// Coins collected so far.
    pub coins: u32,
}

impl Machine {
    /// Returns the machine after reacting to `input`.
    #[must_use]
    pub const fn update(self, input: Input) -> Self {
        match (input, self) {
            (_, Self { candies: 0, .. })
            | (Input::Coin, Self { locked: false, .. })
            | (Input::Turn, Self { locked: true, .. }) => self,
            (Input::Coin, Self { locked: true, candies, coins }) => Self {
                locked: false,
                candies,
                coins: coins.saturating_add(1),
            },
            (Input::Turn, Self { locked: false, candies, coins }) => Self {
                locked: true,
                candies: candies - 1,
                coins,
            },
        }
    }
}

/// Feeds `inputs` to the machine in order and reports `(coins, candies)`
/// at the end.
pub fn simulate_machine<I>(inputs: I) -> State<Machine, (u32, u32)>
where
    I: IntoIterator<Item = Input>,
{
    traverse(inputs, |input| State::modify(move |machine: Machine| machine.update(input)))
        .then(State::gets(|machine: &Machine| (machine.coins, machine.candies)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const LOCKED: Machine = Machine {
        locked: true,
        candies: 3,
        coins: 0,
    };

    const UNLOCKED: Machine = Machine {
        locked: false,
        candies: 3,
        coins: 1,
    };

    #[rstest]
    #[case(LOCKED, Input::Coin, Machine { locked: false, candies: 3, coins: 1 })]
    #[case(LOCKED, Input::Turn, LOCKED)]
    #[case(UNLOCKED, Input::Coin, UNLOCKED)]
    #[case(UNLOCKED, Input::Turn, Machine { locked: true, candies: 2, coins: 1 })]
    fn update_follows_rules(#[case] machine: Machine, #[case] input: Input, #[case] expected: Machine) {
        assert_eq!(machine.update(input), expected);
    }

    #[rstest]
    #[case(Input::Coin)]
    #[case(Input::Turn)]
    fn empty_machine_ignores_inputs(#[case] input: Input) {
        let empty = Machine {
            locked: true,
            candies: 0,
            coins: 7,
        };
        assert_eq!(empty.update(input), empty);
    }

    #[rstest]
    fn simulate_without_inputs_reports_initial_counts() {
        let ((coins, candies), machine) = simulate_machine([]).run(LOCKED);
        assert_eq!((coins, candies), (0, 3));
        assert_eq!(machine, LOCKED);
    }

    #[rstest]
    fn simulate_runs_out_of_candy() {
        let inputs = [Input::Coin, Input::Turn].repeat(5);
        let ((coins, candies), machine) = simulate_machine(inputs).run(LOCKED);
        assert_eq!((coins, candies), (3, 0));
        assert!(machine.locked);
    }
}
