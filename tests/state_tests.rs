#![cfg(feature = "state")]
//! Integration tests for State<S, A>.
//!
//! Tests cover:
//! - Threading order of map2 and sequence
//! - get, put, modify and gets
//! - The candy dispenser simulation

use lazystate::state::machine::{Input, Machine, simulate_machine};
use lazystate::state::{State, sequence, traverse};
use rstest::rstest;

fn push(tag: &'static str) -> State<Vec<&'static str>, usize> {
    State::new(move |mut log: Vec<&'static str>| {
        log.push(tag);
        (log.len(), log)
    })
}

// =============================================================================
// Threading
// =============================================================================

#[rstest]
fn sequence_equals_running_by_hand() {
    let (first, second, third) = (push("a"), push("b"), push("c"));

    let (result1, state1) = first.run(Vec::new());
    let (result2, state2) = second.run(state1);
    let (result3, state3) = third.run(state2);

    let (results, final_state) = sequence([first, second, third]).run(Vec::new());
    assert_eq!(results, vec![result1, result2, result3]);
    assert_eq!(final_state, state3);
    assert_eq!(final_state, vec!["a", "b", "c"]);
}

#[rstest]
fn map2_feeds_second_action_the_intermediate_state() {
    let (lengths, log) = push("x").map2(push("y"), |a, b| a * 10 + b).run(vec!["start"]);
    assert_eq!(lengths, 23);
    assert_eq!(log, vec!["start", "x", "y"]);
}

#[rstest]
fn flat_map_chooses_next_action_from_result() {
    let action = push("first").flat_map(|length| {
        if length > 1 {
            push("long")
        } else {
            push("short")
        }
    });
    assert_eq!(action.exec(Vec::new()), vec!["first", "short"]);
    assert_eq!(action.exec(vec!["seed"]), vec!["seed", "first", "long"]);
}

#[rstest]
fn traverse_builds_one_action_per_item() {
    let (results, log) = traverse(["p", "q"], push).run(Vec::new());
    assert_eq!(results, vec![1, 2]);
    assert_eq!(log, vec!["p", "q"]);
}

#[rstest]
fn running_twice_gives_identical_results() {
    let action = sequence([push("a"), push("b")]);
    assert_eq!(action.run(vec!["z"]), action.run(vec!["z"]));
}

// =============================================================================
// State Operations
// =============================================================================

#[rstest]
fn get_put_modify_compose() {
    let counter: State<i32, i32> = State::get()
        .flat_map(|start| State::put(start * 2).then(State::modify(|s| s + 1)).then(State::pure(start)));
    assert_eq!(counter.run(5), (5, 11));
}

#[rstest]
fn gets_projects_without_changing_state() {
    let length: State<String, usize> = State::gets(String::len);
    assert_eq!(length.run(String::from("four")), (4, String::from("four")));
}

#[rstest]
#[case(0, 0)]
#[case(3, 3)]
fn eval_and_exec_split_run(#[case] input: i32, #[case] expected_state: i32) {
    let action: State<i32, String> = State::new(|s: i32| (format!("saw {s}"), s));
    assert_eq!(action.eval(input), format!("saw {input}"));
    assert_eq!(action.exec(input), expected_state);
}

// =============================================================================
// Candy Machine
// =============================================================================

#[rstest]
fn machine_buys_four_candies() {
    let inputs = [Input::Coin, Input::Turn].repeat(4);
    let machine = Machine {
        locked: true,
        candies: 5,
        coins: 10,
    };
    let ((coins, candies), final_machine) = simulate_machine(inputs).run(machine);
    assert_eq!((coins, candies), (14, 1));
    assert_eq!(
        final_machine,
        Machine {
            locked: true,
            candies: 1,
            coins: 14
        }
    );
}

#[rstest]
fn machine_ignores_repeated_coins_and_turns() {
    let inputs = [Input::Turn, Input::Coin, Input::Coin, Input::Turn, Input::Turn];
    let machine = Machine {
        locked: true,
        candies: 2,
        coins: 0,
    };
    let ((coins, candies), _) = simulate_machine(inputs).run(machine);
    assert_eq!((coins, candies), (1, 1));
}
