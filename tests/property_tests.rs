//! Property-based tests for the vending controller.
//!
//! These tests use proptest to verify the machine's arithmetic and
//! transition properties across many randomly generated inputs.

use coinslot::core::{change_sequence, Cents, Denomination, Event, MachineState, Product};
use coinslot::machine::VendingMachine;
use coinslot::sinks::{Display, Dispenser};
use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Default)]
struct Recorder {
    dispensed: Rc<RefCell<Vec<String>>>,
    ejected: Rc<RefCell<Vec<Denomination>>>,
}

impl Recorder {
    fn dispensed_count(&self) -> usize {
        self.dispensed.borrow().len()
    }

    fn ejected(&self) -> Vec<Denomination> {
        self.ejected.borrow().clone()
    }

    fn ejected_total(&self) -> Cents {
        self.ejected.borrow().iter().map(|c| c.value()).sum()
    }
}

struct RecordingDisplay;

impl Display for RecordingDisplay {
    fn balance_changed(&mut self, _amount: Cents) {}
}

struct RecordingDispenser(Recorder);

impl Dispenser for RecordingDispenser {
    fn dispense(&mut self, product: &Product) {
        self.0.dispensed.borrow_mut().push(product.name.clone());
    }

    fn eject_coin(&mut self, coin: Denomination) {
        self.0.ejected.borrow_mut().push(coin);
    }
}

fn machine_with_product(price: Cents) -> (VendingMachine, Recorder) {
    let recorder = Recorder::default();
    let machine = VendingMachine::builder()
        .product("Item", price)
        .display(RecordingDisplay)
        .dispenser(RecordingDispenser(recorder.clone()))
        .build()
        .unwrap();
    (machine, recorder)
}

prop_compose! {
    fn arbitrary_coin()(variant in 0..5u8) -> Denomination {
        match variant {
            0 => Denomination::Nickel,
            1 => Denomination::Dime,
            2 => Denomination::Quarter,
            3 => Denomination::Loonie,
            _ => Denomination::Toonie,
        }
    }
}

prop_compose! {
    fn payable_amount()(units in 1..=100u32) -> Cents {
        units * 5
    }
}

proptest! {
    #[test]
    fn inserted_amount_equals_the_sum_of_coins(
        coins in prop::collection::vec(arbitrary_coin(), 1..20)
    ) {
        let (mut machine, _) = machine_with_product(25);
        let expected: Cents = coins.iter().map(|c| c.value()).sum();

        for coin in coins {
            machine.handle_event(Event::InsertCoin(coin));
        }

        prop_assert_eq!(machine.current_state(), MachineState::AddingCoins);
        prop_assert_eq!(machine.inserted_amount(), expected);
    }

    #[test]
    fn change_sequence_conserves_the_amount(change in payable_amount()) {
        let coins = change_sequence(change);
        let total: Cents = coins.iter().map(|c| c.value()).sum();
        prop_assert_eq!(total, change);
    }

    #[test]
    fn change_sequence_is_largest_first(change in payable_amount()) {
        let values: Vec<Cents> = change_sequence(change).iter().map(|c| c.value()).collect();
        for pair in values.windows(2) {
            prop_assert!(pair[0] >= pair[1]);
        }
    }

    #[test]
    fn paid_selection_dispenses_and_returns_exact_change(
        coins in prop::collection::vec(arbitrary_coin(), 1..10),
        price in payable_amount(),
    ) {
        let inserted: Cents = coins.iter().map(|c| c.value()).sum();
        prop_assume!(inserted >= price);

        let (mut machine, recorder) = machine_with_product(price);
        for coin in coins {
            machine.handle_event(Event::InsertCoin(coin));
        }
        machine.handle_event(Event::SelectProduct("Item".into()));
        machine.handle_event(Event::Tick);

        prop_assert_eq!(machine.current_state(), MachineState::Waiting);
        prop_assert_eq!(machine.inserted_amount(), 0);
        prop_assert_eq!(machine.change_due(), 0);
        prop_assert_eq!(recorder.dispensed_count(), 1);
        prop_assert_eq!(recorder.ejected_total(), inserted - price);
    }

    #[test]
    fn underpaid_selection_changes_nothing(
        coins in prop::collection::vec(arbitrary_coin(), 1..10),
        price in payable_amount(),
    ) {
        let inserted: Cents = coins.iter().map(|c| c.value()).sum();
        prop_assume!(inserted < price);

        let (mut machine, recorder) = machine_with_product(price);
        for coin in coins {
            machine.handle_event(Event::InsertCoin(coin));
        }
        machine.handle_event(Event::SelectProduct("Item".into()));

        prop_assert_eq!(machine.current_state(), MachineState::AddingCoins);
        prop_assert_eq!(machine.inserted_amount(), inserted);
        prop_assert_eq!(recorder.dispensed_count(), 0);
    }

    #[test]
    fn return_request_refunds_everything_inserted(
        coins in prop::collection::vec(arbitrary_coin(), 1..10)
    ) {
        let inserted: Cents = coins.iter().map(|c| c.value()).sum();

        let (mut machine, recorder) = machine_with_product(25);
        for coin in coins {
            machine.handle_event(Event::InsertCoin(coin));
        }
        machine.handle_event(Event::RequestReturn);
        machine.handle_event(Event::Tick);

        prop_assert_eq!(machine.current_state(), MachineState::Waiting);
        prop_assert_eq!(machine.inserted_amount(), 0);
        prop_assert_eq!(recorder.ejected_total(), inserted);

        // Refund comes back greedily, largest coins first.
        let values: Vec<Cents> = recorder.ejected().iter().map(|c| c.value()).collect();
        for pair in values.windows(2) {
            prop_assert!(pair[0] >= pair[1]);
        }
    }

    #[test]
    fn selection_and_return_are_noops_while_waiting(use_return in any::<bool>()) {
        let (mut machine, recorder) = machine_with_product(25);

        if use_return {
            machine.handle_event(Event::RequestReturn);
        } else {
            machine.handle_event(Event::SelectProduct("Item".into()));
        }

        prop_assert_eq!(machine.current_state(), MachineState::Waiting);
        prop_assert_eq!(machine.inserted_amount(), 0);
        prop_assert_eq!(recorder.dispensed_count(), 0);
        prop_assert_eq!(recorder.ejected_total(), 0);
    }

    #[test]
    fn read_only_accessors_never_change_observable_state(
        coins in prop::collection::vec(arbitrary_coin(), 0..5)
    ) {
        let (mut machine, _) = machine_with_product(25);
        for coin in coins {
            machine.handle_event(Event::InsertCoin(coin));
        }

        let state = machine.current_state();
        let amount = machine.inserted_amount();
        let change = machine.change_due();
        let records = machine.transition_log().records().len();

        for _ in 0..3 {
            prop_assert_eq!(machine.current_state(), state);
            prop_assert_eq!(machine.inserted_amount(), amount);
            prop_assert_eq!(machine.change_due(), change);
            prop_assert_eq!(machine.transition_log().records().len(), records);
        }
    }
}
