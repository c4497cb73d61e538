//! The vending machine controller.
//!
//! A four-state machine: credit accumulates while coins drop, a paid
//! selection dispenses, and owed change is counted out greedily. The
//! transition step is pure command emission; delivery to the display and
//! dispenser collaborators happens after the state change is applied.
//!
//! One event is fully processed, entry actions included, before the next
//! is accepted: [`handle_event`](VendingMachine::handle_event) is
//! synchronous, has no suspension points, and always terminates.

use crate::builder::VendingMachineBuilder;
use crate::core::{
    change_sequence, Catalog, Cents, Command, Event, MachineState, Product, TransitionLog,
    TransitionRecord,
};
use crate::sinks::{Display, Dispenser};
use chrono::Utc;

/// A finite-state vending machine controller.
///
/// # Example
///
/// ```rust
/// use coinslot::core::{Denomination, Event, MachineState};
/// use coinslot::machine::VendingMachine;
///
/// let mut machine = VendingMachine::builder()
///     .product("Chips", 25)
///     .build()
///     .unwrap();
///
/// machine.handle_event(Event::InsertCoin(Denomination::Quarter));
/// assert_eq!(machine.current_state(), MachineState::AddingCoins);
/// assert_eq!(machine.inserted_amount(), 25);
///
/// machine.handle_event(Event::SelectProduct("Chips".into()));
/// assert!(machine.current_state().is_idle());
/// ```
pub struct VendingMachine {
    state: MachineState,
    amount: Cents,
    change_due: Cents,
    selected: Option<Product>,
    catalog: Catalog,
    log: TransitionLog,
    display: Box<dyn Display>,
    dispenser: Box<dyn Dispenser>,
}

impl std::fmt::Debug for VendingMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VendingMachine")
            .field("state", &self.state)
            .field("amount", &self.amount)
            .field("change_due", &self.change_due)
            .field("selected", &self.selected)
            .field("catalog", &self.catalog)
            .field("log", &self.log)
            .finish_non_exhaustive()
    }
}

impl VendingMachine {
    /// Create a machine in `Waiting` with the given catalog and
    /// collaborators. [`builder`](VendingMachine::builder) is the
    /// validated front door; this constructor trusts its inputs.
    pub fn new(
        catalog: Catalog,
        display: Box<dyn Display>,
        dispenser: Box<dyn Dispenser>,
    ) -> Self {
        Self {
            state: MachineState::Waiting,
            amount: 0,
            change_due: 0,
            selected: None,
            catalog,
            log: TransitionLog::new(),
            display,
            dispenser,
        }
    }

    /// Start building a machine with a fluent API.
    pub fn builder() -> VendingMachineBuilder {
        VendingMachineBuilder::new()
    }

    /// Current state. Idempotent; never mutates.
    pub fn current_state(&self) -> MachineState {
        self.state
    }

    /// Credit currently on the meter, in cents.
    pub fn inserted_amount(&self) -> Cents {
        self.amount
    }

    /// Change still owed, in cents. Non-zero only while counting change.
    pub fn change_due(&self) -> Cents {
        self.change_due
    }

    /// The catalog this machine sells from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Log of the transitions taken so far.
    pub fn transition_log(&self) -> &TransitionLog {
        &self.log
    }

    /// Consume one external event.
    ///
    /// Applies the transition function for the current state, then
    /// delivers the emitted commands to the collaborators. Events that
    /// do not apply in the current state are silently ignored.
    pub fn handle_event(&mut self, event: Event) {
        let mut commands = Vec::new();
        self.step(&event, &mut commands);
        for command in commands {
            self.deliver(command);
        }
    }

    /// The transition function. Mutates controller state and emits
    /// commands; performs no I/O.
    fn step(&mut self, event: &Event, commands: &mut Vec<Command>) {
        match (self.state, event) {
            (MachineState::Waiting, Event::InsertCoin(coin)) => {
                self.amount += coin.value();
                commands.push(Command::ShowBalance(self.amount));
                self.enter(MachineState::AddingCoins, event, commands);
            }
            (MachineState::AddingCoins, Event::InsertCoin(coin)) => {
                self.amount += coin.value();
                commands.push(Command::ShowBalance(self.amount));
            }
            (MachineState::AddingCoins, Event::RequestReturn) => {
                self.change_due = self.amount;
                self.amount = 0;
                commands.push(Command::ShowBalance(0));
                self.enter(MachineState::CountingChange, event, commands);
            }
            (MachineState::AddingCoins, Event::SelectProduct(name)) => {
                let paid = self
                    .catalog
                    .get(name)
                    .filter(|product| self.amount >= product.price)
                    .cloned();
                // Unknown selections and underpaid ones fall through.
                if let Some(product) = paid {
                    self.selected = Some(product);
                    self.enter(MachineState::DeliveringProduct, event, commands);
                }
            }
            (MachineState::CountingChange, _) => {
                // Any event pulses the counter; the event itself is
                // not applied while change is owed.
                for coin in change_sequence(self.change_due) {
                    self.change_due -= coin.value();
                    commands.push(Command::ReturnCoin(coin));
                }
                if self.change_due == 0 {
                    self.enter(MachineState::Waiting, event, commands);
                }
            }
            // Event does not apply in this state.
            _ => {}
        }
    }

    /// Switch to `next` and run its entry actions.
    fn enter(&mut self, next: MachineState, event: &Event, commands: &mut Vec<Command>) {
        let from = self.state;
        tracing::debug!(state = from.name(), "exiting");
        tracing::debug!(state = next.name(), "entering");
        self.log = self.log.record(TransitionRecord {
            from,
            to: next,
            event: event.clone(),
            timestamp: Utc::now(),
        });
        self.state = next;

        match next {
            MachineState::Waiting => {
                self.amount = 0;
                self.selected = None;
            }
            MachineState::AddingCoins => {}
            MachineState::DeliveringProduct => {
                // Entry re-checks funds even though the selection path
                // already verified them; an unpaid entry dispenses
                // nothing but still leaves the state.
                if let Some(product) = self.selected.take() {
                    if self.amount >= product.price {
                        self.change_due = self.amount - product.price;
                        self.amount = 0;
                        commands.push(Command::Dispense(product));
                        commands.push(Command::ShowBalance(0));
                    }
                }
                if self.change_due > 0 {
                    self.enter(MachineState::CountingChange, event, commands);
                } else {
                    self.enter(MachineState::Waiting, event, commands);
                }
            }
            MachineState::CountingChange => {
                commands.push(Command::ShowBalance(self.amount));
            }
        }
    }

    /// Deliver one command to its collaborator.
    fn deliver(&mut self, command: Command) {
        match command {
            Command::ShowBalance(amount) => self.display.balance_changed(amount),
            Command::Dispense(product) => self.dispenser.dispense(&product),
            Command::ReturnCoin(coin) => self.dispenser.eject_coin(coin),
        }
    }
}
