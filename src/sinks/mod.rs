//! Display and dispenser collaborators.
//!
//! The controller talks to the outside world through these traits,
//! supplied at construction time. All calls are fire-and-forget: the
//! core never waits on a collaborator or inspects a result, and a
//! collaborator fault is the collaborator's own concern.
//!
//! The null implementations are the capability fallback for bench setups
//! with no panel or actuator attached; the console implementations stand
//! in for real hardware by emitting `tracing` events.

use crate::core::{format_cents, Cents, Denomination, Product};

/// Receives balance updates for the customer-facing readout.
pub trait Display {
    /// Called with the new balance whenever the meter changes.
    /// Purely informational; no return value.
    fn balance_changed(&mut self, amount: Cents);
}

/// Actuates product release and the change hopper.
pub trait Dispenser {
    /// Release a purchased product.
    fn dispense(&mut self, product: &Product);

    /// Eject one coin of change.
    fn eject_coin(&mut self, coin: Denomination);
}

/// Display for a machine with no panel attached.
pub struct NullDisplay;

impl Display for NullDisplay {
    fn balance_changed(&mut self, _amount: Cents) {}
}

/// Dispenser for a machine with no actuator attached.
pub struct NullDispenser;

impl Dispenser for NullDispenser {
    fn dispense(&mut self, _product: &Product) {}

    fn eject_coin(&mut self, _coin: Denomination) {}
}

/// Logs balance updates, standing in for the total-inserted readout.
pub struct ConsoleDisplay;

impl Display for ConsoleDisplay {
    fn balance_changed(&mut self, amount: Cents) {
        tracing::info!("Total inserted: {}", format_cents(amount));
    }
}

/// Logs actuation, standing in for the servo and the change hopper.
pub struct ConsoleDispenser;

impl Dispenser for ConsoleDispenser {
    fn dispense(&mut self, product: &Product) {
        tracing::info!("Dispensing {}", product.name);
    }

    fn eject_coin(&mut self, coin: Denomination) {
        tracing::info!("Returning {coin}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_sinks_accept_everything() {
        let mut display = NullDisplay;
        let mut dispenser = NullDispenser;

        display.balance_changed(125);
        dispenser.dispense(&Product::new("Chips", 25));
        dispenser.eject_coin(Denomination::Nickel);
    }

    #[test]
    fn console_sinks_accept_everything() {
        let mut display = ConsoleDisplay;
        let mut dispenser = ConsoleDispenser;

        display.balance_changed(0);
        dispenser.dispense(&Product::new("Pop", 10));
        dispenser.eject_coin(Denomination::Toonie);
    }
}
