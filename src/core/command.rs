//! Commands emitted by transitions.

use super::catalog::Product;
use super::money::{Cents, Denomination};
use serde::{Deserialize, Serialize};

/// A side effect requested by a transition.
///
/// The transition step emits commands as plain values; the machine shell
/// delivers them to the display and dispenser collaborators after the
/// state change is applied. Delivery is fire-and-forget: the core never
/// waits on a collaborator.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Command {
    /// Update the balance readout.
    ShowBalance(Cents),
    /// Release the named product.
    Dispense(Product),
    /// Eject one coin from the change hopper.
    ReturnCoin(Denomination),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_roundtrips_through_serde() {
        let commands = vec![
            Command::ShowBalance(35),
            Command::Dispense(Product::new("Chips", 25)),
            Command::ReturnCoin(Denomination::Dime),
        ];
        let json = serde_json::to_string(&commands).unwrap();
        let back: Vec<Command> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, commands);
    }
}
