//! External events consumed by the controller.

use super::money::Denomination;
use serde::{Deserialize, Serialize};

/// One discrete stimulus from the event source.
///
/// The controller consumes events one at a time via
/// [`handle_event`](crate::machine::VendingMachine::handle_event); an
/// event that does not apply in the current state is silently ignored.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Event {
    /// A coin dropped in the slot.
    InsertCoin(Denomination),
    /// A selection button pressed, by catalog name.
    SelectProduct(String),
    /// The coin-return lever pulled.
    RequestReturn,
    /// Host poll pulse. Carries no input; it drives the change counter
    /// when the machine is counting out coins.
    Tick,
}
