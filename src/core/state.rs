//! Machine states.
//!
//! The controller is always in exactly one of these states. Transitions
//! are applied atomically: an event is fully resolved, entry actions
//! included, before the next event is read.

use serde::{Deserialize, Serialize};

/// The four states of the vending controller.
///
/// # Example
///
/// ```rust
/// use coinslot::core::MachineState;
///
/// let state = MachineState::Waiting;
/// assert_eq!(state.name(), "Waiting");
/// assert!(state.is_idle());
/// assert!(!MachineState::AddingCoins.is_idle());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum MachineState {
    /// No credit on the meter. Coin inserts start a session; selections
    /// and return requests are ignored.
    Waiting,
    /// Credit on the meter; accepting more coins, a selection, or a
    /// return request.
    AddingCoins,
    /// A paid selection is being dispensed. Transient: entry actions
    /// resolve it to `CountingChange` or `Waiting` within the same event.
    DeliveringProduct,
    /// Change is owed and is counted out by the next pulse.
    CountingChange,
}

impl MachineState {
    /// Name for display and logging.
    pub fn name(&self) -> &str {
        match self {
            Self::Waiting => "Waiting",
            Self::AddingCoins => "AddingCoins",
            Self::DeliveringProduct => "DeliveringProduct",
            Self::CountingChange => "CountingChange",
        }
    }

    /// Whether the machine is idle with no credit on the meter.
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Waiting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(MachineState::Waiting.name(), "Waiting");
        assert_eq!(MachineState::AddingCoins.name(), "AddingCoins");
        assert_eq!(MachineState::DeliveringProduct.name(), "DeliveringProduct");
        assert_eq!(MachineState::CountingChange.name(), "CountingChange");
    }

    #[test]
    fn only_waiting_is_idle() {
        assert!(MachineState::Waiting.is_idle());
        assert!(!MachineState::AddingCoins.is_idle());
        assert!(!MachineState::DeliveringProduct.is_idle());
        assert!(!MachineState::CountingChange.is_idle());
    }

    #[test]
    fn state_serializes_correctly() {
        let json = serde_json::to_string(&MachineState::CountingChange).unwrap();
        let deserialized: MachineState = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, MachineState::CountingChange);
    }

    #[test]
    fn state_is_comparable() {
        assert_eq!(MachineState::Waiting, MachineState::Waiting);
        assert_ne!(MachineState::Waiting, MachineState::AddingCoins);
    }
}
