//! Transition log.
//!
//! In-memory, immutable record of the transitions a machine has taken.
//! Observability only; nothing is persisted across restarts.

use super::event::Event;
use super::state::MachineState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state transition and the event that caused it.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The state being left.
    pub from: MachineState,
    /// The state being entered.
    pub to: MachineState,
    /// The event that triggered the transition.
    pub event: Event,
    /// When the transition occurred.
    pub timestamp: DateTime<Utc>,
}

/// Ordered log of state transitions.
///
/// The log is immutable: [`record`](TransitionLog::record) returns a new
/// log with the transition appended.
///
/// # Example
///
/// ```rust
/// use coinslot::core::{Event, MachineState, TransitionLog, TransitionRecord};
/// use coinslot::core::Denomination;
/// use chrono::Utc;
///
/// let log = TransitionLog::new();
/// let log = log.record(TransitionRecord {
///     from: MachineState::Waiting,
///     to: MachineState::AddingCoins,
///     event: Event::InsertCoin(Denomination::Quarter),
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(log.path(), vec![MachineState::Waiting, MachineState::AddingCoins]);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TransitionLog {
    records: Vec<TransitionRecord>,
}

impl TransitionLog {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a transition, returning a new log.
    pub fn record(&self, record: TransitionRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// The path of states traversed: the initial state, then the `to`
    /// state of each transition.
    pub fn path(&self) -> Vec<MachineState> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(first.from);
        }
        for record in &self.records {
            path.push(record.to);
        }
        path
    }

    /// Elapsed time between the first and last recorded transition.
    /// `None` when the log is empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// All records in order.
    pub fn records(&self) -> &[TransitionRecord] {
        &self.records
    }
}
