//! Exact-change purchase, scripted.
//!
//! Builds a machine from the stock configuration, drops in a quarter,
//! and buys chips. No change is owed, so the machine settles straight
//! back to idle.
//!
//! Run with: cargo run --example exact_change

use coinslot::core::{Denomination, Event};
use coinslot::sinks::{ConsoleDisplay, ConsoleDispenser};
use coinslot::MachineConfig;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();

    let mut config = MachineConfig::default();
    config.actuator = true;

    let mut machine = config
        .into_machine(ConsoleDisplay, ConsoleDispenser)
        .expect("stock configuration always builds");

    machine.handle_event(Event::InsertCoin(Denomination::Quarter));
    machine.handle_event(Event::SelectProduct("Chips".into()));

    tracing::info!(
        state = machine.current_state().name(),
        "machine settled after an exact-change purchase"
    );
}
