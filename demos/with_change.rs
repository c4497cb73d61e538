//! Purchase with change, then a coin return, scripted.
//!
//! A toonie buys a $1 chocolate bar, so a loonie comes back on the next
//! pulse. A second session then returns its coins untouched.
//!
//! Run with: cargo run --example with_change

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

    // $2 in, $1 chocolate out, $1 back.
    machine.handle_event(Event::InsertCoin(Denomination::Toonie));
    machine.handle_event(Event::SelectProduct("Chocolate".into()));
    machine.handle_event(Event::Tick);

    // Change of heart: coins go in, the return lever gets them back.
    machine.handle_event(Event::InsertCoin(Denomination::Quarter));
    machine.handle_event(Event::InsertCoin(Denomination::Dime));
    machine.handle_event(Event::RequestReturn);
    machine.handle_event(Event::Tick);

    tracing::info!(
        transitions = machine.transition_log().records().len(),
        "machine settled after both sessions"
    );
}
