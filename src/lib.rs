//! Coinslot: a vending machine controller as a finite state machine.
//!
//! The controller follows a "pure core, imperative shell" split: each
//! event maps to a state change plus a list of emitted commands, and the
//! shell delivers those commands to the display and dispenser
//! collaborators supplied at construction. One event is fully resolved
//! before the next is read; there are no suspension points.
//!
//! # Core Concepts
//!
//! - **States**: `Waiting`, `AddingCoins`, `DeliveringProduct`,
//!   `CountingChange` — exactly one active at a time
//! - **Events**: coin inserts, selections, return requests, and the host
//!   poll pulse; events that do not apply are silently ignored
//! - **Change-making**: greedy largest-first over a canonical coin set,
//!   so the counted sequence is exact and deterministic
//!
//! # Example
//!
//! ```rust
//! use coinslot::core::{Denomination, Event};
//! use coinslot::machine::VendingMachine;
//! use coinslot::sinks::{ConsoleDisplay, ConsoleDispenser};
//!
//! let mut machine = VendingMachine::builder()
//!     .product("Pop", 10)
//!     .product("Chips", 25)
//!     .display(ConsoleDisplay)
//!     .dispenser(ConsoleDispenser)
//!     .build()
//!     .unwrap();
//!
//! machine.handle_event(Event::InsertCoin(Denomination::Quarter));
//! machine.handle_event(Event::SelectProduct("Chips".into()));
//!
//! assert!(machine.current_state().is_idle());
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod machine;
pub mod sinks;

// Re-export commonly used types
pub use crate::builder::{BuildError, VendingMachineBuilder};
pub use crate::config::{ConfigError, MachineConfig};
pub use crate::core::{Catalog, Cents, Command, Denomination, Event, MachineState, Product};
pub use crate::machine::VendingMachine;
