//! Static machine configuration.
//!
//! A machine is constructed once at startup from configuration: the
//! product catalog plus an actuator capability flag. When the flag is
//! off the machine gets the no-op dispenser no matter what the host
//! supplies.

pub mod error;

pub use error::ConfigError;

use crate::builder::BuildError;
use crate::core::{Catalog, Cents, Product};
use crate::machine::VendingMachine;
use crate::sinks::{Display, Dispenser, NullDispenser};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One catalog entry in a configuration file.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ProductConfig {
    pub name: String,
    pub price: Cents,
}

/// Machine configuration, deserializable from JSON.
///
/// # Example
///
/// ```rust
/// use coinslot::config::MachineConfig;
///
/// let config = MachineConfig::from_json(
///     r#"{ "products": [{ "name": "Chips", "price": 25 }], "actuator": true }"#,
/// )
/// .unwrap();
///
/// assert!(config.actuator);
/// assert_eq!(config.products.len(), 1);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Catalog entries in board order.
    pub products: Vec<ProductConfig>,
    /// Whether a physical actuator is attached.
    #[serde(default)]
    pub actuator: bool,
}

impl Default for MachineConfig {
    /// The stock board: five items priced one per denomination.
    fn default() -> Self {
        Self {
            products: vec![
                ProductConfig {
                    name: "Surprise".into(),
                    price: 5,
                },
                ProductConfig {
                    name: "Pop".into(),
                    price: 10,
                },
                ProductConfig {
                    name: "Chips".into(),
                    price: 25,
                },
                ProductConfig {
                    name: "Chocolate".into(),
                    price: 100,
                },
                ProductConfig {
                    name: "Beer".into(),
                    price: 200,
                },
            ],
            actuator: false,
        }
    }
}

impl MachineConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Load a configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// The configured catalog.
    pub fn catalog(&self) -> Catalog {
        let mut catalog = Catalog::new();
        for entry in &self.products {
            catalog.add(Product::new(entry.name.clone(), entry.price));
        }
        catalog
    }

    /// Build a machine from this configuration.
    ///
    /// `actuator` is used only when the capability flag says hardware is
    /// attached; otherwise the machine gets [`NullDispenser`] and the
    /// supplied actuator is dropped.
    pub fn into_machine(
        self,
        display: impl Display + 'static,
        actuator: impl Dispenser + 'static,
    ) -> Result<VendingMachine, BuildError> {
        let builder = VendingMachine::builder()
            .catalog(self.catalog())
            .display(display);

        let builder = if self.actuator {
            builder.dispenser(actuator)
        } else {
            tracing::debug!("no actuator attached; dispensing is a no-op");
            builder.dispenser(NullDispenser)
        };

        builder.build()
    }
}
