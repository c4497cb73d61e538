//! Builder API for wiring up a vending machine.
//!
//! The builder validates the catalog before the machine ever sees an
//! event: selection names must be unique, and every price must be
//! payable by the coin set so the change counter can always reach zero.

pub mod error;

pub use error::BuildError;

use crate::core::{Catalog, Cents, Denomination, Product};
use crate::machine::VendingMachine;
use crate::sinks::{Display, Dispenser, NullDisplay, NullDispenser};

/// Builder for a [`VendingMachine`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use coinslot::machine::VendingMachine;
/// use coinslot::sinks::{ConsoleDisplay, ConsoleDispenser};
///
/// let machine = VendingMachine::builder()
///     .product("Pop", 10)
///     .product("Chips", 25)
///     .display(ConsoleDisplay)
///     .dispenser(ConsoleDispenser)
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.catalog().len(), 2);
/// ```
pub struct VendingMachineBuilder {
    products: Vec<Product>,
    display: Option<Box<dyn Display>>,
    dispenser: Option<Box<dyn Dispenser>>,
}

impl VendingMachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            display: None,
            dispenser: None,
        }
    }

    /// Add one product to the catalog, in board order.
    pub fn product(mut self, name: impl Into<String>, price: Cents) -> Self {
        self.products.push(Product::new(name, price));
        self
    }

    /// Append every product of an existing catalog.
    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.products.extend(catalog.iter().cloned());
        self
    }

    /// Set the display collaborator. Defaults to [`NullDisplay`].
    pub fn display(mut self, display: impl Display + 'static) -> Self {
        self.display = Some(Box::new(display));
        self
    }

    /// Set the dispenser collaborator. Defaults to [`NullDispenser`].
    pub fn dispenser(mut self, dispenser: impl Dispenser + 'static) -> Self {
        self.dispenser = Some(Box::new(dispenser));
        self
    }

    /// Validate the catalog and build the machine.
    pub fn build(self) -> Result<VendingMachine, BuildError> {
        if self.products.is_empty() {
            return Err(BuildError::EmptyCatalog);
        }

        let unit = Denomination::smallest().value();
        let mut catalog = Catalog::new();
        for product in self.products {
            if catalog.get(&product.name).is_some() {
                return Err(BuildError::DuplicateProduct { name: product.name });
            }
            if product.price == 0 {
                return Err(BuildError::ZeroPrice { name: product.name });
            }
            if product.price % unit != 0 {
                return Err(BuildError::IndivisiblePrice {
                    name: product.name,
                    price: product.price,
                    unit,
                });
            }
            catalog.add(product);
        }

        let display = self.display.unwrap_or_else(|| Box::new(NullDisplay));
        let dispenser = self.dispenser.unwrap_or_else(|| Box::new(NullDispenser));

        Ok(VendingMachine::new(catalog, display, dispenser))
    }
}

impl Default for VendingMachineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
