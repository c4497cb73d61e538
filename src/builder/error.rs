//! Build errors for the machine builder.

use crate::core::Cents;
use thiserror::Error;

/// Errors that can occur when building a vending machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("catalog is empty. Add at least one product")]
    EmptyCatalog,

    #[error("duplicate product '{name}' in catalog")]
    DuplicateProduct { name: String },

    #[error("product '{name}' has a zero price")]
    ZeroPrice { name: String },

    #[error(
        "price {price} of '{name}' is not payable by the coin set (must be a multiple of {unit})"
    )]
    IndivisiblePrice {
        name: String,
        price: Cents,
        unit: Cents,
    },
}
