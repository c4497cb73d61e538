//! Currency types and change-making.
//!
//! All amounts are integer minor units (cents), so balance arithmetic is
//! exact. The coin set is fixed and forms a canonical denomination system:
//! greedy largest-first change-making always reaches an exact result.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Amount in minor currency units (cents).
pub type Cents = u32;

/// A coin the machine accepts.
///
/// # Example
///
/// ```rust
/// use coinslot::core::Denomination;
///
/// assert_eq!(Denomination::Quarter.value(), 25);
/// assert_eq!(Denomination::Toonie.value(), 200);
/// assert_eq!(Denomination::Nickel.to_string(), "5¢");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Denomination {
    Nickel,
    Dime,
    Quarter,
    Loonie,
    Toonie,
}

impl Denomination {
    /// All denominations, largest first.
    ///
    /// The change counter walks this order, so it is part of the machine's
    /// observable contract: change of 85 comes back as three quarters and
    /// a dime, never as smaller coins.
    pub const DESCENDING: [Denomination; 5] = [
        Denomination::Toonie,
        Denomination::Loonie,
        Denomination::Quarter,
        Denomination::Dime,
        Denomination::Nickel,
    ];

    /// Face value in cents.
    pub const fn value(self) -> Cents {
        match self {
            Self::Nickel => 5,
            Self::Dime => 10,
            Self::Quarter => 25,
            Self::Loonie => 100,
            Self::Toonie => 200,
        }
    }

    /// The smallest coin in the set. Every price must be a multiple of
    /// this value or change could never be counted down to zero.
    pub const fn smallest() -> Denomination {
        Denomination::Nickel
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Nickel => "5¢",
            Self::Dime => "10¢",
            Self::Quarter => "25¢",
            Self::Loonie => "$1",
            Self::Toonie => "$2",
        };
        write!(f, "{label}")
    }
}

/// Format a minor-unit amount as dollars.
///
/// ```rust
/// use coinslot::core::format_cents;
///
/// assert_eq!(format_cents(0), "$0.00");
/// assert_eq!(format_cents(125), "$1.25");
/// assert_eq!(format_cents(5), "$0.05");
/// ```
pub fn format_cents(amount: Cents) -> String {
    format!("${}.{:02}", amount / 100, amount % 100)
}

/// Compute the coin sequence for `change` under the greedy policy:
/// denominations largest first, each repeated while it still fits.
///
/// An amount that is not a multiple of the smallest coin leaves a
/// remainder that no coin covers; the builder rejects prices that could
/// produce one.
///
/// ```rust
/// use coinslot::core::{change_sequence, Denomination};
///
/// assert_eq!(
///     change_sequence(85),
///     vec![
///         Denomination::Quarter,
///         Denomination::Quarter,
///         Denomination::Quarter,
///         Denomination::Dime,
///     ],
/// );
/// ```
pub fn change_sequence(change: Cents) -> Vec<Denomination> {
    let mut remaining = change;
    let mut coins = Vec::new();
    for coin in Denomination::DESCENDING {
        while remaining >= coin.value() {
            remaining -= coin.value();
            coins.push(coin);
        }
    }
    coins
}
