//! Euro amounts used for request costs and invoice totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned when constructing an invalid monetary amount.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("amount must not be negative, got {0}")]
pub struct NegativeAmountError(pub Decimal);

/// Non-negative amount in euros.
///
/// # Examples
///
/// ```
/// use jetcare::money::Money;
///
/// assert_eq!(Money::euros(3200).to_string(), "€3.200");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

impl Money {
    /// Zero euros.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a validated amount.
    ///
    /// # Errors
    ///
    /// Returns [`NegativeAmountError`] when `amount` is below zero.
    pub fn new(amount: Decimal) -> Result<Self, NegativeAmountError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(NegativeAmountError(amount));
        }
        Ok(Self(amount))
    }

    /// Creates an amount of whole euros.
    #[must_use]
    pub fn euros(whole: u64) -> Self {
        Self(Decimal::from(whole))
    }

    /// Returns the underlying decimal amount.
    #[must_use]
    pub const fn amount(self) -> Decimal {
        self.0
    }

    /// Adds two amounts, returning `None` on overflow.
    #[must_use]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }
}

impl TryFrom<Decimal> for Money {
    type Error = NegativeAmountError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl fmt::Display for Money {
    /// Formats in the `nl-BE` style: `€3.200` or `€3.200,50`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.0.round_dp(2);
        let whole = group_thousands(&rounded.trunc().to_string());
        let fraction = rounded.fract();
        if fraction.is_zero() {
            return write!(f, "€{whole}");
        }
        let cents = (fraction * Decimal::ONE_HUNDRED).trunc().to_string();
        write!(f, "€{whole},{cents:0>2}")
    }
}

fn group_thousands(digits: &str) -> String {
    let mut reversed = String::with_capacity(digits.len() + digits.len().div_euclid(3));
    let mut run = 0_u8;
    for ch in digits.chars().rev() {
        if run == 3 {
            reversed.push('.');
            run = 0;
        }
        reversed.push(ch);
        run += 1;
    }
    reversed.chars().rev().collect()
}
