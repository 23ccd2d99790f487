//! Fixed-point athlete prices.
//!
//! Prices are quoted in millions with one decimal place (`£7.5m`), so they are
//! stored as tenths of a million. Squad values are then exact sums and do not
//! depend on slot order.

use derive_more::{Add, AddAssign, Sub, Sum};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tenths of a million per unit.
pub const PRICE_SCALE: i64 = 10;

/// Fixed-point price in tenths of a million.
///
/// - `Price(75)` = £7.5m
/// - `Price(1000)` = £100.0m
///
/// Signed so that a remaining budget can go negative while a squad is being built.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Add,
    AddAssign,
    Sub,
    Sum,
)]
pub struct Price(pub i64);

impl Price {
    pub const ZERO: Price = Price(0);

    /// Create from a value in millions, rounded to one decimal.
    #[inline]
    #[must_use]
    pub fn from_millions(millions: f64) -> Self {
        Self((millions * PRICE_SCALE as f64).round() as i64)
    }

    /// Convert to millions for display.
    #[inline]
    #[must_use]
    pub fn to_millions(self) -> f64 {
        self.0 as f64 / PRICE_SCALE as f64
    }

    #[inline]
    #[must_use]
    pub fn raw(self) -> i64 {
        self.0
    }

    #[inline]
    #[must_use]
    pub fn is_negative(self) -> bool {
        self.0 < 0
    }
}

impl<'a> std::iter::Sum<&'a Price> for Price {
    fn sum<I: Iterator<Item = &'a Price>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.abs();
        write!(f, "{}£{}.{}m", sign, abs / PRICE_SCALE, abs % PRICE_SCALE)
    }
}
