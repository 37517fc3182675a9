//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In JavaScript/floating point:                                      │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Cents                                        │
//! │    All arithmetic happens on i64 cents. The persisted document      │
//! │    keeps decimal currency units ("price": 5.0) so the JSON file     │
//! │    stays human-readable, but values are converted to cents at the   │
//! │    serde boundary and never computed on as floats.                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use brew_core::money::Money;
//!
//! let price = Money::from_cents(550); // 5.50
//! let line = price * 3;               // 16.50
//! assert_eq!(line.cents(), 1650);
//! ```

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: profit estimates can legitimately go negative
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Custom serde**: the document format is decimal units, not cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Scales the amount by a fraction given in basis points, with rounding.
    ///
    /// 1 basis point = 0.01% = 1/10000. Used by the profit report, which
    /// models unit cost as a fixed fraction of list price (7000 bps = 70%).
    ///
    /// ## Implementation
    /// Integer math in i128: `(amount * bps + 5000) / 10000`
    /// The +5000 provides rounding (5000/10000 = 0.5).
    pub fn scale_bps(&self, bps: u32) -> Money {
        let scaled = (self.0 as i128 * bps as i128 + 5000) / 10000;
        Money(scaled as i64)
    }
}

// =============================================================================
// Serde: decimal units at the boundary, cents inside
// =============================================================================

/// Serializes as decimal currency units so the persisted document reads
/// `"price": 5.5` rather than `"price": 550`.
impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.0 as f64 / 100.0)
    }
}

/// Deserializes from decimal currency units, rounding to whole cents.
///
/// Non-finite input (NaN, infinities) is rejected outright: a not-a-number
/// amount is an invalid-numeric error, never a stored value.
impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let units = f64::deserialize(deserializer)?;
        if !units.is_finite() {
            return Err(de::Error::custom("monetary amount must be a finite number"));
        }
        Ok(Money((units * 100.0).round() as i64))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-friendly display in decimal units. UI formatting (currency symbol,
/// localization) belongs to the frontend.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.units().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summation for report aggregation.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.units(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);
        assert_eq!(a.multiply_quantity(2).cents(), 2000);
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 250, 399]
            .into_iter()
            .map(Money::from_cents)
            .sum();
        assert_eq!(total.cents(), 749);
    }

    #[test]
    fn test_scale_bps() {
        // 70% of 10.00 = 7.00
        let price = Money::from_cents(1000);
        assert_eq!(price.scale_bps(7000).cents(), 700);

        // Rounding: 70% of 0.05 = 0.035 → 0.04
        let tiny = Money::from_cents(5);
        assert_eq!(tiny.scale_bps(7000).cents(), 4);
    }

    #[test]
    fn test_serde_decimal_units() {
        let price = Money::from_cents(550);
        assert_eq!(serde_json::to_string(&price).unwrap(), "5.5");

        let parsed: Money = serde_json::from_str("5.5").unwrap();
        assert_eq!(parsed, price);

        // Integers in the document are fine too
        let parsed: Money = serde_json::from_str("15").unwrap();
        assert_eq!(parsed.cents(), 1500);
    }

    #[test]
    fn test_serde_rejects_non_numbers() {
        assert!(serde_json::from_str::<Money>("\"abc\"").is_err());
        assert!(serde_json::from_str::<Money>("null").is_err());
    }

    #[test]
    fn test_serde_round_trip_whole_cents() {
        for cents in [0, 1, 99, 100, 1099, 123456] {
            let money = Money::from_cents(cents);
            let json = serde_json::to_string(&money).unwrap();
            let back: Money = serde_json::from_str(&json).unwrap();
            assert_eq!(back, money);
        }
    }
}
