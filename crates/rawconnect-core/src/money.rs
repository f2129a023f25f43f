//! # Money Module
//!
//! Provides the `Money` type for prices and totals.
//!
//! ## Whole Rupees
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Every price in the marketplace is listed in whole rupees:              │
//! │                                                                         │
//! │    Fresh Tomatoes   ₹25/kg   (was ₹30)                                  │
//! │    Turmeric Powder  ₹180/kg  (was ₹220)                                 │
//! │                                                                         │
//! │  So the smallest unit IS the rupee. No paise, no floats.               │
//! │  The only fractional step is the discount badge, which is rounded      │
//! │  to a whole percent with integer arithmetic.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rawconnect_core::money::{discount_percent, Money};
//!
//! let price = Money::from_rupees(25);
//! assert_eq!((price * 10).rupees(), 250);
//! assert_eq!(price.to_string(), "₹25");
//!
//! // (30 - 25) / 30 = 16.67% → 17% OFF
//! assert_eq!(discount_percent(Money::from_rupees(30), price), 17);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

use crate::CURRENCY_SYMBOL;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in whole rupees.
///
/// Serializes as a bare integer so snapshots read `"price": 25`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole rupees.
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees)
    }

    /// Returns the value in rupees.
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Formats with thousands separators, e.g. `₹45,600`.
    ///
    /// The supplier dashboard shows monthly revenue this way.
    pub fn grouped(&self) -> String {
        let digits = self.0.unsigned_abs().to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 2);

        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }

        if self.0 < 0 {
            format!("-{}{}", CURRENCY_SYMBOL, out)
        } else {
            format!("{}{}", CURRENCY_SYMBOL, out)
        }
    }
}

// =============================================================================
// Arithmetic
// =============================================================================

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

/// Price × quantity.
impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, qty: i64) -> Money {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            write!(f, "-{}{}", CURRENCY_SYMBOL, self.0.unsigned_abs())
        } else {
            write!(f, "{}{}", CURRENCY_SYMBOL, self.0)
        }
    }
}

// =============================================================================
// Discounts
// =============================================================================

/// Percentage off the original price, rounded to the nearest whole percent.
///
/// ```text
///   round( (original − price) / original × 100 )
/// ```
///
/// Halves round toward positive infinity (12.5 → 13, −2.5 → −2). A price
/// above the original yields a negative percentage. An original price of
/// zero or less has no meaningful discount and yields 0.
pub fn discount_percent(original: Money, price: Money) -> i64 {
    let denom = original.rupees();
    if denom <= 0 {
        return 0;
    }

    // floor(x + 1/2) with x = num / denom, kept in integers
    let num = (denom - price.rupees()) * 100;
    (2 * num + denom).div_euclid(2 * denom)
}
