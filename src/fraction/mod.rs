use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::fraction::error::Error;

mod convert;
pub mod error;
mod fmt;
mod ops;

/// Rational number `numerator/denominator` kept in lowest terms.
///
/// The denominator is always positive and coprime with the numerator, so two
/// fractions are equal exactly when their fields are equal. Intermediate
/// products in arithmetic and comparison are plain `i64` operations and are
/// not guarded against overflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

impl Fraction {
    pub const ZERO: Fraction = Fraction {
        numerator: 0,
        denominator: 1,
    };
    pub const ONE: Fraction = Fraction {
        numerator: 1,
        denominator: 1,
    };

    pub fn new(numerator: i64, denominator: i64) -> Result<Self, Error> {
        if denominator == 0 {
            return Err(Error::InvalidFraction);
        }
        Ok(Self::reduced(numerator, denominator))
    }

    // caller guarantees a non-zero denominator
    fn reduced(numerator: i64, denominator: i64) -> Self {
        let (numerator, denominator) = if denominator < 0 {
            (-numerator, -denominator)
        } else {
            (numerator, denominator)
        };
        // divisor never exceeds the positive denominator, so it fits back into i64
        let divisor = gcd(numerator.unsigned_abs(), denominator.unsigned_abs()) as i64;
        Fraction {
            numerator: numerator / divisor,
            denominator: denominator / divisor,
        }
    }

    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    pub fn denominator(&self) -> i64 {
        self.denominator
    }
}

// Euclidean remainder loop, gcd(a, 0) == a
pub(crate) fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a
}

impl Default for Fraction {
    fn default() -> Self {
        Fraction::ZERO
    }
}

impl From<i64> for Fraction {
    fn from(value: i64) -> Self {
        Fraction {
            numerator: value,
            denominator: 1,
        }
    }
}

impl Ord for Fraction {
    // both denominators are positive, so cross products keep the order
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.numerator * other.denominator;
        let rhs = other.numerator * self.denominator;
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
