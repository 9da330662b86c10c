use std::{
    iter::{Product, Sum},
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use crate::fraction::{Fraction, error::Error, gcd};

// least common multiple of two positive denominators,
// divided before multiplying to keep the intermediate value small
fn lcm(a: i64, b: i64) -> i64 {
    a / gcd(a as u64, b as u64) as i64 * b
}

impl Fraction {
    // numerators of both operands scaled to their least common denominator
    fn common_terms(self, rhs: Fraction) -> (i64, i64, i64) {
        let common = lcm(self.denominator, rhs.denominator);
        (
            self.numerator * (common / self.denominator),
            rhs.numerator * (common / rhs.denominator),
            common,
        )
    }

    /// `d/n` for `n/d`. Zero has no inverse.
    pub fn inverse(self) -> Result<Fraction, Error> {
        if self.numerator == 0 {
            return Err(Error::DivisionByZero);
        }
        Ok(Fraction::reduced(self.denominator, self.numerator))
    }

    pub fn divide(self, rhs: Fraction) -> Result<Fraction, Error> {
        Ok(self * rhs.inverse()?)
    }
}

impl Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        let (lhs, rhs, common) = self.common_terms(rhs);
        Fraction::reduced(lhs + rhs, common)
    }
}

impl Sub for Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Fraction) -> Fraction {
        let (lhs, rhs, common) = self.common_terms(rhs);
        Fraction::reduced(lhs - rhs, common)
    }
}

impl Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        Fraction::reduced(
            self.numerator * rhs.numerator,
            self.denominator * rhs.denominator,
        )
    }
}

impl Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl AddAssign for Fraction {
    fn add_assign(&mut self, rhs: Fraction) {
        *self = *self + rhs;
    }
}

impl SubAssign for Fraction {
    fn sub_assign(&mut self, rhs: Fraction) {
        *self = *self - rhs;
    }
}

impl MulAssign for Fraction {
    fn mul_assign(&mut self, rhs: Fraction) {
        *self = *self * rhs;
    }
}

impl Sum for Fraction {
    fn sum<I: Iterator<Item = Fraction>>(iter: I) -> Self {
        iter.fold(Fraction::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Fraction> for Fraction {
    fn sum<I: Iterator<Item = &'a Fraction>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Product for Fraction {
    fn product<I: Iterator<Item = Fraction>>(iter: I) -> Self {
        iter.fold(Fraction::ONE, Mul::mul)
    }
}

impl<'a> Product<&'a Fraction> for Fraction {
    fn product<I: Iterator<Item = &'a Fraction>>(iter: I) -> Self {
        iter.copied().product()
    }
}
