use crate::fraction::{Fraction, error::Error};

impl Fraction {
    /// Integer part, truncated toward zero.
    pub fn integer_part(self) -> i64 {
        self.numerator / self.denominator
    }

    /// What is left after removing [`Fraction::integer_part`]. Carries the sign of the numerator.
    pub fn fraction_part(self) -> Fraction {
        Fraction::reduced(self.numerator % self.denominator, self.denominator)
    }

    pub fn to_f64(self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Closest fraction to `value` with the given positive denominator, reduced.
    ///
    /// Halves round up (`-2.5` becomes `-2`). NaN maps to zero and infinities saturate
    /// at the `i64` bounds.
    pub fn from_f64(value: f64, denominator: i64) -> Result<Fraction, Error> {
        if denominator <= 0 {
            return Err(Error::InvalidArgument(format!(
                "denominator must be positive, got {denominator}"
            )));
        }
        // compare the remainder instead of flooring `scaled + 0.5`, which can round up early
        let scaled = value * denominator as f64;
        let floor = scaled.floor();
        let rounded = if scaled - floor >= 0.5 { floor + 1.0 } else { floor };
        let numerator = rounded as i64;
        Ok(Fraction::reduced(numerator, denominator))
    }
}

impl From<Fraction> for f64 {
    fn from(value: Fraction) -> Self {
        value.to_f64()
    }
}
