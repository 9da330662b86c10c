use std::{fmt, str::FromStr};

use crate::fraction::{Fraction, error::Error};

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            return write!(f, "{}", self.numerator);
        }
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

fn parse_integer(token: &str, input: &str) -> Result<i64, Error> {
    token
        .parse::<i64>()
        .map_err(|_| Error::InvalidFormat(input.to_string()))
}

/// Accepts `n` or `n/d`, the forms produced by `Display`.
impl FromStr for Fraction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(Error::InvalidFormat(s.to_string()));
        }
        let Some((numerator, denominator)) = s.split_once('/') else {
            return Ok(Fraction::from(parse_integer(s, s)?));
        };
        // empty tokens are rejected by the integer parser
        if denominator.contains('/') {
            return Err(Error::InvalidFormat(s.to_string()));
        }
        Fraction::new(parse_integer(numerator, s)?, parse_integer(denominator, s)?)
    }
}

impl TryFrom<String> for Fraction {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Fraction> for String {
    fn from(value: Fraction) -> Self {
        value.to_string()
    }
}
