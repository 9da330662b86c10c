use std::{cmp::Ordering, fmt};

use crate::{eval::error::Error, fraction::Fraction};

pub mod error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOp {
    Invert,
    Negate,
    IntegerPart,
    FractionPart,
    Decimal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Compare,
}

impl UnaryOp {
    fn from_keyword(keyword: &str) -> Result<Self, Error> {
        match keyword {
            "inv" => Ok(UnaryOp::Invert),
            "neg" => Ok(UnaryOp::Negate),
            "int" => Ok(UnaryOp::IntegerPart),
            "frac" => Ok(UnaryOp::FractionPart),
            "dec" => Ok(UnaryOp::Decimal),
            _ => Err(Error::UnknownOperator(keyword.to_string())),
        }
    }
}

impl BinaryOp {
    fn from_symbol(symbol: &str) -> Result<Self, Error> {
        match symbol {
            "+" => Ok(BinaryOp::Add),
            "-" => Ok(BinaryOp::Subtract),
            "*" | "x" => Ok(BinaryOp::Multiply),
            "/" | ":" => Ok(BinaryOp::Divide),
            "cmp" => Ok(BinaryOp::Compare),
            _ => Err(Error::UnknownOperator(symbol.to_string())),
        }
    }
}

/// A single evaluation step over already parsed operands.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Expression {
    Value(Fraction),
    Unary {
        op: UnaryOp,
        operand: Fraction,
    },
    Binary {
        op: BinaryOp,
        lhs: Fraction,
        rhs: Fraction,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    Fraction(Fraction),
    Integer(i64),
    Decimal(f64),
    Ordering(Ordering),
}

impl Value {
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Value::Fraction(f) => Some(f.to_f64()),
            Value::Integer(i) => Some(*i as f64),
            Value::Decimal(d) => Some(*d),
            Value::Ordering(_) => None,
        }
    }

    /// Output lines for the value, followed by its decimal approximation when asked for.
    pub fn render(&self, decimal: bool) -> String {
        match self.to_f64() {
            Some(approx) if decimal => format!("{self}\n~ {approx}"),
            _ => self.to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Fraction(fraction) => write!(f, "{fraction}"),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Decimal(d) => write!(f, "{d}"),
            Value::Ordering(Ordering::Less) => write!(f, "<"),
            Value::Ordering(Ordering::Equal) => write!(f, "="),
            Value::Ordering(Ordering::Greater) => write!(f, ">"),
        }
    }
}

// fraction text first, then a finite decimal literal approximated with `denominator`
pub fn parse_operand(token: &str, denominator: i64) -> Result<Fraction, Error> {
    let err = match token.parse::<Fraction>() {
        Ok(value) => return Ok(value),
        Err(err) => err,
    };
    match token.parse::<f64>() {
        Ok(decimal) if decimal.is_finite() => {
            let value = Fraction::from_f64(decimal, denominator)?;
            log::debug!("approximated {token} as {value}");
            Ok(value)
        }
        _ => Err(err.into()),
    }
}

impl Expression {
    /// Builds an expression from `x`, `<unary> x` or `x <binary> y` tokens.
    pub fn parse(tokens: &[&str], denominator: i64) -> Result<Self, Error> {
        match tokens {
            [value] => Ok(Expression::Value(parse_operand(value, denominator)?)),
            [op, operand] => Ok(Expression::Unary {
                op: UnaryOp::from_keyword(op)?,
                operand: parse_operand(operand, denominator)?,
            }),
            [lhs, op, rhs] => Ok(Expression::Binary {
                op: BinaryOp::from_symbol(op)?,
                lhs: parse_operand(lhs, denominator)?,
                rhs: parse_operand(rhs, denominator)?,
            }),
            _ => Err(Error::WrongTokenCount(tokens.len())),
        }
    }

    /// Same as [`Expression::parse`], splitting each argument on whitespace first,
    /// so `["1/2 +", "1/3"]` and `["1/2", "+", "1/3"]` are the same expression.
    pub fn parse_args<S: AsRef<str>>(args: &[S], denominator: i64) -> Result<Self, Error> {
        let tokens: Vec<&str> = args
            .iter()
            .flat_map(|arg| arg.as_ref().split_whitespace())
            .collect();
        Self::parse(&tokens, denominator)
    }

    pub fn evaluate(&self) -> Result<Value, Error> {
        log::debug!("evaluating {:?}", self);
        let value = match *self {
            Expression::Value(value) => Value::Fraction(value),
            Expression::Unary { op, operand } => match op {
                UnaryOp::Invert => Value::Fraction(operand.inverse()?),
                UnaryOp::Negate => Value::Fraction(-operand),
                UnaryOp::IntegerPart => Value::Integer(operand.integer_part()),
                UnaryOp::FractionPart => Value::Fraction(operand.fraction_part()),
                UnaryOp::Decimal => Value::Decimal(operand.to_f64()),
            },
            Expression::Binary { op, lhs, rhs } => match op {
                BinaryOp::Add => Value::Fraction(lhs + rhs),
                BinaryOp::Subtract => Value::Fraction(lhs - rhs),
                BinaryOp::Multiply => Value::Fraction(lhs * rhs),
                BinaryOp::Divide => Value::Fraction(lhs.divide(rhs)?),
                BinaryOp::Compare => Value::Ordering(lhs.cmp(&rhs)),
            },
        };
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fraction::{error::Error as FractionError, tests::frac};

    const DENOMINATOR: i64 = 1000;

    fn eval(input: &str) -> Result<Value, Error> {
        let tokens: Vec<&str> = input.split_whitespace().collect();
        Expression::parse(&tokens, DENOMINATOR)?.evaluate()
    }

    #[test]
    fn test_parse_operand() {
        assert_eq!(parse_operand("3/4", DENOMINATOR), Ok(frac(3, 4)));
        assert_eq!(parse_operand("0.25", DENOMINATOR), Ok(frac(1, 4)));
        assert_eq!(parse_operand("0.3333", 3), Ok(frac(1, 3)));
        assert_eq!(
            parse_operand("0.5", 0),
            Err(Error::FractionError(FractionError::InvalidArgument(
                "denominator must be positive, got 0".to_string()
            )))
        );
        assert_eq!(
            parse_operand("inf", DENOMINATOR),
            Err(Error::FractionError(FractionError::InvalidFormat(
                "inf".to_string()
            )))
        );
        assert_eq!(
            parse_operand("1/0", DENOMINATOR),
            Err(Error::FractionError(FractionError::InvalidFraction))
        );
    }

    #[test]
    fn test_binary() {
        assert_eq!(eval("1/2 + 1/3"), Ok(Value::Fraction(frac(5, 6))));
        assert_eq!(eval("1/2 - 1/3"), Ok(Value::Fraction(frac(1, 6))));
        assert_eq!(eval("2/3 * 3/4"), Ok(Value::Fraction(frac(1, 2))));
        assert_eq!(eval("1/2 / 1/4"), Ok(Value::Fraction(frac(2, 1))));
        assert_eq!(eval("1/3 cmp 1/2"), Ok(Value::Ordering(Ordering::Less)));
        assert_eq!(eval("2/4 cmp 1/2"), Ok(Value::Ordering(Ordering::Equal)));
    }

    #[test]
    fn test_unary() {
        assert_eq!(eval("inv -2/3"), Ok(Value::Fraction(frac(-3, 2))));
        assert_eq!(eval("neg 2/3"), Ok(Value::Fraction(frac(-2, 3))));
        assert_eq!(eval("int 7/2"), Ok(Value::Integer(3)));
        assert_eq!(eval("frac 7/2"), Ok(Value::Fraction(frac(1, 2))));
        assert_eq!(eval("dec 3/4"), Ok(Value::Decimal(0.75)));
        assert_eq!(eval("12/8"), Ok(Value::Fraction(frac(3, 2))));
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            eval("1/2 / 0"),
            Err(Error::FractionError(FractionError::DivisionByZero))
        );
        assert_eq!(
            eval("inv 0"),
            Err(Error::FractionError(FractionError::DivisionByZero))
        );
        assert_eq!(
            eval("1/2 % 1/3"),
            Err(Error::UnknownOperator("%".to_string()))
        );
        assert_eq!(eval("sqrt 4"), Err(Error::UnknownOperator("sqrt".to_string())));
        assert_eq!(eval(""), Err(Error::WrongTokenCount(0)));
        assert_eq!(eval("1 + 2 + 3"), Err(Error::WrongTokenCount(5)));
    }

    #[test]
    fn test_parse_args() {
        let joined = Expression::parse_args(&["1/2 +", " 1/3 "], DENOMINATOR).unwrap();
        let split = Expression::parse_args(&["1/2", "+", "1/3"], DENOMINATOR).unwrap();
        assert_eq!(joined, split);
        assert_eq!(joined.evaluate(), Ok(Value::Fraction(frac(5, 6))));

        let owned = vec!["int".to_string(), "7/2".to_string()];
        assert_eq!(
            Expression::parse_args(&owned, DENOMINATOR),
            Ok(Expression::Unary {
                op: UnaryOp::IntegerPart,
                operand: frac(7, 2),
            })
        );
        assert_eq!(
            Expression::parse_args::<&str>(&[], DENOMINATOR),
            Err(Error::WrongTokenCount(0))
        );
        assert_eq!(
            Expression::parse_args(&["  "], DENOMINATOR),
            Err(Error::WrongTokenCount(0))
        );
    }

    #[test]
    fn test_render() {
        let half = Value::Fraction(frac(1, 2));
        assert_eq!(half.render(false), "1/2");
        assert_eq!(half.render(true), "1/2\n~ 0.5");
        assert_eq!(Value::Integer(3).render(true), "3\n~ 3");
        assert_eq!(Value::Ordering(Ordering::Equal).render(true), "=");
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Fraction(frac(-3, 4)).to_string(), "-3/4");
        assert_eq!(Value::Integer(5).to_string(), "5");
        assert_eq!(Value::Decimal(0.5).to_string(), "0.5");
        assert_eq!(Value::Ordering(Ordering::Greater).to_string(), ">");
        assert_eq!(Value::Ordering(Ordering::Less).to_f64(), None);
        assert_eq!(Value::Integer(2).to_f64(), Some(2.0));
    }
}
