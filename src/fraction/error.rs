#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Denominator cannot be zero")]
    InvalidFraction,
    #[error("Division by zero in fraction")]
    DivisionByZero,
    #[error("Invalid fraction format: {0:?}")]
    InvalidFormat(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
