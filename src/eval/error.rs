#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error("{0}")]
    FractionError(#[from] crate::fraction::error::Error),
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),
    #[error("Expected 1 to 3 tokens, got {0}")]
    WrongTokenCount(usize),
}
