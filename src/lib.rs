pub mod config;
pub mod eval;
pub mod fraction;

pub use fraction::{Fraction, error::Error};
