use thiserror::Error;

/// Errors raised when constructing a car.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CarError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
