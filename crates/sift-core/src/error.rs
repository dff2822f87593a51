//! Error types for Sift Core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    #[error("Invalid condition: {0}")]
    InvalidCondition(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
