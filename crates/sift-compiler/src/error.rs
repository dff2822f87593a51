//! Compiler error types

use thiserror::Error;

/// Compiler error
#[derive(Error, Debug)]
pub enum CompileError {
    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Group with zero or multiple variants set
    #[error("Invalid group: {0}")]
    InvalidGroup(String),

    /// Group variant with an empty condition list
    #[error("Empty group: '{0}' requires at least one condition")]
    EmptyGroup(String),

    /// Invalid leaf condition
    #[error(transparent)]
    CoreError(#[from] sift_core::CoreError),
}

/// Result type for compiler operations
pub type Result<T> = std::result::Result<T, CompileError>;
