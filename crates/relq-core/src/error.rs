//! Error types for relq.

use thiserror::Error;

/// The main error type for relq operations.
#[derive(Debug, Error)]
pub enum Error {
    /// An aggregate that needs at least one element was given none
    #[error("Sequence contains no elements: {0}")]
    EmptySequence(&'static str),

    /// A decimal aggregate left the representable range
    #[error("Arithmetic overflow in {0}")]
    Overflow(&'static str),

    /// Invalid configuration (sort spec shape, log level, thresholds)
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A predicate pattern failed to compile
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Two elements produced the same unique key
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    /// Input data violates a model invariant
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for relq operations.
pub type Result<T> = std::result::Result<T, Error>;
