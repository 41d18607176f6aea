//! Input-validation errors shared across the exercise functions.
//!
//! The policy is to fail fast with a descriptive error instead of returning a
//! sentinel such as `-1`, which would be indistinguishable from a legitimate
//! negative result.

/// Errors produced by the fallible functions in this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The two input sequences must have the same length.
    #[error("input sequences differ in length: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
    /// The input sequence must be non-empty.
    #[error("input sequence is empty")]
    EmptyInput,
}
