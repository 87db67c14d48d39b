//! # Error Types
//!
//! Errors raised by the shared collaborators: looking up, inserting and
//! overwriting entries of a variable assignment.
//!
//! These are contract breaches by the caller (asking for a key that was
//! never assigned, assigning it twice), so they carry the offending key
//! rather than any numerical detail.

use thiserror::Error;

use crate::key::Key;

/// Core errors for variable assignments.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The assignment has no entry for this key.
    #[error("Missing key {key} in variable assignment")]
    MissingKey { key: Key },

    /// The assignment already has an entry for this key.
    #[error("Key {key} is already present in variable assignment")]
    DuplicateKey { key: Key },

    /// An entry does not have the dimension the caller expects.
    #[error("Dimension mismatch for key {key}: expected {expected}, got {got}")]
    DimensionMismatch {
        key: Key,
        expected: usize,
        got: usize,
    },
}
