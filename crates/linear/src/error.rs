//! Error types for linear-Gaussian operations.

use compositional_core::{CoreError, Key};
use thiserror::Error;

/// Errors that can occur when building or solving a Gaussian conditional.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LinearError {
    /// A triangular solve produced a non-finite value.
    ///
    /// The key is the first frontal variable of the offending conditional.
    #[error("Indeterminate linear system detected while working near variable {key}")]
    IndeterminateSystem { key: Key },

    /// The operation scales by sigmas but the conditional has no noise model.
    #[error("Operation requires a noise model but the conditional has none")]
    MissingNoiseModel,

    /// A sigma is zero, negative or not finite.
    #[error("Invalid noise model: sigma[{index}] = {sigma} (must be finite and positive)")]
    InvalidNoiseModel { index: usize, sigma: f64 },

    /// Block sizes don't agree.
    #[error("Dimension mismatch in {what}: expected {expected}, got {got}")]
    DimensionMismatch {
        what: String,
        expected: usize,
        got: usize,
    },

    /// The triangular matrix is not square.
    #[error("R must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// A conditional needs at least one frontal variable.
    #[error("Conditional must have at least one frontal variable")]
    EmptyFrontals,

    /// A key appears more than once among frontals and parents.
    #[error("Key {key} appears more than once in the conditional")]
    RepeatedKey { key: Key },

    /// A variable assignment could not be read or written.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl LinearError {
    pub(crate) fn dimension(what: impl Into<String>, expected: usize, got: usize) -> Self {
        Self::DimensionMismatch {
            what: what.into(),
            expected,
            got,
        }
    }
}
