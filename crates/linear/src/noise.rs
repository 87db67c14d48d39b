//! Diagonal noise models.
//!
//! A [`Diagonal`] holds one standard deviation per row of a linear system.
//! Conditionals produced by elimination are usually whitened already, so
//! their rows carry unit noise; the sigmas are kept around so solutions can
//! be mapped back ("unwhitened") when a caller asks for it.

use std::fmt;

use compositional_core::format_vector;
use nalgebra::DVector;
use serde::{Deserialize, Serialize};

use crate::error::LinearError;

/// A diagonal Gaussian noise model N(0, diag(σ²)).
///
/// Serializes as its sigma vector. Deserialization goes through
/// [`Diagonal::sigmas`], so a payload with a non-positive or non-finite
/// sigma is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DVector<f64>", into = "DVector<f64>")]
pub struct Diagonal {
    sigmas: DVector<f64>,
}

impl Diagonal {
    /// Create a noise model from standard deviations.
    ///
    /// # Errors
    /// Returns `InvalidNoiseModel` if any sigma is zero, negative or not finite.
    pub fn sigmas(sigmas: DVector<f64>) -> Result<Self, LinearError> {
        for (index, &sigma) in sigmas.iter().enumerate() {
            if !sigma.is_finite() || sigma <= 0.0 {
                return Err(LinearError::InvalidNoiseModel { index, sigma });
            }
        }
        Ok(Self { sigmas })
    }

    /// A unit noise model of the given dimension.
    pub fn unit(dim: usize) -> Self {
        Self {
            sigmas: DVector::from_element(dim, 1.0),
        }
    }

    /// Number of rows this model covers.
    pub fn dim(&self) -> usize {
        self.sigmas.len()
    }

    /// The standard deviations.
    pub fn sigma_vector(&self) -> &DVector<f64> {
        &self.sigmas
    }

    /// The standard deviation of row `i`.
    pub fn sigma(&self, i: usize) -> f64 {
        self.sigmas[i]
    }

    /// Multiply each component by its sigma.
    pub fn unwhiten(&self, v: &DVector<f64>) -> DVector<f64> {
        v.component_mul(&self.sigmas)
    }

    /// Multiply `v` in place by the sigmas starting at row `offset`.
    ///
    /// `v` must fit inside the model: `offset + v.len() <= dim()`.
    pub fn unwhiten_segment_in_place(&self, v: &mut DVector<f64>, offset: usize) {
        let len = v.len();
        v.component_mul_assign(&self.sigmas.rows(offset, len));
    }

    /// Approximate equality: same dimension and every sigma within `tol`.
    pub fn equals(&self, other: &Diagonal, tol: f64) -> bool {
        self.sigmas.len() == other.sigmas.len()
            && self
                .sigmas
                .iter()
                .zip(other.sigmas.iter())
                .all(|(a, b)| (a - b).abs() <= tol)
    }
}

impl TryFrom<DVector<f64>> for Diagonal {
    type Error = LinearError;

    fn try_from(sigmas: DVector<f64>) -> Result<Self, Self::Error> {
        Self::sigmas(sigmas)
    }
}

impl From<Diagonal> for DVector<f64> {
    fn from(model: Diagonal) -> Self {
        model.sigmas
    }
}

impl fmt::Display for Diagonal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "diagonal sigmas {}", format_vector(&self.sigmas))
    }
}
