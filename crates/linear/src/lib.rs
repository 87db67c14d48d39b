//! # Linear - Gaussian Conditionals for Bayes Network Solving
//!
//! Sparse elimination of a Gaussian factor graph turns it into a Gaussian
//! Bayes network: a chain of conditionals P(frontals | parents), each an
//! upper-triangular linear system. This crate implements that conditional
//! and the numerical layer beneath it.
//!
//! ## Core Concepts
//!
//! - **Square-root information form**: `R·x + S·y = d` with `R` upper-triangular
//! - **Back-substitution**: solving `R` last row first, `Rᵀ` first row first
//! - **Indeterminate systems**: a non-finite solution means a singular `R`,
//!   reported as [`LinearError::IndeterminateSystem`] instead of returned
//! - **Equality up to row scale**: factorizations may flip or scale rows, so
//!   [`GaussianConditional::equals`] compares rows for linear dependence
//!
//! ## Example
//!
//! ```rust
//! use compositional_core::{Key, VectorValues};
//! use compositional_linear::{Diagonal, GaussianConditional};
//! use nalgebra::{dmatrix, dvector};
//!
//! let x = Key::symbol(b'x', 0);
//!
//! // 2·x₀ + x₁ = 4, 4·x₁ = 8
//! let prior = GaussianConditional::new(
//!     x,
//!     dvector![4.0, 8.0],
//!     dmatrix![2.0, 1.0; 0.0, 4.0],
//!     Some(Diagonal::unit(2)),
//! )
//! .unwrap();
//!
//! let solution = prior.solve(&VectorValues::new()).unwrap();
//! assert!((solution.at(x).unwrap()[0] - 1.0).abs() < 1e-12);
//! assert!((solution.at(x).unwrap()[1] - 2.0).abs() < 1e-12);
//! ```

pub mod blocks;
pub mod conditional;
mod error;
pub mod noise;
pub mod numeric;

pub use blocks::{AugmentedMatrix, BlockIndex, KeyBlock};
pub use conditional::GaussianConditional;
pub use error::LinearError;
pub use noise::Diagonal;
pub use numeric::{all_finite, linear_dependent};

/// Default tolerance for approximate equality of conditionals and values.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;
