//! # Core - Shared Collaborators for Linear Solvers
//!
//! This crate provides the vocabulary that factors and conditionals are
//! written against:
//!
//! - **Keys**: opaque, ordered variable identifiers with `x1`-style labels
//! - **VectorValues**: a variable assignment mapping each key to a vector
//! - **Errors**: contract breaches when reading or writing an assignment
//!
//! ## Example
//!
//! ```rust
//! use compositional_core::{Key, VectorValues};
//! use nalgebra::dvector;
//!
//! let x1 = Key::symbol(b'x', 1);
//! let x2 = Key::symbol(b'x', 2);
//!
//! let mut values = VectorValues::new();
//! values.insert(x1, dvector![1.0, 2.0]).unwrap();
//! values.insert(x2, dvector![3.0]).unwrap();
//!
//! // Concatenate in a caller-chosen order
//! let stacked = values.vector(&[x2, x1]).unwrap();
//! assert_eq!(stacked, dvector![3.0, 1.0, 2.0]);
//! ```

pub mod error;
pub mod key;
pub mod values;

// Re-export key types at crate root for convenience
pub use error::CoreError;
pub use key::{default_formatter, Key, KeyFormatter};
pub use values::{format_vector, VectorValues};
