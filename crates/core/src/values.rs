//! # VectorValues - Variable Assignments
//!
//! A mapping from [`Key`] to a dense vector holding that variable's value.
//! This is what linear solvers read parent values from and write solved
//! frontal values into.
//!
//! ## Design Choices
//!
//! Entries live in a `BTreeMap`, so iteration and rendering are in key
//! order and two assignments built in different orders print identically.
//! Gathering a concatenated vector (`vector`) always follows the order the
//! caller supplies, never the map order.

use std::collections::BTreeMap;
use std::fmt;

use nalgebra::DVector;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::key::{default_formatter, Key, KeyFormatter};

/// A variable assignment: one vector per key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VectorValues {
    values: BTreeMap<Key, DVector<f64>>,
}

impl VectorValues {
    /// Create an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of assigned variables.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if no variable is assigned.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True if `key` has an entry.
    pub fn contains(&self, key: Key) -> bool {
        self.values.contains_key(&key)
    }

    /// Insert a new entry.
    ///
    /// # Errors
    /// Returns `DuplicateKey` if `key` already has an entry.
    pub fn insert(&mut self, key: Key, value: DVector<f64>) -> Result<(), CoreError> {
        if self.values.contains_key(&key) {
            return Err(CoreError::DuplicateKey { key });
        }
        self.values.insert(key, value);
        Ok(())
    }

    /// Insert a new entry or overwrite an existing one, whatever its dimension.
    pub fn set(&mut self, key: Key, value: DVector<f64>) {
        self.values.insert(key, value);
    }

    /// Look up an entry.
    pub fn get(&self, key: Key) -> Option<&DVector<f64>> {
        self.values.get(&key)
    }

    /// Look up an entry that must exist.
    ///
    /// # Errors
    /// Returns `MissingKey` if `key` has no entry.
    pub fn at(&self, key: Key) -> Result<&DVector<f64>, CoreError> {
        self.values.get(&key).ok_or(CoreError::MissingKey { key })
    }

    /// Mutable access to an entry that must exist.
    ///
    /// # Errors
    /// Returns `MissingKey` if `key` has no entry.
    pub fn at_mut(&mut self, key: Key) -> Result<&mut DVector<f64>, CoreError> {
        self.values
            .get_mut(&key)
            .ok_or(CoreError::MissingKey { key })
    }

    /// Dimension of the entry for `key`, if any.
    pub fn dim(&self, key: Key) -> Option<usize> {
        self.values.get(&key).map(|v| v.len())
    }

    /// Assigned keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.values.keys().copied()
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (Key, &DVector<f64>)> + '_ {
        self.values.iter().map(|(k, v)| (*k, v))
    }

    /// Concatenate the entries for `keys`, in the order given.
    ///
    /// # Errors
    /// Returns `MissingKey` for the first key without an entry.
    pub fn vector(&self, keys: &[Key]) -> Result<DVector<f64>, CoreError> {
        let mut parts = Vec::with_capacity(keys.len());
        let mut total = 0;
        for &key in keys {
            let v = self.at(key)?;
            total += v.len();
            parts.push(v);
        }

        let mut out = DVector::zeros(total);
        let mut offset = 0;
        for v in parts {
            out.rows_mut(offset, v.len()).copy_from(v);
            offset += v.len();
        }
        Ok(out)
    }

    /// Tolerance-based equality: same keys, same dimensions, and every
    /// component within `tol` in absolute value.
    pub fn equals(&self, other: &VectorValues, tol: f64) -> bool {
        if self.values.len() != other.values.len() {
            return false;
        }
        self.values.iter().all(|(key, v)| match other.values.get(key) {
            Some(w) => {
                v.len() == w.len() && v.iter().zip(w.iter()).all(|(a, b)| (a - b).abs() <= tol)
            }
            None => false,
        })
    }

    /// Render with a heading and a custom key formatter.
    pub fn to_string_with(&self, label: &str, formatter: KeyFormatter) -> String {
        Labeled {
            values: self,
            label,
            formatter,
        }
        .to_string()
    }

    fn write_to(
        &self,
        out: &mut dyn fmt::Write,
        label: &str,
        formatter: KeyFormatter,
    ) -> fmt::Result {
        writeln!(out, "{}VectorValues: {} elements", label, self.len())?;
        for (key, v) in &self.values {
            writeln!(out, "  {}: {}", formatter(*key), format_vector(v))?;
        }
        Ok(())
    }
}

/// An assignment paired with a heading and key formatter for rendering.
struct Labeled<'a> {
    values: &'a VectorValues,
    label: &'a str,
    formatter: KeyFormatter<'a>,
}

impl fmt::Display for Labeled<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.values.write_to(f, self.label, self.formatter)
    }
}

impl FromIterator<(Key, DVector<f64>)> for VectorValues {
    fn from_iter<I: IntoIterator<Item = (Key, DVector<f64>)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for VectorValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f, "", &default_formatter)
    }
}

/// Render a vector on one line as `[a, b, c]`.
pub fn format_vector(v: &DVector<f64>) -> String {
    format!(
        "[{}]",
        v.iter()
            .map(|x| format!("{}", x))
            .collect::<Vec<_>>()
            .join(", ")
    )
}
