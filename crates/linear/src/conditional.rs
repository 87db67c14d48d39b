//! Gaussian conditional densities.
//!
//! A [`GaussianConditional`] represents P(x | y) for a block of frontal
//! variables x given parent variables y, through the linear-Gaussian relation
//!
//! ```text
//!   R·x + S·y = d + noise
//! ```
//!
//! with `R` square upper-triangular. Eliminating a Gaussian factor graph
//! produces one of these per eliminated clique; solving the resulting
//! Bayes network is a sweep of [`GaussianConditional::solve`] calls in
//! reverse elimination order, each reading its parents' freshly solved
//! values.
//!
//! # Example
//!
//! ```rust
//! use compositional_core::{Key, VectorValues};
//! use compositional_linear::GaussianConditional;
//! use nalgebra::{dvector, DMatrix};
//!
//! let x1 = Key::symbol(b'x', 1);
//! let x2 = Key::symbol(b'x', 2);
//!
//! // x1 + x2 = [3, 4]
//! let conditional = GaussianConditional::with_parent(
//!     x1,
//!     dvector![3.0, 4.0],
//!     DMatrix::identity(2, 2),
//!     x2,
//!     DMatrix::identity(2, 2),
//!     None,
//! )
//! .unwrap();
//!
//! let mut parents = VectorValues::new();
//! parents.insert(x2, dvector![1.0, 1.0]).unwrap();
//!
//! let solution = conditional.solve(&parents).unwrap();
//! assert_eq!(solution.at(x1).unwrap(), &dvector![2.0, 3.0]);
//! ```

use std::fmt;

use compositional_core::{
    default_formatter, format_vector, CoreError, Key, KeyFormatter, VectorValues,
};
use nalgebra::{DMatrix, DMatrixView, DVector, DVectorView};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::blocks::{AugmentedMatrix, BlockIndex, KeyBlock};
use crate::error::LinearError;
use crate::noise::Diagonal;
use crate::numeric::{all_finite, linear_dependent};

/// A conditional density P(frontals | parents) in square-root information form.
///
/// The geometry (keys, `R`, `S`, `d`, noise model) is fixed at construction;
/// every solve reads it and writes only into assignments the caller owns.
///
/// Serializes as the inputs of [`from_blocks`](Self::from_blocks), and
/// deserializes by calling it, so a payload that breaks the block layout or
/// carries an invalid noise model is rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ConditionalRecord", into = "ConditionalRecord")]
pub struct GaussianConditional {
    index: BlockIndex,
    ab: AugmentedMatrix,
    model: Option<Diagonal>,
}

impl GaussianConditional {
    /// A conditional on one frontal variable with no parents: `R·x = d`.
    pub fn new(
        key: Key,
        d: DVector<f64>,
        r: DMatrix<f64>,
        model: Option<Diagonal>,
    ) -> Result<Self, LinearError> {
        let dim = r.nrows();
        Self::from_blocks(&[(key, dim)], &r, &[], &d, model)
    }

    /// A conditional on one frontal variable with one parent: `R·x + S·y = d`.
    pub fn with_parent(
        key: Key,
        d: DVector<f64>,
        r: DMatrix<f64>,
        parent: Key,
        s: DMatrix<f64>,
        model: Option<Diagonal>,
    ) -> Result<Self, LinearError> {
        let dim = r.nrows();
        Self::from_blocks(&[(key, dim)], &r, &[(parent, s)], &d, model)
    }

    /// A conditional on one frontal variable with two parents:
    /// `R·x + S·y + T·z = d`.
    #[allow(clippy::too_many_arguments)]
    pub fn with_parents2(
        key: Key,
        d: DVector<f64>,
        r: DMatrix<f64>,
        parent1: Key,
        s: DMatrix<f64>,
        parent2: Key,
        t: DMatrix<f64>,
        model: Option<Diagonal>,
    ) -> Result<Self, LinearError> {
        let dim = r.nrows();
        Self::from_blocks(&[(key, dim)], &r, &[(parent1, s), (parent2, t)], &d, model)
    }

    /// General constructor: any number of frontal and parent variables.
    ///
    /// `frontals` lists each frontal key with its dimension, in the row
    /// order of `R`. `parents` lists each parent key with its coefficient
    /// block; the block's column count is the parent's dimension.
    ///
    /// # Errors
    /// - `EmptyFrontals` / `RepeatedKey` for an invalid key partition
    /// - `NotSquare` if `R` is not square
    /// - `DimensionMismatch` if the frontal dimensions, `d`, a parent block
    ///   or the noise model disagree with the number of rows of `R`
    pub fn from_blocks(
        frontals: &[(Key, usize)],
        r: &DMatrix<f64>,
        parents: &[(Key, DMatrix<f64>)],
        d: &DVector<f64>,
        model: Option<Diagonal>,
    ) -> Result<Self, LinearError> {
        let parent_dims: Vec<(Key, usize)> =
            parents.iter().map(|(key, s)| (*key, s.ncols())).collect();
        let index = BlockIndex::new(frontals, &parent_dims)?;
        let ab = AugmentedMatrix::assemble(r, parents, d)?;

        if index.frontal_dim() != ab.rows() {
            return Err(LinearError::dimension(
                "sum of frontal dimensions",
                ab.rows(),
                index.frontal_dim(),
            ));
        }
        if let Some(model) = &model {
            if model.dim() != ab.rows() {
                return Err(LinearError::dimension("noise model", ab.rows(), model.dim()));
            }
        }

        Ok(Self { index, ab, model })
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    /// The upper-triangular block `R`.
    pub fn r(&self) -> DMatrixView<'_, f64> {
        self.ab.r()
    }

    /// The coefficient block of `parent`, or `None` if it is not a parent.
    pub fn s(&self, parent: Key) -> Option<DMatrixView<'_, f64>> {
        self.index
            .parents()
            .iter()
            .find(|block| block.key == parent)
            .map(|block| self.ab.s_block(block))
    }

    /// All parent blocks side by side, in parent order.
    pub fn s_all(&self) -> DMatrixView<'_, f64> {
        self.ab.s()
    }

    /// The right-hand side `d`.
    pub fn d(&self) -> DVectorView<'_, f64> {
        self.ab.d()
    }

    /// The noise model, if any.
    pub fn noise_model(&self) -> Option<&Diagonal> {
        self.model.as_ref()
    }

    /// Dimension of a frontal or parent variable.
    pub fn dim(&self, key: Key) -> Option<usize> {
        self.index.dim(key)
    }

    /// Frontal blocks in row order.
    pub fn frontals(&self) -> &[KeyBlock] {
        self.index.frontals()
    }

    /// Parent blocks in column order.
    pub fn parents(&self) -> &[KeyBlock] {
        self.index.parents()
    }

    /// Frontal keys in row order.
    pub fn frontal_keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.index.frontals().iter().map(|block| block.key)
    }

    /// Parent keys in column order.
    pub fn parent_keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.index.parents().iter().map(|block| block.key)
    }

    /// Frontal keys followed by parent keys.
    pub fn keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.frontal_keys().chain(self.parent_keys())
    }

    /// The first frontal key; the one reported when a solve fails.
    pub fn first_frontal_key(&self) -> Key {
        // The index guarantees at least one frontal block.
        self.index.frontals()[0].key
    }

    /// Number of frontal variables.
    pub fn nr_frontals(&self) -> usize {
        self.index.frontals().len()
    }

    /// Number of parent variables.
    pub fn nr_parents(&self) -> usize {
        self.index.parents().len()
    }

    /// Number of rows of the triangular system.
    pub fn rows(&self) -> usize {
        self.ab.rows()
    }

    // ------------------------------------------------------------------------
    // Solving
    // ------------------------------------------------------------------------

    /// Solve for the frontal variables given values for every parent.
    ///
    /// Computes `x = R⁻¹ (d - S·y)`. Entries of `parents` for keys other
    /// than this conditional's parents (frontals included) are ignored.
    ///
    /// # Errors
    /// - `Core(MissingKey)` / `Core(DimensionMismatch)` if a parent value is
    ///   absent or has the wrong dimension
    /// - `IndeterminateSystem` if the solution is not finite
    pub fn solve(&self, parents: &VectorValues) -> Result<VectorValues, LinearError> {
        let x_s = gather(parents, self.index.parents())?;

        let mut rhs = self.ab.d().into_owned();
        rhs -= &self.ab.s() * &x_s;

        let soln = self.ab.r().solve_upper_triangular_unchecked(&rhs);
        self.check_finite(&soln)?;

        debug!(
            key = %self.first_frontal_key(),
            rows = self.rows(),
            parents = self.nr_parents(),
            "solved conditional"
        );
        Ok(self.scatter_frontals(&soln))
    }

    /// Solve against a caller-supplied right-hand side instead of `d`.
    ///
    /// Computes `x = σ ⊙ R⁻¹ (rhs - S·y)` where `rhs` is gathered from the
    /// frontal entries of `rhs`. Unlike [`solve`](Self::solve) the result is
    /// not checked for finiteness: the caller is responsible for
    /// well-posedness.
    ///
    /// # Errors
    /// - `MissingNoiseModel` if the conditional has no noise model
    /// - `Core(..)` if a parent or frontal right-hand side is absent or has
    ///   the wrong dimension
    pub fn solve_other_rhs(
        &self,
        parents: &VectorValues,
        rhs: &VectorValues,
    ) -> Result<VectorValues, LinearError> {
        let model = self.model.as_ref().ok_or(LinearError::MissingNoiseModel)?;

        let x_s = gather(parents, self.index.parents())?;
        let mut rhs_r = gather(rhs, self.index.frontals())?;
        rhs_r -= &self.ab.s() * &x_s;

        let soln = model.unwhiten(&self.ab.r().solve_upper_triangular_unchecked(&rhs_r));

        debug!(
            key = %self.first_frontal_key(),
            rows = self.rows(),
            "solved conditional against external right-hand side"
        );
        Ok(self.scatter_frontals(&soln))
    }

    /// Propagate `gy` backwards through the transpose of this conditional.
    ///
    /// Reads the frontal entries of `gy`, solves `Rᵀ·f = gy_frontal`, then
    /// - subtracts `Sᵀ·f` from each parent entry (a missing parent entry is
    ///   treated as zero and inserted),
    /// - writes `σ ⊙ f` (or `f` without a noise model) back to the frontals.
    ///
    /// The parent updates use `f` before sigma scaling. All new values are
    /// computed before `gy` is touched, so on error `gy` is unchanged.
    ///
    /// # Errors
    /// - `Core(..)` if a frontal entry is absent or any entry has the wrong
    ///   dimension
    /// - `IndeterminateSystem` if the transpose solve is not finite
    pub fn solve_transpose_in_place(&self, gy: &mut VectorValues) -> Result<(), LinearError> {
        let frontal_vec = gather(gy, self.index.frontals())?;
        let frontal_vec = self.ab.r().tr_solve_upper_triangular_unchecked(&frontal_vec);
        self.check_finite(&frontal_vec)?;

        let mut parent_updates = Vec::with_capacity(self.nr_parents());
        for block in self.index.parents() {
            let contribution = self.ab.s_block(block).tr_mul(&frontal_vec);
            let updated = match gy.get(block.key) {
                Some(current) => {
                    check_dim(block, current)?;
                    current - contribution
                }
                None => -contribution,
            };
            parent_updates.push((block.key, updated));
        }

        let frontal_vec = match &self.model {
            Some(model) => model.unwhiten(&frontal_vec),
            None => frontal_vec,
        };

        for (key, value) in parent_updates {
            gy.set(key, value);
        }
        for block in self.index.frontals() {
            gy.set(
                block.key,
                frontal_vec.rows(block.offset, block.dim).into_owned(),
            );
        }

        debug!(
            key = %self.first_frontal_key(),
            parents = self.nr_parents(),
            "transpose solve"
        );
        Ok(())
    }

    /// Multiply each frontal entry of `gy` by its segment of the sigmas.
    ///
    /// # Errors
    /// - `MissingNoiseModel` if the conditional has no noise model
    /// - `Core(..)` if a frontal entry is absent or has the wrong dimension;
    ///   `gy` is unchanged in that case
    pub fn scale_frontals_by_sigma(&self, gy: &mut VectorValues) -> Result<(), LinearError> {
        let model = self.model.as_ref().ok_or(LinearError::MissingNoiseModel)?;

        for block in self.index.frontals() {
            check_dim(block, gy.at(block.key)?)?;
        }
        for block in self.index.frontals() {
            model.unwhiten_segment_in_place(gy.at_mut(block.key)?, block.offset);
        }
        Ok(())
    }

    fn check_finite(&self, soln: &DVector<f64>) -> Result<(), LinearError> {
        if all_finite(soln) {
            return Ok(());
        }
        let key = self.first_frontal_key();
        warn!(key = %key, rows = self.rows(), "indeterminate linear system");
        Err(LinearError::IndeterminateSystem { key })
    }

    fn scatter_frontals(&self, soln: &DVector<f64>) -> VectorValues {
        self.index
            .frontals()
            .iter()
            .map(|block| (block.key, soln.rows(block.offset, block.dim).into_owned()))
            .collect()
    }

    // ------------------------------------------------------------------------
    // Comparison and display
    // ------------------------------------------------------------------------

    /// Tolerance-based structural equality.
    ///
    /// Two conditionals are equal when they have the same parent keys in
    /// the same order, each row of `[R | S]` in one is a scalar multiple of
    /// the same row in the other (within `tol`), and their noise models are
    /// both absent or equal within `tol`. Row scaling (including sign) is
    /// allowed because different but equivalent factorizations produce it.
    ///
    /// `d` and the frontal keys are not compared. This is meant for
    /// regression tests; conditionals representing the same density with
    /// permuted rows compare unequal.
    pub fn equals(&self, other: &GaussianConditional, tol: f64) -> bool {
        if self.nr_parents() != other.nr_parents() {
            return false;
        }
        let same_parents = self
            .index
            .parents()
            .iter()
            .zip(other.index.parents())
            .all(|(a, b)| a.key == b.key && a.dim == b.dim);
        if !same_parents || self.rows() != other.rows() {
            return false;
        }

        let rows_dependent = (0..self.rows()).all(|i| {
            linear_dependent(
                &self.ab.coefficient_row(i),
                &other.ab.coefficient_row(i),
                tol,
            )
        });
        if !rows_dependent {
            return false;
        }

        match (&self.model, &other.model) {
            (None, None) => true,
            (Some(a), Some(b)) => a.equals(b, tol),
            _ => false,
        }
    }

    /// Render with a heading and a custom key formatter.
    pub fn to_string_with(&self, label: &str, formatter: KeyFormatter) -> String {
        Labeled {
            conditional: self,
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
        write!(out, "{}  Conditional density ", label)?;
        for key in self.frontal_keys() {
            write!(out, "[{}] ", formatter(key))?;
        }
        writeln!(out)?;

        write_matrix(out, "  R = ", self.ab.r())?;
        for block in self.index.parents() {
            let heading = format!("  S[{}] = ", formatter(block.key));
            write_matrix(out, &heading, self.ab.s_block(block))?;
        }
        writeln!(out, "  d = {}", format_vector(&self.ab.d().into_owned()))?;

        match &self.model {
            Some(model) => writeln!(out, "  Noise model: {}", model),
            None => writeln!(out, "  No noise model"),
        }
    }
}

impl fmt::Display for GaussianConditional {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f, "", &default_formatter)
    }
}

/// A conditional paired with a heading and key formatter for rendering.
struct Labeled<'a> {
    conditional: &'a GaussianConditional,
    label: &'a str,
    formatter: KeyFormatter<'a>,
}

impl fmt::Display for Labeled<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.conditional.write_to(f, self.label, self.formatter)
    }
}

/// Serialized form: the arguments of [`GaussianConditional::from_blocks`].
#[derive(Serialize, Deserialize)]
struct ConditionalRecord {
    frontals: Vec<(Key, usize)>,
    r: DMatrix<f64>,
    parents: Vec<(Key, DMatrix<f64>)>,
    d: DVector<f64>,
    model: Option<Diagonal>,
}

impl TryFrom<ConditionalRecord> for GaussianConditional {
    type Error = LinearError;

    fn try_from(record: ConditionalRecord) -> Result<Self, Self::Error> {
        Self::from_blocks(
            &record.frontals,
            &record.r,
            &record.parents,
            &record.d,
            record.model,
        )
    }
}

impl From<GaussianConditional> for ConditionalRecord {
    fn from(conditional: GaussianConditional) -> Self {
        let ab = &conditional.ab;
        Self {
            frontals: conditional
                .index
                .frontals()
                .iter()
                .map(|block| (block.key, block.dim))
                .collect(),
            r: ab.r().into_owned(),
            parents: conditional
                .index
                .parents()
                .iter()
                .map(|block| (block.key, ab.s_block(block).into_owned()))
                .collect(),
            d: ab.d().into_owned(),
            model: conditional.model,
        }
    }
}

/// Concatenate the entries for `blocks`, checking each entry's dimension.
fn gather(values: &VectorValues, blocks: &[KeyBlock]) -> Result<DVector<f64>, LinearError> {
    for block in blocks {
        check_dim(block, values.at(block.key)?)?;
    }
    let keys: Vec<Key> = blocks.iter().map(|block| block.key).collect();
    Ok(values.vector(&keys)?)
}

fn check_dim(block: &KeyBlock, value: &DVector<f64>) -> Result<(), LinearError> {
    if value.len() != block.dim {
        return Err(CoreError::DimensionMismatch {
            key: block.key,
            expected: block.dim,
            got: value.len(),
        }
        .into());
    }
    Ok(())
}

fn write_matrix(out: &mut dyn fmt::Write, heading: &str, m: DMatrixView<'_, f64>) -> fmt::Result {
    if m.nrows() == 0 {
        return writeln!(out, "{}[]", heading);
    }
    let indent = " ".repeat(heading.chars().count());
    for (i, row) in m.row_iter().enumerate() {
        out.write_str(if i == 0 { heading } else { indent.as_str() })?;
        out.write_char('[')?;
        for (j, x) in row.iter().enumerate() {
            if j > 0 {
                out.write_char(' ')?;
            }
            write!(out, "{:>10.6}", x)?;
        }
        out.write_str("]\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::{dmatrix, dvector};

    fn x(i: u64) -> Key {
        Key::symbol(b'x', i)
    }

    fn values(entries: Vec<(Key, DVector<f64>)>) -> VectorValues {
        entries.into_iter().collect()
    }

    #[test]
    fn test_concrete_scenario() {
        let c = GaussianConditional::with_parent(
            x(1),
            dvector![3.0, 4.0],
            DMatrix::identity(2, 2),
            x(2),
            DMatrix::identity(2, 2),
            None,
        )
        .unwrap();

        let solution = c.solve(&values(vec![(x(2), dvector![1.0, 1.0])])).unwrap();
        assert_eq!(solution.len(), 1);
        assert_relative_eq!(solution.at(x(1)).unwrap(), &dvector![2.0, 3.0]);
    }

    #[test]
    fn test_constructor_validation() {
        let r = DMatrix::identity(2, 2);
        assert!(matches!(
            GaussianConditional::new(x(1), dvector![1.0], r.clone(), None),
            Err(LinearError::DimensionMismatch { .. })
        ));
        assert!(matches!(
            GaussianConditional::new(x(1), dvector![1.0, 2.0], r.clone(), Some(Diagonal::unit(3))),
            Err(LinearError::DimensionMismatch { expected: 2, got: 3, .. })
        ));
        assert!(matches!(
            GaussianConditional::from_blocks(&[(x(1), 1), (x(2), 2)], &r, &[], &dvector![1.0, 2.0], None),
            Err(LinearError::DimensionMismatch { expected: 2, got: 3, .. })
        ));
        assert_eq!(
            GaussianConditional::with_parent(x(1), dvector![1.0, 2.0], r.clone(), x(1), r, None)
                .unwrap_err(),
            LinearError::RepeatedKey { key: x(1) }
        );
    }

    #[test]
    fn test_accessors() {
        let c = GaussianConditional::with_parents2(
            x(1),
            dvector![1.0, 2.0],
            dmatrix![1.0, 2.0; 0.0, 3.0],
            x(2),
            dmatrix![4.0; 5.0],
            x(3),
            dmatrix![6.0, 7.0; 8.0, 9.0],
            Some(Diagonal::sigmas(dvector![0.5, 2.0]).unwrap()),
        )
        .unwrap();

        assert_eq!(c.rows(), 2);
        assert_eq!(c.nr_frontals(), 1);
        assert_eq!(c.nr_parents(), 2);
        assert_eq!(c.first_frontal_key(), x(1));
        assert_eq!(c.keys().collect::<Vec<_>>(), vec![x(1), x(2), x(3)]);
        assert_eq!(c.dim(x(2)), Some(1));
        assert_eq!(c.dim(x(3)), Some(2));
        assert_eq!(c.dim(x(4)), None);
        assert_eq!(c.s(x(2)).unwrap().into_owned(), dmatrix![4.0; 5.0]);
        assert!(c.s(x(1)).is_none());
        assert_eq!(c.s_all().ncols(), 3);
        assert_eq!(c.d().into_owned(), dvector![1.0, 2.0]);
        assert_eq!(c.noise_model().unwrap().sigma(1), 2.0);
    }

    #[test]
    fn test_solve_ignores_frontal_entries_in_input() {
        let c = GaussianConditional::new(x(1), dvector![2.0], dmatrix![4.0], None).unwrap();
        let solution = c.solve(&values(vec![(x(1), dvector![100.0])])).unwrap();
        assert_relative_eq!(solution.at(x(1)).unwrap()[0], 0.5);
    }

    #[test]
    fn test_solve_reports_wrong_parent_dimension() {
        let c = GaussianConditional::with_parent(
            x(1),
            dvector![1.0],
            dmatrix![1.0],
            x(2),
            dmatrix![1.0, 1.0],
            None,
        )
        .unwrap();
        let err = c.solve(&values(vec![(x(2), dvector![1.0])])).unwrap_err();
        assert_eq!(
            err,
            LinearError::Core(CoreError::DimensionMismatch {
                key: x(2),
                expected: 2,
                got: 1
            })
        );
    }

    #[test]
    fn test_transpose_keeps_gy_on_failure() {
        let c = GaussianConditional::with_parent(
            x(1),
            dvector![1.0, 1.0],
            dmatrix![1.0, 0.0; 0.0, 0.0],
            x(2),
            DMatrix::identity(2, 2),
            None,
        )
        .unwrap();

        let mut gy = values(vec![(x(1), dvector![1.0, 1.0]), (x(2), dvector![5.0, 5.0])]);
        let before = gy.clone();
        assert_eq!(
            c.solve_transpose_in_place(&mut gy),
            Err(LinearError::IndeterminateSystem { key: x(1) })
        );
        assert_eq!(gy, before);
    }

    #[test]
    fn test_write_matrix_rows() {
        let m = dmatrix![1.0, 2.0; 0.0, 3.0];
        let mut s = String::new();
        write_matrix(&mut s, "  R = ", m.columns(0, 2)).unwrap();
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("  R = ["));
        assert!(lines[1].starts_with("      ["));
        assert_eq!(lines[1], "      [  0.000000   3.000000]");

        let mut empty = String::new();
        write_matrix(&mut empty, "  S = ", m.rows(0, 0)).unwrap();
        assert_eq!(empty, "  S = []\n");
    }

    #[test]
    fn test_display_matches_labeled_rendering() {
        let c = GaussianConditional::new(x(1), dvector![2.0], dmatrix![4.0], None).unwrap();
        assert_eq!(c.to_string(), c.to_string_with("", &default_formatter));

        let labeled = c.to_string_with("prior", &|key: Key| format!("var{}", key.index()));
        assert!(labeled.starts_with("prior  Conditional density [var1] \n"));
        assert!(labeled.ends_with("  No noise model\n"));
    }

    #[test]
    fn test_record_rebuilds_conditional() {
        let c = GaussianConditional::with_parent(
            x(1),
            dvector![1.0, 2.0],
            dmatrix![1.0, 2.0; 0.0, 3.0],
            x(2),
            dmatrix![4.0; 5.0],
            Some(Diagonal::sigmas(dvector![0.5, 2.0]).unwrap()),
        )
        .unwrap();

        let record = ConditionalRecord::from(c.clone());
        assert_eq!(record.frontals, vec![(x(1), 2)]);
        assert_eq!(record.parents, vec![(x(2), dmatrix![4.0; 5.0])]);

        let rebuilt = GaussianConditional::try_from(record).unwrap();
        assert!(rebuilt.equals(&c, 1e-12));
        assert_eq!(rebuilt.d().into_owned(), c.d().into_owned());
    }
}
