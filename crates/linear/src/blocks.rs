//! Block layout of an augmented triangular system.
//!
//! A conditional stores its coefficients as one dense matrix
//!
//! ```text
//!   [ R | S₁ | S₂ | ... | Sₙ | d ]
//! ```
//!
//! where `R` is square upper-triangular (one row block per frontal
//! variable) and each `Sᵢ` is the column block of parent `i`. The
//! [`BlockIndex`] records which key owns which rows (frontals) or columns
//! (parents), computed once at construction so solves never look up
//! dimensions again.

use std::collections::HashSet;

use compositional_core::Key;
use nalgebra::{DMatrix, DMatrixView, DVector, DVectorView};

use crate::error::LinearError;

/// One variable's slot in the system.
///
/// For a frontal key `offset` is the first row of its block in `R`; for a
/// parent key it is the first column of its block within `[S₁ | ... | Sₙ]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBlock {
    /// The variable.
    pub key: Key,
    /// Number of scalar components.
    pub dim: usize,
    /// Position of the block's first row/column.
    pub offset: usize,
}

/// Ordered frontal and parent blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockIndex {
    frontals: Vec<KeyBlock>,
    parents: Vec<KeyBlock>,
}

impl BlockIndex {
    /// Lay out frontal and parent blocks in the given order.
    ///
    /// # Errors
    /// Returns `EmptyFrontals` when there are no frontal keys and
    /// `RepeatedKey` when a key is listed twice.
    pub fn new(frontals: &[(Key, usize)], parents: &[(Key, usize)]) -> Result<Self, LinearError> {
        if frontals.is_empty() {
            return Err(LinearError::EmptyFrontals);
        }

        let mut seen = HashSet::with_capacity(frontals.len() + parents.len());
        for &(key, _) in frontals.iter().chain(parents) {
            if !seen.insert(key) {
                return Err(LinearError::RepeatedKey { key });
            }
        }

        Ok(Self {
            frontals: layout(frontals),
            parents: layout(parents),
        })
    }

    /// Frontal blocks in row order.
    pub fn frontals(&self) -> &[KeyBlock] {
        &self.frontals
    }

    /// Parent blocks in column order.
    pub fn parents(&self) -> &[KeyBlock] {
        &self.parents
    }

    /// The block for `key`, searching frontals first.
    pub fn find(&self, key: Key) -> Option<&KeyBlock> {
        self.frontals
            .iter()
            .chain(&self.parents)
            .find(|block| block.key == key)
    }

    /// Dimension of `key`, if it belongs to this system.
    pub fn dim(&self, key: Key) -> Option<usize> {
        self.find(key).map(|block| block.dim)
    }

    /// Total frontal dimension (rows of `R`).
    pub fn frontal_dim(&self) -> usize {
        self.frontals.iter().map(|block| block.dim).sum()
    }
}

fn layout(keys: &[(Key, usize)]) -> Vec<KeyBlock> {
    let mut offset = 0;
    keys.iter()
        .map(|&(key, dim)| {
            let block = KeyBlock { key, dim, offset };
            offset += dim;
            block
        })
        .collect()
}

/// The dense storage `[R | S | d]`.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedMatrix {
    ab: DMatrix<f64>,
    parent_cols: usize,
}

impl AugmentedMatrix {
    /// Stack `R`, the parent blocks (in order) and `d` side by side.
    ///
    /// Entries of `R` below the diagonal are dropped: only the upper
    /// triangle is part of the system.
    ///
    /// # Errors
    /// Returns `NotSquare` if `R` is not square and `DimensionMismatch` if
    /// `d` or any parent block has a different number of rows than `R`.
    pub fn assemble(
        r: &DMatrix<f64>,
        parents: &[(Key, DMatrix<f64>)],
        d: &DVector<f64>,
    ) -> Result<Self, LinearError> {
        let (n, cols) = r.shape();
        if n != cols {
            return Err(LinearError::NotSquare { rows: n, cols });
        }
        if d.len() != n {
            return Err(LinearError::dimension("d", n, d.len()));
        }
        for (key, s) in parents {
            if s.nrows() != n {
                return Err(LinearError::dimension(
                    format!("rows of S[{}]", key),
                    n,
                    s.nrows(),
                ));
            }
        }

        let parent_cols: usize = parents.iter().map(|(_, s)| s.ncols()).sum();
        let mut ab = DMatrix::zeros(n, n + parent_cols + 1);

        let mut r_block = ab.view_mut((0, 0), (n, n));
        r_block.copy_from(r);
        r_block.fill_lower_triangle(0.0, 1);

        let mut col = n;
        for (_, s) in parents {
            ab.view_mut((0, col), (n, s.ncols())).copy_from(s);
            col += s.ncols();
        }
        ab.column_mut(col).copy_from(d);

        Ok(Self { ab, parent_cols })
    }

    /// Number of rows of the system.
    pub fn rows(&self) -> usize {
        self.ab.nrows()
    }

    /// The upper-triangular block `R`.
    pub fn r(&self) -> DMatrixView<'_, f64> {
        let n = self.rows();
        self.ab.view((0, 0), (n, n))
    }

    /// All parent blocks side by side: `[S₁ | ... | Sₙ]`.
    pub fn s(&self) -> DMatrixView<'_, f64> {
        let n = self.rows();
        self.ab.view((0, n), (n, self.parent_cols))
    }

    /// The column block of one parent.
    pub fn s_block(&self, block: &KeyBlock) -> DMatrixView<'_, f64> {
        let n = self.rows();
        self.ab.view((0, n + block.offset), (n, block.dim))
    }

    /// The right-hand side `d`.
    pub fn d(&self) -> DVectorView<'_, f64> {
        self.ab.column(self.rows() + self.parent_cols)
    }

    /// Row `i` of `[R | S₁ | ... | Sₙ]` as a column vector.
    pub fn coefficient_row(&self, i: usize) -> DVector<f64> {
        let n = self.rows();
        self.ab.row(i).columns(0, n + self.parent_cols).transpose()
    }
}
