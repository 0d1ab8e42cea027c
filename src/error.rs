//! Error types for linal

use crate::backend::accel::KernelStatus;
use crate::backend::Backend;
use thiserror::Error;

/// Result type alias using linal's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in linal operations
///
/// Every variant is a precondition violation or a foreign-call failure; the
/// engine never retries, degrades, or returns partial results. Degenerate
/// numeric input (normalizing a zero vector, dividing by a zero-modulus
/// complex number) is *not* an error: it produces non-finite IEEE-754 values.
#[derive(Error, Debug)]
pub enum Error {
    /// Unequal vector lengths in a binary vector operation
    #[error("vector length mismatch: {lhs} vs {rhs}")]
    LengthMismatch {
        /// Length of the left operand
        lhs: usize,
        /// Length of the right operand
        rhs: usize,
    },

    /// Unequal matrix dimensions in a binary matrix operation
    #[error("matrix dimension mismatch: {lhs}x{lhs} vs {rhs}x{rhs}")]
    DimensionMismatch {
        /// Dimension of the left operand
        lhs: usize,
        /// Dimension of the right operand
        rhs: usize,
    },

    /// Matrix/vector action where the vector length differs from the dimension
    #[error("matrix is {dim}x{dim} but vector has length {len}")]
    ShapeMismatch {
        /// Matrix dimension
        dim: usize,
        /// Vector length
        len: usize,
    },

    /// Two-dimensional construction where a row's length differs from the row count
    #[error("square matrix with {rows} rows has {len} entries in row {row}")]
    RaggedRows {
        /// Number of rows supplied
        rows: usize,
        /// Index of the offending row
        row: usize,
        /// Length of the offending row
        len: usize,
    },

    /// Operands constructed on different backends
    ///
    /// Backend selection happens once, at construction; combining values from
    /// different backends in one operation is a programming-contract
    /// violation, never coerced.
    #[error("cannot combine values from different backends: {lhs:?} vs {rhs:?}")]
    BackendMismatch {
        /// Backend of the left operand
        lhs: Backend,
        /// Backend of the right operand
        rhs: Backend,
    },

    /// The native kernel library reported a non-success status
    #[error("accelerated kernel failed: {0}")]
    Kernel(KernelStatus),
}

impl Error {
    /// Create a vector length mismatch error
    pub fn length_mismatch(lhs: usize, rhs: usize) -> Self {
        Self::LengthMismatch { lhs, rhs }
    }

    /// Create a matrix dimension mismatch error
    pub fn dimension_mismatch(lhs: usize, rhs: usize) -> Self {
        Self::DimensionMismatch { lhs, rhs }
    }

    /// Create a matrix/vector shape mismatch error
    pub fn shape_mismatch(dim: usize, len: usize) -> Self {
        Self::ShapeMismatch { dim, len }
    }

    /// Create a backend mismatch error
    pub fn backend_mismatch(lhs: Backend, rhs: Backend) -> Self {
        Self::BackendMismatch { lhs, rhs }
    }
}
