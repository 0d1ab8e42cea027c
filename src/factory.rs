//! Construction entry points bound to one backend
//!
//! Backend selection happens exactly once, here (or through the `*_with`
//! constructors on the shapes themselves); everything downstream of a
//! factory call is backend-agnostic. The associated constructors on
//! [`ColumnVector`], [`RowVector`] and [`SquareMatrix`] are shorthands for a
//! factory over [`Backend::active()`].
//!
//! # Example
//!
//! ```
//! use linal::backend::Backend;
//! use linal::factory::Factory;
//! use linal::scalar::Complex128;
//!
//! let managed = Factory::new(Backend::Managed);
//!
//! let v = managed.v(vec![Complex128::new(1.0, 2.0)]);
//! let id = managed.identity::<Complex128>(3);
//! assert_eq!(v.backend(), Backend::Managed);
//! assert!(id.is_identity());
//! ```

use crate::backend::Backend;
use crate::error::Result;
use crate::matrix::SquareMatrix;
use crate::scalar::Scalar;
use crate::vector::{ColumnVector, RowVector};

/// A construction surface bound to one [`Backend`]
///
/// Copyable value; holding one is holding the backend decision.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Factory {
    backend: Backend,
}

impl Factory {
    /// Factory over the named backend
    pub const fn new(backend: Backend) -> Self {
        Self { backend }
    }

    /// Factory over the active default backend
    pub fn active() -> Self {
        Self::new(Backend::active())
    }

    /// The backend every construction from this factory uses
    pub const fn backend(&self) -> Backend {
        self.backend
    }

    /// Column vector from entries
    pub fn v<E: Scalar>(&self, entries: impl Into<Box<[E]>>) -> ColumnVector<E> {
        ColumnVector::v_with(self.backend, entries)
    }

    /// Column vector from a generator function
    pub fn v_from_fn<E: Scalar, F: FnMut(usize) -> E>(
        &self,
        length: usize,
        f: F,
    ) -> ColumnVector<E> {
        ColumnVector::from_fn_with(self.backend, length, f)
    }

    /// Zero column vector
    pub fn zero_vector<E: Scalar>(&self, length: usize) -> ColumnVector<E> {
        ColumnVector::zero_with(self.backend, length)
    }

    /// Row vector from entries
    pub fn u<E: Scalar>(&self, entries: impl Into<Box<[E]>>) -> RowVector<E> {
        RowVector::u_with(self.backend, entries)
    }

    /// Row vector from a generator function
    pub fn u_from_fn<E: Scalar, F: FnMut(usize) -> E>(&self, length: usize, f: F) -> RowVector<E> {
        RowVector::from_fn_with(self.backend, length, f)
    }

    /// Zero row vector
    pub fn zero_row_vector<E: Scalar>(&self, length: usize) -> RowVector<E> {
        RowVector::zero_with(self.backend, length)
    }

    /// Square matrix from a 2-D array literal
    pub fn m<E: Scalar, const N: usize>(&self, rows: [[E; N]; N]) -> SquareMatrix<E> {
        SquareMatrix::m_with(self.backend, rows)
    }

    /// Square matrix from dynamically-sized rows
    ///
    /// # Errors
    /// [`crate::error::Error::RaggedRows`] if any row's length differs from
    /// the row count.
    pub fn m_from_rows<E: Scalar>(&self, rows: Vec<Vec<E>>) -> Result<SquareMatrix<E>> {
        SquareMatrix::try_from_rows(self.backend, rows)
    }

    /// Square matrix from a generator function
    pub fn m_from_fn<E: Scalar, F: FnMut(usize, usize) -> E>(
        &self,
        dim: usize,
        f: F,
    ) -> SquareMatrix<E> {
        SquareMatrix::from_fn_with(self.backend, dim, f)
    }

    /// Zero matrix
    pub fn zero_matrix<E: Scalar>(&self, dim: usize) -> SquareMatrix<E> {
        SquareMatrix::zero_with(self.backend, dim)
    }

    /// Identity matrix
    pub fn identity<E: Scalar>(&self, dim: usize) -> SquareMatrix<E> {
        SquareMatrix::identity_with(self.backend, dim)
    }
}

impl Default for Factory {
    fn default() -> Self {
        Self::active()
    }
}
