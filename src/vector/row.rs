//! Row vector facade

use super::column::{impl_real_scalar_lhs, impl_vector_ops};
use super::{norm_reciprocal, ColumnVector, VectorRepr};
use crate::backend::Backend;
use crate::error::Result;
use crate::scalar::{Complex, Precision, Scalar};
use std::ops::{Add, Index, Mul, Neg, Sub};

/// Row vector: the transpose orientation of [`ColumnVector`]
///
/// Same storage contract and operation set as a column vector; the separate
/// type keeps inner products and outer products from being confused at call
/// sites. A row vector times an equal-length column vector is the plain
/// bilinear product with no conjugation (see [`RowVector::mul_vector`]),
/// which is *not* the sesquilinear [`RowVector::inner_product`].
///
/// # Example
///
/// ```
/// use linal::scalar::Complex64;
/// use linal::vector::{ColumnVector, RowVector};
///
/// let u = RowVector::u(vec![Complex64::new(1.0, 0.0), Complex64::new(0.0, 1.0)]);
/// let v = ColumnVector::v(vec![Complex64::new(1.0, 0.0), Complex64::new(1.0, 0.0)]);
///
/// // bilinear: 1 + i
/// assert_eq!(u.mul_vector(&v)?, Complex64::new(1.0, 1.0));
/// # Ok::<(), linal::error::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RowVector<E: Scalar> {
    pub(crate) repr: VectorRepr<E>,
}

impl<E: Scalar> RowVector<E> {
    pub(crate) fn from_repr(repr: VectorRepr<E>) -> Self {
        Self { repr }
    }

    /// Create a row vector on the active backend
    pub fn u(entries: impl Into<Box<[E]>>) -> Self {
        Self::u_with(Backend::active(), entries)
    }

    /// Create a row vector on the named backend
    pub fn u_with(backend: Backend, entries: impl Into<Box<[E]>>) -> Self {
        Self::from_repr(VectorRepr::from_entries(backend, entries.into()))
    }

    /// Create a row vector from a generator function on the active backend
    pub fn from_fn<F: FnMut(usize) -> E>(length: usize, f: F) -> Self {
        Self::from_fn_with(Backend::active(), length, f)
    }

    /// Create a row vector from a generator function on the named backend
    pub fn from_fn_with<F: FnMut(usize) -> E>(backend: Backend, length: usize, mut f: F) -> Self {
        Self::u_with(backend, (0..length).map(|i| f(i)).collect::<Vec<_>>())
    }

    /// Zero vector of the given length on the active backend
    ///
    /// A fresh value on every call, never a cached singleton.
    pub fn zero(length: usize) -> Self {
        Self::zero_with(Backend::active(), length)
    }

    /// Zero vector of the given length on the named backend
    pub fn zero_with(backend: Backend, length: usize) -> Self {
        Self::u_with(backend, vec![E::zero(); length])
    }

    /// The backend this value was constructed on
    pub fn backend(&self) -> Backend {
        self.repr.backend()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.repr.entries().len()
    }

    /// Whether the vector has no entries
    pub fn is_empty(&self) -> bool {
        self.repr.entries().is_empty()
    }

    /// The entry slice
    pub fn entries(&self) -> &[E] {
        self.repr.entries()
    }

    /// Entry at `index`, if in bounds
    pub fn get(&self, index: usize) -> Option<E> {
        self.repr.entries().get(index).copied()
    }

    /// Elementwise addition
    ///
    /// # Errors
    /// [`crate::error::Error::LengthMismatch`] on unequal lengths,
    /// [`crate::error::Error::BackendMismatch`] on mixed backends.
    pub fn add(&self, rhs: &Self) -> Result<Self> {
        Ok(Self::from_repr(self.repr.add(&rhs.repr)?))
    }

    /// Elementwise subtraction
    ///
    /// # Errors
    /// As for [`RowVector::add`].
    pub fn sub(&self, rhs: &Self) -> Result<Self> {
        Ok(Self::from_repr(self.repr.sub(&rhs.repr)?))
    }

    /// Additive inverse: every entry negated
    pub fn additive_inverse(&self) -> Self {
        Self::from_repr(self.repr.neg())
    }

    /// Scale by a scalar of the element type
    pub fn scale(&self, k: E) -> Self {
        Self::from_repr(self.repr.scale(k))
    }

    /// Scale by a bare real
    pub fn scale_real(&self, k: E::Real) -> Self {
        Self::from_repr(self.repr.scale_real(k))
    }

    /// Elementwise conjugate
    pub fn conj(&self) -> Self {
        Self::from_repr(self.repr.conj())
    }

    /// Reinterpret as a column vector; the entries do not change
    pub fn transpose(&self) -> ColumnVector<E> {
        ColumnVector::from_repr(self.repr.clone())
    }

    /// Adjoint: conjugate transpose
    pub fn adjoint(&self) -> ColumnVector<E> {
        ColumnVector::from_repr(self.repr.conj())
    }

    /// Sesquilinear inner product: `Σ self[i] · conj(rhs[i])`
    ///
    /// # Errors
    /// As for [`RowVector::add`].
    pub fn inner_product(&self, rhs: &Self) -> Result<E> {
        self.repr.inner_product(&rhs.repr)
    }

    /// Bilinear row-times-column product: `Σ self[i] · rhs[i]`
    ///
    /// No conjugation. This coincides with the inner product only when the
    /// caller has already conjugated the right operand; the two must not be
    /// conflated.
    ///
    /// # Errors
    /// As for [`RowVector::add`].
    pub fn mul_vector(&self, rhs: &ColumnVector<E>) -> Result<E> {
        self.repr.dot(&rhs.repr)
    }

    /// Norm: `sqrt(⟨v, v⟩)`
    pub fn norm(&self) -> E::Real {
        self.repr.norm()
    }

    /// Distance: `norm(self - rhs)`
    ///
    /// # Errors
    /// As for [`RowVector::add`].
    pub fn distance(&self, rhs: &Self) -> Result<E::Real> {
        Ok(Self::from_repr(self.repr.sub(&rhs.repr)?).norm())
    }

    /// Unit vector in this vector's direction: `(1/norm) · v`
    ///
    /// Unguarded: a zero vector yields non-finite entries.
    pub fn normalized(&self) -> Self {
        self.scale_real(norm_reciprocal(self.norm()))
    }

    /// Alias of [`RowVector::normalized`]
    pub fn orthonormal(&self) -> Self {
        self.normalized()
    }

    /// Tensor product: length `|self|·|rhs|`, every pairwise product in
    /// row-major `(i, j)` order; associative entry-for-entry
    ///
    /// # Errors
    /// [`crate::error::Error::BackendMismatch`] on mixed backends.
    pub fn tensor_product(&self, rhs: &Self) -> Result<Self> {
        Ok(Self::from_repr(self.repr.tensor_product(&rhs.repr)?))
    }

    /// Elementwise transform
    pub fn map<F: Fn(E) -> E>(&self, f: F) -> Self {
        Self::from_repr(self.repr.map(f))
    }

    /// Elementwise combine with an equal-length vector
    ///
    /// # Errors
    /// As for [`RowVector::add`].
    pub fn zip<F: Fn(E, E) -> E>(&self, rhs: &Self, f: F) -> Result<Self> {
        Ok(Self::from_repr(self.repr.zip(&rhs.repr, f)?))
    }

    /// Sum of all entries
    pub fn sum(&self) -> E {
        self.repr.sum()
    }

    /// Elementwise snap-to-integer within the precision's epsilon
    pub fn round(&self) -> Self {
        Self::from_repr(self.repr.snap())
    }
}

impl<E: Scalar> Index<usize> for RowVector<E> {
    type Output = E;

    fn index(&self, index: usize) -> &E {
        &self.repr.entries()[index]
    }
}

/// Collect entries into a row vector on the active backend
impl<E: Scalar> FromIterator<E> for RowVector<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::u(iter.into_iter().collect::<Vec<_>>())
    }
}

impl_vector_ops!(RowVector);
impl_real_scalar_lhs!(RowVector, f32);
impl_real_scalar_lhs!(RowVector, f64);

/// Inner product of two row vectors
impl<E: Scalar> Mul for &RowVector<E> {
    type Output = E;

    /// # Panics
    /// On unequal lengths or mixed backends.
    fn mul(self, rhs: Self) -> E {
        self.inner_product(rhs).expect("inner product")
    }
}

/// Bilinear row-times-column product (no conjugation)
impl<E: Scalar> Mul<&ColumnVector<E>> for &RowVector<E> {
    type Output = E;

    /// # Panics
    /// On unequal lengths or mixed backends.
    fn mul(self, rhs: &ColumnVector<E>) -> E {
        self.mul_vector(rhs).expect("row-times-column product")
    }
}
