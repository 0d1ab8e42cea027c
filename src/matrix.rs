//! Square matrix facade
//!
//! [`SquareMatrix`] is the uniform operator type client code programs
//! against: an immutable `m×m` grid of scalars holding exactly one concrete
//! backend value, with every operation forwarded to it. Rectangular matrices
//! are not modeled; the row and column vectors of a matrix live in
//! [`crate::vector`].

use crate::backend::{accel, managed, Backend, MatrixKernels};
use crate::error::{Error, Result};
use crate::scalar::{Complex, Precision, Scalar};
use crate::vector::{ColumnVector, RowVector};
use std::ops::{Add, Index, Mul, Neg, Sub};

/// The one concrete backend value a matrix facade wraps
#[derive(Clone, Debug)]
pub(crate) enum MatrixRepr<E: Scalar> {
    /// Pure in-process value
    Managed(managed::Matrix<E>),
    /// Value whose bulk elementwise work crosses the foreign boundary
    Accelerated(accel::Matrix<E>),
}

macro_rules! forward_unary {
    ($self:expr, $method:ident $(, $arg:expr)*) => {
        match $self {
            MatrixRepr::Managed(m) => MatrixRepr::Managed(m.$method($($arg),*)),
            MatrixRepr::Accelerated(m) => MatrixRepr::Accelerated(m.$method($($arg),*)),
        }
    };
}

macro_rules! forward_binary {
    ($lhs:expr, $rhs:expr, $method:ident $(, $arg:expr)*) => {
        match ($lhs, $rhs) {
            (MatrixRepr::Managed(a), MatrixRepr::Managed(b)) => {
                Ok(MatrixRepr::Managed(a.$method(b $(, $arg)*)?))
            }
            (MatrixRepr::Accelerated(a), MatrixRepr::Accelerated(b)) => {
                Ok(MatrixRepr::Accelerated(a.$method(b $(, $arg)*)?))
            }
            (a, b) => Err(Error::backend_mismatch(a.backend(), b.backend())),
        }
    };
}

impl<E: Scalar> MatrixRepr<E> {
    fn from_entries(backend: Backend, dim: usize, entries: Box<[E]>) -> Self {
        match backend {
            Backend::Managed => Self::Managed(managed::Matrix::from_entries(dim, entries)),
            Backend::Accelerated => Self::Accelerated(accel::Matrix::from_entries(dim, entries)),
        }
    }

    fn backend(&self) -> Backend {
        match self {
            Self::Managed(_) => Backend::Managed,
            Self::Accelerated(_) => Backend::Accelerated,
        }
    }

    fn dim(&self) -> usize {
        match self {
            Self::Managed(m) => m.dim(),
            Self::Accelerated(m) => m.dim(),
        }
    }

    fn entries(&self) -> &[E] {
        match self {
            Self::Managed(m) => m.entries(),
            Self::Accelerated(m) => m.entries(),
        }
    }
}

/// Structural equality over the wrapped entries, backend-agnostic
impl<E: Scalar> PartialEq for MatrixRepr<E> {
    fn eq(&self, other: &Self) -> bool {
        self.dim() == other.dim() && self.entries() == other.entries()
    }
}

/// Square matrix: an immutable `m×m` grid of scalars
///
/// Every operation returns a new value. The backend behind a matrix is
/// chosen at construction (see [`SquareMatrix::m`] and
/// [`crate::factory::Factory`]) and carried for the value's lifetime; binary
/// operations require both operands to come from the same backend.
///
/// Equality is structural over the entries and backend-agnostic.
///
/// # Example
///
/// ```
/// use linal::scalar::Complex64;
/// use linal::matrix::SquareMatrix;
///
/// let id = SquareMatrix::<Complex64>::identity(2);
/// assert!(id.is_identity());
/// assert!(id.is_hermitian());
/// assert!(id.is_unitary());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SquareMatrix<E: Scalar> {
    repr: MatrixRepr<E>,
}

impl<E: Scalar> SquareMatrix<E> {
    fn from_repr(repr: MatrixRepr<E>) -> Self {
        Self { repr }
    }

    pub(crate) fn from_flat(backend: Backend, dim: usize, entries: Box<[E]>) -> Self {
        Self::from_repr(MatrixRepr::from_entries(backend, dim, entries))
    }

    /// Create a matrix from a square 2-D array literal on the active backend
    ///
    /// ```
    /// use linal::matrix::SquareMatrix;
    ///
    /// let m = SquareMatrix::m([[1.0f64, 2.0], [3.0, 4.0]]);
    /// assert_eq!(m[(1, 0)], 3.0);
    /// ```
    pub fn m<const N: usize>(rows: [[E; N]; N]) -> Self {
        Self::m_with(Backend::active(), rows)
    }

    /// Create a matrix from a square 2-D array literal on the named backend
    pub fn m_with<const N: usize>(backend: Backend, rows: [[E; N]; N]) -> Self {
        let entries: Vec<E> = rows.into_iter().flatten().collect();
        Self::from_flat(backend, N, entries.into())
    }

    /// Create a matrix from dynamically-sized rows on the active backend
    ///
    /// # Panics
    /// If any row's length differs from the number of rows. For a fallible
    /// alternative, use [`SquareMatrix::try_from_rows`].
    pub fn from_rows(rows: Vec<Vec<E>>) -> Self {
        Self::try_from_rows(Backend::active(), rows).expect("SquareMatrix::from_rows")
    }

    /// Create a matrix from dynamically-sized rows on the named backend
    ///
    /// # Errors
    /// [`Error::RaggedRows`] if any row's length differs from the row count.
    pub fn try_from_rows(backend: Backend, rows: Vec<Vec<E>>) -> Result<Self> {
        let dim = rows.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != dim {
                return Err(Error::RaggedRows {
                    rows: dim,
                    row: i,
                    len: row.len(),
                });
            }
        }

        let entries: Vec<E> = rows.into_iter().flatten().collect();
        Ok(Self::from_flat(backend, dim, entries.into()))
    }

    /// Create a matrix from a generator function on the active backend
    pub fn from_fn<F: FnMut(usize, usize) -> E>(dim: usize, f: F) -> Self {
        Self::from_fn_with(Backend::active(), dim, f)
    }

    /// Create a matrix from a generator function on the named backend
    pub fn from_fn_with<F: FnMut(usize, usize) -> E>(backend: Backend, dim: usize, mut f: F) -> Self {
        let mut entries = Vec::with_capacity(dim * dim);
        for i in 0..dim {
            for j in 0..dim {
                entries.push(f(i, j));
            }
        }
        Self::from_flat(backend, dim, entries.into())
    }

    /// Zero matrix of the given dimension on the active backend
    ///
    /// A fresh value on every call, never a cached singleton.
    pub fn zero(dim: usize) -> Self {
        Self::zero_with(Backend::active(), dim)
    }

    /// Zero matrix of the given dimension on the named backend
    pub fn zero_with(backend: Backend, dim: usize) -> Self {
        Self::from_flat(backend, dim, vec![E::zero(); dim * dim].into())
    }

    /// Identity matrix of the given dimension on the active backend
    ///
    /// A fresh value on every call, never a cached singleton.
    pub fn identity(dim: usize) -> Self {
        Self::identity_with(Backend::active(), dim)
    }

    /// Identity matrix of the given dimension on the named backend
    pub fn identity_with(backend: Backend, dim: usize) -> Self {
        Self::from_fn_with(backend, dim, |i, j| if i == j { E::one() } else { E::zero() })
    }

    /// The backend this value was constructed on
    pub fn backend(&self) -> Backend {
        self.repr.backend()
    }

    /// Dimension `m` of the `m×m` grid
    pub fn dim(&self) -> usize {
        self.repr.dim()
    }

    /// The row-major entry slice
    pub fn entries(&self) -> &[E] {
        self.repr.entries()
    }

    /// Entry at row `i`, column `j`, if in bounds
    pub fn get(&self, i: usize, j: usize) -> Option<E> {
        if i < self.dim() && j < self.dim() {
            Some(self.repr.entries()[i * self.dim() + j])
        } else {
            None
        }
    }

    /// Entries of row `i`
    pub fn row(&self, i: usize) -> impl Iterator<Item = E> + '_ {
        let dim = self.dim();
        self.repr.entries()[i * dim..(i + 1) * dim].iter().copied()
    }

    /// Entries of column `j`
    pub fn col(&self, j: usize) -> impl Iterator<Item = E> + '_ {
        let dim = self.dim();
        (0..dim).map(move |i| self.repr.entries()[i * dim + j])
    }

    /// Elementwise addition
    ///
    /// # Errors
    /// [`Error::DimensionMismatch`] on unequal dimensions,
    /// [`Error::BackendMismatch`] on mixed backends.
    pub fn add(&self, rhs: &Self) -> Result<Self> {
        Ok(Self::from_repr(forward_binary!(&self.repr, &rhs.repr, add)?))
    }

    /// Elementwise subtraction
    ///
    /// # Errors
    /// As for [`SquareMatrix::add`].
    pub fn sub(&self, rhs: &Self) -> Result<Self> {
        Ok(Self::from_repr(forward_binary!(&self.repr, &rhs.repr, sub)?))
    }

    /// Additive inverse: every entry negated
    pub fn additive_inverse(&self) -> Self {
        Self::from_repr(forward_unary!(&self.repr, neg))
    }

    /// Scale by a scalar of the element type
    pub fn scale(&self, k: E) -> Self {
        Self::from_repr(forward_unary!(&self.repr, scale, k))
    }

    /// Scale by a bare real
    pub fn scale_real(&self, k: E::Real) -> Self {
        Self::from_repr(forward_unary!(&self.repr, scale_real, k))
    }

    /// Elementwise conjugate
    pub fn conj(&self) -> Self {
        Self::from_repr(forward_unary!(&self.repr, conj))
    }

    /// Transpose: entry `(i,j) → (j,i)`
    pub fn transpose(&self) -> Self {
        Self::from_repr(forward_unary!(&self.repr, transpose))
    }

    /// Adjoint: conjugate transpose
    pub fn adjoint(&self) -> Self {
        Self::from_repr(forward_unary!(&self.repr, adjoint))
    }

    /// Matrix product: entry `(i,j) = Σ_k self[i,k]·rhs[k,j]`
    ///
    /// # Errors
    /// As for [`SquareMatrix::add`].
    pub fn mul_matrix(&self, rhs: &Self) -> Result<Self> {
        Ok(Self::from_repr(forward_binary!(
            &self.repr, &rhs.repr, matmul
        )?))
    }

    /// Right action on a column vector: `(A·x)[i] = Σ_j A[i,j]·x[j]`
    ///
    /// # Errors
    /// [`Error::ShapeMismatch`] when the vector length differs from the
    /// dimension, [`Error::BackendMismatch`] on mixed backends.
    pub fn act(&self, v: &ColumnVector<E>) -> Result<ColumnVector<E>> {
        use crate::vector::VectorRepr;

        let repr = match (&self.repr, &v.repr) {
            (MatrixRepr::Managed(m), VectorRepr::Managed(x)) => VectorRepr::Managed(m.act(x)?),
            (MatrixRepr::Accelerated(m), VectorRepr::Accelerated(x)) => {
                VectorRepr::Accelerated(m.act(x)?)
            }
            (m, x) => return Err(Error::backend_mismatch(m.backend(), x.backend())),
        };
        Ok(ColumnVector::from_repr(repr))
    }

    /// Left action of a row vector: `(xᵀ·A)[j] = Σ_i x[i]·A[i,j]`
    ///
    /// # Errors
    /// As for [`SquareMatrix::act`].
    pub fn act_left(&self, v: &RowVector<E>) -> Result<RowVector<E>> {
        use crate::vector::VectorRepr;

        let repr = match (&self.repr, &v.repr) {
            (MatrixRepr::Managed(m), VectorRepr::Managed(x)) => VectorRepr::Managed(m.act_left(x)?),
            (MatrixRepr::Accelerated(m), VectorRepr::Accelerated(x)) => {
                VectorRepr::Accelerated(m.act_left(x)?)
            }
            (m, x) => return Err(Error::backend_mismatch(m.backend(), x.backend())),
        };
        Ok(RowVector::from_repr(repr))
    }

    /// Commutator: `self·rhs − rhs·self`
    ///
    /// # Errors
    /// As for [`SquareMatrix::add`].
    pub fn commutator(&self, rhs: &Self) -> Result<Self> {
        Ok(Self::from_repr(forward_binary!(
            &self.repr, &rhs.repr, commutator
        )?))
    }

    /// Kronecker product; the result dimension is `dim(self)·dim(rhs)`
    ///
    /// Entry `(j,k) = self[j/m, k/m] · rhs[j%m, k%m]` with `m = dim(rhs)`.
    ///
    /// # Errors
    /// [`Error::BackendMismatch`] on mixed backends.
    pub fn tensor_product(&self, rhs: &Self) -> Result<Self> {
        let repr = match (&self.repr, &rhs.repr) {
            (MatrixRepr::Managed(a), MatrixRepr::Managed(b)) => {
                MatrixRepr::Managed(a.tensor_product(b))
            }
            (MatrixRepr::Accelerated(a), MatrixRepr::Accelerated(b)) => {
                MatrixRepr::Accelerated(a.tensor_product(b))
            }
            (a, b) => return Err(Error::backend_mismatch(a.backend(), b.backend())),
        };
        Ok(Self::from_repr(repr))
    }

    /// Elementwise transform
    pub fn map<F: Fn(E) -> E>(&self, f: F) -> Self {
        Self::from_repr(forward_unary!(&self.repr, map, &f))
    }

    /// Elementwise combine with an equal-dimension matrix
    ///
    /// # Errors
    /// As for [`SquareMatrix::add`].
    pub fn zip<F: Fn(E, E) -> E>(&self, rhs: &Self, f: F) -> Result<Self> {
        Ok(Self::from_repr(forward_binary!(
            &self.repr, &rhs.repr, zip, &f
        )?))
    }

    /// Elementwise snap-to-integer within the precision's epsilon
    pub fn round(&self) -> Self {
        Self::from_repr(forward_unary!(&self.repr, snap))
    }

    /// After rounding, every diagonal entry is one and every off-diagonal
    /// entry is zero
    pub fn is_identity(&self) -> bool {
        match &self.repr {
            MatrixRepr::Managed(m) => m.is_identity(),
            MatrixRepr::Accelerated(m) => m.is_identity(),
        }
    }

    /// Structurally equal to its own adjoint, exactly (no rounding)
    pub fn is_hermitian(&self) -> bool {
        match &self.repr {
            MatrixRepr::Managed(m) => m.is_hermitian(),
            MatrixRepr::Accelerated(m) => m.is_hermitian(),
        }
    }

    /// Both products with the adjoint round to the identity
    ///
    /// The most expensive predicate in the engine: two full matrix
    /// multiplications, cubic in the dimension.
    pub fn is_unitary(&self) -> bool {
        match &self.repr {
            MatrixRepr::Managed(m) => m.is_unitary(),
            MatrixRepr::Accelerated(m) => m.is_unitary(),
        }
    }
}

impl<E: Scalar> Index<(usize, usize)> for SquareMatrix<E> {
    type Output = E;

    fn index(&self, (i, j): (usize, usize)) -> &E {
        &self.repr.entries()[i * self.repr.dim() + j]
    }
}

// ============================================================================
// Operator sugar
// ============================================================================

impl<E: Scalar> Add for &SquareMatrix<E> {
    type Output = SquareMatrix<E>;

    /// # Panics
    /// On unequal dimensions or mixed backends.
    fn add(self, rhs: Self) -> SquareMatrix<E> {
        SquareMatrix::add(self, rhs).expect("matrix addition")
    }
}

impl<E: Scalar> Add for SquareMatrix<E> {
    type Output = SquareMatrix<E>;

    /// # Panics
    /// On unequal dimensions or mixed backends.
    fn add(self, rhs: Self) -> SquareMatrix<E> {
        SquareMatrix::add(&self, &rhs).expect("matrix addition")
    }
}

impl<E: Scalar> Sub for &SquareMatrix<E> {
    type Output = SquareMatrix<E>;

    /// # Panics
    /// On unequal dimensions or mixed backends.
    fn sub(self, rhs: Self) -> SquareMatrix<E> {
        SquareMatrix::sub(self, rhs).expect("matrix subtraction")
    }
}

impl<E: Scalar> Sub for SquareMatrix<E> {
    type Output = SquareMatrix<E>;

    /// # Panics
    /// On unequal dimensions or mixed backends.
    fn sub(self, rhs: Self) -> SquareMatrix<E> {
        SquareMatrix::sub(&self, &rhs).expect("matrix subtraction")
    }
}

impl<E: Scalar> Neg for &SquareMatrix<E> {
    type Output = SquareMatrix<E>;

    fn neg(self) -> SquareMatrix<E> {
        self.additive_inverse()
    }
}

impl<E: Scalar> Neg for SquareMatrix<E> {
    type Output = SquareMatrix<E>;

    fn neg(self) -> SquareMatrix<E> {
        self.additive_inverse()
    }
}

/// Matrix product
impl<E: Scalar> Mul for &SquareMatrix<E> {
    type Output = SquareMatrix<E>;

    /// # Panics
    /// On unequal dimensions or mixed backends.
    fn mul(self, rhs: Self) -> SquareMatrix<E> {
        self.mul_matrix(rhs).expect("matrix product")
    }
}

/// Matrix product
impl<E: Scalar> Mul for SquareMatrix<E> {
    type Output = SquareMatrix<E>;

    /// # Panics
    /// On unequal dimensions or mixed backends.
    fn mul(self, rhs: Self) -> SquareMatrix<E> {
        self.mul_matrix(&rhs).expect("matrix product")
    }
}

/// Right action on a column vector
impl<E: Scalar> Mul<&ColumnVector<E>> for &SquareMatrix<E> {
    type Output = ColumnVector<E>;

    /// # Panics
    /// On a shape mismatch or mixed backends.
    fn mul(self, rhs: &ColumnVector<E>) -> ColumnVector<E> {
        self.act(rhs).expect("matrix action")
    }
}

/// Left action of a row vector
impl<E: Scalar> Mul<&SquareMatrix<E>> for &RowVector<E> {
    type Output = RowVector<E>;

    /// # Panics
    /// On a shape mismatch or mixed backends.
    fn mul(self, rhs: &SquareMatrix<E>) -> RowVector<E> {
        rhs.act_left(self).expect("matrix left action")
    }
}

/// Scale by a scalar of the element type
impl<E: Scalar> Mul<E> for &SquareMatrix<E> {
    type Output = SquareMatrix<E>;

    fn mul(self, k: E) -> SquareMatrix<E> {
        self.scale(k)
    }
}

/// Scale by a scalar of the element type
impl<E: Scalar> Mul<E> for SquareMatrix<E> {
    type Output = SquareMatrix<E>;

    fn mul(self, k: E) -> SquareMatrix<E> {
        self.scale(k)
    }
}

/// Scale a complex matrix by a bare real
impl<P: Precision> Mul<P> for &SquareMatrix<Complex<P>> {
    type Output = SquareMatrix<Complex<P>>;

    fn mul(self, k: P) -> SquareMatrix<Complex<P>> {
        self.scale_real(k)
    }
}

/// Scale a complex matrix by a bare real
impl<P: Precision> Mul<P> for SquareMatrix<Complex<P>> {
    type Output = SquareMatrix<Complex<P>>;

    fn mul(self, k: P) -> SquareMatrix<Complex<P>> {
        self.scale_real(k)
    }
}

impl<P: Precision> Mul<&SquareMatrix<Complex<P>>> for Complex<P> {
    type Output = SquareMatrix<Complex<P>>;

    fn mul(self, rhs: &SquareMatrix<Complex<P>>) -> SquareMatrix<Complex<P>> {
        rhs.scale(self)
    }
}

impl<P: Precision> Mul<SquareMatrix<Complex<P>>> for Complex<P> {
    type Output = SquareMatrix<Complex<P>>;

    fn mul(self, rhs: SquareMatrix<Complex<P>>) -> SquareMatrix<Complex<P>> {
        rhs.scale(self)
    }
}

macro_rules! impl_real_scalar_lhs_matrix {
    ($float:ty) => {
        impl Mul<&SquareMatrix<$float>> for $float {
            type Output = SquareMatrix<$float>;

            fn mul(self, rhs: &SquareMatrix<$float>) -> SquareMatrix<$float> {
                rhs.scale(self)
            }
        }

        impl Mul<SquareMatrix<$float>> for $float {
            type Output = SquareMatrix<$float>;

            fn mul(self, rhs: SquareMatrix<$float>) -> SquareMatrix<$float> {
                rhs.scale(self)
            }
        }

        impl Mul<&SquareMatrix<Complex<$float>>> for $float {
            type Output = SquareMatrix<Complex<$float>>;

            fn mul(self, rhs: &SquareMatrix<Complex<$float>>) -> SquareMatrix<Complex<$float>> {
                rhs.scale_real(self)
            }
        }

        impl Mul<SquareMatrix<Complex<$float>>> for $float {
            type Output = SquareMatrix<Complex<$float>>;

            fn mul(self, rhs: SquareMatrix<Complex<$float>>) -> SquareMatrix<Complex<$float>> {
                rhs.scale_real(self)
            }
        }
    };
}

impl_real_scalar_lhs_matrix!(f32);
impl_real_scalar_lhs_matrix!(f64);
