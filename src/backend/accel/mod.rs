//! Accelerated backend: bulk elementwise work over the foreign boundary
//!
//! Elementwise addition is delegated to the native kernel library, one
//! routine per lane precision; a complex entry slice is reinterpreted as
//! interleaved real lanes with a zero-copy cast, so the same two routines
//! cover all four element types. Every other operation falls back to the
//! shared algorithms in [`super::generic`], operating on the host data this
//! backend already materializes.
//!
//! A kernel failure is propagated as [`crate::error::Error::Kernel`]; there
//! is no retry and no silent downgrade to the managed path.

mod ffi;

pub use ffi::KernelStatus;

use super::generic;
use super::{MatrixKernels, VectorKernels};
use crate::error::{Error, Result};
use crate::scalar::{Lanes, Scalar};

/// Warm the kernel library up ahead of the first operation
///
/// Forwards the library's one argument-free entry point and maps its status
/// code. With the `accel` feature disabled this is a no-op success.
pub fn warmup() -> Result<()> {
    let status = ffi::warmup();
    if status.succeeded() {
        Ok(())
    } else {
        Err(Error::Kernel(status))
    }
}

/// Elementwise addition over the foreign boundary
///
/// The operands must have equal length; the caller-facing length error is
/// identical to the managed backend's.
fn add_entries<E: Scalar>(lhs: &[E], rhs: &[E]) -> Result<Box<[E]>> {
    if lhs.len() != rhs.len() {
        return Err(Error::length_mismatch(lhs.len(), rhs.len()));
    }

    let mut out = vec![E::zero(); lhs.len()].into_boxed_slice();
    let status = match E::DTYPE.lanes() {
        Lanes::Single => ffi::vector_add_f32(
            bytemuck::cast_slice(lhs),
            bytemuck::cast_slice(rhs),
            bytemuck::cast_slice_mut(&mut out),
        ),
        Lanes::Double => ffi::vector_add_f64(
            bytemuck::cast_slice(lhs),
            bytemuck::cast_slice(rhs),
            bytemuck::cast_slice_mut(&mut out),
        ),
    };

    if status.succeeded() {
        Ok(out)
    } else {
        Err(Error::Kernel(status))
    }
}

/// Accelerated vector storage
///
/// Entries live in host memory; the kernel library receives them per call.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector<E: Scalar> {
    entries: Box<[E]>,
}

impl<E: Scalar> VectorKernels<E> for Vector<E> {
    fn from_entries(entries: Box<[E]>) -> Self {
        Self { entries }
    }

    fn entries(&self) -> &[E] {
        &self.entries
    }

    fn map<F: Fn(E) -> E>(&self, f: F) -> Self {
        Self::from_entries(generic::map(&self.entries, f))
    }

    fn zip<F: Fn(E, E) -> E>(&self, rhs: &Self, f: F) -> Result<Self> {
        Ok(Self::from_entries(generic::zip(
            &self.entries,
            &rhs.entries,
            f,
        )?))
    }

    fn add(&self, rhs: &Self) -> Result<Self> {
        Ok(Self::from_entries(add_entries(&self.entries, &rhs.entries)?))
    }

    fn sub(&self, rhs: &Self) -> Result<Self> {
        self.zip(rhs, |a, b| a - b)
    }

    fn neg(&self) -> Self {
        self.map(|x| -x)
    }

    fn conj(&self) -> Self {
        self.map(Scalar::conj)
    }

    fn scale(&self, k: E) -> Self {
        self.map(|x| x * k)
    }

    fn scale_real(&self, k: E::Real) -> Self {
        self.map(|x| x.scale(k))
    }

    fn sum(&self) -> E {
        generic::sum(&self.entries)
    }

    fn inner_product(&self, rhs: &Self) -> Result<E> {
        generic::inner_product(&self.entries, &rhs.entries)
    }

    fn dot(&self, rhs: &Self) -> Result<E> {
        generic::dot(&self.entries, &rhs.entries)
    }

    fn tensor_product(&self, rhs: &Self) -> Self {
        Self::from_entries(generic::tensor(&self.entries, &rhs.entries))
    }

    fn snap(&self) -> Self {
        self.map(Scalar::snap)
    }
}

/// Accelerated square-matrix storage
///
/// The grid is one contiguous row-major slice, so elementwise addition runs
/// through the same lane kernel as vectors.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<E: Scalar> {
    dim: usize,
    entries: Box<[E]>,
}

impl<E: Scalar> MatrixKernels<E> for Matrix<E> {
    type Vector = Vector<E>;

    fn from_entries(dim: usize, entries: Box<[E]>) -> Self {
        debug_assert_eq!(entries.len(), dim * dim);
        Self { dim, entries }
    }

    fn dim(&self) -> usize {
        self.dim
    }

    fn entries(&self) -> &[E] {
        &self.entries
    }

    fn map<F: Fn(E) -> E>(&self, f: F) -> Self {
        Self::from_entries(self.dim, generic::map(&self.entries, f))
    }

    fn zip<F: Fn(E, E) -> E>(&self, rhs: &Self, f: F) -> Result<Self> {
        generic::check_dims(self.dim, rhs.dim)?;
        Ok(Self::from_entries(
            self.dim,
            generic::zip(&self.entries, &rhs.entries, f)?,
        ))
    }

    fn add(&self, rhs: &Self) -> Result<Self> {
        generic::check_dims(self.dim, rhs.dim)?;
        Ok(Self::from_entries(
            self.dim,
            add_entries(&self.entries, &rhs.entries)?,
        ))
    }

    fn sub(&self, rhs: &Self) -> Result<Self> {
        self.zip(rhs, |a, b| a - b)
    }

    fn neg(&self) -> Self {
        self.map(|x| -x)
    }

    fn conj(&self) -> Self {
        self.map(Scalar::conj)
    }

    fn transpose(&self) -> Self {
        Self::from_entries(self.dim, generic::transpose(&self.entries, self.dim))
    }

    fn adjoint(&self) -> Self {
        self.transpose().conj()
    }

    fn scale(&self, k: E) -> Self {
        self.map(|x| x * k)
    }

    fn scale_real(&self, k: E::Real) -> Self {
        self.map(|x| x.scale(k))
    }

    fn matmul(&self, rhs: &Self) -> Result<Self> {
        generic::check_dims(self.dim, rhs.dim)?;
        Ok(Self::from_entries(
            self.dim,
            generic::matmul(&self.entries, &rhs.entries, self.dim),
        ))
    }

    fn act(&self, v: &Self::Vector) -> Result<Self::Vector> {
        Ok(Vector::from_entries(generic::act(
            &self.entries,
            self.dim,
            v.entries(),
        )?))
    }

    fn act_left(&self, v: &Self::Vector) -> Result<Self::Vector> {
        Ok(Vector::from_entries(generic::act_left(
            &self.entries,
            self.dim,
            v.entries(),
        )?))
    }

    fn commutator(&self, rhs: &Self) -> Result<Self> {
        self.matmul(rhs)?.sub(&rhs.matmul(self)?)
    }

    fn tensor_product(&self, rhs: &Self) -> Self {
        Self::from_entries(
            self.dim * rhs.dim,
            generic::kronecker(&self.entries, self.dim, &rhs.entries, rhs.dim),
        )
    }

    fn snap(&self) -> Self {
        self.map(Scalar::snap)
    }

    fn is_identity(&self) -> bool {
        generic::is_identity(&self.entries, self.dim)
    }

    fn is_hermitian(&self) -> bool {
        generic::is_hermitian(&self.entries, self.dim)
    }

    fn is_unitary(&self) -> bool {
        let adjoint = self.adjoint();
        match (self.matmul(&adjoint), adjoint.matmul(self)) {
            (Ok(left), Ok(right)) => left.is_identity() && right.is_identity(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::{Complex64, Complex128};

    #[test]
    fn lane_addition_covers_all_element_types() {
        let a = Vector::from_entries(vec![1.0f32, 2.0, 3.0].into());
        let b = Vector::from_entries(vec![10.0f32, 20.0, 30.0].into());
        assert_eq!(a.add(&b).unwrap().entries(), &[11.0, 22.0, 33.0]);

        let a = Vector::from_entries(vec![1.5f64, -2.0].into());
        let b = Vector::from_entries(vec![0.5f64, 2.0].into());
        assert_eq!(a.add(&b).unwrap().entries(), &[2.0, 0.0]);

        let a = Vector::from_entries(vec![Complex64::new(1.0, 2.0)].into());
        let b = Vector::from_entries(vec![Complex64::new(3.0, 5.0)].into());
        assert_eq!(a.add(&b).unwrap().entries(), &[Complex64::new(4.0, 7.0)]);

        let a = Vector::from_entries(vec![Complex128::new(1.0, -1.0)].into());
        let b = Vector::from_entries(vec![Complex128::new(2.0, 3.0)].into());
        assert_eq!(a.add(&b).unwrap().entries(), &[Complex128::new(3.0, 2.0)]);
    }

    #[test]
    fn addition_validates_length_before_the_foreign_call() {
        let a = Vector::from_entries(vec![1.0f32, 2.0].into());
        let b = Vector::from_entries(vec![1.0f32].into());
        assert!(matches!(
            a.add(&b),
            Err(Error::LengthMismatch { lhs: 2, rhs: 1 })
        ));
    }

    #[test]
    fn matrix_addition_uses_the_lane_kernel() {
        let a = Matrix::from_entries(2, vec![1.0f32, 2.0, 3.0, 4.0].into());
        let b = Matrix::from_entries(2, vec![4.0f32, 3.0, 2.0, 1.0].into());
        assert_eq!(a.add(&b).unwrap().entries(), &[5.0, 5.0, 5.0, 5.0]);
    }
}
