//! Managed backend: pure in-process computation
//!
//! The reference implementation of the backend contracts. Every operation is
//! an ordinary traversal over the entry slices via the shared algorithms in
//! [`super::generic`]; there is no foreign boundary anywhere on this path.

use super::generic;
use super::{MatrixKernels, VectorKernels};
use crate::error::Result;
use crate::scalar::Scalar;

/// Managed vector storage: an immutable entry sequence
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
        self.zip(rhs, |a, b| a + b)
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

/// Managed square-matrix storage: an immutable row-major grid
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
        self.zip(rhs, |a, b| a + b)
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
        // dims always match; the products cannot fail
        match (self.matmul(&adjoint), adjoint.matmul(self)) {
            (Ok(left), Ok(right)) => left.is_identity() && right.is_identity(),
            _ => false,
        }
    }
}
