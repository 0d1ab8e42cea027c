//! Row and column vector facades
//!
//! [`ColumnVector`] and [`RowVector`] are the uniform vector types client
//! code programs against. Each holds exactly one concrete backend value and
//! forwards every operation to it; which backend that is was decided once, at
//! construction, by the factory layer. The two orientations share the same
//! storage contract and are related by [`ColumnVector::transpose`] /
//! [`RowVector::transpose`] (same entries, reinterpreted) and `adjoint`
//! (transpose plus conjugate); they are distinct types so an inner product
//! cannot be confused with an outer product at a call site.

mod column;
mod row;

pub use column::ColumnVector;
pub use row::RowVector;

use crate::backend::{accel, managed, Backend, VectorKernels};
use crate::error::{Error, Result};
use crate::scalar::{Precision, Scalar};

/// The one concrete backend value a vector facade wraps
///
/// Binary operations unwrap the same variant from both operands; a mixed
/// pair is a programming-contract violation reported as
/// [`Error::BackendMismatch`], never coerced.
#[derive(Clone, Debug)]
pub(crate) enum VectorRepr<E: Scalar> {
    /// Pure in-process value
    Managed(managed::Vector<E>),
    /// Value whose bulk elementwise work crosses the foreign boundary
    Accelerated(accel::Vector<E>),
}

/// Forward a unary operation, staying on the operand's backend
macro_rules! forward_unary {
    ($self:expr, $method:ident $(, $arg:expr)*) => {
        match $self {
            VectorRepr::Managed(v) => VectorRepr::Managed(v.$method($($arg),*)),
            VectorRepr::Accelerated(v) => VectorRepr::Accelerated(v.$method($($arg),*)),
        }
    };
}

/// Forward a fallible binary operation, unwrapping the shared backend
macro_rules! forward_binary {
    ($lhs:expr, $rhs:expr, $method:ident $(, $arg:expr)*) => {
        match ($lhs, $rhs) {
            (VectorRepr::Managed(a), VectorRepr::Managed(b)) => {
                Ok(VectorRepr::Managed(a.$method(b $(, $arg)*)?))
            }
            (VectorRepr::Accelerated(a), VectorRepr::Accelerated(b)) => {
                Ok(VectorRepr::Accelerated(a.$method(b $(, $arg)*)?))
            }
            (a, b) => Err(Error::backend_mismatch(a.backend(), b.backend())),
        }
    };
}

/// Forward an infallible binary operation (lengths already known compatible)
macro_rules! forward_binary_infallible {
    ($lhs:expr, $rhs:expr, $method:ident) => {
        match ($lhs, $rhs) {
            (VectorRepr::Managed(a), VectorRepr::Managed(b)) => {
                Ok(VectorRepr::Managed(a.$method(b)))
            }
            (VectorRepr::Accelerated(a), VectorRepr::Accelerated(b)) => {
                Ok(VectorRepr::Accelerated(a.$method(b)))
            }
            (a, b) => Err(Error::backend_mismatch(a.backend(), b.backend())),
        }
    };
}

impl<E: Scalar> VectorRepr<E> {
    pub(crate) fn from_entries(backend: Backend, entries: Box<[E]>) -> Self {
        match backend {
            Backend::Managed => Self::Managed(managed::Vector::from_entries(entries)),
            Backend::Accelerated => Self::Accelerated(accel::Vector::from_entries(entries)),
        }
    }

    pub(crate) fn backend(&self) -> Backend {
        match self {
            Self::Managed(_) => Backend::Managed,
            Self::Accelerated(_) => Backend::Accelerated,
        }
    }

    pub(crate) fn entries(&self) -> &[E] {
        match self {
            Self::Managed(v) => v.entries(),
            Self::Accelerated(v) => v.entries(),
        }
    }

    pub(crate) fn map<F: Fn(E) -> E>(&self, f: F) -> Self {
        forward_unary!(self, map, &f)
    }

    pub(crate) fn zip<F: Fn(E, E) -> E>(&self, rhs: &Self, f: F) -> Result<Self> {
        forward_binary!(self, rhs, zip, &f)
    }

    pub(crate) fn add(&self, rhs: &Self) -> Result<Self> {
        forward_binary!(self, rhs, add)
    }

    pub(crate) fn sub(&self, rhs: &Self) -> Result<Self> {
        forward_binary!(self, rhs, sub)
    }

    pub(crate) fn neg(&self) -> Self {
        forward_unary!(self, neg)
    }

    pub(crate) fn conj(&self) -> Self {
        forward_unary!(self, conj)
    }

    pub(crate) fn scale(&self, k: E) -> Self {
        forward_unary!(self, scale, k)
    }

    pub(crate) fn scale_real(&self, k: E::Real) -> Self {
        forward_unary!(self, scale_real, k)
    }

    pub(crate) fn sum(&self) -> E {
        match self {
            Self::Managed(v) => v.sum(),
            Self::Accelerated(v) => v.sum(),
        }
    }

    pub(crate) fn inner_product(&self, rhs: &Self) -> Result<E> {
        match (self, rhs) {
            (Self::Managed(a), Self::Managed(b)) => a.inner_product(b),
            (Self::Accelerated(a), Self::Accelerated(b)) => a.inner_product(b),
            (a, b) => Err(Error::backend_mismatch(a.backend(), b.backend())),
        }
    }

    pub(crate) fn dot(&self, rhs: &Self) -> Result<E> {
        match (self, rhs) {
            (Self::Managed(a), Self::Managed(b)) => a.dot(b),
            (Self::Accelerated(a), Self::Accelerated(b)) => a.dot(b),
            (a, b) => Err(Error::backend_mismatch(a.backend(), b.backend())),
        }
    }

    pub(crate) fn tensor_product(&self, rhs: &Self) -> Result<Self> {
        forward_binary_infallible!(self, rhs, tensor_product)
    }

    pub(crate) fn snap(&self) -> Self {
        forward_unary!(self, snap)
    }

    /// Norm: `sqrt(⟨v, v⟩).re`
    ///
    /// The self inner product has an exactly-zero imaginary part, so the real
    /// component carries the whole value.
    pub(crate) fn norm(&self) -> E::Real {
        let self_product = match self {
            Self::Managed(v) => v.inner_product(v),
            Self::Accelerated(v) => v.inner_product(v),
        };
        // same operand on both sides; the length precondition cannot fail
        match self_product {
            Ok(ip) => ip.re().sqrt(),
            Err(_) => unreachable!("inner product of a vector with itself"),
        }
    }
}

/// Structural equality over the wrapped entries, backend-agnostic
impl<E: Scalar> PartialEq for VectorRepr<E> {
    fn eq(&self, other: &Self) -> bool {
        self.entries() == other.entries()
    }
}

pub(crate) fn norm_reciprocal<P: Precision>(norm: P) -> P {
    // unguarded: a zero norm yields a non-finite factor
    P::one() / norm
}
