//! # linal
//!
//! **Dense complex and real linear algebra with managed and accelerated
//! compute backends.**
//!
//! linal models vectors and linear operators over the complex and real
//! fields, in two interchangeable floating-point precisions, with the same
//! API across two computation backends.
//!
//! ## Why linal?
//!
//! - **Backend-agnostic call sites**: a value is constructed on a backend
//!   once; every algebraic expression after that is written once
//! - **Two precisions**: every shape is generic over `f32`/`f64` components
//! - **Real and complex**: a bare real is a first-class scalar, not a wrapper
//! - **Immutable values**: every operation returns a new value; concurrent
//!   readers need no synchronization
//! - **Exact algebra**: structural equality is exact; tolerance is applied
//!   only through explicit rounding ahead of the structural predicates
//!
//! ## Quick Start
//!
//! ```
//! use linal::prelude::*;
//!
//! let a = ColumnVector::v(vec![Complex64::new(1.0, 2.0), Complex64::new(3.0, 5.0)]);
//! let b = ColumnVector::v(vec![Complex64::new(7.0, 11.0), Complex64::new(13.0, 19.0)]);
//!
//! let sum = &a + &b;
//! assert_eq!(sum[0], Complex64::new(8.0, 13.0));
//!
//! let ip = a.inner_product(&b)?;
//! assert_eq!(ip, Complex64::new(163.0, 11.0));
//!
//! let u = SquareMatrix::<Complex64>::identity(2);
//! assert!(u.is_unitary());
//! # Ok::<(), linal::error::Error>(())
//! ```
//!
//! ## Operations
//!
//! - **Vectors** ([`vector::ColumnVector`], [`vector::RowVector`]): add,
//!   subtract, additive inverse, scalar scaling, conjugate, transpose,
//!   adjoint, inner product, norm, distance, normalization, tensor product,
//!   map/zip, sum, rounding
//! - **Matrices** ([`matrix::SquareMatrix`]): the elementwise set plus matrix
//!   product, vector actions from both sides, commutator, Kronecker product,
//!   and the identity/hermitian/unitary predicates
//!
//! ## Backends
//!
//! - **Managed** (default): pure in-process loops
//! - **Accelerated**: elementwise addition crosses a C-ABI boundary into a
//!   prebuilt kernel library; everything else shares the managed algorithms.
//!   Without the `accel` cargo feature the foreign routines are in-process
//!   software stand-ins, so the backend is portable and testable anywhere.
//!
//! ## Feature Flags
//!
//! - `accel`: link the real native kernel library (see `build.rs`); also
//!   makes [`backend::Backend::Accelerated`] the active default backend

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod error;
pub mod factory;
pub mod matrix;
pub mod scalar;
pub mod vector;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::backend::accel::KernelStatus;
    pub use crate::backend::Backend;
    pub use crate::error::{Error, Result};
    pub use crate::factory::Factory;
    pub use crate::matrix::SquareMatrix;
    pub use crate::scalar::{Complex, Complex128, Complex64, DType, Precision, Scalar};
    pub use crate::vector::{ColumnVector, RowVector};
}
