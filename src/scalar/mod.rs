//! Scalar layer: element types and the precision abstraction
//!
//! This module provides the [`Scalar`] trait implemented by every entry type a
//! vector or matrix can hold (`f32`, `f64`, [`Complex64`], [`Complex128`]),
//! the [`Precision`] trait abstracting over the two floating-point widths, and
//! the runtime [`DType`] tag used by the accelerated backend to pick a kernel.
//!
//! Real-valued algebra is not a separate structure: a bare real is a scalar
//! whose conjugate is itself, so the whole engine is written once against
//! [`Scalar`] and instantiated for all four element types.

pub mod complex;

pub use complex::{Complex, Complex128, Complex64};

use bytemuck::{Pod, Zeroable};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

// ============================================================================
// DType
// ============================================================================

/// Element types supported by linal values
///
/// Runtime tag carried alongside the type system, used for diagnostics and by
/// the accelerated backend to select a kernel by lane precision.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DType {
    /// 32-bit floating point
    F32,
    /// 64-bit floating point
    F64,
    /// 64-bit complex (two f32: re, im)
    Complex64,
    /// 128-bit complex (two f64: re, im)
    Complex128,
}

/// Floating-point width of the lanes an element decomposes into
///
/// A complex element is two lanes of its component precision; a real element
/// is one. Elementwise addition is lane-oblivious, which is what lets the
/// accelerated backend run one kernel per lane width.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Lanes {
    /// f32 lanes
    Single,
    /// f64 lanes
    Double,
}

impl DType {
    /// Size of one element in bytes
    #[inline]
    pub const fn size_in_bytes(self) -> usize {
        match self {
            Self::F32 => 4,
            Self::F64 | Self::Complex64 => 8,
            Self::Complex128 => 16,
        }
    }

    /// Lane precision of this element type
    #[inline]
    pub const fn lanes(self) -> Lanes {
        match self {
            Self::F32 | Self::Complex64 => Lanes::Single,
            Self::F64 | Self::Complex128 => Lanes::Double,
        }
    }

    /// Whether this element type has an imaginary component
    #[inline]
    pub const fn is_complex(self) -> bool {
        matches!(self, Self::Complex64 | Self::Complex128)
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Complex64 => "complex64",
            Self::Complex128 => "complex128",
        };
        write!(f, "{name}")
    }
}

// ============================================================================
// Scalar
// ============================================================================

/// Trait for types that can be entries of a vector or matrix
///
/// This is the field-element contract the whole algebra is written against.
///
/// # Bounds
/// - `Copy + Send + Sync + 'static` - Basic trait requirements
/// - `Pod + Zeroable` - Safe memory reinterpretation (bytemuck), required by
///   the accelerated backend's lane casts
/// - `Add + Sub + Mul + Div + Neg` - Field arithmetic (Output = Self)
/// - `PartialEq` - Structural equality is exact component-wise equality; any
///   tolerance is applied explicitly via [`Scalar::snap`] first
pub trait Scalar:
    Copy
    + Send
    + Sync
    + Pod
    + Zeroable
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + PartialEq
    + fmt::Debug
    + fmt::Display
{
    /// The floating-point type of this scalar's components
    type Real: Precision;

    /// The corresponding DType for this Rust type
    const DTYPE: DType;

    /// Additive identity
    fn zero() -> Self;

    /// Multiplicative identity
    fn one() -> Self;

    /// Embed a bare real into this scalar type
    ///
    /// For complex types the imaginary part is zero.
    fn from_real(re: Self::Real) -> Self;

    /// Real component
    fn re(self) -> Self::Real;

    /// Complex conjugate; the identity for real scalars
    fn conj(self) -> Self;

    /// Modulus: absolute value for reals, `sqrt(re² + im²)` for complex
    fn modulus(self) -> Self::Real;

    /// Multiply by a bare real
    fn scale(self, k: Self::Real) -> Self;

    /// Snap each component to the nearest integer when within the precision's
    /// epsilon, else leave it unchanged
    ///
    /// Used to absorb floating-point noise before structural predicates such
    /// as "is identity". Equality everywhere else is exact.
    fn snap(self) -> Self;
}

// ============================================================================
// Precision
// ============================================================================

/// The floating-point parameter of the engine: `f32` or `f64`
///
/// A `Precision` is itself a [`Scalar`] (real-valued algebra is the same
/// machinery), extended with the handful of operations only meaningful on a
/// bare float. This is also the conversion surface for building values from
/// literals of either width.
pub trait Precision: Scalar<Real = Self> + PartialOrd {
    /// Snap tolerance for [`Scalar::snap`]
    const SNAP_EPSILON: Self;

    /// DType of the complex element built over this precision
    const COMPLEX_DTYPE: DType;

    /// Square root
    fn sqrt(self) -> Self;

    /// Absolute value
    fn abs(self) -> Self;

    /// Nearest integer, ties away from zero
    fn round_nearest(self) -> Self;

    /// Convert from f64
    fn from_f64(v: f64) -> Self;

    /// Convert to f64
    fn to_f64(self) -> f64;
}

#[inline]
fn snap_component<P: Precision>(v: P) -> P {
    let nearest = v.round_nearest();
    if (v - nearest).abs() <= P::SNAP_EPSILON {
        nearest
    } else {
        v
    }
}

macro_rules! impl_real_scalar {
    ($float:ty, $dtype:expr, $complex_dtype:expr, $snap_eps:expr) => {
        impl Scalar for $float {
            type Real = $float;

            const DTYPE: DType = $dtype;

            #[inline]
            fn zero() -> Self {
                0.0
            }

            #[inline]
            fn one() -> Self {
                1.0
            }

            #[inline]
            fn from_real(re: Self) -> Self {
                re
            }

            #[inline]
            fn re(self) -> Self {
                self
            }

            #[inline]
            fn conj(self) -> Self {
                self
            }

            #[inline]
            fn modulus(self) -> Self {
                self.abs()
            }

            #[inline]
            fn scale(self, k: Self) -> Self {
                self * k
            }

            #[inline]
            fn snap(self) -> Self {
                snap_component(self)
            }
        }

        impl Precision for $float {
            const SNAP_EPSILON: Self = $snap_eps;

            const COMPLEX_DTYPE: DType = $complex_dtype;

            #[inline]
            fn sqrt(self) -> Self {
                <$float>::sqrt(self)
            }

            #[inline]
            fn abs(self) -> Self {
                <$float>::abs(self)
            }

            #[inline]
            fn round_nearest(self) -> Self {
                <$float>::round(self)
            }

            #[inline]
            fn from_f64(v: f64) -> Self {
                v as $float
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    };
}

impl_real_scalar!(f32, DType::F32, DType::Complex64, 1e-6);
impl_real_scalar!(f64, DType::F64, DType::Complex128, 1e-9);
