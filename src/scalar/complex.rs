//! Complex number type parametrized over floating-point precision
//!
//! # Storage Format
//!
//! Complex numbers are stored in interleaved format (re, im), matching the
//! layout the accelerated kernel library expects, so a slice of complex
//! entries can be reinterpreted as a slice of real lanes with no copying.
//!
//! # Arithmetic Operations
//!
//! Complex arithmetic follows the standard definitions:
//! - Addition: `(a+bi) + (c+di) = (a+c) + (b+d)i`
//! - Subtraction: `(a+bi) - (c+di) = (a-c) + (b-d)i`
//! - Multiplication: `(a+bi)(c+di) = (ac-bd) + (ad+bc)i`
//! - Division: `(a+bi)/(c+di) = (a+bi)*conj(c+di)/|c+di|²`
//!
//! Division by a zero-modulus operand is not guarded; it produces non-finite
//! components the way any IEEE-754 division by zero does.
//!
//! # Examples
//!
//! ```
//! use linal::scalar::Complex64;
//!
//! let z = Complex64::new(3.0, 4.0);
//! assert_eq!(z.modulus(), 5.0);
//!
//! let conjugate = z.conj(); // 3 - 4i
//! assert_eq!(conjugate, Complex64::new(3.0, -4.0));
//! ```

use super::{DType, Precision, Scalar};
use bytemuck::{Pod, Zeroable};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Complex number over precision `P`
///
/// Immutable value with exact component-wise structural equality; any
/// tolerance is applied explicitly through [`Complex::round`]. A real number
/// is a complex number with zero imaginary part (see [`Complex::from_re`]).
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Complex<P> {
    /// Real part
    pub re: P,
    /// Imaginary part
    pub im: P,
}

/// 64-bit complex number with f32 real and imaginary parts
pub type Complex64 = Complex<f32>;

/// 128-bit complex number with f64 real and imaginary parts
pub type Complex128 = Complex<f64>;

// SAFETY: Complex<P> is #[repr(C)] with two fields of the same Pod type, so
// it has no padding and any bit pattern is valid.
unsafe impl<P: Precision> Zeroable for Complex<P> {}
unsafe impl<P: Precision> Pod for Complex<P> {}

impl<P: Precision> Complex<P> {
    /// Create a new complex number
    #[inline]
    pub const fn new(re: P, im: P) -> Self {
        Self { re, im }
    }

    /// Zero complex number
    #[inline]
    pub fn zero() -> Self {
        Self::new(P::zero(), P::zero())
    }

    /// One (real unit)
    #[inline]
    pub fn one() -> Self {
        Self::new(P::one(), P::zero())
    }

    /// Imaginary unit
    #[inline]
    pub fn i() -> Self {
        Self::new(P::zero(), P::one())
    }

    /// Embed a real number: `re + 0i`
    #[inline]
    pub fn from_re(re: P) -> Self {
        Self::new(re, P::zero())
    }

    /// Create a complex number from polar form: `r * e^(iθ)`
    #[inline]
    pub fn from_polar(r: f64, theta: f64) -> Self {
        Self::new(
            P::from_f64(r * theta.cos()),
            P::from_f64(r * theta.sin()),
        )
    }

    /// Modulus (absolute value): `|z| = sqrt(re² + im²)`
    #[inline]
    pub fn modulus(self) -> P {
        (self.re * self.re + self.im * self.im).sqrt()
    }

    /// Squared modulus: `|z|² = re² + im²`
    ///
    /// Cheaper than `modulus()` when only the squared value is needed.
    #[inline]
    pub fn modulus_squared(self) -> P {
        self.re * self.re + self.im * self.im
    }

    /// Phase angle (argument): `atan2(im, re)` in radians
    #[inline]
    pub fn phase(self) -> f64 {
        self.im.to_f64().atan2(self.re.to_f64())
    }

    /// Complex conjugate: `conj(a + bi) = a - bi`
    #[inline]
    pub fn conj(self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// Reciprocal: `1/z = conj(z)/|z|²`
    ///
    /// Unguarded: a zero-modulus operand yields non-finite components.
    #[inline]
    pub fn recip(self) -> Self {
        let mag_sq = self.modulus_squared();
        Self::new(self.re / mag_sq, -self.im / mag_sq)
    }

    /// Principal square root
    ///
    /// Computed from the modulus: `sqrt(z) = sqrt((|z|+re)/2) ± i*sqrt((|z|-re)/2)`,
    /// with the imaginary sign following the operand's.
    #[inline]
    pub fn sqrt(self) -> Self {
        let two = P::one() + P::one();
        let mag = self.modulus();
        let re = ((mag + self.re) / two).sqrt();
        let im = ((mag - self.re) / two).sqrt();
        if self.im >= P::zero() {
            Self::new(re, im)
        } else {
            Self::new(re, -im)
        }
    }

    /// Snap each component to the nearest integer when within the precision's
    /// epsilon, else leave it unchanged
    ///
    /// Absorbs floating-point noise ahead of exact structural comparison.
    #[inline]
    pub fn round(self) -> Self {
        Self::new(Scalar::snap(self.re), Scalar::snap(self.im))
    }
}

impl<P: Precision> Add for Complex<P> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl<P: Precision> Sub for Complex<P> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl<P: Precision> Mul for Complex<P> {
    type Output = Self;

    /// Complex multiplication: `(a+bi)(c+di) = (ac-bd) + (ad+bc)i`
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl<P: Precision> Div for Complex<P> {
    type Output = Self;

    /// Complex division: `(a+bi)/(c+di) = (a+bi)*conj(c+di)/|c+di|²`
    #[inline]
    fn div(self, rhs: Self) -> Self {
        let denom = rhs.modulus_squared();
        Self::new(
            (self.re * rhs.re + self.im * rhs.im) / denom,
            (self.im * rhs.re - self.re * rhs.im) / denom,
        )
    }
}

impl<P: Precision> Neg for Complex<P> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.re, -self.im)
    }
}

impl<P: Precision> Mul<P> for Complex<P> {
    type Output = Self;

    /// Scale by a bare real
    #[inline]
    fn mul(self, rhs: P) -> Self {
        Self::new(self.re * rhs, self.im * rhs)
    }
}

impl<P: Precision> fmt::Display for Complex<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im >= P::zero() {
            write!(f, "{}+{}i", self.re, self.im)
        } else {
            write!(f, "{}{}i", self.re, self.im)
        }
    }
}

impl<P: Precision> From<P> for Complex<P> {
    #[inline]
    fn from(re: P) -> Self {
        Self::from_re(re)
    }
}

impl<P: Precision> From<(P, P)> for Complex<P> {
    #[inline]
    fn from((re, im): (P, P)) -> Self {
        Self::new(re, im)
    }
}

impl From<Complex64> for Complex128 {
    #[inline]
    fn from(z: Complex64) -> Self {
        Self::new(z.re as f64, z.im as f64)
    }
}

impl From<Complex128> for Complex64 {
    #[inline]
    fn from(z: Complex128) -> Self {
        Self::new(z.re as f32, z.im as f32)
    }
}

// real * complex, per concrete precision (a generic impl would place the
// type parameter in the uncovered Self position)
macro_rules! impl_real_times_complex {
    ($float:ty) => {
        impl Mul<Complex<$float>> for $float {
            type Output = Complex<$float>;

            #[inline]
            fn mul(self, rhs: Complex<$float>) -> Complex<$float> {
                rhs * self
            }
        }
    };
}

impl_real_times_complex!(f32);
impl_real_times_complex!(f64);

impl<P: Precision> Scalar for Complex<P> {
    type Real = P;

    const DTYPE: DType = P::COMPLEX_DTYPE;

    #[inline]
    fn zero() -> Self {
        Complex::zero()
    }

    #[inline]
    fn one() -> Self {
        Complex::one()
    }

    #[inline]
    fn from_real(re: P) -> Self {
        Complex::from_re(re)
    }

    #[inline]
    fn re(self) -> P {
        self.re
    }

    #[inline]
    fn conj(self) -> Self {
        Complex::conj(self)
    }

    #[inline]
    fn modulus(self) -> P {
        Complex::modulus(self)
    }

    #[inline]
    fn scale(self, k: P) -> Self {
        self * k
    }

    #[inline]
    fn snap(self) -> Self {
        self.round()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Generate the same suite for both precisions
    macro_rules! complex_suite {
        ($mod_name:ident, $type_name:ident, $float:ty) => {
            mod $mod_name {
                use super::*;

                #[test]
                fn construction_and_modulus() {
                    let z = $type_name::new(3.0, 4.0);
                    assert_eq!(z.re, 3.0);
                    assert_eq!(z.im, 4.0);
                    assert_eq!(z.modulus(), 5.0);
                    assert_eq!(z.modulus_squared(), 25.0);
                }

                #[test]
                fn arithmetic() {
                    let a = $type_name::new(1.0, 2.0);
                    let b = $type_name::new(3.0, 5.0);

                    assert_eq!(a + b, $type_name::new(4.0, 7.0));
                    assert_eq!(a - b, $type_name::new(-2.0, -3.0));

                    // (1+2i)(3+5i) = 3 + 5i + 6i - 10 = -7 + 11i
                    assert_eq!(a * b, $type_name::new(-7.0, 11.0));
                }

                #[test]
                fn conjugate_times_self_is_squared_modulus() {
                    let z = $type_name::new(3.0, 4.0);
                    assert_eq!(z.conj(), $type_name::new(3.0, -4.0));

                    let prod = z * z.conj();
                    assert_eq!(prod.re, 25.0);
                    assert_eq!(prod.im, 0.0);
                }

                #[test]
                fn division() {
                    // 1/i = -i
                    let one = $type_name::one();
                    let i = $type_name::i();
                    let q = one / i;
                    assert!(q.re.abs() < 1e-6);
                    assert!((q.im - (-1.0)).abs() < 1e-6);

                    // (z*w)/w == z
                    let z = $type_name::new(2.0, -3.0);
                    let w = $type_name::new(-1.0, 4.0);
                    let back = (z * w) / w;
                    assert!((back.re - z.re).abs() < 1e-5);
                    assert!((back.im - z.im).abs() < 1e-5);
                }

                #[test]
                fn division_by_zero_is_non_finite() {
                    let z = $type_name::new(1.0, 1.0);
                    let q = z / $type_name::zero();
                    assert!(!q.re.is_finite());
                }

                #[test]
                fn negation() {
                    let z = $type_name::new(3.0, -4.0);
                    assert_eq!(-z, $type_name::new(-3.0, 4.0));
                    assert_eq!(z + (-z), $type_name::zero());
                }

                #[test]
                fn real_scaling_from_both_sides() {
                    let z = $type_name::new(1.0, -2.0);
                    assert_eq!(z * 3.0, $type_name::new(3.0, -6.0));
                    assert_eq!(3.0 * z, $type_name::new(3.0, -6.0));
                }

                #[test]
                fn principal_sqrt() {
                    // sqrt(-1) = i
                    let minus_one = $type_name::new(-1.0, 0.0);
                    let r = minus_one.sqrt();
                    assert!(r.re.abs() < 1e-6);
                    assert!((r.im - 1.0).abs() < 1e-6);

                    // sqrt(3+4i) = 2+i
                    let z = $type_name::new(3.0, 4.0);
                    let r = z.sqrt();
                    assert!((r.re - 2.0).abs() < 1e-5);
                    assert!((r.im - 1.0).abs() < 1e-5);

                    // sign of the imaginary part follows the operand
                    let z = $type_name::new(3.0, -4.0);
                    let r = z.sqrt();
                    assert!((r.re - 2.0).abs() < 1e-5);
                    assert!((r.im + 1.0).abs() < 1e-5);
                }

                #[test]
                fn from_polar_round_trip() {
                    let pi = std::f64::consts::PI;

                    // e^(i*pi) = -1
                    let z = $type_name::from_polar(1.0, pi);
                    assert!((z.re - (-1.0)).abs() < 1e-5);
                    assert!(z.im.abs() < 1e-5);

                    let z = $type_name::from_polar(2.0, pi / 2.0);
                    assert!(z.re.abs() < 1e-5);
                    assert!((z.im - 2.0).abs() < 1e-5);
                    assert!((z.phase() - pi / 2.0).abs() < 1e-5);
                }

                #[test]
                fn round_snaps_near_integers() {
                    let eps = <$float as Precision>::SNAP_EPSILON / 2.0;
                    let noisy = $type_name::new(1.0 - eps, eps);
                    assert_eq!(noisy.round(), $type_name::one());

                    let far = $type_name::new(0.75, -0.25);
                    assert_eq!(far.round(), far);
                }

                #[test]
                fn conversions() {
                    let z: $type_name = (3.0 as $float).into();
                    assert_eq!(z, $type_name::new(3.0, 0.0));

                    let z: $type_name = (1.0 as $float, -2.0 as $float).into();
                    assert_eq!(z, $type_name::new(1.0, -2.0));
                }

                #[test]
                fn display() {
                    assert_eq!($type_name::new(1.0, 2.0).to_string(), "1+2i");
                    assert_eq!($type_name::new(1.0, -2.0).to_string(), "1-2i");
                }
            }
        };
    }

    complex_suite!(complex64_tests, Complex64, f32);
    complex_suite!(complex128_tests, Complex128, f64);

    #[test]
    fn cross_precision_conversion() {
        let z64 = Complex64::new(1.5, -2.5);
        let z128: Complex128 = z64.into();
        assert_eq!(z128, Complex128::new(1.5, -2.5));

        let back: Complex64 = z128.into();
        assert_eq!(back, z64);
    }

    #[test]
    fn interleaved_pod_layout() {
        assert_eq!(std::mem::size_of::<Complex64>(), 8);
        assert_eq!(std::mem::align_of::<Complex64>(), 4);
        assert_eq!(std::mem::size_of::<Complex128>(), 16);
        assert_eq!(std::mem::align_of::<Complex128>(), 8);

        // A complex slice reinterprets as interleaved real lanes
        let zs = [Complex64::new(1.0, 2.0), Complex64::new(3.0, 4.0)];
        let lanes: &[f32] = bytemuck::cast_slice(&zs);
        assert_eq!(lanes, &[1.0, 2.0, 3.0, 4.0]);
    }
}
