//! Common test utilities
#![allow(dead_code)]

use linal::scalar::{Complex128, Complex64};

/// Shorthand single-precision complex constructor
pub fn c32(re: f32, im: f32) -> Complex64 {
    Complex64::new(re, im)
}

/// Shorthand double-precision complex constructor
pub fn c64(re: f64, im: f64) -> Complex128 {
    Complex128::new(re, im)
}

/// Assert two f64 values are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_close_f64(a: f64, b: f64, rtol: f64, atol: f64, msg: &str) {
    let diff = (a - b).abs();
    let tol = atol + rtol * b.abs();
    assert!(
        diff <= tol,
        "{msg}: {a} vs {b} (diff={diff}, tol={tol})"
    );
}

/// Assert two complex values are close component-wise
pub fn assert_close_c128(a: Complex128, b: Complex128, rtol: f64, atol: f64, msg: &str) {
    assert_close_f64(a.re, b.re, rtol, atol, msg);
    assert_close_f64(a.im, b.im, rtol, atol, msg);
}

/// Assert two complex slices are close component-wise
pub fn assert_allclose_c128(a: &[Complex128], b: &[Complex128], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{msg}: length mismatch");
    for (i, (&x, &y)) in a.iter().zip(b.iter()).enumerate() {
        assert_close_c128(x, y, rtol, atol, &format!("{msg}: element {i}"));
    }
}
