//! Property tests for the algebraic laws
//!
//! Exact IEEE-754 identities (commutativity, additive inverse, conjugate
//! symmetry) are asserted exactly; laws that reassociate floating-point
//! operations (associativity, distributivity, unitary preservation) are
//! asserted within a tight tolerance.

mod common;

use common::{assert_allclose_c128, assert_close_c128, assert_close_f64, c64};
use linal::matrix::SquareMatrix;
use linal::scalar::Complex128;
use linal::vector::ColumnVector;
use proptest::prelude::*;

const COMPONENT: std::ops::Range<f64> = -100.0..100.0;

fn complex_strategy() -> impl Strategy<Value = Complex128> {
    (COMPONENT, COMPONENT).prop_map(|(re, im)| Complex128::new(re, im))
}

fn vector_strategy(len: usize) -> impl Strategy<Value = Vec<Complex128>> {
    prop::collection::vec(complex_strategy(), len)
}

/// Three equal-length entry vectors plus two scalars
fn triple_strategy() -> impl Strategy<
    Value = (
        Vec<Complex128>,
        Vec<Complex128>,
        Vec<Complex128>,
        Complex128,
        Complex128,
    ),
> {
    (1usize..8).prop_flat_map(|len| {
        (
            vector_strategy(len),
            vector_strategy(len),
            vector_strategy(len),
            complex_strategy(),
            complex_strategy(),
        )
    })
}

fn matrix_strategy(dim: usize) -> impl Strategy<Value = Vec<Complex128>> {
    prop::collection::vec(complex_strategy(), dim * dim)
}

fn square_from(dim: usize, entries: &[Complex128]) -> SquareMatrix<Complex128> {
    SquareMatrix::from_fn(dim, |i, j| entries[i * dim + j])
}

/// A unitary built from a rotation and two phases; always exactly structured
fn unitary_from(theta: f64, alpha: f64, beta: f64) -> SquareMatrix<Complex128> {
    let (sin, cos) = theta.sin_cos();
    let phase_a = Complex128::from_polar(1.0, alpha);
    let phase_b = Complex128::from_polar(1.0, beta);
    SquareMatrix::m([
        [phase_a * c64(cos, 0.0), phase_a * c64(-sin, 0.0)],
        [phase_b * c64(sin, 0.0), phase_b * c64(cos, 0.0)],
    ])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn addition_commutes_exactly((a, b, _, _, _) in triple_strategy()) {
        let a = ColumnVector::v(a);
        let b = ColumnVector::v(b);
        prop_assert_eq!(&a + &b, &b + &a);
    }

    #[test]
    fn addition_associates_within_tolerance((a, b, c, _, _) in triple_strategy()) {
        let a = ColumnVector::v(a);
        let b = ColumnVector::v(b);
        let c = ColumnVector::v(c);
        let left = &(&a + &b) + &c;
        let right = &a + &(&b + &c);
        assert_allclose_c128(left.entries(), right.entries(), 1e-12, 1e-12, "associativity");
    }

    #[test]
    fn additive_inverse_cancels_exactly((a, _, _, _, _) in triple_strategy()) {
        let a = ColumnVector::v(a);
        let len = a.len();
        prop_assert_eq!(&a + &(-&a), ColumnVector::zero(len));
    }

    #[test]
    fn scalar_distributes_over_vector_addition((a, b, _, s, _) in triple_strategy()) {
        let a = ColumnVector::v(a);
        let b = ColumnVector::v(b);
        let left = (&a + &b).scale(s);
        let right = &a.scale(s) + &b.scale(s);
        assert_allclose_c128(left.entries(), right.entries(), 1e-12, 1e-10, "distributivity");
    }

    #[test]
    fn scalar_sum_distributes_over_scaling((a, _, _, s1, s2) in triple_strategy()) {
        let a = ColumnVector::v(a);
        let left = a.scale(s1 + s2);
        let right = &a.scale(s1) + &a.scale(s2);
        assert_allclose_c128(left.entries(), right.entries(), 1e-12, 1e-10, "scalar distributivity");
    }

    #[test]
    fn self_inner_product_is_exactly_real((a, _, _, _, _) in triple_strategy()) {
        let a = ColumnVector::v(a);
        let ip = a.inner_product(&a).unwrap();
        prop_assert_eq!(ip.im, 0.0);
        prop_assert!(ip.re >= 0.0);
    }

    #[test]
    fn inner_product_has_conjugate_symmetry((a, b, _, _, _) in triple_strategy()) {
        let a = ColumnVector::v(a);
        let b = ColumnVector::v(b);
        let ab = a.inner_product(&b).unwrap();
        let ba = b.inner_product(&a).unwrap();
        assert_close_c128(ab, ba.conj(), 1e-12, 1e-10, "conjugate symmetry");
    }

    #[test]
    fn distance_is_symmetric_and_non_negative((a, b, _, _, _) in triple_strategy()) {
        let a = ColumnVector::v(a);
        let b = ColumnVector::v(b);
        let d = a.distance(&b).unwrap();
        prop_assert_eq!(d, b.distance(&a).unwrap());
        prop_assert!(d >= 0.0);
        prop_assert_eq!(a.distance(&a).unwrap(), 0.0);
    }

    #[test]
    fn tensor_product_associates_within_tolerance(
        a in vector_strategy(2),
        b in vector_strategy(3),
        c in vector_strategy(2),
    ) {
        let a = ColumnVector::v(a);
        let b = ColumnVector::v(b);
        let c = ColumnVector::v(c);
        let left = a.tensor_product(&b).unwrap().tensor_product(&c).unwrap();
        let right = a.tensor_product(&b.tensor_product(&c).unwrap()).unwrap();
        prop_assert_eq!(left.len(), 12);
        assert_allclose_c128(left.entries(), right.entries(), 1e-12, 1e-10, "tensor associativity");
    }

    #[test]
    fn matrix_addition_commutes_exactly(
        a in matrix_strategy(3),
        b in matrix_strategy(3),
    ) {
        let a = square_from(3, &a);
        let b = square_from(3, &b);
        prop_assert_eq!(&a + &b, &b + &a);
    }

    #[test]
    fn identity_is_exactly_neutral(a in matrix_strategy(3)) {
        let a = square_from(3, &a);
        let id = SquareMatrix::<Complex128>::identity(3);
        prop_assert_eq!(a.mul_matrix(&id).unwrap(), a.clone());
        prop_assert_eq!(id.mul_matrix(&a).unwrap(), a);
    }

    #[test]
    fn symmetrization_is_hermitian(a in matrix_strategy(3)) {
        let a = square_from(3, &a);
        let sym = a.add(&a.adjoint()).unwrap();
        prop_assert!(sym.is_hermitian());
        prop_assert_eq!(sym.clone(), sym.adjoint());
    }

    #[test]
    fn generated_unitaries_pass_the_predicate(
        theta in 0.0..std::f64::consts::TAU,
        alpha in 0.0..std::f64::consts::TAU,
        beta in 0.0..std::f64::consts::TAU,
    ) {
        let u = unitary_from(theta, alpha, beta);
        prop_assert!(u.is_unitary());
    }

    #[test]
    fn unitaries_preserve_inner_products_and_distances(
        theta in 0.0..std::f64::consts::TAU,
        alpha in 0.0..std::f64::consts::TAU,
        beta in 0.0..std::f64::consts::TAU,
        a in vector_strategy(2),
        b in vector_strategy(2),
    ) {
        let u = unitary_from(theta, alpha, beta);
        let a = ColumnVector::v(a);
        let b = ColumnVector::v(b);

        let ua = u.act(&a).unwrap();
        let ub = u.act(&b).unwrap();

        assert_close_c128(
            ua.inner_product(&ub).unwrap(),
            a.inner_product(&b).unwrap(),
            1e-9,
            1e-9,
            "inner product preservation",
        );
        assert_close_f64(
            ua.distance(&ub).unwrap(),
            a.distance(&b).unwrap(),
            1e-9,
            1e-9,
            "distance preservation",
        );
    }

    #[test]
    fn hermitian_predicate_matches_adjoint_equality(a in matrix_strategy(2)) {
        let a = square_from(2, &a);
        prop_assert_eq!(a.is_hermitian(), a == a.adjoint());
    }
}
