//! Shared algorithms over raw entry slices
//!
//! Both backends route through these: the managed backend for everything, the
//! accelerated backend for every operation it does not delegate to the native
//! kernel library. Keeping the algorithms in one place is what guarantees the
//! two backends agree entry-for-entry wherever the kernel library is not
//! involved.
//!
//! Length/dimension validation happens here, once, so every caller reports
//! the same errors.

use crate::error::{Error, Result};
use crate::scalar::Scalar;

// ============================================================================
// Vector algorithms
// ============================================================================

/// Elementwise transform
pub(crate) fn map<E: Scalar, F: Fn(E) -> E>(src: &[E], f: F) -> Box<[E]> {
    src.iter().map(|&x| f(x)).collect()
}

/// Elementwise combine; the operands must have equal length
pub(crate) fn zip<E: Scalar, F: Fn(E, E) -> E>(lhs: &[E], rhs: &[E], f: F) -> Result<Box<[E]>> {
    if lhs.len() != rhs.len() {
        return Err(Error::length_mismatch(lhs.len(), rhs.len()));
    }

    Ok(lhs.iter().zip(rhs).map(|(&a, &b)| f(a, b)).collect())
}

/// Sum of all entries
pub(crate) fn sum<E: Scalar>(src: &[E]) -> E {
    src.iter().fold(E::zero(), |acc, &x| acc + x)
}

/// Sesquilinear inner product: `Σ lhs[i] · conj(rhs[i])`
///
/// Linear in the left operand, conjugate-linear in the right. The inner
/// product of a vector with itself has an exactly-zero imaginary part: each
/// term `z·conj(z)` cancels it by construction, not by rounding.
pub(crate) fn inner_product<E: Scalar>(lhs: &[E], rhs: &[E]) -> Result<E> {
    if lhs.len() != rhs.len() {
        return Err(Error::length_mismatch(lhs.len(), rhs.len()));
    }

    Ok(lhs
        .iter()
        .zip(rhs)
        .fold(E::zero(), |acc, (&a, &b)| acc + a * b.conj()))
}

/// Bilinear product: `Σ lhs[i] · rhs[i]`, no conjugation
///
/// This is ordinary row-times-column vector multiplication, distinct from the
/// sesquilinear inner product even though the two coincide when the right
/// operand is already conjugated by the caller.
pub(crate) fn dot<E: Scalar>(lhs: &[E], rhs: &[E]) -> Result<E> {
    if lhs.len() != rhs.len() {
        return Err(Error::length_mismatch(lhs.len(), rhs.len()));
    }

    Ok(lhs
        .iter()
        .zip(rhs)
        .fold(E::zero(), |acc, (&a, &b)| acc + a * b))
}

/// Tensor product: every pairwise product, row-major over `(i, j)`
pub(crate) fn tensor<E: Scalar>(lhs: &[E], rhs: &[E]) -> Box<[E]> {
    lhs.iter()
        .flat_map(|&a| rhs.iter().map(move |&b| a * b))
        .collect()
}

// ============================================================================
// Matrix algorithms (row-major m×m grids)
// ============================================================================

#[inline]
fn at<E: Scalar>(entries: &[E], dim: usize, i: usize, j: usize) -> E {
    entries[i * dim + j]
}

/// Equal-dimension check for binary matrix operations
pub(crate) fn check_dims(lhs: usize, rhs: usize) -> Result<()> {
    if lhs != rhs {
        return Err(Error::dimension_mismatch(lhs, rhs));
    }
    Ok(())
}

/// Transpose of a row-major grid
pub(crate) fn transpose<E: Scalar>(entries: &[E], dim: usize) -> Box<[E]> {
    let mut out = Vec::with_capacity(entries.len());
    for j in 0..dim {
        for i in 0..dim {
            out.push(at(entries, dim, i, j));
        }
    }
    out.into_boxed_slice()
}

/// Matrix product: entry `(i,j) = Σ_k lhs[i,k]·rhs[k,j]`
pub(crate) fn matmul<E: Scalar>(lhs: &[E], rhs: &[E], dim: usize) -> Box<[E]> {
    let mut out = Vec::with_capacity(dim * dim);
    for i in 0..dim {
        for j in 0..dim {
            let mut acc = E::zero();
            for k in 0..dim {
                acc = acc + at(lhs, dim, i, k) * at(rhs, dim, k, j);
            }
            out.push(acc);
        }
    }
    out.into_boxed_slice()
}

/// Right action on a column vector: `out[i] = Σ_j m[i,j]·v[j]`
pub(crate) fn act<E: Scalar>(entries: &[E], dim: usize, v: &[E]) -> Result<Box<[E]>> {
    if v.len() != dim {
        return Err(Error::shape_mismatch(dim, v.len()));
    }

    let mut out = Vec::with_capacity(dim);
    for i in 0..dim {
        let mut acc = E::zero();
        for j in 0..dim {
            acc = acc + at(entries, dim, i, j) * v[j];
        }
        out.push(acc);
    }
    Ok(out.into_boxed_slice())
}

/// Left action of a row vector: `out[j] = Σ_i v[i]·m[i,j]`
pub(crate) fn act_left<E: Scalar>(entries: &[E], dim: usize, v: &[E]) -> Result<Box<[E]>> {
    if v.len() != dim {
        return Err(Error::shape_mismatch(dim, v.len()));
    }

    let mut out = Vec::with_capacity(dim);
    for j in 0..dim {
        let mut acc = E::zero();
        for i in 0..dim {
            acc = acc + v[i] * at(entries, dim, i, j);
        }
        out.push(acc);
    }
    Ok(out.into_boxed_slice())
}

/// Kronecker product; result dimension is `dim_l·dim_r`
///
/// Entry `(j,k) = lhs[j/dim_r, k/dim_r] · rhs[j%dim_r, k%dim_r]`.
pub(crate) fn kronecker<E: Scalar>(
    lhs: &[E],
    dim_l: usize,
    rhs: &[E],
    dim_r: usize,
) -> Box<[E]> {
    let dim = dim_l * dim_r;
    let mut out = Vec::with_capacity(dim * dim);
    for j in 0..dim {
        for k in 0..dim {
            out.push(at(lhs, dim_l, j / dim_r, k / dim_r) * at(rhs, dim_r, j % dim_r, k % dim_r));
        }
    }
    out.into_boxed_slice()
}

/// After snapping, diagonal entries are one and off-diagonal entries are zero
pub(crate) fn is_identity<E: Scalar>(entries: &[E], dim: usize) -> bool {
    (0..dim).all(|i| {
        (0..dim).all(|j| {
            let expected = if i == j { E::one() } else { E::zero() };
            at(entries, dim, i, j).snap() == expected
        })
    })
}

/// Structural equality with the adjoint grid, exact
pub(crate) fn is_hermitian<E: Scalar>(entries: &[E], dim: usize) -> bool {
    (0..dim).all(|i| (0..dim).all(|j| at(entries, dim, i, j) == at(entries, dim, j, i).conj()))
}
