//! Leaf kernels of the recursive FFT
//!
//! The two-point butterfly and the twiddle-factor multiplications that run on every row while
//! it is cache resident.
//!
use num_complex::Complex;
use num_traits::{Float, FloatConst};

use crate::twiddles::root_of_unity;

/// Butterfly for a length-2 transform: `[x0 + x1, x0 - x1]`
#[inline]
pub fn butterfly_2<T: Float>(x: &mut [Complex<T>]) {
    let z0 = x[0];
    let z1 = x[1];
    x[0] = z0 + z1;
    x[1] = z0 - z1;
}

/// Multiplies `row[j]` by `exp(-2πi · step · j / len)`, evaluating every factor with `sin_cos`.
#[multiversion::multiversion(targets(
    "x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86_64+avx2+fma",
    "x86_64+sse4.2",
    "x86+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
pub fn twiddle_row_direct<T: Float + FloatConst>(row: &mut [Complex<T>], step: usize, len: usize) {
    let step = step % len;
    let mut exponent = 0;
    for z in row.iter_mut() {
        *z = *z * root_of_unity(exponent, len);
        exponent = (exponent + step) % len;
    }
}

/// Multiplies `row[j]` by `exp(-2πi · step · j / len)`, reading every factor from `roots`,
/// the table of all powers of `exp(-2πi / roots.len())`.
///
/// `len` must divide `roots.len()`.
#[multiversion::multiversion(targets(
    "x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86_64+avx2+fma",
    "x86_64+sse4.2",
    "x86+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
pub fn twiddle_row_table<T: Float>(
    row: &mut [Complex<T>],
    step: usize,
    len: usize,
    roots: &[Complex<T>],
) {
    debug_assert_eq!(roots.len() % len, 0);
    let stride = roots.len() / len;
    let step = step % len;
    let mut exponent = 0;
    for z in row.iter_mut() {
        *z = *z * roots[exponent * stride];
        exponent = (exponent + step) % len;
    }
}
