//! Utility functions such as exact log2 and conversions between split and complex buffers

use bytemuck::{cast_slice, Pod};
use num_complex::Complex;
use num_traits::Float;

use crate::error::FftError;

/// Computes `log_2(n)` for an exact power of two.
///
/// Returns [`FftError::InvalidLength`] if `n` is zero or not a power of two.
#[inline]
pub fn log2_exact(n: usize) -> Result<usize, FftError> {
    if n.is_power_of_two() {
        Ok(n.trailing_zeros() as usize)
    } else {
        Err(FftError::InvalidLength { len: n })
    }
}

#[multiversion::multiversion(
    targets(
    "x86_64+avx2+fma", // x86_64-v3
    "x86_64+sse4.2", // x86_64-v2
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    ))]
/// Separates data like `[1, 2, 3, 4]` into `([1, 3], [2, 4])`
fn split_pairs<T: Copy + Default>(input: &[T]) -> (Vec<T>, Vec<T>) {
    let out_len = input.len() / 2;
    let mut out_even = vec![T::default(); out_len];
    let mut out_odd = vec![T::default(); out_len];

    input
        .chunks_exact(2)
        .zip(out_even.iter_mut())
        .zip(out_odd.iter_mut())
        .for_each(|((pair, even), odd)| {
            *even = pair[0];
            *odd = pair[1];
        });

    (out_even, out_odd)
}

/// Splits a slice of complex numbers into separate vectors of real and imaginary components.
pub(crate) fn separate_re_im<T: Pod + Default>(signal: &[Complex<T>]) -> (Vec<T>, Vec<T>) {
    let flat: &[T] = cast_slice(signal);
    split_pairs(flat)
}

/// Combines separate slices of real and imaginary components
/// into a single vector of complex numbers.
///
/// # Panics
///
/// Panics if `reals.len() != imags.len()`.
pub(crate) fn combine_re_im<T: Float>(reals: &[T], imags: &[T]) -> Vec<Complex<T>> {
    assert_eq!(reals.len(), imags.len());

    reals
        .iter()
        .zip(imags.iter())
        .map(|(z_re, z_im)| Complex::new(*z_re, *z_im))
        .collect()
}
