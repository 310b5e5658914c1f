//! Cache-oblivious recursive FFT
//!
//! A transform of length `N = n0 · n1` is computed as `n1` transforms of length `n0` over the
//! columns of an `n0 x n1` row-major matrix, a twiddle multiplication, `n0` transforms of length
//! `n1` over its rows, and a final transpose [1]. Columns are made contiguous by transposing the
//! matrix in place, so every recursive call works on a contiguous sub-slice.
//!
//! ## Even and odd powers of two
//!
//! - `N = 2^(2h)`: the buffer is viewed as a `2^h x 2^h` matrix and transposed directly.
//! - `N = 2^(2h+1)`: the buffer is viewed as a `2^h x 2^(h+1)` matrix. Only square matrices can be
//!   transposed in place, so it is handled as a `2^h x 2^h` matrix of pairs instead. After
//!   transposing, each row holds two original columns with their values interleaved, which
//!   [`deinterleave`] separates and [`interleave`] puts back.
//!
//! The only auxiliary memory is the scratch buffer used by the (de)interleaving, shared by the
//! whole recursion. See [`crate::planner::scratch_len`].
//!
//! # References
//!
//! [1] D. H. Bailey, "FFTs in external or hierarchical memory," The Journal of Supercomputing,
//! vol. 4, pp. 23-35, 1990, doi: 10.1007/BF00162341.
use num_complex::Complex;
use num_traits::{Float, FloatConst};

use crate::algorithms::interleave::{deinterleave, interleave};
use crate::algorithms::transpose::transpose_square;
use crate::error::FftError;
use crate::kernels::common::butterfly_2;
use crate::twiddles::Twiddles;
use crate::utils::log2_exact;

/// In-place FFT of `x`, whose length must be a power of two.
///
/// `scratch` must hold at least [`crate::planner::scratch_len`] elements for the length of `x`.
/// Its contents are overwritten.
pub(crate) fn fft_recursive<T: Float + FloatConst>(
    x: &mut [Complex<T>],
    scratch: &mut [Complex<T>],
    twiddles: Twiddles<'_, T>,
) -> Result<(), FftError> {
    match x.len() {
        1 => Ok(()),
        2 => {
            butterfly_2(x);
            Ok(())
        }
        len => {
            let log_len = log2_exact(len)?;
            if log_len & 1 == 0 {
                fft_even_pow(x, log_len, scratch, twiddles)
            } else {
                fft_odd_pow(x, log_len, scratch, twiddles)
            }
        }
    }
}

/// In-place FFT of length `2^log_len` for an even `log_len`.
fn fft_even_pow<T: Float + FloatConst>(
    x: &mut [Complex<T>],
    log_len: usize,
    scratch: &mut [Complex<T>],
    twiddles: Twiddles<'_, T>,
) -> Result<(), FftError> {
    let len = x.len();
    let n = 1 << (log_len >> 1);

    // Columns become rows. Each one is transformed and twiddled while it is in cache.
    transpose_square(x, n, n, 1)?;
    for (i, row) in x.chunks_exact_mut(n).enumerate() {
        fft_recursive(row, scratch, twiddles)?;
        twiddles.apply(row, i, len);
    }
    transpose_square(x, n, n, 1)?;

    for row in x.chunks_exact_mut(n) {
        fft_recursive(row, scratch, twiddles)?;
    }

    transpose_square(x, n, n, 1)
}

/// In-place FFT of length `2^log_len` for an odd `log_len`.
fn fft_odd_pow<T: Float + FloatConst>(
    x: &mut [Complex<T>],
    log_len: usize,
    scratch: &mut [Complex<T>],
    twiddles: Twiddles<'_, T>,
) -> Result<(), FftError> {
    let len = x.len();
    let col_len = 1 << (log_len >> 1);
    let row_len = col_len << 1;

    // `[(1 2) (3 4)]    [(1 2) (5 6)]
    //  [(5 6) (7 8)] -> [(3 4) (7 8)]`: every row now holds two columns, interleaved.
    transpose_square(x, col_len, col_len, 2)?;
    for (i, row_pair) in x.chunks_exact_mut(row_len).enumerate() {
        deinterleave(row_pair, scratch)?;
        let (row0, row1) = row_pair.split_at_mut(col_len);

        fft_recursive(row0, scratch, twiddles)?;
        twiddles.apply(row0, 2 * i, len);
        fft_recursive(row1, scratch, twiddles)?;
        twiddles.apply(row1, 2 * i + 1, len);

        interleave(row_pair, scratch)?;
    }
    transpose_square(x, col_len, col_len, 2)?;

    for row in x.chunks_exact_mut(row_len) {
        fft_recursive(row, scratch, twiddles)?;
    }

    transpose_square(x, col_len, col_len, 2)?;
    for row_pair in x.chunks_exact_mut(row_len) {
        deinterleave(row_pair, scratch)?;
    }
    Ok(())
}
