//! In-place, cache-oblivious FFT for power-of-two lengths.
//!
//! Instead of a radix-2 butterfly network, a transform of length `N` is reduced to transforms of
//! length about `sqrt(N)` on contiguous rows of a matrix view of the input, with in-place
//! transposes in between. No cache size is ever configured: the recursion reaches blocks that
//! fit into each cache level on its own.
//!
//! The only allocations are the output buffer and one scratch buffer of at most `sqrt(N/2)`
//! elements shared by the whole recursion (see [`scratch_len`]).
//!
//! ```
//! use cofft::fft;
//! use num_complex::Complex;
//!
//! let input = [Complex::new(1.0, 0.0), Complex::new(1.0, 0.0)];
//! let output = fft(&input).unwrap();
//! assert_eq!(output, [Complex::new(2.0, 0.0), Complex::new(0.0, 0.0)]);
//! ```
use bytemuck::Pod;
use num_complex::Complex;
use num_traits::{Float, FloatConst};
use tracing::{debug, instrument};

use crate::algorithms::recursive::fft_recursive;
use crate::options::{Options, TwiddleStrategy};
use crate::planner::Planner;
use crate::twiddles::Twiddles;
use crate::utils::{combine_re_im, log2_exact, separate_re_im};

pub use crate::algorithms::interleave::{deinterleave, interleave};
pub use crate::algorithms::transpose::{transpose_square, SquareLayout};
pub use crate::error::FftError;
pub use crate::planner::{scratch_len, Planner32, Planner64};
pub use crate::twiddles::RootsOfUnity;

pub mod algorithms;
pub mod error;
mod kernels;
pub mod options;
pub mod planner;
mod twiddles;
pub mod utils;

/// Returns the FFT of `input`, leaving `input` untouched.
///
/// Computes `X[k] = Σ x[n] · exp(-2πi · k · n / N)`. Twiddle factors are evaluated when they are
/// needed, so the output and the scratch buffer are the only allocations. A table of roots of
/// unity is only built through [`fft_with_opts`] with [`TwiddleStrategy::Precomputed`] or a
/// [`Planner`].
///
/// # Errors
///
/// Returns [`FftError::InvalidLength`] if `input.len()` is not a power of two.
#[instrument(level = "debug", skip_all, fields(len = input.len()))]
pub fn fft<T: Float + FloatConst>(input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
    fft_direct(input)
}

/// Returns the FFT of `input` computed with the given [`Options`].
///
/// # Errors
///
/// Returns [`FftError::InvalidLength`] if `input.len()` is not a power of two.
#[instrument(level = "debug", skip_all, fields(len = input.len(), twiddles = ?opts.twiddles))]
pub fn fft_with_opts<T: Float + FloatConst>(
    input: &[Complex<T>],
    opts: &Options,
) -> Result<Vec<Complex<T>>, FftError> {
    match opts.twiddles {
        TwiddleStrategy::Direct => fft_direct(input),
        TwiddleStrategy::Precomputed => {
            let planner = Planner::new(input.len())?;
            fft_with_plan(input, &planner)
        }
    }
}

fn fft_direct<T: Float + FloatConst>(input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
    let log_n = log2_exact(input.len())?;
    let mut scratch = vec![Complex::new(T::zero(), T::zero()); scratch_len(log_n)];
    debug!(scratch_len = scratch.len(), "allocated scratch");

    let mut output = input.to_vec();
    fft_recursive(&mut output, &mut scratch, Twiddles::Direct)?;
    Ok(output)
}

/// Returns the FFT of `input` using the twiddle table of a pre-built [`Planner`].
///
/// # Errors
///
/// Returns [`FftError::InvalidLength`] if `input.len()` differs from [`Planner::len`].
pub fn fft_with_plan<T: Float + FloatConst>(
    input: &[Complex<T>],
    planner: &Planner<T>,
) -> Result<Vec<Complex<T>>, FftError> {
    check_plan(input.len(), planner)?;
    let mut scratch = planner.alloc_scratch();
    debug!(scratch_len = scratch.len(), "allocated scratch");

    let mut output = input.to_vec();
    fft_recursive(&mut output, &mut scratch, Twiddles::Table(planner.roots()))?;
    Ok(output)
}

/// Replaces `buf` with its FFT, using caller-owned `scratch`.
///
/// `scratch` needs at least [`scratch_len`]`(log2(buf.len()))` elements and its contents are
/// overwritten. Independent transforms may run concurrently as long as each has its own scratch.
///
/// # Errors
///
/// Returns [`FftError::InvalidLength`] if `buf.len()` is not a power of two and
/// [`FftError::ScratchTooSmall`] if `scratch` is too short. `buf` is untouched in both cases.
pub fn fft_in_place<T: Float + FloatConst>(
    buf: &mut [Complex<T>],
    scratch: &mut [Complex<T>],
) -> Result<(), FftError> {
    let log_n = log2_exact(buf.len())?;
    check_scratch(scratch.len(), scratch_len(log_n))?;
    fft_recursive(buf, scratch, Twiddles::Direct)
}

/// Replaces `buf` with its FFT, using caller-owned `scratch` and the twiddle table of `planner`.
///
/// # Errors
///
/// Returns [`FftError::InvalidLength`] if `buf.len()` differs from [`Planner::len`] and
/// [`FftError::ScratchTooSmall`] if `scratch` is shorter than [`Planner::scratch_len`]. `buf` is
/// untouched in both cases.
pub fn fft_in_place_with_plan<T: Float + FloatConst>(
    buf: &mut [Complex<T>],
    scratch: &mut [Complex<T>],
    planner: &Planner<T>,
) -> Result<(), FftError> {
    check_plan(buf.len(), planner)?;
    check_scratch(scratch.len(), planner.scratch_len)?;
    fft_recursive(buf, scratch, Twiddles::Table(planner.roots()))
}

/// Replaces the signal held in separate `reals` and `imags` buffers with its FFT.
///
/// # Errors
///
/// Returns [`FftError::InvalidLength`] if the length is not a power of two. Both buffers are
/// untouched in that case.
///
/// # Panics
///
/// Panics if `reals.len() != imags.len()`
pub fn fft_re_im<T>(reals: &mut [T], imags: &mut [T]) -> Result<(), FftError>
where
    T: Float + FloatConst + Pod + Default,
{
    assert_eq!(
        reals.len(),
        imags.len(),
        "Real and imaginary slices must be of equal length"
    );

    let output = fft(&combine_re_im(reals, imags))?;
    let (out_re, out_im) = separate_re_im(&output);
    reals.copy_from_slice(&out_re);
    imags.copy_from_slice(&out_im);
    Ok(())
}

#[inline]
fn check_plan<T>(len: usize, planner: &Planner<T>) -> Result<(), FftError> {
    if len == 1 << planner.log_n {
        Ok(())
    } else {
        Err(FftError::InvalidLength { len })
    }
}

#[inline]
fn check_scratch(actual: usize, required: usize) -> Result<(), FftError> {
    if actual < required {
        Err(FftError::ScratchTooSmall { required, actual })
    } else {
        Ok(())
    }
}
