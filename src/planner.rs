//! The planner module provides a convenient interface for running many transforms of the same
//! length. The planner validates the length once, sizes the shared scratch buffer, and
//! pre-computes the roots of unity every level of the recursion reads its twiddle factors from.
use num_complex::Complex;
use num_traits::{Float, FloatConst};
use tracing::{debug, instrument};

use crate::error::FftError;
use crate::twiddles::RootsOfUnity;
use crate::utils::log2_exact;

/// Length of the scratch buffer needed to transform `2^log_n` elements.
///
/// Levels whose length is an even power of two do not (de)interleave. The first level with an
/// odd power `k` does, on rows of length `2^((k+1)/2)`, and every level below it needs less.
/// Halving an even `log_n` is the same as taking an exact square root of the length, which is
/// how the recursion descends.
pub fn scratch_len(log_n: usize) -> usize {
    if log_n == 0 {
        return 0;
    }
    let mut log_n = log_n;
    while log_n & 1 == 0 {
        log_n >>= 1;
    }
    // Lengths 2 and 4 end up here with `log_n == 1`: no scratch is needed.
    let log_scratch = (log_n - 1) >> 1;
    if log_scratch == 0 {
        0
    } else {
        1 << log_scratch
    }
}

/// The planner is responsible for pre-computing everything a transform of one length needs:
/// the scratch size and the table of twiddle factors.
#[derive(Debug, Clone)]
pub struct Planner<T> {
    /// `log_2` of the transform length
    pub log_n: usize,
    /// Length of the scratch buffer the recursion needs
    pub scratch_len: usize,
    roots: RootsOfUnity<T>,
}

/// [`Planner`] for double-precision transforms
pub type Planner64 = Planner<f64>;
/// [`Planner`] for single-precision transforms
pub type Planner32 = Planner<f32>;

impl<T: Float + FloatConst> Planner<T> {
    /// Create a `Planner` for an FFT of size `num_points`.
    ///
    /// # Errors
    ///
    /// Returns [`FftError::InvalidLength`] if `num_points` is __not__ a power of 2.
    #[instrument(level = "debug", skip_all, fields(num_points = num_points))]
    pub fn new(num_points: usize) -> Result<Self, FftError> {
        let log_n = log2_exact(num_points)?;
        let scratch_len = scratch_len(log_n);
        let roots = RootsOfUnity::new(num_points);
        debug!(log_n, scratch_len, "built twiddle table");

        Ok(Self {
            log_n,
            scratch_len,
            roots,
        })
    }

    /// Length of the transforms this planner was built for.
    pub fn len(&self) -> usize {
        1 << self.log_n
    }

    /// A planner always covers at least one point.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Allocates a zeroed scratch buffer of [`Self::scratch_len`] elements.
    pub fn alloc_scratch(&self) -> Vec<Complex<T>> {
        vec![Complex::new(T::zero(), T::zero()); self.scratch_len]
    }

    /// The twiddle table shared by every level of the recursion.
    pub fn roots(&self) -> &RootsOfUnity<T> {
        &self.roots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scratch_lengths() {
        // (log_n, scratch): odd powers need 2^((k-1)/2), even powers defer to their square root
        let expected = [
            (0, 0),
            (1, 0),
            (2, 0),
            (3, 2),
            (4, 0),
            (5, 4),
            (6, 2),
            (7, 8),
            (8, 0),
            (9, 16),
            (10, 4),
            (11, 32),
            (12, 2),
            (20, 4),
            (24, 2),
        ];
        for (log_n, scratch) in expected {
            assert_eq!(scratch_len(log_n), scratch, "log_n = {log_n}");
        }
    }

    #[test]
    fn planner_for_power_of_two() {
        let planner = Planner64::new(1 << 7).unwrap();
        assert_eq!(planner.log_n, 7);
        assert_eq!(planner.len(), 128);
        assert!(!planner.is_empty());
        assert_eq!(planner.scratch_len, 8);
        assert_eq!(planner.alloc_scratch().len(), 8);
        assert_eq!(planner.roots().len(), 128);
    }

    #[test]
    fn no_scratch_for_small_lengths() {
        for num_points in [1, 2, 4] {
            let planner = Planner32::new(num_points).unwrap();
            assert!(planner.alloc_scratch().is_empty());
        }
    }

    #[test]
    fn planner_rejects_other_lengths() {
        for num_points in [0, 3, 5, 100] {
            assert_eq!(
                Planner64::new(num_points).unwrap_err(),
                FftError::InvalidLength { len: num_points }
            );
        }
    }
}
