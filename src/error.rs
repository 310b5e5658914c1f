//! Error type shared by the transform and its building blocks.
use thiserror::Error;

/// Errors reported by the FFT and the permutation primitives it is built from.
///
/// Only [`FftError::InvalidLength`] can be triggered through the copy-in/copy-out entry points
/// such as [`crate::fft`]. The remaining variants describe broken preconditions of the
/// primitives; when they surface from a transform, the computation is aborted and no partial
/// result is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftError {
    /// The length is not a power of two.
    #[error("length {len} is not a power of two")]
    InvalidLength { len: usize },

    /// A buffer could not be viewed as a square matrix of equal power-of-two dimensions.
    #[error(
        "cannot view a buffer of length {len} as a {rows}x{cols} matrix of {group}-element cells"
    )]
    ShapeMismatch {
        rows: usize,
        cols: usize,
        group: usize,
        len: usize,
    },

    /// Interleaving needs two halves of equal length.
    #[error("cannot (de)interleave a sequence of odd length {len}")]
    OddLength { len: usize },

    /// The scratch buffer cannot hold the half-length being permuted.
    #[error("scratch buffer holds {actual} elements but {required} are needed")]
    ScratchTooSmall { required: usize, actual: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            FftError::InvalidLength { len: 3 }.to_string(),
            "length 3 is not a power of two"
        );
        assert_eq!(
            FftError::ScratchTooSmall {
                required: 4,
                actual: 2
            }
            .to_string(),
            "scratch buffer holds 2 elements but 4 are needed"
        );
    }
}
