//! In-place conversion between the "split halves" and "interleaved pairs" layouts.
//!
//! Both permutations borrow a caller-provided scratch buffer of at least half the sequence
//! length instead of allocating.
use crate::error::FftError;

/// Checks that `x` splits into two halves and that `scratch` can hold one of them.
/// Returns the half-length.
#[inline]
fn check_halves<T>(x: &[T], scratch: &[T]) -> Result<usize, FftError> {
    let len = x.len();
    if len % 2 != 0 {
        return Err(FftError::OddLength { len });
    }
    let half = len / 2;
    if scratch.len() < half {
        return Err(FftError::ScratchTooSmall {
            required: half,
            actual: scratch.len(),
        });
    }
    Ok(half)
}

/// Rewrites `[a0, .., a(h-1), b0, .., b(h-1)]` as `[a0, b0, a1, b1, .., a(h-1), b(h-1)]`.
///
/// For example, `[1, 2, 3, 4, 5, 6, 7, 8]` becomes `[1, 5, 2, 6, 3, 7, 4, 8]`.
///
/// # Errors
///
/// Returns [`FftError::OddLength`] if `x.len()` is odd and [`FftError::ScratchTooSmall`] if
/// `scratch` is shorter than `x.len() / 2`. `x` is untouched in both cases.
pub fn interleave<T: Copy>(x: &mut [T], scratch: &mut [T]) -> Result<(), FftError> {
    let half = check_halves(x, scratch)?;
    let scratch = &mut scratch[..half];

    scratch.copy_from_slice(&x[..half]);
    // Slot `2i + 1` never passes `half + i`, so the second half is read before it is overwritten.
    for (i, &a) in scratch.iter().enumerate() {
        x[2 * i] = a;
        x[2 * i + 1] = x[half + i];
    }
    Ok(())
}

/// Inverse of [`interleave`]: rewrites `[a0, b0, a1, b1, ..]` as `[a0, a1, .., b0, b1, ..]`.
///
/// For example, `[1, 2, 3, 4, 5, 6, 7, 8]` becomes `[1, 3, 5, 7, 2, 4, 6, 8]`.
///
/// # Errors
///
/// Same as [`interleave`].
pub fn deinterleave<T: Copy>(x: &mut [T], scratch: &mut [T]) -> Result<(), FftError> {
    let half = check_halves(x, scratch)?;
    let scratch = &mut scratch[..half];

    for (i, odd) in scratch.iter_mut().enumerate() {
        *odd = x[2 * i + 1];
        x[i] = x[2 * i];
    }
    x[half..].copy_from_slice(scratch);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interleave_eight() {
        let mut x = [1, 2, 3, 4, 5, 6, 7, 8];
        let mut scratch = [0; 4];
        interleave(&mut x, &mut scratch).unwrap();
        assert_eq!(x, [1, 5, 2, 6, 3, 7, 4, 8]);

        deinterleave(&mut x, &mut scratch).unwrap();
        assert_eq!(x, [1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn deinterleave_eight() {
        let mut x = [1, 2, 3, 4, 5, 6, 7, 8];
        let mut scratch = [0; 4];
        deinterleave(&mut x, &mut scratch).unwrap();
        assert_eq!(x, [1, 3, 5, 7, 2, 4, 6, 8]);

        interleave(&mut x, &mut scratch).unwrap();
        assert_eq!(x, [1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn inverse_of_each_other() {
        for len in [0, 2, 4, 6, 10, 64, 130] {
            let original: Vec<usize> = (0..len).collect();
            // longer than needed on purpose
            let mut scratch = vec![0; len / 2 + 3];

            let mut x = original.clone();
            interleave(&mut x, &mut scratch).unwrap();
            let expected: Vec<usize> = (0..len / 2).flat_map(|i| [i, len / 2 + i]).collect();
            assert_eq!(x, expected);
            deinterleave(&mut x, &mut scratch).unwrap();
            assert_eq!(x, original);
        }
    }

    #[test]
    fn rejects_odd_length() {
        let mut x = [1, 2, 3];
        let mut scratch = [0; 4];
        assert_eq!(
            interleave(&mut x, &mut scratch),
            Err(FftError::OddLength { len: 3 })
        );
        assert_eq!(
            deinterleave(&mut x, &mut scratch),
            Err(FftError::OddLength { len: 3 })
        );
        assert_eq!(x, [1, 2, 3]);
    }

    #[test]
    fn rejects_short_scratch() {
        let mut x = [1, 2, 3, 4, 5, 6, 7, 8];
        let mut scratch = [0; 3];
        let expected = Err(FftError::ScratchTooSmall {
            required: 4,
            actual: 3,
        });
        assert_eq!(interleave(&mut x, &mut scratch), expected);
        assert_eq!(deinterleave(&mut x, &mut scratch), expected);
        assert_eq!(x, [1, 2, 3, 4, 5, 6, 7, 8]);
    }
}
