use num_complex::Complex;
use num_traits::{Float, FloatConst};

use crate::kernels::common::{twiddle_row_direct, twiddle_row_table};

/// Computes `exp(-2πi · exponent / len)` directly, without any recurrence.
///
/// The exponent is reduced modulo `len` first, so the angle always lies in `(-2π, 0]`.
#[inline]
pub(crate) fn root_of_unity<T: Float + FloatConst>(exponent: usize, len: usize) -> Complex<T> {
    let exponent = exponent % len;
    let ratio = T::from(exponent).unwrap() / T::from(len).unwrap();
    let (sin, cos) = (-T::TAU() * ratio).sin_cos();
    Complex::new(cos, sin)
}

/// All `n` powers of the primitive `n`-th root of unity `exp(-2πi / n)`.
///
/// A transform of length `n` only ever needs twiddles of the form `exp(-2πi · e / m)` where `m`
/// divides `n`, and every one of them is an entry of this table.
#[derive(Debug, Clone)]
pub struct RootsOfUnity<T> {
    roots: Vec<Complex<T>>,
}

impl<T: Float + FloatConst> RootsOfUnity<T> {
    /// Builds the table for a transform of length `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is not a power of two.
    pub fn new(n: usize) -> Self {
        assert!(n.is_power_of_two());
        let roots = (0..n).map(|k| root_of_unity(k, n)).collect();
        Self { roots }
    }

    /// Number of entries, which is the length of the transform the table was built for.
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// The table is never empty, since every table covers at least a length-1 transform.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Returns `exp(-2πi · exponent / len)` for a `len` that divides [`Self::len`].
    #[inline]
    pub fn get(&self, exponent: usize, len: usize) -> Complex<T> {
        self.roots[(exponent % len) * (self.roots.len() / len)]
    }

    pub(crate) fn as_slice(&self) -> &[Complex<T>] {
        &self.roots
    }
}

/// Where the recursion takes its twiddle factors from.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Twiddles<'a, T> {
    /// Evaluate each factor with `sin_cos` when it is needed
    Direct,
    /// Look each factor up in a table built for the top-level length
    Table(&'a RootsOfUnity<T>),
}

impl<T: Float + FloatConst> Twiddles<'_, T> {
    /// Multiplies `row[j]` by `exp(-2πi · step · j / len)` for every `j`.
    #[inline]
    pub(crate) fn apply(&self, row: &mut [Complex<T>], step: usize, len: usize) {
        match self {
            Twiddles::Direct => twiddle_row_direct(row, step, len),
            Twiddles::Table(table) => twiddle_row_table(row, step, len, table.as_slice()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_1_SQRT_2;

    use utilities::assert_float_closeness;

    use super::*;

    #[test]
    fn roots_8() {
        let expected = [
            (1.0, 0.0),
            (FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
            (0.0, -1.0),
            (-FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
            (-1.0, 0.0),
            (-FRAC_1_SQRT_2, FRAC_1_SQRT_2),
            (0.0, 1.0),
            (FRAC_1_SQRT_2, FRAC_1_SQRT_2),
        ];
        for (k, (re, im)) in expected.into_iter().enumerate() {
            let w: Complex<f64> = root_of_unity(k, 8);
            assert_float_closeness(w.re, re, 1e-15);
            assert_float_closeness(w.im, im, 1e-15);

            // exponents wrap around
            let w: Complex<f64> = root_of_unity(k + 3 * 8, 8);
            assert_float_closeness(w.re, re, 1e-15);
            assert_float_closeness(w.im, im, 1e-15);
        }
    }

    #[test]
    fn table_serves_every_divisor() {
        let table = RootsOfUnity::<f64>::new(1 << 10);
        assert_eq!(table.len(), 1 << 10);
        assert!(!table.is_empty());

        for log_len in 0..=10 {
            let len = 1 << log_len;
            for exponent in (0..3 * len).step_by(7) {
                let expected: Complex<f64> = root_of_unity(exponent, len);
                let actual = table.get(exponent, len);
                assert_float_closeness(actual.re, expected.re, 1e-15);
                assert_float_closeness(actual.im, expected.im, 1e-15);
            }
        }
    }

    #[test]
    fn direct_and_table_twiddles_agree() {
        let table = RootsOfUnity::<f64>::new(64);
        let row: Vec<Complex<f64>> = (0..8).map(|i| Complex::new(i as f64, 1.0)).collect();

        for step in 0..16 {
            let mut direct = row.clone();
            let mut looked_up = row.clone();
            Twiddles::Direct.apply(&mut direct, step, 16);
            Twiddles::Table(&table).apply(&mut looked_up, step, 16);

            for (a, b) in direct.iter().zip(looked_up.iter()) {
                assert_float_closeness(a.re, b.re, 1e-12);
                assert_float_closeness(a.im, b.im, 1e-12);
            }
        }
    }
}
