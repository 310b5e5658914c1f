/// Options to tune the transform depending on the hardware and input size.
///
/// Calling FFT routines without specifying options uses the defaults, which evaluate twiddle
/// factors on demand and allocate nothing beyond the scratch buffer.
///
/// You only need to tune these options if you are trying to squeeze maximum performance
/// out of a known hardware platform that you can benchmark at varying input sizes.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub twiddles: TwiddleStrategy,
}

/// How twiddle factors are obtained.
/// Both produce the same values; they differ in memory use and speed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum TwiddleStrategy {
    #[default]
    /// Evaluate every factor with `sin_cos` when it is needed.
    ///
    /// Needs no memory beyond the scratch buffer. This is what [`crate::fft`] uses.
    Direct,
    /// Build a table of the `N` roots of unity once and look factors up from it.
    ///
    /// Costs `N` extra complex numbers, so it is never picked unless asked for. Pays off when the
    /// table is reused across several transforms through a [`crate::planner::Planner`].
    Precomputed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_direct_twiddles() {
        assert_eq!(Options::default().twiddles, TwiddleStrategy::Direct);
    }
}
