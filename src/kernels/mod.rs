//! FFT Kernels
//!
//! The innermost loops of the recursive FFT. The twiddle kernels are compiled for several
//! instruction sets, and the fastest one is selected at runtime based on available CPU features.
//!
//! ## Organization
//!
//! - `common`: the length-2 butterfly and the per-row twiddle multiplications

pub mod common;
