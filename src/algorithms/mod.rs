//! FFT Algorithm Implementations
//!
//! This module contains the recursive FFT and the two in-place permutations it is built from.
//!
//! ## Building blocks
//!
//! - **transpose**: cache-oblivious transpose of a square matrix whose cells may span several
//!   elements.
//!
//! - **interleave**: conversion between two concatenated halves and their pairwise interleaving,
//!   using a borrowed scratch buffer.
//!
//! - **recursive**: the FFT itself, which alternates transposes with sub-transforms on
//!   contiguous rows so that every level works on cache-friendly blocks.

pub mod interleave;
pub(crate) mod recursive;
pub mod transpose;
