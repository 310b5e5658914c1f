//! Transforms a random signal and compares the result against RustFFT.
//!
//! Usage: `cargo run --example compare -- [log2 of the length, default 10]`
//! Set `RUST_LOG=debug` to see the spans emitted by the transform.
use std::env;
use std::str::FromStr;

use cofft::fft;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;
use utilities::gen_random_signal;
use utilities::rustfft::num_complex::Complex64;
use utilities::rustfft::FftPlanner;

fn main() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args: Vec<String> = env::args().collect();
    let log_n = match args.get(1) {
        Some(arg) => usize::from_str(arg).expect("log2 of the length must be an integer"),
        None => 10,
    };
    let n = 1 << log_n;

    let mut signal = vec![Complex64::default(); n];
    gen_random_signal(&mut signal);
    println!("input: {signal:?}");

    let mut reference = signal.clone();
    FftPlanner::new()
        .plan_fft_forward(n)
        .process(&mut reference);
    println!("rustfft: {reference:?}");

    let ours = fft(&signal).expect("length is a power of two");
    println!("cofft: {ours:?}");

    let max_err = ours
        .iter()
        .zip(reference.iter())
        .map(|(a, b)| (a - b).norm())
        .fold(0.0, f64::max);
    let close = max_err <= 1e-8 * n as f64;
    info!(n, max_err, close, "compared against rustfft");
    println!("{close}");
}
