//! # Circular Cross-Correlation
//!
//! Correlates a reference sequence against a delayed copy, once through the
//! FFT and once by the direct circular sum, and locates the peak shift.
//!
//! Run with: `cargo run --example cross_correlation`

use pietras_stats::{compute_crosscor, CorrelationMode};

fn main() {
    println!("=== Circular Cross-Correlation ===\n");

    let n = 32;
    let fref: Vec<f64> = (0..n)
        .map(|i| {
            let t = i as f64 - 8.0;
            (-t * t / 4.0).exp()
        })
        .collect();
    let delay = 5;
    let ftest: Vec<f64> = (0..n).map(|i| fref[(i + n - delay) % n]).collect();

    for mode in [CorrelationMode::Spectral, CorrelationMode::Physical] {
        println!("--- {:?} ---\n", mode);

        let cc = compute_crosscor(&fref, &ftest, mode).expect("equal-length input");

        println!("length     = {}", cc.len());
        println!("peak shift = {:?}", cc.peak_shift());
        println!("real part  = {:.3?}", &cc.real_part()[..8]);
        println!();
    }
}
