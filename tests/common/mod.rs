//! Common test utilities and data generators.

#![allow(dead_code)]

/// Simple deterministic "random" in [-1, 1) for reproducibility.
fn next_rand(state: &mut u64) -> f64 {
    *state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
    ((*state >> 33) as f64) / (u32::MAX as f64) * 2.0 - 1.0
}

/// Generate linear data: y = slope * x + intercept + noise, x = 0..n.
pub fn generate_linear_data(
    n_samples: usize,
    slope: f64,
    intercept: f64,
    noise_std: f64,
    seed: u64,
) -> (Vec<f64>, Vec<f64>) {
    let mut rng_state = seed;
    let x: Vec<f64> = (0..n_samples).map(|i| i as f64).collect();
    let y = x
        .iter()
        .map(|&xi| slope * xi + intercept + noise_std * next_rand(&mut rng_state))
        .collect();
    (x, y)
}

/// Generate a noisy signal of length n.
pub fn generate_signal(n: usize, seed: u64) -> Vec<f64> {
    let mut rng_state = seed;
    (0..n)
        .map(|i| (i as f64 * 0.3).sin() + 0.5 * next_rand(&mut rng_state))
        .collect()
}

/// Cyclically delay a sequence by `shift`: out[j] = values[(j - shift) mod n].
pub fn delay(values: &[f64], shift: usize) -> Vec<f64> {
    let n = values.len();
    (0..n).map(|j| values[(j + n - shift % n) % n]).collect()
}

/// Deterministic permutation of 0..n (reversed interleave).
pub fn shuffled_indices(n: usize) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..n).rev().step_by(2).collect();
    idx.extend((0..n).rev().skip(1).step_by(2));
    idx
}
