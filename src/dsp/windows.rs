//! Window function implementation

use std::f32::consts::PI;

/// Generate Hamming window coefficients
///
/// Coefficient at index j is `0.54 - 0.46 * cos(2*pi*j / (size - 1))`.
/// The window is symmetric: coefficient j equals coefficient size-1-j.
/// Requires size >= 2 (the denominator is size - 1); enforced by config
/// validation upstream.
pub fn hamming_window(size: usize) -> Vec<f32> {
    debug_assert!(size >= 2, "Hamming window requires at least 2 samples");
    let denom = (size - 1) as f32;
    (0..size)
        .map(|j| 0.54 - 0.46 * (2.0 * PI * j as f32 / denom).cos())
        .collect()
}
