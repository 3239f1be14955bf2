//! Per-frame log-magnitude spectra

use anyhow::{ensure, Result};
use rayon::prelude::*;

use super::transform::SpectralTransform;

/// Map one magnitude to log scale
///
/// A zero magnitude maps to 0 rather than ln(0) = -inf, keeping the later
/// median and min/max passes finite. This substitution is part of the
/// pipeline contract, not an approximation.
pub fn log_magnitude(v: f32) -> f32 {
    if v == 0.0 {
        0.0
    } else {
        v.abs().ln()
    }
}

/// Compute the log-magnitude spectrum of every frame
///
/// Frames are independent, so the transform runs in parallel. Every row of
/// the returned grid has the same length; a transform that varies its output
/// length across frames violates its contract and fails the run.
pub fn compute_spectra(
    frames: &[Vec<f32>],
    transform: &dyn SpectralTransform,
) -> Result<Vec<Vec<f32>>> {
    let spectra: Vec<Vec<f32>> = frames
        .par_iter()
        .map(|frame| {
            transform
                .transform(frame)
                .into_iter()
                .map(log_magnitude)
                .collect()
        })
        .collect();

    for row in &spectra {
        ensure!(
            row.len() == transform.size(),
            "Transform output length {} differs from transform size {}",
            row.len(),
            transform.size()
        );
    }

    Ok(spectra)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::transform::FftTransform;

    #[test]
    fn test_log_magnitude_zero_maps_to_zero() {
        assert_eq!(log_magnitude(0.0), 0.0);
        assert_eq!(log_magnitude(-0.0), 0.0);
        assert!(log_magnitude(0.0).is_finite());
    }

    #[test]
    fn test_log_magnitude_uses_absolute_value() {
        assert!((log_magnitude(1.0)).abs() < 1e-9);
        assert!((log_magnitude(std::f32::consts::E) - 1.0).abs() < 1e-6);
        assert_eq!(log_magnitude(-2.0), log_magnitude(2.0));
    }

    #[test]
    fn test_silent_frames_give_all_zero_spectra() {
        let frames = vec![vec![0.0f32; 800]; 4];
        let fft = FftTransform::new(512);
        let spectra = compute_spectra(&frames, &fft).unwrap();

        assert_eq!(spectra.len(), 4);
        for row in &spectra {
            assert_eq!(row.len(), 512);
            assert!(row.iter().all(|&v| v == 0.0), "silence must map to 0, not -inf");
        }
    }

    #[test]
    fn test_grid_is_rectangular() {
        let frames: Vec<Vec<f32>> = (0..7)
            .map(|i| (0..300).map(|j| ((i * j) as f32 * 0.01).sin()).collect())
            .collect();
        let fft = FftTransform::new(128);
        let spectra = compute_spectra(&frames, &fft).unwrap();

        assert!(spectra.iter().all(|row| row.len() == 128));
    }
}
