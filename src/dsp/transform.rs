//! Spectral transform as an injected capability
//!
//! The pipeline treats the FFT as a pure function: fixed-size real input to
//! a fixed-size magnitude sequence. Any correct transform can be swapped in
//! behind the trait; the default implementation uses rustfft.

use num_complex::Complex;
use rustfft::{Fft, FftPlanner};
use std::sync::Arc;

/// One-operation transform contract: N time-domain samples to N magnitude bins
///
/// The output covers the full transform size, conjugate mirror included;
/// the pipeline discards the redundant half when emitting intensities.
pub trait SpectralTransform: Send + Sync {
    /// Transform size (input and output length)
    fn size(&self) -> usize;

    /// Magnitude sequence for one frame
    ///
    /// Frames longer than the transform size are truncated, shorter ones
    /// zero-padded.
    fn transform(&self, frame: &[f32]) -> Vec<f32>;
}

/// rustfft-backed transform
pub struct FftTransform {
    fft: Arc<dyn Fft<f32>>,
    size: usize,
}

impl FftTransform {
    pub fn new(size: usize) -> Self {
        let mut planner = FftPlanner::new();
        Self {
            fft: planner.plan_fft_forward(size),
            size,
        }
    }
}

impl SpectralTransform for FftTransform {
    fn size(&self) -> usize {
        self.size
    }

    fn transform(&self, frame: &[f32]) -> Vec<f32> {
        let mut buffer: Vec<Complex<f32>> = frame
            .iter()
            .take(self.size)
            .map(|&s| Complex::new(s, 0.0))
            .collect();

        buffer.resize(self.size, Complex::new(0.0, 0.0));

        self.fft.process(&mut buffer);

        buffer.iter().map(|c| c.norm()).collect()
    }
}
