// src/config.rs
//
// Pipeline configuration with documented defaults

use anyhow::{bail, Result};

/// Spectrogram pipeline configuration
///
/// Frame timing is expressed in sample-rate-relative units: a frame covers
/// `frame_length_ms * sample_rate` samples and consecutive frames start
/// `frame_step_ms * sample_rate` samples apart (both truncated to whole
/// samples).
#[derive(Debug, Clone)]
pub struct SpectrogramConfig {
    /// FFT transform size in samples; frames are truncated or zero-padded to this
    pub transform_size: usize,
    /// Frame length factor, default 0.1 (100 ms per kHz of sample rate)
    pub frame_length_ms: f32,
    /// Frame step (hop) factor, default 0.005
    pub frame_step_ms: f32,
    /// Color scheme name, passed through to the renderer
    pub color_scheme: String,
    /// Target image width in pixels
    pub width: u32,
    /// Target image height in pixels
    pub height: u32,
}

impl Default for SpectrogramConfig {
    fn default() -> Self {
        Self {
            transform_size: 512,
            frame_length_ms: 0.1,
            frame_step_ms: 0.005,
            color_scheme: "viridis".to_string(),
            width: 1200,
            height: 400,
        }
    }
}

impl SpectrogramConfig {
    /// Validate sample-rate-independent settings once at entry
    ///
    /// Frame geometry that depends on the sample rate (frame length in
    /// samples must be >= 2, step >= 1) is checked when the geometry is
    /// derived, see `dsp::framer`.
    pub fn validate(&self) -> Result<()> {
        if self.transform_size < 2 {
            bail!("Transform size must be at least 2, got {}", self.transform_size);
        }
        if self.frame_length_ms <= 0.0 {
            bail!("Frame length must be positive, got {}", self.frame_length_ms);
        }
        if self.frame_step_ms <= 0.0 {
            bail!("Frame step must be positive, got {}", self.frame_step_ms);
        }
        if self.width == 0 || self.height == 0 {
            bail!("Target surface must be at least 1x1 pixels, got {}x{}", self.width, self.height);
        }
        Ok(())
    }
}
