// src/pipeline.rs
//
// Full waveform-to-intensity-grid run

use anyhow::Result;
use log::debug;

use crate::config::SpectrogramConfig;
use crate::dsp::{
    compute_spectra, frame_geometry, median_filter, windowed_frames, FftTransform,
    IntensityRange,
};

/// Intensity emitted for every cell when the value range is flat
///
/// A silent or constant waveform has no dynamic range to scale across;
/// mid-scale renders it as a uniform field instead of failing the run.
const FLAT_RANGE_INTENSITY: u8 = 128;

/// Result of one spectrogram run
///
/// `intensities[frame][bin]` holds the display intensity in [0, 255] for
/// the retained upper-Nyquist half of the smoothed spectrum; bin 0 is the
/// lowest retained frequency.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrogram {
    pub intensities: Vec<Vec<u8>>,
    /// Zero-seeded global range the intensities were scaled across
    pub range: IntensityRange,
    /// Retained bins per frame
    pub num_bins: usize,
    /// Sample rate of the analyzed waveform, for axis labeling
    pub sample_rate: u32,
}

impl Spectrogram {
    pub fn num_frames(&self) -> usize {
        self.intensities.len()
    }

    /// True when there is nothing to draw (waveform too short, or the
    /// smoothed grid collapsed below 3x3)
    pub fn is_empty(&self) -> bool {
        self.intensities.is_empty() || self.num_bins == 0
    }
}

/// Run the full pipeline over one channel of a decoded waveform
///
/// Stages: frame + Hamming window, FFT per frame, log-magnitude
/// compression, 3x3 median filter, zero-seeded min/max normalization, and
/// upper-half intensity emission. Stateless and deterministic: the same
/// input and configuration always produce the same grid.
///
/// A waveform shorter than one frame yields an empty (not erroneous)
/// spectrogram. Invalid configuration fails before any stage runs.
pub fn compute_spectrogram(
    samples: &[f32],
    sample_rate: u32,
    config: &SpectrogramConfig,
) -> Result<Spectrogram> {
    config.validate()?;

    let geometry = frame_geometry(
        samples.len(),
        sample_rate,
        config.frame_length_ms,
        config.frame_step_ms,
    )?;
    debug!(
        "framing: {} frames of {} samples, step {}, padded to {}",
        geometry.num_frames, geometry.frame_len, geometry.step, geometry.padded_len
    );

    let frames = windowed_frames(samples, &geometry);

    let transform = FftTransform::new(config.transform_size);
    let spectra = compute_spectra(&frames, &transform)?;

    let smoothed = median_filter(&spectra);
    debug!(
        "smoothed grid: {} x {}",
        smoothed.len(),
        smoothed.first().map_or(0, |r| r.len())
    );

    let range = IntensityRange::from_grid(&smoothed);
    debug!("value range: [{}, {}]", range.min, range.max);

    // Keep only the upper half of each row: for real input the bins above
    // it mirror the spectrum below the Nyquist frequency.
    let intensities: Vec<Vec<u8>> = smoothed
        .iter()
        .map(|row| {
            let half = row.len() / 2;
            row[half..]
                .iter()
                .map(|&v| {
                    if range.is_flat() {
                        FLAT_RANGE_INTENSITY
                    } else {
                        (255.0 * range.scale(v)).round() as u8
                    }
                })
                .collect()
        })
        .collect();

    let num_bins = intensities.first().map_or(0, |r| r.len());

    Ok(Spectrogram {
        intensities,
        range,
        num_bins,
        sample_rate,
    })
}
