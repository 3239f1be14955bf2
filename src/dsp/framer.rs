//! Frame segmentation with overlap and trailing zero padding

use anyhow::{bail, Result};

use super::windows::hamming_window;

/// Derived framing geometry for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameGeometry {
    /// Frame length in samples
    pub frame_len: usize,
    /// Distance between consecutive frame starts, in samples
    pub step: usize,
    /// Number of whole frames covering the padded signal
    pub num_frames: usize,
    /// Signal length after trailing zero padding
    pub padded_len: usize,
}

/// Derive framing geometry from sample-rate-relative frame timing
///
/// Frame length and step are truncated to whole samples. The frame count is
/// `ceil((total - frame_len) / step)` clamped to zero, and the padded length
/// `num_frames * step + frame_len` is always >= total: padding only appends
/// zeros, no input sample is ever dropped.
pub fn frame_geometry(
    total_samples: usize,
    sample_rate: u32,
    frame_length_ms: f32,
    frame_step_ms: f32,
) -> Result<FrameGeometry> {
    let frame_len = (frame_length_ms * sample_rate as f32) as usize;
    let step = (frame_step_ms * sample_rate as f32) as usize;

    if frame_len < 2 {
        bail!(
            "Frame length of {} samples is too short to window (need at least 2)",
            frame_len
        );
    }
    if step == 0 {
        bail!("Frame step rounds to 0 samples at {} Hz", sample_rate);
    }

    // Waveform shorter than (or exactly) one frame produces zero frames.
    let num_frames = if total_samples > frame_len {
        (total_samples - frame_len + step - 1) / step
    } else {
        0
    };

    let padded_len = num_frames * step + frame_len;

    Ok(FrameGeometry {
        frame_len,
        step,
        num_frames,
        padded_len,
    })
}

/// Slice the signal into overlapping Hamming-windowed frames
///
/// Indices past the end of the signal read as zero, which realizes the
/// trailing padding without materializing it.
pub fn windowed_frames(samples: &[f32], geometry: &FrameGeometry) -> Vec<Vec<f32>> {
    if geometry.num_frames == 0 {
        return Vec::new();
    }

    let window = hamming_window(geometry.frame_len);
    let mut frames = Vec::with_capacity(geometry.num_frames);

    for i in 0..geometry.num_frames {
        let start = i * geometry.step;
        let mut frame = Vec::with_capacity(geometry.frame_len);

        for j in 0..geometry.frame_len {
            let sample = samples.get(start + j).copied().unwrap_or(0.0);
            frame.push(sample * window[j]);
        }

        frames.push(frame);
    }

    frames
}
