// src/decoder.rs
//
// Audio decoding module. Uses Symphonia for format-agnostic decoding.

use anyhow::{bail, Context, Result};
use std::fs::File;
use std::path::Path;
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

/// Container for decoded audio data
#[derive(Debug, Clone)]
pub struct AudioData {
    /// Interleaved samples normalized to [-1.0, 1.0]
    pub samples: Vec<f32>,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Number of audio channels
    pub channels: usize,
    /// Duration in seconds
    pub duration_secs: f64,
}

/// Decode audio file to floating-point samples
pub fn decode_audio(path: &Path) -> Result<AudioData> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open file: {}", path.display()))?;

    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension() {
        hint.with_extension(ext.to_str().unwrap_or(""));
    }

    let meta_opts = MetadataOptions::default();
    let fmt_opts = FormatOptions::default();

    let mut probed = symphonia::default::get_probe()
        .format(&hint, mss, &fmt_opts, &meta_opts)
        .context("Failed to probe file format - may be corrupted or unsupported")?;

    let track = probed.format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .context("No supported audio track found in file")?;

    let track_id = track.id;
    let sample_rate = track.codec_params.sample_rate
        .context("File does not specify sample rate")?;

    let channels = track.codec_params.channels
        .map(|c| c.count())
        .unwrap_or(2);

    if channels == 0 {
        bail!("File reports 0 audio channels");
    }

    let dec_opts = DecoderOptions::default();
    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &dec_opts)
        .context("Failed to create decoder for audio codec")?;

    let mut samples: Vec<f32> = Vec::new();
    let mut sample_buf: Option<SampleBuffer<f32>> = None;

    loop {
        let packet = match probed.format.next_packet() {
            Ok(packet) => packet,
            Err(symphonia::core::errors::Error::IoError(ref e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof => break,
            Err(symphonia::core::errors::Error::ResetRequired) => {
                decoder.reset();
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(buf) => buf,
            Err(symphonia::core::errors::Error::DecodeError(_)) => continue,
            Err(e) => return Err(e.into()),
        };

        if sample_buf.is_none() {
            let spec = *decoded.spec();
            let duration = decoded.capacity() as u64;
            sample_buf = Some(SampleBuffer::new(duration, spec));
        }

        if let Some(ref mut buf) = sample_buf {
            buf.copy_interleaved_ref(decoded);
            samples.extend_from_slice(buf.samples());
        }
    }

    if samples.is_empty() {
        bail!("No audio samples decoded from file");
    }

    let duration_secs = samples.len() as f64 / (sample_rate as f64 * channels as f64);

    Ok(AudioData {
        samples,
        sample_rate,
        channels,
        duration_secs,
    })
}

/// Extract a single channel from potentially multi-channel audio
///
/// The spectrogram analyzes one channel only; channels are never mixed.
/// An out-of-range channel index yields an empty vector.
pub fn extract_channel(audio: &AudioData, channel: usize) -> Vec<f32> {
    if channel >= audio.channels {
        return Vec::new();
    }

    if audio.channels == 1 {
        return audio.samples.clone();
    }

    let num_samples = audio.samples.len() / audio.channels;
    let mut out = Vec::with_capacity(num_samples);

    for i in 0..num_samples {
        out.push(audio.samples[i * audio.channels + channel]);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_channel_deinterleaves() {
        let audio = AudioData {
            samples: vec![0.5, -0.5, 0.3, -0.3],
            sample_rate: 44100,
            channels: 2,
            duration_secs: 0.0,
        };

        let left = extract_channel(&audio, 0);
        let right = extract_channel(&audio, 1);
        assert_eq!(left, vec![0.5, 0.3]);
        assert_eq!(right, vec![-0.5, -0.3]);
    }

    #[test]
    fn test_extract_channel_mono_passthrough() {
        let audio = AudioData {
            samples: vec![0.1, 0.2, 0.3],
            sample_rate: 8000,
            channels: 1,
            duration_secs: 0.0,
        };

        assert_eq!(extract_channel(&audio, 0), audio.samples);
    }

    #[test]
    fn test_extract_channel_out_of_range() {
        let audio = AudioData {
            samples: vec![0.1, 0.2],
            sample_rate: 8000,
            channels: 1,
            duration_secs: 0.0,
        };

        assert!(extract_channel(&audio, 1).is_empty());
    }
}
