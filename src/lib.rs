//! WavSpec - Render spectrogram images from audio files
//!
//! Decodes an audio file to floating-point samples, runs a framing /
//! windowing / FFT / median-filter / normalization pipeline over one
//! channel, and renders the result as a PNG spectrogram.
//!
//! ## Module Structure
//!
//! - `decoder` - Symphonia-based audio decoding
//! - `dsp` - Framing, windowing, spectral transform, smoothing, normalization
//! - `pipeline` - Full waveform-to-intensity-grid run
//! - `render` - Color mapping and PNG output
//! - `config` - Pipeline configuration with documented defaults
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use wavspec::{SpectrogramConfig, decoder, pipeline};
//!
//! let audio = decoder::decode_audio(path)?;
//! let samples = decoder::extract_channel(&audio, 0);
//!
//! let config = SpectrogramConfig::default();
//! let spectrogram = pipeline::compute_spectrogram(&samples, audio.sample_rate, &config)?;
//! ```

// Audio decoding
pub mod decoder;

// DSP stages
pub mod dsp;

// Waveform-to-grid pipeline
pub mod pipeline;

// Color mapping and image output
pub mod render;

// Configuration
pub mod config;

// Re-export commonly used types at crate root for convenience
pub use config::SpectrogramConfig;
pub use decoder::{decode_audio, extract_channel, AudioData};
pub use dsp::{FftTransform, IntensityRange, SpectralTransform};
pub use pipeline::{compute_spectrogram, Spectrogram};
pub use render::Colormap;
