//! Digital Signal Processing stages of the spectrogram pipeline

pub mod framer;
pub mod median;
pub mod normalize;
pub mod spectrum;
pub mod transform;
pub mod windows;

pub use framer::{frame_geometry, windowed_frames, FrameGeometry};
pub use median::{median, median_filter};
pub use normalize::IntensityRange;
pub use spectrum::compute_spectra;
pub use transform::{FftTransform, SpectralTransform};
pub use windows::hamming_window;
