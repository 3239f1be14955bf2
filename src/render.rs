// src/render.rs
//
// Color mapping and PNG output for computed spectrograms

use anyhow::{bail, Result};
use image::{ImageBuffer, Rgb};
use std::path::Path;

use crate::config::SpectrogramConfig;
use crate::pipeline::Spectrogram;

/// Color map for spectrogram rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colormap {
    Viridis,
    Inferno,
    Grayscale,
}

impl Default for Colormap {
    fn default() -> Self {
        Self::Viridis
    }
}

impl Colormap {
    /// Resolve a scheme name from configuration
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "viridis" => Ok(Self::Viridis),
            "inferno" => Ok(Self::Inferno),
            "grayscale" | "gray" => Ok(Self::Grayscale),
            other => bail!("Unknown color scheme: {}", other),
        }
    }

    /// Build the 256-entry intensity-to-color lookup table
    pub fn table(&self) -> [[u8; 3]; 256] {
        let mut table = [[0u8; 3]; 256];
        for (i, entry) in table.iter_mut().enumerate() {
            *entry = self.color(i as f32 / 255.0);
        }
        table
    }

    fn color(&self, v: f32) -> [u8; 3] {
        let v = v.clamp(0.0, 1.0);
        match self {
            // Piecewise approximations of the matplotlib maps
            Colormap::Viridis => {
                let r = (68.0 + v * (253.0 - 68.0) * v) as u8;
                let g = (1.0 + v * (231.0 - 1.0)) as u8;
                let b = (84.0 + v * (37.0 - 84.0 + (1.0 - v) * 150.0)) as u8;
                [r, g, b]
            }
            Colormap::Inferno => {
                let r = (255.0 * (v * 2.0).min(1.0).powf(0.7)) as u8;
                let g = (255.0 * (v - 0.25).max(0.0) / 0.75 * v) as u8;
                let b = if v < 0.5 {
                    (120.0 * (v * 2.0)) as u8
                } else {
                    (120.0 * (2.0 - 2.0 * v) + 135.0 * (2.0 * v - 1.0).powi(3)) as u8
                };
                [r, g, b]
            }
            Colormap::Grayscale => {
                let level = (255.0 * v) as u8;
                [level, level, level]
            }
        }
    }
}

/// Render an intensity grid to a PNG at the configured dimensions
///
/// Each pixel samples the nearest grid cell; rows are flipped so low
/// frequencies sit at the bottom of the image. An empty grid renders as a
/// uniform minimum-intensity image ("nothing to draw"), never an error.
pub fn render_png(
    spectrogram: &Spectrogram,
    config: &SpectrogramConfig,
    output_path: &Path,
) -> Result<()> {
    let colormap = Colormap::from_name(&config.color_scheme)?;
    let colors = colormap.table();

    let mut img: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::new(config.width, config.height);

    if spectrogram.is_empty() {
        let floor = Rgb(colors[0]);
        for pixel in img.pixels_mut() {
            *pixel = floor;
        }
        img.save(output_path)?;
        return Ok(());
    }

    let num_frames = spectrogram.num_frames();
    let num_bins = spectrogram.num_bins;
    let x_scale = num_frames as f32 / config.width as f32;
    let y_scale = num_bins as f32 / config.height as f32;

    for y in 0..config.height {
        // Flip Y for display (low frequencies at bottom)
        let bin_idx = (((config.height - 1 - y) as f32 * y_scale) as usize).min(num_bins - 1);

        for x in 0..config.width {
            let frame_idx = ((x as f32 * x_scale) as usize).min(num_frames - 1);

            let intensity = spectrogram.intensities[frame_idx][bin_idx];
            img.put_pixel(x, y, Rgb(colors[intensity as usize]));
        }
    }

    img.save(output_path)?;
    Ok(())
}
