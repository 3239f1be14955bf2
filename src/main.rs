// src/main.rs
use anyhow::{Context, Result};
use clap::Parser;
use colorful::Colorful;
use log::info;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use wavspec::{compute_spectrogram, decoder, render, SpectrogramConfig};

#[derive(Parser, Debug)]
#[command(name = "wavspec")]
#[command(about = "Render spectrogram images from audio files")]
struct Args {
    /// Input file or directory
    #[arg(short, long)]
    input: PathBuf,

    /// Output directory for spectrograms
    #[arg(short, long, default_value = "spectrograms")]
    output: PathBuf,

    /// FFT transform size
    #[arg(short = 'n', long, default_value = "512")]
    transform_size: usize,

    /// Frame length factor (samples per frame = factor * sample rate)
    #[arg(long, default_value = "0.1")]
    frame_length: f32,

    /// Frame step factor (hop = factor * sample rate)
    #[arg(long, default_value = "0.005")]
    frame_step: f32,

    /// Color scheme: viridis, inferno, or grayscale
    #[arg(short, long, default_value = "viridis")]
    colormap: String,

    /// Image width in pixels
    #[arg(long, default_value = "1200")]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "400")]
    height: u32,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    let config = SpectrogramConfig {
        transform_size: args.transform_size,
        frame_length_ms: args.frame_length,
        frame_step_ms: args.frame_step,
        color_scheme: args.colormap.clone(),
        width: args.width,
        height: args.height,
    };
    config.validate()?;
    render::Colormap::from_name(&config.color_scheme)?;

    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("Failed to create output directory: {}", args.output.display()))?;

    let audio_files = collect_audio_files(&args.input)?;

    if audio_files.is_empty() {
        println!("{}", "No audio files found!".red());
        return Ok(());
    }

    println!("Found {} audio file(s)\n", audio_files.len());

    for file_path in audio_files {
        process_file(&file_path, &args.output, &config)?;
    }

    Ok(())
}

fn collect_audio_files(path: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let audio_extensions = ["flac", "wav", "mp3", "ogg", "m4a", "aac"];

    if path.is_file() {
        if let Some(ext) = path.extension() {
            if audio_extensions.contains(&ext.to_str().unwrap_or("").to_lowercase().as_str()) {
                files.push(path.to_path_buf());
            }
        }
    } else if path.is_dir() {
        for entry in WalkDir::new(path)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if let Some(ext) = path.extension() {
                if audio_extensions.contains(&ext.to_str().unwrap_or("").to_lowercase().as_str()) {
                    files.push(path.to_path_buf());
                }
            }
        }
    }

    Ok(files)
}

fn process_file(file_path: &Path, output_dir: &Path, config: &SpectrogramConfig) -> Result<()> {
    println!("Processing: {}", file_path.display().to_string().cyan());

    let audio = decoder::decode_audio(file_path)
        .with_context(|| format!("Failed to decode {}", file_path.display()))?;
    info!(
        "decoded {} Hz, {} channel(s), {:.2}s",
        audio.sample_rate, audio.channels, audio.duration_secs
    );

    let samples = decoder::extract_channel(&audio, 0);
    let spectrogram = compute_spectrogram(&samples, audio.sample_rate, config)?;

    if spectrogram.is_empty() {
        println!("  {}", "Audio too short for spectrogram, nothing to draw".yellow());
        return Ok(());
    }

    if spectrogram.range.is_flat() {
        println!("  {}", "No dynamic range (silent input?), rendering flat field".yellow());
    }

    let output_path = output_dir.join(format!(
        "{}.png",
        file_path.file_stem().and_then(|s| s.to_str()).unwrap_or("spectrogram")
    ));
    render::render_png(&spectrogram, config, &output_path)?;

    println!(
        "  {} {} ({} frames x {} bins)",
        "Saved".green(),
        output_path.display(),
        spectrogram.num_frames(),
        spectrogram.num_bins
    );

    Ok(())
}
