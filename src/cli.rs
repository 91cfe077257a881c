//
// cli.rs
// Dicom-Video-rs
//
// Defines the CLI surface with Clap, sets up logging, and runs the folder-to-video conversion.
//
// Thales Matheus Mendonça Santos - November 2025

use std::path::PathBuf;

use anyhow::{anyhow, Context};
use clap::Parser;
use dicom_pixeldata::WindowLevel;
use tracing::Level;

use crate::encoder::{FfmpegEncoder, DEFAULT_FFMPEG};
use crate::frames::DEFAULT_EXTENSION;
use crate::normalize::Normalization;
use crate::pipeline::{self, VideoRequest, DEFAULT_OUTPUT, DEFAULT_RATE};

/// Command-line interface: one conversion per invocation.
#[derive(Parser, Debug)]
#[command(name = "dicom-video")]
#[command(about = "Convert DICOM files to a video.", long_about = None)]
pub struct Cli {
    /// Input folder containing DICOM files
    #[arg(short, long)]
    pub input: PathBuf,
    /// Output video file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
    /// Frame rate for the video
    #[arg(short, long, default_value_t = DEFAULT_RATE, value_parser = clap::value_parser!(u32).range(1..))]
    pub rate: u32,
    /// Width of the video frames
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: Option<u32>,
    /// Height of the video frames
    #[arg(short = 'H', long, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: Option<u32>,
    /// Overwrite output file if it exists
    #[arg(short = 'O', long)]
    pub overwrite: bool,
    /// File extension selecting the input files
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    pub extension: String,
    /// Apply a fixed VOI window instead of per-frame scaling
    #[arg(long, requires = "window_width")]
    pub window_center: Option<f64>,
    #[arg(long, requires = "window_center")]
    pub window_width: Option<f64>,
    /// Encoder executable
    #[arg(long, env = "DICOM_VIDEO_FFMPEG", default_value = DEFAULT_FFMPEG)]
    pub ffmpeg: PathBuf,
    /// Directory in which the intermediate frames are written
    #[arg(long)]
    pub work_dir: Option<PathBuf>,
    /// Print the conversion report as JSON
    #[arg(long)]
    pub json: bool,
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn to_request(&self) -> anyhow::Result<VideoRequest> {
        let normalization = match parse_window(self.window_center, self.window_width)? {
            Some(window) => Normalization::Window(window),
            None => Normalization::PerFrameMax,
        };

        Ok(VideoRequest {
            input: self.input.clone(),
            output: self.output.clone(),
            rate: self.rate,
            width: self.width,
            height: self.height,
            overwrite: self.overwrite,
            extension: self.extension.clone(),
            normalization,
            work_dir: self.work_dir.clone(),
        })
    }
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let request = cli.to_request()?;
    let encoder = FfmpegEncoder::new(&cli.ffmpeg);
    let report = pipeline::convert(&request, &encoder)
        .with_context(|| format!("Failed to convert {:?}", request.input))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Video saved successfully as: {}", report.output.display());
        println!(
            "  Frames: {} | Canvas: {} | Duration: {:.3}s",
            report.frame_count, report.canvas, report.duration_secs
        );
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    // Logs go to stderr so --json output stays parseable.
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

fn parse_window(center: Option<f64>, width: Option<f64>) -> anyhow::Result<Option<WindowLevel>> {
    match (center, width) {
        (Some(c), Some(w)) if w > 0.0 => Ok(Some(WindowLevel {
            center: c,
            width: w,
        })),
        (Some(_), Some(_)) => Err(anyhow!("--window-width must be greater than zero")),
        (None, None) => Ok(None),
        _ => Err(anyhow!(
            "Provide both --window-center and --window-width, or neither"
        )),
    }
}
