//
// pipeline.rs
// Dicom-Video-rs
//
// Runs the conversion end to end: checks, decode and normalize each frame, write temp images, size the canvas, encode.
//
// Thales Matheus Mendonça Santos - November 2025

use std::path::PathBuf;

use tempfile::TempDir;
use tracing::{debug, info};

use crate::dimensions::resolve_canvas;
use crate::encoder::{EncodeJob, VideoEncoder};
use crate::error::{Result, VideoError};
use crate::frames::{self, DEFAULT_EXTENSION};
use crate::models::ConversionReport;
use crate::normalize::{normalize, Normalization};
use crate::writer::write_frame;

pub const DEFAULT_OUTPUT: &str = "result.mp4";
pub const DEFAULT_RATE: u32 = 12;

/// Parameters for one folder-to-video conversion.
#[derive(Debug, Clone)]
pub struct VideoRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub rate: u32,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub overwrite: bool,
    pub extension: String,
    pub normalization: Normalization,
    /// Parent of the intermediate frame directory; the system temp dir when `None`.
    pub work_dir: Option<PathBuf>,
}

impl VideoRequest {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            rate: DEFAULT_RATE,
            width: None,
            height: None,
            overwrite: false,
            extension: DEFAULT_EXTENSION.to_string(),
            normalization: Normalization::default(),
            work_dir: None,
        }
    }
}

/// Converts the DICOM series in `request.input` into a single video file.
///
/// Fails before any decoding when the output already exists (without overwrite)
/// or when the folder holds no matching files. The intermediate frame directory
/// is removed on every return path.
pub fn convert(request: &VideoRequest, encoder: &dyn VideoEncoder) -> Result<ConversionReport> {
    if request.rate == 0 {
        return Err(VideoError::Config(
            "frame rate must be greater than zero".to_string(),
        ));
    }

    if let Normalization::Window(window) = request.normalization {
        if window.width.is_nan() || window.width <= 0.0 {
            return Err(VideoError::Config(
                "window width must be greater than zero".to_string(),
            ));
        }
    }

    if request.output.exists() && !request.overwrite {
        return Err(VideoError::OutputExists(request.output.clone()));
    }

    let inputs = frames::list_input_files(&request.input, &request.extension)?;
    info!("Found {} DICOM frames", inputs.len());

    let tempdir = match &request.work_dir {
        Some(dir) => TempDir::new_in(dir)?,
        None => TempDir::new()?,
    };
    debug!(dir = %tempdir.path().display(), "created frame directory");

    info!("Converting DICOM files to images...");
    let mut written = Vec::with_capacity(inputs.len());
    for (index, input) in inputs.iter().enumerate() {
        let grid = frames::read_frame(input)?;
        let image = normalize(&grid, &request.normalization);
        let path = write_frame(tempdir.path(), index, &image)?;
        debug!(index, source = %input.display(), frame = %path.display(), "wrote frame");
        written.push(path);
    }

    let canvas = resolve_canvas(request.width, request.height, &written)?;
    if request.width.is_none() || request.height.is_none() {
        info!("Calculated scale dimensions: {}", canvas);
    }

    info!("Creating video...");
    let job = EncodeJob {
        frames_dir: tempdir.path(),
        frames: &written,
        canvas,
        rate: request.rate,
        output: &request.output,
        overwrite: request.overwrite,
    };
    encoder.encode(&job)?;

    let frame_count = written.len();
    let report = ConversionReport {
        output: request.output.clone(),
        frame_count,
        canvas,
        rate: request.rate,
        duration_secs: frame_count as f64 / f64::from(request.rate),
    };
    debug!(
        output = %report.output.display(),
        frames = report.frame_count,
        duration = report.duration_secs,
        "conversion finished"
    );

    tempdir.close()?;
    Ok(report)
}
