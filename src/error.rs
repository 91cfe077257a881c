//
// error.rs
// Dicom-Video-rs
//
// Error taxonomy for the conversion pipeline: input, output, decode, frame writing, and encoder failures.
//
// Thales Matheus Mendonça Santos - November 2025

use std::path::PathBuf;

use thiserror::Error;

/// Result type for the conversion pipeline.
pub type Result<T> = std::result::Result<T, VideoError>;

#[derive(Error, Debug)]
pub enum VideoError {
    /// Input folder missing or not a directory
    #[error("Input folder not found: {0}")]
    InputDirectory(PathBuf),

    /// No file in the input folder matched the extension filter
    #[error("No DICOM files found in input folder: {0}")]
    NoInputFiles(PathBuf),

    /// Output exists and overwrite was not requested
    #[error("Output file already exists: {0}")]
    OutputExists(PathBuf),

    /// Invalid request (zero frame rate, zero dimension, ...)
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A source file could not be opened or its pixel data decoded
    #[error("Failed to decode {path}: {reason}")]
    Decode { path: PathBuf, reason: String },

    /// Writing or re-reading an intermediate frame failed
    #[error("Frame image error for {path}: {source}")]
    FrameImage {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The external video encoder could not be run or exited with failure
    #[error("Video encoder failed: {0}")]
    Encoder(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl VideoError {
    pub(crate) fn decode(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        VideoError::Decode {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
