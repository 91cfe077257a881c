//
// lib.rs
// Dicom-Video-rs
//
// Exposes the conversion stages as modules and re-exports the pipeline entry points for binary and library consumers.
//
// Thales Matheus Mendonça Santos - November 2025

// Modules follow the data flow: frames -> normalize -> writer -> dimensions -> encoder.
pub mod cli;
pub mod dimensions;
pub mod encoder;
pub mod error;
pub mod frames;
pub mod models;
pub mod normalize;
pub mod pipeline;
pub mod writer;

pub use cli::{run as run_cli, Cli};
pub use encoder::{EncodeJob, FfmpegEncoder, VideoEncoder};
pub use error::{Result, VideoError};
pub use models::{Canvas, ConversionReport};
pub use pipeline::{convert, VideoRequest};
