//
// models.rs
// Dicom-Video-rs
//
// Defines serializable data structures for the output canvas and the conversion report.
//
// Thales Matheus Mendonça Santos - November 2025

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Common output size every frame is scaled and padded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// What a finished conversion produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionReport {
    pub output: PathBuf,
    pub frame_count: usize,
    pub canvas: Canvas,
    pub rate: u32,
    pub duration_secs: f64,
}
