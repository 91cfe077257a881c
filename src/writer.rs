//
// writer.rs
// Dicom-Video-rs
//
// Writes normalized frames as zero-padded, sequentially numbered PNG files for the encoder input pattern.
//
// Thales Matheus Mendonça Santos - November 2025

use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbImage};

use crate::error::{Result, VideoError};

/// printf-style pattern matching every name produced by [`frame_file_name`].
pub const FRAME_PATTERN: &str = "frame_%06d.png";

pub fn frame_file_name(index: usize) -> String {
    format!("frame_{index:06}.png")
}

/// Saves one normalized frame as `frame_{index:06}.png` inside `dir`.
pub fn write_frame(dir: &Path, index: usize, image: &RgbImage) -> Result<PathBuf> {
    let path = dir.join(frame_file_name(index));
    image
        .save_with_format(&path, ImageFormat::Png)
        .map_err(|source| VideoError::FrameImage {
            path: path.clone(),
            source,
        })?;
    Ok(path)
}
