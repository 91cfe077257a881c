//
// dimensions.rs
// Dicom-Video-rs
//
// Resolves the output canvas, either from explicit width/height or from the largest written frame.
//
// Thales Matheus Mendonça Santos - November 2025

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, VideoError};
use crate::models::Canvas;

/// Componentwise maximum of the image sizes found at `frames`.
pub fn largest_dimensions(frames: &[PathBuf]) -> Result<Canvas> {
    let mut canvas = Canvas {
        width: 0,
        height: 0,
    };
    for path in frames {
        let (width, height) = image_size(path)?;
        canvas.width = canvas.width.max(width);
        canvas.height = canvas.height.max(height);
    }

    if canvas.width == 0 || canvas.height == 0 {
        return Err(VideoError::Config(
            "cannot compute a canvas from zero frames".to_string(),
        ));
    }
    Ok(canvas)
}

/// Uses the requested size when both sides are given; otherwise scans the written frames.
pub fn resolve_canvas(width: Option<u32>, height: Option<u32>, frames: &[PathBuf]) -> Result<Canvas> {
    match (width, height) {
        (Some(width), Some(height)) => {
            if width == 0 || height == 0 {
                return Err(VideoError::Config(
                    "width and height must be greater than zero".to_string(),
                ));
            }
            Ok(Canvas { width, height })
        }
        _ => {
            let canvas = largest_dimensions(frames)?;
            debug!(%canvas, frames = frames.len(), "computed canvas from frames");
            Ok(canvas)
        }
    }
}

fn image_size(path: &Path) -> Result<(u32, u32)> {
    // Header-only read, pixels are not decoded.
    image::image_dimensions(path).map_err(|source| VideoError::FrameImage {
        path: path.to_path_buf(),
        source,
    })
}
