//
// normalize.rs
// Dicom-Video-rs
//
// Scales decoded pixel grids into 8-bit RGB rasters, either per frame or through a fixed VOI window.
//
// Thales Matheus Mendonça Santos - November 2025

use dicom_pixeldata::WindowLevel;
use image::{Rgb, RgbImage};
use tracing::warn;

use crate::frames::PixelGrid;

/// How stored values are mapped onto 0..=255.
#[derive(Debug, Clone, Copy, Default)]
pub enum Normalization {
    /// Divide by the frame's own maximum.
    #[default]
    PerFrameMax,
    /// Linear window spanning `center - width/2 ..= center + width/2`.
    Window(WindowLevel),
}

pub fn normalize(grid: &PixelGrid, normalization: &Normalization) -> RgbImage {
    match normalization {
        Normalization::PerFrameMax => {
            let max = grid.max();
            if max.is_nan() || max <= 0.0 {
                // Blank frame: nothing to scale by, emit solid black.
                warn!("frame maximum is {max}, writing a black frame");
                return RgbImage::new(grid.width(), grid.height());
            }
            to_rgb(grid, |v| to_u8(v / max * 255.0))
        }
        Normalization::Window(window) => {
            let width = window.width;
            let lower = window.center - width / 2.0;
            to_rgb(grid, |v| to_u8(((v as f64 - lower) / width * 255.0) as f32))
        }
    }
}

fn to_rgb(grid: &PixelGrid, scale: impl Fn(f32) -> u8) -> RgbImage {
    let color = grid.samples_per_pixel() >= 3;
    RgbImage::from_fn(grid.width(), grid.height(), |x, y| {
        let (row, column) = (y as usize, x as usize);
        if color {
            Rgb([
                scale(grid.get(row, column, 0)),
                scale(grid.get(row, column, 1)),
                scale(grid.get(row, column, 2)),
            ])
        } else {
            let gray = scale(grid.get(row, column, 0));
            Rgb([gray, gray, gray])
        }
    })
}

/// Truncates toward zero after clamping, like an integer cast of the scaled value.
fn to_u8(value: f32) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.clamp(0.0, 255.0) as u8
}
