//
// frames.rs
// Dicom-Video-rs
//
// Lists the DICOM files of a series folder in canonical order and decodes each one into a pixel grid.
//
// Thales Matheus Mendonça Santos - November 2025

use std::path::{Path, PathBuf};

use dicom::object::open_file;
use dicom::pixeldata::PixelDecoder;
use dicom_pixeldata::{ConvertOptions, ModalityLutOption, VoiLutOption};
use ndarray::{Array3, Axis};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{Result, VideoError};

pub const DEFAULT_EXTENSION: &str = "dcm";

/// Stored sample values of one decoded frame, laid out as rows x columns x samples.
#[derive(Debug, Clone)]
pub struct PixelGrid {
    samples: Array3<f32>,
}

impl PixelGrid {
    pub fn new(samples: Array3<f32>) -> Self {
        Self { samples }
    }

    /// Builds a single-sample grid from row-major values.
    pub fn from_gray(width: u32, height: u32, values: Vec<f32>) -> Result<Self> {
        let samples = Array3::from_shape_vec((height as usize, width as usize, 1), values)
            .map_err(|e| VideoError::Config(format!("grid shape mismatch: {e}")))?;
        Ok(Self { samples })
    }

    pub fn width(&self) -> u32 {
        self.samples.shape()[1] as u32
    }

    pub fn height(&self) -> u32 {
        self.samples.shape()[0] as u32
    }

    pub fn samples_per_pixel(&self) -> usize {
        self.samples.shape()[2]
    }

    pub fn max(&self) -> f32 {
        self.samples.iter().fold(f32::NEG_INFINITY, |a, &b| a.max(b))
    }

    pub fn get(&self, row: usize, column: usize, sample: usize) -> f32 {
        self.samples[[row, column, sample]]
    }
}

/// Collects the files directly inside `dir` whose extension is `extension`, sorted by file name.
pub fn list_input_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(VideoError::InputDirectory(dir.to_path_buf()));
    }

    let files: Vec<PathBuf> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .filter(|e| e.path().extension().map_or(false, |ext| ext == extension))
        .map(|e| e.into_path())
        .collect();

    if files.is_empty() {
        return Err(VideoError::NoInputFiles(dir.to_path_buf()));
    }

    debug!(count = files.len(), dir = %dir.display(), "listed input files");
    Ok(files)
}

/// Decodes the first frame of a DICOM file into raw stored values.
pub fn read_frame(path: &Path) -> Result<PixelGrid> {
    let obj = open_file(path).map_err(|e| VideoError::decode(path, e))?;
    let decoded = obj
        .decode_pixel_data()
        .map_err(|e| VideoError::decode(path, e))?;

    let num_frames = decoded.number_of_frames();
    if num_frames > 1 {
        warn!(
            path = %path.display(),
            frames = num_frames,
            "multi-frame file, only the first frame is used"
        );
    }

    // Keep stored values untouched: the normalizer does its own scaling.
    let options = ConvertOptions::new()
        .with_modality_lut(ModalityLutOption::None)
        .with_voi_lut(VoiLutOption::Identity);
    let array = decoded
        .to_ndarray_with_options::<f32>(&options)
        .map_err(|e| VideoError::decode(path, e))?;

    if array.shape()[0] == 0 {
        return Err(VideoError::decode(path, "pixel data has no frames"));
    }
    let first = array.index_axis(Axis(0), 0).to_owned();

    debug!(
        path = %path.display(),
        rows = first.shape()[0],
        columns = first.shape()[1],
        samples = first.shape()[2],
        "decoded frame"
    );
    Ok(PixelGrid::new(first))
}
