//
// encoder.rs
// Dicom-Video-rs
//
// Hands the numbered frame images to an external encoder that letterboxes them into one canvas and muxes a video.
//
// Thales Matheus Mendonça Santos - November 2025

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::error::{Result, VideoError};
use crate::models::Canvas;
use crate::writer::FRAME_PATTERN;

pub const DEFAULT_FFMPEG: &str = "ffmpeg";

/// Pixel format chosen for broad player compatibility.
pub const PIXEL_FORMAT: &str = "yuv420p";

/// Everything an encoder needs to turn the frame directory into a video.
#[derive(Debug, Clone)]
pub struct EncodeJob<'a> {
    /// Directory holding `frame_000000.png`, `frame_000001.png`, ...
    pub frames_dir: &'a Path,
    /// Frame files in playback order.
    pub frames: &'a [PathBuf],
    pub canvas: Canvas,
    pub rate: u32,
    pub output: &'a Path,
    pub overwrite: bool,
}

impl EncodeJob<'_> {
    pub fn input_pattern(&self) -> PathBuf {
        self.frames_dir.join(FRAME_PATTERN)
    }
}

/// Seam between the pipeline and whatever produces the video file.
pub trait VideoEncoder {
    fn encode(&self, job: &EncodeJob<'_>) -> Result<()>;
}

/// Shrinks oversized frames keeping aspect ratio, then centers them on the canvas.
pub fn scale_pad_filter(canvas: Canvas) -> String {
    let Canvas { width, height } = canvas;
    format!(
        "scale={width}:{height}:force_original_aspect_ratio=decrease,pad={width}:{height}:(ow-iw)/2:(oh-ih)/2"
    )
}

/// Runs the `ffmpeg` command-line tool once, synchronously.
#[derive(Debug, Clone)]
pub struct FfmpegEncoder {
    program: PathBuf,
}

impl Default for FfmpegEncoder {
    fn default() -> Self {
        Self::new(DEFAULT_FFMPEG)
    }
}

impl FfmpegEncoder {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn args(job: &EncodeJob<'_>) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec!["-hide_banner".into(), "-loglevel".into(), "error".into()];
        args.push(if job.overwrite { "-y" } else { "-n" }.into());
        args.extend([
            OsString::from("-framerate"),
            job.rate.to_string().into(),
            "-i".into(),
            job.input_pattern().into_os_string(),
            "-vf".into(),
            scale_pad_filter(job.canvas).into(),
            "-pix_fmt".into(),
            PIXEL_FORMAT.into(),
        ]);
        args.push(job.output.as_os_str().to_os_string());
        args
    }
}

impl VideoEncoder for FfmpegEncoder {
    fn encode(&self, job: &EncodeJob<'_>) -> Result<()> {
        let args = Self::args(job);
        debug!(
            program = %self.program.display(),
            frames = job.frames.len(),
            canvas = %job.canvas,
            ?args,
            "spawning encoder"
        );

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|e| {
                VideoError::Encoder(format!(
                    "failed to run {} (is it installed and on PATH?): {e}",
                    self.program.display()
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(VideoError::Encoder(format!(
                "{} exited with {}: {}",
                self.program.display(),
                output.status,
                stderr.trim()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job<'a>(frames: &'a [PathBuf], overwrite: bool) -> EncodeJob<'a> {
        EncodeJob {
            frames_dir: Path::new("/tmp/frames"),
            frames,
            canvas: Canvas {
                width: 1920,
                height: 1080,
            },
            rate: 24,
            output: Path::new("out.mp4"),
            overwrite,
        }
    }

    #[test]
    fn filter_letterboxes_into_canvas() {
        let filter = scale_pad_filter(Canvas {
            width: 640,
            height: 480,
        });
        assert_eq!(
            filter,
            "scale=640:480:force_original_aspect_ratio=decrease,pad=640:480:(ow-iw)/2:(oh-ih)/2"
        );
    }

    #[test]
    fn args_follow_input_then_filter_then_output() {
        let frames = vec![PathBuf::from("/tmp/frames/frame_000000.png")];
        let args = FfmpegEncoder::args(&job(&frames, true));
        let args: Vec<String> = args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();

        assert!(args.contains(&"-y".to_string()));
        let pos = |flag: &str| args.iter().position(|a| a == flag).expect(flag);
        assert_eq!(args[pos("-framerate") + 1], "24");
        assert_eq!(args[pos("-i") + 1], "/tmp/frames/frame_%06d.png");
        assert!(args[pos("-vf") + 1].starts_with("scale=1920:1080"));
        assert_eq!(args[pos("-pix_fmt") + 1], "yuv420p");
        assert!(pos("-framerate") < pos("-i"));
        assert_eq!(args.last().map(String::as_str), Some("out.mp4"));
    }

    #[test]
    fn no_overwrite_passes_n() {
        let frames: Vec<PathBuf> = Vec::new();
        let args = FfmpegEncoder::args(&job(&frames, false));
        assert!(args.iter().any(|a| a == "-n"));
        assert!(!args.iter().any(|a| a == "-y"));
    }

    #[test]
    fn default_program_is_ffmpeg_on_path() {
        assert_eq!(FfmpegEncoder::default().program(), Path::new("ffmpeg"));
        let custom = FfmpegEncoder::new("/opt/ffmpeg/bin/ffmpeg");
        assert_eq!(custom.program(), Path::new("/opt/ffmpeg/bin/ffmpeg"));
    }

    #[test]
    fn missing_binary_is_an_encoder_error() {
        let frames: Vec<PathBuf> = Vec::new();
        let encoder = FfmpegEncoder::new("/nonexistent/bin/ffmpeg-missing");
        let err = encoder.encode(&job(&frames, true)).unwrap_err();
        assert!(matches!(err, VideoError::Encoder(_)));
    }
}
