//
// main.rs
// Dicom-Video-rs
//
// Binary entry point that hands off argument parsing and the conversion to the CLI layer.
//
// Thales Matheus Mendonça Santos - November 2025

use dicom_video::cli;

fn main() -> anyhow::Result<()> {
    cli::run()
}
