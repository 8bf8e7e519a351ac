use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use image::{DynamicImage, ImageFormat, RgbImage, imageops::FilterType};

use crate::{
    assets::{
        decode::decode_file,
        scan::{ImageExtensions, find_images},
    },
    foundation::{
        core::Dimensions,
        error::{BatchError, BatchResult, FileFailure},
    },
    geometry::fit::{CanvasSpec, fit_and_center},
};

#[derive(Clone, Debug, PartialEq)]
pub struct PadConfig {
    pub canvas: CanvasSpec,
    /// Quality used when the output file is a JPEG (1..=100).
    pub jpeg_quality: u8,
    /// Name of the directory created under the input directory.
    pub output_subdir: String,
    pub extensions: ImageExtensions,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasSpec::instagram_portrait(),
            jpeg_quality: 95,
            output_subdir: "output".to_string(),
            extensions: ImageExtensions::raster(),
        }
    }
}

/// Outcome of one [`process_directory`] run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PadReport {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Matching files found in the input directory.
    pub found: usize,
    pub written: Vec<PathBuf>,
    pub failures: Vec<FileFailure>,
}

impl PadReport {
    /// No matching image was found; nothing was written.
    pub fn is_empty(&self) -> bool {
        self.found == 0
    }

    pub fn processed(&self) -> usize {
        self.written.len()
    }
}

/// Resize `img` to fit the canvas content box and paste it, centered, onto a
/// background-filled canvas. Alpha is dropped, not composited.
pub fn pad_image(img: &DynamicImage, canvas: &CanvasSpec) -> RgbImage {
    place_on_canvas(&img.to_rgb8(), canvas)
}

pub(crate) fn place_on_canvas(rgb: &RgbImage, canvas: &CanvasSpec) -> RgbImage {
    let source = Dimensions::of(rgb);
    let placed = fit_and_center(source, canvas);

    let target = canvas.target();
    let mut out = RgbImage::from_pixel(target.width, target.height, canvas.background().into());
    let (x, y) = (i64::from(placed.offset.x), i64::from(placed.offset.y));
    if placed.size == source {
        image::imageops::replace(&mut out, rgb, x, y);
    } else {
        let resized = image::imageops::resize(
            rgb,
            placed.size.width,
            placed.size.height,
            FilterType::Lanczos3,
        );
        image::imageops::replace(&mut out, &resized, x, y);
    }
    out
}

/// Pad one file and write it to `out_dir` under its original file name.
pub fn pad_file(src: &Path, out_dir: &Path, cfg: &PadConfig) -> BatchResult<PathBuf> {
    let name = src
        .file_name()
        .ok_or_else(|| BatchError::input(format!("'{}' has no file name", src.display())))?;
    let out_path = out_dir.join(name);

    let img = decode_file(src)?;
    let padded = pad_image(&img, &cfg.canvas);
    write_image(&padded, &out_path, cfg.jpeg_quality)?;

    Ok(out_path)
}

fn write_image(img: &RgbImage, path: &Path, jpeg_quality: u8) -> BatchResult<()> {
    let format = ImageFormat::from_path(path)
        .map_err(|e| BatchError::encode(format!("'{}': {e}", path.display())))?;

    if format == ImageFormat::Jpeg {
        let f = File::create(path).with_context(|| format!("create '{}'", path.display()))?;
        let mut w = BufWriter::new(f);
        image::codecs::jpeg::JpegEncoder::new_with_quality(&mut w, jpeg_quality.clamp(1, 100))
            .encode_image(img)
            .map_err(|e| BatchError::encode(format!("write jpeg '{}': {e}", path.display())))?;
        w.flush()
            .with_context(|| format!("flush '{}'", path.display()))?;
        return Ok(());
    }

    img.save_with_format(path, format)
        .map_err(|e| BatchError::encode(format!("write '{}': {e}", path.display())))
}

/// Pad every image directly inside `dir` into `dir/<output_subdir>/`.
///
/// Files are handled independently: a failure is recorded in the report and the
/// remaining files are still processed. When no image matches, nothing is created.
#[tracing::instrument(skip_all, fields(dir = %dir.display()))]
pub fn process_directory(dir: &Path, cfg: &PadConfig) -> BatchResult<PadReport> {
    let files = find_images(dir, &cfg.extensions)?;
    let output_dir = dir.join(&cfg.output_subdir);

    let mut report = PadReport {
        input_dir: dir.to_path_buf(),
        output_dir,
        found: files.len(),
        written: Vec::new(),
        failures: Vec::new(),
    };
    if files.is_empty() {
        tracing::info!("no images found");
        return Ok(report);
    }

    std::fs::create_dir_all(&report.output_dir)
        .with_context(|| format!("create output dir '{}'", report.output_dir.display()))?;

    for src in &files {
        match pad_file(src, &report.output_dir, cfg) {
            Ok(out) => {
                tracing::debug!(src = %src.display(), out = %out.display(), "padded");
                report.written.push(out);
            }
            Err(err) => {
                tracing::warn!(src = %src.display(), error = %err, "skipping file");
                report.failures.push(FileFailure::new(src, &err));
            }
        }
    }

    tracing::info!(
        written = report.written.len(),
        failed = report.failures.len(),
        "pad batch finished"
    );
    Ok(report)
}

#[cfg(test)]
#[path = "../../tests/unit/pad/batch.rs"]
mod tests;
