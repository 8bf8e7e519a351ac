use std::path::{Path, PathBuf};

use image::{RgbImage, imageops::FilterType};

use crate::{
    assets::{
        decode::decode_file,
        scan::{ImageExtensions, find_images},
    },
    foundation::{
        core::Dimensions,
        error::{BatchError, BatchResult, FileFailure},
    },
    geometry::fit::clamp_width,
};

/// How a directory is turned into frames.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectOptions {
    /// Frames wider than this are downscaled. `None` keeps the decoded size.
    pub max_width: Option<u32>,
    /// Record and skip files that fail to decode instead of aborting.
    pub skip_unreadable: bool,
    /// Accept `.gif` files as frame sources.
    pub include_gif: bool,
}

impl CollectOptions {
    pub fn full(max_width: u32) -> Self {
        Self {
            max_width: Some(max_width),
            skip_unreadable: true,
            include_gif: false,
        }
    }

    /// No downscaling, first decode failure aborts.
    pub fn simple() -> Self {
        Self {
            max_width: None,
            skip_unreadable: false,
            include_gif: false,
        }
    }

    pub fn extensions(&self) -> ImageExtensions {
        let exts = ImageExtensions::raster();
        if self.include_gif { exts.with_gif() } else { exts }
    }
}

/// Ordered RGB frames and the files they came from.
#[derive(Clone, Debug, Default)]
pub struct FrameSequence {
    frames: Vec<RgbImage>,
    sources: Vec<PathBuf>,
}

impl FrameSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, source: impl Into<PathBuf>, frame: RgbImage) {
        self.sources.push(source.into());
        self.frames.push(frame);
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RgbImage> {
        self.frames.iter()
    }

    pub fn frames(&self) -> &[RgbImage] {
        &self.frames
    }

    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    pub fn first_dimensions(&self) -> Option<Dimensions> {
        self.frames.first().map(Dimensions::of)
    }
}

impl<'a> IntoIterator for &'a FrameSequence {
    type Item = &'a RgbImage;
    type IntoIter = std::slice::Iter<'a, RgbImage>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Result of [`collect_frames`].
#[derive(Clone, Debug)]
pub struct Collected {
    pub sequence: FrameSequence,
    /// Files that matched but could not be decoded.
    pub skipped: Vec<FileFailure>,
    /// Files that matched the extension filter.
    pub found: usize,
}

/// Decode every image in `dir`, in file-name order, into RGB frames.
///
/// An empty sequence is returned as-is; deciding whether that is fatal is up to
/// the caller.
#[tracing::instrument(skip_all, fields(dir = %dir.display()))]
pub fn collect_frames(dir: &Path, opts: &CollectOptions) -> BatchResult<Collected> {
    let files = find_images(dir, &opts.extensions())?;

    let mut sequence = FrameSequence::new();
    let mut skipped = Vec::new();
    for path in &files {
        match load_frame(path, opts.max_width) {
            Ok(frame) => sequence.push(path, frame),
            Err(err @ BatchError::Decode { .. }) if opts.skip_unreadable => {
                tracing::warn!(path = %path.display(), error = %err, "skipping unreadable file");
                skipped.push(FileFailure::new(path, &err));
            }
            Err(err) => return Err(err),
        }
    }

    tracing::info!(
        found = files.len(),
        frames = sequence.len(),
        skipped = skipped.len(),
        "collected frames"
    );
    Ok(Collected {
        sequence,
        skipped,
        found: files.len(),
    })
}

fn load_frame(path: &Path, max_width: Option<u32>) -> BatchResult<RgbImage> {
    let rgb = decode_file(path)?.into_rgb8();
    let Some(max_width) = max_width else {
        return Ok(rgb);
    };

    let size = Dimensions::of(&rgb);
    let clamped = clamp_width(size, max_width);
    if clamped == size {
        return Ok(rgb);
    }
    tracing::debug!(path = %path.display(), from = %size, to = %clamped, "downscaling frame");
    Ok(image::imageops::resize(
        &rgb,
        clamped.width,
        clamped.height,
        FilterType::Lanczos3,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/frames/collect.rs"]
mod tests;
