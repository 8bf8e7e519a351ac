use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::{BatchError, BatchResult};

const RASTER_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "bmp", "tiff"];

/// Case-insensitive set of file extensions treated as input images.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageExtensions {
    exts: Vec<&'static str>,
}

impl ImageExtensions {
    /// jpg, jpeg, png, bmp and tiff.
    pub fn raster() -> Self {
        Self {
            exts: RASTER_EXTENSIONS.to_vec(),
        }
    }

    /// Also accept `.gif` files (first frame only).
    pub fn with_gif(mut self) -> Self {
        if !self.exts.contains(&"gif") {
            self.exts.push("gif");
        }
        self
    }

    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| self.exts.iter().any(|x| x.eq_ignore_ascii_case(e)))
    }
}

impl Default for ImageExtensions {
    fn default() -> Self {
        Self::raster()
    }
}

/// Image files directly inside `dir`, sorted by file name.
///
/// Subdirectories are not descended into. The returned order is stable regardless of
/// how the filesystem enumerates entries, and is the frame order of an animation.
pub fn find_images(dir: &Path, exts: &ImageExtensions) -> BatchResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(BatchError::input(format!(
            "not a valid directory: '{}'",
            dir.display()
        )));
    }

    let entries =
        std::fs::read_dir(dir).with_context(|| format!("read directory '{}'", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("read entry in '{}'", dir.display()))?;
        let path = entry.path();
        if path.is_file() && exts.matches(&path) {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    tracing::debug!(dir = %dir.display(), count = files.len(), "found images");
    Ok(files)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/scan.rs"]
mod tests;
