use std::{
    borrow::Cow,
    ffi::OsString,
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use image::RgbImage;

use crate::{
    encode::{
        gif::{GifTuning, encode_gif},
        webp::{WebpTuning, encode_webp},
    },
    foundation::{
        core::{Dimensions, Fps, Rgb8},
        error::{BatchError, BatchResult, FileFailure},
    },
    frames::collect::{CollectOptions, FrameSequence, collect_frames},
    geometry::fit::CanvasSpec,
    pad::batch::place_on_canvas,
};

/// Container written by [`assemble`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Gif,
    WebP,
}

impl OutputFormat {
    /// Extension including the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Gif => ".gif",
            Self::WebP => ".webp",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Gif => "GIF",
            Self::WebP => "WEBP",
        }
    }
}

/// Everything that controls one animation run, from collection to encode.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationSpec {
    pub fps: Fps,
    /// Frames wider than this are downscaled. `None` disables downscaling.
    pub max_width: Option<u32>,
    pub format: OutputFormat,
    /// Skip files that fail to decode rather than aborting the run.
    pub skip_unreadable: bool,
    pub include_gif_sources: bool,
    pub gif: GifTuning,
    pub webp: WebpTuning,
}

impl AnimationSpec {
    pub fn full(fps: Fps, max_width: u32, format: OutputFormat) -> Self {
        Self {
            fps,
            max_width: Some(max_width),
            format,
            skip_unreadable: true,
            include_gif_sources: false,
            gif: GifTuning::default(),
            webp: WebpTuning::default(),
        }
    }

    /// The legacy GIF maker: original frame sizes, any unreadable file is fatal.
    pub fn simple(fps: Fps) -> Self {
        Self {
            max_width: None,
            skip_unreadable: false,
            ..Self::full(fps, 0, OutputFormat::Gif)
        }
    }

    pub fn frame_duration_ms(&self) -> u32 {
        self.fps.frame_duration_ms()
    }

    pub fn collect_options(&self) -> CollectOptions {
        CollectOptions {
            max_width: self.max_width,
            skip_unreadable: self.skip_unreadable,
            include_gif: self.include_gif_sources,
        }
    }
}

/// What [`assemble`] wrote.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnimationReport {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub frame_count: usize,
    pub frame_duration_ms: u32,
    /// 0 means loop forever.
    pub loop_count: u16,
    pub bytes_written: u64,
}

impl AnimationReport {
    pub fn size_mb(&self) -> f64 {
        self.bytes_written as f64 / 1_000_000.0
    }
}

/// Outcome of [`make_animation`].
#[derive(Clone, Debug)]
pub struct AnimationRun {
    /// Files that matched the extension filter.
    pub found: usize,
    pub skipped: Vec<FileFailure>,
    pub report: AnimationReport,
}

/// Append the format's extension unless `path` already ends with it (any case).
pub fn with_format_extension(path: &Path, format: OutputFormat) -> PathBuf {
    let ext = format.extension();
    let lower = path.to_string_lossy().to_ascii_lowercase();
    if lower.ends_with(ext) {
        return path.to_path_buf();
    }
    let mut s = OsString::from(path.as_os_str());
    s.push(ext);
    PathBuf::from(s)
}

/// Encode `frames` as a looping animation at `output_path` (extension adjusted to the
/// format). Frames that differ in size from the first are letterboxed onto a white
/// canvas of the first frame's size.
#[tracing::instrument(skip_all, fields(out = %output_path.display(), frames = frames.len()))]
pub fn assemble(
    frames: &FrameSequence,
    spec: &AnimationSpec,
    output_path: &Path,
) -> BatchResult<AnimationReport> {
    let Some(first) = frames.first_dimensions() else {
        return Err(BatchError::assembly("no frames to assemble"));
    };
    let path = with_format_extension(output_path, spec.format);
    let duration_ms = spec.frame_duration_ms();
    let uniform = conform_frames(frames.frames(), first);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            BatchError::encode(format!("create output dir '{}': {e}", parent.display()))
        })?;
    }

    match spec.format {
        OutputFormat::Gif => {
            let f = File::create(&path)
                .map_err(|e| BatchError::encode(format!("create '{}': {e}", path.display())))?;
            let mut w = encode_gif(&uniform, duration_ms, &spec.gif, BufWriter::new(f))?;
            w.flush()
                .map_err(|e| BatchError::encode(format!("write '{}': {e}", path.display())))?;
        }
        OutputFormat::WebP => {
            let bytes = encode_webp(&uniform, duration_ms, &spec.webp)?;
            std::fs::write(&path, bytes)
                .map_err(|e| BatchError::encode(format!("write '{}': {e}", path.display())))?;
        }
    }

    let bytes_written = std::fs::metadata(&path)
        .map_err(|e| BatchError::encode(format!("stat '{}': {e}", path.display())))?
        .len();
    tracing::info!(bytes = bytes_written, duration_ms, "animation written");

    Ok(AnimationReport {
        path,
        format: spec.format,
        frame_count: uniform.len(),
        frame_duration_ms: duration_ms,
        loop_count: 0,
        bytes_written,
    })
}

fn conform_frames(frames: &[RgbImage], size: Dimensions) -> Cow<'_, [RgbImage]> {
    if frames.iter().all(|f| Dimensions::of(f) == size) {
        return Cow::Borrowed(frames);
    }
    let canvas = CanvasSpec::borderless(size, Rgb8::WHITE);
    Cow::Owned(
        frames
            .iter()
            .map(|f| {
                if Dimensions::of(f) == size {
                    f.clone()
                } else {
                    place_on_canvas(f, &canvas)
                }
            })
            .collect(),
    )
}

/// Collect frames from `input_dir` and assemble them into `output_path`.
///
/// No matching file is [`BatchError::EmptyInput`]; matching files of which none
/// decode is [`BatchError::Assembly`].
pub fn make_animation(
    input_dir: &Path,
    output_path: &Path,
    spec: &AnimationSpec,
) -> BatchResult<AnimationRun> {
    let collected = collect_frames(input_dir, &spec.collect_options())?;
    if collected.found == 0 {
        return Err(BatchError::empty_input(input_dir));
    }
    if collected.sequence.is_empty() {
        return Err(BatchError::assembly("no valid frames loaded"));
    }

    let report = assemble(&collected.sequence, spec, output_path)?;
    Ok(AnimationRun {
        found: collected.found,
        skipped: collected.skipped,
        report,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/encode/assemble.rs"]
mod tests;
