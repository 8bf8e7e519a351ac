//! padframe batch-processes folders of images.
//!
//! Two pipelines share this crate:
//!
//! 1. **Pad**: `directory -> [decode -> fit_and_center -> paste -> encode] -> <dir>/output/`
//! 2. **Animate**: `directory -> FrameSequence -> assemble -> .gif | .webp`
//!
//! Both are single-threaded and strictly sequential. Per-file decode failures are
//! recorded and skipped where the pipeline allows it; whole-batch failures surface as
//! [`BatchError`].
//!
//! The only arithmetic with real invariants lives in [`fit_and_center`] and
//! [`clamp_width`]. Decoding, resampling and encoding are delegated to `image`, `gif`
//! and `webp-animation`.
#![forbid(unsafe_code)]

mod assets;
mod encode;
mod foundation;
mod frames;
mod geometry;
mod pad;

/// Logging setup shared by the command-line binaries.
pub mod logging;

pub use assets::decode::{decode_file, decode_image};
pub use assets::scan::{ImageExtensions, find_images};
pub use encode::assemble::{
    AnimationReport, AnimationRun, AnimationSpec, OutputFormat, assemble, make_animation,
    with_format_extension,
};
pub use encode::gif::{GifTuning, encode_gif};
pub use encode::webp::{WebpTuning, encode_webp};
pub use foundation::core::{Dimensions, Fps, Offset, Rgb8};
pub use foundation::error::{BatchError, BatchResult, FileFailure};
pub use frames::collect::{CollectOptions, Collected, FrameSequence, collect_frames};
pub use geometry::fit::{CanvasSpec, Placement, clamp_width, fit_and_center};
pub use pad::batch::{PadConfig, PadReport, pad_file, pad_image, process_directory};
