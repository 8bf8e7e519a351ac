use image::{RgbImage, RgbaImage, buffer::ConvertBuffer as _};
use webp_animation::{
    AnimParams, Encoder, EncoderOptions, EncodingConfig, EncodingType, LossyEncodingConfig,
};

use crate::foundation::error::{BatchError, BatchResult};

/// Lossy animated WebP settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WebpTuning {
    /// 0 (smallest) to 100 (best).
    pub quality: f32,
    /// Compression effort, 0 (fast) to 6 (slowest, smallest output).
    pub method: usize,
}

impl Default for WebpTuning {
    fn default() -> Self {
        Self {
            quality: 80.0,
            method: 6,
        }
    }
}

/// Encode equally sized frames as an infinitely looping animated WebP.
pub fn encode_webp(
    frames: &[RgbImage],
    duration_ms: u32,
    tuning: &WebpTuning,
) -> BatchResult<Vec<u8>> {
    let Some(first) = frames.first() else {
        return Err(BatchError::assembly("cannot encode a WebP without frames"));
    };
    let dims = first.dimensions();

    let options = EncoderOptions {
        anim_params: AnimParams { loop_count: 0 },
        encoding_config: Some(EncodingConfig {
            encoding_type: EncodingType::Lossy(LossyEncodingConfig::default()),
            quality: tuning.quality.clamp(0.0, 100.0),
            method: tuning.method.min(6),
        }),
        ..Default::default()
    };
    let mut encoder = Encoder::new_with_options(dims, options)
        .map_err(|e| BatchError::encode(format!("webp encoder init: {e:?}")))?;

    for (i, img) in frames.iter().enumerate() {
        if img.dimensions() != dims {
            return Err(BatchError::assembly(format!(
                "frame {i} is {}x{}, expected {}x{}",
                img.width(),
                img.height(),
                dims.0,
                dims.1
            )));
        }
        let rgba: RgbaImage = img.convert();
        encoder
            .add_frame(rgba.as_raw(), timestamp_ms(i, duration_ms)?)
            .map_err(|e| BatchError::encode(format!("webp frame {i}: {e:?}")))?;
    }

    let data = encoder
        .finalize(timestamp_ms(frames.len(), duration_ms)?)
        .map_err(|e| BatchError::encode(format!("webp finish: {e:?}")))?;
    Ok(data.to_vec())
}

/// Start time of frame `index` when every frame lasts `duration_ms`.
pub(crate) fn timestamp_ms(index: usize, duration_ms: u32) -> BatchResult<i32> {
    u64::try_from(index)
        .ok()
        .and_then(|i| i.checked_mul(u64::from(duration_ms)))
        .and_then(|t| i32::try_from(t).ok())
        .ok_or_else(|| BatchError::encode("animation too long for webp timestamps"))
}

#[cfg(test)]
#[path = "../../tests/unit/encode/webp.rs"]
mod tests;
