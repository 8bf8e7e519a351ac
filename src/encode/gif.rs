use std::io::Write;

use image::RgbImage;

use crate::foundation::error::{BatchError, BatchResult};

/// GIF-specific encoder settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GifTuning {
    /// NeuQuant sampling speed, 1 (best palette) to 30 (fastest).
    pub quantizer_speed: i32,
    /// Clear each frame to the background before drawing the next.
    pub dispose_to_background: bool,
}

impl Default for GifTuning {
    fn default() -> Self {
        Self {
            quantizer_speed: 10,
            dispose_to_background: true,
        }
    }
}

/// GIF delays are stored in hundredths of a second.
pub(crate) fn delay_centis(duration_ms: u32) -> u16 {
    let cs = (duration_ms.saturating_add(5) / 10).max(1);
    u16::try_from(cs).unwrap_or(u16::MAX)
}

/// Encode equally sized frames as an infinitely looping GIF into `writer`.
///
/// Each frame gets its own quantized palette. Returns the writer once the trailer
/// has been written.
pub fn encode_gif<W: Write>(
    frames: &[RgbImage],
    duration_ms: u32,
    tuning: &GifTuning,
    writer: W,
) -> BatchResult<W> {
    let Some(first) = frames.first() else {
        return Err(BatchError::assembly("cannot encode a GIF without frames"));
    };
    let (width, height) = gif_dims(first)?;

    let mut encoder = ::gif::Encoder::new(writer, width, height, &[])
        .map_err(|e| BatchError::encode(format!("gif encoder init: {e}")))?;
    encoder
        .set_repeat(::gif::Repeat::Infinite)
        .map_err(|e| BatchError::encode(format!("gif set repeat: {e}")))?;

    let delay = delay_centis(duration_ms);
    let speed = tuning.quantizer_speed.clamp(1, 30);
    let dispose = if tuning.dispose_to_background {
        ::gif::DisposalMethod::Background
    } else {
        ::gif::DisposalMethod::Keep
    };

    for (i, img) in frames.iter().enumerate() {
        if gif_dims(img)? != (width, height) {
            return Err(BatchError::assembly(format!(
                "frame {i} is {}x{}, expected {width}x{height}",
                img.width(),
                img.height()
            )));
        }
        let mut frame = ::gif::Frame::from_rgb_speed(width, height, img.as_raw(), speed);
        frame.delay = delay;
        frame.dispose = dispose;
        encoder
            .write_frame(&frame)
            .map_err(|e| BatchError::encode(format!("gif frame {i}: {e}")))?;
    }

    encoder
        .into_inner()
        .map_err(|e| BatchError::encode(format!("gif finish: {e}")))
}

fn gif_dims(img: &RgbImage) -> BatchResult<(u16, u16)> {
    match (u16::try_from(img.width()), u16::try_from(img.height())) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(BatchError::encode(format!(
            "{}x{} exceeds the GIF limit of 65535 pixels per side",
            img.width(),
            img.height()
        ))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
