use crate::foundation::{
    core::{Dimensions, Offset, Rgb8},
    error::{BatchError, BatchResult},
};

/// Fixed-size output canvas with a minimum whitespace margin on every side.
///
/// The margin ratio lies in `[0, 0.5)`, so the content box is at least 1x1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasSpec {
    target: Dimensions,
    min_whitespace_ratio: f64,
    background: Rgb8,
}

impl CanvasSpec {
    pub fn new(
        target: Dimensions,
        min_whitespace_ratio: f64,
        background: Rgb8,
    ) -> BatchResult<Self> {
        if !min_whitespace_ratio.is_finite() || !(0.0..0.5).contains(&min_whitespace_ratio) {
            return Err(BatchError::validation(format!(
                "min whitespace ratio must be in [0, 0.5), got {min_whitespace_ratio}"
            )));
        }
        Ok(Self {
            target,
            min_whitespace_ratio,
            background,
        })
    }

    /// 1440x1800 (4:5 portrait) with 5% margins on a light grey background.
    pub fn instagram_portrait() -> Self {
        Self {
            target: Dimensions {
                width: 1440,
                height: 1800,
            },
            min_whitespace_ratio: 0.05,
            background: Rgb8::new(242, 242, 242),
        }
    }

    /// Canvas with no margin, used to letterbox frames onto a shared size.
    pub fn borderless(target: Dimensions, background: Rgb8) -> Self {
        Self {
            target,
            min_whitespace_ratio: 0.0,
            background,
        }
    }

    pub fn target(&self) -> Dimensions {
        self.target
    }

    pub fn min_whitespace_ratio(&self) -> f64 {
        self.min_whitespace_ratio
    }

    pub fn background(&self) -> Rgb8 {
        self.background
    }

    /// Area left for content once the margins are taken off each side.
    pub fn content_box(&self) -> Dimensions {
        let pad_w = margin(self.target.width, self.min_whitespace_ratio);
        let pad_h = margin(self.target.height, self.min_whitespace_ratio);
        Dimensions {
            width: self.target.width - 2 * pad_w,
            height: self.target.height - 2 * pad_h,
        }
    }
}

fn margin(len: u32, ratio: f64) -> u32 {
    // ratio < 0.5 keeps 2 * margin strictly below len.
    (f64::from(len) * ratio).floor() as u32
}

/// Where resized content lands on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub size: Dimensions,
    pub offset: Offset,
}

/// Scale `source` to the largest size that fits the canvas content box while keeping
/// its aspect ratio, then center it on the canvas.
///
/// Upscaling is allowed. The constrained axis matches the content box exactly; the
/// other axis is truncated toward zero but never below 1. When the leftover space is
/// odd, the extra pixel goes to the right/bottom.
pub fn fit_and_center(source: Dimensions, canvas: &CanvasSpec) -> Placement {
    let content = canvas.content_box();
    let (iw, ih) = (u64::from(source.width), u64::from(source.height));
    let (max_w, max_h) = (u64::from(content.width), u64::from(content.height));

    // iw/ih > max_w/max_h without leaving integers.
    let size = if iw * max_h > max_w * ih {
        Dimensions {
            width: content.width,
            height: scaled(max_w, ih, iw),
        }
    } else {
        Dimensions {
            width: scaled(max_h, iw, ih),
            height: content.height,
        }
    };

    let target = canvas.target();
    Placement {
        size,
        offset: Offset {
            x: (target.width - size.width) / 2,
            y: (target.height - size.height) / 2,
        },
    }
}

/// Clamp a frame to `max_width`, scaling height proportionally. Never upscales.
pub fn clamp_width(source: Dimensions, max_width: u32) -> Dimensions {
    if source.width <= max_width || max_width == 0 {
        return source;
    }
    Dimensions {
        width: max_width,
        height: scaled(
            u64::from(max_width),
            u64::from(source.height),
            u64::from(source.width),
        ),
    }
}

fn scaled(len: u64, num: u64, den: u64) -> u32 {
    // Result never exceeds `len`, which came from a u32.
    ((len * num) / den).max(1) as u32
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/fit.rs"]
mod tests;
