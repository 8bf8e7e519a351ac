use crate::foundation::error::{BatchError, BatchResult};

/// Pixel size of a raster. Both components are at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> BatchResult<Self> {
        if width == 0 || height == 0 {
            return Err(BatchError::validation(format!(
                "dimensions must be non-zero, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// Size of a decoded image. Decoders never produce empty rasters, so the
    /// components are lifted to 1 rather than rejected.
    pub fn of<I: image::GenericImageView>(img: &I) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    pub fn area(self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Top-left placement of content inside a canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Offset {
    pub x: u32,
    pub y: u32,
}

/// Opaque 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb8> for image::Rgb<u8> {
    fn from(c: Rgb8) -> Self {
        image::Rgb([c.r, c.g, c.b])
    }
}

/// Whole frames per second, always > 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Fps(u32);

impl Fps {
    pub fn new(fps: u32) -> BatchResult<Self> {
        if fps == 0 {
            return Err(BatchError::validation("fps must be > 0"));
        }
        Ok(Self(fps))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Display time of one frame: `round(1000 / fps)` milliseconds, never below 1.
    pub fn frame_duration_ms(self) -> u32 {
        ((1000 + self.0 / 2) / self.0).max(1)
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self(10)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
