use std::path::Path;

use crate::foundation::error::{BatchError, BatchResult};

/// Decode an in-memory image, sniffing the format from its content.
pub fn decode_image(bytes: &[u8]) -> Result<image::DynamicImage, image::ImageError> {
    image::load_from_memory(bytes)
}

/// Read and decode one file. The whole file is read up front, so the handle is closed
/// before decoding starts, on success and on failure alike.
pub fn decode_file(path: &Path) -> BatchResult<image::DynamicImage> {
    let bytes = std::fs::read(path)
        .map_err(|e| BatchError::decode(path, image::ImageError::IoError(e)))?;
    decode_image(&bytes).map_err(|e| BatchError::decode(path, e))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
