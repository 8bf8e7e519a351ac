use std::io::Cursor;

use super::*;

#[test]
fn decode_image_png_dimensions() {
    let img = image::RgbaImage::from_raw(2, 1, vec![100u8, 50, 200, 128, 1, 2, 3, 255]).unwrap();

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();

    let decoded = decode_image(&buf).unwrap();
    assert_eq!(decoded.width(), 2);
    assert_eq!(decoded.height(), 1);
    assert_eq!(decoded.to_rgba8().as_raw()[..4], [100u8, 50, 200, 128]);
}

#[test]
fn decode_file_reports_path_on_garbage_and_missing() {
    let dir = std::env::temp_dir().join(format!("padframe_decode_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let bad = dir.join("bad.png");
    std::fs::write(&bad, b"definitely not a png").unwrap();

    let err = decode_file(&bad).unwrap_err();
    assert!(matches!(err, BatchError::Decode { ref path, .. } if path == &bad));

    let missing = dir.join("missing.png");
    assert!(matches!(
        decode_file(&missing).unwrap_err(),
        BatchError::Decode { .. }
    ));

    std::fs::remove_dir_all(&dir).ok();
}
