use std::io::Cursor;

use super::*;

fn solid(width: u32, height: u32, rgb: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(width, height, image::Rgb(rgb))
}

#[test]
fn delay_is_rounded_to_centiseconds() {
    assert_eq!(delay_centis(100), 10);
    assert_eq!(delay_centis(42), 4);
    assert_eq!(delay_centis(45), 5);
    assert_eq!(delay_centis(1), 1);
    assert_eq!(delay_centis(u32::MAX), u16::MAX);
}

#[test]
fn encodes_looping_frames_with_background_disposal() {
    let frames = vec![
        solid(6, 4, [255, 0, 0]),
        solid(6, 4, [0, 255, 0]),
        solid(6, 4, [0, 0, 255]),
    ];
    let bytes = encode_gif(&frames, 100, &GifTuning::default(), Vec::new()).unwrap();
    assert!(bytes.starts_with(b"GIF89a"));

    let mut opts = ::gif::DecodeOptions::new();
    opts.set_color_output(::gif::ColorOutput::RGBA);
    let mut decoder = opts.read_info(Cursor::new(&bytes)).unwrap();
    assert_eq!((decoder.width(), decoder.height()), (6, 4));

    let mut count = 0;
    while let Some(frame) = decoder.read_next_frame().unwrap() {
        assert_eq!(frame.delay, 10);
        assert_eq!(frame.dispose, ::gif::DisposalMethod::Background);
        count += 1;
    }
    assert_eq!(count, 3);

    // Application extension with a loop count of 0 (forever).
    let netscape: &[u8] = b"NETSCAPE2.0\x03\x01\x00\x00";
    assert!(bytes.windows(netscape.len()).any(|w| w == netscape));
}

#[test]
fn rejects_empty_and_mismatched_frames() {
    let err = encode_gif(&[], 100, &GifTuning::default(), Vec::new()).unwrap_err();
    assert!(matches!(err, BatchError::Assembly(_)));

    let frames = vec![solid(4, 4, [0, 0, 0]), solid(5, 4, [0, 0, 0])];
    let err = encode_gif(&frames, 100, &GifTuning::default(), Vec::new()).unwrap_err();
    assert!(matches!(err, BatchError::Assembly(_)));
}
