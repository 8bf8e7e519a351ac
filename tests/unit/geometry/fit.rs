use super::*;

fn dims(width: u32, height: u32) -> Dimensions {
    Dimensions::new(width, height).unwrap()
}

#[test]
fn canvas_rejects_out_of_range_ratio() {
    let target = dims(100, 100);
    assert!(CanvasSpec::new(target, 0.5, Rgb8::WHITE).is_err());
    assert!(CanvasSpec::new(target, -0.01, Rgb8::WHITE).is_err());
    assert!(CanvasSpec::new(target, f64::NAN, Rgb8::WHITE).is_err());
    assert!(CanvasSpec::new(target, 0.0, Rgb8::WHITE).is_ok());
    assert!(CanvasSpec::new(target, 0.49, Rgb8::WHITE).is_ok());
}

#[test]
fn content_box_never_empty() {
    for len in 1..50u32 {
        let canvas = CanvasSpec::new(dims(len, len), 0.499, Rgb8::WHITE).unwrap();
        let content = canvas.content_box();
        assert!(content.width >= 1 && content.height >= 1, "len={len}");
    }
}

#[test]
fn portrait_tall_source_clamps_height() {
    let canvas = CanvasSpec::instagram_portrait();
    assert_eq!(canvas.content_box(), dims(1296, 1620));

    let placed = fit_and_center(dims(1000, 2000), &canvas);
    assert_eq!(placed.size, dims(810, 1620));
    assert_eq!(placed.offset, Offset { x: 315, y: 90 });
}

#[test]
fn wide_source_clamps_width() {
    let canvas = CanvasSpec::instagram_portrait();
    let placed = fit_and_center(dims(3000, 2000), &canvas);
    assert_eq!(placed.size, dims(1296, 864));
    assert_eq!(placed.offset, Offset { x: 72, y: 468 });
}

#[test]
fn small_source_is_upscaled() {
    let canvas = CanvasSpec::new(dims(200, 100), 0.0, Rgb8::WHITE).unwrap();
    let placed = fit_and_center(dims(10, 10), &canvas);
    assert_eq!(placed.size, dims(100, 100));
    assert_eq!(placed.offset, Offset { x: 50, y: 0 });
}

#[test]
fn equal_aspect_fills_content_box() {
    let canvas = CanvasSpec::new(dims(100, 50), 0.1, Rgb8::WHITE).unwrap();
    let placed = fit_and_center(dims(40, 20), &canvas);
    assert_eq!(placed.size, canvas.content_box());
    assert_eq!(placed.offset, Offset { x: 10, y: 5 });
}

#[test]
fn extreme_aspect_keeps_one_pixel() {
    let canvas = CanvasSpec::new(dims(100, 100), 0.0, Rgb8::WHITE).unwrap();
    let placed = fit_and_center(dims(10_000, 1), &canvas);
    assert_eq!(placed.size, dims(100, 1));
    assert_eq!(placed.offset, Offset { x: 0, y: 49 });
}

#[test]
fn odd_leftover_goes_to_trailing_side() {
    let canvas = CanvasSpec::new(dims(11, 11), 0.0, Rgb8::WHITE).unwrap();
    let placed = fit_and_center(dims(2, 1), &canvas);
    assert_eq!(placed.size, dims(11, 5));
    assert_eq!(placed.offset, Offset { x: 0, y: 3 });
}

#[test]
fn placement_invariants_hold_across_sizes() {
    let canvases = [
        CanvasSpec::instagram_portrait(),
        CanvasSpec::new(dims(101, 77), 0.13, Rgb8::WHITE).unwrap(),
        CanvasSpec::new(dims(3, 500), 0.25, Rgb8::WHITE).unwrap(),
        CanvasSpec::borderless(dims(64, 48), Rgb8::WHITE),
    ];
    let sources = [1u32, 2, 3, 7, 50, 99, 640, 1001, 4000];

    for canvas in &canvases {
        let content = canvas.content_box();
        let target = canvas.target();
        for &sw in &sources {
            for &sh in &sources {
                let p = fit_and_center(dims(sw, sh), canvas);

                assert!(p.size.width <= content.width);
                assert!(p.size.height <= content.height);
                assert!(p.size.width == content.width || p.size.height == content.height);

                let lead_x = 2 * p.offset.x + p.size.width;
                let lead_y = 2 * p.offset.y + p.size.height;
                assert!(lead_x == target.width || lead_x + 1 == target.width);
                assert!(lead_y == target.height || lead_y + 1 == target.height);

                // Within one pixel of the source aspect on the scaled axis.
                if p.size.width == content.width {
                    let exact = f64::from(p.size.width) * f64::from(sh) / f64::from(sw);
                    assert!((f64::from(p.size.height) - exact).abs() < 1.0 || p.size.height == 1);
                } else {
                    let exact = f64::from(p.size.height) * f64::from(sw) / f64::from(sh);
                    assert!((f64::from(p.size.width) - exact).abs() < 1.0 || p.size.width == 1);
                }
            }
        }
    }
}

#[test]
fn clamp_width_only_downscales() {
    assert_eq!(clamp_width(dims(640, 480), 720), dims(640, 480));
    assert_eq!(clamp_width(dims(720, 480), 720), dims(720, 480));
    assert_eq!(clamp_width(dims(1440, 1080), 720), dims(720, 540));
    assert_eq!(clamp_width(dims(1000, 333), 720), dims(720, 239));
    assert_eq!(clamp_width(dims(10_000, 1), 720), dims(720, 1));
}
