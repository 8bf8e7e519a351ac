use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        BatchError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(BatchError::input("x").to_string().contains("input error:"));
    assert!(
        BatchError::assembly("x")
            .to_string()
            .contains("assembly error:")
    );
    assert!(BatchError::encode("x").to_string().contains("encode error:"));
    assert!(
        BatchError::empty_input("photos")
            .to_string()
            .contains("no images found in 'photos'")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = BatchError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn decode_failure_names_file_once() {
    let source = image::ImageError::IoError(std::io::Error::other("truncated"));
    let err = BatchError::decode("frames/a.png", source);
    assert!(err.to_string().contains("frames/a.png"));

    let failure = FileFailure::new(Path::new("frames/a.png"), &err);
    assert_eq!(failure.path, PathBuf::from("frames/a.png"));
    assert!(failure.message.contains("truncated"));
    assert!(!failure.message.contains("frames/a.png"));
}
