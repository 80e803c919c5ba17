//! Domain layer unit tests
//!
//! Signature testers, weight threshold, orientation and naming rules.

mod common;

use proptest::prelude::*;
use rstest::*;
use spotlight_harvest::domain::entities::{CandidateFile, ClassifiedImage, ImageType, Orientation};
use spotlight_harvest::domain::services::{
    detect_background_type, image_dimensions, is_background_image, is_horizontal,
    passes_weight_filter, screen, Rejection, Screening,
};
use spotlight_harvest::domain::services::filter::exceeds_weight_threshold;
use spotlight_harvest::HarvestError;
use std::path::PathBuf;
use tempfile::tempdir;

const JFIF_HEADER: [u8; 12] = [
    0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00, 0x01,
];
const EXIF_HEADER: [u8; 12] = [
    0xFF, 0xD8, 0xFF, 0xE1, 0x00, 0x10, b'E', b'x', b'i', b'f', 0x00, 0x00,
];

// ============================================================================
// ImageType Tests
// ============================================================================

#[rstest]
#[case(ImageType::Jpeg, "jpeg")]
#[case(ImageType::Png, "png")]
#[case(ImageType::Gif, "gif")]
#[case(ImageType::Tiff, "tiff")]
#[case(ImageType::Bmp, "bmp")]
#[case(ImageType::WebP, "webp")]
fn test_image_type_extension(#[case] image_type: ImageType, #[case] expected: &str) {
    assert_eq!(image_type.extension(), expected);
    assert_eq!(expected.parse::<ImageType>().unwrap(), image_type);
}

#[rstest]
#[case(&JFIF_HEADER, ImageType::Jpeg)]
#[case(&EXIF_HEADER, ImageType::Jpeg)]
#[case(&[0xFF, 0xD8, 0xFF, 0xDB, 0x00, 0x43], ImageType::Jpeg)]
#[case(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00], ImageType::Png)]
#[case(b"GIF89a\x01\x00", ImageType::Gif)]
#[case(b"GIF87a\x01\x00", ImageType::Gif)]
#[case(b"II*\x00\x08\x00\x00\x00", ImageType::Tiff)]
#[case(b"MM\x00*\x00\x00\x00\x08", ImageType::Tiff)]
#[case(b"BM\x36\x00\x00\x00", ImageType::Bmp)]
#[case(b"RIFF\x24\x00\x00\x00WEBPVP8 ", ImageType::WebP)]
fn test_signature_detection(#[case] header: &[u8], #[case] expected: ImageType) {
    assert_eq!(ImageType::detect(header, &ImageType::ALL), Some(expected));
}

#[rstest]
#[case(&[0x00, 0x01, 0x02, 0x03])]
#[case(&[0xFF, 0xD8, 0xFF, 0xE0])]
#[case(b"RIFF\x24\x00\x00\x00WAVE")]
#[case(&[])]
fn test_no_signature_for_unknown_data(#[case] header: &[u8]) {
    assert_eq!(ImageType::detect(header, &ImageType::ALL), None);
}

#[rstest]
fn test_default_types_ignore_png() {
    let png = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
    assert_eq!(
        ImageType::detect(&png, &ImageType::DEFAULT_BACKGROUND_TYPES),
        None
    );
}

#[rstest]
#[case(&[ImageType::Tiff, ImageType::Jpeg])]
#[case(&[ImageType::Jpeg, ImageType::Tiff])]
fn test_jpeg_wins_over_tiff_regardless_of_list_order(#[case] allowed: &[ImageType]) {
    let header = b"II\x00\x00\x00\x00JFIF\x00\x01";
    assert_eq!(ImageType::detect(header, allowed), Some(ImageType::Jpeg));
}

#[rstest]
fn test_parse_list_case_insensitive() {
    let types = ImageType::parse_list(&["TIFF", " jpeg "]).unwrap();
    assert_eq!(types, vec![ImageType::Tiff, ImageType::Jpeg]);
}

#[rstest]
fn test_parse_list_rejects_unknown_tag() {
    let err = ImageType::parse_list(&["jpeg", "heic"]).unwrap_err();
    assert!(matches!(err, HarvestError::UnknownImageType(ref tag) if tag == "heic"));
}

// ============================================================================
// Filter Tests
// ============================================================================

#[rstest]
#[case(0, false)]
#[case(399_999, false)]
#[case(400_000, false)]
#[case(400_001, true)]
#[case(5_000_000, true)]
fn test_weight_threshold_boundary(#[case] size: u64, #[case] expected: bool) {
    assert_eq!(exceeds_weight_threshold(size), expected);
}

proptest! {
    #[test]
    fn prop_weight_threshold_is_decimal_kb(size in 0u64..10_000_000) {
        prop_assert_eq!(exceeds_weight_threshold(size), size as f64 / 1000.0 > 400.0);
    }
}

#[rstest]
#[case(400_000, false)]
#[case(400_001, true)]
fn test_passes_weight_filter_on_disk(#[case] size: usize, #[case] expected: bool) {
    let dir = tempdir().unwrap();
    let path = common::write_bytes(dir.path(), "asset", &vec![0u8; size]);
    assert_eq!(passes_weight_filter(&path).unwrap(), expected);
}

#[rstest]
fn test_is_background_image_defaults() {
    let dir = tempdir().unwrap();
    let defaults = ImageType::DEFAULT_BACKGROUND_TYPES;

    let jpeg = common::write_bytes(dir.path(), "jpeg", &JFIF_HEADER);
    let tiff = common::write_bytes(dir.path(), "tiff", b"MM\x00*");
    let noise = common::write_bytes(dir.path(), "noise", &[0x13, 0x37, 0x00, 0x42, 0x99]);

    assert!(is_background_image(&jpeg, &defaults).unwrap());
    assert!(is_background_image(&tiff, &defaults).unwrap());
    assert!(!is_background_image(&noise, &defaults).unwrap());
    assert_eq!(
        detect_background_type(&jpeg, &defaults).unwrap(),
        Some(ImageType::Jpeg)
    );
}

#[rstest]
fn test_empty_allow_list_uses_defaults() {
    let dir = tempdir().unwrap();
    let jpeg = common::write_bytes(dir.path(), "jpeg", &JFIF_HEADER);
    let png = common::write_bytes(
        dir.path(),
        "png",
        &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A],
    );

    assert_eq!(
        detect_background_type(&jpeg, &[]).unwrap(),
        Some(ImageType::Jpeg)
    );
    assert!(!is_background_image(&png, &[]).unwrap());
}

#[rstest]
fn test_is_background_image_missing_file() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("gone");
    assert!(matches!(
        is_background_image(&missing, &ImageType::DEFAULT_BACKGROUND_TYPES),
        Err(HarvestError::Io(_))
    ));
}

#[rstest]
fn test_screen_rejections() {
    let dir = tempdir().unwrap();
    let defaults = ImageType::DEFAULT_BACKGROUND_TYPES;

    let light = common::write_bytes(dir.path(), "light", &JFIF_HEADER);
    let noise = common::write_bytes(dir.path(), "noise", &vec![0x42; 500_000]);
    let sub = dir.path().join("sub");
    std::fs::create_dir(&sub).unwrap();

    assert_eq!(
        screen(&light, &defaults).unwrap(),
        Screening::Rejected(Rejection::TooLight)
    );
    assert_eq!(
        screen(&noise, &defaults).unwrap(),
        Screening::Rejected(Rejection::UnrecognisedType)
    );
    assert_eq!(
        screen(&sub, &defaults).unwrap(),
        Screening::Rejected(Rejection::NotAFile)
    );
}

#[rstest]
fn test_screen_accepts_heavy_jpeg() {
    let dir = tempdir().unwrap();
    let path = common::write_jpeg(dir.path(), "a1b2", 64, 32, 450_000);

    match screen(&path, &ImageType::DEFAULT_BACKGROUND_TYPES).unwrap() {
        Screening::Accepted(candidate) => {
            assert_eq!(candidate.image_type(), ImageType::Jpeg);
            assert_eq!(candidate.size(), 450_000);
        }
        other => panic!("expected candidate, got {:?}", other),
    }
}

// ============================================================================
// Classifier Tests
// ============================================================================

#[rstest]
#[case(100, 50, true)]
#[case(50, 100, false)]
#[case(100, 100, true)]
fn test_is_horizontal(#[case] width: u32, #[case] height: u32, #[case] expected: bool) {
    let dir = tempdir().unwrap();
    let path = common::write_jpeg(dir.path(), "img", width, height, 20_000);

    assert_eq!(image_dimensions(&path).unwrap(), (width, height));
    assert_eq!(is_horizontal(&path).unwrap(), expected);
}

#[rstest]
fn test_is_horizontal_reads_tiff() {
    let dir = tempdir().unwrap();
    let path = common::write_tiff(dir.path(), "img", 30, 60, 10_000);
    assert!(!is_horizontal(&path).unwrap());
}

#[rstest]
fn test_undecodable_image_is_decode_error() {
    let dir = tempdir().unwrap();
    let path = common::write_fake_tiff(dir.path(), "broken", 1_000);
    assert!(matches!(
        image_dimensions(&path),
        Err(HarvestError::Decode { .. })
    ));
}

// ============================================================================
// Entity Tests
// ============================================================================

#[rstest]
#[case(1920, 1080, Orientation::Horizontal)]
#[case(1080, 1920, Orientation::Vertical)]
#[case(512, 512, Orientation::Horizontal)]
fn test_orientation_from_dimensions(
    #[case] width: u32,
    #[case] height: u32,
    #[case] expected: Orientation,
) {
    assert_eq!(Orientation::from_dimensions(width, height), expected);
}

#[fixture]
fn sample_candidate() -> CandidateFile {
    CandidateFile::new(
        PathBuf::from("Assets").join("0f3c9a7e5d"),
        512_000,
        ImageType::Jpeg,
    )
}

#[rstest]
fn test_output_filename(sample_candidate: CandidateFile) {
    assert_eq!(sample_candidate.output_filename(), "0f3c9a7e5d.jpeg");
}

#[rstest]
fn test_classified_image(sample_candidate: CandidateFile) {
    let image = ClassifiedImage::new(sample_candidate, 1080, 1920);
    assert_eq!(image.orientation(), Orientation::Vertical);
    assert!(!image.is_horizontal());
    assert_eq!(image.dimensions(), (1080, 1920));
    assert_eq!(
        image.orientation().folder_name(),
        "Vertical-Background-Images"
    );
}
