//! Fixture builders shared by the integration tests

#![allow(dead_code)]

use image::{DynamicImage, ImageFormat, RgbImage};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Encodes a `width`x`height` image and pads it with zeros to `size` bytes
pub fn encoded_image(format: ImageFormat, width: u32, height: u32, size: usize) -> Vec<u8> {
    let img = DynamicImage::ImageRgb8(RgbImage::new(width, height));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), format).unwrap();
    assert!(
        bytes.len() <= size,
        "encoded fixture is {} bytes, larger than requested {}",
        bytes.len(),
        size
    );
    bytes.resize(size, 0);
    bytes
}

pub fn write_jpeg(dir: &Path, name: &str, width: u32, height: u32, size: usize) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, encoded_image(ImageFormat::Jpeg, width, height, size)).unwrap();
    path
}

pub fn write_tiff(dir: &Path, name: &str, width: u32, height: u32, size: usize) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, encoded_image(ImageFormat::Tiff, width, height, size)).unwrap();
    path
}

/// Matches the TIFF signature tester but is not a decodable image
pub fn write_fake_tiff(dir: &Path, name: &str, size: usize) -> PathBuf {
    let mut bytes = b"IIjunk".to_vec();
    bytes.resize(size, 0x5A);
    let path = dir.join(name);
    fs::write(&path, bytes).unwrap();
    path
}

pub fn write_bytes(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, bytes).unwrap();
    path
}
