//! Sample photos.
//!
//! Files are real (small) JPEGs so the thumbnail stage has something to
//! decode. Names follow the `PXL_YYYYMMDD_HHMMSSmmm.jpg` pattern.

use anyhow::Result;
use image::{Rgb, RgbImage};
use std::path::Path;

/// `PXL_20240605_090000000.jpg` for `pxl_name("20240605", "090000")`.
pub fn pxl_name(date: &str, time: &str) -> String {
    format!("PXL_{}_{}000.jpg", date, time)
}

/// One morning of shooting: two photos ten minutes apart, then one more
/// fifty minutes later. Clusters into two sessions at the default threshold.
pub fn morning_shoot() -> Vec<String> {
    vec![
        pxl_name("20240605", "090000"),
        pxl_name("20240605", "091000"),
        pxl_name("20240605", "100000"),
    ]
}

/// Photos across two days with an isolated shot in between.
pub fn two_day_trip() -> Vec<String> {
    vec![
        pxl_name("20240605", "090000"),
        pxl_name("20240605", "092500"),
        pxl_name("20240605", "140000"),
        pxl_name("20240606", "080000"),
        pxl_name("20240606", "081500"),
    ]
}

/// Files that sit next to photos but never carry a usable timestamp.
pub const NOISE: &[&str] = &[
    "IMG_0001.jpg",
    "PXL_20240605.jpg",
    "PXL_20241305_090000000.jpg",
    "notes.txt",
];

/// Write a JPEG whose content depends on `seed`, so thumbnails of
/// different fixtures differ.
pub fn write_jpeg(path: &Path, width: u32, height: u32, seed: u8) -> Result<()> {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            (x % 256) as u8,
            (y % 256) as u8,
            seed.wrapping_mul(37),
        ])
    });
    img.save(path)?;
    Ok(())
}
