//! Thumbnail and placeholder generation.
//!
//! Files are processed in parallel. Every output path is derived from the
//! source file name and the rendition size, so no two workers ever touch the
//! same file.
//! A file that fails to decode is logged and counted; the page then falls
//! back to the full-size image for that tile.

use crate::config::Config;
use crate::scan::SourceListing;
use crate::Result;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::{DynamicImage, ImageFormat};
use rayon::prelude::*;
use std::collections::HashMap;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct MediaOptions {
    pub thumbnail_dir: PathBuf,
    pub placeholder_dir: PathBuf,
    pub thumbnail_size: u32,
    pub placeholder_size: u32,
}

impl MediaOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            thumbnail_dir: config.thumbnail_dir.clone(),
            placeholder_dir: config.placeholder_dir.clone(),
            thumbnail_size: config.thumbnail_size,
            placeholder_size: config.placeholder_size,
        }
    }
}

/// Generated renditions for one source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaAsset {
    pub thumbnail: Option<PathBuf>,
    /// `data:` URI of a tiny JPEG.
    pub placeholder: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Generated,
    Reused,
    Failed,
}

#[derive(Debug, Clone, Default)]
pub struct MediaReport {
    assets: HashMap<String, MediaAsset>,
    pub generated: usize,
    pub reused: usize,
    pub failed: usize,
}

impl MediaReport {
    pub fn asset(&self, name: &str) -> Option<&MediaAsset> {
        self.assets.get(name)
    }
}

/// Produce a thumbnail and a placeholder for each named file in the listing.
///
/// Outputs newer than their source are reused as-is.
pub fn generate_media(
    listing: &SourceListing,
    names: &[&str],
    options: &MediaOptions,
) -> Result<MediaReport> {
    fs::create_dir_all(&options.thumbnail_dir)?;
    fs::create_dir_all(&options.placeholder_dir)?;

    let results: Vec<(String, Outcome, MediaAsset)> = names
        .par_iter()
        .map(|name| {
            let source = listing.path_of(name);
            match process_file(&source, name, options) {
                Ok((outcome, asset)) => (name.to_string(), outcome, asset),
                Err(err) => {
                    tracing::warn!(file = *name, error = %err, "could not generate thumbnail");
                    (name.to_string(), Outcome::Failed, MediaAsset::default())
                }
            }
        })
        .collect();

    let mut report = MediaReport::default();
    for (name, outcome, asset) in results {
        match outcome {
            Outcome::Generated => report.generated += 1,
            Outcome::Reused => report.reused += 1,
            Outcome::Failed => report.failed += 1,
        }
        report.assets.insert(name, asset);
    }

    tracing::info!(
        generated = report.generated,
        reused = report.reused,
        failed = report.failed,
        "media generation finished"
    );

    Ok(report)
}

/// Thumbnail file name for a source file at the given edge size.
///
/// The full source name is kept and a fixed suffix appended, so distinct
/// sources always map to distinct outputs. The size is part of the name so a
/// changed `thumbnail_size` never reuses renditions made at the old size.
pub fn thumbnail_name(name: &str, size: u32) -> String {
    format!("{}.{}px.jpg", name, size)
}

pub fn placeholder_name(name: &str, size: u32) -> String {
    format!("{}.{}px.b64", name, size)
}

/// Downscale to `size` pixels on the longest edge and inline as a data URI.
pub fn encode_placeholder(img: &DynamicImage, size: u32) -> Result<String> {
    let small = DynamicImage::ImageRgb8(img.thumbnail(size, size).to_rgb8());
    let mut buf = Cursor::new(Vec::new());
    small.write_to(&mut buf, ImageFormat::Jpeg)?;

    Ok(format!(
        "data:image/jpeg;base64,{}",
        STANDARD.encode(buf.into_inner())
    ))
}

fn process_file(source: &Path, name: &str, options: &MediaOptions) -> Result<(Outcome, MediaAsset)> {
    let thumb_path = options
        .thumbnail_dir
        .join(thumbnail_name(name, options.thumbnail_size));
    let placeholder_path = options
        .placeholder_dir
        .join(placeholder_name(name, options.placeholder_size));

    if is_fresh(&thumb_path, source) && is_fresh(&placeholder_path, source) {
        let placeholder = fs::read_to_string(&placeholder_path)?;
        return Ok((
            Outcome::Reused,
            MediaAsset {
                thumbnail: Some(thumb_path),
                placeholder: Some(placeholder.trim().to_string()),
            },
        ));
    }

    let img = image::open(source)?;

    let thumb = img.thumbnail(options.thumbnail_size, options.thumbnail_size);
    DynamicImage::ImageRgb8(thumb.to_rgb8()).save_with_format(&thumb_path, ImageFormat::Jpeg)?;

    let placeholder = encode_placeholder(&img, options.placeholder_size)?;
    fs::write(&placeholder_path, &placeholder)?;

    tracing::debug!(file = name, "generated thumbnail and placeholder");

    Ok((
        Outcome::Generated,
        MediaAsset {
            thumbnail: Some(thumb_path),
            placeholder: Some(placeholder),
        },
    ))
}

fn is_fresh(output: &Path, source: &Path) -> bool {
    let modified = |p: &Path| fs::metadata(p).and_then(|m| m.modified()).ok();

    match (modified(output), modified(source)) {
        (Some(out), Some(src)) => out >= src,
        _ => false,
    }
}
