use crate::config::Config;
use crate::html::{GalleryPage, PhotoTile, SessionSection, relative_href};
use crate::media::{MediaOptions, MediaReport, generate_media};
use crate::scan::SourceListing;
use crate::{Error, Result};
use pxgallery_engine::{ExtractReport, cluster_sessions, sort_records};
use pxgallery_types::SessionMap;
use std::path::{Path, PathBuf};

/// Listing, extraction and clustering of one source directory.
#[derive(Debug, Clone)]
pub struct SessionPlan {
    pub listing: SourceListing,
    pub extraction: ExtractReport,
    pub sessions: SessionMap,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BuildOptions {
    /// Link original images directly instead of generating thumbnails.
    pub skip_media: bool,
}

#[derive(Debug, Clone)]
pub struct BuildReport {
    pub output_file: PathBuf,
    pub sessions: SessionMap,
    /// Files in the source directory that did not follow the naming convention.
    pub skipped: usize,
    pub media: Option<MediaReport>,
    pub bytes_written: usize,
}

/// List the source directory and classify every file in it.
pub fn scan_source(config: &Config) -> Result<(SourceListing, ExtractReport)> {
    let listing = SourceListing::read(&config.source_dir)?;
    let extraction = config.naming().extract_report(&listing.files);
    Ok((listing, extraction))
}

/// Cluster the source directory without writing anything.
///
/// Fails with [`Error::NoPhotos`] when no file carries a usable timestamp.
pub fn plan_sessions(config: &Config) -> Result<SessionPlan> {
    let (listing, mut extraction) = scan_source(config)?;

    sort_records(&mut extraction.records);
    let sessions = cluster_sessions(&extraction.records, &config.cluster_config());

    if sessions.is_empty() {
        return Err(Error::NoPhotos(listing.dir.clone()));
    }

    tracing::info!(
        photos = extraction.records.len(),
        sessions = sessions.len(),
        skipped = extraction.skipped.len(),
        "organized photos into sessions"
    );

    Ok(SessionPlan {
        listing,
        extraction,
        sessions,
    })
}

/// Run the whole pipeline and write the gallery page.
///
/// Nothing is written unless at least one session was found.
pub fn build(config: &Config, options: BuildOptions) -> Result<BuildReport> {
    let plan = plan_sessions(config)?;
    let naming = config.naming();

    let media = if options.skip_media {
        None
    } else {
        let images: Vec<&str> = plan.listing.images(&naming).collect();
        Some(generate_media(
            &plan.listing,
            &images,
            &MediaOptions::from_config(config),
        )?)
    };

    let page_dir = config.output_file.parent().unwrap_or_else(|| Path::new(""));
    let sections = build_sections(&plan, media.as_ref(), page_dir);
    let html = GalleryPage::new(&config.page, &sections).to_string();

    if !page_dir.as_os_str().is_empty() {
        std::fs::create_dir_all(page_dir)?;
    }
    std::fs::write(&config.output_file, &html)?;

    tracing::info!(output = %config.output_file.display(), bytes = html.len(), "wrote gallery page");

    Ok(BuildReport {
        output_file: config.output_file.clone(),
        skipped: plan.extraction.skipped.len(),
        sessions: plan.sessions,
        media,
        bytes_written: html.len(),
    })
}

fn build_sections(
    plan: &SessionPlan,
    media: Option<&MediaReport>,
    page_dir: &Path,
) -> Vec<SessionSection> {
    plan.sessions
        .iter()
        .map(|session| SessionSection {
            label: session.label.clone(),
            tiles: session
                .photos
                .iter()
                .map(|photo| {
                    let name = &photo.identifier;
                    let full_href = relative_href(&plan.listing.path_of(name), page_dir);
                    let asset = media.and_then(|m| m.asset(name));

                    let thumb_href = asset
                        .and_then(|a| a.thumbnail.as_deref())
                        .map(|p| relative_href(p, page_dir))
                        .unwrap_or_else(|| full_href.clone());

                    PhotoTile {
                        name: name.clone(),
                        thumb_href,
                        placeholder: asset.and_then(|a| a.placeholder.clone()),
                        full_href,
                    }
                })
                .collect(),
        })
        .collect()
}
