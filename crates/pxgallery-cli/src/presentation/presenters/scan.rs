use pxgallery_engine::{ExtractReport, NamingConvention};
use pxgallery_runtime::SourceListing;

use super::cmd;
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, ScanEntry, ScanResultViewModel, StatusBadge,
};

/// List every scanned file in directory order. Unlike the build, this keeps
/// the skipped files and their reasons in the output.
pub fn present_scan_result(
    listing: &SourceListing,
    extraction: &ExtractReport,
    naming: &NamingConvention,
) -> CommandResultViewModel<ScanResultViewModel> {
    let parsed = extraction.records.iter().map(|record| ScanEntry {
        name: record.identifier.clone(),
        timestamp: Some(record.timestamp),
        skip_reason: None,
    });
    let skipped = extraction.skipped.iter().map(|(name, reason)| ScanEntry {
        name: name.clone(),
        timestamp: None,
        skip_reason: Some(reason.to_string()),
    });

    let mut entries: Vec<ScanEntry> = parsed.chain(skipped).collect();
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    let timestamped_count = entries.iter().filter(|e| e.timestamp.is_some()).count();
    let skipped_count = entries.len() - timestamped_count;

    let badge = if timestamped_count == 0 {
        StatusBadge::warning(format!(
            "No file matches {}_YYYYMMDD_HHMMSS*",
            naming.prefix
        ))
    } else {
        StatusBadge::info(format!(
            "Found {} timestamped {}",
            timestamped_count,
            if timestamped_count == 1 { "photo" } else { "photos" }
        ))
    };

    let content = ScanResultViewModel {
        source_dir: listing.dir.display().to_string(),
        timestamped_count,
        skipped_count,
        entries,
    };

    let result = CommandResultViewModel::new(content).with_badge(badge);
    if timestamped_count > 0 {
        result.with_suggestion(
            Guidance::new("Group them into sessions").with_command(cmd::SESSIONS),
        )
    } else {
        result
    }
}
