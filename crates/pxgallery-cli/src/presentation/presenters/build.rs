use pxgallery_runtime::BuildReport;

use crate::presentation::view_models::{
    BuildResultViewModel, BuiltSession, CommandResultViewModel, Guidance, MediaSummary,
    StatusBadge,
};

pub fn present_build_result(report: &BuildReport) -> CommandResultViewModel<BuildResultViewModel> {
    let media = report.media.as_ref().map(|m| MediaSummary {
        generated: m.generated,
        reused: m.reused,
        failed: m.failed,
    });
    let failed = media.as_ref().map_or(0, |m| m.failed);

    let content = BuildResultViewModel {
        output_file: report.output_file.display().to_string(),
        bytes_written: report.bytes_written,
        photo_count: report.sessions.photo_count(),
        session_count: report.sessions.len(),
        skipped_count: report.skipped,
        sessions: report
            .sessions
            .iter()
            .map(|s| BuiltSession {
                label: s.label.clone(),
                photo_count: s.len(),
            })
            .collect(),
        media,
    };

    let badge = if failed > 0 {
        StatusBadge::warning(format!(
            "Gallery written, {} {} could not be thumbnailed",
            failed,
            if failed == 1 { "photo" } else { "photos" }
        ))
    } else {
        StatusBadge::success("Gallery written")
    };

    let open_hint = Guidance::new("Open it in a browser").with_command(content.output_file.clone());

    CommandResultViewModel::new(content)
        .with_badge(badge)
        .with_suggestion(open_hint)
}
