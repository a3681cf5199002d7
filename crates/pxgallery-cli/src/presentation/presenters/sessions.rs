use pxgallery_runtime::SessionPlan;
use pxgallery_types::Session;

use super::cmd;
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, PhotoEntry, SessionEntry, SessionListViewModel, StatusBadge,
};

pub fn present_session_list(
    plan: &SessionPlan,
    threshold_minutes: u32,
) -> CommandResultViewModel<SessionListViewModel> {
    let content = SessionListViewModel {
        source_dir: plan.listing.dir.display().to_string(),
        threshold_minutes,
        photo_count: plan.sessions.photo_count(),
        skipped_count: plan.extraction.skipped.len(),
        sessions: plan.sessions.iter().map(session_entry).collect(),
    };

    let badge = StatusBadge::success(format!(
        "Found {} {}",
        content.sessions.len(),
        if content.sessions.len() == 1 {
            "session"
        } else {
            "sessions"
        }
    ));

    let mut result = CommandResultViewModel::new(content).with_badge(badge);

    if result.content.skipped_count > 0 {
        result = result.with_suggestion(
            Guidance::new("See why some files were left out").with_command(cmd::SCAN),
        );
    }

    result.with_suggestion(Guidance::new("Publish these sessions").with_command(cmd::BUILD))
}

fn session_entry(session: &Session) -> SessionEntry {
    let stats = session.stats();
    SessionEntry {
        label: session.label.clone(),
        photo_count: stats.photo_count,
        start: stats.start,
        end: stats.end,
        duration_seconds: stats.duration_seconds,
        photos: session
            .photos
            .iter()
            .map(|p| PhotoEntry {
                name: p.identifier.clone(),
                timestamp: p.timestamp,
            })
            .collect(),
    }
}
