use pxgallery_runtime::Config;
use std::path::Path;

use super::cmd;
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, InitOutcome, InitResultViewModel, StatusBadge,
};

pub fn present_init_result(
    config_path: &Path,
    outcome: InitOutcome,
    config: &Config,
) -> CommandResultViewModel<InitResultViewModel> {
    let badge = match outcome {
        InitOutcome::Created => StatusBadge::success("Created configuration"),
        InitOutcome::Overwritten => StatusBadge::success("Reset configuration to defaults"),
        InitOutcome::KeptExisting => {
            StatusBadge::info("Configuration already exists (use --force to overwrite)")
        }
    };

    let content = InitResultViewModel {
        config_path: config_path.display().to_string(),
        outcome,
        source_dir: config.source_dir.display().to_string(),
        output_file: config.output_file.display().to_string(),
        threshold_minutes: config.session_threshold_minutes,
    };

    let edit_hint = Guidance::new(format!(
        "Set the page title, introduction and contact email in {}",
        content.config_path
    ));

    CommandResultViewModel::new(content)
        .with_badge(badge)
        .with_suggestion(edit_hint)
        .with_suggestion(Guidance::new("Preview the sessions").with_command(cmd::SESSIONS))
}
