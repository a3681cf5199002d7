use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

#[derive(Debug, Serialize)]
pub struct BuildResultViewModel {
    pub output_file: String,
    pub bytes_written: usize,
    pub photo_count: usize,
    pub session_count: usize,
    pub skipped_count: usize,
    pub sessions: Vec<BuiltSession>,
    /// Absent when the build ran with `--no-media`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<MediaSummary>,
}

#[derive(Debug, Serialize)]
pub struct BuiltSession {
    pub label: String,
    pub photo_count: usize,
}

#[derive(Debug, Serialize)]
pub struct MediaSummary {
    pub generated: usize,
    pub reused: usize,
    pub failed: usize,
}

impl CreateView for BuildResultViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::build::BuildResultView;
        Box::new(BuildResultView::new(self, mode))
    }
}

impl fmt::Display for BuildResultViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.create_view(ViewMode::default()))
    }
}
