use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

#[derive(Debug, Serialize)]
pub struct ScanResultViewModel {
    pub source_dir: String,
    pub timestamped_count: usize,
    pub skipped_count: usize,
    pub entries: Vec<ScanEntry>,
}

/// One file in the photos directory. Exactly one of `timestamp` and
/// `skip_reason` is set.
#[derive(Debug, Serialize)]
pub struct ScanEntry {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_reason: Option<String>,
}

impl CreateView for ScanResultViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::scan::ScanResultView;
        Box::new(ScanResultView::new(self, mode))
    }
}

impl fmt::Display for ScanResultViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.create_view(ViewMode::default()))
    }
}
