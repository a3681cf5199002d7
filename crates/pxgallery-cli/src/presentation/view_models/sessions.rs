use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct SessionListViewModel {
    pub source_dir: String,
    pub threshold_minutes: u32,
    pub photo_count: usize,
    pub skipped_count: usize,
    pub sessions: Vec<SessionEntry>,
}

#[derive(Debug, Serialize)]
pub struct SessionEntry {
    pub label: String,
    pub photo_count: usize,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    pub duration_seconds: i64,
    pub photos: Vec<PhotoEntry>,
}

#[derive(Debug, Serialize)]
pub struct PhotoEntry {
    pub name: String,
    pub timestamp: NaiveDateTime,
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl CreateView for SessionListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::sessions::SessionListView;
        Box::new(SessionListView::new(self, mode))
    }
}

impl fmt::Display for SessionListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.create_view(ViewMode::default()))
    }
}
