use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

#[derive(Debug, Serialize)]
pub struct InitResultViewModel {
    pub config_path: String,
    pub outcome: InitOutcome,
    pub source_dir: String,
    pub output_file: String,
    pub threshold_minutes: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InitOutcome {
    Created,
    Overwritten,
    /// The file was left untouched because `--force` was not given.
    KeptExisting,
}

impl CreateView for InitResultViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::init::InitResultView;
        Box::new(InitResultView::new(self, mode))
    }
}

impl fmt::Display for InitResultViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.create_view(ViewMode::default()))
    }
}
