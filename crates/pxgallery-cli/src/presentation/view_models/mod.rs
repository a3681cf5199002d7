pub mod build;
pub mod common;
pub mod init;
pub mod result;
pub mod scan;
pub mod sessions;

use std::fmt;

pub use build::{BuildResultViewModel, BuiltSession, MediaSummary};
pub use common::{Guidance, StatusBadge, StatusLevel, ViewMode};
pub use init::{InitOutcome, InitResultViewModel};
pub use result::CommandResultViewModel;
pub use scan::{ScanEntry, ScanResultViewModel};
pub use sessions::{PhotoEntry, SessionEntry, SessionListViewModel};

/// Bridge from a view model to the view that lays it out in a given mode.
pub trait CreateView {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a>;
}
