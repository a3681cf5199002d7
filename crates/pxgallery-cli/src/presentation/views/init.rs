use std::fmt;

use crate::presentation::view_models::{InitResultViewModel, ViewMode};

pub struct InitResultView<'a> {
    data: &'a InitResultViewModel,
    mode: ViewMode,
}

impl<'a> InitResultView<'a> {
    pub fn new(data: &'a InitResultViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for InitResultView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Config:       {}", self.data.config_path)?;
        if self.mode == ViewMode::Minimal {
            return Ok(());
        }
        writeln!(f, "Photos from:  {}", self.data.source_dir)?;
        writeln!(f, "Gallery page: {}", self.data.output_file)?;
        writeln!(f, "Session gap:  {} min", self.data.threshold_minutes)?;
        Ok(())
    }
}
