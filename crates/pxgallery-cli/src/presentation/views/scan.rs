use std::fmt;

use super::sessions::file_count;
use crate::presentation::formatters::style::{dim, red};
use crate::presentation::view_models::{ScanResultViewModel, ViewMode};

// --------------------------------------------------------
// Scan Result View
// --------------------------------------------------------

pub struct ScanResultView<'a> {
    data: &'a ScanResultViewModel,
    mode: ViewMode,
}

impl<'a> ScanResultView<'a> {
    pub fn new(data: &'a ScanResultViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    /// Timestamped file names only, for piping into other tools.
    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for entry in &self.data.entries {
            if entry.timestamp.is_some() {
                writeln!(f, "{}", entry.name)?;
            }
        }
        Ok(())
    }

    fn render_table(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let width = self
            .data
            .entries
            .iter()
            .map(|e| e.name.chars().count())
            .max()
            .unwrap_or(0);

        for entry in &self.data.entries {
            match (&entry.timestamp, &entry.skip_reason) {
                (Some(ts), _) => writeln!(
                    f,
                    "  {:<width$}  {}",
                    entry.name,
                    ts.format("%Y-%m-%d %H:%M:%S")
                )?,
                (None, Some(reason)) => writeln!(
                    f,
                    "  {:<width$}  {}",
                    entry.name,
                    red(format!("skipped: {}", reason))
                )?,
                (None, None) => writeln!(f, "  {}", entry.name)?,
            }
        }
        Ok(())
    }

    fn render_standard(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "{} in {}: {} timestamped, {} skipped",
            file_count(self.data.entries.len()),
            self.data.source_dir,
            self.data.timestamped_count,
            self.data.skipped_count
        )?;

        if self.data.entries.is_empty() {
            writeln!(f, "{}", dim("The directory is empty."))?;
            return Ok(());
        }

        writeln!(f)?;
        self.render_table(f)
    }
}

impl<'a> fmt::Display for ScanResultView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_table(f),
            ViewMode::Standard | ViewMode::Verbose => self.render_standard(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::ScanEntry;
    use chrono::NaiveDate;

    fn sample() -> ScanResultViewModel {
        ScanResultViewModel {
            source_dir: "photos".to_string(),
            timestamped_count: 1,
            skipped_count: 2,
            entries: vec![
                ScanEntry {
                    name: "PXL_20240605_090000000.jpg".to_string(),
                    timestamp: NaiveDate::from_ymd_opt(2024, 6, 5)
                        .unwrap()
                        .and_hms_opt(9, 0, 0),
                    skip_reason: None,
                },
                ScanEntry {
                    name: "PXL_2024.jpg".to_string(),
                    timestamp: None,
                    skip_reason: Some("missing date/time segments".to_string()),
                },
                ScanEntry {
                    name: "notes.txt".to_string(),
                    timestamp: None,
                    skip_reason: Some("unsupported extension".to_string()),
                },
            ],
        }
    }

    #[test]
    fn test_standard_view() {
        let vm = sample();
        let out = ScanResultView::new(&vm, ViewMode::Standard).to_string();

        insta::assert_snapshot!(out, @r"
        3 files in photos: 1 timestamped, 2 skipped

          PXL_20240605_090000000.jpg  2024-06-05 09:00:00
          PXL_2024.jpg                skipped: missing date/time segments
          notes.txt                   skipped: unsupported extension
        ");
    }

    #[test]
    fn test_minimal_view_lists_timestamped_names() {
        let vm = sample();
        let out = ScanResultView::new(&vm, ViewMode::Minimal).to_string();

        assert_eq!(out, "PXL_20240605_090000000.jpg\n");
    }
}
