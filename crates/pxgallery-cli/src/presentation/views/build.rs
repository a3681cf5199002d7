use std::fmt;

use super::sessions::{file_count, photo_count, session_count};
use crate::presentation::formatters::humanize_bytes;
use crate::presentation::formatters::style::{bold, cyan, yellow};
use crate::presentation::view_models::{BuildResultViewModel, ViewMode};

// --------------------------------------------------------
// Build Result View
// --------------------------------------------------------

pub struct BuildResultView<'a> {
    data: &'a BuildResultViewModel,
    mode: ViewMode,
}

impl<'a> BuildResultView<'a> {
    pub fn new(data: &'a BuildResultViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for BuildResultView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            return writeln!(f, "{}", self.data.output_file);
        }

        writeln!(
            f,
            "Photos:     {} in {}",
            photo_count(self.data.photo_count),
            session_count(self.data.session_count)
        )?;
        if self.data.skipped_count > 0 {
            writeln!(
                f,
                "Skipped:    {}",
                yellow(format!(
                    "{} without a timestamp in the name",
                    file_count(self.data.skipped_count)
                ))
            )?;
        }

        match &self.data.media {
            Some(media) => {
                write!(
                    f,
                    "Thumbnails: {} generated, {} up to date",
                    media.generated, media.reused
                )?;
                if media.failed > 0 {
                    write!(f, ", {}", yellow(format!("{} failed", media.failed)))?;
                }
                writeln!(f)?;
            }
            None => writeln!(f, "Thumbnails: skipped (linking originals)")?,
        }

        writeln!(
            f,
            "Output:     {} ({})",
            cyan(&self.data.output_file),
            humanize_bytes(self.data.bytes_written)
        )?;

        if self.mode == ViewMode::Verbose {
            writeln!(f)?;
            for session in &self.data.sessions {
                writeln!(
                    f,
                    "  {}  {}",
                    bold(&session.label),
                    photo_count(session.photo_count)
                )?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{BuiltSession, MediaSummary};

    fn sample(media: Option<MediaSummary>) -> BuildResultViewModel {
        BuildResultViewModel {
            output_file: "collection_gallery.html".to_string(),
            bytes_written: 2048,
            photo_count: 3,
            session_count: 2,
            skipped_count: 0,
            sessions: vec![
                BuiltSession {
                    label: "June 05, 2024 - Session 1".to_string(),
                    photo_count: 2,
                },
                BuiltSession {
                    label: "June 05, 2024 - Session 2".to_string(),
                    photo_count: 1,
                },
            ],
            media,
        }
    }

    #[test]
    fn test_summary_with_media() {
        let vm = sample(Some(MediaSummary {
            generated: 2,
            reused: 0,
            failed: 1,
        }));
        let out = BuildResultView::new(&vm, ViewMode::Standard).to_string();

        insta::assert_snapshot!(out, @r"
        Photos:     3 photos in 2 sessions
        Thumbnails: 2 generated, 0 up to date, 1 failed
        Output:     collection_gallery.html (2.0 KB)
        ");
    }

    #[test]
    fn test_summary_without_media() {
        let vm = sample(None);
        let out = BuildResultView::new(&vm, ViewMode::Standard).to_string();

        assert!(out.contains("Thumbnails: skipped (linking originals)"));
    }
}
