use std::fmt;

use crate::presentation::formatters::style::{bold, cyan, dim};
use crate::presentation::formatters::{format_clock, format_duration, format_span};
use crate::presentation::view_models::{SessionEntry, SessionListViewModel, ViewMode};

// --------------------------------------------------------
// Session List View
// --------------------------------------------------------

pub struct SessionListView<'a> {
    data: &'a SessionListViewModel,
    mode: ViewMode,
}

impl<'a> SessionListView<'a> {
    pub fn new(data: &'a SessionListViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for session in &self.data.sessions {
            writeln!(f, "{}", session.label)?;
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for session in &self.data.sessions {
            writeln!(
                f,
                "{}  {}  {}",
                session.label,
                photo_count(session.photo_count),
                span(session)
            )?;
        }
        Ok(())
    }

    fn render_standard(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render_summary(f)?;

        for session in &self.data.sessions {
            writeln!(f, "{}", bold(&session.label))?;
            writeln!(
                f,
                "  {}  {}  {}",
                photo_count(session.photo_count),
                span(session),
                dim(format!("({})", format_duration(session.duration_seconds)))
            )?;
        }
        Ok(())
    }

    fn render_verbose(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render_summary(f)?;

        for session in &self.data.sessions {
            writeln!(
                f,
                "{}  {}",
                bold(&session.label),
                dim(format!(
                    "({}, {})",
                    photo_count(session.photo_count),
                    format_duration(session.duration_seconds)
                ))
            )?;
            for photo in &session.photos {
                writeln!(f, "  {}  {}", format_clock(photo.timestamp), cyan(&photo.name))?;
            }
        }
        Ok(())
    }

    fn render_summary(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "{} in {} from {} (gap threshold {} min)",
            photo_count(self.data.photo_count),
            session_count(self.data.sessions.len()),
            self.data.source_dir,
            self.data.threshold_minutes
        )?;
        if self.data.skipped_count > 0 {
            writeln!(
                f,
                "{}",
                dim(format!(
                    "Left out {} without a timestamp in the name",
                    file_count(self.data.skipped_count)
                ))
            )?;
        }
        writeln!(f)
    }
}

impl<'a> fmt::Display for SessionListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard => self.render_standard(f),
            ViewMode::Verbose => self.render_verbose(f),
        }
    }
}

fn span(session: &SessionEntry) -> String {
    match (session.start, session.end) {
        (Some(start), Some(end)) => format_span(start, end),
        _ => "-".to_string(),
    }
}

pub(crate) fn photo_count(n: usize) -> String {
    if n == 1 {
        "1 photo".to_string()
    } else {
        format!("{} photos", n)
    }
}

pub(crate) fn session_count(n: usize) -> String {
    if n == 1 {
        "1 session".to_string()
    } else {
        format!("{} sessions", n)
    }
}

pub(crate) fn file_count(n: usize) -> String {
    if n == 1 {
        "1 file".to_string()
    } else {
        format!("{} files", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::PhotoEntry;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 5)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn entry(label: &str, times: &[(u32, u32)]) -> SessionEntry {
        let photos: Vec<PhotoEntry> = times
            .iter()
            .map(|&(h, m)| PhotoEntry {
                name: format!("PXL_20240605_{:02}{:02}00000.jpg", h, m),
                timestamp: at(h, m),
            })
            .collect();
        let start = photos.first().map(|p| p.timestamp);
        let end = photos.last().map(|p| p.timestamp);
        SessionEntry {
            label: label.to_string(),
            photo_count: photos.len(),
            start,
            end,
            duration_seconds: match (start, end) {
                (Some(s), Some(e)) => (e - s).num_seconds(),
                _ => 0,
            },
            photos,
        }
    }

    fn sample() -> SessionListViewModel {
        SessionListViewModel {
            source_dir: "photos".to_string(),
            threshold_minutes: 30,
            photo_count: 3,
            skipped_count: 1,
            sessions: vec![
                entry("June 05, 2024 - Session 1", &[(9, 0), (9, 10)]),
                entry("June 05, 2024 - Session 2", &[(10, 0)]),
            ],
        }
    }

    #[test]
    fn test_standard_view() {
        let vm = sample();
        let out = SessionListView::new(&vm, ViewMode::Standard).to_string();

        insta::assert_snapshot!(out, @r"
        3 photos in 2 sessions from photos (gap threshold 30 min)
        Left out 1 file without a timestamp in the name

        June 05, 2024 - Session 1
          2 photos  09:00:00 – 09:10:00  (10m 0s)
        June 05, 2024 - Session 2
          1 photo  10:00:00 – 10:00:00  (0s)
        ");
    }

    #[test]
    fn test_minimal_view_prints_labels_only() {
        let vm = sample();
        let out = SessionListView::new(&vm, ViewMode::Minimal).to_string();

        assert_eq!(out, "June 05, 2024 - Session 1\nJune 05, 2024 - Session 2\n");
    }

    #[test]
    fn test_verbose_view_lists_every_photo() {
        let vm = sample();
        let out = SessionListView::new(&vm, ViewMode::Verbose).to_string();

        assert!(out.contains("  09:10:00  PXL_20240605_091000000.jpg\n"));
        assert!(out.contains("June 05, 2024 - Session 2  (1 photo, 0s)\n"));
    }
}
