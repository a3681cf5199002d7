//! Capture-time recovery from camera filenames.
//!
//! Phones name their shots `<prefix>_<YYYYMMDD>_<HHMMSS...>.<ext>`, e.g.
//! `PXL_20240605_091502123.jpg`. Only the first six characters of the third
//! segment are read as the clock time; anything after (milliseconds, burst
//! tags, `.MP` suffixes) is ignored.

use std::fmt;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use pxgallery_types::PhotoRecord;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PREFIX: &str = "PXL";
pub const DEFAULT_EXTENSION: &str = "jpg";

/// Which filenames take part in clustering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingConvention {
    /// Leading segment before the first underscore.
    pub prefix: String,
    /// Accepted extensions without the dot, compared case-insensitively.
    pub extensions: Vec<String>,
}

impl Default for NamingConvention {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            extensions: vec![DEFAULT_EXTENSION.to_string()],
        }
    }
}

/// Why a filename did not yield a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    UnsupportedExtension,
    BadPrefix,
    MissingSegments,
    BadDate,
    BadTime,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::UnsupportedExtension => write!(f, "unsupported extension"),
            SkipReason::BadPrefix => write!(f, "unrecognized prefix"),
            SkipReason::MissingSegments => write!(f, "missing date/time segments"),
            SkipReason::BadDate => write!(f, "invalid date token"),
            SkipReason::BadTime => write!(f, "invalid time token"),
        }
    }
}

/// Outcome of looking at a single filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    Parsed(PhotoRecord),
    Skipped(SkipReason),
}

impl Extraction {
    pub fn record(self) -> Option<PhotoRecord> {
        match self {
            Extraction::Parsed(record) => Some(record),
            Extraction::Skipped(_) => None,
        }
    }
}

/// Records plus everything that was filtered out, for diagnostics.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExtractReport {
    pub records: Vec<PhotoRecord>,
    pub skipped: Vec<(String, SkipReason)>,
}

impl NamingConvention {
    pub fn new(prefix: impl Into<String>, extensions: Vec<String>) -> Self {
        Self {
            prefix: prefix.into(),
            extensions,
        }
    }

    /// Whether the file is an image this convention accepts, regardless of
    /// whether its name carries a timestamp.
    pub fn accepts_extension(&self, name: &str) -> bool {
        let Some(ext) = Path::new(name).extension().and_then(|e| e.to_str()) else {
            return false;
        };

        self.extensions
            .iter()
            .any(|accepted| accepted.trim_start_matches('.').eq_ignore_ascii_case(ext))
    }

    pub fn classify(&self, name: &str) -> Extraction {
        match self.parse(name) {
            Ok(timestamp) => Extraction::Parsed(PhotoRecord::new(name, timestamp)),
            Err(reason) => Extraction::Skipped(reason),
        }
    }

    /// Keep every filename that follows the convention; the rest are dropped.
    ///
    /// Output order follows input order; callers sort before clustering.
    pub fn extract_records<I, S>(&self, names: I) -> Vec<PhotoRecord>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .filter_map(|name| self.classify(name.as_ref()).record())
            .collect()
    }

    pub fn extract_report<I, S>(&self, names: I) -> ExtractReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = ExtractReport::default();

        for name in names {
            let name = name.as_ref();
            match self.classify(name) {
                Extraction::Parsed(record) => report.records.push(record),
                Extraction::Skipped(reason) => {
                    tracing::debug!(file = name, %reason, "skipping file");
                    report.skipped.push((name.to_string(), reason));
                }
            }
        }

        report
    }

    fn parse(&self, name: &str) -> Result<NaiveDateTime, SkipReason> {
        if !self.accepts_extension(name) {
            return Err(SkipReason::UnsupportedExtension);
        }

        let parts: Vec<&str> = name.split('_').collect();
        if parts[0] != self.prefix {
            return Err(SkipReason::BadPrefix);
        }
        if parts.len() < 3 {
            return Err(SkipReason::MissingSegments);
        }

        let date = parse_date_token(parts[1]).ok_or(SkipReason::BadDate)?;
        let time = parse_time_token(parts[2]).ok_or(SkipReason::BadTime)?;

        Ok(date.and_time(time))
    }
}

fn parse_date_token(token: &str) -> Option<NaiveDate> {
    if token.len() != 8 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(token, "%Y%m%d").ok()
}

fn parse_time_token(token: &str) -> Option<NaiveTime> {
    let hhmmss = token.get(..6)?;
    if !hhmmss.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // chrono reads second 60 as a leap second; a camera clock never writes one.
    if &hhmmss[4..] > "59" {
        return None;
    }
    NaiveTime::parse_from_str(hhmmss, "%H%M%S").ok()
}
