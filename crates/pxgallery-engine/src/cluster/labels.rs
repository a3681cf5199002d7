use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};

/// Long-form date used in labels, e.g. "June 05, 2024".
pub const LABEL_DATE_FORMAT: &str = "%B %d, %Y";

/// Hands out "<date> - Session <n>" labels with a running count per date.
///
/// Numbers are assigned when a session closes, so they follow closing order
/// rather than a precomputed tally of the day.
#[derive(Debug, Default)]
pub struct SessionLabeler {
    issued: HashMap<NaiveDate, usize>,
}

impl SessionLabeler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_label(&mut self, closing_time: NaiveDateTime) -> String {
        let date = closing_time.date();
        let count = self.issued.entry(date).or_insert(0);
        *count += 1;

        format!("{} - Session {}", date.format(LABEL_DATE_FORMAT), count)
    }
}
