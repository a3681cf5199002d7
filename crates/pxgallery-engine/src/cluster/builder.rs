use chrono::NaiveDateTime;
use pxgallery_types::{PhotoRecord, Session};

use super::labels::SessionLabeler;

/// In-progress session; always holds at least the photo that opened it.
pub(super) struct SessionBuilder {
    photos: Vec<PhotoRecord>,
    last_time: NaiveDateTime,
}

impl SessionBuilder {
    pub fn new(first: PhotoRecord) -> Self {
        Self {
            last_time: first.timestamp,
            photos: vec![first],
        }
    }

    pub fn push(&mut self, record: PhotoRecord) {
        self.last_time = record.timestamp;
        self.photos.push(record);
    }

    pub fn last_time(&self) -> NaiveDateTime {
        self.last_time
    }

    /// Label by the date of the last photo added.
    pub fn close(self, labeler: &mut SessionLabeler) -> Session {
        let label = labeler.next_label(self.last_time);
        tracing::debug!(%label, photos = self.photos.len(), "closed session");
        Session::new(label, self.photos)
    }
}
