use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::photo::PhotoRecord;

// ==========================================
// 1. Session (one sitting behind the camera)
// ==========================================

/// A maximal run of photos whose consecutive capture times stay within the
/// clustering threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Human-readable key, e.g. "June 05, 2024 - Session 2".
    pub label: String,
    /// Photos in ascending capture order. Never empty.
    pub photos: Vec<PhotoRecord>,
}

impl Session {
    pub fn new(label: impl Into<String>, photos: Vec<PhotoRecord>) -> Self {
        debug_assert!(!photos.is_empty(), "sessions are never empty");
        Self {
            label: label.into(),
            photos,
        }
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn start(&self) -> Option<NaiveDateTime> {
        self.photos.first().map(|p| p.timestamp)
    }

    pub fn end(&self) -> Option<NaiveDateTime> {
        self.photos.last().map(|p| p.timestamp)
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.photos.iter().map(|p| p.identifier.as_str())
    }

    pub fn stats(&self) -> SessionStats {
        let start = self.start();
        let end = self.end();
        let duration_seconds = match (start, end) {
            (Some(start), Some(end)) => (end - start).num_seconds(),
            _ => 0,
        };

        SessionStats {
            photo_count: self.photos.len(),
            start,
            end,
            duration_seconds,
        }
    }
}

/// Derived figures for a single session, used by listings and the page header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub photo_count: usize,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    pub duration_seconds: i64,
}

// ==========================================
// 2. SessionMap (ordered label -> session)
// ==========================================

/// Sessions keyed by label, iterated in the order they were closed.
///
/// Closing order is chronological when the clusterer was fed sorted input,
/// so iteration doubles as the page layout order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionMap {
    sessions: Vec<Session>,
}

impl SessionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a closed session.
    ///
    /// Labels must be unique; the clusterer guarantees this through its
    /// per-date counter.
    pub fn push(&mut self, session: Session) {
        debug_assert!(
            self.get(&session.label).is_none(),
            "duplicate session label: {}",
            session.label
        );
        self.sessions.push(session);
    }

    pub fn get(&self, label: &str) -> Option<&Session> {
        self.sessions.iter().find(|s| s.label == label)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Session> {
        self.sessions.iter()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.sessions.iter().map(|s| s.label.as_str())
    }

    /// Total number of photos across every session.
    pub fn photo_count(&self) -> usize {
        self.sessions.iter().map(Session::len).sum()
    }

    pub fn as_slice(&self) -> &[Session] {
        &self.sessions
    }
}

impl<'a> IntoIterator for &'a SessionMap {
    type Item = &'a Session;
    type IntoIter = std::slice::Iter<'a, Session>;

    fn into_iter(self) -> Self::IntoIter {
        self.sessions.iter()
    }
}

impl IntoIterator for SessionMap {
    type Item = Session;
    type IntoIter = std::vec::IntoIter<Session>;

    fn into_iter(self) -> Self::IntoIter {
        self.sessions.into_iter()
    }
}
