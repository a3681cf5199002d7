// Engine module - filename interpretation and session clustering
// This layer sits between raw directory listings and the gallery runtime

pub mod cluster;
pub mod extract;

pub use cluster::{
    ClusterConfig, DEFAULT_THRESHOLD_MINUTES, LABEL_DATE_FORMAT, SessionLabeler, cluster_sessions,
    sort_records,
};
pub use extract::{ExtractReport, Extraction, NamingConvention, SkipReason};

use pxgallery_types::{PhotoRecord, SessionMap};

// Façade API - Stable public interface for the runtime layer

/// Parse a listing, sort it chronologically and cluster it into sessions.
pub fn sessions_from_names<I, S>(
    names: I,
    naming: &NamingConvention,
    config: &ClusterConfig,
) -> SessionMap
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut records = naming.extract_records(names);
    sort_records(&mut records);
    cluster_sessions(&records, config)
}

/// Cluster records that may arrive in any order.
pub fn group_photos(mut records: Vec<PhotoRecord>, config: &ClusterConfig) -> SessionMap {
    sort_records(&mut records);
    cluster_sessions(&records, config)
}
