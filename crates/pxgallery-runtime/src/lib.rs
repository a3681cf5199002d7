//! Everything around the clustering core: where photos come from, what gets
//! generated for them, and the page that ties it together.
//!
//! The build runs as one sequential pass except for media generation, which
//! fans out across files with rayon. Each worker writes only paths derived
//! from its own file name.

pub mod config;
pub mod error;
pub mod html;
pub mod media;
pub mod pipeline;
pub mod scan;

pub use config::{Config, PageConfig};
pub use error::{Error, Result};
pub use media::{MediaAsset, MediaOptions, MediaReport};
pub use pipeline::{BuildOptions, BuildReport, SessionPlan, build, plan_sessions, scan_source};
pub use scan::SourceListing;
