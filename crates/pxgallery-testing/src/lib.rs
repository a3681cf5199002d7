//! Testing infrastructure for pxgallery integration tests.
//!
//! - `TestWorld`: isolated directory with a photos folder, an optional
//!   config file and a way to run the CLI inside it
//! - `fixtures`: sample photo names and tiny real JPEGs
//! - `assertions`: checks against the CLI's JSON output

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
