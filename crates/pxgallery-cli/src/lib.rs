// pxgallery CLI
//
// Layering:
// - handlers: resolve config, call into pxgallery_runtime, hand results to presenters
// - presentation: presenters build view models, views lay them out, the
//   console renderer prints either text or JSON
//
// Nothing below the CLI prints to stdout. Library crates only emit tracing
// events, which the subscriber installed in `logging` sends to stderr.

mod args;
mod commands;
pub mod context;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ViewModeArgs};
pub use commands::run;
