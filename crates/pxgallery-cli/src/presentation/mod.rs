//! # Presentation Layer
//!
//! Everything the CLI prints goes through this module. The flow is one-way:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json --> stdout
//!                                                                  ==(Text)==> [ View ] --> stdout
//! ```
//!
//! ## Rules
//!
//! * **View models hold raw data.** Counts are numbers and times are
//!   timestamps. Formatting happens in `views/` via `formatters/`.
//! * **`ViewMode` controls density, not content.** `--format json` ignores it
//!   and always prints the complete view model.
//! * **Presenters decide what to suggest.** A `Guidance` tip is attached in
//!   `presenters/`, never in a view.
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Add a field to the JSON output | `view_models/` |
//! | Count, total or pick a tip | `presenters/` |
//! | Change layout or color | `views/` |
//! | Format a duration or a size | `formatters/` |

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{
    CommandResultViewModel, CreateView, Guidance, StatusBadge, StatusLevel, ViewMode,
};
