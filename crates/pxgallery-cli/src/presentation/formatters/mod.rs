pub mod size;
pub mod style;
pub mod time;

pub use size::humanize_bytes;
pub use time::{format_clock, format_duration, format_span};
