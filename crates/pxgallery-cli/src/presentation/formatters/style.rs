//! Terminal styling that degrades to plain text when stdout is not a tty,
//! so piped output and test snapshots never contain escape codes.

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::fmt::Display;
use std::sync::OnceLock;

fn colors_enabled() -> bool {
    static ENABLED: OnceLock<bool> = OnceLock::new();
    *ENABLED.get_or_init(|| std::io::stdout().is_terminal())
}

pub fn bold(text: impl Display) -> String {
    if colors_enabled() {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

pub fn dim(text: impl Display) -> String {
    if colors_enabled() {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}

pub fn cyan(text: impl Display) -> String {
    if colors_enabled() {
        text.cyan().to_string()
    } else {
        text.to_string()
    }
}

pub fn yellow(text: impl Display) -> String {
    if colors_enabled() {
        text.yellow().to_string()
    } else {
        text.to_string()
    }
}

pub fn red(text: impl Display) -> String {
    if colors_enabled() {
        text.red().to_string()
    } else {
        text.to_string()
    }
}
