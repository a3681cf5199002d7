use chrono::NaiveDateTime;

pub fn format_clock(ts: NaiveDateTime) -> String {
    ts.format("%H:%M:%S").to_string()
}

/// `09:00:00 – 09:10:00`, with the date repeated only when the span crosses midnight.
pub fn format_span(start: NaiveDateTime, end: NaiveDateTime) -> String {
    if start.date() == end.date() {
        format!("{} – {}", format_clock(start), format_clock(end))
    } else {
        format!(
            "{} – {}",
            start.format("%Y-%m-%d %H:%M:%S"),
            end.format("%Y-%m-%d %H:%M:%S")
        )
    }
}

pub fn format_duration(seconds: i64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, secs)
    } else {
        format!("{}s", secs)
    }
}
