//! Assertions over `--format json` output.

use anyhow::{Context, Result};
use serde_json::Value;

fn sessions(json: &Value) -> Result<&Vec<Value>> {
    json["content"]["sessions"]
        .as_array()
        .context("Expected 'content.sessions' array in JSON")
}

/// Assert that JSON output contains the expected number of sessions.
pub fn assert_session_count(json: &Value, expected: usize) -> Result<()> {
    let sessions = sessions(json)?;

    if sessions.len() != expected {
        anyhow::bail!("Expected {} sessions, got {}", expected, sessions.len());
    }

    Ok(())
}

/// Assert the session labels, in order.
pub fn assert_session_labels(json: &Value, expected: &[&str]) -> Result<()> {
    let labels: Vec<&str> = sessions(json)?
        .iter()
        .map(|s| s["label"].as_str().context("Session missing label"))
        .collect::<Result<_>>()?;

    if labels != expected {
        anyhow::bail!("Expected labels {:?}, got {:?}", expected, labels);
    }

    Ok(())
}

/// Assert which photos landed in the session at `index`.
pub fn assert_session_photos(json: &Value, index: usize, expected: &[&str]) -> Result<()> {
    let session = sessions(json)?
        .get(index)
        .with_context(|| format!("No session at index {}", index))?;

    let names: Vec<&str> = session["photos"]
        .as_array()
        .context("Session missing photos array")?
        .iter()
        .map(|p| p["name"].as_str().context("Photo missing name"))
        .collect::<Result<_>>()?;

    if names != expected {
        anyhow::bail!(
            "Session {} holds {:?}, expected {:?}",
            index,
            names,
            expected
        );
    }

    Ok(())
}
