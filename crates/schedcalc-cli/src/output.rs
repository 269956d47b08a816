//! CLI output formatting.

use std::io::{self, Write};

use schedcalc_core::{Key, Snapshot};

/// Format a snapshot as the lines printed after a script.
#[must_use]
pub fn format_snapshot(snapshot: &Snapshot) -> String {
    let mut lines = Vec::with_capacity(3);
    let pending = snapshot.pending_line();
    if !pending.is_empty() {
        lines.push(format!("Pending: {pending}"));
    }
    lines.push(format!("Display: {}", snapshot.display));
    if let Some(rate) = snapshot.utilization_text() {
        lines.push(format!("Utilization: {rate}"));
    }
    lines.join("\n")
}

/// Format one step of a script for verbose output.
#[must_use]
pub fn format_step(index: usize, key: Key, snapshot: &Snapshot) -> String {
    let pending = snapshot.pending_line();
    let mut line = format!("{:>3}. [{:^3}] ", index + 1, key.label());
    if !pending.is_empty() {
        line.push_str(&pending);
        line.push_str(" | ");
    }
    line.push_str(&snapshot.display);
    line
}

/// Format a display value with thousand separators, e.g. `2,483,776`.
///
/// Anything that is not a plain decimal number is returned unchanged.
#[must_use]
pub fn format_grouped(display: &str) -> String {
    let (int_part, frac_part) = match display.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (display, None),
    };
    if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return display.to_string();
    }

    let mut grouped = String::with_capacity(display.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

/// Serialize a snapshot as pretty JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn snapshot_json(snapshot: &Snapshot) -> serde_json::Result<String> {
    serde_json::to_string_pretty(snapshot)
}

/// Write a snapshot as JSON to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &str, snapshot: &Snapshot) -> io::Result<()> {
    let json = snapshot_json(snapshot).map_err(io::Error::other)?;
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{json}")?;
    Ok(())
}
