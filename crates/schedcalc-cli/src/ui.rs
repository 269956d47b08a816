//! UI helpers for CLI display.

use console::style;

use schedcalc_core::{Advisory, Severity};

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Print a styled header.
pub fn print_header(text: &str) {
    if is_color_disabled() {
        println!("=== {text} ===");
    } else {
        println!("{}", style(format!("=== {text} ===")).bold().cyan());
    }
}

/// Print an error message.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}

/// Tag printed in front of an advisory.
#[must_use]
pub fn severity_tag(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "[ADVISORY]",
    }
}

/// Print an advisory to stderr. Advisories never stop a session.
pub fn print_advisory(advisory: &Advisory) {
    let tag = severity_tag(advisory.severity);
    if is_color_disabled() {
        eprintln!("{tag} {}: {}", advisory.title, advisory.message);
    } else {
        let tag = match advisory.severity {
            Severity::Error => style(tag).red(),
        };
        eprintln!("{} {}: {}", tag.bold(), advisory.title, advisory.message);
    }
}
