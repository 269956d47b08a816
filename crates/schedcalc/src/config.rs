//! Application configuration from CLI flags and environment.

use clap::Parser;
use tracing::level_filters::LevelFilter;

use schedcalc_core::{CalcError, EngineOptions, UtilizationPolicy};

/// SchedCalc: schedule and utilization calculator.
///
/// Replays a keystroke script with --keys, or opens the interactive
/// calculator when no script is given.
#[derive(Parser, Debug)]
#[command(name = "schedcalc", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Keystroke script, e.g. "5x2=" (digits . x * + - / % = c <).
    #[arg(short, long, env = "SCHEDCALC_KEYS")]
    pub keys: Option<String>,

    /// Utilization policy: schedule, single, or off.
    #[arg(short, long, default_value = "schedule", env = "SCHEDCALC_UTILIZATION")]
    pub utilization: String,

    /// Print every step of the script.
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (only output the display).
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the final snapshot as JSON.
    #[arg(long)]
    pub json: bool,

    /// Also write the final snapshot as JSON to this file (script runs only).
    #[arg(short, long)]
    pub output: Option<String>,

    /// Launch the interactive TUI.
    #[arg(long)]
    pub tui: bool,

    /// How long advisories stay on screen in the TUI (e.g. "3s", "500ms").
    #[arg(long, default_value = "3s")]
    pub toast: String,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Engine options derived from the flags.
    pub fn engine_options(&self) -> Result<EngineOptions, CalcError> {
        let policy: UtilizationPolicy = self.utilization.parse()?;
        Ok(EngineOptions::with_utilization(policy))
    }

    /// Whether this run opens the TUI rather than replaying a script.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.completion.is_none() && (self.tui || self.keys.is_none())
    }

    /// Log level used when `RUST_LOG` is not set.
    ///
    /// The TUI owns the terminal, so it logs nothing. Quiet runs only
    /// report errors.
    #[must_use]
    pub fn default_log_level(&self) -> LevelFilter {
        if self.is_interactive() {
            LevelFilter::OFF
        } else if self.quiet {
            LevelFilter::ERROR
        } else {
            LevelFilter::WARN
        }
    }

    /// Parse the toast lifetime into a Duration.
    #[must_use]
    pub fn toast_duration(&self) -> std::time::Duration {
        parse_duration(&self.toast).unwrap_or(std::time::Duration::from_secs(3))
    }
}

/// Parse a duration string like "3s", "500ms", "1m".
fn parse_duration(s: &str) -> Option<std::time::Duration> {
    let s = s.trim();
    if let Some(ms) = s.strip_suffix("ms") {
        let n: u64 = ms.parse().ok()?;
        Some(std::time::Duration::from_millis(n))
    } else if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins.parse().ok()?;
        Some(std::time::Duration::from_secs(n * 60))
    } else if let Some(secs) = s.strip_suffix('s') {
        let n: u64 = secs.parse().ok()?;
        Some(std::time::Duration::from_secs(n))
    } else {
        let n: u64 = s.parse().ok()?;
        Some(std::time::Duration::from_secs(n))
    }
}
