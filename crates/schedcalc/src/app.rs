//! Application entry point and dispatch.

use anyhow::{Context, Result};

use schedcalc_cli::output::write_to_file;
use schedcalc_cli::presenter::{CLIPresenter, SessionPresenter};
use schedcalc_core::{parse_keys, CalcError, CalculatorEngine, EngineOptions, Snapshot};
use schedcalc_tui::TuiApp;

use crate::config::AppConfig;
use crate::version::full_version;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        schedcalc_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let options = config
        .engine_options()
        .context("invalid --utilization value")?;

    match config.keys.as_deref() {
        Some(script) if !config.tui => run_script(config, script, options).map(|_| ()),
        script => {
            if config.output.is_some() {
                return Err(CalcError::Config(
                    "--output only applies to script runs, not the TUI".to_string(),
                )
                .into());
            }
            run_tui(config, script, options)
        }
    }
}

/// Replay a keystroke script against a fresh engine and present it.
///
/// Advisories are reported as they happen and never stop the script.
pub fn run_script(config: &AppConfig, script: &str, options: EngineOptions) -> Result<Snapshot> {
    let keys = parse_keys(script).with_context(|| format!("invalid keystroke script {script:?}"))?;
    tracing::debug!(keys = keys.len(), policy = %options.utilization, "replaying script");

    let presenter = CLIPresenter::new(config.verbose, config.quiet, config.json);
    let mut engine = CalculatorEngine::with_options(options);
    for (index, key) in keys.into_iter().enumerate() {
        if let Some(advisory) = engine.press(key) {
            presenter.present_advisory(&advisory);
        }
        presenter.present_step(index, key, &engine.snapshot());
    }

    let snapshot = engine.snapshot();
    presenter.present_final(&snapshot);

    if let Some(ref path) = config.output {
        write_to_file(path, &snapshot).with_context(|| format!("failed to write {path}"))?;
    }

    Ok(snapshot)
}

fn run_tui(config: &AppConfig, script: Option<&str>, options: EngineOptions) -> Result<()> {
    let mut app =
        TuiApp::new(options).with_toast_ticks(TuiApp::ticks_for(config.toast_duration()));

    // A script given together with --tui is typed in before the UI opens.
    if let Some(script) = script {
        let keys =
            parse_keys(script).with_context(|| format!("invalid keystroke script {script:?}"))?;
        for key in keys {
            app.press(key);
        }
    }

    tracing::info!(version = %full_version(), "starting TUI");
    app.run().map_err(|e| anyhow::anyhow!("TUI error: {e}"))?;

    Ok(())
}
