//! SchedCalc: schedule and utilization calculator.

use schedcalc_lib::{app, config, errors};

fn main() {
    let config = config::AppConfig::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(config.default_log_level().into())
                .from_env_lossy(),
        )
        .init();

    if let Err(err) = app::run(&config) {
        schedcalc_cli::ui::print_error(&format!("{err:#}"));
        std::process::exit(errors::exit_code(&err));
    }
}
