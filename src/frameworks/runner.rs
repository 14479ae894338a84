use super::config;
use crate::use_cases::{CommandReport, TurnRunner};
use std::io::{self, Write};
use std::process::ExitCode;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // Logs go to stderr; stdout carries the JSON reports.
    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(io::stderr)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(io::stderr)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub fn run() -> ExitCode {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let tuning_path = config::tuning_path();
    let tuning = match config::load_tuning(tuning_path.as_deref()) {
        Ok(tuning) => tuning,
        Err(e) => {
            tracing::error!(error = %e, "failed to load tuning");
            return ExitCode::FAILURE;
        }
    };

    let scenario_path = config::scenario_path();
    let scenario = match config::load_scenario(&scenario_path) {
        Ok(scenario) => scenario,
        Err(e) => {
            tracing::error!(error = %e, "failed to load scenario");
            return ExitCode::FAILURE;
        }
    };

    let worm = match scenario.spawn(tuning) {
        Ok(worm) => worm,
        Err(e) => {
            tracing::error!(error = %e, "failed to spawn worm");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(
        path = %scenario_path.display(),
        worm = worm.name(),
        commands = scenario.commands.len(),
        "scenario loaded"
    );

    let mut runner = TurnRunner::new(worm);
    let reports = runner.run(scenario.commands);

    if let Err(e) = write_reports(&mut io::stdout().lock(), &reports) {
        tracing::error!(error = %e, "failed to write reports");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Writes one JSON object per line.
pub fn write_reports<W: Write>(out: &mut W, reports: &[CommandReport]) -> io::Result<()> {
    for report in reports {
        serde_json::to_writer(&mut *out, report)?;
        out.write_all(b"\n")?;
    }
    out.flush()
}
