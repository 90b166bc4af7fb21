use anyhow::{Context, Result};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_DIR: &str = "logs";
pub const LOG_FILE: &str = "octo_panel.log";

/// stdout + daily rolling json file. Keep the guard alive until exit or the
/// file writer stops flushing.
pub fn init_logs() -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(LOG_DIR, LOG_FILE);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("octo_panel=debug,info"));

    let stdout_layer = fmt::layer()
        .with_timer(fmt::time::LocalTime::rfc_3339())
        .with_target(false)
        .with_line_number(true);

    let file_layer = fmt::layer()
        .json()
        .with_ansi(false)
        .with_writer(file_writer);

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer);

    tracing::subscriber::set_global_default(subscriber).context("setting global subscriber")?;
    tracing_log::LogTracer::init().context("bridging log records")?;

    Ok(guard)
}
