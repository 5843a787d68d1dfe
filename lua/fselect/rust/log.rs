use crate::error::Error;
use once_cell::sync::OnceCell;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Dropping the guard stops the writer thread, so it lives as long as the process.
static LOG_GUARD: OnceCell<WorkerGuard> = OnceCell::new();

/// Sends `tracing` output to `log_file`. `log_level` is an `EnvFilter` directive; without
/// one `RUST_LOG` is consulted, then `info`. Later calls are no-ops.
pub fn init_tracing(log_file: &Path, log_level: Option<&str>) -> Result<(), Error> {
    if LOG_GUARD.get().is_some() {
        return Ok(());
    }

    let file_name = log_file
        .file_name()
        .ok_or_else(|| Error::InvalidPath(log_file.to_string_lossy().into_owned()))?;
    let directory = log_file
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(directory)?;

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(directory, file_name));

    let filter = match log_level {
        Some(level) => EnvFilter::try_new(level).ok(),
        None => EnvFilter::try_from_default_env().ok(),
    }
    .unwrap_or_else(|| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false)
                .with_thread_ids(true),
        )
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))?;

    let _ = LOG_GUARD.set(guard);
    tracing::info!("Logging initialized at {}", log_file.display());
    Ok(())
}
