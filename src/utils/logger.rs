//! Logging initialization for applications embedding the engine.
//!
//! The engine itself only emits `tracing` events; it never installs a
//! subscriber. Interactive hosts (TUI or GUI frontends) cannot log to the
//! terminal they are drawing on, so this bootstrap writes to files in a
//! `logs/` directory and rotates by starting a fresh file per run.
//!
//! # Configuration
//!
//! The log level is controlled via the `RUST_LOG` environment variable:
//! - `RUST_LOG=debug` - Show debug and higher level logs
//! - `RUST_LOG=info` - Show info and higher level logs (default)
//! - `RUST_LOG=warn` - Show warnings and errors only

use std::fs;
use std::path::PathBuf;

use chrono::Local;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize file-based logging for the host application.
///
/// Creates `logs/rusty-suggest.<timestamp>.log` next to the executable
/// (falling back to the working directory) and installs a non-blocking
/// subscriber writing to it. Any failure along the way degrades to a
/// warning on stderr; logging is never worth aborting the host for.
pub fn init_logging() {
    let log_dir = default_log_dir();
    if let Err(e) = fs::create_dir_all(&log_dir) {
        eprintln!("Warning: Failed to create logs directory: {}", e);
        return;
    }

    let timestamp = Local::now().format("%Y-%m-%d-%H-%M-%S");
    let log_path = log_dir.join(format!("rusty-suggest.{}.log", timestamp));

    let log_file = match fs::File::create(&log_path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: Failed to create log file: {}", e);
            return;
        }
    };

    // Non-blocking writer so logging never stalls the host's event loop
    let (non_blocking, guard) = tracing_appender::non_blocking(log_file);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    // The guard must outlive the process for the writer thread to flush;
    // leaking it is fine for a once-per-run initialization.
    std::mem::forget(guard);

    tracing::info!("Logging initialized - writing to {}", log_path.display());
}

/// `logs/` next to the executable, or under the working directory when the
/// executable path is unavailable.
fn default_log_dir() -> PathBuf {
    match std::env::current_exe() {
        Ok(exe_path) => exe_path
            .parent()
            .map(|p| p.join("logs"))
            .unwrap_or_else(|| PathBuf::from("logs")),
        Err(_) => PathBuf::from("logs"),
    }
}
