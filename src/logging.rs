use std::fs;
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

use crate::error::GuardianError;

/// Initialize structured logging to `~/.local/state/url-guardian/url-guardian.log`.
///
/// The terminal is reserved for verdicts and quiz output, so logs go to a
/// file. `RUST_LOG` overrides the default filter.
pub fn init_logging() -> Result<PathBuf, GuardianError> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("url-guardian")?;
    let log_dir = xdg_dirs.get_state_home();

    fs::create_dir_all(&log_dir)?;
    let log_file_path: PathBuf = log_dir.join("url-guardian.log");

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;

    // A Mutex<File> is a MakeWriter, shared by every event.
    let writer = BoxMakeWriter::new(std::sync::Mutex::new(file));

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,url_guardian=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    tracing::info!("url-guardian logging initialized at {}", log_file_path.display());

    Ok(log_file_path)
}
