//! Logging setup. Lines go to `$XDG_STATE_HOME/mcview/mcview.log`; if that
//! file cannot be opened they go to stderr instead.

use anyhow::{anyhow, Context, Result};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "info,mcview=debug,mcview_core=debug";

/// Log file location under a given state directory.
pub fn log_file_in(state_home: &Path) -> PathBuf {
    state_home.join("mcview").join("mcview.log")
}

/// Opens `path` for appending, creating parent directories as needed.
fn open_log_file(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening {}", path.display()))
}

fn install(writer: BoxMakeWriter) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("installing log subscriber: {e}"))
}

/// Sends logs to the XDG log file and returns its path.
pub fn init_logging() -> Result<PathBuf> {
    let state_home = xdg::BaseDirectories::new()?.get_state_home();
    let path = log_file_in(&state_home);
    let file = open_log_file(&path)?;
    install(BoxMakeWriter::new(Mutex::new(file)))?;
    tracing::info!("mcview {} logging to {}", env!("CARGO_PKG_VERSION"), path.display());
    Ok(path)
}

/// Sends logs to stderr.
pub fn init_logging_stderr() -> Result<()> {
    install(BoxMakeWriter::new(io::stderr))
}

/// File logging if possible, stderr otherwise. Returns true when the log
/// file is in use.
pub fn init_or_stderr() -> bool {
    match init_logging() {
        Ok(_) => true,
        Err(e) => {
            if init_logging_stderr().is_ok() {
                tracing::warn!("log file unavailable, logging to stderr: {:#}", e);
            }
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn log_file_lives_in_app_subdir() {
        let path = log_file_in(Path::new("/state"));
        assert_eq!(path, Path::new("/state/mcview/mcview.log"));
    }

    #[test]
    fn open_creates_dirs_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = log_file_in(&dir.path().join("nested"));

        let mut f = open_log_file(&path).unwrap();
        writeln!(f, "first").unwrap();
        drop(f);
        let mut f = open_log_file(&path).unwrap();
        writeln!(f, "second").unwrap();
        drop(f);

        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn open_fails_when_parent_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("mcview");
        fs::write(&blocker, b"").unwrap();
        assert!(open_log_file(&log_file_in(dir.path())).is_err());
    }
}
