//! XDG-compliant log directory management
//!
//! Log files live in `$XDG_STATE_HOME/perch/logs/` (typically
//! `~/.local/state/perch/logs/`). Each instance writes a PID-based log file
//! so concurrent runs do not clobber each other; stale files from previous
//! runs are cleaned up on startup.

use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::{Duration, SystemTime};

/// Minimum age for log files to be cleaned up (24 hours)
const CLEANUP_AGE: Duration = Duration::from_secs(24 * 60 * 60);

/// Cached log directory path
static LOG_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Get the base log directory, creating it if necessary.
///
/// Returns `$XDG_STATE_HOME/perch/logs/` (typically
/// `~/.local/state/perch/logs/`). Falls back to the system temp directory
/// when no state directory can be created.
pub fn log_dir() -> &'static PathBuf {
    LOG_DIR.get_or_init(|| {
        let dir = get_xdg_log_dir().unwrap_or_else(|| std::env::temp_dir().join("perch-logs"));

        if let Err(e) = fs::create_dir_all(&dir) {
            tracing::warn!("Failed to create log directory {:?}: {}", dir, e);
            return std::env::temp_dir().join("perch-logs");
        }

        dir
    })
}

/// Get the XDG state home log directory
fn get_xdg_log_dir() -> Option<PathBuf> {
    // First try XDG_STATE_HOME
    if let Ok(state_home) = std::env::var("XDG_STATE_HOME") {
        let path = PathBuf::from(state_home);
        if path.is_absolute() {
            return Some(path.join("perch").join("logs"));
        }
    }

    // Fall back to ~/.local/state
    if let Some(home) = home_dir() {
        return Some(home.join(".local").join("state").join("perch").join("logs"));
    }

    None
}

/// Get the user's home directory
fn home_dir() -> Option<PathBuf> {
    // Try HOME environment variable first (works on all Unix-likes)
    if let Ok(home) = std::env::var("HOME") {
        return Some(PathBuf::from(home));
    }

    // On Windows, try USERPROFILE
    #[cfg(windows)]
    if let Ok(profile) = std::env::var("USERPROFILE") {
        return Some(PathBuf::from(profile));
    }

    None
}

/// Get the path for the log file of this process.
///
/// Returns `{log_dir}/perch-{PID}.log`
pub fn main_log_path() -> PathBuf {
    log_dir().join(format!("perch-{}.log", std::process::id()))
}

/// Clean up PID-based log files left behind by previous runs.
///
/// Files belonging to the current process are never touched; everything
/// else is removed once it is older than [`CLEANUP_AGE`].
pub fn cleanup_stale_logs() {
    let current_pid = std::process::id();

    let Ok(entries) = fs::read_dir(log_dir()) else {
        return;
    };

    for entry in entries.flatten() {
        let file_name = entry.file_name();
        let name = file_name.to_string_lossy();

        if !name.ends_with(".log") {
            continue;
        }

        // Filenames look like perch-{PID}.log
        let Some(pid) = extract_pid_from_filename(&name) else {
            continue;
        };
        if pid == current_pid {
            continue;
        }

        if entry.file_type().map(|t| t.is_file()).unwrap_or(false)
            && is_file_older_than(&entry.path(), CLEANUP_AGE)
        {
            if let Err(e) = fs::remove_file(entry.path()) {
                tracing::debug!("Failed to clean up stale log {:?}: {}", entry.path(), e);
            } else {
                tracing::debug!("Cleaned up stale log file: {:?}", entry.path());
            }
        }
    }
}

/// Check if a file is older than the specified duration
fn is_file_older_than(path: &std::path::Path, age: Duration) -> bool {
    let Ok(metadata) = fs::metadata(path) else {
        return false;
    };

    let Ok(modified) = metadata.modified() else {
        return false;
    };

    SystemTime::now()
        .duration_since(modified)
        .map(|elapsed| elapsed > age)
        .unwrap_or(false)
}

/// Extract PID from a filename like "perch-12345.log"
fn extract_pid_from_filename(name: &str) -> Option<u32> {
    let without_ext = name.strip_suffix(".log")?;

    // Find the last hyphen and try to parse what follows as a PID
    let last_hyphen = without_ext.rfind('-')?;
    let pid_str = &without_ext[last_hyphen + 1..];

    pid_str.parse().ok()
}
