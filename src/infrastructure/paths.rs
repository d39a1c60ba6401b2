//! Filesystem locations inside the Zellij plugin sandbox.
//!
//! Zellij mounts the host directory the session was started from at `/host`,
//! which is normally the user's home.

use std::path::{Path, PathBuf};

/// File name of the trace export inside the data directory.
pub const TRACE_FILE_NAME: &str = "recordseek-otlp.json";

/// Returns the plugin data directory, `~/.local/share/zellij/recordseek` on
/// the host.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("recordseek")
}

/// Maps a user-supplied path (such as `theme_file`) into the sandbox.
///
/// `~` and `~/…` resolve under `/host`; anything else is used as given.
#[must_use]
pub fn resolve_host_path(path: &str) -> PathBuf {
    match path.strip_prefix('~') {
        Some("") => PathBuf::from("/host"),
        Some(rest) if rest.starts_with('/') => Path::new("/host").join(&rest[1..]),
        _ => PathBuf::from(path),
    }
}
