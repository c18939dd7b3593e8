//! User-supplied file paths (export targets, import sources).

use std::path::PathBuf;

/// `~` and `~/...` resolve against the home directory; anything else is
/// taken as given.
pub fn expand_tilde(path: &str) -> PathBuf {
    let home = || dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    match path.strip_prefix('~') {
        Some("") => home(),
        Some(rest) if rest.starts_with('/') || rest.starts_with('\\') => home().join(&rest[1..]),
        _ => PathBuf::from(path),
    }
}
