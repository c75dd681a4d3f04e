//! Path resolution helpers.
//!
//! Data lives under the XDG data directory (`$XDG_DATA_HOME/directapply`,
//! falling back to `~/.local/share/directapply`). Hosts without a home
//! directory fall back to the system temp directory.

use std::path::PathBuf;

const APP_DIR: &str = "directapply";

/// Returns the data directory for trace files.
///
/// Resolution order:
/// 1. `$XDG_DATA_HOME/directapply` when `XDG_DATA_HOME` is set and non-empty
/// 2. `$HOME/.local/share/directapply`
/// 3. `<temp dir>/directapply`
///
/// The directory is not created.
#[must_use]
pub fn data_dir() -> PathBuf {
    if let Some(xdg) = non_empty_var("XDG_DATA_HOME") {
        return PathBuf::from(xdg).join(APP_DIR);
    }
    if let Some(home) = non_empty_var("HOME") {
        return PathBuf::from(home).join(".local").join("share").join(APP_DIR);
    }
    std::env::temp_dir().join(APP_DIR)
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading `~`, or hosts without `HOME`, are returned unchanged.
///
/// # Examples
///
/// ```
/// use directapply::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("/absolute/path"), PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let Some(home) = non_empty_var("HOME") else {
        return PathBuf::from(path);
    };

    if path == "~" {
        PathBuf::from(home)
    } else if let Some(rest) = path.strip_prefix("~/") {
        PathBuf::from(home).join(rest)
    } else {
        PathBuf::from(path)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_ends_with_app_name() {
        assert!(data_dir().ends_with(APP_DIR));
    }

    #[test]
    fn tilde_expansion_only_touches_prefix() {
        assert_eq!(expand_tilde("relative/~/x"), PathBuf::from("relative/~/x"));
        if let Some(home) = non_empty_var("HOME") {
            assert_eq!(expand_tilde("~/jobs.json"), PathBuf::from(home).join("jobs.json"));
        }
    }
}
