//! Per-user directories for the preferences store, config file and log.

use std::path::PathBuf;

const APP_DIR: &str = "factlens";

/// `~/.local/share/factlens` on unix, the local app-data dir elsewhere.
pub fn data_dir() -> PathBuf {
    #[cfg(unix)]
    {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("/tmp"))
            .join(".local/share")
            .join(APP_DIR)
    }
    #[cfg(not(unix))]
    {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }
}

/// `~/.config/factlens` on unix (also on macOS, for consistency).
pub fn config_dir() -> PathBuf {
    #[cfg(unix)]
    {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join(APP_DIR)
    }
    #[cfg(not(unix))]
    {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn dirs_are_namespaced() {
        assert!(data_dir().ends_with(".local/share/factlens"));
        assert!(config_dir().ends_with(".config/factlens"));
    }
}
