//! AppState: shared data passed to all components during render/event.
//!
//! Components read it and never mutate it. The App event loop is the only
//! writer, and every change to the session goes through `Session` methods.

use std::path::PathBuf;

use factlens_core::prefs::Preferences;
use factlens_core::Session;

use crate::theme::Palette;

pub struct AppState {
    pub session: Session,
    pub prefs: Preferences,
    pub prefs_path: PathBuf,
    pub palette: Palette,
    /// Base URL shown in the header.
    pub server: String,
}

impl AppState {
    pub fn new(session: Session, prefs: Preferences, prefs_path: PathBuf, server: String) -> Self {
        Self {
            session,
            palette: Palette::from_prefs(&prefs),
            prefs,
            prefs_path,
            server,
        }
    }

    /// Re-derive the palette and persist. A failed write is logged and
    /// otherwise ignored.
    pub fn set_prefs(&mut self, prefs: Preferences) {
        self.prefs = prefs;
        self.palette = Palette::from_prefs(&prefs);
        if let Err(e) = prefs.save_to(&self.prefs_path) {
            tracing::warn!("failed to save preferences to {}: {}", self.prefs_path.display(), e);
        }
    }
}

/// State wired to the default config; nothing is sent anywhere.
#[cfg(test)]
pub fn test_state() -> AppState {
    use factlens_core::{AnalysisClient, Config};

    let config = Config::default();
    let (tx, _rx) = tokio::sync::mpsc::channel(8);
    let client = AnalysisClient::new(&config.server).expect("client");
    AppState::new(
        Session::new(&config, client, tx),
        Preferences::default(),
        std::env::temp_dir().join("factlens-tui-test-preferences.toml"),
        config.server.base_url.clone(),
    )
}
