use crate::error::{Error, Result};
use adw::Application;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_LIST_LIMIT: usize = 200;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Identity of the signed-in user; empty until the user provides one.
    pub user_id: String,
    pub import_path: Option<PathBuf>,
    pub list_limit: Option<usize>,
}

impl Settings {
    fn path() -> Option<PathBuf> {
        let proj = ProjectDirs::from("com", "example", "ChatlistGTK")?;
        Some(proj.config_dir().join("settings.toml"))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Falls back to defaults when the file is missing or unreadable.
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            log::warn!("no config directory, using default settings");
            return Self::default();
        };
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                log::info!("no settings at {}: {e}", path.display());
                return Self::default();
            }
        };
        Self::from_toml(&text).unwrap_or_else(|e| {
            log::warn!("ignoring {}: {e}", path.display());
            Self::default()
        })
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::path().ok_or(Error::NoConfigDir)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn user_id(&self) -> Option<&str> {
        let id = self.user_id.trim();
        (!id.is_empty()).then_some(id)
    }

    pub fn list_limit(&self) -> usize {
        self.list_limit.unwrap_or(DEFAULT_LIST_LIMIT)
    }

    /// Copy of these settings signed in as `raw`, or `None` for a blank id.
    pub fn with_user_id(&self, raw: &str) -> Option<Self> {
        let id = raw.trim();
        (!id.is_empty()).then(|| Self {
            user_id: id.to_string(),
            ..self.clone()
        })
    }
}

pub fn build_ui(app: &Application) {
    let settings = Settings::load();
    if settings.user_id().is_some() {
        let _ = crate::ui::main_window::show_main_window(app, settings);
    } else {
        crate::ui::identity::show_identity_window(app, settings);
    }
}
