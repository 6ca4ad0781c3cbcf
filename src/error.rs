use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no config directory available")]
    NoConfigDir,
    #[error("no data directory available")]
    NoDataDir,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings file: {0}")]
    SettingsParse(#[from] toml::de::Error),
    #[error("could not serialize settings: {0}")]
    SettingsWrite(#[from] toml::ser::Error),
    #[error("invalid conversation data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("cache error: {0}")]
    Cache(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
