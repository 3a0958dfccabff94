//! Где клиент хранит конфиг, сессию и логи

use std::path::PathBuf;

use crate::error::{ClientError, ClientResult};

pub const CONFIG_DIR_ENV: &str = "SOCIETY_CONFIG_DIR";

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub config_dir: PathBuf,
    /// `config.toml`
    pub config_file: PathBuf,
    /// `session.json`
    pub session_file: PathBuf,
    pub log_dir: PathBuf,
}

impl ConfigPaths {
    /// Paths for the current platform, respecting `SOCIETY_CONFIG_DIR`.
    ///
    /// - Linux: ~/.config/society-admin/
    /// - macOS: ~/Library/Application Support/society-admin/
    /// - Windows: %APPDATA%\society-admin\
    pub fn new() -> ClientResult<Self> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(Self::from_dir(PathBuf::from(dir)));
        }

        let base_dir = dirs::config_dir().ok_or_else(|| {
            ClientError::Config("Could not determine configuration directory".to_string())
        })?;

        Ok(Self::from_dir(base_dir.join("society-admin")))
    }

    pub fn from_dir(config_dir: PathBuf) -> Self {
        Self {
            config_file: config_dir.join("config.toml"),
            session_file: config_dir.join("session.json"),
            log_dir: config_dir.join("logs"),
            config_dir,
        }
    }

    pub fn ensure_dir_exists(&self) -> ClientResult<()> {
        if !self.config_dir.exists() {
            std::fs::create_dir_all(&self.config_dir)?;
        }
        Ok(())
    }
}
