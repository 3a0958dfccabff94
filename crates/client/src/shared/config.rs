use contracts::domain::a001_society::SocietyId;
use serde::Deserialize;

use super::paths::ConfigPaths;
use crate::error::{ClientError, ClientResult};

pub const API_URL_ENV: &str = "SOCIETY_API_URL";
pub const SOCIETY_ID_ENV: &str = "SOCIETY_ID";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub society: SocietyConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SocietyConfig {
    /// Society the admin manages; imports register residents into it.
    pub id: i64,
}

impl Default for SocietyConfig {
    fn default() -> Self {
        Self { id: 1 }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "http://localhost:8080/api"
timeout_secs = 30

[society]
id = 1
"#;

impl Config {
    pub fn society_id(&self) -> SocietyId {
        SocietyId(self.society.id)
    }

    /// Переопределения из окружения (`SOCIETY_API_URL`, `SOCIETY_ID`)
    pub fn apply_overrides<F>(&mut self, lookup: F) -> ClientResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(API_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.api.base_url = url.trim().to_string();
        }
        if let Some(id) = lookup(SOCIETY_ID_ENV).filter(|v| !v.trim().is_empty()) {
            self.society.id = id.trim().parse().map_err(|_| {
                ClientError::Config(format!("{} must be a number, got '{}'", SOCIETY_ID_ENV, id))
            })?;
        }
        Ok(())
    }
}

/// Load configuration from `config.toml` in the config directory.
///
/// Falls back to the embedded default when the file does not exist.
pub fn load_config(paths: &ConfigPaths) -> ClientResult<Config> {
    if paths.config_file.exists() {
        tracing::info!("Loading config from: {}", paths.config_file.display());
        let contents = std::fs::read_to_string(&paths.config_file)?;
        return parse_config(&contents);
    }

    tracing::debug!(
        "config.toml not found at {}, using embedded defaults",
        paths.config_file.display()
    );
    parse_config(DEFAULT_CONFIG)
}

fn parse_config(contents: &str) -> ClientResult<Config> {
    toml::from_str(contents).map_err(|e| ClientError::Config(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8080/api");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.society_id(), SocietyId(1));
    }

    #[test]
    fn test_file_config_with_partial_sections() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ConfigPaths::from_dir(dir.path().to_path_buf());
        std::fs::write(&paths.config_file, "[api]\nbase_url = \"https://api.example.org/api\"\n")
            .unwrap();

        let config = load_config(&paths).unwrap();
        assert_eq!(config.api.base_url, "https://api.example.org/api");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.society.id, 1);
    }

    #[test]
    fn test_env_overrides() {
        let mut config = parse_config(DEFAULT_CONFIG).unwrap();
        let env: HashMap<&str, &str> =
            [(API_URL_ENV, "http://10.0.0.5:8080/api"), (SOCIETY_ID_ENV, " 7 ")].into();

        config
            .apply_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.api.base_url, "http://10.0.0.5:8080/api");
        assert_eq!(config.society_id(), SocietyId(7));
    }

    #[test]
    fn test_bad_society_id_is_config_error() {
        let mut config = parse_config(DEFAULT_CONFIG).unwrap();
        let err = config
            .apply_overrides(|key| (key == SOCIETY_ID_ENV).then(|| "seven".to_string()))
            .unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[test]
    fn test_broken_toml_is_config_error() {
        assert!(matches!(parse_config("[api"), Err(ClientError::Config(_))));
    }
}
