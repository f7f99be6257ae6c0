use crate::error::{Result, TrackerError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Environment variables that override individual config file keys.
pub const ENV_HOST: &str = "EMPTRACK_DB_HOST";
pub const ENV_PORT: &str = "EMPTRACK_DB_PORT";
pub const ENV_USER: &str = "EMPTRACK_DB_USER";
pub const ENV_PASSWORD: &str = "EMPTRACK_DB_PASSWORD";
pub const ENV_DATABASE: &str = "EMPTRACK_DB_NAME";

/// Connection settings, stored in `<config dir>/config.json`
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_user")]
    pub user: String,

    #[serde(default)]
    pub password: String,

    #[serde(default = "default_database")]
    pub database: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3306
}

fn default_user() -> String {
    "root".to_string()
}

fn default_database() -> String {
    "employee_DB".to_string()
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            user: default_user(),
            password: String::new(),
            database: default_database(),
        }
    }
}

// Hand-written so the password never ends up in logs.
impl std::fmt::Debug for TrackerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrackerConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .finish()
    }
}

impl TrackerConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: TrackerConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// Applies `EMPTRACK_DB_*` overrides from the process environment.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from any key lookup; unset keys keep their value.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_HOST) {
            self.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.port = port.trim().parse().map_err(|_| {
                TrackerError::Config(format!("{} is not a valid port: {}", ENV_PORT, port))
            })?;
        }
        if let Some(user) = lookup(ENV_USER) {
            self.user = user;
        }
        if let Some(password) = lookup(ENV_PASSWORD) {
            self.password = password;
        }
        if let Some(database) = lookup(ENV_DATABASE) {
            self.database = database;
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = TrackerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3306);
        assert_eq!(config.database, "employee_DB");
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = TrackerConfig::load(dir.path()).unwrap();
        assert_eq!(config, TrackerConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("emptrack");

        let config = TrackerConfig {
            host: "db.internal".into(),
            port: 3307,
            ..TrackerConfig::default()
        };
        config.save(&nested).unwrap();

        let loaded = TrackerConfig::load(&nested).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"user": "newuser"}"#).unwrap();

        let loaded = TrackerConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.user, "newuser");
        assert_eq!(loaded.port, 3306);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{ not json").unwrap();

        assert!(matches!(
            TrackerConfig::load(dir.path()),
            Err(TrackerError::Serialization(_))
        ));
    }

    #[test]
    fn test_overrides_replace_only_set_keys() {
        let config = TrackerConfig::default()
            .with_overrides(lookup_from(&[(ENV_HOST, "10.0.0.5"), (ENV_PORT, "3310")]))
            .unwrap();
        assert_eq!(config.host, "10.0.0.5");
        assert_eq!(config.port, 3310);
        assert_eq!(config.user, "root");
    }

    #[test]
    fn test_invalid_port_override() {
        let result = TrackerConfig::default().with_overrides(lookup_from(&[(ENV_PORT, "http")]));
        assert!(matches!(result, Err(TrackerError::Config(_))));
    }

    #[test]
    fn test_debug_hides_password() {
        let config = TrackerConfig {
            password: "hunter2".into(),
            ..TrackerConfig::default()
        };
        assert!(!format!("{:?}", config).contains("hunter2"));
    }
}
