use crate::{
    AuthConfig, ConfigError, ConfigErrorResult, DatabaseConfig, LogLevel, LoggingConfig,
    ServerConfig,
};

use std::path::PathBuf;
use std::str::FromStr;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for SHOP_CONFIG_DIR env var, else use ./.shop/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply SHOP_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        // Auto-create config directory
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: SHOP_CONFIG_DIR env var > ./.shop/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("SHOP_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".shop"))
    }

    /// Apply SHOP_* environment variable overrides on top of file values.
    fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("SHOP_SERVER_HOST") {
            self.server.host = host;
        }

        if let Ok(port) = std::env::var("SHOP_SERVER_PORT")
            && let Ok(port) = port.parse::<u16>()
        {
            self.server.port = port;
        }

        if let Ok(path) = std::env::var("SHOP_DATABASE_PATH") {
            self.database.path = path;
        }

        if let Ok(level) = std::env::var("SHOP_LOG_LEVEL") {
            // FromStr never fails; invalid values fall back to Info
            self.logging.level = LogLevel::from_str(&level).unwrap();
        }
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> Result<PathBuf, ConfigError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// One-line startup summary of the effective configuration.
    pub fn log_summary(&self) {
        info!(
            "Config: bind={}, database={}, log_level={:?}, bcrypt_cost={}",
            self.bind_addr(),
            self.database.path,
            self.logging.level.0,
            self.auth.bcrypt_cost,
        );
    }
}
