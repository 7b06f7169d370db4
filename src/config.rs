use crate::error::{Result, TerraError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "terra.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TerraConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub database: DatabaseSettings,

    #[serde(default)]
    pub logging: LogSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_bind")]
    pub bind: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSettings {
    #[serde(default = "default_database_url")]
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogSettings {
    /// Minimum level for terra's own events (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Optional file to receive structured JSON logs in addition to stderr.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_bind() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4000
}

fn default_database_url() -> String {
    "sqlite://terra.db".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
        }
    }
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: default_database_url(),
        }
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl ServerSettings {
    /// Socket address string for the HTTP listener.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

impl LogSettings {
    /// Filter directive scoping the configured level to terra's own events.
    pub fn directive(&self) -> String {
        format!("terra={}", self.level)
    }
}

impl TerraConfig {
    /// Loads configuration.
    ///
    /// With an explicit path the file must exist. Without one, `terra.toml`
    /// in the working directory is used when present, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => {
                let default = Path::new(CONFIG_FILE);
                if default.exists() {
                    Self::from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            TerraError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        toml::from_str(&content)
            .map_err(|e| TerraError::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TerraConfig::default();
        assert_eq!(config.server.listen_addr(), "127.0.0.1:4000");
        assert_eq!(config.database.url, "sqlite://terra.db");
        assert_eq!(config.logging.directive(), "terra=info");
        assert_eq!(config.logging.file, None);
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let err = TerraConfig::load(Some(Path::new("/nonexistent/terra.toml"))).unwrap_err();
        assert!(matches!(err, TerraError::Config(_)));
    }

    #[test]
    fn test_parse_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("terra.toml");
        std::fs::write(&path, "[server]\nport = 8080\n\n[logging]\nlevel = \"debug\"\n").unwrap();

        let config = TerraConfig::load(Some(&path)).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.bind, "127.0.0.1");
        assert_eq!(config.database.url, "sqlite://terra.db");
        assert_eq!(config.logging.directive(), "terra=debug");
    }
}
