//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Host server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the built UI bundle (`index.html` + assets)
    #[serde(default = "default_dist_dir")]
    pub dist_dir: PathBuf,

    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_dist_dir() -> PathBuf {
    PathBuf::from("coastwatch-ui/dist")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            dist_dir: default_dist_dir(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn index_path(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable, for development
    #[default]
    Pretty,
    /// One JSON object per line, for production
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format: {}", other)),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment.
    ///
    /// Nothing is logged here; the caller logs the returned [`LoadReport`]
    /// once its subscriber is installed.
    pub fn load_default() -> (Self, LoadReport) {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("coastwatch").join("config.toml")),
            Some(PathBuf::from("/etc/coastwatch/config.toml")),
            Some(PathBuf::from("./coastwatch.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths)
    }

    /// Load the first existing file of `paths` that parses. Files that exist
    /// but fail to load are recorded in the report and skipped.
    pub fn load_first(paths: &[PathBuf]) -> (Self, LoadReport) {
        let mut skipped = Vec::new();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(config) => {
                    let report = LoadReport {
                        source: ConfigSource::File(path.clone()),
                        skipped,
                    };
                    return (config, report);
                }
                Err(e) => skipped.push(e),
            }
        }

        let report = LoadReport {
            source: ConfigSource::Defaults,
            skipped,
        };
        (Self::from_env(), report)
    }

    /// Apply `COASTWATCH_*` environment variable overrides
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup. Unparseable values are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(host) = lookup("COASTWATCH_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("COASTWATCH_PORT").and_then(|p| p.parse().ok()) {
            self.server.port = port;
        }
        if let Some(dist_dir) = lookup("COASTWATCH_DIST_DIR") {
            self.server.dist_dir = PathBuf::from(dist_dir);
        }
        if let Some(level) = lookup("COASTWATCH_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("COASTWATCH_LOG_FORMAT").and_then(|f| f.parse().ok()) {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Where the loaded configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// Built-in defaults plus environment overrides
    Defaults,
}

/// Outcome of a config search, logged by the caller
#[derive(Debug)]
pub struct LoadReport {
    pub source: ConfigSource,
    /// Files that exist but could not be loaded
    pub skipped: Vec<ConfigError>,
}

impl LoadReport {
    /// Report for a config file given explicitly
    pub fn file(path: PathBuf) -> Self {
        Self {
            source: ConfigSource::File(path),
            skipped: Vec::new(),
        }
    }

    /// Emit the outcome through `tracing`
    pub fn log(&self) {
        for error in &self.skipped {
            tracing::warn!("{}; skipping", error);
        }
        match &self.source {
            ConfigSource::File(path) => tracing::info!("Loaded config from {:?}", path),
            ConfigSource::Defaults => {
                tracing::info!("Using default config with environment overrides")
            }
        }
    }
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# CoastWatch Configuration
#
# Environment variables override these settings:
# - COASTWATCH_HOST
# - COASTWATCH_PORT
# - COASTWATCH_DIST_DIR
# - COASTWATCH_LOG_LEVEL
# - COASTWATCH_LOG_FORMAT

[server]
# Host server bind address
host = "0.0.0.0"

# Host server port
port = 8080

# Built UI bundle (output of `trunk build` in coastwatch-ui/)
dist_dir = "coastwatch-ui/dist"

# Allowed CORS origins (empty = same-origin only)
cors_origins = []

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.addr(), "0.0.0.0:8080");
        assert_eq!(config.server.index_path(), PathBuf::from("coastwatch-ui/dist/index.html"));
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_generated_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.server.port, 8080);
        assert!(config.server.cors_origins.is_empty());
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config = Config::parse("[server]\nport = 9000\n\n[logging]\nformat = \"json\"\n").unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_reports_path_on_errors() {
        let dir = tempdir().unwrap();

        let missing = dir.path().join("missing.toml");
        assert!(matches!(Config::load(&missing), Err(ConfigError::Io { path, .. }) if path == missing));

        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "[server\nport = ").unwrap();
        assert!(matches!(Config::load(&broken), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_first_skips_broken_files() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let broken = dir.path().join("broken.toml");
        let good = dir.path().join("good.toml");
        std::fs::write(&broken, "[server\nport = ").unwrap();
        std::fs::write(&good, "[server]\ncors_origins = [\"http://localhost:8081\"]\n").unwrap();

        let (config, report) = Config::load_first(&[missing, broken.clone(), good.clone()]);

        assert_eq!(report.source, ConfigSource::File(good));
        assert_eq!(report.skipped.len(), 1);
        assert!(matches!(&report.skipped[0], ConfigError::Parse { path, .. } if *path == broken));
        assert_eq!(config.server.cors_origins, vec!["http://localhost:8081".to_string()]);
    }

    #[test]
    fn test_load_first_reports_fallback_to_defaults() {
        let dir = tempdir().unwrap();
        let broken = dir.path().join("coastwatch.toml");
        std::fs::write(&broken, "port = \"eighty\"\n[server").unwrap();

        let (config, report) = Config::load_first(&[broken.clone()]);

        assert_eq!(report.source, ConfigSource::Defaults);
        assert!(matches!(&report.skipped[..], [ConfigError::Parse { path, .. }] if *path == broken));
        assert!(config.server.cors_origins.is_empty());
    }

    #[test]
    fn test_load_first_with_no_files_is_clean() {
        let dir = tempdir().unwrap();

        let (_, report) = Config::load_first(&[dir.path().join("absent.toml")]);

        assert_eq!(report.source, ConfigSource::Defaults);
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("COASTWATCH_HOST", "127.0.0.1"),
            ("COASTWATCH_PORT", "3000"),
            ("COASTWATCH_DIST_DIR", "/srv/coastwatch"),
            ("COASTWATCH_LOG_FORMAT", "JSON"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.server.addr(), "127.0.0.1:3000");
        assert_eq!(config.server.dist_dir, PathBuf::from("/srv/coastwatch"));
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_bad_override_values_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| match key {
            "COASTWATCH_PORT" => Some("eighty".to_string()),
            "COASTWATCH_LOG_FORMAT" => Some("xml".to_string()),
            _ => None,
        });

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }
}
