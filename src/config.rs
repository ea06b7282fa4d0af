//! Configuration management for Libros server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins, `*` allows any origin
    pub origins: String,
    pub allow_credentials: bool,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from `config/` and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new("config"))
    }

    /// Load configuration from the files in `dir` and environment variables.
    /// Missing files and keys fall back to the defaults.
    pub fn load_from(dir: &Path) -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let file = |name: &str| File::with_name(&dir.join(name).to_string_lossy()).required(false);

        let config = Config::builder()
            // Start with default configuration
            .add_source(file("default"))
            // Layer on the environment-specific file
            .add_source(file(&run_mode))
            // Add environment variables (LIBROS_SERVER__PORT, LIBROS_CORS__ORIGINS, ...)
            .add_source(
                Environment::with_prefix("LIBROS")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("cors.origins", env::var("CORS_ORIGINS").ok())?
            .set_override_option("server.port", env::var("PORT").ok())?
            .set_override_option("logging.level", env::var("LOG_LEVEL").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl CorsConfig {
    /// Whether any origin is accepted
    pub fn allows_any_origin(&self) -> bool {
        self.origin_list().iter().any(|origin| origin == "*")
    }

    /// Explicit origins, trimmed, with blanks removed
    pub fn origin_list(&self) -> Vec<String> {
        self.origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            origins: "*".to_string(),
            allow_credentials: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::sync::Mutex;

    use tempfile::TempDir;

    use super::*;

    fn cors(origins: &str) -> CorsConfig {
        CorsConfig {
            origins: origins.to_string(),
            allow_credentials: true,
        }
    }

    #[test]
    fn test_default_cors_allows_everything() {
        let config = CorsConfig::default();
        assert!(config.allows_any_origin());
        assert!(config.allow_credentials);
    }

    #[test]
    fn test_origin_list_is_trimmed() {
        let config = cors(" https://a.example , https://b.example,, ");
        assert_eq!(
            config.origin_list(),
            vec!["https://a.example".to_string(), "https://b.example".to_string()]
        );
        assert!(!config.allows_any_origin());
    }

    #[test]
    fn test_wildcard_among_origins() {
        assert!(cors("https://a.example,*").allows_any_origin());
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    const ENV_VARS: &[&str] = &[
        "RUN_MODE",
        "CORS_ORIGINS",
        "PORT",
        "LOG_LEVEL",
        "LIBROS_SERVER__HOST",
        "LIBROS_SERVER__PORT",
        "LIBROS_CORS__ALLOW_CREDENTIALS",
        "LIBROS_LOGGING__FORMAT",
    ];

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Run `f` with only the given configuration variables set
    fn with_env<R>(vars: &[(&str, &str)], f: impl FnOnce() -> R) -> R {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        for name in ENV_VARS {
            env::remove_var(name);
        }
        for (name, value) in vars {
            env::set_var(name, value);
        }
        let result = f();
        for (name, _) in vars {
            env::remove_var(name);
        }
        result
    }

    #[test]
    fn test_load_without_files_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = with_env(&[], || AppConfig::load_from(dir.path())).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert!(config.cors.allows_any_origin());
        assert!(config.cors.allow_credentials);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_without_files_applies_direct_overrides() {
        let dir = TempDir::new().unwrap();
        let config = with_env(
            &[
                ("PORT", "9000"),
                ("CORS_ORIGINS", "https://a.example,https://b.example"),
                ("LOG_LEVEL", "debug"),
            ],
            || AppConfig::load_from(dir.path()),
        )
        .unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.cors.origin_list(), vec!["https://a.example", "https://b.example"]);
        assert!(config.cors.allow_credentials);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_layers_files_by_run_mode() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            "[server]\nport = 7000\n\n[logging]\nlevel = \"warn\"\nformat = \"json\"\n",
        )
        .unwrap();
        fs::write(dir.path().join("production.toml"), "[logging]\nlevel = \"error\"\n").unwrap();

        let config = with_env(&[("RUN_MODE", "production")], || AppConfig::load_from(dir.path()))
            .unwrap();

        assert_eq!(config.server.port, 7000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.logging.level, "error");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_load_prefixed_env_and_override_precedence() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("default.toml"), "[cors]\norigins = \"https://file.example\"\n")
            .unwrap();

        let config = with_env(
            &[
                ("LIBROS_SERVER__HOST", "127.0.0.1"),
                ("LIBROS_SERVER__PORT", "8100"),
                ("LIBROS_CORS__ALLOW_CREDENTIALS", "false"),
                ("PORT", "8200"),
            ],
            || AppConfig::load_from(dir.path()),
        )
        .unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8200);
        assert_eq!(config.cors.origins, "https://file.example");
        assert!(!config.cors.allow_credentials);
    }
}
