//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `campus.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::collections::HashSet;

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Database settings.
    pub database: DatabaseConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Known API callers.
    pub auth: AuthConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// `SQLite` database configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `SQLite` connection URL or file path.
    pub url: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Bearer tokens accepted by the API.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub users: Vec<UserConfig>,
}

/// One `[[auth.users]]` entry.
#[derive(Debug, Deserialize)]
pub struct UserConfig {
    pub email: String,
    pub token: String,
    #[serde(default)]
    pub admin: bool,
}

impl Config {
    /// Load configuration from `campus.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("campus.toml")?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("CAMPUS_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("CAMPUS_PORT") {
            self.server.port = parse_port("CAMPUS_PORT", &val)?;
        }
        if let Ok(val) = std::env::var("CAMPUS_BIND") {
            self.apply_bind(&val)?;
        }
        if let Ok(val) = std::env::var("CAMPUS_DATABASE_URL") {
            self.database.url = val;
        }
        if let Ok(val) = std::env::var("CAMPUS_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
        Ok(())
    }

    /// Split a `host:port` value over the server section. A value without
    /// a port only sets the host.
    fn apply_bind(&mut self, value: &str) -> Result<(), ConfigError> {
        match value.rsplit_once(':') {
            Some((host, port)) => {
                self.server.port = parse_port("CAMPUS_BIND", port)?;
                self.server.host = host.to_string();
            }
            None => self.server.host = value.to_string(),
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }

        let mut seen = HashSet::new();
        for user in &self.auth.users {
            if user.token.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "empty token for user {}",
                    user.email
                )));
            }
            if !seen.insert(user.token.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate token for user {}",
                    user.email
                )));
            }
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Return the database URL in `sqlx`-compatible format.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database.url
    }
}

fn parse_port(variable: &str, value: &str) -> Result<u16, ConfigError> {
    value.trim().parse().map_err(|_| {
        ConfigError::Validation(format!("{variable} has an invalid port: {value:?}"))
    })
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:campus.db?mode=rwc".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "campusd=info,campus=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(email: &str, token: &str) -> UserConfig {
        UserConfig {
            email: email.to_string(),
            token: token.to_string(),
            admin: false,
        }
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.url, "sqlite:campus.db?mode=rwc");
        assert!(config.auth.users.is_empty());
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9090

            [database]
            url = 'sqlite:test.db'

            [logging]
            filter = 'debug'

            [[auth.users]]
            email = 'cgaucho@ucsb.edu'
            token = 'user-token'

            [[auth.users]]
            email = 'phtcon@ucsb.edu'
            token = 'admin-token'
            admin = true
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.database.url, "sqlite:test.db");
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.auth.users.len(), 2);
        assert!(!config.auth.users[0].admin);
        assert!(config.auth.users[1].admin);
        assert_eq!(config.auth.users[1].token, "admin-token");
    }

    #[test]
    fn should_report_parse_error_when_user_lacks_token() {
        let toml = "
            [[auth.users]]
            email = 'cgaucho@ucsb.edu'
        ";
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_accept_valid_port() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_reject_duplicate_tokens() {
        let mut config = Config::default();
        config.auth.users = vec![user("a@ucsb.edu", "same"), user("b@ucsb.edu", "same")];
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid configuration: duplicate token for user b@ucsb.edu"
        );
    }

    #[test]
    fn should_reject_empty_token() {
        let mut config = Config::default();
        config.auth.users = vec![user("a@ucsb.edu", "  ")];
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn should_accept_distinct_tokens() {
        let mut config = Config::default();
        config.auth.users = vec![user("a@ucsb.edu", "one"), user("b@ucsb.edu", "two")];
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_split_bind_value_into_host_and_port() {
        let mut config = Config::default();
        config.apply_bind("127.0.0.1:9000").unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn should_only_set_host_when_bind_value_has_no_port() {
        let mut config = Config::default();
        config.apply_bind("localhost").unwrap();
        assert_eq!(config.server.host, "localhost");
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn should_reject_bind_value_with_invalid_port() {
        let mut config = Config::default();
        let err = config.apply_bind("127.0.0.1:http").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid configuration: CAMPUS_BIND has an invalid port: \"http\""
        );
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn should_parse_port_value() {
        assert_eq!(parse_port("CAMPUS_PORT", " 9090 ").unwrap(), 9090);
    }

    #[test]
    fn should_reject_unparsable_port_value() {
        assert!(matches!(
            parse_port("CAMPUS_PORT", "eighty"),
            Err(ConfigError::Validation(_))
        ));
        assert!(parse_port("CAMPUS_PORT", "70000").is_err());
    }

    #[test]
    fn should_format_custom_bind_addr() {
        let mut config = Config::default();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 9090;
        assert_eq!(config.bind_addr(), "127.0.0.1:9090");
    }

    #[test]
    fn should_return_database_url() {
        let config = Config::default();
        assert_eq!(config.database_url(), "sqlite:campus.db?mode=rwc");
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [server]
            port = 3000
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.database.url, "sqlite:campus.db?mode=rwc");
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }
}
