use anyhow::Result;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub password: PasswordConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the listen address as a string in the format "host:port".
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Argon2 cost parameters used when hashing passwords.
#[derive(Debug, Clone, Deserialize)]
pub struct PasswordConfig {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Settings {
    fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8698)?
            .set_default("logging.level", "debug")?
            .set_default("password.memory_kib", 19_456)?
            .set_default("password.iterations", 2)?
            .set_default("password.parallelism", 1)?)
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix("HELPERS")
            .prefix_separator("_")
            .separator("__")
            .convert_case(config::Case::Snake)
            .ignore_empty(true)
            .try_parsing(true)
    }

    /// ## Summary
    /// Loads configuration from environment variables and an optional
    /// `config.toml` on top of the built-in defaults.
    ///
    /// Environment variables use the `HELPERS_` prefix and `__` between
    /// sections, e.g. `HELPERS_PASSWORD__MEMORY_KIB`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Self::defaults()?
            .add_source(Self::environment())
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Self>()?)
    }

    /// ## Summary
    /// Builds settings from a TOML document layered over the defaults.
    ///
    /// ## Errors
    /// Returns an error if the document is not valid TOML or does not
    /// deserialize into `Settings`.
    pub fn from_toml(document: &str) -> Result<Self> {
        Ok(Self::defaults()?
            .add_source(config::File::from_str(document, config::FileFormat::Toml))
            .build()?
            .try_deserialize::<Self>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::from_toml("").expect("defaults deserialize");

        assert_eq!(settings.server.bind_addr(), "0.0.0.0:8698");
        assert_eq!(settings.logging.level, "debug");
        assert_eq!(settings.password.memory_kib, 19_456);
        assert_eq!(settings.password.iterations, 2);
        assert_eq!(settings.password.parallelism, 1);
    }

    #[test]
    fn test_toml_overrides_defaults() {
        let settings = Settings::from_toml(
            r#"
            [server]
            port = 9000

            [logging]
            level = "info"

            [password]
            iterations = 4
            "#,
        )
        .expect("valid document");

        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.logging.level, "info");
        assert_eq!(settings.password.iterations, 4);
        assert_eq!(settings.password.memory_kib, 19_456);
    }

    #[test]
    fn test_environment_names_use_double_underscore() {
        let vars: config::Map<String, String> = [
            ("HELPERS_PASSWORD__MEMORY_KIB", "2048"),
            ("HELPERS_SERVER__PORT", "9100"),
            ("HELPERS_LOGGING__LEVEL", "warn"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let settings = Settings::defaults()
            .expect("defaults")
            .add_source(Settings::environment().source(Some(vars)))
            .build()
            .expect("build")
            .try_deserialize::<Settings>()
            .expect("deserialize");

        assert_eq!(settings.password.memory_kib, 2048);
        assert_eq!(settings.server.port, 9100);
        assert_eq!(settings.logging.level, "warn");
        assert_eq!(settings.password.iterations, 2);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        assert!(Settings::from_toml("[server]\nport = \"not a port\"").is_err());
    }
}
