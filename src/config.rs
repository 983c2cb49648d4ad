use std::{env, net::IpAddr, path::PathBuf, str::FromStr};

use dotenvy::dotenv;
use log::{debug, info, warn};
use serde::Deserialize;

use crate::errors::ConfigError;

// Server-specific configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub workers: usize,
}

// Application-specific configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub name: String,
    pub version: String,
    pub environment: Environment,
    pub log_level: String,
    /// Directory holding `index.html` and `short.html`
    pub static_dir: PathBuf,
}

// Environment enum for different deployment environments
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Testing,
    Production,
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "testing" | "test" => Ok(Environment::Testing),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(format!(
                "Invalid environment: {}. Must be one of: development, testing, production",
                s
            )),
        }
    }
}

type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub app: AppConfig,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every variable has a default, so an empty environment yields a server
    /// on `0.0.0.0:8080` serving templates from `./static`.
    pub fn load() -> ConfigResult<Self> {
        match dotenv() {
            Ok(_) => debug!(".env file loaded successfully"),
            Err(e) => warn!("Could not load .env file: {}", e),
        }

        let server = ServerConfig {
            host: get_env_or_default("SERVER_HOST", "0.0.0.0")?,
            port: get_env_or_default("SERVER_PORT", "8080")?,
            workers: get_env_or_default("SERVER_WORKERS", "4")?,
        };

        let version = env!("CARGO_PKG_VERSION").to_string();

        let app = AppConfig {
            name: get_env_or_default("APP_NAME", "url-shortn")?,
            version: env::var("APP_VERSION").unwrap_or(version),
            environment: get_env_or_default("APP_ENVIRONMENT", "development")?,
            log_level: get_env_or_default("RUST_LOG", "info")?,
            static_dir: get_env_or_default("STATIC_DIR", "static")?,
        };

        let config = Config { server, app };
        info!("Configuration loaded successfully");
        debug!("Loaded config: {:?}", config);

        Ok(config)
    }
}

/// Helper function to get an env variable with a default value
fn get_env_or_default<T: FromStr>(key: &str, default: &str) -> ConfigResult<T>
where
    T::Err: std::fmt::Display,
{
    let value = match env::var(key) {
        Ok(val) => val,
        Err(env::VarError::NotPresent) => {
            debug!("{} not set, using default: {}", key, default);
            default.to_string()
        }
        Err(source) => {
            return Err(ConfigError::EnvVar {
                key: key.to_string(),
                source,
            })
        }
    };

    value.parse::<T>().map_err(|e| ConfigError::Parse {
        key: key.to_string(),
        reason: e.to_string(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_str() {
        assert_eq!("dev".parse::<Environment>(), Ok(Environment::Development));
        assert_eq!("Production".parse::<Environment>(), Ok(Environment::Production));
        assert_eq!("test".parse::<Environment>(), Ok(Environment::Testing));
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn test_default_is_used_when_unset() {
        let port: u16 = get_env_or_default("URL_SHORTN_TEST_UNSET_PORT", "8080").unwrap();
        assert_eq!(port, 8080);
    }

    #[test]
    fn test_unparseable_value_is_reported() {
        env::set_var("URL_SHORTN_TEST_BAD_PORT", "eighty");
        let err = get_env_or_default::<u16>("URL_SHORTN_TEST_BAD_PORT", "8080").unwrap_err();
        env::remove_var("URL_SHORTN_TEST_BAD_PORT");

        match err {
            ConfigError::Parse { key, value, .. } => {
                assert_eq!(key, "URL_SHORTN_TEST_BAD_PORT");
                assert_eq!(value, "eighty");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
