use serde::{Deserialize, Serialize};
use std::env;
use crate::errors::ConfigError;

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 9000;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: Self::get_env("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: Self::get_env_u16("PORT", DEFAULT_PORT)?,
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn get_env(key: &str) -> Result<String, ConfigError> {
        env::var(key).map_err(|_| ConfigError::MissingVar(key.to_string()))
    }

    fn get_env_u16(key: &str, default: u16) -> Result<u16, ConfigError> {
        match Self::get_env(key) {
            Ok(val) => val
                .parse::<u16>()
                .map_err(|e| ConfigError::ParseError(key.to_string(), e)),
            Err(ConfigError::MissingVar(_)) => Ok(default),
            Err(e) => Err(e),
        }
    }
}
