use std::env;

use completion::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("GROQ_API_KEY not found. Set it in the environment or a .env file.")]
    MissingApiKey,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub groq_api_key: String,
    pub groq_base_url: String,
    pub groq_model: String,
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let groq_api_key = env::var("GROQ_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(Self {
            groq_api_key,
            groq_base_url: env::var("GROQ_BASE_URL").unwrap_or(DEFAULT_BASE_URL.to_string()),
            groq_model: env::var("GROQ_MODEL").unwrap_or(DEFAULT_MODEL.to_string()),
            bind_addr: env::var("BIND_ADDR").unwrap_or(DEFAULT_BIND_ADDR.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 4] = ["GROQ_API_KEY", "GROQ_BASE_URL", "GROQ_MODEL", "BIND_ADDR"];

    #[test]
    fn missing_api_key_fails() {
        temp_env::with_vars_unset(VARS, || {
            assert!(matches!(Config::from_env(), Err(ConfigError::MissingApiKey)));
        });
    }

    #[test]
    fn blank_api_key_fails() {
        temp_env::with_var("GROQ_API_KEY", Some("  "), || {
            assert!(matches!(Config::from_env(), Err(ConfigError::MissingApiKey)));
        });
    }

    #[test]
    fn defaults_apply() {
        temp_env::with_vars(
            [
                ("GROQ_API_KEY", Some("gsk_test")),
                ("GROQ_BASE_URL", None),
                ("GROQ_MODEL", None),
                ("BIND_ADDR", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.groq_api_key, "gsk_test");
                assert_eq!(config.groq_base_url, DEFAULT_BASE_URL);
                assert_eq!(config.groq_model, DEFAULT_MODEL);
                assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
            },
        );
    }

    #[test]
    fn overrides_apply() {
        temp_env::with_vars(
            [
                ("GROQ_API_KEY", Some("gsk_test")),
                ("GROQ_BASE_URL", Some("http://localhost:9000/v1")),
                ("GROQ_MODEL", Some("llama-3.3-70b-versatile")),
                ("BIND_ADDR", Some("127.0.0.1:3000")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.groq_base_url, "http://localhost:9000/v1");
                assert_eq!(config.groq_model, "llama-3.3-70b-versatile");
                assert_eq!(config.bind_addr, "127.0.0.1:3000");
            },
        );
    }
}
