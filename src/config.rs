use std::net::SocketAddr;

use crate::client::DEFAULT_API_URL;
use crate::error::{AppError, AppResult};

/// Runtime settings, read from the environment (and `.env` when present).
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: String,
    pub api_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT").unwrap_or_else(|| "3000".to_string()),
            api_url: lookup("DOMINOS_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        }
    }

    pub fn addr(&self) -> AppResult<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|_| AppError::Config(format!("invalid listen address {addr:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.addr().unwrap(), "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("DOMINOS_API_URL", "http://localhost:9000/power"),
        ]);
        assert_eq!(config.api_url, "http://localhost:9000/power");
        assert_eq!(config.addr().unwrap().port(), 8080);
    }

    #[test]
    fn test_bad_address() {
        let config = config(&[("PORT", "eighty")]);
        assert!(matches!(config.addr(), Err(AppError::Config(_))));
    }
}
