//! Application configuration management.
//!
//! Configuration is read from environment variables with the `envy` crate,
//! after an optional `.env` file has been loaded.

use serde::Deserialize;

/// Server configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `SERVER_ADDRESS` (optional): interface to bind, defaults to `0.0.0.0`
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 8000
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default = "default_address")]
    pub server_address: String,

    #[serde(default = "default_port")]
    pub server_port: u16,
}

fn default_address() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_address: default_address(),
            server_port: default_port(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed
    /// (e.g. a non-numeric `SERVER_PORT`).
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();

        envy::from_env::<Config>()
    }

    /// Socket address string suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server_address, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config: Config = envy::from_iter(vars(&[])).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn overrides_are_read() {
        let config: Config = envy::from_iter(vars(&[
            ("SERVER_ADDRESS", "127.0.0.1"),
            ("SERVER_PORT", "9090"),
        ]))
        .unwrap();

        assert_eq!(config.server_address, "127.0.0.1");
        assert_eq!(config.server_port, 9090);
        assert_eq!(config.bind_addr(), "127.0.0.1:9090");
    }

    #[test]
    fn invalid_port_is_rejected() {
        let result = envy::from_iter::<_, Config>(vars(&[("SERVER_PORT", "not-a-port")]));

        assert!(result.is_err());
    }
}
