//! Startup configuration for the Live Differ process.
//!
//! Built once at process start from CLI arguments and environment
//! variables, then passed by value into the constructors that need it.
//! Nothing mutates it afterwards.

use std::env;
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;

pub const HOST_ENV_VAR: &str = "LIVE_DIFFER_HOST";
pub const PORT_ENV_VAR: &str = "LIVE_DIFFER_PORT";
pub const DEBUG_ENV_VAR: &str = "LIVE_DIFFER_DEBUG";

#[derive(Debug, Clone)]
pub struct DifferConfig {
    pub file1: PathBuf,
    pub file2: PathBuf,
    pub host: String,
    pub port: u16,
    pub debug: bool,
}

impl DifferConfig {
    /// Configuration for a file pair with host/port/debug taken from the
    /// environment, falling back to the defaults.
    pub fn from_env(file1: impl Into<PathBuf>, file2: impl Into<PathBuf>) -> DifferConfig {
        DifferConfig {
            file1: file1.into(),
            file2: file2.into(),
            host: env::var(HOST_ENV_VAR).unwrap_or_else(|_| String::from(DEFAULT_HOST)),
            port: env::var(PORT_ENV_VAR)
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(DEFAULT_PORT),
            debug: env::var(DEBUG_ENV_VAR)
                .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "t"))
                .unwrap_or(false),
        }
    }

    pub fn server(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Browsable URL for the startup banner. A wildcard bind address is not
    /// something a browser can open, so show localhost instead.
    pub fn url(&self) -> String {
        let host = if self.host == "0.0.0.0" {
            "localhost"
        } else {
            &self.host
        };
        format!("http://{}:{}", host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = DifferConfig {
            file1: PathBuf::from("a.txt"),
            file2: PathBuf::from("b.txt"),
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
            debug: false,
        };
        assert_eq!(config.server(), "127.0.0.1:5000");
        assert_eq!(config.url(), "http://127.0.0.1:5000");
    }

    #[test]
    fn test_config_url_maps_wildcard_to_localhost() {
        let config = DifferConfig {
            file1: PathBuf::from("a.txt"),
            file2: PathBuf::from("b.txt"),
            host: String::from("0.0.0.0"),
            port: 8080,
            debug: false,
        };
        assert_eq!(config.url(), "http://localhost:8080");
    }
}
