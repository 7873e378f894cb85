// src/core/config.rs
use std::env;

use log::LevelFilter;

// Configuration for the API server
#[derive(Debug, Clone)]
pub struct Config {
    // Web interface
    pub host: String,
    pub port: u16,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Config::default();

        if let Ok(host) = env::var("PASSFORGE_HOST") {
            config.host = host;
        }

        if let Some(port) = env::var("PASSFORGE_PORT")
            .ok()
            .and_then(|value| value.parse().ok())
        {
            config.port = port;
        }

        if let Ok(level) = env::var("PASSFORGE_LOG_LEVEL") {
            config.log_level = match level.to_lowercase().as_str() {
                "trace" => LevelFilter::Trace,
                "debug" => LevelFilter::Debug,
                "info" => LevelFilter::Info,
                "warn" => LevelFilter::Warn,
                "error" => LevelFilter::Error,
                "off" => LevelFilter::Off,
                _ => config.log_level,
            };
        }

        config
    }
}
