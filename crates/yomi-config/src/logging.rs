use std::env;

use serde::{Deserialize, Serialize};

fn default_filter() -> String {
    "info".to_string()
}

fn default_json() -> bool {
    false
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Emit logs as JSON lines instead of human readable text
    #[serde(default = "default_json")]
    pub json: bool,
}

impl LoggingConfig {
    pub fn new() -> Self {
        let filter = env::var("YOMI_LOG_FILTER").unwrap_or_else(|_| default_filter());

        let json = env::var("YOMI_LOG_JSON")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_json);

        Self { filter, json }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: default_json(),
        }
    }
}
