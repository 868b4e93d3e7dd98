use std::env;

use serde::{Deserialize, Serialize};

fn default_pretty() -> bool {
    false
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct OutputConfig {
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl OutputConfig {
    pub fn new() -> Self {
        let pretty = env::var("YOMI_PRETTY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_pretty);

        Self { pretty }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
        }
    }
}
