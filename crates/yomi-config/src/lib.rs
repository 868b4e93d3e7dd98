use serde::{Deserialize, Serialize};

use self::logging::LoggingConfig;
use self::output::OutputConfig;
use self::selection::SelectionConfig;

pub mod logging;
pub mod output;
pub mod selection;

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub output: OutputConfig,
    pub selection: SelectionConfig,
}

impl Config {
    /// Build the config from the environment, falling back to defaults
    /// for anything unset or unparsable
    pub fn new() -> Self {
        Config {
            logging: LoggingConfig::new(),
            output: OutputConfig::new(),
            selection: SelectionConfig::new(),
        }
    }
}
