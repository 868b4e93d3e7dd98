use std::env;

use serde::{Deserialize, Serialize};

fn default_nfkc() -> bool {
    true
}

fn default_max_chars() -> usize {
    32
}

/// How the user's selected text is cleaned up before matching
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SelectionConfig {
    /// Apply Unicode NFKC (folds half-width katakana, full-width latin, ...)
    #[serde(default = "default_nfkc")]
    pub nfkc: bool,
    /// Selections longer than this are cut, counted in chars
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
}

impl SelectionConfig {
    pub fn new() -> Self {
        let nfkc = env::var("YOMI_SELECTION_NFKC")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_nfkc);

        let max_chars = env::var("YOMI_SELECTION_MAX_CHARS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_max_chars);

        Self { nfkc, max_chars }
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            nfkc: default_nfkc(),
            max_chars: default_max_chars(),
        }
    }
}
