use unicode_normalization::UnicodeNormalization;
use yomi_config::selection::SelectionConfig;

/// Cleans up raw selected text before it is normalized for matching
pub trait Preprocessor {
    fn config(&self) -> &SelectionConfig;

    fn process(&self, text: &str) -> String {
        let mut text = text.trim().to_string();

        if text.is_empty() {
            return text;
        }

        if self.config().nfkc {
            text = text.nfkc().collect();
        }

        text = text.replace(['\n', '\r'], "").trim().to_string();

        let max_chars = self.config().max_chars;
        if text.chars().count() > max_chars {
            text = text.chars().take(max_chars).collect();
        }

        text
    }
}

#[derive(Debug, Clone, Default)]
pub struct SelectionPreprocessor {
    config: SelectionConfig,
}

impl SelectionPreprocessor {
    pub fn new(config: SelectionConfig) -> Self {
        Self { config }
    }
}

impl Preprocessor for SelectionPreprocessor {
    fn config(&self) -> &SelectionConfig {
        &self.config
    }
}
