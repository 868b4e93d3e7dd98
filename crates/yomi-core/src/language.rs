/// Script normalization used to compare a selection against dictionary forms
///
/// Implementations must be pure and total: the same input always yields the
/// same output and no input is rejected.
pub trait TextNormalizer: Send + Sync {
    /// Language identifier (ISO 639-1 code: "ja", "zh", "ko", etc.)
    fn language_code(&self) -> &str;

    /// Fold `text` into the single script form used for comparisons
    fn normalize(&self, text: &str) -> String;

    /// Whether `candidate` normalizes to the already normalized `target`
    fn matches(&self, candidate: &str, target: &str) -> bool {
        self.normalize(candidate) == target
    }
}

impl<T: TextNormalizer + ?Sized> TextNormalizer for &T {
    fn language_code(&self) -> &str {
        (**self).language_code()
    }

    fn normalize(&self, text: &str) -> String {
        (**self).normalize(text)
    }
}

/// Leaves text untouched; useful for scripts without variant forms
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityNormalizer;

impl TextNormalizer for IdentityNormalizer {
    fn language_code(&self) -> &str {
        "und"
    }

    fn normalize(&self, text: &str) -> String {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_matches_exact_only() {
        let normalizer = IdentityNormalizer;
        assert!(normalizer.matches("食べる", "食べる"));
        assert!(!normalizer.matches("タベル", "たべる"));
    }

    #[test]
    fn test_reference_forwards() {
        let normalizer = IdentityNormalizer;
        let by_ref = &normalizer;
        assert_eq!(by_ref.normalize("abc"), "abc");
        assert_eq!(by_ref.language_code(), "und");
    }
}
