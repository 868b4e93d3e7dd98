use yomi_core::language::TextNormalizer;

/// How the candidates of one field are flagged for a lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRegime {
    /// The selection matched a form in this field; only exact forms are flagged
    Discriminating,
    /// Nothing in this field matched; every form is flagged
    Permissive,
}

/// Which of a word's kanji and reading forms the selection matched
///
/// A kanji match takes priority: when one exists the readings are never
/// compared and are all flagged.
pub struct MatchAnnotation<'a, N> {
    normalizer: N,
    matching_text: &'a str,
    kanji_matched: bool,
    kana_matched: bool,
}

impl<'a, N: TextNormalizer> MatchAnnotation<'a, N> {
    /// `matching_text` must already be normalized with `normalizer`
    pub fn new<K, R>(normalizer: N, kanji: &[K], readings: &[R], matching_text: &'a str) -> Self
    where
        K: AsRef<str>,
        R: AsRef<str>,
    {
        let kanji_matched = kanji
            .iter()
            .any(|k| normalizer.matches(k.as_ref(), matching_text));
        let kana_matched = !kanji_matched
            && readings
                .iter()
                .any(|r| normalizer.matches(r.as_ref(), matching_text));

        Self {
            normalizer,
            matching_text,
            kanji_matched,
            kana_matched,
        }
    }

    pub fn kanji_matched(&self) -> bool {
        self.kanji_matched
    }

    pub fn kana_matched(&self) -> bool {
        self.kana_matched
    }

    pub fn kanji_regime(&self) -> MatchRegime {
        regime(self.kanji_matched)
    }

    pub fn reading_regime(&self) -> MatchRegime {
        regime(self.kana_matched)
    }

    pub fn kanji_flag(&self, kanji: &str) -> bool {
        self.flag(self.kanji_matched, kanji)
    }

    pub fn reading_flag(&self, reading: &str) -> bool {
        self.flag(self.kana_matched, reading)
    }

    fn flag(&self, field_matched: bool, key: &str) -> bool {
        !field_matched || self.normalizer.matches(key, self.matching_text)
    }
}

fn regime(field_matched: bool) -> MatchRegime {
    if field_matched {
        MatchRegime::Discriminating
    } else {
        MatchRegime::Permissive
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kana::KanaNormalizer;
    use yomi_core::language::IdentityNormalizer;

    const KANJI: [&str; 2] = ["食べる", "喫べる"];
    const READINGS: [&str; 1] = ["たべる"];

    #[test]
    fn test_kanji_match_discriminates() {
        let annotation = MatchAnnotation::new(KanaNormalizer, &KANJI, &READINGS, "食べる");

        assert!(annotation.kanji_matched());
        assert!(!annotation.kana_matched());
        assert_eq!(annotation.kanji_regime(), MatchRegime::Discriminating);
        assert_eq!(annotation.reading_regime(), MatchRegime::Permissive);

        assert!(annotation.kanji_flag("食べる"));
        assert!(!annotation.kanji_flag("喫べる"));
        assert!(annotation.reading_flag("たべる"));
    }

    #[test]
    fn test_reading_match_is_permissive_for_kanji() {
        let annotation = MatchAnnotation::new(KanaNormalizer, &KANJI, &READINGS, "たべる");

        assert!(!annotation.kanji_matched());
        assert!(annotation.kana_matched());
        assert!(KANJI.iter().all(|k| annotation.kanji_flag(k)));
        assert!(annotation.reading_flag("たべる"));
    }

    #[test]
    fn test_katakana_reading_is_normalized() {
        let readings = ["たべる", "タベル", "くう"];
        let annotation = MatchAnnotation::new(KanaNormalizer, &KANJI, &readings, "たべる");

        assert_eq!(annotation.reading_regime(), MatchRegime::Discriminating);
        let flags: Vec<bool> = readings.iter().map(|r| annotation.reading_flag(r)).collect();
        assert_eq!(flags, vec![true, true, false]);
    }

    #[test]
    fn test_no_match_flags_everything() {
        let annotation = MatchAnnotation::new(KanaNormalizer, &KANJI, &READINGS, "のむ");

        assert!(!annotation.kanji_matched());
        assert!(!annotation.kana_matched());
        assert!(KANJI.iter().all(|k| annotation.kanji_flag(k)));
        assert!(READINGS.iter().all(|r| annotation.reading_flag(r)));
    }

    #[test]
    fn test_identity_normalizer_keeps_scripts_apart() {
        let readings = ["たべる", "タベル"];
        let annotation = MatchAnnotation::new(IdentityNormalizer, &KANJI, &readings, "タベル");

        assert!(annotation.kana_matched());
        assert!(!annotation.reading_flag("たべる"));
        assert!(annotation.reading_flag("タベル"));
    }

    #[test]
    fn test_kana_only_word() {
        let kanji: [&str; 0] = [];
        let annotation = MatchAnnotation::new(KanaNormalizer, &kanji, &["ああ", "あー"], "ああ");

        assert!(annotation.kana_matched());
        assert!(annotation.reading_flag("ああ"));
        assert!(!annotation.reading_flag("あー"));
    }
}
