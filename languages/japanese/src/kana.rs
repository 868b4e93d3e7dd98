use yomi_core::language::TextNormalizer;

// ァ (U+30A1) .. ヶ (U+30F6) sit exactly 0x60 above their hiragana
const KATAKANA_TO_HIRAGANA: u32 = 0x60;

/// Convert katakana to hiragana, leaving everything else untouched
pub fn kana_to_hiragana(text: &str) -> String {
    text.chars().map(to_hiragana).collect()
}

fn to_hiragana(c: char) -> char {
    match c {
        // includes the iteration marks ヽ ヾ
        'ァ'..='ヶ' | 'ヽ' | 'ヾ' => char::from_u32(c as u32 - KATAKANA_TO_HIRAGANA).unwrap_or(c),
        _ => c,
    }
}

/// Folds katakana into hiragana so a reading matches whichever kana script
/// the selection used
#[derive(Debug, Clone, Copy, Default)]
pub struct KanaNormalizer;

impl TextNormalizer for KanaNormalizer {
    fn language_code(&self) -> &str {
        "ja"
    }

    fn normalize(&self, text: &str) -> String {
        kana_to_hiragana(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_katakana_folds() {
        assert_eq!(kana_to_hiragana("タベル"), "たべる");
        assert_eq!(kana_to_hiragana("ヴァイオリン"), "ゔぁいおりん");
        assert_eq!(kana_to_hiragana("ヵヶ"), "ゕゖ");
        assert_eq!(kana_to_hiragana("ヽヾ"), "ゝゞ");
    }

    #[test]
    fn test_other_scripts_untouched() {
        assert_eq!(kana_to_hiragana("食べる"), "食べる");
        assert_eq!(kana_to_hiragana("ラーメン"), "らーめん");
        assert_eq!(kana_to_hiragana("abc・"), "abc・");
        assert_eq!(kana_to_hiragana(""), "");
    }

    #[test]
    fn test_normalizer_matches() {
        let normalizer = KanaNormalizer;
        assert!(normalizer.matches("タベル", "たべる"));
        assert!(!normalizer.matches("食べる", "たべる"));
    }
}
