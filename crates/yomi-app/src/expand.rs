use yomi_core::language::TextNormalizer;
use yomi_core::preprocess::Preprocessor;
use yomi_lang_japanese::{KanaNormalizer, RawWordRecord, ResultAssembler, ResultExtras, WordResult};

/// Expand every record against one selection
pub fn expand_records(
    records: &[RawWordRecord],
    selection: &str,
    preprocessor: &impl Preprocessor,
    extras: &ResultExtras,
) -> Vec<WordResult> {
    let normalizer = KanaNormalizer;
    let matching_text = normalizer.normalize(&preprocessor.process(selection));
    tracing::debug!("Matching {} records against {:?}", records.len(), matching_text);

    let assembler = ResultAssembler::with_normalizer(normalizer);
    records
        .iter()
        .map(|record| assembler.assemble(record, &matching_text, extras.clone()))
        .collect()
}

pub fn render(results: &[WordResult], pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(results)
    } else {
        serde_json::to_string(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yomi_core::preprocess::SelectionPreprocessor;
    use yomi_lang_japanese::WordRecordLoader;

    const RECORDS: &str = r#"{"k":["食べる","喫べる"],"r":["たべる"],"s":[{"g":["to eat"]}]}"#;

    #[test]
    fn test_expand_with_katakana_selection() {
        let records = WordRecordLoader::parse(RECORDS).unwrap();
        let extras = ResultExtras {
            reason: None,
            romaji: Some(vec!["taberu".to_string()]),
        };

        let results =
            expand_records(&records, " タベル ", &SelectionPreprocessor::default(), &extras);

        assert_eq!(results.len(), 1);
        assert!(results[0].k.iter().all(|k| k.matched));
        assert!(results[0].r[0].matched);
        assert_eq!(results[0].romaji, extras.romaji);
    }

    #[test]
    fn test_render_compact() {
        let records = WordRecordLoader::parse(RECORDS).unwrap();
        let results = expand_records(
            &records,
            "喫べる",
            &SelectionPreprocessor::default(),
            &ResultExtras::default(),
        );

        let text = render(&results, false).unwrap();
        assert!(!text.contains('\n'));
        assert!(text.contains(r#"{"ent":"喫べる","match":true}"#));
        assert!(text.contains(r#"{"ent":"食べる","match":false}"#));
    }
}
