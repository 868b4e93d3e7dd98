use serde::Serialize;
use yomi_core::language::TextNormalizer;

use crate::gloss::{Gloss, expand_glosses};
use crate::kana::KanaNormalizer;
use crate::matcher::MatchAnnotation;
use crate::meta::merge_meta;
use crate::record::{KanjiMeta, RawWordRecord, RawWordSense, ReadingMeta, SenseFields};

/// A fully expanded word, ready for rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordResult {
    pub k: Vec<ExpandedKanji>,
    pub r: Vec<ExpandedReading>,
    pub s: Vec<ExpandedSense>,
    /// Deinflection reason, e.g. "< past"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub romaji: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpandedKanji {
    pub ent: String,
    #[serde(flatten)]
    pub meta: Option<KanjiMeta>,
    #[serde(rename = "match")]
    pub matched: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpandedReading {
    pub ent: String,
    #[serde(flatten)]
    pub meta: Option<ReadingMeta>,
    #[serde(rename = "match")]
    pub matched: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpandedSense {
    pub g: Vec<Gloss>,
    #[serde(flatten)]
    pub fields: SenseFields,
    #[serde(rename = "match")]
    pub matched: bool,
}

/// Annotations computed by the caller and forwarded untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultExtras {
    pub reason: Option<String>,
    pub romaji: Option<Vec<String>>,
}

/// Expands stored word records into [`WordResult`]s
pub struct ResultAssembler<N = KanaNormalizer> {
    normalizer: N,
}

impl ResultAssembler<KanaNormalizer> {
    pub fn new() -> Self {
        Self::with_normalizer(KanaNormalizer)
    }
}

impl Default for ResultAssembler<KanaNormalizer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: TextNormalizer> ResultAssembler<N> {
    pub fn with_normalizer(normalizer: N) -> Self {
        Self { normalizer }
    }

    /// Expand `entry`, flagging the forms that match `matching_text`
    ///
    /// `matching_text` is the selection after it went through this
    /// assembler's normalizer.
    pub fn assemble(
        &self,
        entry: &RawWordRecord,
        matching_text: &str,
        extras: ResultExtras,
    ) -> WordResult {
        let kanji = entry.k.as_deref().unwrap_or_default();
        let annotation =
            MatchAnnotation::new(&self.normalizer, kanji, entry.r.as_slice(), matching_text);

        tracing::debug!(
            kanji_regime = ?annotation.kanji_regime(),
            reading_regime = ?annotation.reading_regime(),
            "Annotated word record"
        );

        WordResult {
            k: merge_meta(entry.k.as_deref(), entry.km.as_deref(), |key, meta| {
                ExpandedKanji {
                    ent: key.clone(),
                    meta: meta.cloned(),
                    matched: annotation.kanji_flag(key),
                }
            }),
            r: merge_meta(Some(entry.r.as_slice()), entry.rm.as_deref(), |key, meta| {
                ExpandedReading {
                    ent: key.clone(),
                    meta: meta.cloned(),
                    matched: annotation.reading_flag(key),
                }
            }),
            s: expand_senses(&entry.s),
            reason: extras.reason,
            romaji: extras.romaji,
        }
    }
}

/// Decode glosses and carry every other sense field over
///
/// Senses are always flagged as matching.
pub fn expand_senses(senses: &[RawWordSense]) -> Vec<ExpandedSense> {
    senses
        .iter()
        .map(|sense| ExpandedSense {
            g: expand_glosses(sense),
            fields: sense.fields.clone(),
            matched: true,
        })
        .collect()
}

/// [`ResultAssembler::assemble`] with the default kana normalizer
pub fn to_word_result(entry: &RawWordRecord, matching_text: &str, extras: ResultExtras) -> WordResult {
    ResultAssembler::new().assemble(entry, matching_text, extras)
}
