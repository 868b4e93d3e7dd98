pub mod gloss;
pub mod kana;
pub mod loader;
pub mod matcher;
pub mod meta;
pub mod record;
pub mod result;

pub use gloss::{GLOSS_TYPE_MAX, Gloss, GlossType};
pub use kana::KanaNormalizer;
pub use loader::WordRecordLoader;
pub use matcher::{MatchAnnotation, MatchRegime};
pub use record::{KanjiMeta, RawWordRecord, RawWordSense, ReadingMeta};
pub use result::{ResultAssembler, ResultExtras, WordResult, to_word_result};
