use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A word entry as stored in the flat-file database
///
/// `km` and `rm` run parallel to `k` and `r`. On disk an entry without
/// metadata is written as `0`; here it is `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawWordRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub k: Option<Vec<String>>,
    #[serde(default, with = "meta_slots", skip_serializing_if = "Option::is_none")]
    pub km: Option<Vec<Option<KanjiMeta>>>,
    pub r: Vec<String>,
    #[serde(default, with = "meta_slots", skip_serializing_if = "Option::is_none")]
    pub rm: Option<Vec<Option<ReadingMeta>>>,
    pub s: Vec<RawWordSense>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KanjiMeta {
    /// Info tags, e.g. `ateji`, `iK`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub i: Option<Vec<String>>,
    /// Priority tags, e.g. `ichi1`, `nf12`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p: Option<Vec<String>>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadingMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub i: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p: Option<Vec<String>>,
    /// Bitmask of the kanji forms this reading applies to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<AccentInfo>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// Pitch accent: either a bare downstep position or one per part of speech
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AccentInfo {
    Single(u32),
    Multiple(Vec<Accent>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accent {
    pub i: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawWordSense {
    pub g: Vec<String>,
    /// Packed per-gloss types, see [`crate::gloss`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gt: Option<u64>,
    #[serde(flatten)]
    pub fields: SenseFields,
}

/// Everything on a sense besides the glosses; copied to the result as is
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SenseFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub misc: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dial: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inf: Option<String>,
    /// Gloss language, absent for English
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    /// Kanji forms this sense is restricted to (bitmask)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kapp: Option<u32>,
    /// Readings this sense is restricted to (bitmask)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rapp: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xref: Option<Vec<CrossReference>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ant: Option<Vec<CrossReference>>,
    /// Keys this version of the record format doesn't know about
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossReference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub k: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sense: Option<u32>,
}

/// Serde adapter turning `0 | Meta` slots into `Option<Meta>` and back
mod meta_slots {
    use serde::de::Error as _;
    use serde::ser::SerializeSeq;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Slot<M> {
        Sentinel(u64),
        Meta(M),
    }

    pub fn deserialize<'de, D, M>(deserializer: D) -> Result<Option<Vec<Option<M>>>, D::Error>
    where
        D: Deserializer<'de>,
        M: Deserialize<'de>,
    {
        let Some(slots) = Option::<Vec<Slot<M>>>::deserialize(deserializer)? else {
            return Ok(None);
        };

        slots
            .into_iter()
            .map(|slot| match slot {
                Slot::Sentinel(0) => Ok(None),
                Slot::Sentinel(n) => Err(D::Error::custom(format!(
                    "invalid metadata slot {n}, expected 0 or an object"
                ))),
                Slot::Meta(meta) => Ok(Some(meta)),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }

    pub fn serialize<S, M>(slots: &Option<Vec<Option<M>>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        M: Serialize,
    {
        let Some(slots) = slots else {
            return serializer.serialize_none();
        };

        let mut seq = serializer.serialize_seq(Some(slots.len()))?;
        for slot in slots {
            match slot {
                Some(meta) => seq.serialize_element(meta)?,
                None => seq.serialize_element(&0u8)?,
            }
        }
        seq.end()
    }
}
