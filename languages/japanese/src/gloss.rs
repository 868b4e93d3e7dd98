//! Per-gloss type classification.
//!
//! The storage format packs the type of every gloss of a sense into a single
//! integer `gt`, `BITS_PER_GLOSS_TYPE` bits per gloss, gloss 0 in the lowest
//! bits.

use serde::Serialize;

use crate::record::RawWordSense;

/// Largest value of the type enumeration
pub const GLOSS_TYPE_MAX: u8 = 4;

/// Bits needed to hold any value up to `GLOSS_TYPE_MAX`
pub const BITS_PER_GLOSS_TYPE: u32 = u8::BITS - GLOSS_TYPE_MAX.leading_zeros();

/// Number of gloss types that fit in the packed integer
pub const MAX_PACKED_GLOSS_TYPES: usize = (u64::BITS / BITS_PER_GLOSS_TYPE) as usize;

const TYPE_MASK: u64 = (1 << BITS_PER_GLOSS_TYPE) - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u8")]
pub enum GlossType {
    None,
    /// Explanatory gloss
    Expl,
    /// Literal translation
    Lit,
    /// Figurative meaning
    Fig,
    /// Trademark
    Tm,
    /// Bit pattern outside the known enumeration
    Unrecognized(u8),
}

impl From<u8> for GlossType {
    fn from(value: u8) -> Self {
        match value {
            0 => GlossType::None,
            1 => GlossType::Expl,
            2 => GlossType::Lit,
            3 => GlossType::Fig,
            4 => GlossType::Tm,
            other => GlossType::Unrecognized(other),
        }
    }
}

impl From<GlossType> for u8 {
    fn from(value: GlossType) -> Self {
        match value {
            GlossType::None => 0,
            GlossType::Expl => 1,
            GlossType::Lit => 2,
            GlossType::Fig => 3,
            GlossType::Tm => 4,
            GlossType::Unrecognized(other) => other,
        }
    }
}

/// A gloss ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Gloss {
    #[serde(rename = "str")]
    pub text: String,
    /// Absent when the gloss has no special type
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<GlossType>,
}

/// Type of the gloss at `index` within the packed value `gt`
///
/// Slots that do not fit entirely inside the integer, i.e. from
/// [`MAX_PACKED_GLOSS_TYPES`] on, read as [`GlossType::None`].
pub fn gloss_type_at(gt: u64, index: usize) -> GlossType {
    if index >= MAX_PACKED_GLOSS_TYPES {
        return GlossType::None;
    }

    let offset = index as u32 * BITS_PER_GLOSS_TYPE;
    GlossType::from(((gt >> offset) & TYPE_MASK) as u8)
}

/// Inverse of [`gloss_type_at`]; types past [`MAX_PACKED_GLOSS_TYPES`] are dropped
pub fn pack_gloss_types(types: &[GlossType]) -> u64 {
    types
        .iter()
        .take(MAX_PACKED_GLOSS_TYPES)
        .enumerate()
        .fold(0, |packed, (i, kind)| {
            let value = u64::from(u8::from(*kind)) & TYPE_MASK;
            packed | (value << (i as u32 * BITS_PER_GLOSS_TYPE))
        })
}

/// Pair every gloss string of `sense` with its decoded type
pub fn expand_glosses(sense: &RawWordSense) -> Vec<Gloss> {
    let gt = sense.gt.unwrap_or(0);

    sense
        .g
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let kind = match gloss_type_at(gt, i) {
                GlossType::None => None,
                kind => Some(kind),
            };
            Gloss {
                text: text.clone(),
                kind,
            }
        })
        .collect()
}
