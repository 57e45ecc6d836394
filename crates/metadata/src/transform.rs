//! Element-to-metadata transformation
//!
//! Pure, per-record mapping from an [`ElementRecord`] to the NFT-style
//! metadata descriptor written out by the emitter. No I/O, no shared state;
//! the same input always produces the same output.

use crate::loader::ElementRecord;
use elemint_common::config::MetadataConfig;
use serde::{Deserialize, Serialize};

/// Scale applied to `atomic_mass` to produce the RAM trait. The factor is an
/// external token-economics convention, not a unit conversion; it must not
/// be changed to something physically sensible.
const RAM_SCALE: f64 = 1e18;

/// The metadata descriptor written for one element.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetadataRecord {
    pub name: String,
    pub description: String,
    pub image: String,
    pub external_url: String,
    pub attributes: Vec<Attribute>,
}

/// One trait entry in the metadata `attributes` list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Attribute {
    pub trait_type: String,
    pub value: TraitValue,
}

/// Trait values are either plain integers (Level) or large floats (RAM);
/// untagged so each serializes as a bare JSON number.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum TraitValue {
    Integer(u64),
    Number(f64),
}

/// Map one element record to its metadata descriptor.
pub fn to_metadata(element: &ElementRecord, config: &MetadataConfig) -> MetadataRecord {
    MetadataRecord {
        name: element.name.clone(),
        description: element.summary.clone(),
        image: format!("{}/test_{}.png", config.image_base_url, element.number),
        external_url: config.external_url.clone(),
        attributes: vec![
            Attribute {
                trait_type: "RAM".to_string(),
                value: TraitValue::Number(element.atomic_mass * RAM_SCALE),
            },
            Attribute {
                trait_type: "Level".to_string(),
                value: TraitValue::Integer(element.period as u64),
            },
        ],
    }
}
