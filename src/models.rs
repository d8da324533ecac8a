//! Breed Models
//!
//! Wire shapes from the breed API and the normalized record the UI uses.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Normalized breed record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreedRecord {
    pub id: String,
    pub name: String,
    /// Never null; empty when the source had no usable list
    pub locations: Vec<String>,
    pub main_uses: String,
    pub physical_desc: String,
    pub species: String,
    pub breeding_trait: String,
    /// Registered population, when the backend sends one
    pub count: Option<u64>,
}

/// Response envelope: `{ "body": [ ... ] }`
#[derive(Debug, Deserialize)]
pub struct BreedListResponse {
    #[serde(default)]
    pub body: Option<Value>,
}

/// Raw entry as sent by the backend.
///
/// Kept as a plain JSON object so one bad or doubled field never rejects the
/// whole list; `normalize` turns it into a `BreedRecord`. For each field the
/// PascalCase key wins over the camelCase one when both are present.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct RawBreed(pub Map<String, Value>);

const ID_KEYS: &[&str] = &["_id", "id"];
const NAME_KEYS: &[&str] = &["BreedName", "breedName"];
const LOCATION_KEYS: &[&str] = &["Location", "location"];
const MAIN_USES_KEYS: &[&str] = &["MainUses", "mainUses"];
const PHYSICAL_DESC_KEYS: &[&str] = &["PhysicalDesc", "physicalDesc"];
const SPECIES_KEYS: &[&str] = &["Species", "species"];
const BREEDING_TRAIT_KEYS: &[&str] = &["BreedingTrait", "breedingTrait"];
const COUNT_KEYS: &[&str] = &["Count", "count"];

impl RawBreed {
    /// First non-null value under any of `keys`
    fn take(&mut self, keys: &[&str]) -> Option<Value> {
        keys.iter()
            .filter_map(|key| self.0.remove(*key))
            .find(|value| !value.is_null())
    }

    /// Map a raw entry to a record, defaulting anything malformed
    pub fn normalize(mut self) -> BreedRecord {
        BreedRecord {
            id: id_text(self.take(ID_KEYS)),
            name: text(self.take(NAME_KEYS)),
            locations: string_list(self.take(LOCATION_KEYS)),
            main_uses: text(self.take(MAIN_USES_KEYS)),
            physical_desc: text(self.take(PHYSICAL_DESC_KEYS)),
            species: text(self.take(SPECIES_KEYS)),
            breeding_trait: text(self.take(BREEDING_TRAIT_KEYS)),
            count: count(self.take(COUNT_KEYS)),
        }
    }
}

impl From<RawBreed> for BreedRecord {
    fn from(raw: RawBreed) -> Self {
        raw.normalize()
    }
}

// ========================
// Field Normalization
// ========================

fn text(value: Option<Value>) -> String {
    match value {
        Some(Value::String(s)) => s,
        _ => String::new(),
    }
}

/// Ids may arrive as strings or numbers
fn id_text(value: Option<Value>) -> String {
    match value {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Non-array becomes empty; non-string entries are dropped
fn string_list(value: Option<Value>) -> Vec<String> {
    match value {
        Some(Value::Array(entries)) => entries
            .into_iter()
            .filter_map(|entry| match entry {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn count(value: Option<Value>) -> Option<u64> {
    match value {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    }
}
