//! Raw shapes of the roster source document.
//!
//! The document looks like:
//!
//! ```json
//! {
//!   "meta": { "district_en": "...", "district_bn": "...", ... },
//!   "male_list":   { "gender_list": "male",   "voters": [ ... ] },
//!   "female_list": { "gender_list": "female", "voters": [ ... ] }
//! }
//! ```
//!
//! Voters are kept as untyped JSON values at this stage so that a single
//! malformed record can be reported (or skipped) on its own instead of
//! failing the whole document.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use roster_model::{Bilingual, Metadata};

/// Top-level source document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSource {
    #[serde(default, alias = "metadata")]
    pub meta: BTreeMap<String, Value>,

    #[serde(default, alias = "malePartition")]
    pub male_list: Option<RawPartition>,

    #[serde(default, alias = "femalePartition")]
    pub female_list: Option<RawPartition>,
}

/// One gender partition of the source.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPartition {
    /// Informational tag; the partition key decides the gender.
    #[serde(default)]
    pub gender_list: Option<String>,

    #[serde(default, alias = "records")]
    pub voters: Vec<Value>,
}

/// One voter as it appears in the source. Every field is optional here;
/// required fields are enforced by the loader.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawVoter {
    pub serial: Option<u32>,
    #[serde(alias = "voter_id")]
    pub voter_no: Option<String>,
    pub name_en: Option<String>,
    pub name_bn: Option<String>,
    pub father_en: Option<String>,
    pub father_bn: Option<String>,
    pub mother_en: Option<String>,
    pub mother_bn: Option<String>,
    pub spouse_en: Option<String>,
    pub spouse_bn: Option<String>,
    pub profession_en: Option<String>,
    pub profession_bn: Option<String>,
    #[serde(alias = "birth_date")]
    pub birthdate: Option<String>,
    pub address_en: Option<String>,
    pub address_bn: Option<String>,
    pub status: Option<String>,
}

const KNOWN_META_KEYS: [&str; 6] = [
    "district_en",
    "district_bn",
    "upazila_en",
    "upazila_bn",
    "union_en",
    "union_bn",
];

impl RawSource {
    pub fn has_partition(&self) -> bool {
        self.male_list.is_some() || self.female_list.is_some()
    }

    /// Convert the untyped `meta` object into [`Metadata`].
    pub fn metadata(&self) -> Metadata {
        let pair = |prefix: &str| {
            Bilingual::new(
                meta_string(&self.meta, &format!("{prefix}_en")),
                meta_string(&self.meta, &format!("{prefix}_bn")),
            )
        };
        let extra = self
            .meta
            .iter()
            .filter(|(key, _)| !KNOWN_META_KEYS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value_to_string(value)))
            .collect();

        Metadata {
            district: pair("district"),
            upazila: pair("upazila"),
            union: pair("union"),
            extra,
        }
    }
}

fn meta_string(meta: &BTreeMap<String, Value>, key: &str) -> String {
    meta.get(key).map(value_to_string).unwrap_or_default()
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_partitions_and_aliases() {
        let source: RawSource = serde_json::from_str(
            r#"{
                "metadata": {"district_en": "Dhaka", "district_bn": "ঢাকা", "ward": 4},
                "femalePartition": {"records": [{"serial": 1}]}
            }"#,
        )
        .unwrap();

        assert!(source.has_partition());
        assert!(source.male_list.is_none());
        assert_eq!(source.female_list.as_ref().map(|p| p.voters.len()), Some(1));

        let meta = source.metadata();
        assert_eq!(meta.district.en, "Dhaka");
        assert_eq!(meta.district.bn, "ঢাকা");
        assert_eq!(meta.union.en, "");
        assert_eq!(meta.extra.get("ward").map(String::as_str), Some("4"));
    }

    #[test]
    fn missing_partitions_detected() {
        let source: RawSource = serde_json::from_str(r#"{"meta": {}}"#).unwrap();
        assert!(!source.has_partition());
    }
}
