//! Roster-level metadata (administrative area names).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::bilingual::Bilingual;
use crate::enums::Language;

/// Administrative area the roster belongs to. Display only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub district: Bilingual,
    pub upazila: Bilingual,
    pub union: Bilingual,
    /// Any further keys of the source `meta` object, stringified.
    pub extra: BTreeMap<String, String>,
}

impl Metadata {
    /// `district • upazila • union` in the given language, skipping blanks.
    pub fn location_line(&self, language: Language) -> String {
        [&self.district, &self.upazila, &self.union]
            .into_iter()
            .map(|pair| pair.get(language).trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" • ")
    }
}
