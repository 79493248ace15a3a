//! The in-memory record store.
//!
//! Built once from a loaded roster and never mutated afterwards. Query
//! components share it behind an `Arc` and only ever read from it.

use std::cmp::Ordering;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::bilingual::Bilingual;
use crate::enums::Gender;
use crate::metadata::Metadata;
use crate::record::Record;

/// One entry of the profession selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProfessionChoice {
    /// English label; also the exact value the profession filter matches.
    pub key: String,
    /// Bangla label.
    pub label_bn: String,
}

impl ProfessionChoice {
    pub fn as_bilingual(&self) -> Bilingual<&str> {
        Bilingual::new(self.key.as_str(), self.label_bn.as_str())
    }
}

/// Immutable roster: records in load order plus derived indexes.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    metadata: Metadata,
    records: Vec<Record>,
    professions: Vec<ProfessionChoice>,
}

impl RecordStore {
    /// Build the store and derive the profession index.
    pub fn new(metadata: Metadata, records: Vec<Record>) -> Self {
        let professions = profession_index(&records);
        tracing::debug!(
            records = records.len(),
            professions = professions.len(),
            "Built record store"
        );
        Self {
            metadata,
            records,
            professions,
        }
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Records in load order (male partition first, then female).
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Distinct professions sorted by English label.
    pub fn professions(&self) -> &[ProfessionChoice] {
        &self.professions
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record with the given voter id.
    pub fn find_by_voter_id(&self, voter_id: &str) -> Option<&Record> {
        let voter_id = voter_id.trim();
        self.records.iter().find(|record| record.voter_id == voter_id)
    }

    pub fn count_by_gender(&self, gender: Gender) -> usize {
        self.records
            .iter()
            .filter(|record| record.gender == gender)
            .count()
    }
}

/// Distinct (English, Bangla) profession pairs, sorted by English label.
///
/// Pairs are deduplicated as a whole: two records sharing an English label
/// but spelling the Bangla label differently produce two entries.
pub fn profession_index(records: &[Record]) -> Vec<ProfessionChoice> {
    let mut seen = HashSet::new();
    let mut choices: Vec<ProfessionChoice> = records
        .iter()
        .filter(|record| seen.insert((&record.profession.en, &record.profession.bn)))
        .map(|record| ProfessionChoice {
            key: record.profession.en.clone(),
            label_bn: record.profession.bn.clone(),
        })
        .collect();
    choices.sort_by(|a, b| compare_labels(&a.key, &b.key).then_with(|| a.label_bn.cmp(&b.label_bn)));
    choices
}

/// Locale-aware label ordering.
///
/// Compares case-folded text first so that `apple` sorts next to `Apple`,
/// then falls back to code-point order to keep the ordering total.
pub fn compare_labels(a: &str, b: &str) -> Ordering {
    let folded_a = a.chars().flat_map(char::to_lowercase);
    let folded_b = b.chars().flat_map(char::to_lowercase);
    folded_a.cmp(folded_b).then_with(|| a.cmp(b))
}
