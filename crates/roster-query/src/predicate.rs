//! Predicate engine.
//!
//! A record matches when all four clauses pass: gender, status, profession
//! and free-text search. The clauses are independent, so they are evaluated
//! cheapest first and short-circuit on the first failure.

use std::collections::BTreeSet;

use roster_model::{Record, VoterStatus};

use crate::criteria::{Criteria, GenderFilter};

/// Criteria prepared for repeated evaluation.
///
/// Normalizes the search query once instead of once per record.
#[derive(Debug, Clone)]
pub struct Predicate<'a> {
    gender: GenderFilter,
    statuses: &'a BTreeSet<VoterStatus>,
    profession: &'a str,
    query: Option<String>,
}

impl<'a> Predicate<'a> {
    pub fn new(criteria: &'a Criteria) -> Self {
        Self {
            gender: criteria.gender_filter,
            statuses: &criteria.status_filter,
            profession: criteria.profession_filter.as_str(),
            query: criteria.normalized_search(),
        }
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.gender_clause(record)
            && self.status_clause(record)
            && self.profession_clause(record)
            && self.search_clause(record)
    }

    fn gender_clause(&self, record: &Record) -> bool {
        self.gender.accepts(record.gender)
    }

    fn status_clause(&self, record: &Record) -> bool {
        self.statuses.is_empty() || self.statuses.contains(&record.status)
    }

    /// Exact match on the profession key, not a substring.
    fn profession_clause(&self, record: &Record) -> bool {
        self.profession.is_empty() || record.profession_key() == self.profession
    }

    fn search_clause(&self, record: &Record) -> bool {
        match &self.query {
            None => true,
            Some(query) => searchable_fields(record).any(|field| contains_folded(field, query)),
        }
    }
}

/// True when `record` satisfies every clause of `criteria`.
pub fn matches(record: &Record, criteria: &Criteria) -> bool {
    Predicate::new(criteria).matches(record)
}

/// Records matching `criteria`, in their original relative order.
pub fn filter<'r>(records: &'r [Record], criteria: &Criteria) -> Vec<&'r Record> {
    let predicate = Predicate::new(criteria);
    records
        .iter()
        .filter(|record| predicate.matches(record))
        .collect()
}

/// Fields covered by free-text search. Profession is not searched;
/// missing family-name members are skipped rather than matched.
fn searchable_fields(record: &Record) -> impl Iterator<Item = &str> {
    record
        .name
        .both()
        .into_iter()
        .map(String::as_str)
        .chain(std::iter::once(record.voter_id.as_str()))
        .chain(record.father_name.present())
        .chain(record.mother_name.present())
        .chain(record.spouse_name.present())
        .chain(record.address.both().into_iter().map(String::as_str))
}

/// `query` must already be lower-cased.
fn contains_folded(field: &str, query: &str) -> bool {
    field.to_lowercase().contains(query)
}
