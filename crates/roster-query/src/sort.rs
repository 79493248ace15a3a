//! Result ordering.

use std::cmp::Ordering;

use roster_model::Record;

use crate::criteria::{SortKey, SortOrder};

/// Compare two records on `key` alone, ascending.
pub fn compare_by_key(a: &Record, b: &Record, key: SortKey) -> Ordering {
    match key {
        SortKey::Serial => a.serial.cmp(&b.serial),
        SortKey::Name => compare_case_insensitive(&a.name.en, &b.name.en),
        SortKey::BirthDate => a.birth_date.cmp(&b.birth_date),
    }
}

/// Full comparator: `order` flips the key comparison only. Ties fall back
/// to ascending serial in both directions, so paging stays stable when the
/// user flips the order.
pub fn compare(a: &Record, b: &Record, key: SortKey, order: SortOrder) -> Ordering {
    order
        .apply(compare_by_key(a, b, key))
        .then_with(|| a.serial.cmp(&b.serial))
}

/// Sort records in place. The sort is stable, so records equal on key and
/// serial keep their store order.
pub fn sort(records: &mut [&Record], key: SortKey, order: SortOrder) {
    records.sort_by(|a, b| compare(a, b, key, order));
}

/// Return a sorted copy of `records`.
pub fn sorted<'r>(records: &[&'r Record], key: SortKey, order: SortOrder) -> Vec<&'r Record> {
    let mut out = records.to_vec();
    sort(&mut out, key, order);
    out
}

fn compare_case_insensitive(a: &str, b: &str) -> Ordering {
    let folded_a = a.chars().flat_map(char::to_lowercase);
    let folded_b = b.chars().flat_map(char::to_lowercase);
    folded_a.cmp(folded_b)
}
