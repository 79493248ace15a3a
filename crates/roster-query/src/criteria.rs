//! Query criteria: the user-selected filter, search, sort and page state.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use roster_model::{Gender, VoterStatus};

/// Records per page. Fixed for the life of a controller.
pub const PAGE_SIZE: usize = 25;

/// Gender restriction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenderFilter {
    #[default]
    All,
    Male,
    Female,
}

impl GenderFilter {
    pub const fn as_str(&self) -> &'static str {
        match self {
            GenderFilter::All => "all",
            GenderFilter::Male => "male",
            GenderFilter::Female => "female",
        }
    }

    pub fn accepts(&self, gender: Gender) -> bool {
        match self {
            GenderFilter::All => true,
            GenderFilter::Male => gender == Gender::Male,
            GenderFilter::Female => gender == Gender::Female,
        }
    }
}

impl From<Gender> for GenderFilter {
    fn from(gender: Gender) -> Self {
        match gender {
            Gender::Male => GenderFilter::Male,
            Gender::Female => GenderFilter::Female,
        }
    }
}

/// Field the result list is ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Serial,
    /// English name, case-insensitive.
    Name,
    BirthDate,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Serial, SortKey::Name, SortKey::BirthDate];

    pub const fn as_str(&self) -> &'static str {
        match self {
            SortKey::Serial => "serial",
            SortKey::Name => "name",
            SortKey::BirthDate => "birth_date",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub const fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }

    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// Apply this order to an ascending comparison result.
    pub fn apply(self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

/// Full set of query parameters.
///
/// `status_filter` empty means every status matches; `profession_filter`
/// empty means every profession matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criteria {
    pub search_text: String,
    pub gender_filter: GenderFilter,
    pub status_filter: BTreeSet<VoterStatus>,
    pub profession_filter: String,
    pub sort_key: SortKey,
    pub sort_order: SortOrder,
    /// 1-based.
    pub current_page: usize,
}

impl Default for Criteria {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            gender_filter: GenderFilter::All,
            status_filter: BTreeSet::new(),
            profession_filter: String::new(),
            sort_key: SortKey::Serial,
            sort_order: SortOrder::Ascending,
            current_page: 1,
        }
    }
}

impl Criteria {
    /// True when no filter or search restricts the result.
    pub fn is_unfiltered(&self) -> bool {
        self.search_text.trim().is_empty()
            && self.gender_filter == GenderFilter::All
            && self.status_filter.is_empty()
            && self.profession_filter.is_empty()
    }

    /// Trimmed, lower-cased search query, or `None` when search is inactive.
    pub fn normalized_search(&self) -> Option<String> {
        let trimmed = self.search_text.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn defaults_are_unfiltered_serial_ascending_page_one() {
        let criteria = Criteria::default();
        assert!(criteria.is_unfiltered());
        assert_eq!(criteria.sort_key, SortKey::Serial);
        assert_eq!(criteria.sort_order, SortOrder::Ascending);
        assert_eq!(criteria.current_page, 1);
    }

    #[test]
    fn whitespace_search_is_inactive() {
        let criteria = Criteria {
            search_text: "   ".to_string(),
            ..Criteria::default()
        };
        assert!(criteria.is_unfiltered());
        assert_eq!(criteria.normalized_search(), None);
    }

    #[test]
    fn normalized_search_trims_and_lowercases() {
        let criteria = Criteria {
            search_text: "  ALI ".to_string(),
            ..Criteria::default()
        };
        assert_eq!(criteria.normalized_search().as_deref(), Some("ali"));
    }

    #[test]
    fn sort_order_apply() {
        assert_eq!(SortOrder::Ascending.apply(Ordering::Less), Ordering::Less);
        assert_eq!(SortOrder::Descending.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(SortOrder::Descending.reversed(), SortOrder::Ascending);
    }

    #[test]
    fn gender_filter_accepts() {
        assert!(GenderFilter::All.accepts(Gender::Female));
        assert!(GenderFilter::Male.accepts(Gender::Male));
        assert!(!GenderFilter::Male.accepts(Gender::Female));
    }
}
