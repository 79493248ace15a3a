//! Read-only result view handed to the presentation layer.

use roster_model::{Metadata, ProfessionChoice, Record};

use crate::criteria::Criteria;
use crate::paginate::{PageSlot, RowRange, page_window};

/// What the presentation layer should show instead of, or along with, rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    /// The roster itself has no records.
    EmptyRoster,
    /// The roster has records but none match the criteria.
    NoMatches,
    /// At least one record matches.
    Results,
}

/// Snapshot of the current query result.
#[derive(Debug, Clone)]
pub struct ResultView<'a> {
    /// Records on the current page, in display order.
    pub items: Vec<&'a Record>,
    pub total_matches: usize,
    pub total_records: usize,
    pub total_pages: usize,
    /// 1-based, always within `[1, total_pages]`.
    pub current_page: usize,
    pub page_size: usize,
    pub criteria: &'a Criteria,
    pub professions: &'a [ProfessionChoice],
    pub metadata: &'a Metadata,
}

impl ResultView<'_> {
    pub fn state(&self) -> ViewState {
        if self.total_records == 0 {
            ViewState::EmptyRoster
        } else if self.total_matches == 0 {
            ViewState::NoMatches
        } else {
            ViewState::Results
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_matches == 0
    }

    pub fn row_range(&self) -> RowRange {
        RowRange::new(self.current_page, self.page_size, self.total_matches)
    }

    pub fn page_window(&self) -> Vec<PageSlot> {
        page_window(self.current_page, self.total_pages)
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}
