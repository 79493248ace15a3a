//! Query state controller.
//!
//! Owns the [`Criteria`] and recomputes the result snapshot synchronously on
//! every change: filter the whole store, sort, clamp the page, slice. There
//! is no intermediate state visible between a setter call and its return.
//!
//! Full recomputation is fine for rosters up to the low tens of thousands
//! of records; beyond that the filter pass on every criteria change becomes
//! the bottleneck and an incremental index would be needed.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::{Duration, Instant};

use roster_model::{ProfessionChoice, Record, RecordStore, VoterStatus};

use crate::config::QueryConfig;
use crate::criteria::{Criteria, GenderFilter, PAGE_SIZE, SortKey, SortOrder};
use crate::debounce::{Clock, Debouncer, SystemClock};
use crate::paginate::{clamp_page, paginate, total_pages};
use crate::predicate::Predicate;
use crate::sort::compare;
use crate::view::ResultView;

/// Interactive query state over an immutable [`RecordStore`].
///
/// Raw search keystrokes go to [`set_search_input`](Self::set_search_input)
/// and only reach the filter after the configured quiet period, checked by
/// [`poll`](Self::poll). All other setters apply immediately.
#[derive(Debug)]
pub struct QueryController<C: Clock = SystemClock> {
    store: Arc<RecordStore>,
    clock: C,
    criteria: Criteria,
    search_input: String,
    debouncer: Debouncer<String>,
    /// Store indices of matching records, in display order.
    ordered: Vec<usize>,
    /// Store indices of the records on the current page.
    page: Vec<usize>,
    total_pages: usize,
}

impl QueryController<SystemClock> {
    pub fn new(store: Arc<RecordStore>, config: &QueryConfig) -> Self {
        Self::with_clock(store, config, SystemClock)
    }
}

impl<C: Clock> QueryController<C> {
    /// Create a controller with default criteria and a custom clock.
    pub fn with_clock(store: Arc<RecordStore>, config: &QueryConfig, clock: C) -> Self {
        let mut controller = Self {
            store,
            clock,
            criteria: Criteria::default(),
            search_input: String::new(),
            debouncer: Debouncer::new(config.search_debounce()),
            ordered: Vec::new(),
            page: Vec::new(),
            total_pages: 1,
        };
        controller.refilter();
        controller
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    /// Text as typed, possibly ahead of the applied search.
    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn professions(&self) -> &[ProfessionChoice] {
        self.store.professions()
    }

    // === Search ===

    /// Record a keystroke. The search applies once input has been quiet for
    /// the debounce delay; each call restarts the delay.
    pub fn set_search_input(&mut self, text: impl Into<String>) {
        self.search_input = text.into();
        let now = self.clock.now();
        self.debouncer.push(self.search_input.clone(), now);
    }

    /// Apply debounced search input if its quiet period has elapsed.
    ///
    /// Returns `true` when the result changed.
    pub fn poll(&mut self) -> bool {
        let now = self.clock.now();
        match self.debouncer.poll(now) {
            Some(text) => self.apply_search(text),
            None => false,
        }
    }

    /// Apply pending search input immediately.
    pub fn flush_search(&mut self) -> bool {
        match self.debouncer.flush() {
            Some(text) => self.apply_search(text),
            None => false,
        }
    }

    /// Set the search text without debouncing.
    pub fn set_search_text(&mut self, text: impl Into<String>) -> bool {
        self.debouncer.cancel();
        self.search_input = text.into();
        self.apply_search(self.search_input.clone())
    }

    pub fn clear_search(&mut self) -> bool {
        self.set_search_text(String::new())
    }

    pub fn has_pending_search(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// When the pending search input will apply, if any.
    pub fn search_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// Time left, on this controller's clock, before pending input applies.
    pub fn search_remaining(&self) -> Option<Duration> {
        self.debouncer.remaining(self.clock.now())
    }

    fn apply_search(&mut self, text: String) -> bool {
        if self.criteria.search_text == text {
            return false;
        }
        tracing::debug!(query_len = text.chars().count(), "Applying search");
        self.criteria.search_text = text;
        self.refilter();
        true
    }

    // === Filters ===

    pub fn set_gender(&mut self, gender: GenderFilter) -> bool {
        if self.criteria.gender_filter == gender {
            return false;
        }
        self.criteria.gender_filter = gender;
        self.refilter();
        true
    }

    pub fn set_status_filter(&mut self, statuses: BTreeSet<VoterStatus>) -> bool {
        if self.criteria.status_filter == statuses {
            return false;
        }
        self.criteria.status_filter = statuses;
        self.refilter();
        true
    }

    /// Add `status` to the filter set, or remove it if already present.
    pub fn toggle_status(&mut self, status: VoterStatus) {
        if !self.criteria.status_filter.remove(&status) {
            self.criteria.status_filter.insert(status);
        }
        self.refilter();
    }

    /// Restrict to one profession key; an empty string removes the filter.
    pub fn set_profession(&mut self, profession: impl Into<String>) -> bool {
        let profession = profession.into();
        if self.criteria.profession_filter == profession {
            return false;
        }
        self.criteria.profession_filter = profession;
        self.refilter();
        true
    }

    /// Restore default criteria, including sort, and drop pending input.
    pub fn reset_filters(&mut self) {
        self.debouncer.cancel();
        self.search_input.clear();
        self.criteria = Criteria::default();
        self.refilter();
    }

    // === Sorting ===

    pub fn set_sort_key(&mut self, key: SortKey) {
        if self.criteria.sort_key != key {
            self.criteria.sort_key = key;
            self.resort();
        }
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        if self.criteria.sort_order != order {
            self.criteria.sort_order = order;
            self.resort();
        }
    }

    /// Column-header behaviour: the active key flips its order, another key
    /// becomes active in ascending order.
    pub fn toggle_sort(&mut self, key: SortKey) {
        if self.criteria.sort_key == key {
            self.criteria.sort_order = self.criteria.sort_order.reversed();
        } else {
            self.criteria.sort_key = key;
            self.criteria.sort_order = SortOrder::Ascending;
        }
        self.resort();
    }

    // === Paging ===

    /// Go to `page`, clamped to `[1, total_pages]`. Returns the page shown.
    pub fn set_page(&mut self, page: usize) -> usize {
        let clamped = clamp_page(page, self.total_pages);
        if clamped != page {
            tracing::debug!(requested = page, clamped, "Clamped page request");
        }
        self.criteria.current_page = clamped;
        self.repage();
        clamped
    }

    pub fn next_page(&mut self) -> usize {
        self.set_page(self.criteria.current_page.saturating_add(1))
    }

    pub fn prev_page(&mut self) -> usize {
        self.set_page(self.criteria.current_page.saturating_sub(1))
    }

    pub fn first_page(&mut self) -> usize {
        self.set_page(1)
    }

    pub fn last_page(&mut self) -> usize {
        self.set_page(self.total_pages)
    }

    // === Reading ===

    pub fn total_matches(&self) -> usize {
        self.ordered.len()
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn current_page(&self) -> usize {
        self.criteria.current_page
    }

    /// Snapshot of the current result for rendering.
    pub fn view(&self) -> ResultView<'_> {
        let records = self.store.records();
        ResultView {
            items: self.page.iter().map(|&idx| &records[idx]).collect(),
            total_matches: self.ordered.len(),
            total_records: records.len(),
            total_pages: self.total_pages,
            current_page: self.criteria.current_page,
            page_size: PAGE_SIZE,
            criteria: &self.criteria,
            professions: self.store.professions(),
            metadata: self.store.metadata(),
        }
    }

    /// All matching records in display order, across pages.
    pub fn matching(&self) -> impl Iterator<Item = &Record> {
        let records = self.store.records();
        self.ordered.iter().map(move |&idx| &records[idx])
    }

    /// Look up a record for the detail view.
    pub fn detail(&self, voter_id: &str) -> Option<&Record> {
        self.store.find_by_voter_id(voter_id)
    }

    // === Recomputation ===

    /// Filter criteria changed: rebuild the match list and go to page 1.
    fn refilter(&mut self) {
        let predicate = Predicate::new(&self.criteria);
        self.ordered = self
            .store
            .records()
            .iter()
            .enumerate()
            .filter(|(_, record)| predicate.matches(record))
            .map(|(idx, _)| idx)
            .collect();
        self.total_pages = total_pages(self.ordered.len(), PAGE_SIZE);
        self.criteria.current_page = 1;
        self.resort();
        tracing::debug!(
            matches = self.ordered.len(),
            total_pages = self.total_pages,
            "Recomputed results"
        );
    }

    /// Sort criteria changed: reorder matches, keep the page.
    fn resort(&mut self) {
        let records = self.store.records();
        let key = self.criteria.sort_key;
        let order = self.criteria.sort_order;
        self.ordered
            .sort_by(|&a, &b| compare(&records[a], &records[b], key, order));
        self.repage();
    }

    fn repage(&mut self) {
        self.criteria.current_page = clamp_page(self.criteria.current_page, self.total_pages);
        // The page was clamped just above, so this slice is always in range.
        self.page = paginate(&self.ordered, PAGE_SIZE, self.criteria.current_page)
            .map(|page| page.items.to_vec())
            .unwrap_or_default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debounce::ManualClock;
    use chrono::NaiveDate;
    use roster_model::{Bilingual, Gender, Metadata};

    fn store(count: u32) -> Arc<RecordStore> {
        let records = (1..=count)
            .map(|serial| {
                let gender = if serial % 2 == 0 {
                    Gender::Female
                } else {
                    Gender::Male
                };
                Record::new(
                    serial,
                    format!("V{serial:05}"),
                    Bilingual::new(format!("Voter {serial}"), String::new()),
                    gender,
                    VoterStatus::Active,
                    NaiveDate::from_ymd_opt(1980, 1, 1).unwrap(),
                )
            })
            .collect();
        Arc::new(RecordStore::new(Metadata::default(), records))
    }

    fn controller(count: u32) -> (QueryController<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let controller =
            QueryController::with_clock(store(count), &QueryConfig::default(), clock.clone());
        (controller, clock)
    }

    #[test]
    fn starts_on_first_page_with_everything() {
        let (controller, _) = controller(60);
        let view = controller.view();
        assert_eq!(view.total_matches, 60);
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.current_page, 1);
        assert_eq!(view.items.len(), 25);
        assert_eq!(view.items[0].serial, 1);
    }

    #[test]
    fn gender_change_resets_page() {
        let (mut controller, _) = controller(300);
        assert_eq!(controller.set_page(5), 5);
        assert!(controller.set_gender(GenderFilter::Male));
        assert_eq!(controller.current_page(), 1);
        assert_eq!(controller.total_matches(), 150);
    }

    #[test]
    fn sort_change_keeps_page() {
        let (mut controller, _) = controller(60);
        controller.set_page(2);
        controller.set_sort_order(SortOrder::Descending);
        assert_eq!(controller.current_page(), 2);
        assert_eq!(controller.view().items[0].serial, 35);
    }

    #[test]
    fn page_requests_are_clamped() {
        let (mut controller, _) = controller(60);
        assert_eq!(controller.set_page(4), 3);
        assert_eq!(controller.view().items.len(), 10);
        assert_eq!(controller.set_page(0), 1);
        assert_eq!(controller.last_page(), 3);
        assert_eq!(controller.next_page(), 3);
        assert_eq!(controller.prev_page(), 2);
    }

    #[test]
    fn search_waits_for_quiet_period() {
        let (mut controller, clock) = controller(60);
        controller.set_search_input("V0001");
        assert_eq!(controller.search_input(), "V0001");
        assert_eq!(controller.criteria().search_text, "");

        clock.advance_ms(200);
        controller.set_search_input("V00012");
        clock.advance_ms(399);
        assert!(!controller.poll());
        assert_eq!(controller.total_matches(), 60);

        clock.advance_ms(1);
        assert!(controller.poll());
        assert_eq!(controller.criteria().search_text, "V00012");
        assert_eq!(controller.total_matches(), 1);
        assert!(!controller.has_pending_search());
    }

    #[test]
    fn flush_applies_pending_search() {
        let (mut controller, _) = controller(60);
        controller.set_page(3);
        controller.set_search_input("voter 5");
        assert!(controller.flush_search());
        // "voter 5", "voter 50".."voter 59"
        assert_eq!(controller.total_matches(), 11);
        assert_eq!(controller.current_page(), 1);
    }

    #[test]
    fn status_toggle_adds_and_removes() {
        let (mut controller, _) = controller(10);
        controller.toggle_status(VoterStatus::Cut);
        assert_eq!(controller.total_matches(), 0);
        assert!(controller.view().is_empty());
        controller.toggle_status(VoterStatus::Cut);
        assert!(controller.criteria().status_filter.is_empty());
        assert_eq!(controller.total_matches(), 10);
    }

    #[test]
    fn toggle_sort_flips_then_switches() {
        let (mut controller, _) = controller(5);
        controller.toggle_sort(SortKey::Serial);
        assert_eq!(controller.criteria().sort_order, SortOrder::Descending);
        controller.toggle_sort(SortKey::Name);
        assert_eq!(controller.criteria().sort_key, SortKey::Name);
        assert_eq!(controller.criteria().sort_order, SortOrder::Ascending);
    }

    #[test]
    fn reset_filters_restores_defaults() {
        let (mut controller, _) = controller(10);
        controller.set_sort_order(SortOrder::Descending);
        controller.set_gender(GenderFilter::Female);
        controller.set_search_input("pending");
        controller.reset_filters();
        assert_eq!(controller.criteria(), &Criteria::default());
        assert!(!controller.has_pending_search());
        assert_eq!(controller.search_input(), "");
    }
}
