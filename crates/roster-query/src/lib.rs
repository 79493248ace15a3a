//! In-memory query engine over a [`RecordStore`](roster_model::RecordStore).
//!
//! # Module Organization
//!
//! - [`criteria`]: filter, search, sort and page parameters
//! - [`predicate`]: record matching
//! - [`sort`]: stable multi-key ordering
//! - [`paginate`]: page slicing, row ranges and the page-number strip
//! - [`debounce`]: search input debouncing driven by a [`Clock`]
//! - [`controller`]: the [`QueryController`] that ties them together
//!
//! The stages are pure functions over slices; only the controller keeps
//! state.

pub mod config;
pub mod controller;
pub mod criteria;
pub mod debounce;
pub mod error;
pub mod paginate;
pub mod predicate;
pub mod sort;
pub mod view;

pub use config::QueryConfig;
pub use controller::QueryController;
pub use criteria::{Criteria, GenderFilter, PAGE_SIZE, SortKey, SortOrder};
pub use debounce::{Clock, Debouncer, ManualClock, SystemClock};
pub use error::{QueryError, Result};
pub use paginate::{Page, PageSlot, RowRange, clamp_page, page_window, paginate, total_pages};
pub use predicate::{Predicate, filter, matches};
pub use sort::{compare, sort, sorted};
pub use view::{ResultView, ViewState};
