//! Voter roster ingestion.
//!
//! This crate turns the static roster document into an immutable
//! [`RecordStore`](roster_model::RecordStore).
//!
//! # Features
//!
//! - **Partition flattening**: male records first, then female, each tagged
//!   with the gender of its partition
//! - **Validation**: required fields, status values and birth dates are
//!   checked per record
//! - **Load policies**: strict (all-or-nothing) or lenient (skip and report)
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use roster_ingest::{LoadPolicy, load_path};
//!
//! let (store, report) = load_path(Path::new("data/roster.json"), LoadPolicy::Strict)?;
//! println!("{} voters, {} professions", store.len(), store.professions().len());
//! ```

mod error;
mod loader;
mod source;

// === Error Types ===
pub use error::{IngestError, RecordProblem, Result};

// === Loading ===
pub use loader::{LoadPolicy, LoadReport, SkippedRecord, load, load_path, load_str};

// === Source Shapes ===
pub use source::{RawPartition, RawSource, RawVoter};
