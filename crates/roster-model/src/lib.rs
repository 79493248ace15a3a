//! Data model for the voter roster lookup.
//!
//! # Module Organization
//!
//! - [`bilingual`]: English/Bangla value pairs
//! - [`enums`]: voter status, gender and display language
//! - [`record`]: the immutable voter [`Record`] and date helpers
//! - [`metadata`]: roster-level administrative area names
//! - [`store`]: the [`RecordStore`] and its profession index

pub mod bilingual;
pub mod enums;
pub mod error;
pub mod metadata;
pub mod record;
pub mod store;

pub use bilingual::{Bilingual, OptionalBilingual};
pub use enums::{Gender, Language, VoterStatus};
pub use error::{ModelError, Result};
pub use metadata::Metadata;
pub use record::{
    BIRTH_DATE_FORMAT, DISPLAY_DATE_FORMAT, Record, age_between, parse_birth_date,
};
pub use store::{ProfessionChoice, RecordStore, compare_labels, profession_index};
