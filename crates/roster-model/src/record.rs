//! Voter records.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::bilingual::{Bilingual, OptionalBilingual};
use crate::enums::{Gender, VoterStatus};
use crate::error::{ModelError, Result};

/// Source format of birth dates.
pub const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

/// Display format of birth dates (e.g. `05 Mar 1987`).
pub const DISPLAY_DATE_FORMAT: &str = "%d %b %Y";

/// One voter, immutable after load.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use roster_model::{Bilingual, Gender, Record, VoterStatus};
///
/// let record = Record::new(
///     1,
///     "1234567890".to_string(),
///     Bilingual::new("Rahim Uddin".to_string(), "রহিম উদ্দিন".to_string()),
///     Gender::Male,
///     VoterStatus::Active,
///     NaiveDate::from_ymd_opt(1987, 3, 5).unwrap(),
/// )
/// .with_father(Some("Karim Uddin".to_string()), None);
///
/// assert_eq!(record.father_name.en.as_deref(), Some("Karim Uddin"));
/// assert_eq!(record.formatted_birth_date(), "05 Mar 1987");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Position in the source list.
    pub serial: u32,
    /// Voter number, presumed unique within a roster.
    pub voter_id: String,
    pub name: Bilingual,
    pub father_name: OptionalBilingual,
    pub mother_name: OptionalBilingual,
    pub spouse_name: OptionalBilingual,
    pub profession: Bilingual,
    pub address: Bilingual,
    pub birth_date: NaiveDate,
    pub status: VoterStatus,
    /// Derived from the partition the record was loaded from.
    pub gender: Gender,
}

impl Record {
    /// Create a record with empty family, profession and address fields.
    pub fn new(
        serial: u32,
        voter_id: String,
        name: Bilingual,
        gender: Gender,
        status: VoterStatus,
        birth_date: NaiveDate,
    ) -> Self {
        Self {
            serial,
            voter_id,
            name,
            father_name: OptionalBilingual::default(),
            mother_name: OptionalBilingual::default(),
            spouse_name: OptionalBilingual::default(),
            profession: Bilingual::default(),
            address: Bilingual::default(),
            birth_date,
            status,
            gender,
        }
    }

    #[must_use]
    pub fn with_father(mut self, en: Option<String>, bn: Option<String>) -> Self {
        self.father_name = Bilingual::new(en, bn);
        self
    }

    #[must_use]
    pub fn with_mother(mut self, en: Option<String>, bn: Option<String>) -> Self {
        self.mother_name = Bilingual::new(en, bn);
        self
    }

    #[must_use]
    pub fn with_spouse(mut self, en: Option<String>, bn: Option<String>) -> Self {
        self.spouse_name = Bilingual::new(en, bn);
        self
    }

    #[must_use]
    pub fn with_profession(mut self, profession: Bilingual) -> Self {
        self.profession = profession;
        self
    }

    #[must_use]
    pub fn with_address(mut self, address: Bilingual) -> Self {
        self.address = address;
        self
    }

    /// Key used by the profession filter: the English profession label.
    pub fn profession_key(&self) -> &str {
        self.profession.primary()
    }

    /// Age in completed years on `today`. Zero for dates in the future.
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        age_between(self.birth_date, today)
    }

    pub fn formatted_birth_date(&self) -> String {
        self.birth_date.format(DISPLAY_DATE_FORMAT).to_string()
    }
}

/// Parse an ISO `YYYY-MM-DD` birth date.
pub fn parse_birth_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), BIRTH_DATE_FORMAT).map_err(|_| {
        ModelError::InvalidDate {
            value: value.to_string(),
        }
    })
}

/// Completed years between `birth` and `today`.
pub fn age_between(birth: NaiveDate, today: NaiveDate) -> u32 {
    if today < birth {
        return 0;
    }
    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    u32::try_from(years).unwrap_or(0)
}
