//! Type-safe enumerations for roster values.
//!
//! These enums mirror the lowercase strings used by the source document
//! (`"active"`, `"male"`, ...) and carry their display labels in both
//! supported languages.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Registration status of a voter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoterStatus {
    /// Currently registered.
    Active,
    /// Removed from the roll.
    Cut,
    /// Moved to another constituency.
    Migrated,
    /// Flagged as a duplicate registration.
    Duplicate,
}

impl VoterStatus {
    /// All statuses in display order.
    pub const ALL: [VoterStatus; 4] = [Self::Active, Self::Cut, Self::Migrated, Self::Duplicate];

    /// Returns the canonical source value.
    pub fn as_str(&self) -> &'static str {
        match self {
            VoterStatus::Active => "active",
            VoterStatus::Cut => "cut",
            VoterStatus::Migrated => "migrated",
            VoterStatus::Duplicate => "duplicate",
        }
    }

    /// Returns the display label in the given language.
    pub fn label(&self, language: Language) -> &'static str {
        match (self, language) {
            (VoterStatus::Active, Language::English) => "Active",
            (VoterStatus::Cut, Language::English) => "Cut",
            (VoterStatus::Migrated, Language::English) => "Migrated",
            (VoterStatus::Duplicate, Language::English) => "Duplicate",
            (VoterStatus::Active, Language::Bangla) => "সক্রিয়",
            (VoterStatus::Cut, Language::Bangla) => "কাটা",
            (VoterStatus::Migrated, Language::Bangla) => "স্থানান্তরিত",
            (VoterStatus::Duplicate, Language::Bangla) => "ডুপ্লিকেট",
        }
    }
}

impl fmt::Display for VoterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VoterStatus {
    type Err = ModelError;

    /// Parse a status string (case-insensitive, surrounding whitespace ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(VoterStatus::Active),
            "cut" => Ok(VoterStatus::Cut),
            "migrated" => Ok(VoterStatus::Migrated),
            "duplicate" => Ok(VoterStatus::Duplicate),
            _ => Err(ModelError::UnknownStatus(s.to_string())),
        }
    }
}

/// Gender of a voter, derived from the source partition the record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Returns the canonical source value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    /// Returns the display label in the given language.
    pub fn label(&self, language: Language) -> &'static str {
        match (self, language) {
            (Gender::Male, Language::English) => "Male",
            (Gender::Female, Language::English) => "Female",
            (Gender::Male, Language::Bangla) => "পুরুষ",
            (Gender::Female, Language::Bangla) => "মহিলা",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Gender {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            _ => Err(ModelError::UnknownGender(s.to_string())),
        }
    }
}

/// Display language selector.
///
/// English is the primary language: sorting and the profession key always
/// use the English member of a pair, whatever language is displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Bangla,
}

impl Language {
    /// The other language of the pair.
    pub fn other(&self) -> Language {
        match self {
            Language::English => Language::Bangla,
            Language::Bangla => Language::English,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::English => write!(f, "en"),
            Language::Bangla => write!(f, "bn"),
        }
    }
}

impl FromStr for Language {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "bn" | "bangla" | "bengali" => Ok(Language::Bangla),
            _ => Err(ModelError::UnknownLanguage(s.to_string())),
        }
    }
}
