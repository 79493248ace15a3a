//! Paired English/Bangla values.

use serde::{Deserialize, Serialize};

use crate::enums::Language;

/// A value carried in both supported languages.
///
/// The pair is tagged rather than stored as two loose fields so that the
/// display language stays a single selector applied at render time.
///
/// # Example
///
/// ```
/// use roster_model::{Bilingual, Language};
///
/// let name = Bilingual::new("Rahim Uddin".to_string(), "রহিম উদ্দিন".to_string());
/// assert_eq!(name.get(Language::English), "Rahim Uddin");
/// assert_eq!(name.primary(), "Rahim Uddin");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bilingual<T = String> {
    /// English (primary language) value.
    pub en: T,
    /// Bangla (secondary language) value.
    pub bn: T,
}

impl<T> Bilingual<T> {
    pub fn new(en: T, bn: T) -> Self {
        Self { en, bn }
    }

    /// Value in the requested language.
    pub fn get(&self, language: Language) -> &T {
        match language {
            Language::English => &self.en,
            Language::Bangla => &self.bn,
        }
    }

    /// Value in the primary language, used for sorting and keys.
    pub fn primary(&self) -> &T {
        &self.en
    }

    /// Both members, primary first.
    pub fn both(&self) -> [&T; 2] {
        [&self.en, &self.bn]
    }
}

/// A bilingual value whose members may each be absent.
pub type OptionalBilingual = Bilingual<Option<String>>;

impl Bilingual<Option<String>> {
    /// Value in the requested language, if present.
    pub fn get_str(&self, language: Language) -> Option<&str> {
        self.get(language).as_deref()
    }

    /// Present members, primary first.
    pub fn present(&self) -> impl Iterator<Item = &str> {
        self.both().into_iter().filter_map(|value| value.as_deref())
    }

    /// True when neither language has a value.
    pub fn is_empty(&self) -> bool {
        self.en.is_none() && self.bn.is_none()
    }

    /// Value in the requested language, falling back to the other language.
    pub fn display(&self, language: Language) -> Option<&str> {
        self.get_str(language)
            .or_else(|| self.get_str(language.other()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_pair_skips_missing_members() {
        let father: OptionalBilingual = Bilingual::new(Some("Ali Hassan".to_string()), None);
        assert_eq!(father.present().collect::<Vec<_>>(), vec!["Ali Hassan"]);
        assert!(!father.is_empty());
        assert_eq!(father.display(Language::Bangla), Some("Ali Hassan"));
    }

    #[test]
    fn empty_optional_pair() {
        let spouse = OptionalBilingual::default();
        assert!(spouse.is_empty());
        assert_eq!(spouse.display(Language::English), None);
        assert_eq!(spouse.present().count(), 0);
    }
}
