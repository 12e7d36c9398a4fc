//! Supported languages and per-language text slots

use serde::{Deserialize, Serialize};
use std::fmt;

/// A language the game data ships in. Closed set; extending it is a code
/// change, not configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Language {
    English,
    Japanese,
    German,
    French,
}

impl Language {
    /// All supported languages, in the order language passes are merged
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::Japanese,
        Language::German,
        Language::French,
    ];

    /// Two-letter code used in sheet file names
    pub const fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Japanese => "ja",
            Language::German => "de",
            Language::French => "fr",
        }
    }

    /// Look up a language by its two-letter code
    pub fn from_code(code: &str) -> Option<Language> {
        Language::ALL.into_iter().find(|lang| lang.code() == code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One text slot per supported language. Slots for languages absent from the
/// source stay at their default empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub en: String,
    pub ja: String,
    pub de: String,
    pub fr: String,
}

impl LocalizedText {
    /// Set the slot for one language
    pub fn set(&mut self, language: Language, text: impl Into<String>) {
        let slot = match language {
            Language::English => &mut self.en,
            Language::Japanese => &mut self.ja,
            Language::German => &mut self.de,
            Language::French => &mut self.fr,
        };
        *slot = text.into();
    }

    /// Get the slot for one language
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::English => &self.en,
            Language::Japanese => &self.ja,
            Language::German => &self.de,
            Language::French => &self.fr,
        }
    }

    /// Check whether every slot is empty
    pub fn is_empty(&self) -> bool {
        Language::ALL.into_iter().all(|lang| self.get(lang).is_empty())
    }
}
