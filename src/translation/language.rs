//! Supported languages and translation directions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::TranslateError;
use crate::ui::Style;

/// A language the completion model was fine-tuned on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Balinese,
}

impl Language {
    /// All supported languages, in display order.
    pub const ALL: [Self; 2] = [Self::English, Self::Balinese];

    /// The language code used inside prompts.
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Balinese => "ban",
        }
    }

    /// Human-readable name shown in the form.
    pub const fn name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Balinese => "Balinese",
        }
    }
}

/// An ordered (source, target) pair the model supports.
///
/// Only the listed pairs exist; the type cannot hold an arbitrary
/// combination of codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TranslationDirection {
    #[default]
    EnglishToBalinese,
    BalineseToEnglish,
}

impl TranslationDirection {
    /// Supported directions. The first entry is the form default.
    pub const ALL: [Self; 2] = [Self::EnglishToBalinese, Self::BalineseToEnglish];

    pub const fn source(self) -> Language {
        match self {
            Self::EnglishToBalinese => Language::English,
            Self::BalineseToEnglish => Language::Balinese,
        }
    }

    pub const fn target(self) -> Language {
        match self {
            Self::EnglishToBalinese => Language::Balinese,
            Self::BalineseToEnglish => Language::English,
        }
    }

    /// Code form, e.g. `en-ban`.
    pub fn code(self) -> String {
        format!("{}-{}", self.source().code(), self.target().code())
    }

    /// Label form, e.g. `English->Balinese`.
    pub fn label(self) -> String {
        format!("{}->{}", self.source().name(), self.target().name())
    }
}

impl fmt::Display for TranslationDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for TranslationDirection {
    type Err = TranslateError;

    /// Accepts either the code form (`ban-en`) or the label form
    /// (`Balinese->English`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.code() == s || d.label() == s)
            .ok_or_else(|| TranslateError::UnsupportedDirection(s.to_string()))
    }
}

impl TryFrom<String> for TranslationDirection {
    type Error = TranslateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TranslationDirection> for String {
    fn from(direction: TranslationDirection) -> Self {
        direction.code()
    }
}

/// Prints supported languages and directions to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported languages"));
    for language in Language::ALL {
        println!(
            "  {:4} {}",
            Style::code(language.code()),
            Style::secondary(language.name())
        );
    }
    println!();
    println!("{}", Style::header("Supported directions"));
    for direction in TranslationDirection::ALL {
        println!(
            "  {:7} {}",
            Style::code(direction.code()),
            Style::secondary(direction.label())
        );
    }
}
