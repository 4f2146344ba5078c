//! Supported interface languages.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned while parsing a language code.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unsupported language: {0}")]
pub struct ParseLanguageError(pub String);

/// Interface language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    /// English, the fallback language.
    #[default]
    En,
    /// Dutch.
    Nl,
    /// French.
    Fr,
    /// German.
    De,
}

impl Language {
    /// All supported languages.
    pub const ALL: [Self; 4] = [Self::En, Self::Nl, Self::Fr, Self::De];

    /// Returns the ISO 639-1 code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Nl => "nl",
            Self::Fr => "fr",
            Self::De => "de",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Language {
    type Error = ParseLanguageError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|language| language.as_str() == normalized)
            .ok_or_else(|| ParseLanguageError(value.to_owned()))
    }
}
