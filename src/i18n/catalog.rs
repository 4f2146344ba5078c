//! Catalog storage and key resolution.

use super::Language;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

const EMBEDDED_CATALOGS: [(Language, &str); 4] = [
    (Language::En, include_str!("../../locales/en.json")),
    (Language::Nl, include_str!("../../locales/nl.json")),
    (Language::Fr, include_str!("../../locales/fr.json")),
    (Language::De, include_str!("../../locales/de.json")),
];

/// Error raised when a catalog document cannot be loaded.
#[derive(Debug, Error)]
#[error("invalid catalog for language {language}: {source}")]
pub struct CatalogError {
    /// Language whose catalog failed to parse.
    pub language: Language,
    /// Underlying parse failure.
    #[source]
    pub source: serde_json::Error,
}

/// Translation catalogs for all loaded languages.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    catalogs: HashMap<Language, Value>,
}

impl Translator {
    /// Loads the catalogs bundled with the crate.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when a bundled catalog is not valid JSON.
    pub fn embedded() -> Result<Self, CatalogError> {
        let mut translator = Self::default();
        for (language, document) in EMBEDDED_CATALOGS {
            let catalog = serde_json::from_str(document)
                .map_err(|source| CatalogError { language, source })?;
            translator.insert(language, catalog);
        }
        Ok(translator)
    }

    /// Registers or replaces the catalog for `language`.
    pub fn insert(&mut self, language: Language, catalog: Value) {
        self.catalogs.insert(language, catalog);
    }

    /// Resolves `key` without fallback or substitution.
    ///
    /// Returns `None` when the key is absent, resolves to a non-string node,
    /// or resolves to an empty string.
    #[must_use]
    pub fn lookup(&self, language: Language, key: &str) -> Option<&str> {
        let catalog = self.catalogs.get(&language)?;
        key.split('.')
            .try_fold(catalog, |node, segment| node.get(segment))
            .and_then(Value::as_str)
            .filter(|text| !text.is_empty())
    }

    /// Resolves `key` in `language`, falling back to English.
    #[must_use]
    pub fn resolve(&self, language: Language, key: &str) -> Option<&str> {
        self.lookup(language, key)
            .or_else(|| self.lookup(Language::En, key))
    }

    /// Translates `key`, substituting `{N}` placeholders from `args`.
    ///
    /// Falls back to English when the key is missing in `language` and to
    /// the raw key when English lacks it too.
    #[must_use]
    pub fn translate(&self, language: Language, key: &str, args: &[&str]) -> String {
        self.resolve(language, key)
            .map_or_else(|| key.to_owned(), |text| substitute(text, args))
    }
}

/// Replaces `{N}` with `args[N]`; placeholders without an argument stay.
fn substitute(template: &str, args: &[&str]) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        let (literal, placeholder) = rest.split_at(open);
        rendered.push_str(literal);
        let after_brace = placeholder.get(1..).unwrap_or_default();
        let Some(close) = after_brace.find('}') else {
            rendered.push_str(placeholder);
            return rendered;
        };
        let index_text = after_brace.get(..close).unwrap_or_default();
        let argument = index_text
            .chars()
            .all(|ch| ch.is_ascii_digit())
            .then(|| index_text.parse::<usize>().ok())
            .flatten()
            .and_then(|index| args.get(index));
        if let Some(value) = argument {
            rendered.push_str(value);
            rest = after_brace.get(close + 1..).unwrap_or_default();
        } else {
            rendered.push('{');
            rest = after_brace;
        }
    }
    rendered.push_str(rest);
    rendered
}
