//! Translation store: every language the site is generated in.
//!
//! The store is loaded once from the translations file and never mutated.
//! Languages keep the order in which they appear in the file; that order drives
//! page generation, the hreflang block, the language selector and the sitemap.

use crate::error::GenerateError;
use crate::i18n::TranslationRecord;
use anyhow::{Context, Result};
use std::path::Path;

/// Reserved key holding the JSON schema reference, not a language.
pub const SCHEMA_KEY: &str = "$schema";

/// One language of the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageEntry {
    /// Language key from the translations file (e.g., "en", "zh-Hant")
    pub code: String,

    /// Localized content for the language
    pub record: TranslationRecord,
}

/// Ordered, immutable collection of translation records.
#[derive(Debug, Clone, Default)]
pub struct TranslationStore {
    languages: Vec<LanguageEntry>,
}

impl TranslationStore {
    /// Build a store from already-parsed entries, keeping their order.
    pub fn new(languages: Vec<LanguageEntry>) -> Self {
        Self { languages }
    }

    /// Read and parse the translations file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read translations at {}", path.display()))?;
        Self::from_json(&contents)
            .with_context(|| format!("Failed to parse translations at {}", path.display()))
    }

    /// Parse a translations document: a JSON object keyed by language code.
    ///
    /// The `$schema` key is skipped. A record that fails to deserialize
    /// (missing required field, wrong type) is reported with its language code.
    pub fn from_json(json: &str) -> Result<Self> {
        let document: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(json).context("Translations must be a JSON object")?;

        let mut languages = Vec::with_capacity(document.len());
        for (code, value) in document {
            if code == SCHEMA_KEY {
                continue;
            }
            let record = serde_json::from_value::<TranslationRecord>(value).map_err(|source| {
                GenerateError::InvalidRecord {
                    code: code.clone(),
                    source,
                }
            })?;
            languages.push(LanguageEntry { code, record });
        }

        Ok(Self { languages })
    }

    /// Get a language record by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&TranslationRecord> {
        self.languages
            .iter()
            .find(|entry| entry.code == code)
            .map(|entry| &entry.record)
    }

    /// Check if a language code is present.
    pub fn contains(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }

    /// All languages in file order.
    pub fn iter(&self) -> impl Iterator<Item = &LanguageEntry> {
        self.languages.iter()
    }

    /// All language codes in file order.
    pub fn codes(&self) -> Vec<&str> {
        self.languages.iter().map(|entry| entry.code.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}
