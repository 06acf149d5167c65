use serde::{Deserialize, Serialize};

/// All localized strings and metadata for one language.
///
/// Field names follow the camelCase keys of the translations file. Optional
/// feature blocks resolve to an empty string when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRecord {
    // ==================== Language Metadata ====================
    /// Name shown in the language selector (e.g., "Français")
    pub lang_name: String,

    /// Site-relative URL of the page (e.g., "/" or "/fr/")
    pub path: String,

    /// Relative prefix from the page back to the site root (e.g., "./" or "../")
    pub root_path: String,

    /// Open Graph locale tag (e.g., "fr_FR")
    pub og_locale: String,

    /// Explicit hreflang codes; the language key is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hreflang_tags: Option<Vec<String>>,

    // ==================== Page Metadata ====================
    pub title: String,
    pub app_name: String,
    pub meta_description: String,

    // ==================== Hero Section ====================
    /// Hero headline, one entry per line; the last line is accented
    pub hero_title: Vec<String>,
    pub hero_description: String,

    // ==================== Stats & Contact ====================
    pub downloads: String,
    pub worldwide: String,
    pub contact: String,

    // ==================== Features ====================
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature1_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature1_desc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature2_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature2_desc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature3_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature3_desc: Option<String>,
}

impl TranslationRecord {
    /// Hreflang codes this language is advertised under.
    pub fn hreflang_codes<'a>(&'a self, code: &'a str) -> Vec<&'a str> {
        match &self.hreflang_tags {
            Some(tags) => tags.iter().map(String::as_str).collect(),
            None => vec![code],
        }
    }
}
