//! Placeholder substitution for the page template.
//!
//! Placeholders are written `{{name}}`. Substitution is a single regex pass
//! over the template: values are inserted verbatim and never re-scanned, so
//! a translation that happens to contain `{{title}}` is emitted as-is.

use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Every placeholder the page template may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Lang,
    OgLocale,
    Title,
    AppName,
    MetaDescription,
    HeroDescription,
    Downloads,
    Worldwide,
    Contact,
    Feature1Title,
    Feature1Desc,
    Feature2Title,
    Feature2Desc,
    Feature3Title,
    Feature3Desc,
    RootPath,
    CanonicalUrl,
    HeroTitleHtml,
    HreflangTags,
    LangOptions,
    AppStoreUrl,
}

impl Placeholder {
    pub const ALL: [Placeholder; 21] = [
        Placeholder::Lang,
        Placeholder::OgLocale,
        Placeholder::Title,
        Placeholder::AppName,
        Placeholder::MetaDescription,
        Placeholder::HeroDescription,
        Placeholder::Downloads,
        Placeholder::Worldwide,
        Placeholder::Contact,
        Placeholder::Feature1Title,
        Placeholder::Feature1Desc,
        Placeholder::Feature2Title,
        Placeholder::Feature2Desc,
        Placeholder::Feature3Title,
        Placeholder::Feature3Desc,
        Placeholder::RootPath,
        Placeholder::CanonicalUrl,
        Placeholder::HeroTitleHtml,
        Placeholder::HreflangTags,
        Placeholder::LangOptions,
        Placeholder::AppStoreUrl,
    ];

    /// Identifier between the braces.
    pub fn name(self) -> &'static str {
        match self {
            Placeholder::Lang => "lang",
            Placeholder::OgLocale => "ogLocale",
            Placeholder::Title => "title",
            Placeholder::AppName => "appName",
            Placeholder::MetaDescription => "metaDescription",
            Placeholder::HeroDescription => "heroDescription",
            Placeholder::Downloads => "downloads",
            Placeholder::Worldwide => "worldwide",
            Placeholder::Contact => "contact",
            Placeholder::Feature1Title => "feature1Title",
            Placeholder::Feature1Desc => "feature1Desc",
            Placeholder::Feature2Title => "feature2Title",
            Placeholder::Feature2Desc => "feature2Desc",
            Placeholder::Feature3Title => "feature3Title",
            Placeholder::Feature3Desc => "feature3Desc",
            Placeholder::RootPath => "rootPath",
            Placeholder::CanonicalUrl => "canonicalUrl",
            Placeholder::HeroTitleHtml => "heroTitleHtml",
            Placeholder::HreflangTags => "hreflangTags",
            Placeholder::LangOptions => "langOptions",
            Placeholder::AppStoreUrl => "appStoreUrl",
        }
    }

    /// Literal marker as it appears in the template (e.g., `{{title}}`).
    pub fn token(self) -> String {
        format!("{{{{{}}}}}", self.name())
    }

    pub fn from_name(name: &str) -> Option<Placeholder> {
        Placeholder::ALL.into_iter().find(|p| p.name() == name)
    }
}

/// Resolved values for one page, keyed by placeholder.
#[derive(Debug, Clone, Default)]
pub struct ReplacementMap {
    values: HashMap<Placeholder, String>,
}

impl ReplacementMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, placeholder: Placeholder, value: impl Into<String>) {
        self.values.insert(placeholder, value.into());
    }

    pub fn get(&self, placeholder: Placeholder) -> Option<&str> {
        self.values.get(&placeholder).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn get_by_name(&self, name: &str) -> Option<&str> {
        Placeholder::from_name(name).and_then(|p| self.get(p))
    }
}

static TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();

/// `{{name}}` with the name captured in group 1.
fn token_regex() -> &'static Regex {
    TOKEN_REGEX.get_or_init(|| Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").unwrap())
}

/// Replace every token found in `replacements`, leaving unknown tokens intact.
pub fn substitute(template: &str, replacements: &ReplacementMap) -> String {
    token_regex()
        .replace_all(template, |caps: &Captures| {
            match replacements.get_by_name(&caps[1]) {
                Some(value) => value.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Distinct token names used by `template`, in order of first appearance.
pub fn placeholders_in(template: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();

    for caps in token_regex().captures_iter(template) {
        let name = &caps[1];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }

    names
}

/// Tokens of `template` that `replacements` has no value for, as `{{name}}`.
///
/// Only the template is scanned, so values that contain braces never count.
pub fn unresolved_in(template: &str, replacements: &ReplacementMap) -> Vec<String> {
    placeholders_in(template)
        .into_iter()
        .filter(|name| replacements.get_by_name(name).is_none())
        .map(|name| format!("{{{{{}}}}}", name))
        .collect()
}
