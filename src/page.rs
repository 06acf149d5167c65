//! Page assembly: resolve every placeholder for one language and render it.

use crate::builders::{
    app_store_url, hero_title_html, hreflang_tags, lang_options, selected_option_count,
};
use crate::config::Config;
use crate::error::GenerateError;
use crate::i18n::{PageValidator, TranslationStore, ValidationReport};
use crate::template::{substitute, unresolved_in, Placeholder, ReplacementMap};
use std::path::PathBuf;
use tracing::debug;

const PAGE_FILE: &str = "index.html";

/// A rendered page, not yet written.
#[derive(Debug, Clone)]
pub struct AssembledPage {
    pub code: String,
    pub output_path: PathBuf,
    pub html: String,
    pub report: ValidationReport,
}

/// Builds pages from one template and one store.
///
/// Everything is borrowed: the template, store and configuration are loaded
/// once at startup and shared read-only by every page.
#[derive(Debug, Clone, Copy)]
pub struct PageAssembler<'a> {
    config: &'a Config,
    template: &'a str,
    store: &'a TranslationStore,
}

impl<'a> PageAssembler<'a> {
    pub fn new(config: &'a Config, template: &'a str, store: &'a TranslationStore) -> Self {
        Self {
            config,
            template,
            store,
        }
    }

    /// Resolve every placeholder value for `code`.
    pub fn replacements(&self, code: &str) -> Result<ReplacementMap, GenerateError> {
        let t = self
            .store
            .get_by_code(code)
            .ok_or_else(|| GenerateError::UnknownLanguage(code.to_string()))?;
        let optional = |value: &Option<String>| value.clone().unwrap_or_default();

        let mut map = ReplacementMap::new();

        // Direct fields
        map.insert(Placeholder::Lang, code);
        map.insert(Placeholder::OgLocale, t.og_locale.as_str());
        map.insert(Placeholder::Title, t.title.as_str());
        map.insert(Placeholder::AppName, t.app_name.as_str());
        map.insert(Placeholder::MetaDescription, t.meta_description.as_str());
        map.insert(Placeholder::HeroDescription, t.hero_description.as_str());
        map.insert(Placeholder::Downloads, t.downloads.as_str());
        map.insert(Placeholder::Worldwide, t.worldwide.as_str());
        map.insert(Placeholder::Contact, t.contact.as_str());
        map.insert(Placeholder::RootPath, t.root_path.as_str());

        // Optional feature blocks
        map.insert(Placeholder::Feature1Title, optional(&t.feature1_title));
        map.insert(Placeholder::Feature1Desc, optional(&t.feature1_desc));
        map.insert(Placeholder::Feature2Title, optional(&t.feature2_title));
        map.insert(Placeholder::Feature2Desc, optional(&t.feature2_desc));
        map.insert(Placeholder::Feature3Title, optional(&t.feature3_title));
        map.insert(Placeholder::Feature3Desc, optional(&t.feature3_desc));

        // Derived values
        map.insert(
            Placeholder::CanonicalUrl,
            format!("{}{}", self.config.base_url, t.path),
        );
        map.insert(Placeholder::HeroTitleHtml, hero_title_html(&t.hero_title));
        map.insert(
            Placeholder::HreflangTags,
            hreflang_tags(self.store, &self.config.base_url),
        );
        map.insert(Placeholder::LangOptions, lang_options(self.store, code));
        map.insert(
            Placeholder::AppStoreUrl,
            app_store_url(&self.config.app_store_url, code),
        );

        Ok(map)
    }

    /// Render the page for `code` and validate the result.
    pub fn assemble(&self, code: &str) -> Result<AssembledPage, GenerateError> {
        let replacements = self.replacements(code)?;
        let body = substitute(self.template, &replacements);

        let html = if self.config.generated_marker {
            format!("{}\n{}", self.generated_marker(), body)
        } else {
            body
        };

        let report = PageValidator::validate_page(
            code,
            &unresolved_in(self.template, &replacements),
            selected_option_count(self.store, code),
            self.config.allow_unresolved_placeholders,
        );

        debug!(
            "Assembled page '{}' ({} bytes, {} errors, {} warnings)",
            code,
            html.len(),
            report.errors.len(),
            report.warnings.len()
        );

        Ok(AssembledPage {
            code: code.to_string(),
            output_path: self.output_path(code),
            html,
            report,
        })
    }

    /// `<docs>/index.html` for the default language, `<docs>/<code>/index.html` otherwise.
    pub fn output_path(&self, code: &str) -> PathBuf {
        if code == self.config.default_language {
            self.config.docs_dir.join(PAGE_FILE)
        } else {
            self.config.docs_dir.join(code).join(PAGE_FILE)
        }
    }

    fn generated_marker(&self) -> String {
        format!(
            "<!-- DO NOT EDIT - Generated from {} -->",
            self.config.template_name()
        )
    }
}
