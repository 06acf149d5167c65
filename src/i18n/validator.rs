//! Validation of translations, the template and assembled pages.
//!
//! Problems that would otherwise ship silently (a `{{token}}` left visible in a
//! page, a language selector with nothing selected, two languages writing to
//! the same URL) are collected into a `ValidationReport` before anything is
//! written to disk.

use crate::i18n::TranslationStore;
use crate::template::{placeholders_in, Placeholder};
use std::collections::HashMap;
use std::path::{Component, Path};

/// Validation report containing errors and warnings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that must stop the run
    pub errors: Vec<String>,

    /// Problems worth reporting that do not stop the run
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Append another report's findings to this one
    pub fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

/// Validator for translations and generated pages.
pub struct PageValidator;

impl PageValidator {
    /// Check every record of the store.
    ///
    /// Errors:
    /// - a code that is not a single directory name (it names the output folder)
    /// - a record with an empty `heroTitle`
    /// - an empty `hreflangTags` list (the language would vanish from the hreflang block)
    /// - two languages sharing the same `path`
    pub fn validate_store(store: &TranslationStore) -> ValidationReport {
        let mut report = ValidationReport::default();
        let mut paths: HashMap<&str, &str> = HashMap::new();

        for entry in store.iter() {
            let record = &entry.record;

            if !is_single_component(&entry.code) {
                report.errors.push(format!(
                    "Language code '{}' is not a plain directory name",
                    entry.code
                ));
            }

            if record.hero_title.is_empty() {
                report
                    .errors
                    .push(format!("Language '{}' has an empty heroTitle", entry.code));
            }

            if matches!(&record.hreflang_tags, Some(tags) if tags.is_empty()) {
                report.errors.push(format!(
                    "Language '{}' has an empty hreflangTags list",
                    entry.code
                ));
            }

            if let Some(previous) = paths.insert(record.path.as_str(), entry.code.as_str()) {
                report.errors.push(format!(
                    "Languages '{}' and '{}' share the path '{}'",
                    previous, entry.code, record.path
                ));
            }
        }

        report
    }

    /// Warn about template tokens that no placeholder will ever resolve.
    pub fn validate_template(template: &str) -> ValidationReport {
        let mut report = ValidationReport::default();

        for name in placeholders_in(template) {
            if Placeholder::from_name(&name).is_none() {
                report
                    .warnings
                    .push(format!("Template uses unknown placeholder {{{{{}}}}}", name));
            }
        }

        report
    }

    /// Check one assembled page.
    ///
    /// # Arguments
    /// * `code` - Language the page was built for
    /// * `unresolved` - Template tokens the page had no value for
    /// * `selected` - Number of selected entries in the page's language selector
    /// * `allow_unresolved` - Report leftover tokens as warnings instead of errors
    pub fn validate_page(
        code: &str,
        unresolved: &[String],
        selected: usize,
        allow_unresolved: bool,
    ) -> ValidationReport {
        let mut report = ValidationReport::default();

        if !unresolved.is_empty() {
            let message = format!(
                "Page '{}' contains unresolved placeholders: {}",
                code,
                unresolved.join(", ")
            );
            if allow_unresolved {
                report.warnings.push(message);
            } else {
                report.errors.push(message);
            }
        }

        if selected != 1 {
            report.errors.push(format!(
                "Page '{}' language selector has {} selected options, expected 1",
                code, selected
            ));
        }

        report
    }
}

fn is_single_component(code: &str) -> bool {
    let mut components = Path::new(code).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
