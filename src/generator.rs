//! One full generation run: load inputs, assemble and validate every page,
//! then write pages, the sitemap and robots.txt.

use crate::config::Config;
use crate::error::GenerateError;
use crate::i18n::{PageValidator, TranslationStore, ValidationReport};
use crate::output::write_generated;
use crate::page::{AssembledPage, PageAssembler};
use crate::sitemap::{robots_txt, sitemap_xml, ROBOTS_FILE, SITEMAP_FILE};
use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct GenerationSummary {
    /// Number of language pages written
    pub pages: usize,

    /// Every file written, in write order
    pub files: Vec<PathBuf>,

    /// Validation warnings that did not stop the run
    pub warnings: Vec<String>,
}

/// Read the page template at `path`.
pub fn load_template(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read template at {}", path.display()))
}

/// Run the generator with today's UTC date in the sitemap.
pub fn run(config: &Config) -> Result<GenerationSummary> {
    run_on(config, Utc::now().date_naive())
}

/// Run the generator with an explicit sitemap date.
pub fn run_on(config: &Config, date: NaiveDate) -> Result<GenerationSummary> {
    let template = load_template(&config.template_path)?;
    let store = TranslationStore::load(&config.translations_path)?;
    info!(
        "Loaded {} languages from {}",
        store.len(),
        config.translations_path.display()
    );

    info!("Building multi-language pages...");
    let built = build_pages(config, &template, &store)?;

    let mut summary = GenerationSummary {
        pages: built.pages.len(),
        files: Vec::with_capacity(built.pages.len() + 2),
        warnings: built.warnings,
    };

    for page in &built.pages {
        write_file(config, &page.output_path, &page.html, &mut summary)?;
    }

    let sitemap = sitemap_xml(&store, &config.base_url, date);
    write_file(config, &config.docs_dir.join(SITEMAP_FILE), &sitemap, &mut summary)?;

    let robots = robots_txt(&config.base_url);
    write_file(config, &config.docs_dir.join(ROBOTS_FILE), &robots, &mut summary)?;

    info!("Build complete! Generated {} files.", summary.files.len());
    Ok(summary)
}

/// Pages ready to be written, with the warnings collected while building them.
#[derive(Debug, Clone)]
pub struct BuiltPages {
    pub pages: Vec<AssembledPage>,
    pub warnings: Vec<String>,
}

/// Assemble every page in store order without touching the file system.
///
/// Fails when the store is empty, the default language is missing, or any
/// validation error is found in the store, the template or a page.
pub fn build_pages(
    config: &Config,
    template: &str,
    store: &TranslationStore,
) -> Result<BuiltPages> {
    if store.is_empty() {
        return Err(GenerateError::EmptyStore.into());
    }
    if !store.contains(&config.default_language) {
        return Err(GenerateError::UnknownDefaultLanguage(config.default_language.clone()).into());
    }

    let mut report = ValidationReport::default();
    report.merge(PageValidator::validate_store(store));
    report.merge(PageValidator::validate_template(template));

    let assembler = PageAssembler::new(config, template, store);
    let mut pages = Vec::with_capacity(store.len());
    for code in store.codes() {
        let page = assembler.assemble(code)?;
        report.merge(page.report.clone());
        pages.push(page);
    }

    for warning in &report.warnings {
        warn!("{}", warning);
    }
    if report.has_errors() {
        return Err(GenerateError::Validation {
            errors: report.errors,
        }
        .into());
    }

    Ok(BuiltPages {
        pages,
        warnings: report.warnings,
    })
}

fn write_file(
    config: &Config,
    path: &Path,
    content: &str,
    summary: &mut GenerationSummary,
) -> Result<()> {
    write_generated(path, content)?;
    let shown = path.strip_prefix(&config.docs_dir).unwrap_or(path);
    info!("Generated: {}", shown.display());
    summary.files.push(path.to_path_buf());
    Ok(())
}
