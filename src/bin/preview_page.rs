//! Preview binary - renders one language page to stdout without writing the docs tree
//!
//! Usage:
//!   cargo run --bin preview                 # Render the default language
//!   cargo run --bin preview -- fr           # Render the French page
//!   cargo run --bin preview -- --plan       # Print the output plan as JSON
//!
//! Reads the same environment variables as the main generator
//! (TEMPLATE_PATH, TRANSLATIONS_PATH, SITE_BASE_URL, DEFAULT_LANGUAGE, ...).

use anyhow::{Context, Result};
use landing_page_builder::{config::Config, generator, i18n::TranslationStore};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

/// One planned output file
#[derive(Debug, Serialize)]
struct PlannedPage {
    lang: String,
    path: PathBuf,
    bytes: usize,
}

fn main() -> Result<()> {
    // Load environment from .env file
    dotenvy::dotenv().ok();

    // Initialize logging (stderr, so the page itself stays clean on stdout)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("landing_page_builder=info".parse()?),
        )
        .init();

    // Parse CLI arguments
    let args: Vec<String> = std::env::args().skip(1).collect();
    let show_plan = args.iter().any(|arg| arg == "--plan");
    let requested = args.iter().find(|arg| !arg.starts_with("--")).cloned();

    let config = Config::from_env()?;
    let template = generator::load_template(&config.template_path)?;
    let store = TranslationStore::load(&config.translations_path)?;

    // Builds and validates every page (warnings are logged), exactly as a real run would
    let built = generator::build_pages(&config, &template, &store)?;

    if show_plan {
        let plan: Vec<PlannedPage> = built
            .pages
            .iter()
            .map(|page| PlannedPage {
                lang: page.code.clone(),
                path: page.output_path.clone(),
                bytes: page.html.len(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    let code = requested.unwrap_or_else(|| config.default_language.clone());
    let page = built
        .pages
        .iter()
        .find(|page| page.code == code)
        .with_context(|| {
            format!(
                "No language '{}' in translations (available: {})",
                code,
                store.codes().join(", ")
            )
        })?;

    info!("Previewing '{}' (would write {})", code, page.output_path.display());
    println!("{}", page.html);

    Ok(())
}
