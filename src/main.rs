use anyhow::Result;
use landing_page_builder::{config, generator};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file (ignored when variables come from the environment)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("landing_page_builder=info".parse()?),
        )
        .init();

    // Load configuration from environment
    let config = config::Config::from_env()?;
    info!(
        "Generating {} into {}",
        config.template_path.display(),
        config.docs_dir.display()
    );

    let summary = generator::run(&config)?;

    if !summary.warnings.is_empty() {
        info!("{} warning(s) reported", summary.warnings.len());
    }
    info!(
        "Generated {} files ({} pages).",
        summary.files.len(),
        summary.pages
    );
    Ok(())
}
