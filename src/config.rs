use anyhow::{bail, Context, Result};
use std::path::PathBuf;

/// Site URL used for canonical links, hreflang tags and the sitemap
pub const DEFAULT_BASE_URL: &str = "https://flexscoreboard.kosukeohmura.com";

/// App Store link; `{campaign}` is replaced with the sanitized language code
pub const DEFAULT_APP_STORE_URL: &str =
    "https://apps.apple.com/app/apple-store/id1453457844?pt=119669481&ct=lp_{campaign}&mt=8";

#[derive(Debug, Clone)]
pub struct Config {
    // Site
    pub base_url: String,
    pub default_language: String,
    pub app_store_url: String,

    // Inputs
    pub template_path: PathBuf,
    pub translations_path: PathBuf,

    // Output
    pub docs_dir: PathBuf,
    pub generated_marker: bool,

    // Validation
    pub allow_unresolved_placeholders: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Site
            base_url: normalize_base_url(
                &std::env::var("SITE_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            ),
            default_language: std::env::var("DEFAULT_LANGUAGE")
                .unwrap_or_else(|_| "en".to_string()),
            app_store_url: std::env::var("APP_STORE_URL")
                .unwrap_or_else(|_| DEFAULT_APP_STORE_URL.to_string()),

            // Inputs
            template_path: std::env::var("TEMPLATE_PATH")
                .unwrap_or_else(|_| "template.html".to_string())
                .into(),
            translations_path: std::env::var("TRANSLATIONS_PATH")
                .unwrap_or_else(|_| "translations.json".to_string())
                .into(),

            // Output
            docs_dir: std::env::var("DOCS_DIR")
                .unwrap_or_else(|_| "docs".to_string())
                .into(),
            generated_marker: env_flag("GENERATED_MARKER", true)?,

            // Validation
            allow_unresolved_placeholders: env_flag("ALLOW_UNRESOLVED_PLACEHOLDERS", false)?,
        })
    }

    /// Name of the template file as shown in the generated-file marker.
    pub fn template_name(&self) -> String {
        self.template_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "template.html".to_string())
    }
}

/// Strip trailing slashes so `base_url + path` never doubles the separator.
fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

fn env_flag(name: &str, default: bool) -> Result<bool> {
    match std::env::var(name) {
        Ok(value) => parse_flag(&value).with_context(|| format!("{} is not a valid boolean", name)),
        Err(_) => Ok(default),
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => bail!("expected true/false, got '{}'", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 8] = [
        "SITE_BASE_URL",
        "DEFAULT_LANGUAGE",
        "APP_STORE_URL",
        "TEMPLATE_PATH",
        "TRANSLATIONS_PATH",
        "DOCS_DIR",
        "GENERATED_MARKER",
        "ALLOW_UNRESOLVED_PLACEHOLDERS",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    // ==================== from_env Tests ====================

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = Config::from_env().expect("defaults should load");

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.default_language, "en");
        assert_eq!(config.app_store_url, DEFAULT_APP_STORE_URL);
        assert_eq!(config.template_path, PathBuf::from("template.html"));
        assert_eq!(config.translations_path, PathBuf::from("translations.json"));
        assert_eq!(config.docs_dir, PathBuf::from("docs"));
        assert!(config.generated_marker);
        assert!(!config.allow_unresolved_placeholders);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("SITE_BASE_URL", "https://example.com/");
        std::env::set_var("DEFAULT_LANGUAGE", "ja");
        std::env::set_var("DOCS_DIR", "public");
        std::env::set_var("GENERATED_MARKER", "no");
        std::env::set_var("ALLOW_UNRESOLVED_PLACEHOLDERS", "TRUE");

        let config = Config::from_env().expect("overrides should load");
        clear_env();

        assert_eq!(config.base_url, "https://example.com");
        assert_eq!(config.default_language, "ja");
        assert_eq!(config.docs_dir, PathBuf::from("public"));
        assert!(!config.generated_marker);
        assert!(config.allow_unresolved_placeholders);
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_bad_flag() {
        clear_env();
        std::env::set_var("GENERATED_MARKER", "sometimes");

        let result = Config::from_env();
        clear_env();

        let err = result.unwrap_err();
        assert!(err.to_string().contains("GENERATED_MARKER"));
    }

    // ==================== Helper Tests ====================

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(normalize_base_url("https://a.com"), "https://a.com");
        assert_eq!(normalize_base_url("https://a.com//"), "https://a.com");
        assert_eq!(normalize_base_url("  https://a.com/ "), "https://a.com");
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("1").unwrap());
        assert!(parse_flag(" Yes ").unwrap());
        assert!(!parse_flag("0").unwrap());
        assert!(!parse_flag("FALSE").unwrap());
        assert!(parse_flag("").is_err());
    }

    #[test]
    fn test_template_name_uses_file_name() {
        let config = Config {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_language: "en".to_string(),
            app_store_url: DEFAULT_APP_STORE_URL.to_string(),
            template_path: PathBuf::from("site/src/base.html"),
            translations_path: PathBuf::from("translations.json"),
            docs_dir: PathBuf::from("docs"),
            generated_marker: true,
            allow_unresolved_placeholders: false,
        };
        assert_eq!(config.template_name(), "base.html");
    }
}
