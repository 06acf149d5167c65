//! Composite placeholder values derived from the translation store.

use crate::i18n::TranslationStore;

const HERO_LINE_BREAK: &str = "<br>\n        ";
const HREFLANG_SEPARATOR: &str = "\n  ";
const OPTION_SEPARATOR: &str = "\n        ";

/// Marker in the App Store URL template replaced by the campaign parameter
pub const CAMPAIGN_MARKER: &str = "{campaign}";

/// Hero headline markup: one line per segment, last segment accented.
///
/// A single segment yields only the accent span. An empty slice yields an
/// empty string; the validator rejects such records before pages are built.
pub fn hero_title_html(segments: &[String]) -> String {
    let Some((accent, lines)) = segments.split_last() else {
        return String::new();
    };

    let mut html = String::new();
    for line in lines {
        html.push_str(line);
        html.push_str(HERO_LINE_BREAK);
    }
    html.push_str(&format!(r#"<span class="accent">{}</span>"#, accent));
    html
}

/// Alternate-link tags for every language plus the `x-default` fallback.
pub fn hreflang_tags(store: &TranslationStore, base_url: &str) -> String {
    let mut tags = Vec::new();

    for entry in store.iter() {
        let url = format!("{}{}", base_url, entry.record.path);
        for hreflang in entry.record.hreflang_codes(&entry.code) {
            tags.push(format!(
                r#"<link rel="alternate" hreflang="{}" href="{}">"#,
                hreflang, url
            ));
        }
    }

    tags.push(format!(
        r#"<link rel="alternate" hreflang="x-default" href="{}/">"#,
        base_url
    ));
    tags.join(HREFLANG_SEPARATOR)
}

/// Language selector entries, with the page's own language selected.
pub fn lang_options(store: &TranslationStore, current: &str) -> String {
    store
        .iter()
        .map(|entry| {
            let selected = if entry.code == current { " selected" } else { "" };
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                entry.record.path, selected, entry.record.lang_name
            )
        })
        .collect::<Vec<_>>()
        .join(OPTION_SEPARATOR)
}

/// Number of entries `lang_options` marks selected for `current`.
pub fn selected_option_count(store: &TranslationStore, current: &str) -> usize {
    store.iter().filter(|entry| entry.code == current).count()
}

/// Campaign parameter for a language: lowercase, ASCII letters only.
///
/// `en-US` becomes `enus`; region suffixes and digits are dropped.
pub fn campaign_param(code: &str) -> String {
    code.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase())
        .collect()
}

/// App Store link tagged with the language's campaign parameter.
pub fn app_store_url(url_template: &str, code: &str) -> String {
    url_template.replace(CAMPAIGN_MARKER, &campaign_param(code))
}
