//! Site-wide documents built once per run: `sitemap.xml` and `robots.txt`.

use crate::i18n::TranslationStore;
use chrono::NaiveDate;

pub const SITEMAP_FILE: &str = "sitemap.xml";
pub const ROBOTS_FILE: &str = "robots.txt";

/// Sitemap listing every language page with the same `lastmod` date.
pub fn sitemap_xml(store: &TranslationStore, base_url: &str, date: NaiveDate) -> String {
    let lastmod = date.format("%Y-%m-%d").to_string();
    let urls: Vec<String> = store
        .iter()
        .map(|entry| {
            let loc = escape_xml(&format!("{}{}", base_url, entry.record.path));
            format!(
                "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n  </url>",
                loc, lastmod
            )
        })
        .collect();

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n\
         {}\n\
         </urlset>",
        urls.join("\n")
    )
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Allow-all crawler policy pointing at the sitemap.
pub fn robots_txt(base_url: &str) -> String {
    format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}/{}",
        base_url, SITEMAP_FILE
    )
}
