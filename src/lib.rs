//! Static multi-language landing-page generator.
//!
//! One HTML template plus a translations file produce one page per language,
//! a `sitemap.xml` and a `robots.txt`.

pub mod builders;
pub mod config;
pub mod error;
pub mod generator;
pub mod i18n;
pub mod output;
pub mod page;
pub mod sitemap;
pub mod template;
