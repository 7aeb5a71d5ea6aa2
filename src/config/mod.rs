//! Configuration module for Robotsmith
//!
//! This module holds the raw option types, the TOML manifest loader, and the
//! validator that turns raw options into a normalized [`RobotsConfig`].
//!
//! # Example
//!
//! ```
//! use robotsmith::config::{validate, RobotsOptions};
//!
//! let config = validate(Some("https://example.com"), &RobotsOptions::default()).unwrap();
//! assert_eq!(config.sitemaps, vec!["https://example.com/sitemap.xml"]);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    BuildManifest, Policy, PolicyRule, RobotsConfig, RobotsOptions, SitemapOption, StringOrList,
};

// Re-export parser and validator entry points
pub use parser::load_manifest;
pub use validation::{is_valid_hostname, validate};
