//! Robotsmith: deterministic `robots.txt` generation
//!
//! This crate validates a structured crawling policy and serializes it into
//! the line-oriented `robots.txt` format. Validation and serialization are
//! both pure: the same site URL and options always produce byte-identical
//! output, and a rejected configuration yields a typed reason instead of a
//! panic so the surrounding build can continue without a `robots.txt`.

pub mod config;
pub mod output;
pub mod render;

use thiserror::Error;

/// Main error type for Robotsmith operations
#[derive(Debug, Error)]
pub enum RobotsmithError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Generation skipped: {0}")]
    Rejected(#[from] Rejection),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),
}

/// Configuration-specific errors (loading and parsing the build manifest)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read manifest file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Reasons the validator refuses to produce a `robots.txt`
///
/// Every variant is a skip outcome: the caller proceeds without a
/// `robots.txt` and surfaces the message. None of these abort the build.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Rejection {
    #[error("a site base URL is required to generate robots.txt")]
    MissingSite,

    #[error("option `host` is not a valid hostname: '{0}'")]
    InvalidHost(String),

    #[error("option `sitemap` is invalid: {0}")]
    InvalidSitemap(String),

    #[error("option `policy` is invalid: {0}")]
    InvalidPolicy(String),

    #[error("`clean-param` entry must have no more than 500 characters, got {0}")]
    CleanParamTooLong(usize),
}

/// Result type alias for Robotsmith operations
pub type Result<T> = std::result::Result<T, RobotsmithError>;

/// Result type alias for manifest loading
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for validation, where `Err` means "skip generation"
pub type ValidationResult<T> = std::result::Result<T, Rejection>;

// Re-export commonly used types
pub use config::{PolicyRule, RobotsConfig, RobotsOptions, SitemapOption, StringOrList};
pub use render::serialize;

/// Validates the given options against the site URL and renders the
/// `robots.txt` body in one step.
///
/// This is the whole pipeline minus I/O: callers that embed the crate in a
/// build tool hand the returned string to their own writer.
///
/// # Examples
///
/// ```
/// use robotsmith::{generate, RobotsOptions};
///
/// let body = generate(Some("https://example.com"), &RobotsOptions::default()).unwrap();
/// assert_eq!(
///     body,
///     "User-agent: *\nAllow: /\nSitemap: https://example.com/sitemap.xml\n"
/// );
/// ```
pub fn generate(site: Option<&str>, options: &RobotsOptions) -> ValidationResult<String> {
    let config = config::validate(site, options)?;
    Ok(render::serialize(&config))
}
