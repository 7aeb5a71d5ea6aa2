use serde::Deserialize;

/// Build manifest for one site
///
/// This is the on-disk shape the CLI loads: the site base URL plus the raw
/// generation options, all optional except as enforced by validation.
#[derive(Debug, Clone, Deserialize)]
pub struct BuildManifest {
    /// Base URL of the site being built (e.g., "https://example.com")
    pub site: Option<String>,

    #[serde(flatten)]
    pub options: RobotsOptions,
}

/// Raw, unvalidated generation options
///
/// Field shapes deliberately mirror the loose input contract: `sitemap`
/// accepts three shapes and the path fields accept a scalar or a list.
/// [`validate`](crate::config::validate) turns this into a [`RobotsConfig`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RobotsOptions {
    /// Preferred host mirror, emitted as a `Host:` line when present
    #[serde(default)]
    pub host: Option<String>,

    /// Sitemap selection: on/off, a single URL, or a list of URLs
    #[serde(default)]
    pub sitemap: Option<SitemapOption>,

    /// Crawling rules; when omitted, a single allow-everything rule for all
    /// agents is substituted
    #[serde(default)]
    pub policy: Option<Vec<PolicyRule>>,
}

/// The three accepted shapes of the `sitemap` option
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SitemapOption {
    /// `true` derives `<site>/sitemap.xml`; `false` emits no sitemap lines
    Toggle(bool),
    /// One absolute sitemap URL
    Single(String),
    /// Several absolute sitemap URLs, emitted in order
    Many(Vec<String>),
}

/// A scalar value or an ordered list of values
///
/// Several directives (`user-agent`, `allow`, `disallow`, `clean-param`)
/// accept either form; a scalar renders as exactly one line.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum StringOrList {
    One(String),
    Many(Vec<String>),
}

impl StringOrList {
    /// Flattens into an owned list, a scalar becoming a single element
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            StringOrList::One(value) => vec![value.clone()],
            StringOrList::Many(values) => values.clone(),
        }
    }
}

/// One raw crawling rule for a set of agents
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyRule {
    /// Agent identifier(s) this rule applies to
    #[serde(rename = "user-agent")]
    pub user_agent: StringOrList,

    /// Path patterns the agents may fetch
    #[serde(default)]
    pub allow: Option<StringOrList>,

    /// Path patterns the agents must not fetch; an empty string is legal
    /// and renders as a bare `Disallow:` line
    #[serde(default)]
    pub disallow: Option<StringOrList>,

    /// Yandex `Clean-param` directives, each at most 500 characters
    #[serde(rename = "clean-param", default)]
    pub clean_param: Option<StringOrList>,

    /// Seconds between fetches, integer or fractional
    #[serde(rename = "crawl-delay", default)]
    pub crawl_delay: Option<f64>,
}

/// A validated, normalized configuration ready for serialization
///
/// Invariants: `policies` is non-empty, every sitemap entry parses as an
/// absolute URL, and `host` (when present) satisfies hostname grammar.
/// Immutable after validation.
#[derive(Debug, Clone, PartialEq)]
pub struct RobotsConfig {
    /// Rules in input order; order is preserved verbatim in the output
    pub policies: Vec<Policy>,

    /// Absolute sitemap URLs, kept as given (never re-normalized)
    pub sitemaps: Vec<String>,

    /// Preferred host, if one was configured
    pub host: Option<String>,
}

/// One normalized crawling rule
#[derive(Debug, Clone, PartialEq)]
pub struct Policy {
    /// At least one non-empty agent identifier
    pub user_agents: Vec<String>,

    /// `None` means the directive is absent; `Some` emits one line per value
    pub allow: Option<Vec<String>>,

    /// `None` means the directive is absent; `Some` emits one line per value
    pub disallow: Option<Vec<String>>,

    /// Clean-param entries, each validated to at most 500 characters
    pub clean_param: Vec<String>,

    /// Finite non-negative delay in seconds
    pub crawl_delay: Option<f64>,
}

impl Policy {
    /// The substitute rule used when no `policy` option is supplied:
    /// every agent may fetch everything.
    pub fn allow_all() -> Self {
        Policy {
            user_agents: vec!["*".to_string()],
            allow: Some(vec!["/".to_string()]),
            disallow: None,
            clean_param: Vec::new(),
            crawl_delay: None,
        }
    }
}
