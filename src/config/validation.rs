use crate::config::types::{Policy, PolicyRule, RobotsConfig, RobotsOptions, SitemapOption};
use crate::Rejection;
use url::Url;

/// Longest accepted `Clean-param` entry, per the Yandex directive spec
const CLEAN_PARAM_MAX_CHARS: usize = 500;

/// Validates raw options against the site URL and produces a normalized
/// [`RobotsConfig`]
///
/// Checks run in a fixed order and short-circuit on the first violation:
/// site presence, host grammar, sitemap shape and URLs, then each policy
/// rule. A rejection means "skip generation", never a panic.
///
/// # Arguments
///
/// * `site` - Base URL of the site being built, if the caller has one
/// * `options` - Raw, unvalidated generation options
///
/// # Returns
///
/// * `Ok(RobotsConfig)` - Normalized configuration ready for serialization
/// * `Err(Rejection)` - The first violation found
pub fn validate(site: Option<&str>, options: &RobotsOptions) -> Result<RobotsConfig, Rejection> {
    let site = match site {
        Some(s) if !s.is_empty() => s,
        _ => return Err(Rejection::MissingSite),
    };

    let host = match options.host.as_deref() {
        Some(h) if !h.is_empty() => {
            if !is_valid_hostname(h) {
                return Err(Rejection::InvalidHost(h.to_string()));
            }
            Some(h.to_string())
        }
        _ => None,
    };

    // A missing sitemap option means "derive one from the site URL".
    let sitemaps = match &options.sitemap {
        Some(option) => resolve_sitemaps(option, site)?,
        None => vec![derived_sitemap(site)],
    };

    let policies = match &options.policy {
        Some(rules) => validate_policies(rules)?,
        None => vec![Policy::allow_all()],
    };

    Ok(RobotsConfig {
        policies,
        sitemaps,
        host,
    })
}

/// Resolves the three-shaped `sitemap` option into a list of URLs
fn resolve_sitemaps(option: &SitemapOption, site: &str) -> Result<Vec<String>, Rejection> {
    match option {
        SitemapOption::Toggle(false) => Ok(Vec::new()),
        SitemapOption::Toggle(true) => Ok(vec![derived_sitemap(site)]),
        SitemapOption::Single(url) => {
            check_absolute_url(url)?;
            Ok(vec![url.clone()])
        }
        SitemapOption::Many(urls) => {
            // Reject on the first bad element; nothing is partially kept.
            for url in urls {
                check_absolute_url(url)?;
            }
            Ok(urls.clone())
        }
    }
}

/// Builds the default sitemap URL: the site with exactly one trailing slash
/// followed by `sitemap.xml`
fn derived_sitemap(site: &str) -> String {
    format!("{}/sitemap.xml", site.trim_end_matches('/'))
}

/// Checks that a sitemap entry parses as an absolute URL
fn check_absolute_url(url: &str) -> Result<(), Rejection> {
    if url.is_empty() {
        return Err(Rejection::InvalidSitemap(
            "sitemap URL must not be empty".to_string(),
        ));
    }

    Url::parse(url)
        .map(|_| ())
        .map_err(|e| Rejection::InvalidSitemap(format!("'{}' is not an absolute URL: {}", url, e)))
}

/// Validates every policy rule; any single bad rule rejects the whole policy
fn validate_policies(rules: &[PolicyRule]) -> Result<Vec<Policy>, Rejection> {
    if rules.is_empty() {
        return Err(Rejection::InvalidPolicy(
            "`policy` must be a non-empty list".to_string(),
        ));
    }

    rules.iter().map(validate_rule).collect()
}

/// Validates and normalizes a single policy rule
fn validate_rule(rule: &PolicyRule) -> Result<Policy, Rejection> {
    let user_agents = rule.user_agent.to_vec();
    if user_agents.is_empty() || user_agents.iter().any(|agent| agent.is_empty()) {
        return Err(Rejection::InvalidPolicy(
            "each `policy` entry needs at least one non-empty `user-agent`".to_string(),
        ));
    }

    if let Some(delay) = rule.crawl_delay {
        if !delay.is_finite() || delay < 0.0 {
            return Err(Rejection::InvalidPolicy(format!(
                "`crawl-delay` must be a finite non-negative number, got {}",
                delay
            )));
        }
    }

    let clean_param = match &rule.clean_param {
        Some(entries) => {
            let entries = entries.to_vec();
            for entry in &entries {
                let chars = entry.chars().count();
                if chars > CLEAN_PARAM_MAX_CHARS {
                    return Err(Rejection::CleanParamTooLong(chars));
                }
            }
            entries
        }
        None => Vec::new(),
    };

    Ok(Policy {
        user_agents,
        allow: rule.allow.as_ref().map(|values| values.to_vec()),
        disallow: rule.disallow.as_ref().map(|values| values.to_vec()),
        clean_param,
        crawl_delay: rule.crawl_delay,
    })
}

/// Checks a hostname against DNS grammar
///
/// Deliberately permissive, matching the character class `[a-zA-Z0-9-.]`
/// with a total length of at most 253 after stripping one trailing dot, and
/// per-label checks: 1-63 characters, no leading or trailing hyphen. An
/// empty label (consecutive dots) fails the per-label check.
pub fn is_valid_hostname(value: &str) -> bool {
    if value.is_empty() || value.len() > 254 {
        return false;
    }

    if !value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
    {
        return false;
    }

    let value = value.strip_suffix('.').unwrap_or(value);
    if value.len() > 253 {
        return false;
    }

    value.split('.').all(|label| {
        !label.is_empty()
            && label.len() < 64
            && !label.starts_with('-')
            && !label.ends_with('-')
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::StringOrList;

    fn rule(user_agent: &str) -> PolicyRule {
        PolicyRule {
            user_agent: StringOrList::One(user_agent.to_string()),
            allow: None,
            disallow: None,
            clean_param: None,
            crawl_delay: None,
        }
    }

    #[test]
    fn test_missing_site_rejected() {
        let result = validate(None, &RobotsOptions::default());
        assert_eq!(result.unwrap_err(), Rejection::MissingSite);

        let result = validate(Some(""), &RobotsOptions::default());
        assert_eq!(result.unwrap_err(), Rejection::MissingSite);
    }

    #[test]
    fn test_missing_site_short_circuits() {
        // Other options are bad too, but the site check runs first.
        let options = RobotsOptions {
            host: Some("bad_host!".to_string()),
            sitemap: Some(SitemapOption::Single("not a url".to_string())),
            policy: Some(vec![]),
        };
        let result = validate(None, &options);
        assert_eq!(result.unwrap_err(), Rejection::MissingSite);
    }

    #[test]
    fn test_defaults_applied() {
        let config = validate(Some("https://example.com"), &RobotsOptions::default()).unwrap();

        assert_eq!(config.policies, vec![Policy::allow_all()]);
        assert_eq!(config.sitemaps, vec!["https://example.com/sitemap.xml"]);
        assert_eq!(config.host, None);
    }

    #[test]
    fn test_derived_sitemap_single_trailing_slash() {
        assert_eq!(
            derived_sitemap("https://example.com"),
            "https://example.com/sitemap.xml"
        );
        assert_eq!(
            derived_sitemap("https://example.com/"),
            "https://example.com/sitemap.xml"
        );
    }

    #[test]
    fn test_sitemap_false_suppresses_entries() {
        let options = RobotsOptions {
            sitemap: Some(SitemapOption::Toggle(false)),
            ..Default::default()
        };
        let config = validate(Some("https://example.com"), &options).unwrap();
        assert!(config.sitemaps.is_empty());
    }

    #[test]
    fn test_sitemap_list_kept_verbatim() {
        let options = RobotsOptions {
            sitemap: Some(SitemapOption::Many(vec![
                "https://example.com/a.xml".to_string(),
                "https://example.com/b.xml".to_string(),
            ])),
            ..Default::default()
        };
        let config = validate(Some("https://example.com"), &options).unwrap();
        assert_eq!(
            config.sitemaps,
            vec!["https://example.com/a.xml", "https://example.com/b.xml"]
        );
    }

    #[test]
    fn test_sitemap_relative_url_rejected() {
        let options = RobotsOptions {
            sitemap: Some(SitemapOption::Single("/sitemap.xml".to_string())),
            ..Default::default()
        };
        let result = validate(Some("https://example.com"), &options);
        assert!(matches!(result.unwrap_err(), Rejection::InvalidSitemap(_)));
    }

    #[test]
    fn test_sitemap_list_rejects_on_first_bad_element() {
        let options = RobotsOptions {
            sitemap: Some(SitemapOption::Many(vec![
                "https://example.com/a.xml".to_string(),
                "not a url".to_string(),
            ])),
            ..Default::default()
        };
        let result = validate(Some("https://example.com"), &options);
        assert!(matches!(result.unwrap_err(), Rejection::InvalidSitemap(_)));
    }

    #[test]
    fn test_host_accepted() {
        let options = RobotsOptions {
            host: Some("example.com".to_string()),
            ..Default::default()
        };
        let config = validate(Some("https://example.com"), &options).unwrap();
        assert_eq!(config.host.as_deref(), Some("example.com"));
    }

    #[test]
    fn test_host_rejected() {
        let options = RobotsOptions {
            host: Some("bad_host!".to_string()),
            ..Default::default()
        };
        let result = validate(Some("https://example.com"), &options);
        assert_eq!(
            result.unwrap_err(),
            Rejection::InvalidHost("bad_host!".to_string())
        );
    }

    #[test]
    fn test_empty_host_is_no_host() {
        let options = RobotsOptions {
            host: Some(String::new()),
            ..Default::default()
        };
        let config = validate(Some("https://example.com"), &options).unwrap();
        assert_eq!(config.host, None);
    }

    #[test]
    fn test_empty_policy_list_rejected() {
        let options = RobotsOptions {
            policy: Some(vec![]),
            ..Default::default()
        };
        let result = validate(Some("https://example.com"), &options);
        assert!(matches!(result.unwrap_err(), Rejection::InvalidPolicy(_)));
    }

    #[test]
    fn test_empty_user_agent_rejected() {
        let options = RobotsOptions {
            policy: Some(vec![rule("")]),
            ..Default::default()
        };
        let result = validate(Some("https://example.com"), &options);
        assert!(matches!(result.unwrap_err(), Rejection::InvalidPolicy(_)));
    }

    #[test]
    fn test_empty_user_agent_list_rejected() {
        let mut bad = rule("*");
        bad.user_agent = StringOrList::Many(vec![]);
        let options = RobotsOptions {
            policy: Some(vec![bad]),
            ..Default::default()
        };
        let result = validate(Some("https://example.com"), &options);
        assert!(matches!(result.unwrap_err(), Rejection::InvalidPolicy(_)));
    }

    #[test]
    fn test_bad_crawl_delay_rejected() {
        for delay in [f64::NAN, f64::INFINITY, -1.0] {
            let mut bad = rule("*");
            bad.crawl_delay = Some(delay);
            let options = RobotsOptions {
                policy: Some(vec![bad]),
                ..Default::default()
            };
            let result = validate(Some("https://example.com"), &options);
            assert!(matches!(result.unwrap_err(), Rejection::InvalidPolicy(_)));
        }
    }

    #[test]
    fn test_one_bad_rule_rejects_whole_policy() {
        let options = RobotsOptions {
            policy: Some(vec![rule("Googlebot"), rule("")]),
            ..Default::default()
        };
        let result = validate(Some("https://example.com"), &options);
        assert!(matches!(result.unwrap_err(), Rejection::InvalidPolicy(_)));
    }

    #[test]
    fn test_clean_param_length_boundary() {
        let mut ok = rule("*");
        ok.clean_param = Some(StringOrList::One("s".repeat(500)));
        let options = RobotsOptions {
            policy: Some(vec![ok]),
            ..Default::default()
        };
        assert!(validate(Some("https://example.com"), &options).is_ok());

        let mut too_long = rule("*");
        too_long.clean_param = Some(StringOrList::One("s".repeat(501)));
        let options = RobotsOptions {
            policy: Some(vec![too_long]),
            ..Default::default()
        };
        let result = validate(Some("https://example.com"), &options);
        assert_eq!(result.unwrap_err(), Rejection::CleanParamTooLong(501));
    }

    #[test]
    fn test_clean_param_list_checked_per_element() {
        let mut bad = rule("*");
        bad.clean_param = Some(StringOrList::Many(vec![
            "ref /articles/".to_string(),
            "x".repeat(501),
        ]));
        let options = RobotsOptions {
            policy: Some(vec![bad]),
            ..Default::default()
        };
        let result = validate(Some("https://example.com"), &options);
        assert_eq!(result.unwrap_err(), Rejection::CleanParamTooLong(501));
    }

    #[test]
    fn test_valid_hostnames() {
        assert!(is_valid_hostname("example.com"));
        assert!(is_valid_hostname("sub.example.com"));
        assert!(is_valid_hostname("example.com."));
        assert!(is_valid_hostname("localhost"));
        assert!(is_valid_hostname("xn--e1afmkfd.xn--p1ai"));
    }

    #[test]
    fn test_invalid_hostnames() {
        assert!(!is_valid_hostname(""));
        assert!(!is_valid_hostname("bad_host!"));
        assert!(!is_valid_hostname("exa mple.com"));
        assert!(!is_valid_hostname("-example.com"));
        assert!(!is_valid_hostname("example-.com"));
        assert!(!is_valid_hostname("example..com"));
        assert!(!is_valid_hostname(&"a".repeat(254)));
        assert!(!is_valid_hostname(&format!("{}.com", "a".repeat(64))));
    }

    #[test]
    fn test_hostname_length_boundary() {
        // 253 characters of dotted labels is the ceiling.
        let label = "a".repeat(63);
        let host = format!("{0}.{0}.{0}.{1}", label, "a".repeat(61));
        assert_eq!(host.len(), 253);
        assert!(is_valid_hostname(&host));
        assert!(is_valid_hostname(&format!("{}.", host)));
        assert!(!is_valid_hostname(&format!("a{}", host)));
    }
}
