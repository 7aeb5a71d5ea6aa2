//! Rendering module for Robotsmith
//!
//! Turns a validated [`RobotsConfig`](crate::config::RobotsConfig) into the
//! line-oriented `robots.txt` text body. Serialization is a pure function:
//! given the same configuration it always produces byte-identical output.

mod line;

pub use line::{escape_path, field_line, Directive};

use crate::config::{Policy, RobotsConfig};

/// Serializes a validated configuration into the `robots.txt` body
///
/// Policy blocks come first, in input order, separated by single blank
/// lines; `Sitemap` lines follow, then an optional `Host` line. Every
/// logical line ends with exactly one newline and there is no trailing
/// blank line.
pub fn serialize(config: &RobotsConfig) -> String {
    let mut out = String::new();

    for (index, policy) in config.policies.iter().enumerate() {
        if index != 0 {
            out.push('\n');
        }
        render_policy(&mut out, policy);
    }

    for sitemap in &config.sitemaps {
        out.push_str(&field_line(Directive::Sitemap, sitemap));
    }

    if let Some(host) = &config.host {
        out.push_str(&field_line(Directive::Host, host));
    }

    out
}

/// Renders one policy block in fixed directive order
fn render_policy(out: &mut String, policy: &Policy) {
    for agent in &policy.user_agents {
        out.push_str(&field_line(Directive::UserAgent, agent));
    }

    if let Some(patterns) = &policy.disallow {
        for pattern in patterns {
            out.push_str(&field_line(Directive::Disallow, pattern));
        }
    }

    if let Some(patterns) = &policy.allow {
        for pattern in patterns {
            out.push_str(&field_line(Directive::Allow, pattern));
        }
    }

    if let Some(delay) = policy.crawl_delay {
        out.push_str(&field_line(Directive::CrawlDelay, &format_delay(delay)));
    }

    for param in &policy.clean_param {
        out.push_str(&field_line(Directive::CleanParam, param));
    }
}

/// Formats a crawl delay: whole seconds without a decimal point, fractional
/// values in their decimal form
fn format_delay(delay: f64) -> String {
    // f64 Display already drops the ".0" on whole numbers.
    delay.to_string()
}
