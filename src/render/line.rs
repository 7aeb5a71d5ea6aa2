use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::borrow::Cow;

/// Characters escaped in `Allow`/`Disallow` path values
///
/// Everything unsafe in a URI path is percent-encoded: spaces, controls,
/// quotes, brackets, and all non-ASCII bytes. Characters with meaning in a
/// URI (`/`, `?`, `&`, ...) pass through, and so does `%`, which keeps the
/// escaping idempotent for values that arrive already encoded.
const PATH_UNSAFE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'#')
    .remove(b'%');

/// The closed set of directives a generated `robots.txt` can contain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    UserAgent,
    Disallow,
    Allow,
    CrawlDelay,
    CleanParam,
    Sitemap,
    Host,
}

impl Directive {
    /// Field name in its hyphenated, capitalized wire form
    pub fn name(self) -> &'static str {
        match self {
            Directive::UserAgent => "User-agent",
            Directive::Disallow => "Disallow",
            Directive::Allow => "Allow",
            Directive::CrawlDelay => "Crawl-delay",
            Directive::CleanParam => "Clean-param",
            Directive::Sitemap => "Sitemap",
            Directive::Host => "Host",
        }
    }

    /// Whether values of this directive are URI paths that need escaping
    fn is_path_valued(self) -> bool {
        matches!(self, Directive::Allow | Directive::Disallow)
    }
}

/// Renders one logical `Name: value` line, newline included
///
/// An empty value yields the bare `Name:` form with no trailing space,
/// which for `Disallow` is the legal "disallow nothing" spelling.
pub fn field_line(directive: Directive, value: &str) -> String {
    let value = if directive.is_path_valued() {
        escape_path(value)
    } else {
        Cow::Borrowed(value)
    };

    if value.is_empty() {
        format!("{}:\n", directive.name())
    } else {
        format!("{}: {}\n", directive.name(), value)
    }
}

/// Percent-escapes characters unsafe in a URI path
pub fn escape_path(path: &str) -> Cow<'_, str> {
    utf8_percent_encode(path, PATH_UNSAFE).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_names() {
        assert_eq!(Directive::UserAgent.name(), "User-agent");
        assert_eq!(Directive::CrawlDelay.name(), "Crawl-delay");
        assert_eq!(Directive::CleanParam.name(), "Clean-param");
        assert_eq!(Directive::Sitemap.name(), "Sitemap");
    }

    #[test]
    fn test_field_line_with_value() {
        assert_eq!(field_line(Directive::UserAgent, "*"), "User-agent: *\n");
        assert_eq!(field_line(Directive::Host, "example.com"), "Host: example.com\n");
    }

    #[test]
    fn test_field_line_empty_value() {
        assert_eq!(field_line(Directive::Disallow, ""), "Disallow:\n");
    }

    #[test]
    fn test_spaces_escaped_in_paths() {
        assert_eq!(field_line(Directive::Disallow, "/a b"), "Disallow: /a%20b\n");
        assert_eq!(field_line(Directive::Allow, "/a b"), "Allow: /a%20b\n");
    }

    #[test]
    fn test_non_ascii_escaped_in_paths() {
        assert_eq!(escape_path("/café"), "/caf%C3%A9");
    }

    #[test]
    fn test_uri_characters_pass_through() {
        assert_eq!(escape_path("/search?q=a&page=2"), "/search?q=a&page=2");
        assert_eq!(escape_path("/~user/file.html"), "/~user/file.html");
    }

    #[test]
    fn test_escaping_is_idempotent() {
        let once = escape_path("/a b").to_string();
        let twice = escape_path(&once).to_string();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_host_values_not_escaped() {
        // Only Allow/Disallow carry paths; other values are taken as given.
        assert_eq!(
            field_line(Directive::CleanParam, "ref /some path/"),
            "Clean-param: ref /some path/\n"
        );
    }
}
