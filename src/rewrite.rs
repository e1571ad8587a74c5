use log::debug;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::config::RewriteConfig;
use crate::relativize::relativize;

// Attribute references: href="/...", src='/...' etc. The regex crate has no
// backreferences, so the two quote styles are alternation branches; each
// branch excludes only its own quote character from the value.
const ATTR_PATTERN: &str =
    r#"(?i)\b((?:href|src|data|background)\s*=\s*)(?:"(/[^"]*)"|'(/[^']*)')"#;

// CSS references: url(/...), url("/..."), url('/...'), with optional
// whitespace inside the parentheses. The value contains no `)` and no quote.
const CSS_URL_PATTERN: &str = r#"(?i)url\(\s*(?:"(/[^)'"]+)"|'(/[^)'"]+)'|(/[^)'"]+))\s*\)"#;

static ATTR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(ATTR_PATTERN).expect("Failed to compile attribute pattern"));

static CSS_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(CSS_URL_PATTERN).expect("Failed to compile CSS url() pattern"));

/// Rewrites eligible absolute URLs in file content into relative ones.
///
/// Matching is a plain text scan with the two patterns above, not a
/// structural HTML/CSS parse. Anything that fails to match is left
/// byte-identical; there is no "invalid input" outcome.
#[derive(Debug)]
pub struct Rewriter {
    config: RewriteConfig,
}

impl Rewriter {
    pub fn new(config: RewriteConfig) -> Self {
        Rewriter { config }
    }

    /// Rewrite an HTML file: attribute references plus CSS `url()`
    /// references. The `url()` pattern also hits `<style>` blocks and inline
    /// `style=` attributes since this is a text scan.
    pub fn rewrite_html(&self, content: &str, from: &str) -> String {
        let content = self.rewrite_attrs(content, from);
        self.rewrite_css_urls(&content, from)
    }

    /// Rewrite a CSS file: `url()` references only.
    pub fn rewrite_css(&self, content: &str, from: &str) -> String {
        self.rewrite_css_urls(content, from)
    }

    fn rewrite_attrs(&self, content: &str, from: &str) -> String {
        ATTR_RE
            .replace_all(content, |caps: &Captures| {
                let prefix = &caps[1];
                let (value, quote) = if let Some(value) = caps.get(2) {
                    (value.as_str(), '"')
                } else if let Some(value) = caps.get(3) {
                    (value.as_str(), '\'')
                } else {
                    unreachable!("attribute pattern always captures one quote branch")
                };

                if !self.config.is_local_abs(value) {
                    return caps[0].to_string();
                }
                let rewritten = self.relativize_or_keep(from, value);
                format!("{prefix}{quote}{rewritten}{quote}")
            })
            .into_owned()
    }

    fn rewrite_css_urls(&self, content: &str, from: &str) -> String {
        CSS_URL_RE
            .replace_all(content, |caps: &Captures| {
                let (value, quote) = if let Some(value) = caps.get(1) {
                    (value.as_str(), "\"")
                } else if let Some(value) = caps.get(2) {
                    (value.as_str(), "'")
                } else if let Some(value) = caps.get(3) {
                    (value.as_str(), "")
                } else {
                    unreachable!("CSS url() pattern always captures a value branch")
                };

                if !self.config.is_local_abs(value) {
                    return caps[0].to_string();
                }
                let rewritten = self.relativize_or_keep(from, value);
                format!("url({quote}{rewritten}{quote})")
            })
            .into_owned()
    }

    /// Fail-safe: an eligible value that cannot be relativized is kept as-is
    /// for that single match, and processing continues.
    fn relativize_or_keep(&self, from: &str, value: &str) -> String {
        match relativize(from, value) {
            Ok(rewritten) => rewritten,
            Err(err) => {
                debug!("keeping '{value}' in {from}: {err}");
                value.to_string()
            }
        }
    }
}
