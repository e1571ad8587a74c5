use std::path::{Path, PathBuf};

use crate::core::constants::policy;

/// Rewrite policy for a single run: the repository root anchoring the walk
/// and the allow-listed root prefixes.
///
/// Passed explicitly into [`crate::Walker`] and [`crate::Rewriter`] at
/// construction so tests can point at an isolated temporary tree with a
/// custom prefix set.
#[derive(Debug, Clone)]
pub struct RewriteConfig {
    root: PathBuf,
    allowed_roots: Vec<String>,
}

impl RewriteConfig {
    /// Config with the default allow-list from [`policy::ALLOWED_ROOTS`].
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        let allowed_roots = policy::ALLOWED_ROOTS.iter().map(|s| s.to_string()).collect();
        Self::with_allowed_roots(root, allowed_roots)
    }

    /// Config with a custom allow-list.
    pub fn with_allowed_roots<P: Into<PathBuf>>(root: P, allowed_roots: Vec<String>) -> Self {
        RewriteConfig {
            root: root.into(),
            allowed_roots,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// True iff `value` is an absolute repo-rooted URL eligible for
    /// rewriting: it starts with `/` and, after stripping leading slashes,
    /// starts with one of the allow-listed prefixes.
    pub fn is_local_abs(&self, value: &str) -> bool {
        if !value.starts_with('/') {
            return false;
        }
        let path = value.trim_start_matches('/');
        self.allowed_roots
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
    }
}
