use std::fmt;

/// Why a URL path could not be relativized. The caller is expected to keep
/// the original absolute URL when it sees one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelativizeError {
    /// Input did not begin with `/`
    NotRootRelative,

    /// `..` segments in the URL path climb above the repository root
    EscapesRoot,
}

impl fmt::Display for RelativizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelativizeError::NotRootRelative => write!(f, "URL is not root-relative"),
            RelativizeError::EscapesRoot => write!(f, "URL path escapes the repository root"),
        }
    }
}

impl std::error::Error for RelativizeError {}

/// Convert an absolute repo-rooted URL (`/...`) into a path relative to
/// `from`, a root-relative file path using `/` separators. The base for
/// relativization is the *directory* containing `from`, matching standard
/// link-resolution semantics. Query and fragment are preserved verbatim;
/// the result never carries a scheme or host.
///
/// Pure string computation, independent of the host platform and filesystem.
pub fn relativize(from: &str, abs_url: &str) -> Result<String, RelativizeError> {
    // urlsplit order: fragment after the first `#`, query between `?` and `#`
    let (rest, fragment) = split_off(abs_url, '#');
    let (path, query) = split_off(rest, '?');

    if !path.starts_with('/') {
        return Err(RelativizeError::NotRootRelative);
    }
    let target = path.trim_start_matches('/');

    let base = segments(parent_dir(from))?;
    let target_segments = segments(target)?;

    let common = base
        .iter()
        .zip(target_segments.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<&str> = Vec::with_capacity(base.len() - common + target_segments.len() - common);
    for _ in common..base.len() {
        parts.push("..");
    }
    parts.extend(&target_segments[common..]);

    let rel = if parts.is_empty() {
        // Target is the base directory itself; use its file name so the
        // result resolves to the target rather than to `.`.
        match target.rsplit('/').next() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => ".".to_string(),
        }
    } else {
        parts.join("/")
    };

    let mut result = rel;
    if !query.is_empty() {
        result.push('?');
        result.push_str(query);
    }
    if !fragment.is_empty() {
        result.push('#');
        result.push_str(fragment);
    }
    Ok(result)
}

/// Split at the first occurrence of `delim`; the delimiter itself is dropped.
fn split_off(s: &str, delim: char) -> (&str, &str) {
    match s.split_once(delim) {
        Some((head, tail)) => (head, tail),
        None => (s, ""),
    }
}

/// Directory portion of a root-relative file path (empty for top-level files).
fn parent_dir(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[..idx],
        None => "",
    }
}

/// Normalized path segments: empty and `.` segments dropped, `..` resolved.
fn segments(path: &str) -> Result<Vec<&str>, RelativizeError> {
    let mut result = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if result.pop().is_none() {
                    return Err(RelativizeError::EscapesRoot);
                }
            }
            _ => result.push(segment),
        }
    }
    Ok(result)
}
