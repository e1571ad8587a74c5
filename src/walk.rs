use std::fs;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use log::debug;

use crate::config::RewriteConfig;
use crate::core::constants::files;
use crate::core::error::{Result, SiterelError};
use crate::rewrite::Rewriter;

enum FileKind {
    Html,
    Css,
}

/// Walks every regular file under the repository root and rewrites eligible
/// HTML and CSS files in place.
///
/// Files are processed independently, in no particular order; the only
/// aggregate is the changed-file count. I/O errors abort the run.
pub struct Walker {
    root: PathBuf,
    rewriter: Rewriter,
}

impl Walker {
    pub fn new(config: RewriteConfig) -> Self {
        Walker {
            root: config.root().to_path_buf(),
            rewriter: Rewriter::new(config),
        }
    }

    /// Single stateless pass over the tree. Returns the number of files
    /// whose content actually changed and was written back.
    pub fn run(&self) -> Result<usize> {
        if !self.root.is_dir() {
            return Err(SiterelError::InvalidRoot(self.root.display().to_string()));
        }

        let mut builder = WalkBuilder::new(&self.root);
        // Visit everything: no gitignore or hidden-file filtering
        builder.standard_filters(false);

        let mut changed = 0;
        for entry in builder.build() {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(kind) = file_kind(path) else {
                // Other extensions are never opened
                continue;
            };
            if self.process_file(path, kind)? {
                changed += 1;
            }
        }
        Ok(changed)
    }

    fn process_file(&self, path: &Path, kind: FileKind) -> Result<bool> {
        let from = root_relative(&self.root, path);

        // Lenient decoding: malformed byte sequences are tolerated, and the
        // changed check compares against the decoded original so a lossily
        // decoded file with no matches stays untouched on disk.
        let bytes = fs::read(path)?;
        let original = String::from_utf8_lossy(&bytes);

        let rewritten = match kind {
            FileKind::Html => self.rewriter.rewrite_html(&original, &from),
            FileKind::Css => self.rewriter.rewrite_css(&original, &from),
        };

        if rewritten != original.as_ref() {
            debug!("rewriting {from}");
            fs::write(path, rewritten)?;
            return Ok(true);
        }
        debug!("unchanged {from}");
        Ok(false)
    }
}

/// Dispatch by extension, case-insensitively. `None` means the file is
/// ignored entirely (not read, not matched).
fn file_kind(path: &Path) -> Option<FileKind> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    if files::HTML_EXTENSIONS.contains(&ext.as_str()) {
        Some(FileKind::Html)
    } else if files::CSS_EXTENSIONS.contains(&ext.as_str()) {
        Some(FileKind::Css)
    } else {
        None
    }
}

/// Root-relative path with `/` separators regardless of platform, the form
/// the relativizer expects.
fn root_relative(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    parts.join("/")
}
