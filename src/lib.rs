//! siterel rewrites absolute, repo-rooted URLs found in HTML attributes and
//! CSS `url()` references into paths relative to the referencing file, so a
//! static site tree can be served from any base path or opened straight from
//! the filesystem without a web server.
//!
//! One pass over the tree, in place: `.html`/`.htm` files get the attribute
//! pattern plus the CSS `url()` pattern, `.css` files the `url()` pattern
//! only. Files are written back only when their content actually changed.

pub mod config;
pub mod core;
pub mod logging;
pub mod relativize;
pub mod rewrite;
pub mod walk;

pub use crate::config::RewriteConfig;
pub use crate::core::error::{Result, SiterelError};
pub use crate::relativize::{RelativizeError, relativize};
pub use crate::rewrite::Rewriter;
pub use crate::walk::Walker;
