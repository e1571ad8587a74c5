/// Application-wide constants to avoid magic values throughout the codebase.

/// Rewrite eligibility policy
pub mod policy {
    /// Root-relative path prefixes (and exact top-level file names) whose
    /// absolute URLs are rewritten. Anything outside this set is left as an
    /// absolute reference.
    pub const ALLOWED_ROOTS: [&str; 8] = [
        "content/",
        "modules/",
        "misc/",
        "sites/",
        "files/",
        "index.html",
        "home.html",
        "calendars.html",
    ];
}

/// File type constants
pub mod files {
    /// Extensions dispatched to the HTML rewrite path (attributes + CSS urls)
    pub const HTML_EXTENSIONS: [&str; 2] = ["html", "htm"];

    /// Extensions dispatched to the CSS-only rewrite path
    pub const CSS_EXTENSIONS: [&str; 1] = ["css"];
}
