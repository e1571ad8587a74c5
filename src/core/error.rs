use std::fmt;

/// Error types for siterel operations
#[derive(Debug)]
pub enum SiterelError {
    /// IO error (file read/write)
    Io(std::io::Error),

    /// File walking/ignore error
    FileWalking(ignore::Error),

    /// Repository root does not exist or is not a directory
    InvalidRoot(String),
}

impl fmt::Display for SiterelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiterelError::Io(err) => write!(f, "IO error: {err}"),
            SiterelError::FileWalking(err) => write!(f, "File walking error: {err}"),
            SiterelError::InvalidRoot(path) => write!(f, "Invalid root directory: {path}"),
        }
    }
}

impl std::error::Error for SiterelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SiterelError::Io(err) => Some(err),
            SiterelError::FileWalking(err) => Some(err),
            SiterelError::InvalidRoot(_) => None,
        }
    }
}

impl From<std::io::Error> for SiterelError {
    fn from(err: std::io::Error) -> Self {
        SiterelError::Io(err)
    }
}

impl From<ignore::Error> for SiterelError {
    fn from(err: ignore::Error) -> Self {
        SiterelError::FileWalking(err)
    }
}

/// Type alias for Results using SiterelError
pub type Result<T> = std::result::Result<T, SiterelError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display() {
        let root_error = SiterelError::InvalidRoot("/path/to/root".to_string());
        assert_eq!(
            format!("{root_error}"),
            "Invalid root directory: /path/to/root"
        );

        let io_error = SiterelError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert!(format!("{io_error}").starts_with("IO error:"));
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let siterel_error = SiterelError::from(io_error);

        match siterel_error {
            SiterelError::Io(_) => {}
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_error_from_ignore() {
        let ignore_error = ignore::WalkBuilder::new("/non/existent/path/12345")
            .build()
            .next()
            .unwrap()
            .unwrap_err();
        let siterel_error = SiterelError::from(ignore_error);

        match siterel_error {
            SiterelError::FileWalking(_) => {}
            _ => panic!("Expected FileWalking variant"),
        }
    }

    #[test]
    fn test_error_source() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let siterel_error = SiterelError::Io(io_error);
        assert!(siterel_error.source().is_some());

        let root_error = SiterelError::InvalidRoot("missing".to_string());
        assert!(root_error.source().is_none());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SiterelError>();
    }
}
