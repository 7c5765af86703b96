use std::fmt;

/// Comprehensive error types for linkscan operations
///
/// Network failures encountered while checking links are NOT errors at this
/// level; they are recorded as typed outcomes in the report. This type covers
/// contract and I/O failures only.
#[derive(Debug)]
pub enum LinkScanError {
    /// IO error (writing the report artifact, etc.)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// HTTP client construction error
    Http(reqwest::Error),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// Invalid argument error
    InvalidArgument(String),
}

impl fmt::Display for LinkScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkScanError::Io(err) => write!(f, "IO error: {err}"),
            LinkScanError::Config(msg) => write!(f, "Configuration error: {msg}"),
            LinkScanError::Http(err) => write!(f, "HTTP error: {err}"),
            LinkScanError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            LinkScanError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for LinkScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LinkScanError::Io(err) => Some(err),
            LinkScanError::Http(err) => Some(err),
            LinkScanError::TomlParsing(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LinkScanError {
    fn from(err: std::io::Error) -> Self {
        LinkScanError::Io(err)
    }
}

impl From<reqwest::Error> for LinkScanError {
    fn from(err: reqwest::Error) -> Self {
        LinkScanError::Http(err)
    }
}

impl From<toml::de::Error> for LinkScanError {
    fn from(err: toml::de::Error) -> Self {
        LinkScanError::TomlParsing(err)
    }
}

/// Type alias for Results using LinkScanError
pub type Result<T> = std::result::Result<T, LinkScanError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display() {
        let config_error = LinkScanError::Config("Invalid timeout".to_string());
        assert_eq!(
            format!("{config_error}"),
            "Configuration error: Invalid timeout"
        );

        let arg_error = LinkScanError::InvalidArgument("bad flag".to_string());
        assert_eq!(format!("{arg_error}"), "Invalid argument: bad flag");
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let linkscan_error = LinkScanError::from(io_error);

        match linkscan_error {
            LinkScanError::Io(_) => {} // Expected
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_error_from_toml() {
        let toml_error = toml::from_str::<toml::Value>("invalid toml [").unwrap_err();
        let linkscan_error = LinkScanError::from(toml_error);

        match linkscan_error {
            LinkScanError::TomlParsing(_) => {} // Expected
            _ => panic!("Expected TomlParsing variant"),
        }
    }

    #[test]
    fn test_error_source() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let linkscan_error = LinkScanError::Io(io_error);

        assert!(linkscan_error.source().is_some());

        let config_error = LinkScanError::Config("test".to_string());
        assert!(config_error.source().is_none());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LinkScanError>();
    }

    #[test]
    fn test_string_error_variants_display() {
        let errors = vec![
            LinkScanError::Config("Bad config".to_string()),
            LinkScanError::InvalidArgument("Bad arg".to_string()),
        ];

        for error in errors {
            let display_str = format!("{error}");
            assert!(!display_str.is_empty());
            assert!(display_str.contains(":"));
        }
    }

    #[test]
    fn test_result_type_alias() {
        let success: Result<i32> = Ok(42);
        let error: Result<i32> = Err(LinkScanError::Config("test".to_string()));

        assert!(success.is_ok());
        assert!(error.is_err());
    }
}
