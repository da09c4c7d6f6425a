use std::string::FromUtf8Error;
use thiserror::Error;

/// Reasons [`try_parse_file_uri`](crate::try_parse_file_uri) refuses a URI.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UriError {
    #[error("URI has no scheme: expected 'file://'")]
    MissingScheme,

    #[error("Unsupported URI scheme: expected 'file', got '{0}'")]
    UnsupportedScheme(String),

    #[error("Malformed percent-escape at byte {offset}")]
    MalformedEscape { offset: usize },

    #[error("URI names remote host '{0}', which has no POSIX path")]
    RemoteHost(String),

    #[error("Decoded path is not valid UTF-8")]
    InvalidUtf8(#[from] FromUtf8Error),
}

/// A platform name that is neither POSIX nor Win32.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown platform '{0}': expected 'posix' or 'win32'")]
pub struct ParsePlatformError(pub String);
