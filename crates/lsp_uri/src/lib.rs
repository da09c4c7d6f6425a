//! LSP File URIs
//!
//! Converts the `file://` URIs that language clients use to identify
//! documents into filesystem paths, in either POSIX or Windows syntax.
//!
//! The lenient functions never fail: a missing scheme, a truncated `%`
//! escape or an unexpected host all produce a deterministic best-effort
//! path. [`try_parse_file_uri`] rejects those inputs instead.
//!
//! Nothing here touches the filesystem. Paths are neither checked for
//! existence nor canonicalized.

mod components;
mod decode;
mod error;
mod native;
mod path_utils;
mod platform;
mod posix;
mod strict;
mod win32;

pub use decode::{find_malformed_escape, percent_decode, percent_decode_lossy};
pub use error::{ParsePlatformError, UriError};
pub use native::{file_uri_to_path, parse_document_uri};
pub use path_utils::{path_to_lsp_uri, path_to_lsp_uri_posix, path_to_lsp_uri_win32};
pub use platform::Platform;
pub use posix::parse_file_from_lsp_uri_posix;
pub use strict::try_parse_file_uri;
pub use win32::parse_file_from_lsp_uri_win32;

/// Convert an LSP `file://` URI into a path for the platform this crate was
/// compiled for: Win32 on Windows, POSIX everywhere else.
pub fn parse_file_from_lsp_uri(uri: &str) -> String {
    Platform::native().parse_file_uri(uri)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(not(windows))]
    fn test_dispatches_to_posix() {
        assert_eq!(parse_file_from_lsp_uri("file:///a/b/c"), "/a/b/c");
        assert_eq!(parse_file_from_lsp_uri("file://server/share"), "/server/share");
    }

    #[test]
    #[cfg(windows)]
    fn test_dispatches_to_win32() {
        assert_eq!(parse_file_from_lsp_uri("file:///C:/Users/x"), r"C:\Users\x");
        assert_eq!(parse_file_from_lsp_uri("file://server/share"), r"\\server\share");
    }
}
