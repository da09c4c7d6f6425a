//! Native Paths
//!
//! Entry points for servers that want a path for the machine they run on,
//! either as a `PathBuf` or straight from an LSP document identifier.

use std::path::PathBuf;

use crate::components::UriParts;
use crate::platform::Platform;

/// Decode a typed LSP URI (as found in `TextDocumentIdentifier::uri`) for
/// the running platform.
pub fn parse_document_uri(uri: &lsp_types::Uri) -> String {
    crate::parse_file_from_lsp_uri(uri.as_str())
}

/// Decode `uri` into a native [`PathBuf`].
///
/// On Unix the decoded bytes become the path verbatim, so file names that
/// are not UTF-8 survive. Elsewhere invalid sequences are replaced with
/// U+FFFD.
pub fn file_uri_to_path(uri: &str) -> PathBuf {
    let bytes = Platform::native().decode_bytes(&UriParts::split(uri));
    bytes_to_path(bytes)
}

#[cfg(unix)]
fn bytes_to_path(bytes: Vec<u8>) -> PathBuf {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    PathBuf::from(OsString::from_vec(bytes))
}

#[cfg(not(unix))]
fn bytes_to_path(bytes: Vec<u8>) -> PathBuf {
    PathBuf::from(crate::decode::decoded_into_string(bytes))
}
