//! POSIX Decoding
//!
//! `file://` URIs to forward-slash absolute paths.

use crate::components::UriParts;
use crate::decode::{decoded_into_string, percent_decode};

/// Convert an LSP `file://` URI into a POSIX path.
///
/// An empty or `localhost` authority is dropped. Any other authority is
/// folded into the path (`file://host/a` becomes `/host/a`), since language
/// servers only ever see local files. Input that is not a `file:` URI is
/// percent-decoded and otherwise returned as-is.
///
/// # Examples
/// ```
/// use lsp_uri::parse_file_from_lsp_uri_posix;
///
/// assert_eq!(parse_file_from_lsp_uri_posix("file:///home/me/a%20b.js"), "/home/me/a b.js");
/// assert_eq!(parse_file_from_lsp_uri_posix("file:///a/b?x=1#frag"), "/a/b");
/// ```
pub fn parse_file_from_lsp_uri_posix(uri: &str) -> String {
    tracing::trace!(uri, "Decoding POSIX file URI");
    decoded_into_string(decode(&UriParts::split(uri)))
}

pub(crate) fn decode(parts: &UriParts<'_>) -> Vec<u8> {
    if !parts.is_file() {
        return percent_decode(parts.path);
    }

    let mut out = Vec::with_capacity(parts.end);
    if let Some(host) = parts.remote_host() {
        tracing::debug!(host, "Folding URI authority into the POSIX path");
        out.push(b'/');
        out.extend_from_slice(&percent_decode(host));
    }

    let path = percent_decode(parts.path);
    if out.is_empty() && !path.starts_with(b"/") {
        out.push(b'/');
    }
    out.extend_from_slice(&path);
    out
}
