//! Win32 Decoding
//!
//! `file://` URIs to drive-letter and UNC paths with backslash separators.

use crate::components::UriParts;
use crate::decode::{decoded_into_string, percent_decode};

/// Convert an LSP `file://` URI into a Windows path.
///
/// - `file:///C:/dir/x` and `file:///c%3A/dir/x` become `C:\dir\x` (the drive
///   letter keeps its case).
/// - `file://server/share/x` becomes `\\server\share\x`.
/// - Anything else has its slashes turned into backslashes.
///
/// An empty path yields `\`. Input that is not a `file:` URI is
/// percent-decoded and slash-converted but otherwise left alone.
///
/// # Examples
/// ```
/// use lsp_uri::parse_file_from_lsp_uri_win32;
///
/// assert_eq!(parse_file_from_lsp_uri_win32("file:///C:/Users/x"), r"C:\Users\x");
/// assert_eq!(
///     parse_file_from_lsp_uri_win32("file://server/share/file.txt"),
///     r"\\server\share\file.txt"
/// );
/// ```
pub fn parse_file_from_lsp_uri_win32(uri: &str) -> String {
    tracing::trace!(uri, "Decoding Win32 file URI");
    decoded_into_string(decode(&UriParts::split(uri)))
}

pub(crate) fn decode(parts: &UriParts<'_>) -> Vec<u8> {
    let path = percent_decode(parts.path);

    let mut out = if !parts.is_file() {
        path
    } else if let Some(drive_path) = strip_drive_slash(&path) {
        drive_path.to_vec()
    } else if let Some(host) = parts.remote_host() {
        let host = percent_decode(host);
        let mut out = Vec::with_capacity(host.len() + path.len() + 2);
        // `file://C:/x` is a common malformation of `file:///C:/x`.
        if !is_drive(&host) {
            out.extend_from_slice(b"//");
        }
        out.extend_from_slice(&host);
        out.extend_from_slice(&path);
        out
    } else {
        path
    };

    if out.is_empty() && parts.is_file() {
        out.push(b'/');
    }
    for byte in &mut out {
        if *byte == b'/' {
            *byte = b'\\';
        }
    }
    out
}

/// `/C:...` to `C:...`; `C:...` is accepted without the slash too.
fn strip_drive_slash(path: &[u8]) -> Option<&[u8]> {
    match path {
        [b'/', rest @ ..] if starts_with_drive(rest) => Some(rest),
        _ if starts_with_drive(path) => Some(path),
        _ => None,
    }
}

fn starts_with_drive(path: &[u8]) -> bool {
    matches!(path, [letter, b':', ..] if letter.is_ascii_alphabetic())
}

fn is_drive(host: &[u8]) -> bool {
    matches!(host, [letter, b':'] if letter.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drive_letter_path() {
        assert_eq!(parse_file_from_lsp_uri_win32("file:///C:/Users/x"), r"C:\Users\x");
        assert_eq!(parse_file_from_lsp_uri_win32("file:///d:/src/main.js"), r"d:\src\main.js");
    }

    #[test]
    fn test_encoded_colon_after_drive_letter() {
        assert_eq!(
            parse_file_from_lsp_uri_win32("file:///c%3A/Users/me/My%20Docs/a.js"),
            r"c:\Users\me\My Docs\a.js"
        );
    }

    #[test]
    fn test_bare_drive() {
        assert_eq!(parse_file_from_lsp_uri_win32("file:///C:"), "C:");
        assert_eq!(parse_file_from_lsp_uri_win32("file:///C:/"), r"C:\");
    }

    #[test]
    fn test_drive_without_slash() {
        assert_eq!(parse_file_from_lsp_uri_win32("file:C:/x"), r"C:\x");
    }

    #[test]
    fn test_drive_in_authority() {
        assert_eq!(parse_file_from_lsp_uri_win32("file://C:/x/y"), r"C:\x\y");
    }

    #[test]
    fn test_unc_path() {
        assert_eq!(
            parse_file_from_lsp_uri_win32("file://server/share/file.txt"),
            r"\\server\share\file.txt"
        );
        assert_eq!(parse_file_from_lsp_uri_win32("file://server"), r"\\server");
    }

    #[test]
    fn test_unc_with_encoded_host_and_path() {
        assert_eq!(
            parse_file_from_lsp_uri_win32("file://my%2Dserver/my%20share/a.txt"),
            r"\\my-server\my share\a.txt"
        );
    }

    #[test]
    fn test_four_slash_unc() {
        assert_eq!(
            parse_file_from_lsp_uri_win32("file:////server/share/x"),
            r"\\server\share\x"
        );
    }

    #[test]
    fn test_drive_wins_over_host() {
        assert_eq!(parse_file_from_lsp_uri_win32("file://server/C:/x"), r"C:\x");
    }

    #[test]
    fn test_localhost_is_local() {
        assert_eq!(parse_file_from_lsp_uri_win32("file://localhost/C:/x"), r"C:\x");
        assert_eq!(parse_file_from_lsp_uri_win32("file://localhost/x"), r"\x");
    }

    #[test]
    fn test_no_drive_fallback() {
        assert_eq!(parse_file_from_lsp_uri_win32("file:///Users/x"), r"\Users\x");
    }

    #[test]
    fn test_encoded_slash_becomes_separator() {
        assert_eq!(parse_file_from_lsp_uri_win32("file:///C:/a%2Fb"), r"C:\a\b");
    }

    #[test]
    fn test_query_and_fragment_discarded() {
        assert_eq!(parse_file_from_lsp_uri_win32("file:///C:/a/b?x=1#frag"), r"C:\a\b");
    }

    #[test]
    fn test_empty_path_is_root() {
        assert_eq!(parse_file_from_lsp_uri_win32("file://"), r"\");
        assert_eq!(parse_file_from_lsp_uri_win32("file:///"), r"\");
    }

    #[test]
    fn test_malformed_escape() {
        assert_eq!(parse_file_from_lsp_uri_win32("file:///C:/a%b"), r"C:\a%b");
    }

    #[test]
    fn test_missing_scheme_is_a_literal_path() {
        assert_eq!(parse_file_from_lsp_uri_win32("C:/Users/x"), r"C:\Users\x");
        assert_eq!(parse_file_from_lsp_uri_win32(r"C:\already\native"), r"C:\already\native");
        assert_eq!(parse_file_from_lsp_uri_win32(""), "");
    }
}
