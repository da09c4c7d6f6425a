//! Path Utilities
//!
//! The reverse direction: turning paths into `file://` URIs that the
//! decoders in this crate map back to the same path.

use std::path::Path;

/// Convert a file path to an LSP-compatible file:// URI
///
/// Handles platform-specific path separators and drive letters correctly.
///
/// # Arguments
/// * `path` - The file path to convert
///
/// # Returns
/// A file:// URI string suitable for LSP communication
///
/// # Examples
/// ```ignore
/// // Windows: C:\Users\file.rs -> file:///C:/Users/file.rs
/// // Unix: /home/user/file.rs -> file:///home/user/file.rs
/// let uri = path_to_lsp_uri(&PathBuf::from("C:\\Users\\file.rs"));
/// ```
pub fn path_to_lsp_uri(path: &Path) -> String {
    crate::Platform::native().path_to_uri(&path.to_string_lossy())
}

/// Encode a POSIX path. Relative paths are anchored at `/`.
pub fn path_to_lsp_uri_posix(path: &str) -> String {
    let mut uri = String::with_capacity(path.len() + 8);
    uri.push_str("file://");
    if !path.starts_with('/') {
        uri.push('/');
    }
    push_segments(&mut uri, path);
    uri
}

/// Encode a Windows path. Both `\` and `/` count as separators.
///
/// `C:\x` becomes `file:///C:/x`, `\\server\share\x` becomes
/// `file://server/share/x`, and anything else is anchored at `/`. Verbatim
/// prefixes (`\\?\`, `\\?\UNC\`) are dropped. A UNC host the decoder
/// would read as local (`localhost`, empty, or drive-shaped) is written in the
/// four-slash form `file:////host/...` so that it survives decoding.
pub fn path_to_lsp_uri_win32(path: &str) -> String {
    let path = strip_verbatim_prefix(&path.replace('\\', "/"));
    let mut uri = String::with_capacity(path.len() + 8);
    uri.push_str("file://");

    if let Some(unc) = path.strip_prefix("//") {
        let (host, rest) = match unc.find('/') {
            Some(slash) => unc.split_at(slash),
            None => (unc, ""),
        };
        if host_reads_as_local(host) {
            uri.push_str("//");
        }
        uri.push_str(&urlencoding::encode(host));
        push_segments(&mut uri, rest);
    } else if is_drive_path(&path) {
        // The colon must stay literal for editors to recognize the drive.
        uri.push('/');
        uri.push_str(&path[..2]);
        push_segments(&mut uri, &path[2..]);
    } else {
        if !path.starts_with('/') {
            uri.push('/');
        }
        push_segments(&mut uri, &path);
    }
    uri
}

/// `//?/UNC/host/x` to `//host/x`, `//?/C:/x` to `C:/x`.
fn strip_verbatim_prefix(path: &str) -> String {
    if let Some(unc) = path.strip_prefix("//?/UNC/") {
        format!("//{unc}")
    } else if let Some(local) = path.strip_prefix("//?/") {
        local.to_owned()
    } else {
        path.to_owned()
    }
}

fn host_reads_as_local(host: &str) -> bool {
    host.is_empty()
        || host.eq_ignore_ascii_case("localhost")
        || matches!(host.as_bytes(), [letter, b':'] if letter.is_ascii_alphabetic())
}

fn is_drive_path(path: &str) -> bool {
    matches!(path.as_bytes(), [letter, b':', ..] if letter.is_ascii_alphabetic())
}

fn push_segments(uri: &mut String, path: &str) {
    for (i, segment) in path.split('/').enumerate() {
        if i > 0 {
            uri.push('/');
        }
        uri.push_str(&urlencoding::encode(segment));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse_file_from_lsp_uri_posix, parse_file_from_lsp_uri_win32};

    #[test]
    fn test_windows_path() {
        assert_eq!(
            path_to_lsp_uri_win32("C:\\Users\\test\\file.rs"),
            "file:///C:/Users/test/file.rs"
        );
    }

    #[test]
    fn test_unix_path() {
        assert_eq!(path_to_lsp_uri_posix("/home/user/file.rs"), "file:///home/user/file.rs");
    }

    #[test]
    fn test_special_characters_are_escaped() {
        assert_eq!(
            path_to_lsp_uri_posix("/tmp/my dir/100%/a#b?.js"),
            "file:///tmp/my%20dir/100%25/a%23b%3F.js"
        );
    }

    #[test]
    fn test_unc_path() {
        assert_eq!(
            path_to_lsp_uri_win32(r"\\server\share\file.txt"),
            "file://server/share/file.txt"
        );
        assert_eq!(path_to_lsp_uri_win32(r"\\server"), "file://server");
    }

    #[test]
    fn test_local_unc_host_uses_four_slashes() {
        let path = r"\\localhost\c$\x.js";
        let uri = path_to_lsp_uri_win32(path);
        assert_eq!(uri, "file:////localhost/c%24/x.js");
        assert_eq!(parse_file_from_lsp_uri_win32(&uri), path);

        let path = r"\\LocalHost\share";
        assert_eq!(parse_file_from_lsp_uri_win32(&path_to_lsp_uri_win32(path)), path);
    }

    #[test]
    fn test_verbatim_prefix_is_dropped() {
        assert_eq!(path_to_lsp_uri_win32(r"\\?\C:\x.js"), "file:///C:/x.js");
        assert_eq!(
            parse_file_from_lsp_uri_win32(&path_to_lsp_uri_win32(r"\\?\C:\x.js")),
            r"C:\x.js"
        );
        assert_eq!(
            path_to_lsp_uri_win32(r"\\?\UNC\server\share\x.js"),
            "file://server/share/x.js"
        );
    }

    #[test]
    fn test_relative_paths_are_anchored() {
        assert_eq!(path_to_lsp_uri_posix("src/main.rs"), "file:///src/main.rs");
        assert_eq!(path_to_lsp_uri_win32(r"src\main.rs"), "file:///src/main.rs");
    }

    #[test]
    fn test_round_trip() {
        let posix = "/home/user/café/[x] 1.js";
        assert_eq!(parse_file_from_lsp_uri_posix(&path_to_lsp_uri_posix(posix)), posix);

        let win = r"D:\Projects\my app\index.js";
        assert_eq!(parse_file_from_lsp_uri_win32(&path_to_lsp_uri_win32(win)), win);

        let unc = r"\\nas\media\song #1.mp3";
        assert_eq!(parse_file_from_lsp_uri_win32(&path_to_lsp_uri_win32(unc)), unc);
    }

    #[test]
    #[cfg(not(windows))]
    fn test_native_path() {
        assert_eq!(path_to_lsp_uri(Path::new("/a b/c")), "file:///a%20b/c");
    }
}
