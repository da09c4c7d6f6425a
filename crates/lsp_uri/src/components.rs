//! URI splitting
//!
//! Breaks a URI into scheme, authority and path before any decoding happens.
//! Query and fragment are cut off here so that escaped `%3F` and `%23` inside
//! file names survive as literal `?` and `#`.

use crate::decode::find_malformed_escape;

const FILE_SCHEME: &str = "file";

/// What the URI's scheme turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scheme<'a> {
    File,
    Other(&'a str),
    Missing,
}

/// Raw (still percent-encoded) pieces of a URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct UriParts<'a> {
    pub scheme: Scheme<'a>,
    /// `None` when the URI has no `//` after the scheme.
    pub authority: Option<&'a str>,
    pub path: &'a str,
    /// Byte offset one past the end of the path, before any query or fragment.
    pub end: usize,
}

impl<'a> UriParts<'a> {
    pub(crate) fn split(uri: &'a str) -> Self {
        let parts = match scheme_of(uri) {
            Some((scheme, rest)) if scheme.eq_ignore_ascii_case(FILE_SCHEME) => {
                Self::split_file(uri, rest)
            }
            Some((scheme, _)) => {
                tracing::debug!(scheme, "Not a file URI, treating the input as a path");
                Self::literal(uri, Scheme::Other(scheme))
            }
            None => {
                tracing::debug!("URI has no scheme, treating the input as a path");
                Self::literal(uri, Scheme::Missing)
            }
        };

        if let Some(offset) = find_malformed_escape(&uri[..parts.end]) {
            tracing::debug!(offset, "Malformed percent-escape kept literally");
        }

        parts
    }

    fn split_file(uri: &'a str, rest: &'a str) -> Self {
        let rest_start = uri.len() - rest.len();
        let (authority, path_start) = match rest.strip_prefix("//") {
            Some(after) => {
                let len = after.find(['/', '?', '#']).unwrap_or(after.len());
                (Some(&after[..len]), rest_start + 2 + len)
            }
            None => (None, rest_start),
        };

        let tail = &uri[path_start..];
        let path_len = tail.find(['?', '#']).unwrap_or(tail.len());

        Self {
            scheme: Scheme::File,
            authority,
            path: &tail[..path_len],
            end: path_start + path_len,
        }
    }

    fn literal(uri: &'a str, scheme: Scheme<'a>) -> Self {
        Self {
            scheme,
            authority: None,
            path: uri,
            end: uri.len(),
        }
    }

    pub(crate) fn is_file(&self) -> bool {
        self.scheme == Scheme::File
    }

    /// The authority if it names a machine other than this one.
    ///
    /// An empty authority and `localhost` (any case) both mean local.
    pub(crate) fn remote_host(&self) -> Option<&'a str> {
        self.authority
            .filter(|host| !host.is_empty() && !host.eq_ignore_ascii_case("localhost"))
    }
}

/// Split off a syntactically valid scheme (RFC 3986 §3.1).
///
/// Single-letter schemes are rejected: `C:/x` is a drive letter, not a URI.
fn scheme_of(uri: &str) -> Option<(&str, &str)> {
    let (scheme, rest) = uri.split_once(':')?;
    let mut chars = scheme.chars();
    let valid = scheme.len() > 1
        && chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid.then_some((scheme, rest))
}
