//! Strict Decoding
//!
//! Same decoders as the lenient entry points, but every input the lenient
//! path would have guessed at is rejected with a [`UriError`] instead.

use crate::components::{Scheme, UriParts};
use crate::decode::find_malformed_escape;
use crate::error::UriError;
use crate::platform::Platform;

/// Decode `uri` for `platform`, rejecting anything that is not a clean
/// `file:` URI.
///
/// On success the result is identical to [`Platform::parse_file_uri`].
///
/// # Errors
/// Returns error if:
/// - The URI has no scheme, or a scheme other than `file`
/// - A `%` in the authority or path is not followed by two hex digits
/// - The platform is POSIX and the authority names a remote host
/// - The decoded bytes are not UTF-8
pub fn try_parse_file_uri(uri: &str, platform: Platform) -> Result<String, UriError> {
    let parts = UriParts::split(uri);

    match parts.scheme {
        Scheme::File => {}
        Scheme::Other(scheme) => return Err(UriError::UnsupportedScheme(scheme.to_owned())),
        Scheme::Missing => return Err(UriError::MissingScheme),
    }

    if let Some(offset) = find_malformed_escape(&uri[..parts.end]) {
        return Err(UriError::MalformedEscape { offset });
    }

    if platform == Platform::Posix {
        if let Some(host) = parts.remote_host() {
            return Err(UriError::RemoteHost(crate::percent_decode_lossy(host)));
        }
    }

    Ok(String::from_utf8(platform.decode_bytes(&parts))?)
}
