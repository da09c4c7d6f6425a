//! Percent-decoding
//!
//! Byte-level decoding of `%XX` escapes in URI components.

/// Decode every well-formed `%XX` escape in `input`.
///
/// Hex digits are case-insensitive. A `%` that is not followed by two hex
/// digits is copied through literally along with whatever follows it, so
/// `"a%b"` decodes to `"a%b"` and a trailing `"%4"` stays `"%4"`. Nothing is
/// read past the end of the input.
pub fn percent_decode(input: &str) -> Vec<u8> {
    urlencoding::decode_binary(input.as_bytes()).into_owned()
}

/// Decode `input` like [`percent_decode`] and return it as a string,
/// replacing byte sequences that are not UTF-8 with U+FFFD.
pub fn percent_decode_lossy(input: &str) -> String {
    decoded_into_string(percent_decode(input))
}

/// Byte offset of the first `%` in `input` that does not start a
/// well-formed escape.
pub fn find_malformed_escape(input: &str) -> Option<usize> {
    let bytes = input.as_bytes();
    bytes
        .iter()
        .enumerate()
        .filter(|(_, &b)| b == b'%')
        .map(|(i, _)| i)
        .find(|&i| {
            !matches!(
                bytes.get(i + 1..i + 3),
                Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit()
            )
        })
}

pub(crate) fn decoded_into_string(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(path) => path,
        Err(err) => {
            tracing::debug!("Decoded path is not valid UTF-8, replacing invalid sequences");
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    }
}
