//! Platform Selection
//!
//! Picks which path grammar a URI is decoded into. The native platform is
//! fixed at compile time; callers that need the other grammar (tests, remote
//! servers, tooling) name it explicitly.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::components::UriParts;
use crate::error::ParsePlatformError;
use crate::{path_utils, posix, win32};

/// Path grammar to decode into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// `/`-separated absolute paths.
    #[serde(alias = "unix")]
    Posix,
    /// Drive-letter and UNC paths with `\` separators.
    #[serde(alias = "windows")]
    Win32,
}

impl Platform {
    /// The platform this crate was compiled for. Every non-Windows target
    /// decodes as POSIX.
    pub const fn native() -> Self {
        if cfg!(windows) {
            Platform::Win32
        } else {
            Platform::Posix
        }
    }

    /// Decode `uri` with this platform's decoder.
    pub fn parse_file_uri(self, uri: &str) -> String {
        match self {
            Platform::Posix => posix::parse_file_from_lsp_uri_posix(uri),
            Platform::Win32 => win32::parse_file_from_lsp_uri_win32(uri),
        }
    }

    /// Encode `path`, written in this platform's syntax, as a `file://` URI.
    pub fn path_to_uri(self, path: &str) -> String {
        match self {
            Platform::Posix => path_utils::path_to_lsp_uri_posix(path),
            Platform::Win32 => path_utils::path_to_lsp_uri_win32(path),
        }
    }

    pub(crate) fn decode_bytes(self, parts: &UriParts<'_>) -> Vec<u8> {
        match self {
            Platform::Posix => posix::decode(parts),
            Platform::Win32 => win32::decode(parts),
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Platform::native()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Posix => f.write_str("posix"),
            Platform::Win32 => f.write_str("win32"),
        }
    }
}

impl FromStr for Platform {
    type Err = ParsePlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "posix" | "unix" => Ok(Platform::Posix),
            "win32" | "windows" => Ok(Platform::Win32),
            _ => Err(ParsePlatformError(s.to_owned())),
        }
    }
}
