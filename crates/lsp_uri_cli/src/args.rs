//! Command-line argument parsing for lsp-uri

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use lsp_uri::Platform;

#[derive(Parser, Debug)]
#[command(name = "lsp-uri")]
#[command(about = "Convert LSP file:// URIs to filesystem paths and back", long_about = None)]
pub struct Args {
    /// URIs to decode (paths with --encode). Read from stdin when omitted
    #[arg(value_name = "URI")]
    pub inputs: Vec<String>,

    /// Read inputs from a file, one per line
    #[arg(short, long, value_name = "FILE", conflicts_with = "inputs")]
    pub input: Option<PathBuf>,

    /// Path syntax to decode into (or encode from)
    #[arg(short, long, value_enum, env = "LSP_URI_PLATFORM", default_value = "native")]
    pub platform: PlatformArg,

    /// Reject URIs instead of guessing: missing or foreign scheme, malformed
    /// escapes, remote hosts on POSIX
    #[arg(long)]
    pub strict: bool,

    /// Print one JSON object per input
    #[arg(long)]
    pub json: bool,

    /// Convert paths to file:// URIs instead
    #[arg(long, conflicts_with = "strict")]
    pub encode: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PlatformArg {
    Native,
    Posix,
    Win32,
}

impl PlatformArg {
    pub fn resolve(self) -> Platform {
        match self {
            PlatformArg::Native => Platform::native(),
            PlatformArg::Posix => Platform::Posix,
            PlatformArg::Win32 => Platform::Win32,
        }
    }
}
