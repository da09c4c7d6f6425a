//! Input collection and per-line conversion

use std::fs;
use std::io::{self, BufRead};
use std::path::Path;

use anyhow::{Context, Result};
use lsp_uri::{try_parse_file_uri, Platform};
use serde::Serialize;

/// What to do with each input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Decode,
    DecodeStrict,
    Encode,
}

/// One converted input, shaped for `--json` output.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Record {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Record {
    /// The converted value, or `None` if the input was rejected.
    pub fn output(&self, mode: Mode) -> Option<&str> {
        match mode {
            Mode::Encode => self.uri.as_deref(),
            Mode::Decode | Mode::DecodeStrict => self.path.as_deref(),
        }
    }
}

/// Decoding ignores surrounding whitespace; encoding keeps the path as given.
pub fn convert(input: &str, mode: Mode, platform: Platform) -> Record {
    let uri = input.trim();
    match mode {
        Mode::Encode => Record {
            uri: Some(platform.path_to_uri(input)),
            path: Some(input.to_owned()),
            error: None,
        },
        Mode::Decode => Record {
            uri: Some(uri.to_owned()),
            path: Some(platform.parse_file_uri(uri)),
            error: None,
        },
        Mode::DecodeStrict => {
            match try_parse_file_uri(uri, platform) {
                Ok(path) => Record {
                    uri: Some(uri.to_owned()),
                    path: Some(path),
                    error: None,
                },
                Err(e) => {
                    tracing::debug!("Rejected {}: {}", uri, e);
                    Record {
                        uri: Some(uri.to_owned()),
                        path: None,
                        error: Some(e.to_string()),
                    }
                }
            }
        }
    }
}

/// Gather inputs from `--input`, the positional arguments, or stdin, in
/// that order of preference.
pub fn collect_inputs(file: Option<&Path>, positional: &[String]) -> Result<Vec<String>> {
    if let Some(file) = file {
        let text = fs::read_to_string(file)
            .with_context(|| format!("Failed to read input file {}", file.display()))?;
        return Ok(non_blank_lines(&text));
    }

    if !positional.is_empty() {
        return Ok(positional.to_vec());
    }

    let mut inputs = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read stdin")?;
        if !line.trim().is_empty() {
            inputs.push(line.trim_end_matches('\r').to_owned());
        }
    }
    Ok(inputs)
}

fn non_blank_lines(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.trim_end_matches('\r').to_owned())
        .collect()
}
