//! Program image loader.
//!
//! Images are text files with one 32-bit hex word per line (an optional
//! `0x` prefix is accepted). Blank lines and `#` comments, whole-line or
//! trailing, are ignored. The same format serves instruction and data
//! memory images.

use std::fs;
use std::path::Path;

use crate::common::SimError;

/// Parses a program image from a string.
///
/// # Errors
///
/// Returns [`SimError::MalformedImage`] with the 1-based line number for
/// any line that is not a 32-bit hex word.
pub fn parse_words(text: &str) -> Result<Vec<u32>, SimError> {
    let mut words = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let digits = line.strip_prefix("0x").unwrap_or(line);
        let word = u32::from_str_radix(digits, 16).map_err(|e| SimError::MalformedImage {
            line: i + 1,
            reason: format!("{line:?}: {e}"),
        })?;
        words.push(word);
    }
    Ok(words)
}

/// Reads and parses a program image file.
///
/// # Errors
///
/// Returns [`SimError::Io`] if the file cannot be read, or
/// [`SimError::MalformedImage`] for a bad line.
pub fn load_words_file<P: AsRef<Path>>(path: P) -> Result<Vec<u32>, SimError> {
    parse_words(&fs::read_to_string(path)?)
}
