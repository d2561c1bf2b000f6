//! Fixture files: naming, content formatting, writing, and verification.
//!
//! Each language produces three UTF-8 files in the output directory:
//! - `water_{lang}.txt`: the summary extract followed by a newline
//! - `water_{lang}_codepoints.txt`: decimal code point of every character, one per line,
//!   no trailing newline
//! - `water_{lang}_length.txt`: number of characters in the text file

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("fixture not found: {}", .0.display())]
    Missing(PathBuf),

    #[error("{}:{line}: not a Unicode scalar value: {value:?}", .path.display())]
    BadCodepoint {
        path: PathBuf,
        line: usize,
        value: String,
    },

    #[error("{}: code points do not match text at character {position}", .path.display())]
    Mismatch { path: PathBuf, position: usize },

    #[error("{}: expected {expected} characters, found {actual}", .path.display())]
    LengthMismatch {
        path: PathBuf,
        expected: String,
        actual: usize,
    },
}

pub fn text_path(dir: &Path, lang: &str) -> PathBuf {
    dir.join(format!("water_{lang}.txt"))
}

pub fn codepoints_path(dir: &Path, lang: &str) -> PathBuf {
    dir.join(format!("water_{lang}_codepoints.txt"))
}

pub fn length_path(dir: &Path, lang: &str) -> PathBuf {
    dir.join(format!("water_{lang}_length.txt"))
}

pub fn text_content(extract: &str) -> String {
    format!("{extract}\n")
}

/// Decimal scalar values of each `char`, newline-separated.
pub fn codepoints(content: &str) -> String {
    content
        .chars()
        .map(|c| u32::from(c).to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Writes all fixture files for one language, overwriting existing ones.
/// Returns the character count of the text file.
pub fn write_all(dir: &Path, lang: &str, extract: &str) -> Result<usize, FixtureError> {
    let content = text_content(extract);
    let length = content.chars().count();

    write(&text_path(dir, lang), &content)?;
    write(&codepoints_path(dir, lang), &codepoints(&content))?;
    write(&length_path(dir, lang), &length.to_string())?;

    Ok(length)
}

fn write(path: &Path, contents: &str) -> Result<(), FixtureError> {
    info!("writing {}", path.display());
    fs::write(path, contents).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn read(path: &Path) -> Result<String, FixtureError> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => FixtureError::Missing(path.to_path_buf()),
        _ => FixtureError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Checks that the codepoints and length files of `lang` agree with its text file.
/// Returns the character count.
pub fn verify(dir: &Path, lang: &str) -> Result<usize, FixtureError> {
    let content = read(&text_path(dir, lang))?;

    let cp_path = codepoints_path(dir, lang);
    let decoded = decode_codepoints(&cp_path, &read(&cp_path)?)?;
    if let Some(position) = first_difference(&content, &decoded) {
        return Err(FixtureError::Mismatch {
            path: cp_path,
            position,
        });
    }

    let len_path = length_path(dir, lang);
    let expected = read(&len_path)?;
    let actual = decoded.chars().count();
    if expected.trim().parse::<usize>().ok() != Some(actual) {
        return Err(FixtureError::LengthMismatch {
            path: len_path,
            expected: expected.trim().to_string(),
            actual,
        });
    }

    Ok(actual)
}

fn decode_codepoints(path: &Path, listing: &str) -> Result<String, FixtureError> {
    if listing.is_empty() {
        return Ok(String::new());
    }
    listing
        .split('\n')
        .enumerate()
        .map(|(i, value)| {
            value
                .parse::<u32>()
                .ok()
                .and_then(char::from_u32)
                .ok_or_else(|| FixtureError::BadCodepoint {
                    path: path.to_path_buf(),
                    line: i + 1,
                    value: value.to_string(),
                })
        })
        .collect()
}

fn first_difference(a: &str, b: &str) -> Option<usize> {
    let mut left = a.chars();
    let mut right = b.chars();
    let mut position = 0;
    loop {
        match (left.next(), right.next()) {
            (None, None) => return None,
            (x, y) if x != y => return Some(position),
            _ => position += 1,
        }
    }
}
