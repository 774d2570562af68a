//! Reading collection counts produced by a content indexer.
//!
//! Accepted inputs:
//!
//! ```text
//! counts.json   {"posts": 25, "notes": 3}
//! counts.toml   posts = 25
//!               notes = 3
//! --count       posts=25
//! ```

use crate::paginate::CollectionCount;
use anyhow::Result;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Errors from count files and `name=N` pairs
#[derive(Debug, Error)]
pub enum CountsError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Invalid JSON counts in `{0}`")]
    Json(PathBuf, #[source] serde_json::Error),

    #[error("Invalid TOML counts in `{0}`")]
    Toml(PathBuf, #[source] toml::de::Error),

    #[error("Unsupported counts file `{0}`, expected .json or .toml")]
    UnsupportedFormat(PathBuf),

    #[error("Invalid count `{0}`, expected NAME=COUNT")]
    InvalidPair(String),
}

/// Load counts from a `.json` or `.toml` file.
pub fn from_path(path: &Path) -> Result<CollectionCount> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    if !matches!(extension.as_deref(), Some("json" | "toml")) {
        return Err(CountsError::UnsupportedFormat(path.to_path_buf()).into());
    }

    let content =
        fs::read_to_string(path).map_err(|err| CountsError::Io(path.to_path_buf(), err))?;

    let counts = if extension.as_deref() == Some("json") {
        serde_json::from_str(&content).map_err(|err| CountsError::Json(path.to_path_buf(), err))?
    } else {
        toml::from_str(&content).map_err(|err| CountsError::Toml(path.to_path_buf(), err))?
    };
    Ok(counts)
}

/// Parse a `name=N` pair from the command line.
pub fn parse_pair(pair: &str) -> Result<(String, usize), CountsError> {
    let invalid = || CountsError::InvalidPair(pair.to_owned());

    let (name, count) = pair.split_once('=').ok_or_else(invalid)?;
    let name = name.trim();
    if name.is_empty() {
        return Err(invalid());
    }
    let count = count.trim().parse().map_err(|_| invalid())?;

    Ok((name.to_owned(), count))
}

/// Merge count sources; later sources override earlier ones per name.
pub fn collect(
    file: Option<&Path>,
    pairs: impl IntoIterator<Item = (String, usize)>,
) -> Result<CollectionCount> {
    let mut counts = match file {
        Some(path) => from_path(path)?,
        None => CollectionCount::new(),
    };
    counts.extend(pairs);
    Ok(counts)
}
