//! File-level glue around the core transform.
//!
//! The transform itself is infallible; everything that can fail lives here,
//! at the file and config loading boundary.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::transform::transform;
use crate::types::TransformConfig;

/// Errors from the file and config loading boundary.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// A file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A JSON transform config could not be parsed.
    #[error("invalid transform config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

fn read_file(path: &Path) -> Result<String, DocumentError> {
    fs::read_to_string(path).map_err(|source| DocumentError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Read the SVG file at `path` and return its markup as a string.
pub fn svg_file_to_html(path: impl AsRef<Path>) -> Result<String, DocumentError> {
    read_file(path.as_ref())
}

/// Load the SVG file at `path` and run the transformation pipeline on it.
pub fn transform_file(
    path: impl AsRef<Path>,
    config: &TransformConfig,
) -> Result<String, DocumentError> {
    let svg = read_file(path.as_ref())?;
    Ok(transform(&svg, config))
}

/// Load a [`TransformConfig`] from a JSON file.
pub fn load_config(path: impl AsRef<Path>) -> Result<TransformConfig, DocumentError> {
    let raw = read_file(path.as_ref())?;
    Ok(serde_json::from_str(&raw)?)
}
