// src/error.rs
//! The unified error type for the injection pipeline.

use fontbridge_traits::ProjectError;
use std::path::PathBuf;
use thiserror::Error;

/// The main error enum for all operations within the plugin.
///
/// Every variant is fatal to the invocation: the first error aborts remaining
/// work, and side effects applied before it (copied files, patched plists,
/// earlier registrations) are not rolled back.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(
        "Invalid property list '{}': no <dict> or closing </plist> tag found; add one manually and re-run",
        .path.display()
    )]
    PlistFormat { path: PathBuf },

    #[error("Project graph error: {0}")]
    Project(#[from] ProjectError),
}
