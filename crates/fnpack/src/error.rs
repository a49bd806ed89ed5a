use std::path::PathBuf;

use thiserror::Error;

/// Fatal packaging failures. Everything else the packager runs into is
/// reported as a per-operation status and never aborts the run.
#[derive(Debug, Error)]
pub enum PackError {
    #[error("failed to create output directory {path}: {source}")]
    OutDirCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read project manifest at {path}: {source}")]
    ManifestRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("project manifest at {path} is not valid JSON: {source}")]
    ManifestParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to serialize deployment manifest: {0}")]
    ManifestSerialize(serde_json::Error),

    #[error("failed to write deployment manifest to {path}: {source}")]
    ManifestWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}
