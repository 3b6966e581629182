//! Error types for FP-tree construction and export.

use std::path::PathBuf;
use std::process::ExitStatus;

/// Errors raised while counting or building. Any of these aborts the build.
#[derive(Debug, thiserror::Error)]
pub enum FpError {
    #[error("Invalid token on line {line}: {token:?}")]
    InvalidInput { line: usize, token: String },

    #[error("Cannot read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Read error: {0}")]
    Read(#[from] std::io::Error),

    #[error("Cannot insert an empty transaction")]
    EmptyInsertion,
}

/// Errors raised by a single export target. The trie is left untouched.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Cannot write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Graph renderer `{program}` not found, install Graphviz")]
    RendererMissing { program: String },

    #[error("Graph renderer exited with {status}: {stderr}")]
    RendererFailed { status: ExitStatus, stderr: String },
}

pub type Result<T> = std::result::Result<T, FpError>;
