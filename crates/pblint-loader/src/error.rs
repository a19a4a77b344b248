//! Loader error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a run before any rule is evaluated.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// No schema file was requested.
    #[error("no schema files given")]
    NoFiles,

    /// A requested schema file does not exist on disk.
    #[error("schema file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Parsing, import resolution, or type checking failed.
    #[error("unable to parse schema files: {0}")]
    Compile(#[from] Box<protox::Error>),

    /// A compiled file could not be found again in the descriptor pool.
    #[error("schema file '{0}' is missing from the descriptor pool")]
    MissingFromPool(String),

    /// A method option could not be rendered into the option map.
    #[error("failed to read option '{extension}' on method '{method}': {source}")]
    Option {
        extension: String,
        method: String,
        #[source]
        source: serde_json::Error,
    },
}

impl From<protox::Error> for LoaderError {
    fn from(error: protox::Error) -> Self {
        Self::Compile(Box::new(error))
    }
}
