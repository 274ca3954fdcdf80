use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("usage: {0}")]
    Usage(String),
    #[error("configuration: {0}")]
    Configuration(String),
    #[error("unable to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to render template: {0}")]
    Template(#[from] askama::Error),
}

impl GeneratorError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GeneratorError::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit status for this failure, following the clap convention of 2 for usage.
    pub fn exit_code(&self) -> i32 {
        match self {
            GeneratorError::Usage(_) => 2,
            _ => 1,
        }
    }
}
