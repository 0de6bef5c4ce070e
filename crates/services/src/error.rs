//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use storage::StorageError;
use storage::sqlite::SqliteInitError;
use trivia_core::model::GameId;

/// Errors emitted by `QuestionLoader`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("question file has no `{0}` column")]
    MissingColumn(&'static str),
    #[error("line {line}: correct_index must be a whole number from 1 to 4, got {raw:?}")]
    InvalidCorrectIndex { line: u64, raw: String },
    #[error("question file contains no questions")]
    Empty,
    #[error("no shared game with id {0}")]
    NotFound(GameId),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `ShareService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ShareError {
    #[error("cannot share an empty question set")]
    Empty,
    #[error("shared games cannot be shared again")]
    AlreadyShared,
    #[error("no free game id after {attempts} attempts")]
    IdSpaceExhausted { attempts: u32 },
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error("invalid share base url: {0}")]
    ShareBaseUrl(#[from] url::ParseError),
}
