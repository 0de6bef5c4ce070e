use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use trivia_core::model::{GameId, QuestionSet};

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("conflict")]
    Conflict,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// A question set published under a share identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct ShareRecord {
    pub game_id: GameId,
    pub questions: QuestionSet,
    pub created_at: DateTime<Utc>,
}

/// Repository contract for shared games.
///
/// Records are written once and never updated or deleted.
#[async_trait]
pub trait ShareRepository: Send + Sync {
    /// Persist a new shared game.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Conflict` if the identifier is already taken,
    /// or other storage errors.
    async fn insert_share(&self, record: &ShareRecord) -> Result<(), StorageError>;

    /// Fetch a shared game by identifier.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if missing, or other storage errors.
    async fn get_share(&self, game_id: &GameId) -> Result<ShareRecord, StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    shares: Arc<Mutex<HashMap<GameId, ShareRecord>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            shares: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl ShareRepository for InMemoryRepository {
    async fn insert_share(&self, record: &ShareRecord) -> Result<(), StorageError> {
        let mut guard = self
            .shares
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        if guard.contains_key(&record.game_id) {
            return Err(StorageError::Conflict);
        }
        guard.insert(record.game_id.clone(), record.clone());
        Ok(())
    }

    async fn get_share(&self, game_id: &GameId) -> Result<ShareRecord, StorageError> {
        let guard = self
            .shares
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.get(game_id).cloned().ok_or(StorageError::NotFound)
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub shares: Arc<dyn ShareRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let shares: Arc<dyn ShareRepository> = Arc::new(InMemoryRepository::new());
        Self { shares }
    }
}
