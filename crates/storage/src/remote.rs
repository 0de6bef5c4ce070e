//! Shared games kept in a hosted table behind a PostgREST-style HTTP API.

use std::env;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use trivia_core::model::{GameId, QuestionSet};

use crate::repository::{ShareRecord, ShareRepository, Storage, StorageError};

pub const DEFAULT_TABLE: &str = "trivia_games";

#[derive(Clone, Debug)]
pub struct RestStoreConfig {
    pub base_url: String,
    pub api_key: String,
    pub table: String,
}

impl RestStoreConfig {
    /// Reads `TRIVIA_STORE_URL` and `TRIVIA_STORE_KEY`; `None` unless both are set.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let base_url = env::var("TRIVIA_STORE_URL").ok()?;
        let api_key = env::var("TRIVIA_STORE_KEY").ok()?;
        Self::new(base_url, api_key)
    }

    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Option<Self> {
        let base_url = base_url.into();
        let api_key = api_key.into();
        if base_url.trim().is_empty() || api_key.trim().is_empty() {
            return None;
        }
        Some(Self {
            base_url,
            api_key,
            table: DEFAULT_TABLE.to_string(),
        })
    }

    fn table_url(&self) -> String {
        format!(
            "{}/rest/v1/{}",
            self.base_url.trim().trim_end_matches('/'),
            self.table
        )
    }

    fn lookup_url(&self, game_id: &GameId) -> String {
        format!(
            "{}?game_id=eq.{}&select=game_id,questions,created_at&limit=1",
            self.table_url(),
            game_id.as_str()
        )
    }
}

#[derive(Clone)]
pub struct RestShareRepository {
    client: Client,
    config: RestStoreConfig,
}

impl RestShareRepository {
    #[must_use]
    pub fn new(config: RestStoreConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
    }
}

impl Storage {
    /// Build a `Storage` backed by the hosted table.
    #[must_use]
    pub fn remote(config: RestStoreConfig) -> Self {
        let shares: Arc<dyn ShareRepository> = Arc::new(RestShareRepository::new(config));
        Self { shares }
    }
}

fn connection(e: reqwest::Error) -> StorageError {
    StorageError::Connection(e.to_string())
}

#[async_trait]
impl ShareRepository for RestShareRepository {
    async fn insert_share(&self, record: &ShareRecord) -> Result<(), StorageError> {
        let payload = [ShareRow::from_record(record)];
        let response = self
            .authorized(self.client.post(self.config.table_url()))
            .header("Prefer", "return=minimal")
            .json(&payload)
            .send()
            .await
            .map_err(connection)?;

        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::CONFLICT => Err(StorageError::Conflict),
            status => Err(StorageError::Connection(format!(
                "insert failed with status {status}"
            ))),
        }
    }

    async fn get_share(&self, game_id: &GameId) -> Result<ShareRecord, StorageError> {
        let response = self
            .authorized(self.client.get(self.config.lookup_url(game_id)))
            .send()
            .await
            .map_err(connection)?;

        let status = response.status();
        if !status.is_success() {
            return Err(StorageError::Connection(format!(
                "lookup failed with status {status}"
            )));
        }

        let rows: Vec<ShareRow> = response
            .json()
            .await
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        first_record(rows)
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ShareRow {
    game_id: GameId,
    questions: QuestionSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created_at: Option<DateTime<Utc>>,
}

impl ShareRow {
    fn from_record(record: &ShareRecord) -> Self {
        Self {
            game_id: record.game_id.clone(),
            questions: record.questions.clone(),
            created_at: Some(record.created_at),
        }
    }
}

fn first_record(rows: Vec<ShareRow>) -> Result<ShareRecord, StorageError> {
    let row = rows.into_iter().next().ok_or(StorageError::NotFound)?;
    Ok(ShareRecord {
        game_id: row.game_id,
        questions: row.questions,
        // Rows inserted by other clients may not carry a timestamp.
        created_at: row.created_at.unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
    })
}
