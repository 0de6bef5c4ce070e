use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use trivia_core::model::{GameId, QuestionSet};

use super::SqliteRepository;
use crate::repository::{ShareRecord, ShareRepository, StorageError};

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

fn write_err(e: sqlx::Error) -> StorageError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => StorageError::Conflict,
        _ => StorageError::Connection(e.to_string()),
    }
}

#[async_trait::async_trait]
impl ShareRepository for SqliteRepository {
    async fn insert_share(&self, record: &ShareRecord) -> Result<(), StorageError> {
        let questions = serde_json::to_string(&record.questions).map_err(ser)?;

        sqlx::query(
            r"
            INSERT INTO trivia_games (game_id, questions, created_at)
            VALUES (?1, ?2, ?3)
            ",
        )
        .bind(record.game_id.as_str())
        .bind(questions)
        .bind(record.created_at)
        .execute(&self.pool)
        .await
        .map_err(write_err)?;

        Ok(())
    }

    async fn get_share(&self, game_id: &GameId) -> Result<ShareRecord, StorageError> {
        let row = sqlx::query(
            r"
            SELECT game_id, questions, created_at
            FROM trivia_games WHERE game_id = ?1
            ",
        )
        .bind(game_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        match row {
            Some(row) => share_from_row(&row),
            None => Err(StorageError::NotFound),
        }
    }
}

fn share_from_row(row: &SqliteRow) -> Result<ShareRecord, StorageError> {
    let game_id = row
        .try_get::<String, _>("game_id")
        .map_err(ser)?
        .parse::<GameId>()
        .map_err(ser)?;
    let questions: QuestionSet =
        serde_json::from_str(&row.try_get::<String, _>("questions").map_err(ser)?)
            .map_err(ser)?;

    Ok(ShareRecord {
        game_id,
        questions,
        created_at: row.try_get("created_at").map_err(ser)?,
    })
}
