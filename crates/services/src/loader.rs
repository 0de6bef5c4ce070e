use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use storage::{ShareRepository, StorageError};
use trivia_core::model::{AnswerSlot, GameId, QuestionRecord, QuestionSet};

use crate::error::LoadError;

/// Columns a question file must carry. Any other column is ignored.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "question",
    "answer1",
    "answer2",
    "answer3",
    "answer4",
    "correct_index",
];

/// Where a loaded question set came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionSource {
    Upload,
    Shared(GameId),
}

/// A question set ready to play, tagged with its origin.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedQuestions {
    pub questions: QuestionSet,
    pub source: QuestionSource,
}

impl LoadedQuestions {
    #[must_use]
    pub fn uploaded(questions: QuestionSet) -> Self {
        Self {
            questions,
            source: QuestionSource::Upload,
        }
    }

    #[must_use]
    pub fn is_shared(&self) -> bool {
        matches!(self.source, QuestionSource::Shared(_))
    }

    /// Only non-empty uploads may be shared; a shared game is never re-shared.
    #[must_use]
    pub fn can_share(&self) -> bool {
        !self.is_shared() && !self.questions.is_empty()
    }
}

/// Turns question files or share identifiers into question sets.
///
/// A load either yields the whole set or fails; partial sets are never returned.
#[derive(Clone)]
pub struct QuestionLoader {
    shares: Arc<dyn ShareRepository>,
}

impl QuestionLoader {
    #[must_use]
    pub fn new(shares: Arc<dyn ShareRepository>) -> Self {
        Self { shares }
    }

    /// Parse header-labelled CSV text into questions.
    ///
    /// Rows with only blank cells are skipped. `correct_index` is coerced to an
    /// answer slot once, here; a row that does not coerce fails the whole load.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` for malformed CSV, a missing required column, an
    /// invalid `correct_index`, or a file without question rows.
    pub fn parse_csv(text: &str) -> Result<QuestionSet, LoadError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(text.as_bytes());

        let headers = reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|header| header == column) {
                return Err(LoadError::MissingColumn(column));
            }
        }

        let mut questions = Vec::new();
        for result in reader.records() {
            let record = result?;
            if record.iter().all(str::is_empty) {
                continue;
            }
            let line = record.position().map_or(0, csv::Position::line);
            let row: RawQuestionRow = record.deserialize(Some(&headers))?;
            questions.push(row.into_question(line)?);
        }

        if questions.is_empty() {
            return Err(LoadError::Empty);
        }
        Ok(QuestionSet::new(questions))
    }

    /// # Errors
    ///
    /// See [`QuestionLoader::parse_csv`].
    pub fn load_csv_text(&self, text: &str) -> Result<LoadedQuestions, LoadError> {
        let questions = Self::parse_csv(text)?;
        tracing::info!(count = questions.len(), "loaded questions from csv");
        Ok(LoadedQuestions::uploaded(questions))
    }

    /// Read a CSV file from disk and parse it.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Io` if the file cannot be read, otherwise see
    /// [`QuestionLoader::parse_csv`].
    pub async fn load_csv_file(&self, path: &Path) -> Result<LoadedQuestions, LoadError> {
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| LoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        self.load_csv_text(&text)
    }

    /// Fetch the question set published under `game_id`.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::NotFound` for an unknown id and
    /// `LoadError::Storage` for other store failures.
    pub async fn load_shared(&self, game_id: &GameId) -> Result<LoadedQuestions, LoadError> {
        let record = self
            .shares
            .get_share(game_id)
            .await
            .map_err(|err| match err {
                StorageError::NotFound => LoadError::NotFound(game_id.clone()),
                other => LoadError::Storage(other),
            })?;
        tracing::info!(%game_id, count = record.questions.len(), "loaded shared game");
        Ok(LoadedQuestions {
            questions: record.questions,
            source: QuestionSource::Shared(record.game_id),
        })
    }
}

#[derive(Debug, Deserialize)]
struct RawQuestionRow {
    #[serde(default)]
    question: String,
    #[serde(default)]
    answer1: String,
    #[serde(default)]
    answer2: String,
    #[serde(default)]
    answer3: String,
    #[serde(default)]
    answer4: String,
    #[serde(default)]
    correct_index: String,
}

impl RawQuestionRow {
    fn into_question(self, line: u64) -> Result<QuestionRecord, LoadError> {
        let correct = coerce_correct_index(&self.correct_index, line)?;
        Ok(QuestionRecord::new(
            self.question,
            [self.answer1, self.answer2, self.answer3, self.answer4],
            correct,
        ))
    }
}

/// Accepts `2` as well as integral numbers such as `2.0`.
fn coerce_correct_index(raw: &str, line: u64) -> Result<AnswerSlot, LoadError> {
    let invalid = || LoadError::InvalidCorrectIndex {
        line,
        raw: raw.to_string(),
    };
    let value = match raw.parse::<i64>() {
        Ok(value) => value,
        Err(_) => {
            let number: f64 = raw.parse().map_err(|_| invalid())?;
            if !number.is_finite() || number.fract() != 0.0 || number.abs() > 1e9 {
                return Err(invalid());
            }
            number as i64
        }
    };
    AnswerSlot::new(value).map_err(|_| invalid())
}
