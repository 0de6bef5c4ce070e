use std::path::Path;

use services::{LoadedQuestions, QuestionLoader, QuestionSource, ShareService, game_id_from_link};

use crate::views::ViewError;

/// What the pre-game card shows for the current question set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetupVm {
    pub loaded_label: Option<String>,
    pub can_share: bool,
    pub can_start: bool,
}

#[must_use]
pub fn map_setup(loaded: Option<&LoadedQuestions>) -> SetupVm {
    let Some(loaded) = loaded else {
        return SetupVm {
            loaded_label: None,
            can_share: false,
            can_start: false,
        };
    };
    let count = loaded.questions.len();
    let noun = if count == 1 { "question" } else { "questions" };
    let loaded_label = match &loaded.source {
        QuestionSource::Upload => format!("{count} {noun} loaded"),
        QuestionSource::Shared(game_id) => format!("Shared game {game_id}: {count} {noun}"),
    };
    SetupVm {
        loaded_label: Some(loaded_label),
        can_share: loaded.can_share(),
        can_start: !loaded.questions.is_empty(),
    }
}

/// # Errors
///
/// Returns `ViewError::InvalidGameLink` when `raw` carries no game id and
/// `ViewError::SharedGameLoad` for any lookup failure.
pub async fn load_shared_game(
    loader: &QuestionLoader,
    raw: &str,
) -> Result<LoadedQuestions, ViewError> {
    let Some(game_id) = game_id_from_link(raw) else {
        return Err(ViewError::InvalidGameLink);
    };
    loader.load_shared(&game_id).await.map_err(|err| {
        tracing::warn!(%game_id, error = %err, "failed to load shared game");
        ViewError::SharedGameLoad
    })
}

/// # Errors
///
/// Returns `ViewError::QuestionFile` when the file cannot be read or parsed.
pub async fn load_question_file(
    loader: &QuestionLoader,
    path: &Path,
) -> Result<LoadedQuestions, ViewError> {
    loader.load_csv_file(path).await.map_err(|err| {
        tracing::warn!(path = %path.display(), error = %err, "failed to load question file");
        ViewError::QuestionFile
    })
}

/// Publish `loaded` and return the link to hand out.
///
/// # Errors
///
/// Returns `ViewError::ShareLink` for any share failure.
pub async fn create_share_link(
    share: &ShareService,
    loaded: &LoadedQuestions,
) -> Result<String, ViewError> {
    match share.share(loaded).await {
        Ok(link) => Ok(link.url.to_string()),
        Err(err) => {
            tracing::warn!(error = %err, "failed to create share link");
            Err(ViewError::ShareLink)
        }
    }
}
