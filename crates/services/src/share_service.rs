use std::sync::Arc;

use rand::Rng;
use storage::{ShareRecord, ShareRepository, StorageError};
use trivia_core::Clock;
use trivia_core::model::GameId;
use url::Url;

use crate::error::ShareError;
use crate::loader::LoadedQuestions;

/// Query parameter carrying the share identifier in a link.
pub const GAME_ID_PARAM: &str = "gameId";

/// Length of generated identifiers.
pub const GAME_ID_LEN: usize = 12;

/// Identifier attempts before giving up on collisions.
pub const MAX_ID_ATTEMPTS: u32 = 3;

/// A published game and the link that opens it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    pub game_id: GameId,
    pub url: Url,
}

/// Publishes question sets under random identifiers.
#[derive(Clone)]
pub struct ShareService {
    clock: Clock,
    shares: Arc<dyn ShareRepository>,
    base_url: Url,
}

impl ShareService {
    #[must_use]
    pub fn new(clock: Clock, shares: Arc<dyn ShareRepository>, base_url: Url) -> Self {
        Self {
            clock,
            shares,
            base_url,
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Persist `loaded` under a fresh identifier and return its link.
    ///
    /// An identifier already taken in the store is replaced by a new one, up
    /// to `MAX_ID_ATTEMPTS` times. Other store failures are returned at once.
    ///
    /// # Errors
    ///
    /// Returns `ShareError::AlreadyShared` for games that were loaded from a
    /// link, `ShareError::Empty` for an empty set, `ShareError::IdSpaceExhausted`
    /// when every attempt collided, and `ShareError::Storage` otherwise.
    pub async fn share(&self, loaded: &LoadedQuestions) -> Result<ShareLink, ShareError> {
        if loaded.is_shared() {
            return Err(ShareError::AlreadyShared);
        }
        if loaded.questions.is_empty() {
            return Err(ShareError::Empty);
        }

        for attempt in 1..=MAX_ID_ATTEMPTS {
            let record = ShareRecord {
                game_id: generate_game_id(),
                questions: loaded.questions.clone(),
                created_at: self.clock.now(),
            };
            match self.shares.insert_share(&record).await {
                Ok(()) => {
                    tracing::info!(game_id = %record.game_id, "shared game");
                    let url = share_url(&self.base_url, &record.game_id);
                    return Ok(ShareLink {
                        game_id: record.game_id,
                        url,
                    });
                }
                Err(StorageError::Conflict) => {
                    tracing::debug!(attempt, game_id = %record.game_id, "game id collision");
                }
                Err(err) => return Err(err.into()),
            }
        }

        Err(ShareError::IdSpaceExhausted {
            attempts: MAX_ID_ATTEMPTS,
        })
    }
}

/// Random lowercase base-36 identifier of `GAME_ID_LEN` characters.
#[must_use]
pub fn generate_game_id() -> GameId {
    let mut rng = rand::rng();
    GameId::from_picks(GAME_ID_LEN, |n| rng.random_range(0..n))
}

/// `base` with `gameId=<id>` as its query.
#[must_use]
pub fn share_url(base: &Url, game_id: &GameId) -> Url {
    let mut url = base.clone();
    url.set_query(None);
    url.query_pairs_mut()
        .append_pair(GAME_ID_PARAM, game_id.as_str());
    url
}

/// Extract a share identifier from a pasted link or a bare identifier.
#[must_use]
pub fn game_id_from_link(input: &str) -> Option<GameId> {
    let input = input.trim();
    if let Ok(url) = Url::parse(input) {
        return url
            .query_pairs()
            .find(|(key, _)| key == GAME_ID_PARAM)
            .and_then(|(_, value)| value.parse().ok());
    }
    if let Some((_, query)) = input.split_once('?') {
        return url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == GAME_ID_PARAM)
            .and_then(|(_, value)| value.parse().ok());
    }
    input.parse().ok()
}
