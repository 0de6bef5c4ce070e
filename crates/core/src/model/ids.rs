use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Longest identifier accepted from links or storage.
pub const MAX_GAME_ID_LEN: usize = 64;

/// Characters used for generated identifiers (lowercase base-36).
pub const GAME_ID_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Identifier of a shared question set.
///
/// Only ASCII alphanumeric characters are accepted so the id can be embedded
/// in a link query string without escaping.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GameId(String);

impl GameId {
    /// Builds an identifier of `len` characters drawn from `GAME_ID_ALPHABET`.
    ///
    /// `pick` receives the alphabet length and returns the index of the next
    /// character; out-of-range indices wrap around.
    #[must_use]
    pub fn from_picks(len: usize, mut pick: impl FnMut(usize) -> usize) -> Self {
        let n = GAME_ID_ALPHABET.len();
        let raw = (0..len.clamp(1, MAX_GAME_ID_LEN))
            .map(|_| char::from(GAME_ID_ALPHABET[pick(n) % n]))
            .collect();
        Self(raw)
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GameId({})", self.0)
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ─── Parsing ───────────────────────────────────────────────────────────────────

/// Error type for parsing a `GameId` from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseGameIdError {
    Empty,
    TooLong { len: usize },
    InvalidChar(char),
}

impl fmt::Display for ParseGameIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("game id is empty"),
            Self::TooLong { len } => {
                write!(f, "game id is too long ({len} > {MAX_GAME_ID_LEN})")
            }
            Self::InvalidChar(ch) => write!(f, "game id contains invalid character {ch:?}"),
        }
    }
}

impl std::error::Error for ParseGameIdError {}

impl FromStr for GameId {
    type Err = ParseGameIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseGameIdError::Empty);
        }
        if trimmed.len() > MAX_GAME_ID_LEN {
            return Err(ParseGameIdError::TooLong { len: trimmed.len() });
        }
        if let Some(ch) = trimmed.chars().find(|ch| !ch.is_ascii_alphanumeric()) {
            return Err(ParseGameIdError::InvalidChar(ch));
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl TryFrom<String> for GameId {
    type Error = ParseGameIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<GameId> for String {
    fn from(id: GameId) -> Self {
        id.0
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
