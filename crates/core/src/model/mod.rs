mod ids;
mod question;

pub use ids::{GAME_ID_ALPHABET, GameId, MAX_GAME_ID_LEN, ParseGameIdError};
pub use question::{AnswerSlot, QuestionError, QuestionRecord, QuestionSet};
