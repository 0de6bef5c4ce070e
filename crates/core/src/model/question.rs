use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;
use std::sync::Arc;
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("answer slot must be between 1 and 4, got {0}")]
    SlotOutOfRange(i64),
}

//
// ─── ANSWER SLOT ──────────────────────────────────────────────────────────────
//

/// One of the four answer positions of a question, numbered 1 through 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct AnswerSlot(u8);

impl AnswerSlot {
    pub const FIRST: Self = Self(1);
    pub const SECOND: Self = Self(2);
    pub const THIRD: Self = Self(3);
    pub const FOURTH: Self = Self(4);

    /// All slots in display order.
    pub const ALL: [Self; 4] = [Self::FIRST, Self::SECOND, Self::THIRD, Self::FOURTH];

    /// Creates a slot from its 1-based number.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::SlotOutOfRange` unless `value` is in 1..=4.
    pub fn new(value: i64) -> Result<Self, QuestionError> {
        match value {
            1..=4 => u8::try_from(value)
                .map(Self)
                .map_err(|_| QuestionError::SlotOutOfRange(value)),
            _ => Err(QuestionError::SlotOutOfRange(value)),
        }
    }

    /// Returns the 1-based slot number.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Letter shown next to the answer (`A` for slot 1).
    #[must_use]
    pub fn letter(self) -> char {
        char::from(b'A' + self.0 - 1)
    }
}

impl TryFrom<i64> for AnswerSlot {
    type Error = QuestionError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AnswerSlot> for i64 {
    fn from(slot: AnswerSlot) -> Self {
        i64::from(slot.0)
    }
}

impl fmt::Display for AnswerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//
// ─── QUESTION RECORD ──────────────────────────────────────────────────────────
//

/// A trivia question with four answer choices.
///
/// The serialized shape (`question`, `answer1`..`answer4`, `correct_index`) is
/// the one persisted for shared games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    question: String,
    answer1: String,
    answer2: String,
    answer3: String,
    answer4: String,
    correct_index: AnswerSlot,
}

impl QuestionRecord {
    #[must_use]
    pub fn new(question: impl Into<String>, answers: [String; 4], correct: AnswerSlot) -> Self {
        let [answer1, answer2, answer3, answer4] = answers;
        Self {
            question: question.into(),
            answer1,
            answer2,
            answer3,
            answer4,
            correct_index: correct,
        }
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn answer(&self, slot: AnswerSlot) -> &str {
        match slot.value() {
            1 => &self.answer1,
            2 => &self.answer2,
            3 => &self.answer3,
            _ => &self.answer4,
        }
    }

    #[must_use]
    pub fn correct_slot(&self) -> AnswerSlot {
        self.correct_index
    }

    #[must_use]
    pub fn is_correct(&self, slot: AnswerSlot) -> bool {
        self.correct_index == slot
    }
}

//
// ─── QUESTION SET ─────────────────────────────────────────────────────────────
//

/// Ordered, shared, read-only sequence of questions.
///
/// Cloning is cheap; all clones see the same records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionSet(Arc<[QuestionRecord]>);

impl QuestionSet {
    #[must_use]
    pub fn new(questions: Vec<QuestionRecord>) -> Self {
        Self(Arc::from(questions))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&QuestionRecord> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QuestionRecord> {
        self.0.iter()
    }
}

impl Default for QuestionSet {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl From<Vec<QuestionRecord>> for QuestionSet {
    fn from(questions: Vec<QuestionRecord>) -> Self {
        Self::new(questions)
    }
}

impl Index<usize> for QuestionSet {
    type Output = QuestionRecord;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a QuestionSet {
    type Item = &'a QuestionRecord;
    type IntoIter = std::slice::Iter<'a, QuestionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn capital_question() -> QuestionRecord {
        QuestionRecord::new(
            "Capital of France?",
            [
                "Paris".to_string(),
                "Rome".to_string(),
                "Madrid".to_string(),
                "Berlin".to_string(),
            ],
            AnswerSlot::FIRST,
        )
    }

    #[test]
    fn slot_rejects_out_of_range() {
        assert_eq!(AnswerSlot::new(0), Err(QuestionError::SlotOutOfRange(0)));
        assert_eq!(AnswerSlot::new(5), Err(QuestionError::SlotOutOfRange(5)));
        assert_eq!(AnswerSlot::new(4).unwrap(), AnswerSlot::FOURTH);
    }

    #[test]
    fn slot_letters_follow_position() {
        let letters: String = AnswerSlot::ALL.iter().map(|slot| slot.letter()).collect();
        assert_eq!(letters, "ABCD");
    }

    #[test]
    fn answer_lookup_by_slot() {
        let q = capital_question();
        assert_eq!(q.answer(AnswerSlot::THIRD), "Madrid");
        assert!(q.is_correct(AnswerSlot::FIRST));
        assert!(!q.is_correct(AnswerSlot::SECOND));
    }

    #[test]
    fn serializes_with_flat_answer_columns() {
        let value = serde_json::to_value(capital_question()).unwrap();
        assert_eq!(value["answer2"], "Rome");
        assert_eq!(value["correct_index"], 1);
    }

    #[test]
    fn deserialize_rejects_bad_correct_index() {
        let raw = r#"{"question":"Q","answer1":"a","answer2":"b","answer3":"c","answer4":"d","correct_index":7}"#;
        assert!(serde_json::from_str::<QuestionRecord>(raw).is_err());
    }

    #[test]
    fn question_set_clones_share_records() {
        let set = QuestionSet::new(vec![capital_question()]);
        let other = set.clone();
        assert_eq!(other.len(), 1);
        assert_eq!(other[0].question(), set[0].question());
    }
}
