use crate::model::{AnswerSlot, QuestionRecord, QuestionSet};

//
// ─── PHASE ────────────────────────────────────────────────────────────────────
//

/// Where a playthrough currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuizPhase {
    /// Questions may be loaded, but play has not begun.
    #[default]
    NotStarted,
    /// A question is shown and the player may pick an answer.
    AwaitingSelection,
    /// The current answer is locked and the correct slot is shown.
    AnswerRevealed,
    /// The last question was answered and the player moved past it.
    Finished,
}

//
// ─── ANSWER DISPLAY ───────────────────────────────────────────────────────────
//

/// How a single answer button is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerDisplay {
    Neutral,
    Selected,
    Correct,
    Incorrect,
    Dimmed,
}

impl AnswerDisplay {
    /// Display state of `slot` given the reveal flag, the current selection and
    /// the correct slot of the question.
    #[must_use]
    pub fn resolve(
        revealed: bool,
        selected: Option<AnswerSlot>,
        correct: AnswerSlot,
        slot: AnswerSlot,
    ) -> Self {
        let is_selected = selected == Some(slot);
        if !revealed {
            return if is_selected {
                Self::Selected
            } else {
                Self::Neutral
            };
        }
        if slot == correct {
            Self::Correct
        } else if is_selected {
            Self::Incorrect
        } else {
            Self::Dimmed
        }
    }
}

//
// ─── SESSION ──────────────────────────────────────────────────────────────────
//

/// Mutable progress of one playthrough over a shared question set.
///
/// Every transition returns `true` when it was applied. Transitions that are
/// not valid for the current phase are ignored and leave the session as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    questions: QuestionSet,
    phase: QuizPhase,
    current_index: usize,
    score: u32,
    selected: Option<AnswerSlot>,
}

impl QuizSession {
    #[must_use]
    pub fn new(questions: QuestionSet) -> Self {
        Self {
            questions,
            phase: QuizPhase::NotStarted,
            current_index: 0,
            score: 0,
            selected: None,
        }
    }

    /// Begin play at the first question. Does nothing for an empty set.
    pub fn start(&mut self) -> bool {
        if self.questions.is_empty() {
            return false;
        }
        self.phase = QuizPhase::AwaitingSelection;
        self.current_index = 0;
        self.score = 0;
        self.selected = None;
        true
    }

    /// Mark `slot` as the chosen answer while the question is open.
    pub fn select(&mut self, slot: AnswerSlot) -> bool {
        if self.phase != QuizPhase::AwaitingSelection {
            return false;
        }
        self.selected = Some(slot);
        true
    }

    /// Lock the current selection and reveal the correct answer.
    pub fn submit(&mut self) -> bool {
        if self.phase != QuizPhase::AwaitingSelection {
            return false;
        }
        let Some(selected) = self.selected else {
            return false;
        };
        let Some(question) = self.questions.get(self.current_index) else {
            return false;
        };
        if question.is_correct(selected) {
            self.score = self.score.saturating_add(1);
        }
        self.phase = QuizPhase::AnswerRevealed;
        true
    }

    /// Move past a revealed answer, finishing after the last question.
    pub fn advance(&mut self) -> bool {
        if self.phase != QuizPhase::AnswerRevealed {
            return false;
        }
        if self.is_last_question() {
            self.phase = QuizPhase::Finished;
        } else {
            self.current_index += 1;
            self.selected = None;
            self.phase = QuizPhase::AwaitingSelection;
        }
        true
    }

    /// Drop all progress and return to the pre-start screen.
    ///
    /// Accepted from any phase.
    pub fn restart(&mut self) {
        self.phase = QuizPhase::NotStarted;
        self.current_index = 0;
        self.score = 0;
        self.selected = None;
    }

    // ─── Queries ───────────────────────────────────────────────────────────────

    #[must_use]
    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn selected(&self) -> Option<AnswerSlot> {
        self.selected
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Whether play is in progress (a question is on screen).
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(
            self.phase,
            QuizPhase::AwaitingSelection | QuizPhase::AnswerRevealed
        )
    }

    /// Whether the correct answer of the current question is visible.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        matches!(self.phase, QuizPhase::AnswerRevealed | QuizPhase::Finished)
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.questions.len()
    }

    /// The question on screen, or `None` before start.
    #[must_use]
    pub fn current_question(&self) -> Option<&QuestionRecord> {
        match self.phase {
            QuizPhase::NotStarted => None,
            _ => self.questions.get(self.current_index),
        }
    }

    /// Display state of one answer button for the current question.
    #[must_use]
    pub fn answer_display(&self, slot: AnswerSlot) -> AnswerDisplay {
        match self.current_question() {
            Some(question) => AnswerDisplay::resolve(
                self.is_revealed(),
                self.selected,
                question.correct_slot(),
                slot,
            ),
            None => AnswerDisplay::Neutral,
        }
    }

    /// Number of questions whose answer has been revealed.
    #[must_use]
    pub fn completed(&self) -> usize {
        match self.phase {
            QuizPhase::NotStarted => 0,
            QuizPhase::AwaitingSelection => self.current_index,
            QuizPhase::AnswerRevealed | QuizPhase::Finished => self.current_index + 1,
        }
    }

    /// Share of the set answered so far, 0.0..=100.0.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        progress_percent(self.completed(), self.questions.len())
    }

    /// Rounded share of correct answers over the whole set.
    #[must_use]
    pub fn accuracy_percent(&self) -> u32 {
        accuracy_percent(self.score, self.questions.len())
    }
}

/// `completed / total * 100`, or 0 for an empty set.
#[must_use]
pub fn progress_percent(completed: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    completed.min(total) as f64 / total as f64 * 100.0
}

/// `round(score / total * 100)`, or 0 for an empty set.
#[must_use]
pub fn accuracy_percent(score: u32, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let percent = (f64::from(score) / total as f64 * 100.0).round();
    percent.clamp(0.0, f64::from(u32::MAX)) as u32
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
