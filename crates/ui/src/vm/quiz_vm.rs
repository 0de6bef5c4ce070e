use trivia_core::model::AnswerSlot;
use trivia_core::{AnswerDisplay, QuizPhase, QuizSession};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Start,
    Select(AnswerSlot),
    Submit,
    Advance,
    Restart,
}

impl QuizIntent {
    /// Runs the matching transition; returns whether the session changed.
    pub fn apply(self, session: &mut QuizSession) -> bool {
        match self {
            Self::Start => session.start(),
            Self::Select(slot) => session.select(slot),
            Self::Submit => session.submit(),
            Self::Advance => session.advance(),
            Self::Restart => {
                session.restart();
                true
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerButtonVm {
    pub slot: AnswerSlot,
    pub letter: char,
    pub text: String,
    pub class: &'static str,
    pub locked: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuestionBoardVm {
    pub position_label: String,
    pub prompt: String,
    pub score: u32,
    pub progress_width: String,
    pub answers: Vec<AnswerButtonVm>,
    pub revealed: bool,
    pub can_submit: bool,
    pub advance_label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOverVm {
    pub final_score_label: String,
    pub accuracy_label: String,
}

#[must_use]
pub fn answer_class(display: AnswerDisplay) -> &'static str {
    match display {
        AnswerDisplay::Neutral => "answer",
        AnswerDisplay::Selected => "answer answer--selected",
        AnswerDisplay::Correct => "answer answer--correct",
        AnswerDisplay::Incorrect => "answer answer--incorrect",
        AnswerDisplay::Dimmed => "answer answer--dimmed",
    }
}

/// Board for the question in play; `None` outside of play.
#[must_use]
pub fn map_question_board(session: &QuizSession) -> Option<QuestionBoardVm> {
    if !session.is_active() {
        return None;
    }
    let question = session.current_question()?;
    let revealed = session.is_revealed();
    let answers = AnswerSlot::ALL
        .into_iter()
        .map(|slot| AnswerButtonVm {
            slot,
            letter: slot.letter(),
            text: question.answer(slot).to_string(),
            class: answer_class(session.answer_display(slot)),
            locked: revealed,
        })
        .collect();

    Some(QuestionBoardVm {
        position_label: format!(
            "Question {}/{}",
            session.current_index() + 1,
            session.total()
        ),
        prompt: question.question().to_string(),
        score: session.score(),
        progress_width: format!("{:.1}%", session.progress_percent()),
        answers,
        revealed,
        can_submit: !revealed && session.selected().is_some(),
        advance_label: if session.is_last_question() {
            "See Results"
        } else {
            "Next Question"
        },
    })
}

#[must_use]
pub fn map_game_over(session: &QuizSession) -> Option<GameOverVm> {
    (session.phase() == QuizPhase::Finished).then(|| GameOverVm {
        final_score_label: format!("Final Score: {}/{}", session.score(), session.total()),
        accuracy_label: format!("({}% correct)", session.accuracy_percent()),
    })
}
