use dioxus::prelude::*;
use services::LoadedQuestions;
use trivia_core::QuizSession;
use trivia_core::model::QuestionSet;

use crate::views::ViewError;

/// Transient message shown above the game card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    ShareCopied,
    Error(ViewError),
}

impl Notice {
    /// Notice for a share link that was created; only a confirmed copy says so.
    #[must_use]
    pub fn after_share(copied: bool) -> Self {
        if copied {
            Self::ShareCopied
        } else {
            Self::Error(ViewError::ClipboardCopy)
        }
    }

    #[must_use]
    pub fn text(self) -> &'static str {
        match self {
            Self::ShareCopied => "Share link copied to clipboard!",
            Self::Error(err) => err.message(),
        }
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::ShareCopied => "notice notice--info",
            Self::Error(_) => "notice notice--error",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriviaIntent {
    Quiz(crate::vm::QuizIntent),
    LoadFile,
    OpenLink,
    Share,
}

#[derive(Clone, Copy)]
pub(crate) struct TriviaState {
    pub loaded: Signal<Option<LoadedQuestions>>,
    pub session: Signal<QuizSession>,
    pub notice: Signal<Option<Notice>>,
    pub share_url: Signal<Option<String>>,
    pub csv_path: Signal<String>,
    pub link_input: Signal<String>,
    pub busy: Signal<bool>,
}

impl TriviaState {
    /// Replace the question set and drop any game in progress.
    pub(crate) fn install(self, questions: LoadedQuestions) {
        let mut loaded = self.loaded;
        let mut session = self.session;
        let mut share_url = self.share_url;
        let mut notice = self.notice;
        session.set(QuizSession::new(questions.questions.clone()));
        loaded.set(Some(questions));
        share_url.set(None);
        notice.set(None);
    }

    pub(crate) fn fail(self, err: ViewError) {
        let mut notice = self.notice;
        notice.set(Some(Notice::Error(err)));
    }

    pub(crate) fn clear_notice(self) {
        let mut notice = self.notice;
        notice.set(None);
    }
}

pub(crate) fn use_trivia_state() -> TriviaState {
    TriviaState {
        loaded: use_signal(|| None),
        session: use_signal(|| QuizSession::new(QuestionSet::default())),
        notice: use_signal(|| None),
        share_url: use_signal(|| None),
        csv_path: use_signal(String::new),
        link_input: use_signal(String::new),
        busy: use_signal(|| false),
    }
}
