use std::path::PathBuf;

use dioxus::prelude::*;
use trivia_core::QuizPhase;

use crate::context::{AppContext, LaunchRequest};
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{
    QuizIntent, create_share_link, load_question_file, load_shared_game, map_game_over,
    map_question_board, map_setup,
};

use super::board::{GameOverCard, QuestionBoard, SetupCard};
use super::runner::RunnerPanel;
use super::scripts::copy_to_clipboard;
use super::state::{Notice, TriviaIntent, use_trivia_state};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// The whole game: setup card, question board, results and runner.
///
/// `launch` is loaded once when the view mounts. A failed launch load
/// becomes an ordinary notice so the next successful load clears it.
#[component]
pub fn TriviaView(#[props(!optional)] launch: Option<LaunchRequest>) -> Element {
    let ctx = use_context::<AppContext>();
    let loader = ctx.question_loader();
    let share_service = ctx.share_service();
    let state = use_trivia_state();

    let loading_label = match &launch {
        Some(LaunchRequest::Game(_)) => "Loading shared game...",
        Some(LaunchRequest::Csv(_)) => "Loading questions...",
        None => "",
    };

    let loader_for_resource = loader.clone();
    let resource = use_resource(move || {
        let loader = loader_for_resource.clone();
        let launch = launch.clone();
        async move {
            let result = match launch {
                None => return Ok::<(), ViewError>(()),
                Some(LaunchRequest::Game(raw)) => load_shared_game(&loader, &raw).await,
                Some(LaunchRequest::Csv(path)) => load_question_file(&loader, &path).await,
            };
            match result {
                Ok(loaded) => state.install(loaded),
                Err(err) => state.fail(err),
            }
            Ok(())
        }
    });
    let view_state = view_state_from_resource(&resource);

    let dispatch_intent = use_callback(move |intent: TriviaIntent| match intent {
        TriviaIntent::Quiz(quiz_intent) => {
            let mut session = state.session;
            let applied = session.with_mut(|session| quiz_intent.apply(session));
            if applied && quiz_intent == QuizIntent::Start {
                state.clear_notice();
            }
        }
        TriviaIntent::LoadFile => {
            let path = PathBuf::from(state.csv_path.read().trim());
            let loader = loader.clone();
            let mut busy = state.busy;
            busy.set(true);
            spawn(async move {
                match load_question_file(&loader, &path).await {
                    Ok(loaded) => state.install(loaded),
                    Err(err) => state.fail(err),
                }
                busy.set(false);
            });
        }
        TriviaIntent::OpenLink => {
            let raw = state.link_input.read().trim().to_string();
            let loader = loader.clone();
            let mut busy = state.busy;
            busy.set(true);
            spawn(async move {
                match load_shared_game(&loader, &raw).await {
                    Ok(loaded) => state.install(loaded),
                    Err(err) => state.fail(err),
                }
                busy.set(false);
            });
        }
        TriviaIntent::Share => {
            let Some(loaded) = state.loaded.read().clone() else {
                return;
            };
            if !loaded.can_share() {
                return;
            }
            let share_service = share_service.clone();
            let mut busy = state.busy;
            busy.set(true);
            spawn(async move {
                match create_share_link(&share_service, &loaded).await {
                    Ok(url) => {
                        let copied = copy_to_clipboard(&url).await;
                        let mut share_url = state.share_url;
                        let mut notice = state.notice;
                        share_url.set(Some(url));
                        notice.set(Some(Notice::after_share(copied)));
                    }
                    Err(err) => state.fail(err),
                }
                busy.set(false);
            });
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<TriviaTestHandles>() {
                handles.register(dispatch_intent, state);
            }
        }
    }

    let notice = *state.notice.read();
    let session = state.session.read();
    let phase = session.phase();
    let setup = map_setup(state.loaded.read().as_ref());
    let board = map_question_board(&session);
    let game_over = map_game_over(&session);
    let correct = session.score();
    let total = session.total();
    let runner_active = session.is_active();
    let busy = *state.busy.read();
    let share_url = state.share_url.read().clone();

    rsx! {
        div { class: "page trivia-page",
            if matches!(view_state, ViewState::Loading) && !loading_label.is_empty() {
                div { class: "card loading",
                    div { class: "loading__spinner" }
                    p { "{loading_label}" }
                }
            } else {
                if let Some(notice) = notice {
                    p { class: "{notice.class()}", role: "status", "{notice.text()}" }
                }
                if phase == QuizPhase::NotStarted {
                    SetupCard {
                        vm: setup,
                        csv_path: state.csv_path,
                        link_input: state.link_input,
                        share_url,
                        busy,
                        on_intent: dispatch_intent,
                    }
                } else {
                    if let Some(vm) = board {
                        QuestionBoard { vm, on_intent: dispatch_intent }
                    }
                    if let Some(vm) = game_over {
                        GameOverCard { vm, on_intent: dispatch_intent }
                    }
                    RunnerPanel { correct, total, active: runner_active }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct TriviaTestHandles {
    dispatch: Rc<RefCell<Option<Callback<TriviaIntent>>>>,
    state: Rc<RefCell<Option<super::state::TriviaState>>>,
}

#[cfg(test)]
impl TriviaTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<TriviaIntent>,
        state: super::state::TriviaState,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.state.borrow_mut() = Some(state);
    }

    pub(crate) fn dispatch(&self) -> Callback<TriviaIntent> {
        (*self.dispatch.borrow()).expect("trivia dispatch registered")
    }

    pub(crate) fn state(&self) -> super::state::TriviaState {
        (*self.state.borrow()).expect("trivia state registered")
    }
}
