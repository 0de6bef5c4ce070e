use dioxus::prelude::*;

use crate::context::{AppContext, LaunchRequest};
use crate::views::TriviaView;

/// Start screen; picks up a game or question file passed at launch.
#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let launch = use_hook(|| ctx.take_launch_request());

    rsx! {
        TriviaView { launch }
    }
}

#[component]
pub fn SharedGameView(game_id: String) -> Element {
    rsx! {
        TriviaView { launch: Some(LaunchRequest::Game(game_id)) }
    }
}
