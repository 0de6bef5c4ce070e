use dioxus::prelude::*;

use crate::vm::{GameOverVm, QuestionBoardVm, QuizIntent, SetupVm};

use super::state::TriviaIntent;

#[component]
pub(super) fn SetupCard(
    vm: SetupVm,
    csv_path: Signal<String>,
    link_input: Signal<String>,
    #[props(!optional)] share_url: Option<String>,
    busy: bool,
    on_intent: EventHandler<TriviaIntent>,
) -> Element {
    let mut csv_path = csv_path;
    let mut link_input = link_input;

    rsx! {
        div { class: "card setup",
            header { class: "setup__header",
                h1 { class: "setup__title", "Trivia Challenge" }
                p { class: "setup__subtitle", "Test your knowledge and have fun!" }
            }
            div { class: "setup__section",
                label { class: "setup__label", r#for: "setup-csv", "Upload Your Questions" }
                div { class: "setup__row",
                    input {
                        id: "setup-csv",
                        class: "setup__input",
                        r#type: "text",
                        placeholder: "/path/to/questions.csv",
                        value: "{csv_path}",
                        oninput: move |evt| csv_path.set(evt.value()),
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        disabled: busy || csv_path.read().trim().is_empty(),
                        onclick: move |_| on_intent.call(TriviaIntent::LoadFile),
                        "Load File"
                    }
                }
            }
            div { class: "setup__section",
                label { class: "setup__label", r#for: "setup-link", "Open a Shared Game" }
                div { class: "setup__row",
                    input {
                        id: "setup-link",
                        class: "setup__input",
                        r#type: "text",
                        placeholder: "Paste a share link or game id",
                        value: "{link_input}",
                        oninput: move |evt| link_input.set(evt.value()),
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        disabled: busy || link_input.read().trim().is_empty(),
                        onclick: move |_| on_intent.call(TriviaIntent::OpenLink),
                        "Open"
                    }
                }
            }
            if let Some(label) = vm.loaded_label.as_deref() {
                div { class: "setup__loaded",
                    p { class: "setup__count", "{label}" }
                    if vm.can_share {
                        button {
                            class: "btn btn-share",
                            id: "setup-share",
                            r#type: "button",
                            disabled: busy,
                            onclick: move |_| on_intent.call(TriviaIntent::Share),
                            "Generate Share Link"
                        }
                    }
                    if let Some(url) = share_url.as_deref() {
                        p { class: "setup__share-url", "{url}" }
                    }
                }
            }
            button {
                class: "btn btn-primary",
                id: "setup-start",
                r#type: "button",
                disabled: !vm.can_start,
                onclick: move |_| on_intent.call(TriviaIntent::Quiz(QuizIntent::Start)),
                "Start Challenge"
            }
        }
    }
}

#[component]
pub(super) fn QuestionBoard(vm: QuestionBoardVm, on_intent: EventHandler<TriviaIntent>) -> Element {
    rsx! {
        div { class: "card board",
            div { class: "board__progress",
                div { class: "board__progress-fill", style: "width: {vm.progress_width};" }
            }
            div { class: "board__meta",
                span { class: "board__position", "{vm.position_label}" }
                span { class: "board__score", "Score: {vm.score}" }
            }
            h2 { class: "board__prompt", "{vm.prompt}" }
            div { class: "board__answers",
                for answer in vm.answers.iter().cloned() {
                    button {
                        key: "{answer.slot.value()}",
                        class: "{answer.class}",
                        r#type: "button",
                        disabled: answer.locked,
                        onclick: move |_| on_intent.call(TriviaIntent::Quiz(QuizIntent::Select(answer.slot))),
                        span { class: "answer__letter", "{answer.letter}" }
                        span { class: "answer__text", "{answer.text}" }
                    }
                }
            }
            if vm.revealed {
                button {
                    class: "btn btn-primary",
                    id: "board-advance",
                    r#type: "button",
                    onclick: move |_| on_intent.call(TriviaIntent::Quiz(QuizIntent::Advance)),
                    "{vm.advance_label}"
                }
            } else {
                button {
                    class: "btn btn-primary",
                    id: "board-submit",
                    r#type: "button",
                    disabled: !vm.can_submit,
                    onclick: move |_| on_intent.call(TriviaIntent::Quiz(QuizIntent::Submit)),
                    "Submit Answer"
                }
            }
        }
    }
}

#[component]
pub(super) fn GameOverCard(vm: GameOverVm, on_intent: EventHandler<TriviaIntent>) -> Element {
    rsx! {
        div { class: "card game-over",
            h3 { class: "game-over__title", "Game Over!" }
            p { class: "game-over__score", "{vm.final_score_label}" }
            p { class: "game-over__accuracy", "{vm.accuracy_label}" }
            button {
                class: "btn btn-primary",
                id: "game-over-restart",
                r#type: "button",
                onclick: move |_| on_intent.call(TriviaIntent::Quiz(QuizIntent::Restart)),
                "Play Again"
            }
        }
    }
}
