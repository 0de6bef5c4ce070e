use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use services::RunnerTicker;
use trivia_core::RunnerSignal;

use crate::vm::map_runner_stats;

/// 2D runner whose pace follows the number of correct answers.
///
/// Owns a `RunnerTicker`; it moves only while `active` and is torn down with
/// the component.
#[component]
pub fn RunnerPanel(correct: u32, total: usize, active: bool) -> Element {
    let signal = RunnerSignal::new(correct, active);
    let ticker = use_hook(|| Rc::new(RefCell::new(RunnerTicker::default())));
    let mut distance = use_signal(|| 0.0_f64);

    ticker.borrow_mut().apply(signal);

    let ticker_for_updates = Rc::clone(&ticker);
    use_future(move || {
        let mut updates = ticker_for_updates.borrow().subscribe();
        async move {
            while updates.changed().await.is_ok() {
                let value = *updates.borrow_and_update();
                distance.set(value);
            }
        }
    });

    let stats = map_runner_stats(signal, distance(), correct, total);

    rsx! {
        section { class: "runner",
            div { class: "runner__stats",
                span { class: "runner__stat", "{stats.speed_label}" }
                span { class: "runner__stat", "{stats.distance_label}" }
            }
            div { class: "runner__track",
                svg {
                    class: "{stats.figure_class}",
                    style: "{stats.figure_style}",
                    view_box: "0 0 40 60",
                    width: "40",
                    height: "60",
                    circle { cx: "20", cy: "8", r: "6" }
                    line { x1: "20", y1: "14", x2: "20", y2: "36" }
                    line { class: "runner-figure__arm", x1: "20", y1: "20", x2: "8", y2: "30" }
                    line { class: "runner-figure__arm runner-figure__arm--back", x1: "20", y1: "20", x2: "32", y2: "28" }
                    line { class: "runner-figure__leg", x1: "20", y1: "36", x2: "10", y2: "56" }
                    line { class: "runner-figure__leg runner-figure__leg--back", x1: "20", y1: "36", x2: "30", y2: "56" }
                }
            }
            div { class: "runner__stats runner__stats--footer",
                span { class: "runner__stat", "{stats.correct_label}" }
                span { class: "runner__stat", "{stats.accuracy_label}" }
            }
        }
    }
}
