use trivia_core::runner::running_accuracy;
use trivia_core::{RunnerSignal, RunnerVariant};

/// Seconds per stride at base speed; faster runners take shorter strides.
const BASE_STRIDE_SECS: f64 = 0.6;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunnerStatsVm {
    pub speed_label: String,
    pub distance_label: String,
    pub correct_label: String,
    pub accuracy_label: String,
    pub figure_class: &'static str,
    pub figure_style: String,
}

#[must_use]
pub fn map_runner_stats(
    signal: RunnerSignal,
    distance: f64,
    correct: u32,
    total: usize,
) -> RunnerStatsVm {
    let accuracy_label = if total == 0 {
        "Accuracy: 0%".to_string()
    } else {
        format!("Accuracy: {:.1}%", running_accuracy(correct, total))
    };
    let figure_class = match signal.variant() {
        RunnerVariant::Jog => "runner-figure runner-figure--jog",
        RunnerVariant::Sprint => "runner-figure runner-figure--sprint",
    };
    let play_state = if signal.active { "running" } else { "paused" };
    let stride = BASE_STRIDE_SECS / signal.speed.max(f64::EPSILON);

    RunnerStatsVm {
        speed_label: format!("Speed: {:.1}x", signal.speed),
        distance_label: format!("Distance: {:.0}m", distance.max(0.0).floor()),
        correct_label: format!("Correct: {correct}/{total}"),
        accuracy_label,
        figure_class,
        figure_style: format!("animation-duration: {stride:.2}s; animation-play-state: {play_state};"),
    }
}
