#![forbid(unsafe_code)]

pub mod model;
pub mod quiz;
pub mod runner;
pub mod time;

pub use quiz::{AnswerDisplay, QuizPhase, QuizSession};
pub use runner::{RunnerSignal, RunnerVariant};
pub use time::Clock;
