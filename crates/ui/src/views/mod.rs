mod home;
mod state;
mod trivia;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use home::{HomeView, SharedGameView};
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use trivia::{Notice, RunnerPanel, TriviaIntent, TriviaView};
