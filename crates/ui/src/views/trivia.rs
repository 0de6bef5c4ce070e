mod board;
mod runner;
mod scripts;
mod state;
mod view;

pub use runner::RunnerPanel;
pub use state::{Notice, TriviaIntent};
pub use view::TriviaView;

#[cfg(test)]
pub(crate) use state::TriviaState;
#[cfg(test)]
pub(crate) use view::TriviaTestHandles;
