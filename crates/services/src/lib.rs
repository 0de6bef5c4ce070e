#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod loader;
pub mod runner;
pub mod share_service;

pub use trivia_core::Clock;

pub use app_services::AppServices;
pub use error::{AppServicesError, LoadError, ShareError};
pub use loader::{LoadedQuestions, QuestionLoader, QuestionSource};
pub use runner::RunnerTicker;
pub use share_service::{ShareLink, ShareService, game_id_from_link, share_url};
