use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use services::{QuestionLoader, ShareService};

/// What the first screen should load on its own when the app opens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LaunchRequest {
    /// A share link or bare game id.
    Game(String),
    /// A question file on disk.
    Csv(PathBuf),
}

pub trait UiApp: Send + Sync {
    fn question_loader(&self) -> Arc<QuestionLoader>;
    fn share_service(&self) -> Arc<ShareService>;

    /// Shared game requested on the command line, if any.
    fn launch_game(&self) -> Option<String> {
        None
    }

    /// Question file requested on the command line, if any.
    fn launch_csv(&self) -> Option<PathBuf> {
        None
    }
}

#[derive(Clone)]
pub struct AppContext {
    question_loader: Arc<QuestionLoader>,
    share_service: Arc<ShareService>,
    launch_once: Arc<Mutex<Option<LaunchRequest>>>,
}

impl AppContext {
    /// A requested game wins over a requested question file.
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let launch = app
            .launch_game()
            .map(LaunchRequest::Game)
            .or_else(|| app.launch_csv().map(LaunchRequest::Csv));

        Self {
            question_loader: app.question_loader(),
            share_service: app.share_service(),
            launch_once: Arc::new(Mutex::new(launch)),
        }
    }

    /// Hands out the launch request once; later calls return `None`.
    #[must_use]
    pub fn take_launch_request(&self) -> Option<LaunchRequest> {
        self.launch_once.lock().ok().and_then(|mut slot| slot.take())
    }

    #[must_use]
    pub fn question_loader(&self) -> Arc<QuestionLoader> {
        Arc::clone(&self.question_loader)
    }

    #[must_use]
    pub fn share_service(&self) -> Arc<ShareService> {
        Arc::clone(&self.share_service)
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: Arc<dyn UiApp>) -> AppContext {
    AppContext::new(&app)
}
