use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;
use std::task::{Context, Poll};

use dioxus::core::NoOpMutations;
use dioxus::document::{Document, Eval, EvalError, Evaluator};
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{Clock, QuestionLoader, ShareService};
use storage::{ShareRepository, Storage};
use trivia_core::time::fixed_now;
use url::Url;

use crate::context::{UiApp, build_app_context};
use crate::views::trivia::{TriviaIntent, TriviaState, TriviaTestHandles};
use crate::views::{HomeView, SharedGameView};

/// Webview stand-in: every script resolves to whether the clipboard accepted
/// the write.
struct ClipboardDocument {
    owner: generational_box::Owner,
    writable: Rc<Cell<bool>>,
}

struct ClipboardEval {
    copied: bool,
}

impl Evaluator for ClipboardEval {
    fn send(&self, _data: serde_json::Value) -> Result<(), EvalError> {
        Ok(())
    }

    fn poll_recv(&mut self, _cx: &mut Context<'_>) -> Poll<Result<serde_json::Value, EvalError>> {
        Poll::Ready(Err(EvalError::Finished))
    }

    fn poll_join(&mut self, _cx: &mut Context<'_>) -> Poll<Result<serde_json::Value, EvalError>> {
        Poll::Ready(Ok(serde_json::Value::Bool(self.copied)))
    }
}

impl Document for ClipboardDocument {
    fn eval(&self, _js: String) -> Eval {
        let evaluator: Box<dyn Evaluator> = Box::new(ClipboardEval {
            copied: self.writable.get(),
        });
        Eval::new(self.owner.insert(evaluator))
    }
}

#[derive(Clone)]
struct TestApp {
    loader: Arc<QuestionLoader>,
    share: Arc<ShareService>,
    launch_csv: Option<PathBuf>,
}

impl UiApp for TestApp {
    fn question_loader(&self) -> Arc<QuestionLoader> {
        Arc::clone(&self.loader)
    }

    fn share_service(&self) -> Arc<ShareService> {
        Arc::clone(&self.share)
    }

    fn launch_csv(&self) -> Option<PathBuf> {
        self.launch_csv.clone()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    SharedGame(String),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    handles: TriviaTestHandles,
    clipboard: Rc<Cell<bool>>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(app));
    use_context_provider(|| props.view.clone());
    use_context_provider(|| props.handles.clone());
    use_context_provider(|| {
        Rc::new(ClipboardDocument {
            owner: generational_box::Owner::default(),
            writable: Rc::clone(&props.clipboard),
        }) as Rc<dyn Document>
    });
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::SharedGame(game_id) => rsx! { SharedGameView { game_id } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    pub loader: Arc<QuestionLoader>,
    pub share: Arc<ShareService>,
    handles: TriviaTestHandles,
    clipboard: Rc<Cell<bool>>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn drive(&mut self) {
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Let spawned loads and share calls finish.
    pub async fn settle(&mut self) {
        for _ in 0..4 {
            self.drive_async().await;
        }
    }

    pub fn dispatch(&mut self, intent: TriviaIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    /// Make later clipboard writes fail, as in a webview without clipboard access.
    pub fn deny_clipboard(&self) {
        self.clipboard.set(false);
    }

    pub fn state(&self) -> TriviaState {
        self.handles.state()
    }

    pub fn share_url(&self) -> Option<String> {
        let state = self.state();
        self.dom.in_runtime(|| (*state.share_url.peek()).clone())
    }

    pub fn has_questions(&self) -> bool {
        let state = self.state();
        self.dom.in_runtime(|| state.loaded.peek().is_some())
    }

    pub fn set_input(&mut self, field: InputField, value: &str) {
        let state = self.handles.state();
        let mut signal = match field {
            InputField::CsvPath => state.csv_path,
            InputField::Link => state.link_input,
        };
        self.dom.in_runtime(|| signal.set(value.to_string()));
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

#[derive(Clone, Copy)]
pub enum InputField {
    CsvPath,
    Link,
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn share_base() -> Url {
    Url::parse("https://trivia.example.com/").unwrap()
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let storage = Storage::in_memory();
    let shares = Arc::clone(&storage.shares);
    setup_view_harness_with(view, storage, shares, None)
}

/// `share_repo` backs only the share button; loads go through `storage`.
pub fn setup_view_harness_with(
    view: ViewKind,
    storage: Storage,
    share_repo: Arc<dyn ShareRepository>,
    launch_csv: Option<PathBuf>,
) -> ViewHarness {
    let clock = Clock::fixed(fixed_now());
    let loader = Arc::new(QuestionLoader::new(Arc::clone(&storage.shares)));
    let share = Arc::new(ShareService::new(clock, share_repo, share_base()));
    let handles = TriviaTestHandles::default();
    let clipboard = Rc::new(Cell::new(true));

    let app = Arc::new(TestApp {
        loader: Arc::clone(&loader),
        share: Arc::clone(&share),
        launch_csv,
    });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            handles: handles.clone(),
            clipboard: Rc::clone(&clipboard),
        },
    );

    ViewHarness {
        dom,
        storage,
        loader,
        share,
        handles,
        clipboard,
    }
}
