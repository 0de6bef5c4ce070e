use std::path::PathBuf;
use std::sync::Arc;

use services::{LoadedQuestions, QuestionLoader, game_id_from_link};
use storage::{ShareRecord, ShareRepository, Storage, StorageError};
use trivia_core::model::{AnswerSlot, GameId};

use crate::views::TriviaIntent;
use crate::vm::QuizIntent;

use super::test_harness::{
    InputField, ViewKind, setup_view_harness, setup_view_harness_with,
};

const SCENARIO_A: &str = "\
question,answer1,answer2,answer3,answer4,correct_index
Capital of Italy?,Rome,Paris,Oslo,Bern,1
Largest planet?,Mars,Jupiter,Venus,Earth,2
Fastest land animal?,Cheetah,Horse,Lion,Hare,1
";

fn write_questions(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("trivia-ui-{}-{name}.csv", std::process::id()));
    std::fs::write(&path, SCENARIO_A).expect("write question file");
    path
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_setup_card() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Trivia Challenge"), "missing title in {html}");
    assert!(html.contains("Upload Your Questions"), "missing upload in {html}");
    assert!(html.contains("Start Challenge"), "missing start in {html}");
    assert!(!html.contains("Generate Share Link"), "unexpected share in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn shared_game_view_smoke_loads_questions_without_share() {
    let mut harness = setup_view_harness(ViewKind::Home);
    let questions = QuestionLoader::parse_csv(SCENARIO_A).expect("parse");
    let link = harness
        .share
        .share(&LoadedQuestions::uploaded(questions))
        .await
        .expect("share");

    let mut harness = setup_view_harness_with(
        ViewKind::SharedGame(link.game_id.to_string()),
        harness.storage.clone(),
        Arc::clone(&harness.storage.shares),
        None,
    );
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    let expected = format!("Shared game {}: 3 questions", link.game_id);
    assert!(html.contains(&expected), "missing {expected} in {html}");
    assert!(!html.contains("Generate Share Link"), "shared game offers share in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn shared_game_view_smoke_reports_unknown_game() {
    let mut harness = setup_view_harness(ViewKind::SharedGame("nosuchgame".into()));
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(
        html.contains("Error loading the shared game. Please try again."),
        "missing error in {html}"
    );
    assert!(html.contains("Start Challenge"), "setup not shown in {html}");
    assert!(!html.contains("questions loaded"), "unexpected questions in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_smoke_plays_through_to_final_score() {
    let path = write_questions("play");
    let storage = Storage::in_memory();
    let shares = Arc::clone(&storage.shares);
    let mut harness =
        setup_view_harness_with(ViewKind::Home, storage, shares, Some(path.clone()));
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("3 questions loaded"), "missing count in {html}");

    harness.dispatch(TriviaIntent::Quiz(QuizIntent::Start));
    let html = harness.render();
    assert!(html.contains("Question 1/3"), "missing position in {html}");
    assert!(html.contains("Speed: 1.0x"), "missing runner in {html}");

    for (answer, next) in [
        (AnswerSlot::FIRST, "Question 2/3"),
        (AnswerSlot::THIRD, "Question 3/3"),
        (AnswerSlot::FIRST, "Game Over!"),
    ] {
        harness.dispatch(TriviaIntent::Quiz(QuizIntent::Select(answer)));
        harness.dispatch(TriviaIntent::Quiz(QuizIntent::Submit));
        let html = harness.render();
        assert!(html.contains("answer--correct"), "answer not revealed in {html}");
        harness.dispatch(TriviaIntent::Quiz(QuizIntent::Advance));
        let html = harness.render();
        assert!(html.contains(next), "missing {next} in {html}");
    }

    let html = harness.render();
    assert!(html.contains("Final Score: 2/3"), "missing score in {html}");
    assert!(html.contains("(67% correct)"), "missing accuracy in {html}");
    assert!(html.contains("Correct: 2/3"), "missing runner stats in {html}");

    harness.dispatch(TriviaIntent::Quiz(QuizIntent::Restart));
    let html = harness.render();
    assert!(html.contains("Start Challenge"), "missing setup in {html}");
    assert!(html.contains("3 questions loaded"), "questions dropped in {html}");

    let _ = std::fs::remove_file(path);
}

#[tokio::test(flavor = "current_thread")]
async fn share_smoke_publishes_link() {
    let path = write_questions("share");
    let storage = Storage::in_memory();
    let shares = Arc::clone(&storage.shares);
    let mut harness =
        setup_view_harness_with(ViewKind::Home, storage, shares, Some(path.clone()));
    harness.rebuild();
    harness.settle().await;

    harness.dispatch(TriviaIntent::Share);
    harness.settle().await;
    let html = harness.render();
    assert!(
        html.contains("Share link copied to clipboard!"),
        "missing notice in {html}"
    );
    assert!(
        html.contains("https://trivia.example.com/?gameId="),
        "missing link in {html}"
    );

    let url = harness.share_url().expect("share url");
    let game_id = game_id_from_link(&url).expect("game id");
    let loaded = harness.loader.load_shared(&game_id).await.expect("stored");
    assert_eq!(loaded.questions.len(), 3);

    harness.dispatch(TriviaIntent::Quiz(QuizIntent::Start));
    let html = harness.render();
    assert!(html.contains("Question 1/3"), "missing position in {html}");
    assert!(!html.contains("copied to clipboard"), "notice kept during play in {html}");

    let _ = std::fs::remove_file(path);
}

#[tokio::test(flavor = "current_thread")]
async fn share_smoke_reports_clipboard_failure_and_keeps_link() {
    let path = write_questions("share-no-clipboard");
    let storage = Storage::in_memory();
    let shares = Arc::clone(&storage.shares);
    let mut harness =
        setup_view_harness_with(ViewKind::Home, storage, shares, Some(path.clone()));
    harness.deny_clipboard();
    harness.rebuild();
    harness.settle().await;

    harness.dispatch(TriviaIntent::Share);
    harness.settle().await;
    let html = harness.render();
    assert!(
        !html.contains("Share link copied to clipboard!"),
        "copy claimed in {html}"
    );
    assert!(
        html.contains("Share link created, but it could not be copied."),
        "missing clipboard error in {html}"
    );
    assert!(
        html.contains("https://trivia.example.com/?gameId="),
        "link hidden in {html}"
    );
    assert!(harness.share_url().is_some());

    let _ = std::fs::remove_file(path);
}

#[tokio::test(flavor = "current_thread")]
async fn failed_launch_notice_clears_after_next_load() {
    let path = write_questions("after-failed-launch");
    let mut harness = setup_view_harness(ViewKind::SharedGame("nosuchgame".into()));
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(
        html.contains("Error loading the shared game."),
        "missing launch error in {html}"
    );

    harness.set_input(InputField::CsvPath, path.to_str().expect("utf-8 path"));
    harness.dispatch(TriviaIntent::LoadFile);
    harness.settle().await;
    let html = harness.render();
    assert!(harness.has_questions());
    assert!(html.contains("3 questions loaded"), "missing count in {html}");
    assert!(
        !html.contains("Error loading the shared game."),
        "launch error kept after load in {html}"
    );

    harness.dispatch(TriviaIntent::Quiz(QuizIntent::Start));
    let html = harness.render();
    assert!(html.contains("Question 1/3"), "missing position in {html}");
    assert!(
        !html.contains("Error loading the shared game."),
        "launch error kept during play in {html}"
    );

    let _ = std::fs::remove_file(path);
}

#[tokio::test(flavor = "current_thread")]
async fn paste_link_smoke_opens_shared_game() {
    let mut harness = setup_view_harness(ViewKind::Home);
    let questions = QuestionLoader::parse_csv(SCENARIO_A).expect("parse");
    let link = harness
        .share
        .share(&LoadedQuestions::uploaded(questions))
        .await
        .expect("share");
    harness.rebuild();

    harness.set_input(InputField::Link, link.url.as_str());
    harness.dispatch(TriviaIntent::OpenLink);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Shared game"), "missing shared label in {html}");
    assert!(!html.contains("Generate Share Link"), "shared game offers share in {html}");

    harness.set_input(InputField::Link, "https://trivia.example.com/?other=1");
    harness.dispatch(TriviaIntent::OpenLink);
    harness.settle().await;
    let html = harness.render();
    assert!(
        html.contains("That link does not contain a game id."),
        "missing link error in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn missing_file_smoke_reports_error() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    harness.set_input(InputField::CsvPath, "/definitely/not/here.csv");
    harness.dispatch(TriviaIntent::LoadFile);
    harness.settle().await;
    let html = harness.render();
    assert!(
        html.contains("Error loading the question file"),
        "missing file error in {html}"
    );
    harness.drive();
    assert!(!harness.has_questions());
}

struct FailingShareRepo;

#[async_trait::async_trait]
impl ShareRepository for FailingShareRepo {
    async fn insert_share(&self, _record: &ShareRecord) -> Result<(), StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn get_share(&self, _game_id: &GameId) -> Result<ShareRecord, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn share_smoke_renders_error_state() {
    let path = write_questions("share-fail");
    let mut harness = setup_view_harness_with(
        ViewKind::Home,
        Storage::in_memory(),
        Arc::new(FailingShareRepo),
        Some(path.clone()),
    );
    harness.rebuild();
    harness.settle().await;

    harness.dispatch(TriviaIntent::Share);
    harness.settle().await;
    let html = harness.render();
    assert!(
        html.contains("Error creating share link. Please try again."),
        "missing error in {html}"
    );
    assert!(html.contains("3 questions loaded"), "questions dropped in {html}");
    assert!(!html.contains("gameId="), "unexpected link in {html}");

    let _ = std::fs::remove_file(path);
}
