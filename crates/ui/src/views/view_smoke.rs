use std::sync::Arc;

use quiz_core::model::QuestionRecord;
use services::{QuestionCount, QuizAction};
use storage::{QuestionBankSource, StorageError};

use super::test_harness::{setup_board_harness, setup_in_memory_screen, setup_screen_harness};

fn start_geography() -> QuizAction {
    QuizAction::StartQuiz {
        topic: "Geography".into(),
        count: QuestionCount::All,
    }
}

#[tokio::test(flavor = "current_thread")]
async fn screen_smoke_renders_home_after_load() {
    let mut harness = setup_in_memory_screen();
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Select Topic"), "missing selector in {html}");
    assert!(html.contains("Geography"), "missing topic in {html}");
    assert!(html.contains("Science"), "missing topic in {html}");
    assert!(html.contains("Leave empty for all"), "missing placeholder in {html}");
    assert!(html.contains("Start Quiz"), "missing start button in {html}");
    assert!(!html.contains("Correct:"), "score should be hidden in {html}");
}

struct BrokenSource;

#[async_trait::async_trait]
impl QuestionBankSource for BrokenSource {
    async fn load_questions(&self) -> Result<Vec<QuestionRecord>, StorageError> {
        Err(StorageError::NoWorksheet)
    }

    fn describe(&self) -> String {
        "broken".to_string()
    }
}

#[tokio::test(flavor = "current_thread")]
async fn screen_smoke_renders_load_failure() {
    let mut harness = setup_screen_harness(Arc::new(BrokenSource));
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("Failed to load questions file."),
        "missing load failure in {html}"
    );
    assert!(!html.contains("Start Quiz"), "selector should be hidden in {html}");
}

#[test]
fn board_smoke_renders_first_question() {
    let mut harness = setup_board_harness(vec![start_geography()]);
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Capital of Italy?"), "missing prompt in {html}");
    assert!(html.contains("Correct: 0 | Wrong: 0"), "missing score in {html}");
    assert!(html.contains("Question 1 of 2"), "missing position in {html}");
    assert!(html.contains("Exit"), "missing exit in {html}");
    assert!(!html.contains("Next"), "next should wait for an answer in {html}");
    assert!(!html.contains("Select Topic"), "selector should be hidden in {html}");
}

#[test]
fn board_smoke_renders_reveal() {
    let mut harness = setup_board_harness(vec![start_geography(), QuizAction::Choose(2)]);
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Correct: 0 | Wrong: 1"), "missing score in {html}");
    assert!(html.contains("Correct Answer: Rome"), "missing answer in {html}");
    assert!(
        html.contains("Rome became the capital in 1871."),
        "missing explanation in {html}"
    );
    assert!(html.contains("choice-btn wrong"), "missing wrong mark in {html}");
    assert!(html.contains("choice-btn correct"), "missing correct mark in {html}");
    assert!(html.contains("Next"), "missing next in {html}");
}

#[test]
fn board_smoke_renders_completion() {
    let mut harness = setup_board_harness(vec![
        QuizAction::StartQuiz {
            topic: "Science".into(),
            count: QuestionCount::All,
        },
        QuizAction::Choose(1),
        QuizAction::Next,
    ]);
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Test Completed"), "missing title in {html}");
    assert!(html.contains("Correct: 1 | Wrong: 0"), "missing summary in {html}");
    assert!(html.contains("Question 1 of 1"), "missing position in {html}");
    assert!(html.contains("Return Home"), "missing return in {html}");
}

#[test]
fn board_smoke_renders_exited_without_tallies() {
    let mut harness = setup_board_harness(vec![start_geography(), QuizAction::Exit]);
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Quiz Exited"), "missing title in {html}");
    assert!(html.contains("Return Home"), "missing return in {html}");
    assert!(!html.contains("Wrong:"), "score should be hidden in {html}");
    assert!(!html.contains("Question 1"), "position should be hidden in {html}");
}

#[test]
fn board_smoke_renders_empty_selection_notice() {
    let mut harness = setup_board_harness(vec![QuizAction::StartQuiz {
        topic: "History".into(),
        count: QuestionCount::All,
    }]);
    harness.rebuild();

    let html = harness.render();
    assert!(
        html.contains("No questions available for the selected topic."),
        "missing notice in {html}"
    );
    assert!(html.contains("Select Topic"), "selector should stay visible in {html}");
}
