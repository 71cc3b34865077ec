use std::path::PathBuf;

use quiz_core::model::QuestionRecord;
use storage::xlsx::parse_workbook;
use storage::{BankLocation, QuestionBankSource, Storage, StorageError, XlsxBank};

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("quiz-storage-{}-{name}", std::process::id()))
}

#[tokio::test]
async fn missing_file_is_an_io_failure() {
    let bank = XlsxBank::new(BankLocation::File(scratch_path("missing.xlsx")));
    let err = bank.load_questions().await.unwrap_err();
    assert!(matches!(err, StorageError::Io(_)), "unexpected error: {err}");
}

#[tokio::test]
async fn unreadable_workbook_is_a_parse_failure() {
    let path = scratch_path("garbage.xlsx");
    tokio::fs::write(&path, b"PK\x03\x04 but not really a zip")
        .await
        .unwrap();

    let storage = Storage::xlsx(BankLocation::File(path.clone()));
    let err = storage.bank.load_questions().await.unwrap_err();
    assert!(matches!(err, StorageError::Workbook(_)), "unexpected error: {err}");

    tokio::fs::remove_file(&path).await.unwrap();
}

#[tokio::test]
async fn storage_describes_file_location() {
    let path = scratch_path("described.xlsx");
    let storage = Storage::xlsx(BankLocation::File(path.clone()));
    assert_eq!(storage.bank.describe(), path.display().to_string());
}

#[tokio::test]
async fn workbook_fixture_reads_only_the_first_sheet() {
    let bank = XlsxBank::new(BankLocation::File(fixture_path("two_sheets.xlsx")));
    let questions = bank.load_questions().await.unwrap();

    let prompts: Vec<_> = questions.iter().map(QuestionRecord::prompt).collect();
    assert_eq!(prompts, vec!["Half of five?", "Breakfast time?", "Seven squared?"]);
    assert!(
        questions.iter().all(|q| q.topic() != Some("Archive")),
        "second sheet leaked into the bank"
    );
}

#[tokio::test]
async fn workbook_fixture_cells_are_normalized() {
    let bytes = tokio::fs::read(fixture_path("two_sheets.xlsx")).await.unwrap();
    let questions = parse_workbook(bytes).unwrap();
    assert_eq!(questions.len(), 3);

    let half = &questions[0];
    assert_eq!(half.topic(), Some("Math"));
    assert_eq!(half.choices(), &["2.5", "3", "two", "4.25"].map(String::from));
    assert_eq!(half.correct_index(), 0);
    assert_eq!(half.explanation(), Some("Five divided by two."));

    let breakfast = &questions[1];
    assert_eq!(
        breakfast.choices(),
        &["07:30", "1:05 PM", "noon", "midnight"].map(String::from)
    );
    assert_eq!(breakfast.correct_index(), 1);
    assert_eq!(breakfast.explanation(), None);

    let squared = &questions[2];
    assert_eq!(squared.choices(), &["49", "14", "77", "7"].map(String::from));
    assert_eq!(squared.correct_index(), 0);
}
