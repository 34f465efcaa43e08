use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;

use quiz_core::model::{KeyEntities, Question, QuizDocument, QuizHistorySummary, QuizId};

use crate::vm::AppVm;

use super::test_harness::{
    HarnessScript, StubQuizApi, ViewKind, setup_scripted_harness, setup_view_harness,
};

fn stored_summary(id: u64, title: &str) -> QuizHistorySummary {
    QuizHistorySummary {
        id: QuizId::new(id),
        title: title.into(),
        url: format!("https://en.wikipedia.org/wiki/{title}"),
        date_generated: "2024-05-01T10:00:00".into(),
    }
}

fn turing_document(questions: usize) -> QuizDocument {
    QuizDocument {
        title: "Alan Turing".into(),
        summary: "English mathematician and computer scientist.".into(),
        key_entities: KeyEntities {
            people: vec!["Alan Turing".into(), "Alonzo Church".into()],
            organizations: vec!["Bletchley Park".into()],
            locations: Vec::new(),
        },
        related_topics: vec!["Enigma machine".into()],
        questions: (0..questions)
            .map(|n| Question {
                prompt: format!("Question {n}?"),
                options: vec![format!("right {n}"), format!("wrong {n}")],
                answer: format!("right {n}"),
                difficulty: "medium".into(),
                explanation: format!("Explained {n}."),
            })
            .collect(),
    }
}

fn loaded_vm(document: QuizDocument) -> AppVm {
    let mut vm = AppVm::default();
    vm.load_document(document);
    vm
}

#[tokio::test(flavor = "current_thread")]
async fn generate_view_renders_empty_form() {
    let mut harness =
        setup_view_harness(ViewKind::Generate, StubQuizApi::default(), AppVm::default());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Paste Wikipedia URL here..."), "{html}");
    assert!(html.contains("Generate Quiz"), "{html}");
    assert!(!html.contains("Score:"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn generate_view_renders_loaded_quiz() {
    let vm = loaded_vm(turing_document(3));
    let mut harness = setup_view_harness(ViewKind::Generate, StubQuizApi::default(), vm);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Alan Turing"), "{html}");
    assert!(html.contains("0 / 3"), "{html}");
    assert!(html.contains("Questions (3)"), "{html}");
    assert!(html.contains("1. Question 0?"), "{html}");
    assert!(html.contains("Alan Turing, Alonzo Church"), "{html}");
    assert!(html.contains("Bletchley Park"), "{html}");
    assert!(html.contains("N/A"), "missing empty locations label in {html}");
    assert!(html.contains("Enigma machine"), "{html}");
    assert!(!html.contains("Correct Answer:"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn generate_view_shows_answered_question_revealed() {
    let mut vm = loaded_vm(turing_document(2));
    vm.select_answer(0, "wrong 0");
    let mut harness = setup_view_harness(ViewKind::Generate, StubQuizApi::default(), vm);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("0 / 2"), "{html}");
    assert!(html.contains("option option-wrong"), "{html}");
    assert!(html.contains("option option-correct"), "{html}");
    assert!(html.contains("Correct Answer:"), "{html}");
    assert!(html.contains("Explained 0."), "{html}");
    assert!(html.contains("Hide Answer/Explanation"), "{html}");
    assert!(!html.contains("Explained 1."), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn generate_view_caps_display_at_ten_questions() {
    let vm = loaded_vm(turing_document(14));
    let mut harness = setup_view_harness(ViewKind::Generate, StubQuizApi::default(), vm);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("0 / 10"), "{html}");
    assert!(html.contains("10. Question 9?"), "{html}");
    assert!(!html.contains("Question 10?"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn generate_view_shows_notice_for_question_free_document() {
    let vm = loaded_vm(turing_document(0));
    let mut harness = setup_view_harness(ViewKind::Generate, StubQuizApi::default(), vm);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("no questions were produced"), "{html}");
    assert!(!html.contains("Score:"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn generate_view_shows_validation_error() {
    let mut vm = AppVm::default();
    assert!(vm.begin_generate("").is_none());
    let mut harness = setup_view_harness(ViewKind::Generate, StubQuizApi::default(), vm);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Error:"), "{html}");
    assert!(html.contains("Please enter a Wikipedia URL."), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn generate_view_shows_progress_while_generating() {
    let mut vm = AppVm::default();
    assert!(vm.begin_generate("https://en.wikipedia.org/wiki/Rust").is_some());
    let mut harness = setup_view_harness(ViewKind::Generate, StubQuizApi::default(), vm);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Generating Quiz..."), "{html}");
    assert!(html.contains("Processing article and generating quiz"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn history_view_fetches_rows_on_mount() {
    let api = StubQuizApi {
        history: vec![QuizHistorySummary {
            id: QuizId::new(7),
            title: "Alan Turing".into(),
            url: "https://en.wikipedia.org/wiki/Alan_Turing".into(),
            date_generated: "2024-05-01T10:00:00".into(),
        }],
        ..StubQuizApi::default()
    };
    let mut harness = setup_view_harness(ViewKind::History, api, AppVm::default());
    harness.rebuild();
    let html = harness.drive_until("View Quiz").await;

    assert!(html.contains("Alan Turing"), "{html}");
    assert!(html.contains("https://en.wikipedia.org/wiki/Alan_Turing"), "{html}");
    assert!(html.contains("May 1, 2024"), "{html}");
    assert!(html.contains("Refresh History"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn history_view_shows_empty_state_after_fetch() {
    let api = StubQuizApi {
        delay: Duration::from_millis(20),
        ..StubQuizApi::default()
    };
    let calls = Arc::clone(&api.history_calls);
    let mut harness = setup_view_harness(ViewKind::History, api, AppVm::default());
    harness.rebuild();

    let loading = harness.drive_until("Loading quiz history...").await;
    assert!(loading.contains("Loading quiz history..."), "{loading}");
    assert!(loading.contains("loading=true"), "{loading}");
    assert!(loading.contains("Refreshing..."), "{loading}");

    let html = harness.drive_until("loading=false").await;
    assert!(html.contains("loading=false"), "{html}");
    assert!(
        html.contains("No quizzes have been saved yet. Generate one to see it here!"),
        "{html}"
    );
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn history_view_shows_fetch_error() {
    let api = StubQuizApi {
        failure: Some("Failed to fetch history: 500".into()),
        ..StubQuizApi::default()
    };
    let mut harness = setup_view_harness(ViewKind::History, api, AppVm::default());
    harness.rebuild();
    let html = harness.drive_until("Error fetching history").await;

    assert!(
        html.contains("Error fetching history: Failed to fetch history: 500"),
        "{html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn opening_stored_quiz_from_history_loads_it_in_generate_view() {
    let mut stored = turing_document(2);
    stored.title = "Stored".into();
    let api = StubQuizApi {
        document: Some(stored),
        history: vec![stored_summary(7, "Stored")],
        delay: Duration::from_millis(10),
        ..StubQuizApi::default()
    };
    let mut harness = setup_scripted_harness(
        ViewKind::History,
        api,
        AppVm::default(),
        HarnessScript::OpenFirstHistoryRow,
    );
    harness.rebuild();

    let html = harness.drive_until("loading=false active=Stored").await;
    assert!(html.contains("loading=false active=Stored"), "{html}");
    assert!(html.contains("Questions (2)"), "{html}");
    assert!(html.contains("0 / 2"), "{html}");
    assert!(!html.contains("View Quiz"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn generation_result_is_applied_after_leaving_generate_view() {
    let api = StubQuizApi {
        document: Some(turing_document(3)),
        delay: Duration::from_millis(20),
        ..StubQuizApi::default()
    };
    let mut harness = setup_scripted_harness(
        ViewKind::Generate,
        api,
        AppVm::default(),
        HarnessScript::GenerateThenLeave("https://en.wikipedia.org/wiki/Alan_Turing".into()),
    );
    harness.rebuild();

    let left = harness.drive_until("Previously Generated Quizzes").await;
    assert!(left.contains("loading=true active=none"), "{left}");
    assert!(!left.contains("Paste Wikipedia URL here..."), "{left}");

    let html = harness.drive_until("loading=false").await;
    assert!(html.contains("loading=false active=Alan Turing"), "{html}");
    assert!(!html.contains("Paste Wikipedia URL here..."), "{html}");
}
