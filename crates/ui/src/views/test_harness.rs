use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::model::{QuestionBank, QuestionRecord};
use services::{QuestionBankService, QuizAction, QuizController};
use storage::{InMemoryBank, QuestionBankSource};

use crate::context::{UiApp, build_app_context};
use crate::views::{QuizBoard, QuizBoardProps, QuizScreen};

#[derive(Clone)]
struct TestApp {
    bank_service: Arc<QuestionBankService>,
}

impl UiApp for TestApp {
    fn bank_service(&self) -> Arc<QuestionBankService> {
        Arc::clone(&self.bank_service)
    }

    fn bank_source(&self) -> String {
        "test bank".to_string()
    }
}

#[derive(Props, Clone)]
struct ScreenHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for ScreenHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ScreenHarness(props: ScreenHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { QuizScreen {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
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

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn sample_questions() -> Vec<QuestionRecord> {
    vec![
        QuestionRecord::new(
            Some("Geography".into()),
            "Capital of Italy?",
            ["Rome".into(), "Milan".into(), "Turin".into(), "Naples".into()],
            0,
            Some("Rome became the capital in 1871.".into()),
        ),
        QuestionRecord::new(
            Some("Science".into()),
            "Boiling point of water at sea level?",
            ["90".into(), "100".into(), "110".into(), "120".into()],
            1,
            None,
        ),
        QuestionRecord::new(
            Some("Geography".into()),
            "Longest river?",
            ["Amazon".into(), "Nile".into(), "Yangtze".into(), "Danube".into()],
            1,
            None,
        ),
    ]
}

/// Full screen backed by `source`, including the async bank load.
pub fn setup_screen_harness(source: Arc<dyn QuestionBankSource>) -> ViewHarness {
    let app = Arc::new(TestApp {
        bank_service: Arc::new(QuestionBankService::new(source)),
    });
    let dom = VirtualDom::new_with_props(ScreenHarness, ScreenHarnessProps { app });
    ViewHarness { dom }
}

pub fn setup_in_memory_screen() -> ViewHarness {
    setup_screen_harness(Arc::new(InMemoryBank::with_questions(sample_questions())))
}

/// Board only, starting from the state reached by replaying `actions`.
pub fn setup_board_harness(actions: Vec<QuizAction>) -> ViewHarness {
    let mut controller = QuizController::new(QuestionBank::new(sample_questions()));
    for action in actions {
        controller.dispatch(action);
    }
    let dom = VirtualDom::new_with_props(QuizBoard, QuizBoardProps { controller });
    ViewHarness { dom }
}
