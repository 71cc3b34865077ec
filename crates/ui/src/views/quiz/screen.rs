use dioxus::prelude::*;
use services::{QuizAction, QuizController};

use super::components::{CompletionPanel, ExitedPanel, QuestionPanel, SelectorPanel};
use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{MainVm, map_quiz_view, shortcut_action};

/// Loads the bank once and gates the quiz behind it.
#[component]
pub fn QuizScreen() -> Element {
    let ctx = use_context::<AppContext>();
    let bank_service = ctx.bank_service();
    let source = ctx.bank_source().to_string();

    let resource = use_resource(move || {
        let bank_service = bank_service.clone();
        let source = source.clone();
        async move {
            bank_service.load_bank().await.map_err(|err| {
                tracing::warn!(%source, error = %err, "question bank unavailable");
                ViewError::LoadFailure
            })
        }
    });
    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page quiz-page",
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "quiz-loading", "Loading questions..." }
                },
                ViewState::Error(err) => rsx! {
                    div { id: "quiz", class: "quiz-area",
                        p { class: "quiz-error", "{err.message()}" }
                    }
                },
                ViewState::Ready(bank) => rsx! {
                    QuizBoard { controller: QuizController::new(bank) }
                },
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct QuizBoardProps {
    /// Starting state; later changes to the prop are ignored.
    pub controller: QuizController,
}

/// Selector, score line, position line and quiz area over one controller.
#[component]
pub fn QuizBoard(props: QuizBoardProps) -> Element {
    let mut controller = use_signal(move || props.controller);

    let dispatch = use_callback(move |action: QuizAction| {
        let phase = controller.write().dispatch(action);
        tracing::trace!(?phase, "quiz action dispatched");
    });

    let on_key = move |evt: KeyboardEvent| {
        let phase = controller.read().phase();
        if let Some(action) = shortcut_action(phase, &evt.data.key()) {
            evt.prevent_default();
            dispatch.call(action);
        }
    };

    let vm = map_quiz_view(&controller.read().view());

    rsx! {
        div { class: "quiz-root", id: "quiz-root", tabindex: "0", onkeydown: on_key,
            if let Some(topics) = vm.topics.clone() {
                SelectorPanel { topics, on_start: move |action| dispatch.call(action) }
            }
            if let Some(label) = vm.score_label.clone() {
                div { id: "score", class: "score-line", "{label}" }
            }
            if let Some(label) = vm.position_label.clone() {
                div { id: "status", class: "position-line", "{label}" }
            }
            div { id: "quiz", class: "quiz-area",
                match vm.main.clone() {
                    MainVm::Home { notice } => rsx! {
                        if let Some(notice) = notice {
                            p { class: "quiz-notice", "{notice}" }
                        }
                    },
                    MainVm::Question(question) => rsx! {
                        QuestionPanel { question, on_action: move |action| dispatch.call(action) }
                    },
                    MainVm::Finished { score_label } => rsx! {
                        CompletionPanel {
                            score_label,
                            on_return: move |()| dispatch.call(QuizAction::ReturnHome),
                        }
                    },
                    MainVm::Exited => rsx! {
                        ExitedPanel { on_return: move |()| dispatch.call(QuizAction::ReturnHome) }
                    },
                }
            }
        }
    }
}
