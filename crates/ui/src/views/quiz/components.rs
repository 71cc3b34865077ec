use dioxus::prelude::*;
use services::{QuestionCount, QuizAction};

use crate::vm::QuestionVm;

/// Topic picker and count field shown on the home screen.
///
/// Local signals are dropped when the panel unmounts, so returning home
/// starts again from the first topic.
#[component]
pub fn SelectorPanel(topics: Vec<String>, on_start: EventHandler<QuizAction>) -> Element {
    let mut selected_topic = use_signal(|| None::<String>);
    let mut count_input = use_signal(String::new);
    let default_topic = topics.first().cloned().unwrap_or_default();

    let start = move |_: MouseEvent| {
        let topic = selected_topic
            .read()
            .clone()
            .unwrap_or_else(|| default_topic.clone());
        let count = QuestionCount::parse(&count_input.read());
        on_start.call(QuizAction::StartQuiz { topic, count });
    };

    rsx! {
        div { id: "home", class: "home-panel",
            h2 { "Select Topic" }
            select {
                id: "topicSel",
                class: "topic-select",
                onchange: move |evt: FormEvent| selected_topic.set(Some(evt.value())),
                for name in topics.iter() {
                    option { key: "{name}", value: "{name}", "{name}" }
                }
            }

            h2 { "Number of Questions" }
            input {
                id: "countSel",
                class: "count-input",
                r#type: "number",
                min: "1",
                placeholder: "Leave empty for all",
                value: "{count_input}",
                oninput: move |evt: FormEvent| count_input.set(evt.value()),
            }

            button { class: "home-btn", id: "startBtn", r#type: "button", onclick: start, "Start Quiz" }
        }
    }
}

#[component]
pub fn QuestionPanel(question: QuestionVm, on_action: EventHandler<QuizAction>) -> Element {
    let answered = question.is_answered();

    rsx! {
        div { id: "cont", class: "question-panel",
            button {
                id: "exitBtnTop",
                class: "exit-btn",
                r#type: "button",
                onclick: move |_| on_action.call(QuizAction::Exit),
                "Exit"
            }
            h3 { class: "question-prompt", "{question.prompt}" }
            div { id: "choices", class: "choices",
                for choice in question.choices.iter().cloned() {
                    button {
                        key: "{choice.index}",
                        id: "choice-{choice.index}",
                        class: "{choice.class}",
                        r#type: "button",
                        disabled: answered,
                        onclick: move |_| on_action.call(QuizAction::Choose(choice.index)),
                        span { class: "choice-key", "{choice.key_hint}" }
                        span { class: "choice-label", "{choice.label}" }
                    }
                }
            }
            if let Some(reveal) = question.reveal.clone() {
                div { id: "ans",
                    div { class: "{reveal.class}",
                        p { "{reveal.correct_answer_label}" }
                        if let Some(explanation) = reveal.explanation {
                            p { class: "answer-explanation", "{explanation}" }
                        }
                    }
                    button {
                        id: "nextBtn",
                        class: "next-btn",
                        r#type: "button",
                        onclick: move |_| on_action.call(QuizAction::Next),
                        "Next"
                    }
                }
            }
        }
    }
}

#[component]
pub fn CompletionPanel(score_label: String, on_return: EventHandler<()>) -> Element {
    rsx! {
        div { class: "completion-panel",
            h2 { "Test Completed" }
            p { "{score_label}" }
            button {
                class: "home-btn",
                id: "returnHomeFinished",
                r#type: "button",
                onclick: move |_| on_return.call(()),
                "Return Home"
            }
        }
    }
}

#[component]
pub fn ExitedPanel(on_return: EventHandler<()>) -> Element {
    rsx! {
        div { class: "exited-panel",
            h2 { "Quiz Exited" }
            button {
                class: "home-btn",
                id: "returnHome",
                r#type: "button",
                onclick: move |_| on_return.call(()),
                "Return Home"
            }
        }
    }
}
