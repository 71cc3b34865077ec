use dioxus::prelude::Key;
use services::{
    ChoiceMark, MainView, PositionView, QuestionView, QuizAction, QuizPhase, QuizView, ScoreView,
};

pub const EMPTY_SELECTION_MESSAGE: &str = "No questions available for the selected topic.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizScreenVm {
    pub topics: Option<Vec<String>>,
    pub score_label: Option<String>,
    pub position_label: Option<String>,
    pub main: MainVm,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MainVm {
    Home { notice: Option<&'static str> },
    Question(QuestionVm),
    Finished { score_label: String },
    Exited,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub prompt: String,
    pub choices: Vec<ChoiceVm>,
    pub reveal: Option<RevealVm>,
}

impl QuestionVm {
    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.reveal.is_some()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceVm {
    pub index: usize,
    pub label: String,
    pub class: &'static str,
    pub key_hint: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealVm {
    pub correct_answer_label: String,
    pub explanation: Option<String>,
    pub class: &'static str,
}

#[must_use]
pub fn score_label(score: ScoreView) -> String {
    format!("Correct: {} | Wrong: {}", score.correct, score.wrong)
}

#[must_use]
pub fn position_label(position: PositionView) -> String {
    format!("Question {} of {}", position.current, position.total)
}

#[must_use]
pub fn map_quiz_view(view: &QuizView) -> QuizScreenVm {
    let main = match &view.main {
        MainView::Home { notice } => MainVm::Home {
            notice: notice.as_ref().map(|_| EMPTY_SELECTION_MESSAGE),
        },
        MainView::Question(question) => MainVm::Question(map_question(question)),
        MainView::Finished(score) => MainVm::Finished {
            score_label: score_label(*score),
        },
        MainView::Exited => MainVm::Exited,
    };

    QuizScreenVm {
        topics: view.selector.as_ref().map(|selector| selector.topics.clone()),
        score_label: view.score.map(score_label),
        position_label: view.position.map(position_label),
        main,
    }
}

fn map_question(question: &QuestionView) -> QuestionVm {
    let choices = question
        .choices
        .iter()
        .map(|choice| ChoiceVm {
            index: choice.index,
            label: choice.label.clone(),
            class: match choice.mark {
                ChoiceMark::Neutral => "choice-btn",
                ChoiceMark::Correct => "choice-btn correct",
                ChoiceMark::Wrong => "choice-btn wrong",
            },
            key_hint: (choice.index + 1).to_string(),
        })
        .collect();

    let reveal = question.reveal.as_ref().map(|reveal| RevealVm {
        correct_answer_label: format!("Correct Answer: {}", reveal.correct_choice),
        explanation: reveal.explanation.clone(),
        class: if reveal.was_correct {
            "answer-box answer-box--correct"
        } else {
            "answer-box answer-box--wrong"
        },
    });

    QuestionVm {
        prompt: question.prompt.clone(),
        choices,
        reveal,
    }
}

/// Map a key press to the quiz action it triggers in `phase`.
#[must_use]
pub fn shortcut_action(phase: QuizPhase, key: &Key) -> Option<QuizAction> {
    match (phase, key) {
        (QuizPhase::InQuestion, Key::Character(value)) => match value.as_str() {
            "1" => Some(QuizAction::Choose(0)),
            "2" => Some(QuizAction::Choose(1)),
            "3" => Some(QuizAction::Choose(2)),
            "4" => Some(QuizAction::Choose(3)),
            _ => None,
        },
        (QuizPhase::AnswerRevealed, Key::Enter) => Some(QuizAction::Next),
        (QuizPhase::AnswerRevealed, Key::Character(value))
            if value.eq_ignore_ascii_case("n") =>
        {
            Some(QuizAction::Next)
        }
        (QuizPhase::InQuestion | QuizPhase::AnswerRevealed, Key::Escape) => Some(QuizAction::Exit),
        (QuizPhase::Finished | QuizPhase::Exited, Key::Enter) => Some(QuizAction::ReturnHome),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{QuestionBank, QuestionRecord};
    use services::{QuestionCount, QuizController};

    fn controller() -> QuizController {
        QuizController::new(QuestionBank::new(vec![QuestionRecord::new(
            Some("Math".into()),
            "2 + 2?",
            ["3".into(), "4".into(), "5".into(), "6".into()],
            1,
            Some("Basic addition.".into()),
        )]))
    }

    fn started() -> QuizController {
        let mut controller = controller();
        controller.dispatch(QuizAction::StartQuiz {
            topic: "Math".into(),
            count: QuestionCount::All,
        });
        controller
    }

    #[test]
    fn home_exposes_topics_only() {
        let vm = map_quiz_view(&controller().view());
        assert_eq!(vm.topics, Some(vec!["Math".to_string()]));
        assert_eq!(vm.score_label, None);
        assert_eq!(vm.position_label, None);
        assert_eq!(vm.main, MainVm::Home { notice: None });
    }

    #[test]
    fn running_quiz_formats_score_and_position() {
        let vm = map_quiz_view(&started().view());
        assert_eq!(vm.score_label.as_deref(), Some("Correct: 0 | Wrong: 0"));
        assert_eq!(vm.position_label.as_deref(), Some("Question 1 of 1"));
        let MainVm::Question(question) = vm.main else {
            panic!("expected question");
        };
        assert_eq!(question.choices[2].key_hint, "3");
        assert!(question.choices.iter().all(|c| c.class == "choice-btn"));
    }

    #[test]
    fn wrong_choice_highlights_both_buttons() {
        let mut controller = started();
        controller.dispatch(QuizAction::Choose(0));
        let MainVm::Question(question) = map_quiz_view(&controller.view()).main else {
            panic!("expected question");
        };
        assert_eq!(question.choices[0].class, "choice-btn wrong");
        assert_eq!(question.choices[1].class, "choice-btn correct");
        let reveal = question.reveal.unwrap();
        assert_eq!(reveal.correct_answer_label, "Correct Answer: 4");
        assert_eq!(reveal.explanation.as_deref(), Some("Basic addition."));
    }

    #[test]
    fn empty_selection_maps_to_notice() {
        let mut controller = controller();
        controller.dispatch(QuizAction::StartQuiz {
            topic: "Art".into(),
            count: QuestionCount::All,
        });
        let vm = map_quiz_view(&controller.view());
        assert_eq!(
            vm.main,
            MainVm::Home {
                notice: Some(EMPTY_SELECTION_MESSAGE)
            }
        );
    }

    #[test]
    fn finished_summary_label() {
        let mut controller = started();
        controller.dispatch(QuizAction::Choose(1));
        controller.dispatch(QuizAction::Next);
        let vm = map_quiz_view(&controller.view());
        assert_eq!(
            vm.main,
            MainVm::Finished {
                score_label: "Correct: 1 | Wrong: 0".into()
            }
        );
        assert_eq!(vm.position_label.as_deref(), Some("Question 1 of 1"));
    }

    #[test]
    fn shortcuts_depend_on_phase() {
        let one = Key::Character("1".into());
        let four = Key::Character("4".into());
        let n = Key::Character("N".into());

        assert_eq!(
            shortcut_action(QuizPhase::InQuestion, &one),
            Some(QuizAction::Choose(0))
        );
        assert_eq!(
            shortcut_action(QuizPhase::InQuestion, &four),
            Some(QuizAction::Choose(3))
        );
        assert_eq!(shortcut_action(QuizPhase::AnswerRevealed, &one), None);
        assert_eq!(
            shortcut_action(QuizPhase::AnswerRevealed, &n),
            Some(QuizAction::Next)
        );
        assert_eq!(
            shortcut_action(QuizPhase::AnswerRevealed, &Key::Enter),
            Some(QuizAction::Next)
        );
        assert_eq!(shortcut_action(QuizPhase::InQuestion, &Key::Enter), None);
        assert_eq!(
            shortcut_action(QuizPhase::InQuestion, &Key::Escape),
            Some(QuizAction::Exit)
        );
        assert_eq!(
            shortcut_action(QuizPhase::Exited, &Key::Enter),
            Some(QuizAction::ReturnHome)
        );
        assert_eq!(shortcut_action(QuizPhase::Home, &Key::Enter), None);
    }
}
