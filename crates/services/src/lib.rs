#![forbid(unsafe_code)]

pub mod app_services;
pub mod bank_service;
pub mod error;
pub mod sessions;

pub use app_services::AppServices;
pub use bank_service::QuestionBankService;
pub use error::{BankError, SessionError};

pub use sessions::{
    ChoiceMark, ChoiceView, MainView, PositionView, QuestionCount, QuestionView, QuizAction,
    QuizController, QuizMachine, QuizPhase, QuizView, RevealView, ScoreView, SelectorView, Tally,
};
