#![forbid(unsafe_code)]

pub mod model;
pub mod session;

pub use session::{
    AnswerOutcome, MAX_SCORABLE_QUESTIONS, QuestionPhase, QuestionState, QuizSession, SessionError,
};
