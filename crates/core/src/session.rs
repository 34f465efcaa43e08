use thiserror::Error;

use crate::model::Question;

/// Only the leading questions of a document take part in a session.
pub const MAX_SCORABLE_QUESTIONS: usize = 10;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("question index {index} out of range for session of {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

//
// ─── PER-QUESTION STATE ────────────────────────────────────────────────────────
//

/// Answer lock for a single question.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum QuestionPhase {
    #[default]
    Unanswered,
    Answered(String),
}

/// Lock and reveal are independent: the reveal flag can be toggled in either phase.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuestionState {
    pub phase: QuestionPhase,
    pub revealed: bool,
}

impl QuestionState {
    #[must_use]
    pub fn selected_option(&self) -> Option<&str> {
        match &self.phase {
            QuestionPhase::Unanswered => None,
            QuestionPhase::Answered(option) => Some(option.as_str()),
        }
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        matches!(self.phase, QuestionPhase::Answered(_))
    }
}

/// Result of a `select_answer` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
    /// The question was already locked; nothing changed.
    AlreadyAnswered,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Client-side answer tracking and scoring for one loaded quiz.
///
/// Holds its own copy of the first [`MAX_SCORABLE_QUESTIONS`] questions so the
/// score can never drift from the questions it was computed against.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuizSession {
    questions: Vec<Question>,
    states: Vec<QuestionState>,
    score: usize,
}

impl QuizSession {
    #[must_use]
    pub fn new(questions: &[Question]) -> Self {
        let mut session = Self::default();
        session.load_questions(questions);
        session
    }

    /// Replace the session contents, discarding every selection and the score.
    pub fn load_questions(&mut self, questions: &[Question]) {
        let take = questions.len().min(MAX_SCORABLE_QUESTIONS);
        self.questions = questions[..take].to_vec();
        self.states = vec![QuestionState::default(); take];
        self.score = 0;
    }

    /// Lock in `option` for the question at `index`.
    ///
    /// The first selection wins: it forces the question revealed and scores one
    /// point if it matches the answer. Later selections are no-ops.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::IndexOutOfRange` if `index >= total_scorable()`.
    pub fn select_answer(
        &mut self,
        index: usize,
        option: &str,
    ) -> Result<AnswerOutcome, SessionError> {
        let len = self.states.len();
        let (question, state) = self
            .questions
            .get(index)
            .zip(self.states.get_mut(index))
            .ok_or(SessionError::IndexOutOfRange { index, len })?;

        if state.is_answered() {
            return Ok(AnswerOutcome::AlreadyAnswered);
        }

        state.phase = QuestionPhase::Answered(option.to_string());
        state.revealed = true;

        if question.is_correct(option) {
            self.score = self.score.saturating_add(1);
            Ok(AnswerOutcome::Correct)
        } else {
            Ok(AnswerOutcome::Incorrect)
        }
    }

    /// Flip the reveal flag and return its new value. Never touches the lock or score.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::IndexOutOfRange` if `index >= total_scorable()`.
    pub fn toggle_reveal(&mut self, index: usize) -> Result<bool, SessionError> {
        let len = self.states.len();
        let state = self
            .states
            .get_mut(index)
            .ok_or(SessionError::IndexOutOfRange { index, len })?;
        state.revealed = !state.revealed;
        Ok(state.revealed)
    }

    #[must_use]
    pub fn current_score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn total_scorable(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn question_state(&self, index: usize) -> Option<&QuestionState> {
        self.states.get(index)
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.states.iter().filter(|state| state.is_answered()).count()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.states.is_empty() && self.answered_count() == self.states.len()
    }
}
