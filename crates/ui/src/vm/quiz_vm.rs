use quiz_core::model::QuizDocument;
use quiz_core::{QuestionState, QuizSession};

use crate::vm::ActiveQuiz;

/// Placeholder for an entity list the generator left empty.
pub const EMPTY_ENTITY_LABEL: &str = "N/A";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OptionTone {
    /// Not revealed yet; clickable look.
    Neutral,
    Correct,
    WrongSelection,
    Muted,
}

impl OptionTone {
    #[must_use]
    pub const fn class(&self) -> &'static str {
        match self {
            Self::Neutral => "option",
            Self::Correct => "option option-correct",
            Self::WrongSelection => "option option-wrong",
            Self::Muted => "option option-muted",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub position: usize,
    pub text: String,
    pub tone: OptionTone,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub index: usize,
    pub heading: String,
    pub options: Vec<OptionVm>,
    pub revealed: bool,
    pub toggle_label: &'static str,
    pub answer: String,
    pub difficulty: String,
    pub explanation: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizDisplayVm {
    pub title: String,
    pub summary: String,
    pub score_label: String,
    pub questions_heading: String,
    pub questions: Vec<QuestionVm>,
    pub people: String,
    pub organizations: String,
    pub locations: String,
    pub related_topics: Vec<String>,
}

/// What the quiz area should show for the current state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizPanel {
    Nothing,
    NoQuestions,
    Quiz(QuizDisplayVm),
}

#[must_use]
pub fn map_quiz_panel(active: Option<&ActiveQuiz>) -> QuizPanel {
    match active {
        None => QuizPanel::Nothing,
        Some(active) if active.session().total_scorable() == 0 => QuizPanel::NoQuestions,
        Some(active) => QuizPanel::Quiz(map_quiz_display(active.document(), active.session())),
    }
}

#[must_use]
pub fn map_quiz_display(document: &QuizDocument, session: &QuizSession) -> QuizDisplayVm {
    let total = session.total_scorable();
    let questions = session
        .questions()
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let state = session.question_state(index).cloned().unwrap_or_default();
            let options = question
                .options
                .iter()
                .enumerate()
                .map(|(position, option)| OptionVm {
                    position,
                    text: option.clone(),
                    tone: option_tone(&state, option, &question.answer),
                })
                .collect();
            QuestionVm {
                index,
                heading: format!("{}. {}", index + 1, question.prompt),
                options,
                revealed: state.revealed,
                toggle_label: if state.revealed {
                    "Hide Answer/Explanation"
                } else {
                    "Show Answer & Explanation"
                },
                answer: question.answer.clone(),
                difficulty: question.difficulty.clone(),
                explanation: question.explanation.clone(),
            }
        })
        .collect();

    let entities = &document.key_entities;
    QuizDisplayVm {
        title: document.title.clone(),
        summary: document.summary.clone(),
        score_label: format!("{} / {total}", session.current_score()),
        questions_heading: format!("Questions ({total})"),
        questions,
        people: entity_label(&entities.people),
        organizations: entity_label(&entities.organizations),
        locations: entity_label(&entities.locations),
        related_topics: document.related_topics.clone(),
    }
}

fn option_tone(state: &QuestionState, option: &str, answer: &str) -> OptionTone {
    if !state.revealed {
        return OptionTone::Neutral;
    }
    if option == answer {
        OptionTone::Correct
    } else if state.selected_option() == Some(option) {
        OptionTone::WrongSelection
    } else {
        OptionTone::Muted
    }
}

fn entity_label(items: &[String]) -> String {
    if items.is_empty() {
        EMPTY_ENTITY_LABEL.to_string()
    } else {
        items.join(", ")
    }
}
