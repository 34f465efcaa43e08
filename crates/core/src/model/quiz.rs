use serde::{Deserialize, Serialize};

/// Named entities extracted from the source article.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyEntities {
    pub people: Vec<String>,
    pub organizations: Vec<String>,
    pub locations: Vec<String>,
}

/// One multiple-choice item as produced by the quiz generator.
///
/// `answer` is expected to match one of `options` exactly. That is not checked
/// here; a question that violates it simply never scores.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Question {
    #[serde(rename = "question")]
    pub prompt: String,
    pub options: Vec<String>,
    pub answer: String,
    pub difficulty: String,
    pub explanation: String,
}

impl Question {
    #[must_use]
    pub fn is_correct(&self, option: &str) -> bool {
        self.answer == option
    }
}

/// The full generated artifact for one article.
///
/// Missing fields decode to empty values so partially filled documents from the
/// backend still render.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizDocument {
    pub title: String,
    pub summary: String,
    pub key_entities: KeyEntities,
    pub related_topics: Vec<String>,
    #[serde(rename = "quiz")]
    pub questions: Vec<Question>,
}

impl QuizDocument {
    /// A document without questions is still a valid, metadata-only result.
    #[must_use]
    pub fn has_questions(&self) -> bool {
        !self.questions.is_empty()
    }
}
