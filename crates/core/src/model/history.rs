use serde::{Deserialize, Serialize};

use crate::model::QuizId;

/// List-view projection of a stored quiz.
///
/// `date_generated` is kept exactly as the backend sent it; formatting is a view concern.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizHistorySummary {
    pub id: QuizId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub date_generated: String,
}
