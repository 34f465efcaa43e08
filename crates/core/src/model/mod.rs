mod article_url;
mod history;
mod ids;
mod quiz;
mod theme;

pub use article_url::{ArticleUrl, ArticleUrlError};
pub use history::QuizHistorySummary;
pub use ids::{ParseIdError, QuizId};
pub use quiz::{KeyEntities, Question, QuizDocument};
pub use theme::{Theme, ThemeParseError};
