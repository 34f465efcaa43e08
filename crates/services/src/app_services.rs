use std::sync::Arc;

use storage::repository::Storage;

use crate::error::AppServicesError;
use crate::quiz_api::{HttpQuizApi, QuizApi, QuizApiConfig};
use crate::theme_service::ThemeService;

/// Assembles app-facing services.
#[derive(Clone)]
pub struct AppServices {
    quiz_api: Arc<dyn QuizApi>,
    theme: Arc<ThemeService>,
}

impl AppServices {
    #[must_use]
    pub fn new(storage: &Storage, quiz_api: Arc<dyn QuizApi>) -> Self {
        let theme = Arc::new(ThemeService::new(Arc::clone(&storage.preferences)));
        Self { quiz_api, theme }
    }

    /// Build services backed by `SQLite` preferences and the HTTP gateway.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization or client setup fails.
    pub async fn new_sqlite(
        db_url: &str,
        config: QuizApiConfig,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        let quiz_api: Arc<dyn QuizApi> = Arc::new(HttpQuizApi::new(config)?);
        Ok(Self::new(&storage, quiz_api))
    }

    #[must_use]
    pub fn quiz_api(&self) -> Arc<dyn QuizApi> {
        Arc::clone(&self.quiz_api)
    }

    #[must_use]
    pub fn theme(&self) -> Arc<ThemeService> {
        Arc::clone(&self.theme)
    }
}
