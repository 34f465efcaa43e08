use std::sync::Arc;

use quiz_core::model::Theme;
use services::{QuizApi, ThemeService};

pub trait UiApp: Send + Sync {
    fn quiz_api(&self) -> Arc<dyn QuizApi>;
    fn theme_service(&self) -> Arc<ThemeService>;

    /// Theme loaded before launch, so the first frame already uses it.
    fn initial_theme(&self) -> Theme;
}

#[derive(Clone)]
pub struct AppContext {
    quiz_api: Arc<dyn QuizApi>,
    theme_service: Arc<ThemeService>,
    initial_theme: Theme,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz_api: app.quiz_api(),
            theme_service: app.theme_service(),
            initial_theme: app.initial_theme(),
        }
    }

    #[must_use]
    pub fn quiz_api(&self) -> Arc<dyn QuizApi> {
        Arc::clone(&self.quiz_api)
    }

    #[must_use]
    pub fn theme_service(&self) -> Arc<ThemeService> {
        Arc::clone(&self.theme_service)
    }

    #[must_use]
    pub fn initial_theme(&self) -> Theme {
        self.initial_theme
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
