use std::sync::Arc;

use quiz_core::model::Theme;
use storage::repository::PreferenceRepository;
use tracing::warn;

use crate::error::ThemeServiceError;

/// Preference key the theme flag is stored under.
pub const THEME_PREFERENCE_KEY: &str = "theme";

#[derive(Clone)]
pub struct ThemeService {
    repo: Arc<dyn PreferenceRepository>,
}

impl ThemeService {
    #[must_use]
    pub fn new(repo: Arc<dyn PreferenceRepository>) -> Self {
        Self { repo }
    }

    /// Load the persisted theme, defaulting to light when unset or unrecognised.
    ///
    /// # Errors
    ///
    /// Returns `ThemeServiceError` on storage failures.
    pub async fn load(&self) -> Result<Theme, ThemeServiceError> {
        let Some(raw) = self.repo.get_preference(THEME_PREFERENCE_KEY).await? else {
            return Ok(Theme::default());
        };
        Ok(raw.parse().unwrap_or_else(|err| {
            warn!(error = %err, "ignoring stored theme preference");
            Theme::default()
        }))
    }

    /// Persist the theme.
    ///
    /// # Errors
    ///
    /// Returns `ThemeServiceError` on storage failures.
    pub async fn save(&self, theme: Theme) -> Result<(), ThemeServiceError> {
        self.repo
            .set_preference(THEME_PREFERENCE_KEY, theme.as_str())
            .await?;
        Ok(())
    }
}
