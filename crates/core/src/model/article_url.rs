use std::fmt;

use thiserror::Error;
use url::Url;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ArticleUrlError {
    #[error("Please enter a Wikipedia URL.")]
    Empty,
    #[error("\"{0}\" is not a valid URL.")]
    Invalid(String),
    #[error("only http and https URLs are supported")]
    UnsupportedScheme,
}

/// A user-supplied article URL, trimmed and checked to be an absolute web URL.
///
/// The trimmed text is kept as entered; `Url` is only used to validate it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArticleUrl(String);

impl ArticleUrl {
    /// Parse raw form input.
    ///
    /// # Errors
    ///
    /// Returns `ArticleUrlError::Empty` for blank input, `Invalid` when the text
    /// is not an absolute URL, and `UnsupportedScheme` for anything but http(s).
    pub fn parse(raw: &str) -> Result<Self, ArticleUrlError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ArticleUrlError::Empty);
        }
        let url = Url::parse(trimmed).map_err(|_| ArticleUrlError::Invalid(trimmed.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(Self(trimmed.to_string())),
            _ => Err(ArticleUrlError::UnsupportedScheme),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
