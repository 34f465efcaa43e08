//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by the quiz backend gateway.
///
/// `Display` is written for end users: views show it inline as-is.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizApiError {
    /// The backend answered with a non-success status.
    #[error("{message}")]
    Request { status: u16, message: String },
    #[error("could not reach the quiz backend: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("the quiz backend sent an unreadable response: {0}")]
    Decode(String),
}

impl QuizApiError {
    /// HTTP status for `Request` errors.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } => Some(*status),
            Self::Transport(err) => err.status().map(|status| status.as_u16()),
            Self::Decode(_) => None,
        }
    }
}

/// Errors emitted while building gateway configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GatewayConfigError {
    #[error("invalid backend URL: {0}")]
    InvalidBaseUrl(String),
    #[error(transparent)]
    Client(#[from] reqwest::Error),
}

/// Errors emitted by `ThemeService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ThemeServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Gateway(#[from] GatewayConfigError),
}
