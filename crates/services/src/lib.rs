#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod quiz_api;
pub mod theme_service;

pub use app_services::AppServices;
pub use error::{AppServicesError, GatewayConfigError, QuizApiError, ThemeServiceError};
pub use quiz_api::{HttpQuizApi, QuizApi, QuizApiConfig};
pub use theme_service::{THEME_PREFERENCE_KEY, ThemeService};
