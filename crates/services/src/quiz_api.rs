use std::env;

use async_trait::async_trait;
use quiz_core::model::{ArticleUrl, QuizDocument, QuizHistorySummary, QuizId};
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::error::{GatewayConfigError, QuizApiError};

/// Backend gateway used by the UI.
///
/// Every call is single-shot: no retries, errors go straight back to the caller.
#[async_trait]
pub trait QuizApi: Send + Sync {
    /// Ask the backend to fetch the article and generate a quiz for it.
    ///
    /// # Errors
    ///
    /// Returns `QuizApiError` on transport failure, non-success status, or an
    /// unreadable body.
    async fn generate_quiz(&self, url: &ArticleUrl) -> Result<QuizDocument, QuizApiError>;

    /// List previously generated quizzes.
    ///
    /// # Errors
    ///
    /// Returns `QuizApiError` on transport failure, non-success status, or an
    /// unreadable body.
    async fn list_history(&self) -> Result<Vec<QuizHistorySummary>, QuizApiError>;

    /// Load one stored quiz.
    ///
    /// # Errors
    ///
    /// Returns `QuizApiError` on transport failure, non-success status (including
    /// unknown ids), or an unreadable body.
    async fn get_quiz(&self, id: QuizId) -> Result<QuizDocument, QuizApiError>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizApiConfig {
    pub base_url: String,
}

impl QuizApiConfig {
    pub const DEFAULT_BASE_URL: &'static str = "http://127.0.0.1:8000";
    pub const BASE_URL_ENV: &'static str = "QUIZ_BACKEND_URL";

    /// Validate a backend base URL.
    ///
    /// # Errors
    ///
    /// Returns `GatewayConfigError::InvalidBaseUrl` unless `base_url` is an
    /// absolute http(s) URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, GatewayConfigError> {
        let base_url = base_url.into().trim().to_string();
        let parsed =
            Url::parse(&base_url).map_err(|_| GatewayConfigError::InvalidBaseUrl(base_url.clone()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(GatewayConfigError::InvalidBaseUrl(base_url));
        }
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Read `QUIZ_BACKEND_URL`, falling back to the local default.
    ///
    /// # Errors
    ///
    /// Returns `GatewayConfigError::InvalidBaseUrl` if the variable is set to a bad URL.
    pub fn from_env() -> Result<Self, GatewayConfigError> {
        match env::var(Self::BASE_URL_ENV) {
            Ok(value) if !value.trim().is_empty() => Self::new(value),
            _ => Self::new(Self::DEFAULT_BASE_URL),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

/// `QuizApi` over HTTP/JSON.
#[derive(Clone)]
pub struct HttpQuizApi {
    client: Client,
    config: QuizApiConfig,
}

impl HttpQuizApi {
    /// # Errors
    ///
    /// Returns `GatewayConfigError::Client` if the HTTP client cannot be built.
    pub fn new(config: QuizApiConfig) -> Result<Self, GatewayConfigError> {
        let client = Client::builder()
            .user_agent(concat!("wiki-quiz/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, config))
    }

    #[must_use]
    pub fn with_client(client: Client, config: QuizApiConfig) -> Self {
        Self { client, config }
    }

    #[must_use]
    pub fn config(&self) -> &QuizApiConfig {
        &self.config
    }
}

#[derive(Debug, Serialize)]
struct GenerateQuizRequest<'a> {
    url: &'a str,
}

#[async_trait]
impl QuizApi for HttpQuizApi {
    async fn generate_quiz(&self, url: &ArticleUrl) -> Result<QuizDocument, QuizApiError> {
        let endpoint = self.config.endpoint("generate_quiz");
        debug!(%endpoint, article = %url, "requesting quiz generation");

        let response = self
            .client
            .post(endpoint)
            .json(&GenerateQuizRequest { url: url.as_str() })
            .send()
            .await?;

        decode_response(response, |status| {
            format!("HTTP error! Status: {}", status.as_u16())
        })
        .await
    }

    async fn list_history(&self) -> Result<Vec<QuizHistorySummary>, QuizApiError> {
        let endpoint = self.config.endpoint("history");
        debug!(%endpoint, "requesting quiz history");

        let response = self.client.get(endpoint).send().await?;
        decode_response(response, |status| {
            format!("Failed to fetch history: {}", status.as_u16())
        })
        .await
    }

    async fn get_quiz(&self, id: QuizId) -> Result<QuizDocument, QuizApiError> {
        let endpoint = self.config.endpoint(&format!("quiz/{id}"));
        debug!(%endpoint, "requesting stored quiz");

        let response = self.client.get(endpoint).send().await?;
        decode_response(response, |_| format!("Failed to fetch quiz ID {id}")).await
    }
}

async fn decode_response<T, F>(response: Response, fallback: F) -> Result<T, QuizApiError>
where
    T: DeserializeOwned,
    F: FnOnce(StatusCode) -> String,
{
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = error_detail(&body).unwrap_or_else(|| fallback(status));
        warn!(status = status.as_u16(), %message, "quiz backend request failed");
        return Err(QuizApiError::Request {
            status: status.as_u16(),
            message,
        });
    }

    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|err| {
        warn!(error = %err, "quiz backend returned an undecodable body");
        QuizApiError::Decode(err.to_string())
    })
}

/// Pull a non-empty `detail` string out of a JSON error body.
fn error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("detail")?
        .as_str()
        .filter(|detail| !detail.is_empty())
        .map(str::to_string)
}
