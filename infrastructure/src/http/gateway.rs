//! HTTP adapter for the [`QuizGateway`] port

use async_trait::async_trait;
use quiz_application::{API_KEY_HEADER, QuizFetchError, QuizGateway};
use quiz_domain::{Quiz, QuizId};
use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("online-quiz/", env!("CARGO_PKG_VERSION"));

/// Error body returned by the quiz API
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Talks to the quiz API over HTTP, sending the API key on every request.
pub struct HttpQuizGateway {
    client: reqwest::Client,
    api_base: String,
    api_key: String,
}

impl HttpQuizGateway {
    /// `base_url` is the server root (e.g. `http://localhost:5079`); the
    /// `/api` prefix is added here.
    pub fn new(
        base_url: &str,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            api_base: format!("{}/api", base_url.trim_end_matches('/')),
            api_key: api_key.into(),
        })
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        quiz_id: Option<QuizId>,
    ) -> Result<T, QuizFetchError> {
        let url = format!("{}{}", self.api_base, path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| {
                warn!("Request to {} failed: {}", url, e);
                QuizFetchError::Unexpected(format!("Failed to reach the quiz API: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(failure_from_status(status, &body, quiz_id));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| QuizFetchError::Unexpected(format!("Malformed response: {}", e)))
    }
}

/// Map a non-success response to the fetch error taxonomy.
///
/// 401 is `Unauthorized`; 404 on a single-quiz request is `NotFound`;
/// anything else is `Unexpected`, carrying the body's `message` when the
/// server sent one.
pub fn failure_from_status(
    status: StatusCode,
    body: &str,
    quiz_id: Option<QuizId>,
) -> QuizFetchError {
    match (status, quiz_id) {
        (StatusCode::UNAUTHORIZED, _) => QuizFetchError::Unauthorized,
        (StatusCode::NOT_FOUND, Some(id)) => QuizFetchError::NotFound(id),
        _ => {
            let message = serde_json::from_str::<ErrorBody>(body)
                .ok()
                .and_then(|b| b.message)
                .unwrap_or_else(|| {
                    format!(
                        "API Error: {} {}",
                        status.as_u16(),
                        status.canonical_reason().unwrap_or("Unknown")
                    )
                });
            QuizFetchError::Unexpected(message)
        }
    }
}

#[async_trait]
impl QuizGateway for HttpQuizGateway {
    async fn list_quizzes(&self) -> Result<Vec<Quiz>, QuizFetchError> {
        self.get_json("/quizzes", None).await
    }

    async fn get_quiz(&self, id: QuizId) -> Result<Quiz, QuizFetchError> {
        self.get_json(&format!("/quizzes/{}", id), Some(id)).await
    }

    async fn get_answers(&self, id: QuizId) -> Result<Quiz, QuizFetchError> {
        self.get_json(&format!("/quizzes/{}/answers", id), Some(id))
            .await
    }
}
