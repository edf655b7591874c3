//! Backend client — the single point of entry for résumé-backend calls.
//!
//! ARCHITECTURAL RULE: no other module touches the HTTP transport. Screens
//! talk to [`ResumeApi`] and stay unaware of URLs, status codes and JSON.
//!
//! Failed calls are never retried here; the user retries from the screen
//! that triggered the call.

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::payload::{GenerationRequest, QuestionRequest, QuestionResponse, ResumeResponse};

const QUESTIONS_PATH: &str = "/llm/gerar-perguntas";
const RESUME_PATH: &str = "/llm/gerar-curriculo";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// The backend seam. The HTTP client and the test mock both implement this;
/// everything downstream holds a `dyn ResumeApi`.
#[async_trait]
pub trait ResumeApi: Send + Sync {
    /// Asks the backend for interview questions tailored to a job area.
    async fn generate_questions(&self, area: &str) -> Result<Vec<String>, ApiError>;

    /// Sends the assembled payload and returns the résumé as Markdown.
    async fn generate_resume(&self, request: &GenerationRequest) -> Result<String, ApiError>;
}

/// Production implementation over the remote backend.
pub struct HttpResumeApi {
    client: Client,
    base_url: String,
}

impl HttpResumeApi {
    /// `base_url` must not end with a slash; [`crate::config::Config`]
    /// normalizes it.
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    async fn post_json<Req, Resp>(&self, path: &str, body: &Req) -> Result<Resp, ApiError>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.post(&url).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            // Non-2xx is failure no matter what the body says.
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl ResumeApi for HttpResumeApi {
    async fn generate_questions(&self, area: &str) -> Result<Vec<String>, ApiError> {
        debug!("Requesting questions for area {:?}", area);
        let response: QuestionResponse = self
            .post_json(
                QUESTIONS_PATH,
                &QuestionRequest {
                    area: area.to_string(),
                },
            )
            .await?;
        Ok(response.questions)
    }

    async fn generate_resume(&self, request: &GenerationRequest) -> Result<String, ApiError> {
        debug!(
            "Requesting résumé generation with {} answered questions",
            request.question_answers.len()
        );
        let response: ResumeResponse = self.post_json(RESUME_PATH, request).await?;
        Ok(response.resume_markdown)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_includes_status_and_body() {
        let error = ApiError::Api {
            status: 503,
            message: "model overloaded".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "API error (status 503): model overloaded"
        );
    }

    #[test]
    fn test_endpoint_paths_match_backend_contract() {
        assert_eq!(QUESTIONS_PATH, "/llm/gerar-perguntas");
        assert_eq!(RESUME_PATH, "/llm/gerar-curriculo");
    }
}
