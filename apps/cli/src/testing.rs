//! Shared test support: a scriptable in-memory backend.
//!
//! Kept in the library (not behind `cfg(test)`) so integration tests can
//! drive the wizard without a network.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::{ApiError, ResumeApi};
use crate::models::payload::GenerationRequest;

type QuestionOutcome = Result<Vec<String>, (u16, String)>;
type ResumeOutcome = Result<String, (u16, String)>;

/// Scriptable [`ResumeApi`]. Outcomes are consumed in the order the builder
/// added them; when the script runs out, calls fall back to empty
/// successes. Every call is recorded for inspection.
pub struct MockResumeApi {
    question_outcomes: Mutex<VecDeque<QuestionOutcome>>,
    resume_outcomes: Mutex<VecDeque<ResumeOutcome>>,
    question_calls: Mutex<Vec<String>>,
    resume_calls: Mutex<Vec<GenerationRequest>>,
}

impl MockResumeApi {
    pub fn builder() -> MockResumeApiBuilder {
        MockResumeApiBuilder::default()
    }

    /// Areas passed to `generate_questions`, in call order.
    pub fn question_calls(&self) -> Vec<String> {
        self.question_calls.lock().unwrap().clone()
    }

    /// Payloads passed to `generate_resume`, in call order.
    pub fn resume_calls(&self) -> Vec<GenerationRequest> {
        self.resume_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ResumeApi for MockResumeApi {
    async fn generate_questions(&self, area: &str) -> Result<Vec<String>, ApiError> {
        self.question_calls.lock().unwrap().push(area.to_string());
        match self.question_outcomes.lock().unwrap().pop_front() {
            Some(Ok(questions)) => Ok(questions),
            Some(Err((status, message))) => Err(ApiError::Api { status, message }),
            None => Ok(Vec::new()),
        }
    }

    async fn generate_resume(&self, request: &GenerationRequest) -> Result<String, ApiError> {
        self.resume_calls.lock().unwrap().push(request.clone());
        match self.resume_outcomes.lock().unwrap().pop_front() {
            Some(Ok(markdown)) => Ok(markdown),
            Some(Err((status, message))) => Err(ApiError::Api { status, message }),
            None => Ok(String::new()),
        }
    }
}

#[derive(Default)]
pub struct MockResumeApiBuilder {
    question_outcomes: VecDeque<QuestionOutcome>,
    resume_outcomes: VecDeque<ResumeOutcome>,
}

impl MockResumeApiBuilder {
    pub fn with_questions(mut self, questions: Vec<String>) -> Self {
        self.question_outcomes.push_back(Ok(questions));
        self
    }

    pub fn with_questions_failure(mut self, status: u16, message: &str) -> Self {
        self.question_outcomes
            .push_back(Err((status, message.to_string())));
        self
    }

    pub fn with_resume(mut self, markdown: impl Into<String>) -> Self {
        self.resume_outcomes.push_back(Ok(markdown.into()));
        self
    }

    pub fn with_resume_failure(mut self, status: u16, message: &str) -> Self {
        self.resume_outcomes
            .push_back(Err((status, message.to_string())));
        self
    }

    pub fn build(self) -> MockResumeApi {
        MockResumeApi {
            question_outcomes: Mutex::new(self.question_outcomes),
            resume_outcomes: Mutex::new(self.resume_outcomes),
            question_calls: Mutex::new(Vec::new()),
            resume_calls: Mutex::new(Vec::new()),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_returns_scripted_outcomes_in_order() {
        let api = MockResumeApi::builder()
            .with_questions(vec!["Q1".to_string()])
            .with_questions_failure(500, "down")
            .build();

        assert_eq!(api.generate_questions("dev").await.unwrap(), vec!["Q1"]);
        let error = api.generate_questions("dev").await.unwrap_err();
        assert!(matches!(error, ApiError::Api { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_mock_falls_back_to_empty_success() {
        let api = MockResumeApi::builder().build();
        assert!(api.generate_questions("dev").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_mock_records_calls() {
        let api = MockResumeApi::builder().build();
        api.generate_questions("Backend Developer").await.unwrap();
        api.generate_questions("QA Engineer").await.unwrap();

        assert_eq!(api.question_calls(), vec!["Backend Developer", "QA Engineer"]);
        assert!(api.resume_calls().is_empty());
    }
}
