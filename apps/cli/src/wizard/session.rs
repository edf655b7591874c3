//! Session state — the explicit container every screen reads and writes.
//!
//! The browser version carried accumulated input through router navigation
//! state; here it is one owned struct handed through the wizard loop.
//! Network completions must present the [`RequestToken`] they were issued
//! at start: a token older than the latest one is discarded without
//! touching any field, so a superseded call can never overwrite the result
//! of the call that replaced it.

use std::collections::BTreeMap;

use crate::api::ApiError;
use crate::models::payload::{GenerationRequest, QuestionAnswer};
use crate::models::profile::ApplicantProfile;
use crate::wizard::screen::Screen;

/// Proof that a network call was started through [`Session::begin_request`].
/// Carries the sequence number checked at apply time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

#[derive(Debug)]
pub struct Session {
    pub screen: Screen,
    /// Target job area as typed on the intake screen.
    pub area: String,
    /// Questions returned by the backend, in response order.
    pub questions: Vec<String>,
    /// Payload assembled on the answer screen, consumed by generation.
    pub pending_request: Option<GenerationRequest>,
    pub profile: ApplicantProfile,
    /// The generated document, once a generation call succeeded.
    pub resume_markdown: Option<String>,
    /// Error message for the current screen. Navigation clears it.
    pub error: Option<String>,
    answers: BTreeMap<usize, String>,
    loading: bool,
    latest_token: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::starting_at(Screen::Landing)
    }

    /// Opens the wizard at an arbitrary screen with nothing accumulated,
    /// matching what a direct route entry used to do.
    pub fn starting_at(screen: Screen) -> Self {
        Session {
            screen,
            area: String::new(),
            questions: Vec::new(),
            pending_request: None,
            profile: ApplicantProfile::default(),
            resume_markdown: None,
            error: None,
            answers: BTreeMap::new(),
            loading: false,
            latest_token: 0,
        }
    }

    /// Moves to another screen. Errors are screen-local, so navigating
    /// drops them; accumulated input survives.
    pub fn goto(&mut self, screen: Screen) {
        self.screen = screen;
        self.error = None;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_questions(&self) -> bool {
        !self.questions.is_empty()
    }

    // ────────────────────────────────────────────────────────────────────
    // Request lifecycle
    // ────────────────────────────────────────────────────────────────────

    /// Marks a network call as started: bumps the token, raises the loading
    /// flag and clears the previous attempt's error.
    pub fn begin_request(&mut self) -> RequestToken {
        self.latest_token += 1;
        self.loading = true;
        self.error = None;
        RequestToken(self.latest_token)
    }

    fn settle(&mut self, token: RequestToken) -> bool {
        if token.0 != self.latest_token {
            // A newer request supersedes this one; its outcome is void.
            return false;
        }
        self.loading = false;
        true
    }

    /// Applies a question-fetch outcome. Returns whether the outcome was
    /// accepted; a stale token leaves every field untouched.
    pub fn apply_questions(
        &mut self,
        token: RequestToken,
        outcome: Result<Vec<String>, ApiError>,
    ) -> bool {
        if !self.settle(token) {
            return false;
        }
        match outcome {
            Ok(questions) => {
                self.questions = questions;
                // Old answers were written against the old list.
                self.answers.clear();
            }
            Err(error) => self.error = Some(format!("failed to fetch questions: {error}")),
        }
        true
    }

    /// Applies a résumé-generation outcome under the same token rule.
    pub fn apply_resume(&mut self, token: RequestToken, outcome: Result<String, ApiError>) -> bool {
        if !self.settle(token) {
            return false;
        }
        match outcome {
            Ok(markdown) => self.resume_markdown = Some(markdown),
            Err(error) => self.error = Some(format!("failed to generate résumé: {error}")),
        }
        true
    }

    // ────────────────────────────────────────────────────────────────────
    // Answers and payload assembly
    // ────────────────────────────────────────────────────────────────────

    pub fn set_answer(&mut self, index: usize, text: String) {
        self.answers.insert(index, text);
    }

    /// The answer for a question, defaulting to empty for anything the
    /// user skipped.
    pub fn answer(&self, index: usize) -> &str {
        self.answers.get(&index).map(String::as_str).unwrap_or("")
    }

    /// Builds the generation payload: every question paired with its
    /// answer (or an empty string), plus the profile fields. `context` is
    /// reserved by the contract and always empty.
    pub fn assemble_request(&self) -> GenerationRequest {
        GenerationRequest {
            question_answers: self
                .questions
                .iter()
                .enumerate()
                .map(|(index, question)| QuestionAnswer {
                    question: question.clone(),
                    answer: self.answer(index).to_string(),
                })
                .collect(),
            area: self.area.clone(),
            name: self.profile.name.clone(),
            email: self.profile.email.clone(),
            phone: self.profile.phone.clone(),
            city: self.profile.city.clone(),
            links: self.profile.links(),
            context: String::new(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
