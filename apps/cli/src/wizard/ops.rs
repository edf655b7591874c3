//! Screen operations — what each screen's primary action actually does.
//!
//! Every network operation follows the same shape: refuse to start while a
//! call is in flight, take a token from the session, run the call, hand the
//! outcome back under that token. Failures land in `session.error`; nothing
//! here returns them to the caller.

use tracing::{info, warn};

use crate::api::ResumeApi;
use crate::wizard::screen::Screen;
use crate::wizard::session::Session;

/// Question intake: fetches questions for the area currently in the
/// session. No-op while another call is in flight.
pub async fn fetch_questions(session: &mut Session, api: &dyn ResumeApi) {
    if session.is_loading() {
        return;
    }
    let area = session.area.clone();
    info!("Fetching questions for area {:?}", area);

    let token = session.begin_request();
    let outcome = api.generate_questions(&area).await;
    if session.apply_questions(token, outcome) {
        match &session.error {
            None => info!("Received {} questions", session.questions.len()),
            Some(error) => warn!("Question fetch failed: {error}"),
        }
    }
}

/// Answer collection: freezes the current answers and profile into the
/// generation payload and moves on to the generation screen.
pub fn submit_answers(session: &mut Session) {
    session.pending_request = Some(session.assemble_request());
    session.goto(Screen::ResumeGeneration);
}

/// Résumé generation: sends the pending payload and stores the Markdown
/// result. No-op without a payload or while another call is in flight.
pub async fn fetch_resume(session: &mut Session, api: &dyn ResumeApi) {
    if session.is_loading() {
        return;
    }
    let Some(request) = session.pending_request.clone() else {
        return;
    };
    info!(
        "Generating résumé from {} answered questions",
        request.question_answers.len()
    );

    // Each generation starts from a blank document, like the original
    // screen did on every entry.
    session.resume_markdown = None;

    let token = session.begin_request();
    let outcome = api.generate_resume(&request).await;
    if session.apply_resume(token, outcome) {
        match &session.error {
            None => info!("Résumé generated"),
            Some(error) => warn!("Résumé generation failed: {error}"),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockResumeApi;

    #[tokio::test]
    async fn test_fetch_questions_issues_exactly_one_request() {
        let api = MockResumeApi::builder()
            .with_questions(vec!["Q1".to_string()])
            .build();
        let mut session = Session::new();
        session.area = "Backend Developer".to_string();

        fetch_questions(&mut session, &api).await;

        assert_eq!(api.question_calls(), vec!["Backend Developer"]);
        assert_eq!(session.questions, vec!["Q1"]);
    }

    #[tokio::test]
    async fn test_fetch_questions_count_matches_response() {
        let api = MockResumeApi::builder()
            .with_questions(vec!["Q1".to_string(), "Q2".to_string(), "Q3".to_string()])
            .build();
        let mut session = Session::new();

        fetch_questions(&mut session, &api).await;

        assert_eq!(session.questions.len(), 3);
    }

    #[tokio::test]
    async fn test_fetch_questions_failure_then_retry_recovers() {
        let api = MockResumeApi::builder()
            .with_questions_failure(500, "temporarily unavailable")
            .with_questions(vec!["Q1".to_string()])
            .build();
        let mut session = Session::new();

        fetch_questions(&mut session, &api).await;
        assert!(session.error.is_some());
        assert!(session.questions.is_empty());

        fetch_questions(&mut session, &api).await;
        assert!(session.error.is_none());
        assert_eq!(session.questions, vec!["Q1"]);
        assert_eq!(api.question_calls().len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_questions_is_ignored_while_loading() {
        let api = MockResumeApi::builder().build();
        let mut session = Session::new();
        session.begin_request();

        fetch_questions(&mut session, &api).await;

        assert!(api.question_calls().is_empty());
        assert!(session.is_loading());
    }

    #[tokio::test]
    async fn test_submit_answers_moves_to_generation_with_payload() {
        let mut session = Session::new();
        session.questions = vec!["Q1".to_string()];
        session.set_answer(0, "A1".to_string());

        submit_answers(&mut session);

        assert_eq!(session.screen, Screen::ResumeGeneration);
        let request = session.pending_request.as_ref().unwrap();
        assert_eq!(request.question_answers[0].answer, "A1");
    }

    #[tokio::test]
    async fn test_fetch_resume_without_payload_makes_no_call() {
        let api = MockResumeApi::builder().build();
        let mut session = Session::new();

        fetch_resume(&mut session, &api).await;

        assert!(api.resume_calls().is_empty());
        assert!(session.resume_markdown.is_none());
    }

    #[tokio::test]
    async fn test_fetch_resume_stores_markdown() {
        let api = MockResumeApi::builder()
            .with_resume("# Ana\n\nBackend developer.".to_string())
            .build();
        let mut session = Session::new();
        session.questions = vec!["Q1".to_string()];
        submit_answers(&mut session);

        fetch_resume(&mut session, &api).await;

        assert_eq!(
            session.resume_markdown.as_deref(),
            Some("# Ana\n\nBackend developer.")
        );
        assert_eq!(api.resume_calls().len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_resume_failure_sets_error_and_clears_document() {
        let api = MockResumeApi::builder()
            .with_resume_failure(502, "bad gateway")
            .build();
        let mut session = Session::new();
        session.questions = vec!["Q1".to_string()];
        session.resume_markdown = Some("# Leftover".to_string());
        submit_answers(&mut session);

        fetch_resume(&mut session, &api).await;

        assert!(session.resume_markdown.is_none());
        let error = session.error.as_deref().unwrap();
        assert!(error.contains("failed to generate résumé"));
        assert!(error.contains("502"));
    }
}
