//! Wire payloads for the résumé backend.
//!
//! The backend contract uses Portuguese field names; Rust field names stay
//! English and serde renames bridge the two. Response fields the backend
//! omits or sends as `null` fall back to empty values rather than failing
//! deserialization.

use serde::{Deserialize, Deserializer, Serialize};

/// Request body for `POST /llm/gerar-perguntas`.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionRequest {
    #[serde(rename = "areaAtuacao")]
    pub area: String,
}

/// Response body for question generation. A missing or `null` `perguntas`
/// field is an empty list, not an error.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionResponse {
    #[serde(rename = "perguntas", default, deserialize_with = "null_to_default")]
    pub questions: Vec<String>,
}

/// One interview question paired with the user's free-text answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionAnswer {
    #[serde(rename = "pergunta")]
    pub question: String,
    #[serde(rename = "resposta")]
    pub answer: String,
}

/// Request body for `POST /llm/gerar-curriculo`, sent verbatim as assembled
/// on the answer screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    #[serde(rename = "perguntasRespostas")]
    pub question_answers: Vec<QuestionAnswer>,
    #[serde(rename = "areaAtuacao")]
    pub area: String,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "celular")]
    pub phone: String,
    #[serde(rename = "cidade")]
    pub city: String,
    pub links: Vec<String>,
    /// Reserved by the contract; always sent as an empty string today.
    #[serde(rename = "contexto")]
    pub context: String,
}

/// Response body for résumé generation. A missing or `null` `curriculo`
/// field is an empty document, not an error.
#[derive(Debug, Clone, Deserialize)]
pub struct ResumeResponse {
    #[serde(rename = "curriculo", default, deserialize_with = "null_to_default")]
    pub resume_markdown: String,
}

/// Backends answer with `null` as readily as they omit a field; both mean
/// "nothing here" and decode to the type's default.
fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let value = Option::<T>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
