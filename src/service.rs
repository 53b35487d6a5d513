//! Response envelope of the assistant backend
//!
//! The backend exposes four operations (translate, summarize, quiz generation
//! and chat) that all answer with the same `{success, data, error}` envelope.
//! This module turns that envelope into a [`ServiceResult`], renders text
//! replies to markup, and validates the structured quiz payload. Requests,
//! prompts and transport live with the caller.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::core::render::Renderer;
use crate::utils::error::{ServiceError, ServiceResult};

/// Backend operation, used to label errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    Translate,
    Summarize,
    GenerateQuiz,
    Chat,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Translate => write!(f, "translate"),
            Operation::Summarize => write!(f, "summarize"),
            Operation::GenerateQuiz => write!(f, "generateQuiz"),
            Operation::Chat => write!(f, "chat"),
        }
    }
}

/// Uniform success/error envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
    /// HTTP status reported by the backend, when it failed
    #[serde(default)]
    pub status: Option<u16>,
}

/// Status reported for failed envelopes that carry no code.
const UNKNOWN_FAILURE_STATUS: u16 = 500;

impl<T> Envelope<T> {
    /// A successful envelope carrying `data`.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            status: None,
        }
    }

    /// A failed envelope with a readable message.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            status: None,
        }
    }

    /// Unwrap the payload, mapping failure and missing data to errors.
    pub fn into_result(self, operation: Operation) -> ServiceResult<T> {
        if !self.success {
            let code = self.status.unwrap_or(UNKNOWN_FAILURE_STATUS);
            return Err(match self.error {
                Some(message) => ServiceError::status_with_message(code, message),
                None => ServiceError::status(code),
            });
        }
        self.data
            .ok_or_else(|| ServiceError::empty(operation.to_string()))
    }
}

impl Envelope<String> {
    /// Unwrap a text reply, treating blank text as an empty response.
    pub fn into_text(self, operation: Operation) -> ServiceResult<String> {
        let text = self.into_result(operation)?;
        if text.trim().is_empty() {
            return Err(ServiceError::empty(operation.to_string()));
        }
        Ok(text)
    }
}

/// Unwrap a text reply and render it to markup.
pub fn render_reply(
    renderer: &Renderer,
    envelope: Envelope<String>,
    operation: Operation,
) -> ServiceResult<String> {
    let text = envelope.into_text(operation)?;
    Ok(renderer.render(text.as_str()))
}

// =============================================================================
// Quiz payload
// =============================================================================

/// One multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    /// Zero-based index into `options`
    #[serde(alias = "answer", alias = "correct_answer")]
    pub correct_answer: usize,
    #[serde(default)]
    pub explanation: Option<String>,
}

/// Parse the quiz the model produced.
///
/// The JSON array may be wrapped in a code fence or surrounded by prose; the
/// outermost `[...]` is taken. Every question must have text, at least two
/// options and an answer index inside the options.
pub fn parse_quiz(text: &str) -> ServiceResult<Vec<QuizQuestion>> {
    if text.trim().is_empty() {
        return Err(ServiceError::empty(Operation::GenerateQuiz.to_string()));
    }

    let (start, end) = match (text.find('['), text.rfind(']')) {
        (Some(start), Some(end)) if start < end => (start, end),
        _ => {
            debug!("quiz reply without a JSON array");
            return Err(ServiceError::malformed("no JSON array of questions found"));
        }
    };

    let questions: Vec<QuizQuestion> = serde_json::from_str(&text[start..=end])?;
    if questions.is_empty() {
        return Err(ServiceError::empty(Operation::GenerateQuiz.to_string()));
    }

    for (idx, q) in questions.iter().enumerate() {
        let problem = if q.question.trim().is_empty() {
            Some("question text is empty")
        } else if q.options.len() < 2 {
            Some("fewer than two options")
        } else if q.correct_answer >= q.options.len() {
            Some("answer index out of range")
        } else {
            None
        };
        if let Some(problem) = problem {
            return Err(ServiceError::MalformedResponse {
                message: "invalid quiz question".to_string(),
                detail: Some(format!("question {}: {}", idx + 1, problem)),
            });
        }
    }

    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const QUIZ: &str = r#"[
        {"question": "2 + 2?", "options": ["3", "4"], "correctAnswer": 1},
        {"question": "Capital of France?", "options": ["Paris", "Rome", "Oslo"],
         "answer": 0, "explanation": "Paris"}
    ]"#;

    #[test]
    fn test_envelope_success() {
        let env: Envelope<String> =
            serde_json::from_str(r#"{"success": true, "data": "Hola"}"#).unwrap();
        assert_eq!(env.into_text(Operation::Translate).unwrap(), "Hola");
    }

    #[test]
    fn test_envelope_failure_carries_message() {
        let env: Envelope<String> =
            serde_json::from_str(r#"{"success": false, "error": "quota exceeded", "status": 429}"#)
                .unwrap();
        assert_eq!(
            env.into_result(Operation::Chat),
            Err(ServiceError::status_with_message(429, "quota exceeded"))
        );
    }

    #[test]
    fn test_envelope_blank_text_is_empty_response() {
        let err = Envelope::ok("   ".to_string())
            .into_text(Operation::Summarize)
            .unwrap_err();
        assert_eq!(err, ServiceError::empty("summarize"));

        let env: Envelope<String> = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(matches!(
            env.into_result(Operation::Summarize),
            Err(ServiceError::EmptyResponse { .. })
        ));
    }

    #[test]
    fn test_render_reply() {
        let out = render_reply(
            &Renderer::default(),
            Envelope::ok("**Summary**: $x^2$".to_string()),
            Operation::Summarize,
        )
        .unwrap();
        assert_eq!(
            out,
            "<p><strong>Summary</strong>: <span class=\"math-inline\">x<sup>2</sup></span></p>"
        );

        let err = render_reply(
            &Renderer::default(),
            Envelope::failed("offline"),
            Operation::Chat,
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_parse_quiz() {
        let quiz = parse_quiz(QUIZ).unwrap();
        assert_eq!(quiz.len(), 2);
        assert_eq!(quiz[0].correct_answer, 1);
        assert_eq!(quiz[1].explanation.as_deref(), Some("Paris"));
    }

    #[test]
    fn test_parse_quiz_in_code_fence() {
        let fenced = format!("Here is your quiz:\n```json\n{}\n```", QUIZ);
        assert_eq!(parse_quiz(&fenced).unwrap().len(), 2);
    }

    #[test]
    fn test_parse_quiz_shape_errors() {
        assert!(matches!(
            parse_quiz(""),
            Err(ServiceError::EmptyResponse { .. })
        ));
        assert!(matches!(
            parse_quiz("[]"),
            Err(ServiceError::EmptyResponse { .. })
        ));
        assert!(matches!(
            parse_quiz("no quiz today"),
            Err(ServiceError::MalformedResponse { .. })
        ));
        assert!(matches!(
            parse_quiz(r#"[{"question": "q"}]"#),
            Err(ServiceError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn test_parse_quiz_rejects_bad_answer_index() {
        let err = parse_quiz(r#"[{"question": "q", "options": ["a", "b"], "answer": 2}]"#)
            .unwrap_err();
        assert!(err.to_string().contains("question 1: answer index out of range"));
    }
}
