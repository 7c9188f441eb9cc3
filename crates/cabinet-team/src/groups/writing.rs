//! Writing group: email, documents, translation, summaries

use crate::groups::{object, respond};
use crate::specialist::Specialist;
use cabinet_tools::{Error, ParameterMap, Result, ToolHandler};
use serde::Deserialize;
use serde_json::Value;

/// Tool name
pub const NAME: &str = "perform_writing";

/// Model-facing description
pub const DESCRIPTION: &str = "\
Performs writing and translation work: email, documents, translation, and
summarization.

Actions:
- write_email: draft an email
- write_document: draft a report, proposal, or other document
- translate_text: translate text between languages
- summarize_text: condense text to a target length";

fn default_tone() -> String {
    "professional".to_string()
}

fn default_length() -> String {
    "medium".to_string()
}

fn default_target_length() -> String {
    "short".to_string()
}

/// Writing actions
#[derive(Debug, Deserialize)]
#[serde(tag = "action", content = "params", rename_all = "snake_case")]
pub enum WritingAction {
    /// Draft an email
    WriteEmail {
        /// Why the email is being sent
        purpose: String,
        /// Who receives it
        recipient: String,
        /// Points the email must make
        key_points: String,
        /// Tone, defaults to professional
        #[serde(default = "default_tone")]
        tone: String,
    },
    /// Draft a document
    WriteDocument {
        /// Document kind (report, proposal, ...)
        doc_type: String,
        /// Subject
        topic: String,
        /// Content details to include
        details: String,
        /// Target length, defaults to medium
        #[serde(default = "default_length")]
        length: String,
    },
    /// Translate text
    TranslateText {
        /// Text to translate
        text: String,
        /// Source language
        source_lang: String,
        /// Target language
        target_lang: String,
    },
    /// Condense text
    SummarizeText {
        /// Text to summarize
        text: String,
        /// Target length, defaults to short
        #[serde(default = "default_target_length")]
        target_length: String,
    },
}

impl WritingAction {
    fn field(&self) -> &'static str {
        match self {
            Self::WriteEmail { .. } => "email",
            Self::WriteDocument { .. } => "document",
            Self::TranslateText { .. } => "translation",
            Self::SummarizeText { .. } => "summary",
        }
    }

    fn render(&self) -> String {
        match self {
            Self::WriteEmail {
                purpose,
                recipient,
                key_points,
                tone,
            } => format!(
                "Write an email.\n\n\
                 Purpose: {}\nRecipient: {}\nKey points: {}\nTone: {}\n\n\
                 Provide a complete email with subject line, greeting, body,\n\
                 and sign-off. Keep it as short as the content allows.",
                purpose, recipient, key_points, tone
            ),
            Self::WriteDocument {
                doc_type,
                topic,
                details,
                length,
            } => format!(
                "Write a {} about: {}\n\nDetails to cover:\n{}\n\n\
                 Target length: {}. Use clear headings and lead each section\n\
                 with its conclusion.",
                doc_type, topic, details, length
            ),
            Self::TranslateText {
                text,
                source_lang,
                target_lang,
            } => format!(
                "Translate the following text from {} to {}. Preserve tone,\n\
                 register, and all factual content. Return only the\n\
                 translation.\n\n{}",
                source_lang, target_lang, text
            ),
            Self::SummarizeText {
                text,
                target_length,
            } => format!(
                "Summarize the following text. Target length: {}. Keep every\n\
                 number and commitment; drop filler.\n\n{}",
                target_length, text
            ),
        }
    }
}

/// Handler backed by the writing specialist
pub struct WritingTool {
    specialist: Specialist,
}

impl WritingTool {
    /// Create the tool
    #[must_use]
    pub fn new(specialist: Specialist) -> Self {
        Self { specialist }
    }

    /// Declared parameters for registration
    #[must_use]
    pub fn parameters() -> ParameterMap {
        object(serde_json::json!({
            "action": {
                "type": "string",
                "enum": ["write_email", "write_document", "translate_text", "summarize_text"],
                "description": "Which writing task to perform"
            },
            "params": {
                "type": "object",
                "description": "Parameters for the chosen action",
                "properties": {
                    "purpose": {"type": "string"},
                    "recipient": {"type": "string"},
                    "key_points": {"type": "string"},
                    "tone": {"type": "string"},
                    "doc_type": {"type": "string"},
                    "topic": {"type": "string"},
                    "details": {"type": "string"},
                    "length": {"type": "string"},
                    "text": {"type": "string"},
                    "source_lang": {"type": "string"},
                    "target_lang": {"type": "string"},
                    "target_length": {"type": "string"}
                }
            }
        }))
    }
}

#[async_trait::async_trait]
impl ToolHandler for WritingTool {
    async fn call(&self, arguments: Value) -> Result<Value> {
        let action: WritingAction = serde_json::from_value(arguments)
            .map_err(|e| Error::InvalidInput(format!("{}: {}", NAME, e)))?;
        let field = action.field();
        let text = self.specialist.consult(action.render()).await?;
        Ok(respond(&self.specialist, field, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_defaults_to_professional() {
        let action: WritingAction = serde_json::from_value(serde_json::json!({
            "action": "write_email",
            "params": {
                "purpose": "intro",
                "recipient": "partner",
                "key_points": "we ship in May"
            }
        }))
        .unwrap();

        let prompt = action.render();
        assert!(prompt.contains("Tone: professional"));
        assert_eq!(action.field(), "email");
    }

    #[test]
    fn test_parse_translate() {
        let action: WritingAction = serde_json::from_value(serde_json::json!({
            "action": "translate_text",
            "params": {"text": "안녕하세요", "source_lang": "Korean", "target_lang": "English"}
        }))
        .unwrap();
        assert!(action.render().contains("from Korean to English"));
    }
}
