//! Message types for the Messages API
//!
//! Conversation turns carry either plain text or a list of typed content
//! blocks. The block structure is the wire format: assistant turns that
//! request tools keep their `tool_use` blocks verbatim, and the matching
//! results go back as a batch of `tool_result` blocks in one user turn.

use serde::{Deserialize, Serialize};

/// Role of a conversation turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// User turn (including tool results)
    User,
    /// Assistant turn (including tool requests)
    Assistant,
}

impl Role {
    /// Returns the string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// One typed content block within a turn
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Plain text segment
    Text {
        /// The text
        text: String,
    },
    /// A tool invocation requested by the model
    ToolUse {
        /// Invocation identifier, echoed back in the matching result block
        id: String,
        /// Tool name
        name: String,
        /// Arguments as a JSON object
        input: serde_json::Value,
    },
    /// The result of one tool invocation
    ToolResult {
        /// Identifier of the `tool_use` block this result answers
        tool_use_id: String,
        /// Serialized result, or an error message
        content: String,
        /// Set when the invocation failed
        #[serde(skip_serializing_if = "Option::is_none")]
        is_error: Option<bool>,
    },
}

/// Turn content: plain text or a list of blocks
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Content {
    /// Plain text
    Text(String),
    /// Structured content blocks
    Blocks(Vec<ContentBlock>),
}

/// A turn in a conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Role of the sender
    pub role: Role,
    /// Turn content
    pub content: Content,
}

impl Message {
    /// Create a plain-text user turn
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: Content::Text(content.into()),
        }
    }

    /// Create a plain-text assistant turn
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: Content::Text(content.into()),
        }
    }

    /// Create a user turn from content blocks (tool results)
    #[must_use]
    pub fn user_blocks(blocks: Vec<ContentBlock>) -> Self {
        Self {
            role: Role::User,
            content: Content::Blocks(blocks),
        }
    }

    /// Create an assistant turn from content blocks (tool requests)
    #[must_use]
    pub fn assistant_blocks(blocks: Vec<ContentBlock>) -> Self {
        Self {
            role: Role::Assistant,
            content: Content::Blocks(blocks),
        }
    }
}

/// Why the model stopped generating
///
/// Unknown values are preserved verbatim so callers can surface them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Natural end of the response
    EndTurn,
    /// The response requests one or more tool invocations
    ToolUse,
    /// Output token limit reached
    MaxTokens,
    /// A stop sequence matched
    StopSequence,
    /// Any other value returned by the API
    #[serde(untagged)]
    Other(String),
}

impl StopReason {
    /// Returns the wire string
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::EndTurn => "end_turn",
            Self::ToolUse => "tool_use",
            Self::MaxTokens => "max_tokens",
            Self::StopSequence => "stop_sequence",
            Self::Other(value) => value,
        }
    }
}

impl std::fmt::Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Cache hint for a system block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheControl {
    /// Cache type, currently always "ephemeral"
    #[serde(rename = "type")]
    pub control_type: String,
}

impl CacheControl {
    /// Ephemeral prompt cache entry
    #[must_use]
    pub fn ephemeral() -> Self {
        Self {
            control_type: "ephemeral".to_string(),
        }
    }
}

/// One block of system instructions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemBlock {
    /// Block type, always "text"
    #[serde(rename = "type")]
    pub block_type: String,
    /// Instruction text
    pub text: String,
    /// Optional cache hint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_control: Option<CacheControl>,
}

impl SystemBlock {
    /// Create a plain system block
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            block_type: "text".to_string(),
            text: text.into(),
            cache_control: None,
        }
    }

    /// Create a system block with an ephemeral cache hint
    ///
    /// Large fixed instructions should use this: the block is identical on
    /// every turn, so repeated calls hit the prompt cache.
    #[must_use]
    pub fn cached(text: impl Into<String>) -> Self {
        Self {
            block_type: "text".to_string(),
            text: text.into(),
            cache_control: Some(CacheControl::ephemeral()),
        }
    }
}

/// Token usage reported by the API
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Input tokens consumed
    pub input_tokens: u32,
    /// Output tokens generated
    pub output_tokens: u32,
}

/// A request to the Messages API
#[derive(Debug, Clone, Serialize)]
pub struct MessageRequest {
    /// Model to use
    pub model: String,
    /// Maximum output tokens
    pub max_tokens: u32,
    /// System instruction blocks
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub system: Vec<SystemBlock>,
    /// Conversation turns
    pub messages: Vec<Message>,
    /// Tool manifest offered to the model
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<crate::tools::ToolDefinition>,
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl MessageRequest {
    /// Create a request for the given model
    #[must_use]
    pub fn new(model: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            model: model.into(),
            max_tokens,
            system: Vec::new(),
            messages: Vec::new(),
            tools: Vec::new(),
            temperature: None,
        }
    }

    /// Set the system blocks
    #[must_use]
    pub fn with_system(mut self, system: Vec<SystemBlock>) -> Self {
        self.system = system;
        self
    }

    /// Set the conversation turns
    #[must_use]
    pub fn with_messages(mut self, messages: Vec<Message>) -> Self {
        self.messages = messages;
        self
    }

    /// Set the tool manifest
    #[must_use]
    pub fn with_tools(mut self, tools: Vec<crate::tools::ToolDefinition>) -> Self {
        self.tools = tools;
        self
    }

    /// Set the temperature
    #[must_use]
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// A response from the Messages API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelResponse {
    /// Response id
    pub id: String,
    /// Model that produced the response
    pub model: String,
    /// Response content blocks
    pub content: Vec<ContentBlock>,
    /// Stop condition
    pub stop_reason: Option<StopReason>,
    /// Token usage
    #[serde(default)]
    pub usage: Option<TokenUsage>,
}

impl ModelResponse {
    /// Concatenate all text segments of the response into one string
    #[must_use]
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(|block| match block {
                ContentBlock::Text { text } => Some(text.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("")
    }

    /// Whether the response contains any `tool_use` block
    #[must_use]
    pub fn has_tool_uses(&self) -> bool {
        self.content
            .iter()
            .any(|block| matches!(block, ContentBlock::ToolUse { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_constructors() {
        let user = Message::user("Hello");
        assert_eq!(user.role, Role::User);
        assert!(matches!(user.content, Content::Text(ref t) if t == "Hello"));

        let blocks = Message::assistant_blocks(vec![ContentBlock::Text {
            text: "Hi".to_string(),
        }]);
        assert_eq!(blocks.role, Role::Assistant);
    }

    #[test]
    fn test_content_block_serialization() {
        let block = ContentBlock::ToolUse {
            id: "toolu_1".to_string(),
            name: "perform_research".to_string(),
            input: serde_json::json!({"action": "research_topic"}),
        };
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["type"], "tool_use");
        assert_eq!(json["name"], "perform_research");
    }

    #[test]
    fn test_tool_result_error_flag() {
        let block = ContentBlock::ToolResult {
            tool_use_id: "toolu_1".to_string(),
            content: "Tool 'x' not found".to_string(),
            is_error: Some(true),
        };
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["is_error"], true);

        let ok = ContentBlock::ToolResult {
            tool_use_id: "toolu_2".to_string(),
            content: "{}".to_string(),
            is_error: None,
        };
        let json = serde_json::to_value(&ok).unwrap();
        assert!(json.get("is_error").is_none());
    }

    #[test]
    fn test_stop_reason_known_values() {
        let reason: StopReason = serde_json::from_str("\"end_turn\"").unwrap();
        assert_eq!(reason, StopReason::EndTurn);

        let reason: StopReason = serde_json::from_str("\"tool_use\"").unwrap();
        assert_eq!(reason, StopReason::ToolUse);
    }

    #[test]
    fn test_stop_reason_unknown_value() {
        let reason: StopReason = serde_json::from_str("\"pause_turn\"").unwrap();
        assert_eq!(reason, StopReason::Other("pause_turn".to_string()));
        assert_eq!(reason.as_str(), "pause_turn");
    }

    #[test]
    fn test_system_block_cache_control() {
        let block = SystemBlock::cached("You are a team leader.");
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["cache_control"]["type"], "ephemeral");

        let plain = SystemBlock::text("short");
        let json = serde_json::to_value(&plain).unwrap();
        assert!(json.get("cache_control").is_none());
    }

    #[test]
    fn test_request_skips_empty_tools() {
        let request = MessageRequest::new("claude-sonnet-4-5", 1024)
            .with_messages(vec![Message::user("hi")]);
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("tools").is_none());
        assert!(json.get("system").is_none());
    }

    #[test]
    fn test_response_text_concatenation() {
        let response = ModelResponse {
            id: "msg_1".to_string(),
            model: "claude-sonnet-4-5".to_string(),
            content: vec![
                ContentBlock::Text {
                    text: "Part one. ".to_string(),
                },
                ContentBlock::ToolUse {
                    id: "toolu_1".to_string(),
                    name: "x".to_string(),
                    input: serde_json::json!({}),
                },
                ContentBlock::Text {
                    text: "Part two.".to_string(),
                },
            ],
            stop_reason: Some(StopReason::EndTurn),
            usage: None,
        };
        assert_eq!(response.text(), "Part one. Part two.");
        assert!(response.has_tool_uses());
    }
}
