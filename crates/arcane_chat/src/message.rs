//! Chat message types
//!
//! Message kinds are closed sum types; consumers pattern-match
//! exhaustively rather than downcasting.

use serde::{Deserialize, Serialize};

/// Who authored a message
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One renderable block inside a message
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MessageBlock {
    /// Plain prose
    Text { text: String },
    /// Fenced code with an optional language tag
    Code {
        language: Option<String>,
        code: String,
    },
    /// Quoted text
    Quote { text: String },
}

impl MessageBlock {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn code(language: Option<&str>, code: impl Into<String>) -> Self {
        Self::Code {
            language: language.map(str::to_string),
            code: code.into(),
        }
    }

    pub fn quote(text: impl Into<String>) -> Self {
        Self::Quote { text: text.into() }
    }
}

/// A chat message: an author plus an ordered list of blocks
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub blocks: Vec<MessageBlock>,
}

impl ChatMessage {
    /// Single-block plain-text message
    pub fn text(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            blocks: vec![MessageBlock::text(text)],
        }
    }

    /// Flatten the message to plain text, one line per block
    pub fn plain_text(&self) -> String {
        let lines: Vec<&str> = self
            .blocks
            .iter()
            .map(|block| match block {
                MessageBlock::Text { text } => text.as_str(),
                MessageBlock::Code { code, .. } => code.as_str(),
                MessageBlock::Quote { text } => text.as_str(),
            })
            .collect();
        lines.join("\n")
    }
}
