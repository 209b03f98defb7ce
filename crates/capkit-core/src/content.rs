//! Resource content chunks and prompt messages.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One chunk of resource content: text or raw bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentChunk {
    Text(String),
    Blob(Vec<u8>),
}

impl ContentChunk {
    /// The chunk as text. Binary payloads decode as lossy UTF-8.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            ContentChunk::Text(s) => Cow::Borrowed(s),
            ContentChunk::Blob(bytes) => String::from_utf8_lossy(bytes),
        }
    }
}

/// The result of resolving a resource: an ordered sequence of chunks.
///
/// Never cached or persisted; each resolution produces a fresh value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceContent {
    pub chunks: Vec<ContentChunk>,
}

impl ResourceContent {
    pub fn new(chunks: Vec<ContentChunk>) -> Self {
        Self { chunks }
    }

    /// Single text chunk, the common case in this system.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            chunks: vec![ContentChunk::Text(text.into())],
        }
    }

    /// Join all chunks into one string, one chunk per line.
    pub fn to_text(&self) -> String {
        self.chunks
            .iter()
            .map(|c| c.as_text().into_owned())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Conversation role. Open set: the three well-known roles stay typed,
/// anything else round-trips through `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    System,
    User,
    Assistant,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::Other(s) => s,
        }
    }

    /// Role label with the first letter upper-cased, for display lines
    /// like `System: ...`.
    pub fn title_case(&self) -> String {
        let s = self.as_str();
        let mut chars = s.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        match s.as_str() {
            "system" => Role::System,
            "user" => Role::User,
            "assistant" => Role::Assistant,
            _ => Role::Other(s),
        }
    }
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        Role::from(s.to_string())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One (role, content) pair in a rendered prompt. Sequence order is
/// conversation order and must be preserved end-to-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptMessage {
    pub role: Role,
    pub content: String,
}

impl PromptMessage {
    pub fn new(role: impl Into<Role>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blob_chunk_decodes_lossy() {
        let chunk = ContentChunk::Blob(vec![0x68, 0x69, 0xFF]);
        assert_eq!(chunk.as_text(), "hi\u{FFFD}");
    }

    #[test]
    fn to_text_joins_chunks_with_newlines() {
        let content = ResourceContent::new(vec![
            ContentChunk::Text("first".to_string()),
            ContentChunk::Blob(b"second".to_vec()),
        ]);
        assert_eq!(content.to_text(), "first\nsecond");
    }

    #[test]
    fn role_round_trips_unknown_labels() {
        let role = Role::from("critic");
        assert_eq!(role, Role::Other("critic".to_string()));
        assert_eq!(role.as_str(), "critic");

        let json = serde_json::to_string(&role).unwrap();
        assert_eq!(json, "\"critic\"");
        let back: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(back, role);
    }

    #[test]
    fn role_title_case_for_display() {
        assert_eq!(Role::System.title_case(), "System");
        assert_eq!(Role::from("human").title_case(), "Human");
    }

    #[test]
    fn prompt_message_serializes_role_as_string() {
        let msg = PromptMessage::new(Role::User, "hello");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["role"], "user");
        assert_eq!(json["content"], "hello");
    }
}
