use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Vai trò của người gửi tin nhắn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Bot => "Bot",
        }
    }
}

/// Domain model đại diện một tin nhắn chat.
///
/// `content` thường là chuỗi, nhưng server có thể trả về object JSON
/// nên giữ nguyên dạng `Value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub role: Role,
    pub content: Value,
    /// Epoch milliseconds.
    pub timestamp: i64,
}

impl Message {
    /// Text shown in the chat area: strings verbatim, anything else
    /// rendered as compact JSON.
    pub fn display_content(&self) -> String {
        match &self.content {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }
}
