use std::fs;
use std::io;
use std::path::Path;

use chrono::Utc;
use serde_json::Value;

use crate::common::{Message, Role};

/// Lịch sử hội thoại trong bộ nhớ. Thứ tự chèn cũng là thứ tự thời gian.
///
/// Mọi việc cấp phát id đi qua đây: id lấy từ thời điểm gửi (epoch ms),
/// hai tin trong cùng một millisecond thì tin sau nhận `id trước + 1`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Id mới: strictly increasing, không bao giờ trùng trong một hội thoại.
    fn next_id(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        match self.messages.last() {
            Some(last) if now <= last.id => last.id + 1,
            _ => now,
        }
    }

    pub fn push_user(&mut self, text: &str) {
        self.push(Role::User, Value::String(text.to_string()));
    }

    pub fn push_bot(&mut self, content: Value) {
        self.push(Role::Bot, content);
    }

    fn push(&mut self, role: Role, content: Value) {
        let message = Message {
            id: self.next_id(),
            role,
            content,
            timestamp: Utc::now().timestamp_millis(),
        };
        self.messages.push(message);
    }

    /// Xoá tin nhắn theo id, giữ nguyên thứ tự phần còn lại.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.messages.len();
        self.messages.retain(|message| message.id != id);
        self.messages.len() < before
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// The export document is the literal serialized message array.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.messages)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let messages: Vec<Message> = serde_json::from_str(json)?;
        Ok(Self { messages })
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let json = self.to_json()?;
        fs::write(path, json)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut conversation = Conversation::new();
        // Các lần push liên tiếp rơi vào cùng một millisecond.
        for i in 0..20 {
            if i % 2 == 0 {
                conversation.push_user("tick");
            } else {
                conversation.push_bot(Value::String("tock".to_string()));
            }
        }

        let ids: Vec<i64> = conversation.messages().iter().map(|m| m.id).collect();
        for pair in ids.windows(2) {
            assert!(pair[0] < pair[1], "ids must be strictly increasing: {ids:?}");
        }
    }

    #[test]
    fn remove_deletes_exactly_one_and_preserves_order() {
        let mut conversation = Conversation::new();
        conversation.push_user("first");
        conversation.push_bot(Value::String("second".to_string()));
        conversation.push_user("third");

        let victim = conversation.messages()[1].id;
        assert!(conversation.remove(victim));
        assert_eq!(conversation.len(), 2);
        assert_eq!(conversation.messages()[0].display_content(), "first");
        assert_eq!(conversation.messages()[1].display_content(), "third");

        // Id không tồn tại thì không có gì thay đổi.
        assert!(!conversation.remove(victim));
        assert_eq!(conversation.len(), 2);
    }

    #[test]
    fn clear_empties_regardless_of_prior_state() {
        let mut conversation = Conversation::new();
        conversation.clear();
        assert!(conversation.is_empty());

        conversation.push_user("hello");
        conversation.push_bot(json!({"a": 1}));
        conversation.clear();
        assert!(conversation.is_empty());
    }

    #[test]
    fn json_round_trip_is_identical() {
        let mut conversation = Conversation::new();
        conversation.push_user("what is the answer?");
        conversation.push_bot(json!({"answer": 42, "confidence": "high"}));

        let exported = conversation.to_json().unwrap();
        let imported = Conversation::from_json(&exported).unwrap();
        assert_eq!(imported, conversation);
    }

    #[test]
    fn file_round_trip_is_identical() {
        let mut conversation = Conversation::new();
        conversation.push_user("ping");
        conversation.push_bot(Value::String("pong".to_string()));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("discussion.json");
        conversation.save_to_file(&path).unwrap();

        let loaded = Conversation::load_from_file(&path).unwrap();
        assert_eq!(loaded, conversation);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(Conversation::from_json("{not json").is_err());
        assert!(Conversation::from_json(r#"{"role": "user"}"#).is_err());
    }
}
