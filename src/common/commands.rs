use crate::common::types::Message;

/// Lệnh UI gửi xuống tầng mạng.
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Gửi toàn bộ lịch sử hội thoại để lấy câu trả lời của bot.
    FetchReply(Vec<Message>),
}
