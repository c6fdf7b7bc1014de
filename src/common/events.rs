use serde_json::Value;

/// Sự kiện từ tầng mạng gửi lên UI.
#[derive(Debug, Clone)]
pub enum NetworkEvent {
    /// Server trả lời thành công; payload là `message.content` thô.
    ReplyReceived(Value),
    /// Request thất bại (lỗi mạng, status xấu, body không parse được).
    ReplyFailed,
}
