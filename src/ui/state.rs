use crate::chat::Conversation;
use crate::common::{Message, NetworkEvent};

/// Trạng thái cục bộ của UI.
pub struct AppState {
    pub conversation: Conversation,
    pub input_text: String,
    /// Đang chờ bot trả lời. Chỉ là cờ hiển thị, không chặn lần gửi thứ hai.
    pub bot_typing: bool,
    pub dark_mode: bool,
    /// Tin nhắn đang chờ người dùng xác nhận xoá.
    pub pending_delete: Option<i64>,
    /// Đường dẫn file cho export/import.
    pub transfer_path: String,
}

impl AppState {
    pub fn new(dark_mode: bool, transfer_path: String) -> Self {
        Self {
            conversation: Conversation::new(),
            input_text: String::new(),
            bot_typing: false,
            dark_mode,
            pending_delete: None,
            transfer_path,
        }
    }

    /// Gửi một tin nhắn. Input trắng thì không làm gì cả.
    ///
    /// Trả về snapshot toàn bộ lịch sử (đã gồm tin vừa thêm) để tầng mạng
    /// POST đi lấy câu trả lời.
    pub fn submit(&mut self, text: &str) -> Option<Vec<Message>> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        self.conversation.push_user(trimmed);
        self.input_text.clear();
        self.bot_typing = true;
        Some(self.conversation.messages().to_vec())
    }

    pub fn apply_event(&mut self, event: NetworkEvent) {
        match event {
            NetworkEvent::ReplyReceived(content) => {
                self.conversation.push_bot(content);
                self.bot_typing = false;
            }
            NetworkEvent::ReplyFailed => {
                // Hội thoại giữ nguyên, chỉ tắt chỉ báo đang gõ.
                self.bot_typing = false;
            }
        }
    }

    /// Called only after the confirmation dialog; see `ChatApp::update`.
    pub fn remove_message(&mut self, id: i64) {
        if !self.conversation.remove(id) {
            log::warn!("Tried to remove unknown message id {id}");
        }
    }

    pub fn clear(&mut self) {
        self.conversation.clear();
    }

    pub fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    pub fn export_to_transfer_path(&self) {
        match self.conversation.save_to_file(&self.transfer_path) {
            Ok(()) => log::info!(
                "Exported {} messages to {}",
                self.conversation.len(),
                self.transfer_path
            ),
            Err(err) => log::error!("Failed to export to {}: {err}", self.transfer_path),
        }
    }

    /// Import thay thế toàn bộ hội thoại; lỗi thì giữ nguyên trạng thái.
    pub fn import_from_transfer_path(&mut self) {
        match Conversation::load_from_file(&self.transfer_path) {
            Ok(imported) => {
                log::info!(
                    "Imported {} messages from {}",
                    imported.len(),
                    self.transfer_path
                );
                self.conversation = imported;
            }
            Err(err) => log::error!("Failed to import from {}: {err}", self.transfer_path),
        }
    }
}
