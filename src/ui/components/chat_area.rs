use eframe::egui;

use crate::common::{Message, Role};

/// Vẽ danh sách tin nhắn. Trả về id tin nhắn người dùng bấm nút xoá.
pub fn render(ui: &mut egui::Ui, messages: &[Message], bot_typing: bool) -> Option<i64> {
    let mut delete_request = None;

    egui::ScrollArea::vertical()
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for message in messages {
                ui.horizontal(|ui| {
                    let color = match message.role {
                        Role::User => egui::Color32::LIGHT_BLUE,
                        Role::Bot => egui::Color32::LIGHT_GREEN,
                    };
                    ui.colored_label(color, format!("{}:", message.role.label()));
                    ui.label(message.display_content());

                    if ui.small_button("🗑").clicked() {
                        delete_request = Some(message.id);
                    }
                });
            }

            if bot_typing {
                ui.label(egui::RichText::new("Bot is typing...").weak().italics());
            }
        });

    delete_request
}
