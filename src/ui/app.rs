use eframe::egui;
use tokio::sync::mpsc;

use crate::common::{Message, NetworkCommand, NetworkEvent};

use super::components::{chat_area, input_bar, toolbar};
use super::state::AppState;

pub struct ChatApp {
    state: AppState,
    command_sender: mpsc::Sender<NetworkCommand>,
    event_receiver: mpsc::Receiver<NetworkEvent>,
}

impl ChatApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        state: AppState,
        command_sender: mpsc::Sender<NetworkCommand>,
        event_receiver: mpsc::Receiver<NetworkEvent>,
    ) -> Self {
        Self {
            state,
            command_sender,
            event_receiver,
        }
    }

    fn handle_network_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.state.apply_event(event);
        }
    }

    fn send_fetch_reply(&mut self, history: Vec<Message>) {
        if let Err(err) = self
            .command_sender
            .try_send(NetworkCommand::FetchReply(history))
        {
            log::warn!("Failed to send command to network: {err}");
        }
    }

    /// Hộp thoại xác nhận xoá; chỉ "Delete" mới thực sự xoá.
    fn show_delete_confirmation(&mut self, ctx: &egui::Context) {
        let Some(id) = self.state.pending_delete else {
            return;
        };

        egui::Window::new("Confirm delete")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label("Delete this message?");
                ui.horizontal(|ui| {
                    if ui.button("Delete").clicked() {
                        self.state.remove_message(id);
                        self.state.pending_delete = None;
                    }
                    if ui.button("Cancel").clicked() {
                        self.state.pending_delete = None;
                    }
                });
            });
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_network_events();

        ctx.set_visuals(if self.state.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            let actions = toolbar::render(ui, &mut self.state);
            if actions.clear {
                self.state.clear();
            }
            if actions.toggle_theme {
                self.state.toggle_theme();
            }
            if actions.export {
                self.state.export_to_transfer_path();
            }
            if actions.import {
                self.state.import_from_transfer_path();
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Chatbox");
            ui.separator();

            let delete_request = chat_area::render(
                ui,
                self.state.conversation.messages(),
                self.state.bot_typing,
            );
            if delete_request.is_some() {
                self.state.pending_delete = delete_request;
            }

            ui.separator();
            if let Some(text) = input_bar::render(ui, &mut self.state.input_text) {
                if let Some(history) = self.state.submit(&text) {
                    self.send_fetch_reply(history);
                }
            }
        });

        self.show_delete_confirmation(ctx);

        ctx.request_repaint();
    }
}
