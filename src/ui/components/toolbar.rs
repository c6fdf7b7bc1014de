use eframe::egui;

use crate::ui::state::AppState;

/// Hành động người dùng chọn trên thanh công cụ.
#[derive(Default)]
pub struct ToolbarActions {
    pub clear: bool,
    pub toggle_theme: bool,
    pub export: bool,
    pub import: bool,
}

pub fn render(ui: &mut egui::Ui, state: &mut AppState) -> ToolbarActions {
    let mut actions = ToolbarActions::default();

    ui.horizontal(|ui| {
        if ui.button("Clear").clicked() {
            actions.clear = true;
        }

        let theme_label = if state.dark_mode { "Light mode" } else { "Dark mode" };
        if ui.button(theme_label).clicked() {
            actions.toggle_theme = true;
        }

        ui.separator();

        ui.label("File:");
        ui.text_edit_singleline(&mut state.transfer_path);
        if ui.button("Export").clicked() {
            actions.export = true;
        }
        if ui.button("Import").clicked() {
            actions.import = true;
        }
    });

    actions
}
