use crate::models::Notice;
use egui::{Align2, RichText, Window};

/// Draws the outcome dialog. Returns true once the user clicks OK.
pub fn draw_notice_window(ctx: &egui::Context, notice: &Notice) -> bool {
    let mut dismissed = false;

    Window::new(&notice.title)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([400.0, 120.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.label(
                    RichText::new(&notice.message)
                        .size(20.0)
                        .color(notice.severity.color()),
                );
                ui.add_space(12.0);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
                ui.add_space(4.0);
            });
        });

    dismissed
}
