use crate::controller::{ConvertController, SystemFolderPicker};
use crate::models::Notice;
use crate::ui;
use egui::{Button, CentralPanel, RichText, TextEdit};

pub struct ZipperApp {
    controller: ConvertController,
    picker: SystemFolderPicker,
    notice: Option<Notice>,
}

impl Default for ZipperApp {
    fn default() -> Self {
        Self {
            controller: ConvertController::default(),
            picker: SystemFolderPicker,
            notice: None,
        }
    }
}

impl eframe::App for ZipperApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(16.0);
                ui.label(RichText::new("Zipper").size(30.0));
                ui.add_space(36.0);

                ui.label(RichText::new("Select your Folder*").size(16.0));
                ui.add_space(4.0);
                if ui
                    .add_sized([150.0, 30.0], Button::new("Select folder..."))
                    .clicked()
                {
                    self.controller.select_folder(&self.picker);
                }
                ui.add_space(36.0);

                ui.label(RichText::new("Name of Zip folder").size(16.0));
                ui.add_space(8.0);
                ui.add(
                    TextEdit::singleline(&mut self.controller.archive_name)
                        .hint_text("Zip name(not important)")
                        .desired_width(220.0),
                );
                ui.add_space(36.0);

                if ui.add_sized([260.0, 35.0], Button::new("Convert")).clicked() {
                    // One outcome per click; a still-open dialog is replaced.
                    let outcome = self.controller.convert();
                    self.notice = Some(Notice::from_outcome(outcome));
                }
            });
        });

        if let Some(notice) = &self.notice {
            if ui::draw_notice_window(ctx, notice) {
                self.notice = None;
            }
        }
    }
}
