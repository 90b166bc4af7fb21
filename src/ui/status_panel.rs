use egui::{Align, Layout, RichText, Vec2};

use crate::conn_manager::conn_octoprint::octo_commands::OctoCmd;

use super::{app::App, icons};

const BUTTON_SIZE: Vec2 = Vec2::splat(64.);

impl App {
    pub fn show_status(&mut self, ui: &mut egui::Ui) {
        ui.vertical(|ui| {
            ui.add_space(20.);
            self.show_info(ui);

            ui.add_space(12.);
            ui.add(
                egui::ProgressBar::new(self.status.progress)
                    .show_percentage()
                    .desired_height(24.),
            );
            ui.add_space(17.);

            ui.with_layout(Layout::right_to_left(Align::Max), |ui| {
                self.show_buttons(ui);
            });
        });
    }

    fn show_info(&self, ui: &mut egui::Ui) {
        let status = &self.status;

        ui.horizontal(|ui| {
            ui.label(icons::icon_file());
            match status.file.as_deref() {
                Some(file) => ui.label(RichText::new(file).size(18.)),
                None => ui.label(RichText::new("File not set").size(18.).italics()),
            };
        });

        ui.horizontal(|ui| {
            ui.label(icons::icon_time());
            ui.label(RichText::new(&status.time_text).size(18.));
        });

        ui.horizontal(|ui| {
            ui.label(icons::icon_extruder());
            ui.label(RichText::new(&status.tool0).size(18.));
        });

        ui.horizontal(|ui| {
            ui.label(icons::icon_bed());
            ui.label(RichText::new(&status.bed).size(18.));
        });
    }

    /// laid out right to left
    fn show_buttons(&mut self, ui: &mut egui::Ui) {
        let controls = self.status.controls;

        if ui
            .add(egui::Button::new(icons::icon_back()).min_size(BUTTON_SIZE))
            .clicked()
        {
            self.go_back();
        }

        if ui
            .add_enabled(
                controls.stop,
                egui::Button::new(icons::icon_stop()).min_size(BUTTON_SIZE),
            )
            .clicked()
        {
            self.send_cmd(OctoCmd::Cancel);
        }

        if ui
            .add_enabled(
                controls.pause,
                egui::Button::new(icons::icon_pause_button(controls.pause_icon))
                    .min_size(BUTTON_SIZE),
            )
            .clicked()
        {
            self.send_cmd(OctoCmd::PauseToggle);
        }

        if ui
            .add_enabled(
                controls.print,
                egui::Button::new(icons::icon_print()).min_size(BUTTON_SIZE),
            )
            .clicked()
        {
            self.send_cmd(OctoCmd::Start);
        }
    }
}
