//! View Selector Widget
//! Top bar with the dashboard title, one button per view and the export
//! actions.

use crate::data::DASHBOARD_TITLE;
use crate::dispatch::ViewSelection;
use egui::{Color32, RichText};
use std::path::PathBuf;

const ACTIVE_FILL: Color32 = Color32::from_rgb(37, 99, 235);
const IDLE_FILL: Color32 = Color32::from_rgb(229, 231, 235);

/// Actions triggered from the selector bar
#[derive(Debug, Clone, PartialEq)]
pub enum SelectorAction {
    None,
    Select(ViewSelection),
    ExportPng,
    ExportReport,
    OpenReport,
}

/// Top bar state: export progress and the last written report.
pub struct ViewSelector {
    pub progress: f32,
    pub status: String,
    pub last_report: Option<PathBuf>,
}

impl Default for ViewSelector {
    fn default() -> Self {
        Self {
            progress: 0.0,
            status: "Ready".to_string(),
            last_report: None,
        }
    }
}

impl ViewSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the selector bar
    pub fn show(&mut self, ui: &mut egui::Ui, current: ViewSelection, exporting: bool) -> SelectorAction {
        let mut action = SelectorAction::None;

        ui.vertical_centered(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new(DASHBOARD_TITLE).size(24.0).strong());
        });
        ui.add_space(10.0);

        ui.horizontal_wrapped(|ui| {
            for view in ViewSelection::ALL {
                let selected = view == current;
                let text = RichText::new(view.label()).size(14.0);
                let text = if selected {
                    text.color(Color32::WHITE).strong()
                } else {
                    text.color(Color32::BLACK)
                };
                let button = egui::Button::new(text)
                    .fill(if selected { ACTIVE_FILL } else { IDLE_FILL })
                    .rounding(8.0)
                    .min_size(egui::vec2(110.0, 32.0));
                if ui.add(button).clicked() {
                    action = SelectorAction::Select(view);
                }
            }

            ui.separator();

            ui.add_enabled_ui(!exporting, |ui| {
                if ui.button("🖼 Export PNG").clicked() {
                    action = SelectorAction::ExportPng;
                }
                if ui.button("📄 Export Report").clicked() {
                    action = SelectorAction::ExportReport;
                }
            });
            ui.add_enabled_ui(self.last_report.is_some() && !exporting, |ui| {
                if ui.button("📂 Open Report").clicked() {
                    action = SelectorAction::OpenReport;
                }
            });
        });

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if exporting {
                ui.add(
                    egui::ProgressBar::new(self.progress / 100.0)
                        .desired_width(200.0)
                        .show_percentage()
                        .animate(true),
                );
            }
            let status_color = if self.status.contains("Error") {
                Color32::from_rgb(220, 53, 69)
            } else if self.status.contains("Complete") || self.status.contains("written") {
                Color32::from_rgb(40, 167, 69)
            } else {
                Color32::GRAY
            };
            ui.label(RichText::new(&self.status).size(11.0).color(status_color));
        });
        ui.add_space(4.0);

        action
    }

    /// Set progress and status
    pub fn set_progress(&mut self, progress: f32, status: &str) {
        self.progress = progress;
        self.status = status.to_string();
    }
}
