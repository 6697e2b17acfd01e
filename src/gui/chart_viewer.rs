//! Chart Viewer Widget
//! Central scrollable area: view title, chart, insight block and the closing
//! recommendations.

use crate::charts::ChartPlotter;
use crate::data::{InsightBlock, InsightKind, FINAL_RECOMMENDATIONS};
use crate::dispatch::DispatchTriple;
use egui::{Color32, RichText, ScrollArea};

const CHART_HEIGHT: f32 = 400.0;
const MAX_WIDTH: f32 = 1150.0;

const INSIGHT_BG: Color32 = Color32::from_rgb(239, 246, 255);
const HEADING_TEXT: Color32 = Color32::from_rgb(29, 78, 216);
const STRENGTH_TEXT: Color32 = Color32::from_rgb(30, 64, 175);
const ACTION_TEXT: Color32 = Color32::from_rgb(180, 83, 9);
const RECOMMEND_BG: Color32 = Color32::from_rgb(249, 250, 251);
const GOOD_TEXT: Color32 = Color32::from_rgb(21, 128, 61);

fn insight_color(kind: InsightKind) -> Color32 {
    match kind {
        InsightKind::Strength => STRENGTH_TEXT,
        InsightKind::ActionPoint => ACTION_TEXT,
    }
}

#[derive(Default)]
pub struct ChartViewer;

impl ChartViewer {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, triple: &DispatchTriple) {
        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(MAX_WIDTH);

                    ui.label(RichText::new(triple.title).size(20.0).strong());
                    ui.add_space(10.0);

                    ChartPlotter::draw(ui, triple, CHART_HEIGHT);

                    ui.add_space(12.0);
                    Self::draw_insights(ui, &triple.insights);

                    ui.add_space(24.0);
                    Self::draw_recommendations(ui);
                    ui.add_space(12.0);
                });
            });
    }

    fn draw_insights(ui: &mut egui::Ui, block: &InsightBlock) {
        egui::Frame::none()
            .fill(INSIGHT_BG)
            .rounding(8.0)
            .inner_margin(14.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::LEFT), |ui| {
                    ui.label(RichText::new(block.heading).size(15.0).strong().color(HEADING_TEXT));
                    ui.add_space(6.0);
                    for insight in block.lines {
                        ui.label(
                            RichText::new(format!("{} {}", insight.kind.icon(), insight.text))
                                .size(13.0)
                                .color(insight_color(insight.kind)),
                        );
                    }
                });
            });
    }

    fn draw_recommendations(ui: &mut egui::Ui) {
        egui::Frame::none()
            .fill(RECOMMEND_BG)
            .rounding(8.0)
            .inner_margin(14.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::LEFT), |ui| {
                    ui.label(
                        RichText::new("Final Recommendations:")
                            .size(15.0)
                            .strong()
                            .color(Color32::from_rgb(55, 65, 81)),
                    );
                    ui.add_space(6.0);

                    ui.label(RichText::new("✅ Strengths:").size(13.0).strong().color(GOOD_TEXT));
                    for item in FINAL_RECOMMENDATIONS.strengths {
                        ui.label(RichText::new(format!("  • {}", item)).size(13.0).color(GOOD_TEXT));
                    }

                    ui.add_space(6.0);
                    ui.label(
                        RichText::new("⚠ Areas for Improvement:")
                            .size(13.0)
                            .strong()
                            .color(ACTION_TEXT),
                    );
                    for item in FINAL_RECOMMENDATIONS.improvements {
                        ui.label(RichText::new(format!("  • {}", item)).size(13.0).color(ACTION_TEXT));
                    }
                });
            });
    }
}
