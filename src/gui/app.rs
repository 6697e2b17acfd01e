//! Dashboard Main Application
//! Selector bar on top, chart viewer below, report export on a worker thread.

use crate::charts::StaticChartRenderer;
use crate::dispatch::{Selection, ViewDispatcher, ViewSelection};
use crate::gui::{ChartViewer, SelectorAction, ViewSelector};
use crate::report::ReportGenerator;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::thread;

/// Report export result from background thread
enum ExportResult {
    Progress(f32, String),
    Complete { path: PathBuf, slides: usize },
    Error(String),
}

/// Main application window.
pub struct DashboardApp {
    dispatcher: Arc<ViewDispatcher>,
    selection: Selection,
    selector: ViewSelector,
    chart_viewer: ChartViewer,
    export_size: (u32, u32),

    // Async report export
    export_rx: Option<Receiver<ExportResult>>,
    is_exporting: bool,
}

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>, initial: ViewSelection, export_size: (u32, u32)) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        log::info!("Dashboard started on view '{}'", initial);
        Self::with_state(initial, export_size)
    }

    fn with_state(initial: ViewSelection, export_size: (u32, u32)) -> Self {
        Self {
            dispatcher: Arc::new(ViewDispatcher::new()),
            selection: Selection::new(initial),
            selector: ViewSelector::new(),
            chart_viewer: ChartViewer::new(),
            export_size,
            export_rx: None,
            is_exporting: false,
        }
    }

    fn handle_select(&mut self, view: ViewSelection) {
        self.selection.select(view);
    }

    /// Save the current view as PNG
    fn handle_export_png(&mut self) {
        let view = self.selection.current();
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name(format!("{}.png", view.key()))
            .save_file()
        else {
            return; // User cancelled
        };

        let (width, height) = self.export_size;
        let triple = self.dispatcher.resolve(view);
        match StaticChartRenderer::render_to_file(triple, &path, width, height) {
            Ok(()) => {
                self.selector
                    .set_progress(100.0, &format!("PNG written: {}", path.display()));
            }
            Err(e) => {
                log::error!("PNG export failed: {}", e);
                self.selector.set_progress(0.0, &format!("Error: {}", e));
            }
        }
    }

    /// Ask for a target file and build the report in the background
    fn handle_export_report(&mut self) {
        if self.is_exporting {
            return;
        }

        let Some(path) = rfd::FileDialog::new()
            .add_filter("PowerPoint", &["pptx"])
            .set_file_name("academic_dashboard.pptx")
            .save_file()
        else {
            return;
        };

        let (tx, rx) = channel();
        self.export_rx = Some(rx);
        self.is_exporting = true;
        self.selector.set_progress(5.0, "Rendering charts...");

        let dispatcher = Arc::clone(&self.dispatcher);
        let (width, height) = self.export_size;
        thread::spawn(move || {
            Self::run_export(tx, dispatcher, path, width, height);
        });
    }

    /// Run report export (called from background thread)
    fn run_export(tx: Sender<ExportResult>, dispatcher: Arc<ViewDispatcher>, path: PathBuf, width: u32, height: u32) {
        let _ = tx.send(ExportResult::Progress(20.0, "Rendering charts...".to_string()));

        match ReportGenerator::export_report(&dispatcher, &path, width, height) {
            Ok(slides) => {
                let _ = tx.send(ExportResult::Complete { path, slides });
            }
            Err(e) => {
                log::error!("Report export failed: {}", e);
                let _ = tx.send(ExportResult::Error(e.to_string()));
            }
        }
    }

    /// Check for export results
    fn check_export_results(&mut self) {
        // Take the receiver temporarily to avoid borrow issues
        let Some(rx) = self.export_rx.take() else {
            return;
        };
        let mut should_keep_receiver = true;

        while let Ok(result) = rx.try_recv() {
            match result {
                ExportResult::Progress(progress, status) => {
                    self.selector.set_progress(progress, &status);
                }
                ExportResult::Complete { path, slides } => {
                    self.selector.set_progress(
                        100.0,
                        &format!("Complete! {} slides written to {}", slides, path.display()),
                    );
                    self.selector.last_report = Some(path);
                    self.is_exporting = false;
                    should_keep_receiver = false;
                }
                ExportResult::Error(error) => {
                    self.selector.set_progress(0.0, &format!("Error: {}", error));
                    self.is_exporting = false;
                    should_keep_receiver = false;
                }
            }
        }

        if should_keep_receiver {
            self.export_rx = Some(rx);
        }
    }

    fn handle_open_report(&mut self) {
        let Some(path) = self.selector.last_report.clone() else {
            return;
        };
        if let Err(e) = open::that(&path) {
            log::warn!("Could not open {}: {}", path.display(), e);
            self.selector.set_progress(0.0, &format!("Error: {}", e));
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_export_results();

        if self.is_exporting {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("view_selector").show(ctx, |ui| {
            let action = self.selector.show(ui, self.selection.current(), self.is_exporting);

            match action {
                SelectorAction::Select(view) => self.handle_select(view),
                SelectorAction::ExportPng => self.handle_export_png(),
                SelectorAction::ExportReport => self.handle_export_report(),
                SelectorAction::OpenReport => self.handle_open_report(),
                SelectorAction::None => {}
            }
        });

        let dispatcher = Arc::clone(&self.dispatcher);
        let triple = dispatcher.resolve(self.selection.current());
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui, triple);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switching_views_keeps_export_status() {
        let mut app = DashboardApp::with_state(ViewSelection::Cognitive, (1200, 800));
        app.selector.set_progress(100.0, "Report written: deck.pptx");

        app.handle_select(ViewSelection::Gap);
        assert_eq!(app.selection.current(), ViewSelection::Gap);
        assert_eq!(app.selector.status, "Report written: deck.pptx");
    }
}
