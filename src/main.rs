//! Academic Dashboard - Benchmark comparison charts
//!
//! Opens the dashboard window, or runs a headless export when asked to.

use academic_dashboard::charts::StaticChartRenderer;
use academic_dashboard::gui::DashboardApp;
use academic_dashboard::logging::configure_logging;
use academic_dashboard::report::ReportGenerator;
use academic_dashboard::{ViewDispatcher, ViewSelection};
use anyhow::Context;
use clap::Parser;
use eframe::egui;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "academic-dashboard", version, about = "Academic benchmark comparison dashboard")]
struct Args {
    /// Initial view: cognitive, reading, maths, science, radar or gap
    #[arg(long, default_value = "cognitive")]
    view: String,

    /// Print the resolved view as JSON and exit
    #[arg(long)]
    json: bool,

    /// Render every view to <DIR>/<view>.png and exit
    #[arg(long, value_name = "DIR")]
    export_dir: Option<PathBuf>,

    /// Write a PowerPoint report with one slide per view and exit
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,

    /// Image width for exports
    #[arg(long, default_value_t = 1200)]
    width: u32,

    /// Image height for exports
    #[arg(long, default_value_t = 800)]
    height: u32,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    configure_logging(args.verbose);

    let initial = ViewSelection::from_key(&args.view);
    let headless = args.json || args.export_dir.is_some() || args.report.is_some();

    if headless {
        return run_headless(&args, initial);
    }

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 900.0])
            .with_min_inner_size([900.0, 700.0])
            .with_title("Academic Performance Dashboard"),
        ..Default::default()
    };

    let export_size = (args.width, args.height);
    eframe::run_native(
        "Academic Performance Dashboard",
        options,
        Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, initial, export_size)))),
    )
    .map_err(|e| anyhow::anyhow!("GUI error: {}", e))
}

fn run_headless(args: &Args, initial: ViewSelection) -> anyhow::Result<()> {
    let dispatcher = ViewDispatcher::new();

    if args.json {
        let triple = dispatcher.resolve(initial);
        let json = serde_json::to_string_pretty(triple).context("serializing view")?;
        println!("{}", json);
    }

    if let Some(dir) = &args.export_dir {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        let images = StaticChartRenderer::render_all(&dispatcher, args.width, args.height)
            .context("rendering charts")?;
        for (view, png) in images {
            let path = dir.join(format!("{}.png", view.key()));
            fs::write(&path, png).with_context(|| format!("writing {}", path.display()))?;
            log::info!("Chart written: {}", path.display());
        }
        println!("Exported {} charts to {}", ViewSelection::ALL.len(), dir.display());
    }

    if let Some(path) = &args.report {
        let slides = ReportGenerator::export_report(&dispatcher, path, args.width, args.height)
            .with_context(|| format!("writing report {}", path.display()))?;
        println!("Report written: {} ({} slides)", path.display(), slides);
    }

    Ok(())
}
