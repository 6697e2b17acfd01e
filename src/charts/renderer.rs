//! Static Chart Renderer
//! Renders a resolved view to PNG with plotters, for file export and the
//! slide report.
//!
//! Layout:
//! 1. Chart with the view title as caption
//! 2. Insight block underneath (heading + one line per observation)

use super::radar::RadarGeometry;
use crate::data::insights::{InsightBlock, InsightKind};
use crate::data::tables::{GapPoint, MetricSeriesPoint, RadarPoint, SeriesColor};
use crate::dispatch::{Dataset, DispatchTriple, GapFill, ViewDispatcher, ViewSelection};
use crate::error::{DashboardError, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use rayon::prelude::*;
use std::io::Cursor;
use std::path::Path;

type DrawResult = std::result::Result<(), Box<dyn std::error::Error>>;
type Area<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

const FONT: &str = "sans-serif";
const GRID: RGBColor = RGBColor(225, 225, 225);
const HEADING: RGBColor = RGBColor(29, 78, 216);
const STRENGTH_TEXT: RGBColor = RGBColor(30, 64, 175);
const ACTION_TEXT: RGBColor = RGBColor(180, 83, 9);
const INSIGHT_BG: RGBColor = RGBColor(239, 246, 255);

/// Share of the image height given to the chart; the rest holds insights.
const CHART_SHARE: f64 = 0.74;

pub fn rgb(color: SeriesColor) -> RGBColor {
    RGBColor(color.r, color.g, color.b)
}

/// Greedy word wrap on a character budget.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > max_chars && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn category_label(labels: &[&str], value: f64) -> String {
    let idx = value.round();
    if (value - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    labels
        .get(idx as usize)
        .map(|s| s.to_string())
        .unwrap_or_default()
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render one view to PNG bytes.
    pub fn render_png_bytes(triple: &DispatchTriple, width: u32, height: u32) -> Result<Vec<u8>> {
        let mut buffer = vec![0u8; width as usize * height as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            Self::draw_view(&root, triple).map_err(|e| DashboardError::Render(e.to_string()))?;
            root.present()
                .map_err(|e| DashboardError::Render(e.to_string()))?;
        }

        let image = image::RgbImage::from_raw(width, height, buffer)
            .ok_or_else(|| DashboardError::Render("pixel buffer size mismatch".to_string()))?;
        let mut bytes = Vec::new();
        image.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Render one view straight to a PNG file.
    pub fn render_to_file(triple: &DispatchTriple, path: &Path, width: u32, height: u32) -> Result<()> {
        let bytes = Self::render_png_bytes(triple, width, height)?;
        std::fs::write(path, bytes)?;
        log::info!("Chart written: {}", path.display());
        Ok(())
    }

    /// Render every view in parallel, in dispatch table order.
    pub fn render_all(
        dispatcher: &ViewDispatcher,
        width: u32,
        height: u32,
    ) -> Result<Vec<(ViewSelection, Vec<u8>)>> {
        let triples: Vec<&DispatchTriple> = dispatcher.iter().collect();
        triples
            .par_iter()
            .map(|triple| {
                Self::render_png_bytes(triple, width, height).map(|bytes| (triple.view, bytes))
            })
            .collect()
    }

    fn draw_view(root: &Area<'_>, triple: &DispatchTriple) -> DrawResult {
        root.fill(&WHITE)?;
        let (_, height) = root.dim_in_pixel();
        let chart_height = (height as f64 * CHART_SHARE) as u32;
        let (upper, lower) = root.split_vertically(chart_height);

        match triple.dataset {
            Dataset::Series(points) => Self::draw_line_chart(&upper, triple, points)?,
            Dataset::Radar(points) => Self::draw_radar_chart(&upper, triple, points)?,
            Dataset::Gap(points) => Self::draw_gap_chart(&upper, triple, points)?,
        }

        Self::draw_insights(&lower, &triple.insights)
    }

    fn draw_line_chart(area: &Area<'_>, triple: &DispatchTriple, points: &[MetricSeriesPoint]) -> DrawResult {
        let labels: Vec<&str> = points.iter().map(|p| p.period).collect();
        let n = points.len();
        let domain = triple.chart.domain;

        let mut chart = ChartBuilder::on(area)
            .caption(triple.title, (FONT, 26))
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(-0.3f64..(n as f64 - 0.7), domain.min..domain.max)?;

        chart
            .configure_mesh()
            .x_labels(n)
            .x_label_formatter(&|x| category_label(&labels, *x))
            .y_desc("Score")
            .light_line_style(&GRID)
            .draw()?;

        for spec in triple.chart.series {
            let Some(comparator) = spec.comparator else {
                continue;
            };
            let color = rgb(spec.color);
            let coords: Vec<(f64, f64)> = points
                .iter()
                .enumerate()
                .map(|(i, p)| (i as f64, p.score(comparator)))
                .collect();
            let style = color.stroke_width(spec.stroke_width as u32);

            let anno = match spec.dash {
                Some((dash, gap)) => chart.draw_series(DashedLineSeries::new(
                    coords.clone(),
                    dash * 2,
                    gap * 2,
                    style,
                ))?,
                None => chart.draw_series(LineSeries::new(coords.clone(), style))?,
            };
            anno.label(spec.name)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));

            if let Some(radius) = spec.dot_radius {
                chart.draw_series(
                    coords
                        .iter()
                        .map(|&c| Circle::new(c, radius as u32, color.filled())),
                )?;
            }
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(&WHITE.mix(0.85))
            .border_style(&BLACK)
            .draw()?;
        Ok(())
    }

    fn draw_radar_chart(area: &Area<'_>, triple: &DispatchTriple, points: &[RadarPoint]) -> DrawResult {
        let max = points
            .iter()
            .map(|p| p.full_mark)
            .fold(triple.chart.domain.max, f64::max);
        let geometry = RadarGeometry::new(points.len(), max);

        // Keep the web circular regardless of the area's aspect ratio
        let (w, h) = area.dim_in_pixel();
        let y_half = 1.3;
        let x_half = y_half * w as f64 / h.max(1) as f64;

        let mut chart = ChartBuilder::on(area)
            .caption(triple.title, (FONT, 26))
            .margin(20)
            .build_cartesian_2d(-x_half..x_half, -y_half..y_half)?;

        let to_tuple = |p: [f64; 2]| (p[0], p[1]);
        let closed = |vertices: Vec<[f64; 2]>| {
            let mut path: Vec<(f64, f64)> = vertices.into_iter().map(to_tuple).collect();
            if let Some(first) = path.first().copied() {
                path.push(first);
            }
            path
        };
        let centered = TextStyle::from((FONT, 16).into_font()).pos(Pos::new(HPos::Center, VPos::Center));
        let small = TextStyle::from((FONT, 12).into_font().color(&RGBColor(120, 120, 120)));
        let radius_angle = triple.chart.radius_angle.unwrap_or(30.0);

        for tick in geometry.ticks(4) {
            chart.draw_series(std::iter::once(PathElement::new(
                closed(geometry.ring(tick)),
                GRID.stroke_width(1),
            )))?;
            let [x, y] = geometry.radius_label_position(tick, radius_angle);
            chart.draw_series(std::iter::once(Text::new(format!("{:.0}", tick), (x, y), small.clone())))?;
        }
        for (axis, point) in points.iter().enumerate() {
            let [x, y] = geometry.project(axis, max);
            chart.draw_series(std::iter::once(PathElement::new(
                vec![(0.0, 0.0), (x, y)],
                GRID.stroke_width(1),
            )))?;
            chart.draw_series(std::iter::once(Text::new(
                point.subject.to_string(),
                (x * 1.15, y * 1.12),
                centered.clone(),
            )))?;
        }

        for spec in triple.chart.series {
            let Some(comparator) = spec.comparator else {
                continue;
            };
            let color = rgb(spec.color);
            let values: Vec<f64> = points.iter().map(|p| p.score(comparator)).collect();
            let vertices = geometry.polygon(&values);
            let opacity = spec.fill_opacity.unwrap_or(0.0) as f64;

            chart.draw_series(std::iter::once(Polygon::new(
                vertices.iter().copied().map(to_tuple).collect::<Vec<_>>(),
                color.mix(opacity).filled(),
            )))?;
            chart
                .draw_series(std::iter::once(PathElement::new(
                    closed(vertices),
                    color.stroke_width(spec.stroke_width as u32),
                )))?
                .label(spec.name)
                .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 16, y + 5)], color.mix(0.6).filled()));
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(&WHITE.mix(0.85))
            .border_style(&BLACK)
            .draw()?;
        Ok(())
    }

    fn draw_gap_chart(area: &Area<'_>, triple: &DispatchTriple, points: &[GapPoint]) -> DrawResult {
        let n = points.len();
        // First entry at the top
        let labels: Vec<&str> = points.iter().rev().map(|p| p.subject).collect();
        let domain = triple.chart.domain;

        let mut chart = ChartBuilder::on(area)
            .caption(triple.title, (FONT, 26))
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(160)
            .build_cartesian_2d(domain.min..domain.max, -0.6f64..(n as f64 - 0.4))?;

        chart
            .configure_mesh()
            .y_labels(n)
            .y_label_formatter(&|y| category_label(&labels, *y))
            .x_desc("Points")
            .light_line_style(&GRID)
            .draw()?;

        chart.draw_series(std::iter::once(PathElement::new(
            vec![(0.0, -0.6), (0.0, n as f64 - 0.4)],
            RGBColor(120, 120, 120).stroke_width(1),
        )))?;

        chart.draw_series(points.iter().enumerate().map(|(i, p)| {
            let y = (n - 1 - i) as f64;
            let fill = rgb(GapFill::for_value(p.gap).color());
            Rectangle::new([(0.0, y - 0.35), (p.gap, y + 0.35)], fill.filled())
        }))?;

        let value_style = TextStyle::from((FONT, 13).into_font()).pos(Pos::new(HPos::Left, VPos::Center));
        chart.draw_series(points.iter().enumerate().map(|(i, p)| {
            let y = (n - 1 - i) as f64;
            let x = if p.gap < 0.0 { 0.3 } else { p.gap + 0.3 };
            Text::new(format!("{}", p.gap), (x, y), value_style.clone())
        }))?;

        if let Some(spec) = triple.chart.series.first() {
            let color = rgb(spec.color);
            chart
                .draw_series(std::iter::empty::<Rectangle<(f64, f64)>>())?
                .label(spec.name)
                .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 16, y + 5)], color.filled()));
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::LowerRight)
                .background_style(&WHITE.mix(0.85))
                .border_style(&BLACK)
                .draw()?;
        }
        Ok(())
    }

    fn draw_insights(area: &Area<'_>, block: &InsightBlock) -> DrawResult {
        let (width, _) = area.dim_in_pixel();
        let panel = area.margin(0, 10, 20, 20);
        panel.fill(&INSIGHT_BG)?;

        let heading = (FONT, 20).into_font().style(FontStyle::Bold).color(&HEADING);
        panel.draw(&Text::new(block.heading.to_string(), (16, 12), heading))?;

        // Roughly half an em per character at 16px
        let max_chars = ((width.saturating_sub(80)) / 8).max(20) as usize;
        let mut y = 44;
        for insight in block.lines {
            let (marker, color) = match insight.kind {
                InsightKind::Strength => ("+", STRENGTH_TEXT),
                InsightKind::ActionPoint => ("!", ACTION_TEXT),
            };
            for (i, line) in wrap_text(insight.text, max_chars).into_iter().enumerate() {
                let prefix = if i == 0 { marker } else { " " };
                let style = (FONT, 16).into_font().color(&color);
                panel.draw(&Text::new(format!("{} {}", prefix, line), (16, y), style))?;
                y += 22;
            }
        }
        Ok(())
    }
}
