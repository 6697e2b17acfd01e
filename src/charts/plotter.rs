//! Chart Plotter Module
//! Interactive rendering surface using egui_plot: comparison lines, radar
//! polygons and the horizontal gap bars.

use super::radar::RadarGeometry;
use crate::data::tables::{GapPoint, MetricSeriesPoint, RadarPoint, SeriesColor};
use crate::dispatch::{gap_tooltip, Dataset, DispatchTriple, GapFill};
use egui::{Color32, RichText, Stroke};
use egui_plot::{
    Bar, BarChart, GridMark, Legend, Line, LineStyle, Plot, PlotBounds, PlotPoint, PlotPoints,
    Points, Polygon, Text, VLine,
};

/// Grid and axis colour for the radar web
pub const GRID_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

const RADAR_RINGS: usize = 4;
const RADAR_LABEL_RADIUS: f64 = 1.15;

pub fn color32(color: SeriesColor) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

/// Grid marks at every integer category position
fn category_marks(count: usize) -> Vec<GridMark> {
    (0..count)
        .map(|i| GridMark {
            value: i as f64,
            step_size: 1.0,
        })
        .collect()
}

/// Label for a category axis mark, empty between categories
fn category_label(labels: &[String], value: f64) -> String {
    let idx = value.round();
    if (value - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    labels.get(idx as usize).cloned().unwrap_or_default()
}

/// Draws a resolved view with egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    pub fn draw(ui: &mut egui::Ui, triple: &DispatchTriple, height: f32) {
        match triple.dataset {
            Dataset::Series(points) => Self::draw_line_chart(ui, triple, points, height),
            Dataset::Radar(points) => Self::draw_radar_chart(ui, triple, points, height),
            Dataset::Gap(points) => Self::draw_gap_chart(ui, triple, points, height),
        }
    }

    /// Year groups on X, comparator scores on a fixed Y domain
    fn draw_line_chart(
        ui: &mut egui::Ui,
        triple: &DispatchTriple,
        points: &[MetricSeriesPoint],
        height: f32,
    ) {
        let labels: Vec<String> = points.iter().map(|p| p.period.to_string()).collect();
        let n = points.len();
        let domain = triple.chart.domain;

        Plot::new(format!("line_{}", triple.view.key()))
            .height(height)
            .legend(Legend::default())
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .y_axis_label("Score")
            .x_grid_spacer(move |_input| category_marks(n))
            .x_axis_formatter(move |mark, _range| category_label(&labels, mark.value))
            .label_formatter(|name, value| {
                if name.is_empty() {
                    String::new()
                } else {
                    format!("{}\n{:.1}", name, value.y)
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                    [-0.3, domain.min],
                    [n as f64 - 0.7, domain.max],
                ));

                for spec in triple.chart.series {
                    let Some(comparator) = spec.comparator else {
                        continue;
                    };
                    let color = color32(spec.color);
                    let coords: Vec<[f64; 2]> = points
                        .iter()
                        .enumerate()
                        .map(|(i, p)| [i as f64, p.score(comparator)])
                        .collect();

                    let mut line = Line::new(PlotPoints::from_iter(coords.iter().copied()))
                        .color(color)
                        .width(spec.stroke_width)
                        .name(spec.name);
                    if let Some((dash, _gap)) = spec.dash {
                        line = line.style(LineStyle::Dashed {
                            length: dash as f32 * 2.0,
                        });
                    }
                    plot_ui.line(line);

                    if let Some(radius) = spec.dot_radius {
                        plot_ui.points(
                            Points::new(PlotPoints::from_iter(coords.iter().copied()))
                                .radius(radius)
                                .color(color)
                                .name(spec.name),
                        );
                    }
                }
            });
    }

    /// Subjects around a polar web, scores as translucent polygons
    fn draw_radar_chart(
        ui: &mut egui::Ui,
        triple: &DispatchTriple,
        points: &[RadarPoint],
        height: f32,
    ) {
        let max = points
            .iter()
            .map(|p| p.full_mark)
            .fold(triple.chart.domain.max, f64::max);
        let geometry = RadarGeometry::new(points.len(), max);
        let radius_angle = triple.chart.radius_angle.unwrap_or(30.0);

        Plot::new(format!("radar_{}", triple.view.key()))
            .height(height)
            .data_aspect(1.0)
            .show_axes(false)
            .show_grid(false)
            .legend(Legend::default())
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .show_x(false)
            .show_y(false)
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max([-1.45, -1.3], [1.45, 1.3]));

                // Web
                for tick in geometry.ticks(RADAR_RINGS) {
                    let mut ring = geometry.ring(tick);
                    if let Some(first) = ring.first().copied() {
                        ring.push(first);
                    }
                    plot_ui.line(
                        Line::new(PlotPoints::from_iter(ring))
                            .color(GRID_COLOR)
                            .width(1.0),
                    );

                    let [x, y] = geometry.radius_label_position(tick, radius_angle);
                    plot_ui.text(Text::new(
                        PlotPoint::new(x, y),
                        RichText::new(format!("{:.0}", tick))
                            .size(10.0)
                            .color(Color32::GRAY),
                    ));
                }
                for (axis, point) in points.iter().enumerate() {
                    let tip = geometry.project(axis, max);
                    plot_ui.line(
                        Line::new(PlotPoints::from_iter([[0.0, 0.0], tip]))
                            .color(GRID_COLOR)
                            .width(1.0),
                    );
                    plot_ui.text(Text::new(
                        PlotPoint::new(tip[0] * RADAR_LABEL_RADIUS, tip[1] * RADAR_LABEL_RADIUS),
                        RichText::new(point.subject).size(13.0),
                    ));
                }

                for spec in triple.chart.series {
                    let Some(comparator) = spec.comparator else {
                        continue;
                    };
                    let color = color32(spec.color);
                    let values: Vec<f64> = points.iter().map(|p| p.score(comparator)).collect();
                    let opacity = spec.fill_opacity.unwrap_or(0.0);

                    plot_ui.polygon(
                        Polygon::new(PlotPoints::from_iter(geometry.polygon(&values)))
                            .stroke(Stroke::new(spec.stroke_width, color))
                            .fill_color(color.gamma_multiply(opacity))
                            .name(spec.name),
                    );
                }
            });
    }

    /// One horizontal bar per gap entry, first entry at the top
    fn draw_gap_chart(ui: &mut egui::Ui, triple: &DispatchTriple, points: &[GapPoint], height: f32) {
        let n = points.len();
        // Bar positions count up from the bottom
        let labels: Vec<String> = points.iter().rev().map(|p| p.subject.to_string()).collect();
        let domain = triple.chart.domain;
        let Some(spec) = triple.chart.series.first() else {
            return;
        };

        let bars: Vec<Bar> = points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let fill = color32(GapFill::for_value(p.gap).color());
                Bar::new((n - 1 - i) as f64, p.gap)
                    .name(p.subject)
                    .width(0.7)
                    .fill(fill)
                    .stroke(Stroke::new(1.0, fill))
            })
            .collect();

        Plot::new(format!("gap_{}", triple.view.key()))
            .height(height)
            .legend(Legend::default())
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .x_axis_label("Points")
            .y_grid_spacer(move |_input| category_marks(n))
            .y_axis_formatter(move |mark, _range| category_label(&labels, mark.value))
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                    [domain.min, -0.6],
                    [domain.max, n as f64 - 0.4],
                ));
                plot_ui.vline(VLine::new(0.0).color(Color32::GRAY).width(1.0));
                plot_ui.bar_chart(
                    BarChart::new(bars)
                        .horizontal()
                        .color(color32(spec.color))
                        .name(spec.name)
                        .element_formatter(Box::new(|bar: &Bar, _chart: &BarChart| {
                            format!("{}\n{}", bar.name, gap_tooltip(bar.value))
                        })),
                );
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_marks_sit_on_integers() {
        let marks = category_marks(3);
        let values: Vec<f64> = marks.iter().map(|m| m.value).collect();
        assert_eq!(values, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn category_label_only_at_whole_positions() {
        let labels = vec!["Year 3".to_string(), "Year 4".to_string()];
        assert_eq!(category_label(&labels, 1.0), "Year 4");
        assert_eq!(category_label(&labels, 0.5), "");
        assert_eq!(category_label(&labels, -1.0), "");
        assert_eq!(category_label(&labels, 7.0), "");
    }

    #[test]
    fn color_conversion() {
        let c = color32(SeriesColor::rgb(0x3b, 0x82, 0xf6));
        assert_eq!(c, Color32::from_rgb(59, 130, 246));
    }
}
