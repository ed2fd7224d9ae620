use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::{self, Color32, RichText, Stroke, Ui};
use egui_plot::{Legend, MarkerShape, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};

use crate::callback::ChartTarget;
use crate::chart::{ChartSpec, PieChart, ScatterChart};

const CHART_HEIGHT: f32 = 360.0;

/// Arc resolution for pie slices, per full turn.
const PIE_SEGMENTS_PER_TURN: f64 = 180.0;

// ---------------------------------------------------------------------------
// Chart placeholder
// ---------------------------------------------------------------------------

/// Draw whatever spec is currently published to `target`.
pub fn chart(ui: &mut Ui, target: ChartTarget, spec: Option<&ChartSpec>) {
    let Some(spec) = spec else {
        empty_chart(ui, "Waiting for data…");
        return;
    };

    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(spec.title());
    });

    if spec.is_empty() {
        empty_chart(ui, "No launches match the current filters");
        if let ChartSpec::Pie(pie) = spec {
            pie_legend(ui, pie);
        }
        return;
    }

    match spec {
        ChartSpec::Pie(pie) => pie_chart(ui, target.id(), pie),
        ChartSpec::Scatter(scatter) => scatter_chart(ui, target.id(), scatter),
    }
}

fn empty_chart(ui: &mut Ui, message: &str) {
    let size = egui::vec2(ui.available_width(), CHART_HEIGHT * 0.3);
    ui.allocate_ui(size, |ui: &mut Ui| {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label(RichText::new(message).weak());
        });
    });
}

// ---------------------------------------------------------------------------
// Pie
// ---------------------------------------------------------------------------

/// Filled polygons for one slice, from `start` to `end` radians. Plot
/// polygons only fill correctly when convex, so the slice is cut into
/// wedges of at most a quarter turn.
fn slice_wedges(start: f64, end: f64) -> Vec<Vec<[f64; 2]>> {
    let wedges = ((end - start) / FRAC_PI_2).ceil().max(1.0) as usize;
    let span = (end - start) / wedges as f64;
    (0..wedges)
        .map(|w| {
            let from = start + span * w as f64;
            let steps = ((span / TAU) * PIE_SEGMENTS_PER_TURN).ceil().max(1.0) as usize;
            let mut points = Vec::with_capacity(steps + 2);
            points.push([0.0, 0.0]);
            for i in 0..=steps {
                let a = from + span * (i as f64 / steps as f64);
                points.push([a.cos(), a.sin()]);
            }
            points
        })
        .collect()
}

fn pie_chart(ui: &mut Ui, id: &str, pie: &PieChart) {
    let fractions = pie.fractions();

    Plot::new(id)
        .height(CHART_HEIGHT)
        .data_aspect(1.0)
        .legend(Legend::default())
        .show_axes([false, false])
        .show_grid(false)
        .show_background(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_x(-1.2)
        .include_x(1.2)
        .include_y(-1.2)
        .include_y(1.2)
        .show(ui, |plot_ui| {
            // Clockwise from twelve o'clock.
            let mut angle = FRAC_PI_2;
            for (segment, &fraction) in pie.segments.iter().zip(&fractions) {
                if fraction <= 0.0 {
                    continue;
                }
                let end = angle - fraction * TAU;
                let color = segment.color.to_color32();

                // Wedges share a name so the legend shows one entry.
                for wedge in slice_wedges(end, angle) {
                    plot_ui.polygon(
                        Polygon::new(PlotPoints::new(wedge))
                            .name(&segment.label)
                            .fill_color(color)
                            .stroke(Stroke::new(1.0, color)),
                    );
                }

                let mid = (angle + end) / 2.0;
                plot_ui.text(
                    Text::new(
                        PlotPoint::new(0.65 * mid.cos(), 0.65 * mid.sin()),
                        format!("{:.1}%", fraction * 100.0),
                    )
                    .color(Color32::WHITE),
                );

                angle = end;
            }
        });

    pie_legend(ui, pie);
}

/// Counts per segment, including the zero-sized ones the plot can't show.
fn pie_legend(ui: &mut Ui, pie: &PieChart) {
    ui.horizontal_wrapped(|ui: &mut Ui| {
        for segment in &pie.segments {
            ui.label(RichText::new("■").color(segment.color.to_color32()));
            ui.label(format!("{}: {}", segment.label, segment.value));
            ui.add_space(8.0);
        }
    });
}

// ---------------------------------------------------------------------------
// Scatter
// ---------------------------------------------------------------------------

fn scatter_chart(ui: &mut Ui, id: &str, scatter: &ScatterChart) {
    Plot::new(id)
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label(scatter.x_label.as_str())
        .y_axis_label(scatter.y_label.as_str())
        .include_y(-0.25)
        .include_y(1.25)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for series in &scatter.series {
                let points = Points::new(PlotPoints::new(series.points.clone()))
                    .name(&series.name)
                    .color(series.color.to_color32())
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(4.0);
                plot_ui.points(points);
            }
        });
}
