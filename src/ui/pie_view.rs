use std::f32::consts::TAU;

use egui::{Color32, Pos2, RichText, Sense, Shape, Stroke, Ui, Vec2};

use crate::charts::PieChart;

use super::series_color;

const PIE_DIAMETER: f32 = 240.;
const ARC_STEP_RADIANS: f32 = 0.05;

/// Draw a pie chart as a fan of sector polygons with a color-keyed
/// legend next to it. Non-finite slice values (an undefined success
/// percentage) leave the plot area empty rather than panicking.
pub(crate) fn show_pie_chart(ui: &mut Ui, chart: &PieChart) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(&chart.title).color(Color32::WHITE).strong());
    });

    let total = chart.slice_total();
    ui.horizontal(|ui| {
        let (rect, _response) = ui.allocate_exact_size(Vec2::splat(PIE_DIAMETER), Sense::hover());
        if total.is_finite() && total > 0. {
            let center = rect.center();
            let radius = rect.width() / 2. - 4.;
            // start at twelve o'clock, sweep clockwise
            let mut start_angle = -TAU / 4.;
            for (i, slice) in chart.slices.iter().enumerate() {
                let sweep = (slice.value / total) as f32 * TAU;
                if !sweep.is_finite() || sweep <= 0. {
                    start_angle += sweep.max(0.);
                    continue;
                }
                let steps = (sweep / ARC_STEP_RADIANS).ceil().max(1.) as usize;
                let mut points = vec![center];
                for step in 0..=steps {
                    let angle = start_angle + sweep * step as f32 / steps as f32;
                    points.push(Pos2::new(
                        center.x + radius * angle.cos(),
                        center.y + radius * angle.sin(),
                    ));
                }
                ui.painter()
                    .add(Shape::convex_polygon(points, series_color(i), Stroke::NONE));
                start_angle += sweep;
            }
        }

        ui.vertical(|ui| {
            for (i, slice) in chart.slices.iter().enumerate() {
                ui.label(
                    RichText::new(format!("\u{25A0} {}: {:.1}", slice.label, slice.value))
                        .color(series_color(i)),
                );
            }
        });
    });
}
