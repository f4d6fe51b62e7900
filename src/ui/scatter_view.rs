use egui::Ui;
use egui_plot::{Legend, Plot, PlotPoints, Points};

use crate::charts::ScatterChart;

use super::series_color;

const SCATTER_POINT_RADIUS: f32 = 4.;
const SCATTER_HEIGHT: f32 = 260.;

/// Draw the payload/outcome scatter chart, one colored point series per
/// booster version category.
pub(crate) fn show_scatter_chart(ui: &mut Ui, chart: &ScatterChart) {
    Plot::new("payload_scatter")
        .legend(Legend::default())
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("class")
        .include_y(-0.5)
        .include_y(1.5)
        .height(SCATTER_HEIGHT)
        .show(ui, |plot_ui| {
            for (i, series) in chart.series.iter().enumerate() {
                plot_ui.points(
                    Points::new(
                        series.booster_category.clone(),
                        PlotPoints::new(series.points.clone()),
                    )
                    .color(series_color(i))
                    .radius(SCATTER_POINT_RADIUS),
                );
            }
        });
}
