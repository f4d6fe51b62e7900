use std::sync::Arc;

use egui::{Color32, Visuals, style::Widgets};
use log::error;

use crate::charts::{self, PieChart, ScatterChart, SiteSelection};
use crate::dataset::LaunchDataset;

pub mod config;
mod controls;
mod pie_view;
mod scatter_view;

pub use config::AppConfig;

pub(crate) const PALETTE_BLACK: Color32 = Color32::from_rgb(12, 12, 12);
pub(crate) const PALETTE_BROWN: Color32 = Color32::from_rgb(72, 30, 20);
pub(crate) const PALETTE_MAROON: Color32 = Color32::from_rgb(155, 57, 34);
pub(crate) const PALETTE_ORANGE: Color32 = Color32::from_rgb(242, 97, 63);

/// Colors cycled across pie slices and scatter series.
pub(crate) const SERIES_COLORS: [Color32; 6] = [
    PALETTE_ORANGE,
    Color32::LIGHT_BLUE,
    PALETTE_MAROON,
    Color32::LIGHT_GREEN,
    Color32::GOLD,
    PALETTE_BROWN,
];

pub(crate) fn series_color(index: usize) -> Color32 {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}

/// `DashboardApp` renders the launch records dashboard: a site dropdown,
/// a payload range control, and the two charts derived from them.
///
/// The dataset is immutable shared state built during initialization;
/// every frame compares the control values against the previous frame and
/// rebuilds the affected chart descriptions in place when they differ.
pub struct DashboardApp {
    dataset: Arc<LaunchDataset>,
    selected_site: SiteSelection,
    payload_range: (f64, f64),
    pie: PieChart,
    scatter: ScatterChart,
    app_config: AppConfig,
}

impl DashboardApp {
    pub fn new(
        dataset: Arc<LaunchDataset>,
        app_config: AppConfig,
        cc: &eframe::CreationContext<'_>,
    ) -> Self {
        let default_visuals = Visuals {
            dark_mode: true,
            hyperlink_color: PALETTE_MAROON,
            faint_bg_color: PALETTE_BLACK,
            extreme_bg_color: PALETTE_BROWN,
            panel_fill: PALETTE_BLACK,
            button_frame: true,
            widgets: Widgets::dark(),
            striped: false,
            ..Default::default()
        };
        cc.egui_ctx.set_visuals(default_visuals);

        let selected_site = SiteSelection::from_value(&app_config.selected_site);
        // the range control starts at the observed payload bounds
        let payload_range = dataset.payload_bounds();
        let pie = charts::success_pie(&dataset, &selected_site);
        let scatter = charts::payload_scatter(&dataset, &selected_site, payload_range);

        Self {
            dataset,
            selected_site,
            payload_range,
            pie,
            scatter,
            app_config,
        }
    }

    fn rebuild_charts(&mut self, site_changed: bool, range_changed: bool) {
        if site_changed {
            self.pie = charts::success_pie(&self.dataset, &self.selected_site);
        }
        // the scatter handler declares both controls as inputs
        if site_changed || range_changed {
            self.scatter =
                charts::payload_scatter(&self.dataset, &self.selected_site, self.payload_range);
        }
    }
}

impl eframe::App for DashboardApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.app_config.selected_site = self.selected_site.value().to_string();
        if let Err(e) = self.app_config.save() {
            error!("Error while saving config file: {}", e);
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(outer_rect) = ctx.input(|is| is.viewport().outer_rect) {
            self.app_config.window_position = outer_rect.min.into();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("SpaceX Launch Records Dashboard");
            });
            ui.add_space(8.);

            let previous_site = self.selected_site.clone();
            let previous_range = self.payload_range;

            self.site_dropdown(ui);
            ui.add_space(8.);

            pie_view::show_pie_chart(ui, &self.pie);
            ui.separator();

            self.payload_range_control(ui);
            ui.add_space(8.);

            scatter_view::show_scatter_chart(ui, &self.scatter);

            self.rebuild_charts(
                previous_site != self.selected_site,
                previous_range != self.payload_range,
            );
        });
    }
}
