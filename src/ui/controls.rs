use egui::{Align, Color32, ComboBox, Layout, RichText, Slider, Ui};

use crate::charts::{LAUNCH_SITES, SiteSelection};

use super::DashboardApp;

const PAYLOAD_SLIDER_MIN: f64 = 0.;
const PAYLOAD_SLIDER_MAX: f64 = 10000.;
const PAYLOAD_SLIDER_STEP: f64 = 1000.;

impl DashboardApp {
    pub(crate) fn site_dropdown(&mut self, ui: &mut Ui) {
        ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
            ui.label(RichText::new("Launch Site: ").color(Color32::WHITE));
            ComboBox::from_id_salt("site_dropdown")
                .selected_text(self.selected_site.label().to_string())
                .show_ui(ui, |ui| {
                    ui.selectable_value(
                        &mut self.selected_site,
                        SiteSelection::All,
                        SiteSelection::All.label(),
                    );
                    for site in LAUNCH_SITES {
                        ui.selectable_value(
                            &mut self.selected_site,
                            SiteSelection::from_value(site),
                            site,
                        );
                    }
                });
        });
    }

    pub(crate) fn payload_range_control(&mut self, ui: &mut Ui) {
        ui.label(RichText::new("Payload range (Kg):").color(Color32::WHITE));
        let (mut low, mut high) = self.payload_range;
        ui.add(
            Slider::new(&mut low, PAYLOAD_SLIDER_MIN..=PAYLOAD_SLIDER_MAX)
                .step_by(PAYLOAD_SLIDER_STEP)
                .text("min"),
        );
        ui.add(
            Slider::new(&mut high, PAYLOAD_SLIDER_MIN..=PAYLOAD_SLIDER_MAX)
                .step_by(PAYLOAD_SLIDER_STEP)
                .text("max"),
        );
        // keep the pair ordered
        if low > high {
            std::mem::swap(&mut low, &mut high);
        }
        self.payload_range = (low, high);
    }
}
