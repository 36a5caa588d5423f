use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};

use hovercraft_sim::dynamics::{SimConfig, Snapshot};
use hovercraft_sim::sim::{self, TimeSeries};
use hovercraft_sim::vehicle::{presets, Parameters};

fn main() -> eframe::Result {
    env_logger::init();

    let params = presets::reference();
    let config = SimConfig { t_end: 100.0, eps: 1e-3, ..SimConfig::default() };
    let (series, last) = match sim::simulate(&params, &config) {
        Ok(run) => run,
        Err(e) => {
            log::error!("simulation failed: {e}");
            std::process::exit(1);
        }
    };

    let app = SimViz { series, last, params };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native("Air-Cushion Craft Settling", options, Box::new(|_| Ok(Box::new(app))))
}

struct SimViz {
    series: TimeSeries,
    last: Snapshot,
    params: Parameters,
}

impl SimViz {
    fn panel(&self, ui: &mut egui::Ui, id: &str, label: &str, values: &[f64], w: f32, h: f32) {
        let step = (self.series.len() / 2000).max(1);
        ui.vertical(|ui| {
            ui.label(label);
            let points: PlotPoints = self
                .series
                .t
                .iter()
                .zip(values)
                .step_by(step)
                .map(|(t, v)| [*t, *v])
                .collect();
            Plot::new(id)
                .width(w)
                .height(h)
                .x_axis_label("Time (s)")
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new(label.to_owned(), points));
                });
        });
    }
}

impl eframe::App for SimViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading(format!("Craft: {:.0} kg, S = {:.0} m^2", self.params.m, self.params.s));
            let (p_min, p_max) = self.series.pressure_range();
            ui.label(format!(
                "Final y: {:.4} m  |  gamma: {:.4} rad  |  p: {:.0} .. {:.0} Pa  |  Steps: {}",
                self.last.y, self.last.gamma, p_min, p_max, self.last.iteration,
            ));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let half_w = available.x / 2.0 - 8.0;
            let half_h = available.y / 2.0 - 24.0;

            ui.horizontal(|ui| {
                self.panel(ui, "heave", "Y (m)", &self.series.y, half_w, half_h);
                self.panel(ui, "pitch", "Gamma (rad)", &self.series.gamma, half_w, half_h);
            });
            ui.horizontal(|ui| {
                self.panel(ui, "pressure", "P (Pa)", &self.series.p, half_w, half_h);
                self.panel(ui, "cushion", "W", &self.series.w, half_w, half_h);
            });
        });
    }
}
