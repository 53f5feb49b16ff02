//! Native demo window with live date and time wheels.

use chrono::{Datelike, Local};
use eframe::egui;
use wheelpick_core::{DateWheels, PickerConfig, TimeWheels};
use wheelpick_widgets::{BandStyle, EguiScheduler, show_date_wheels, show_time_wheels, sizing};

use crate::AppError;

/// Years shown either side of the current one.
const YEAR_SPAN: i32 = 5;

/// Minute wheel increment.
const MINUTE_STEP: u32 = 5;

pub struct DemoApp {
    time: TimeWheels<EguiScheduler>,
    date: DateWheels<EguiScheduler>,
    style: BandStyle,
    time_style: BandStyle,
    changes: usize,
}

impl DemoApp {
    pub fn new(ctx: &egui::Context, config: PickerConfig) -> Result<Self, AppError> {
        let now = Local::now().naive_local();
        let scheduler = || EguiScheduler::new(ctx.clone());
        let year = now.date().year();

        let time = TimeWheels::new(
            now.time(),
            MINUTE_STEP,
            sizing::ROW_HEIGHT_COMPACT as f64,
            PickerConfig::compact(),
            scheduler,
        )?;
        let date = DateWheels::new(
            now.date(),
            year - YEAR_SPAN..=year + YEAR_SPAN,
            sizing::ROW_HEIGHT as f64,
            config,
            scheduler,
        )?;

        Ok(Self {
            time,
            date,
            style: BandStyle::default(),
            time_style: BandStyle::compact(),
            changes: 0,
        })
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Time");
            if show_time_wheels(ui, &mut self.time, &self.time_style) {
                self.changes += 1;
            }

            ui.add_space(16.0);
            ui.heading("Date");
            if show_date_wheels(ui, &mut self.date, &self.style) {
                self.changes += 1;
            }

            ui.separator();
            let date = self
                .date
                .date()
                .map(|d| d.format("%a %d %b %Y").to_string())
                .unwrap_or_default();
            ui.label(format!("{} at {}", date, self.time.time().format("%H:%M")));
            ui.small(format!("{} selection changes", self.changes));
        });
    }
}

/// Open the demo window and block until it closes.
pub fn run_native(config: PickerConfig) -> Result<(), AppError> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Wheelpick")
            .with_inner_size([360.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Wheelpick",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(DemoApp::new(&cc.egui_ctx, config)?))
        }),
    )
    .map_err(|e| AppError::Window(e.to_string()))
}
