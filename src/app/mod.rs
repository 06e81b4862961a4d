//! egui application shell: controls, stats panel, status line, error
//! dialog and the chart canvas.

mod chart;

use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Duration;

use egui::RichText;
use sinakline::{
    DEFAULT_DATALEN, FetchResult, FetchedData, LatestStats, Period, SinaClient, StockSymbol,
    spawn_fetch,
};

use chart::{ChartView, DOWN_COLOR, UP_COLOR};

pub struct KlineApp {
    client: SinaClient,
    code_input: String,
    period: Period,
    in_flight: Option<Receiver<FetchResult>>,
    data: Option<FetchedData>,
    error: Option<String>,
    chart: ChartView,
}

impl Default for KlineApp {
    fn default() -> Self {
        Self {
            client: SinaClient::default(),
            code_input: "sz000001".to_owned(),
            period: Period::Daily,
            in_flight: None,
            data: None,
            error: None,
            chart: ChartView::default(),
        }
    }
}

impl KlineApp {
    fn start_fetch(&mut self) {
        match StockSymbol::parse(&self.code_input) {
            Ok(symbol) => {
                tracing::info!(%symbol, period = ?self.period, "starting fetch");
                self.in_flight = Some(spawn_fetch(
                    self.client.clone(),
                    symbol,
                    self.period,
                    DEFAULT_DATALEN,
                ));
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// Drain the handoff channel; at most one message ever arrives per fetch.
    fn poll_fetch(&mut self) {
        let Some(rx) = &self.in_flight else { return };
        match rx.try_recv() {
            Ok(Ok(data)) => {
                self.data = Some(data);
                self.in_flight = None;
            }
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "fetch failed");
                self.error = Some(e.to_string());
                self.in_flight = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                self.error = Some("fetch worker exited without a result".to_owned());
                self.in_flight = None;
            }
        }
    }

    fn top_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Code (e.g. sz000001 / sh601006):");
            ui.add_enabled(
                self.in_flight.is_none(),
                egui::TextEdit::singleline(&mut self.code_input).desired_width(110.0),
            );
            // Disabled while a request is in flight: one fetch at a time.
            let fetch = ui.add_enabled(self.in_flight.is_none(), egui::Button::new("Fetch & plot"));
            if fetch.clicked() {
                self.start_fetch();
            }
            ui.separator();
            for &p in Period::all() {
                ui.radio_value(&mut self.period, p, p.label());
            }
        });
    }

    fn stats_panel(&self, ui: &mut egui::Ui) {
        ui.heading("Latest bar");
        ui.separator();
        let Some(data) = &self.data else {
            ui.label("No data fetched yet.");
            return;
        };
        ui.label(format!(
            "{} ({})",
            data.symbol.as_str().to_ascii_uppercase(),
            data.period.label()
        ));
        ui.add_space(4.0);
        match &data.stats {
            Some(s) => stats_grid(ui, s),
            None => {
                ui.label("Not enough data to compute change statistics.");
            }
        }
    }

    fn status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if self.in_flight.is_some() {
                ui.spinner();
                ui.label(format!("Fetching {}…", self.code_input.trim()));
            } else {
                ui.label("Idle");
            }
        });
    }

    fn error_window(&mut self, ctx: &egui::Context) {
        let Some(msg) = self.error.clone() else { return };
        let mut dismissed = false;
        egui::Window::new("Error")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(msg);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        if dismissed {
            self.error = None;
        }
    }
}

impl eframe::App for KlineApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_fetch();
        if self.in_flight.is_some() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| self.top_bar(ui));
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| self.status_bar(ui));
        egui::SidePanel::right("stats_panel")
            .exact_width(230.0)
            .resizable(false)
            .show(ctx, |ui| self.stats_panel(ui));
        egui::CentralPanel::default().show(ctx, |ui| match &self.data {
            Some(data) => self.chart.show(ui, data),
            None => {
                ui.centered_and_justified(|ui| {
                    ui.label("Enter a code and fetch to draw a chart");
                });
            }
        });

        self.error_window(ctx);
    }
}

fn stats_grid(ui: &mut egui::Ui, s: &LatestStats) {
    let change_color = if s.change_abs >= 0.0 { UP_COLOR } else { DOWN_COLOR };
    egui::Grid::new("latest_stats")
        .num_columns(2)
        .spacing([12.0, 4.0])
        .show(ui, |ui| {
            ui.label("Date");
            ui.label(s.datetime_utc().format("%Y-%m-%d").to_string());
            ui.end_row();

            ui.label("Open");
            ui.label(fmt_opt(s.open));
            ui.end_row();

            ui.label("High");
            ui.label(fmt_opt(s.high));
            ui.end_row();

            ui.label("Low");
            ui.label(fmt_opt(s.low));
            ui.end_row();

            ui.label("Close");
            ui.label(format!("{:.4}", s.close));
            ui.end_row();

            ui.label("Volume");
            ui.label(s.volume.map_or_else(|| "—".to_owned(), |v| v.to_string()));
            ui.end_row();

            ui.label("Change");
            ui.label(RichText::new(format!("{:+.4}", s.change_abs)).color(change_color));
            ui.end_row();

            ui.label("Change %");
            ui.label(RichText::new(format!("{:+.4} %", s.change_pct)).color(change_color));
            ui.end_row();

            ui.label("Speed");
            ui.label(format!("{:.6} %/h", s.change_speed));
            ui.end_row();
        });
}

fn fmt_opt(v: Option<f64>) -> String {
    v.map_or_else(|| "—".to_owned(), |v| format!("{v:.4}"))
}
