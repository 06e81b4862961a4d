//! Candlestick chart painting: candles, volume bars, MA overlays, axis
//! labels and a hover crosshair, drawn straight onto an egui canvas.

use egui::{Align2, Color32, CornerRadius, FontId, Pos2, Rangef, Rect, Sense, Shape, Stroke, pos2};
use sinakline::indicators::moving_average;
use sinakline::task::FetchedData;

/// Fraction of the canvas height given to the volume sub-chart.
const VOLUME_HEIGHT_RATIO: f32 = 0.25;
/// Gap between the price pane and the volume pane, in points.
const PANE_GAP: f32 = 8.0;
/// Fraction of a slot left empty between neighboring candles.
const CANDLE_SPACING: f32 = 0.2;
/// Moving-average windows drawn over the price pane.
const MA_WINDOWS: [usize; 3] = [5, 10, 20];
/// Bottom gutter reserved for date labels.
const X_LABEL_GUTTER: f32 = 18.0;
/// Right gutter reserved for price labels.
const Y_LABEL_GUTTER: f32 = 56.0;

/// Chinese market convention: red rises, green falls.
pub(crate) const UP_COLOR: Color32 = Color32::from_rgb(0xd6, 0x2c, 0x2c);
pub(crate) const DOWN_COLOR: Color32 = Color32::from_rgb(0x2c, 0x9e, 0x4b);

pub struct ChartView {
    up: Color32,
    down: Color32,
    ma_colors: [Color32; 3],
}

impl Default for ChartView {
    fn default() -> Self {
        Self {
            up: UP_COLOR,
            down: DOWN_COLOR,
            ma_colors: [
                Color32::from_rgb(0xe6, 0xb4, 0x22),
                Color32::from_rgb(0x3a, 0x86, 0xd4),
                Color32::from_rgb(0xb4, 0x4f, 0xd4),
            ],
        }
    }
}

impl ChartView {
    pub fn show(&self, ui: &mut egui::Ui, data: &FetchedData) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
        let text_color = ui.visuals().text_color();
        let strong_color = ui.visuals().strong_text_color();
        let grid_color = ui.visuals().weak_text_color().gamma_multiply(0.4);

        let rect = response.rect;
        let candles = &data.candles;
        let n = candles.len();
        if n == 0 || rect.width() < Y_LABEL_GUTTER * 2.0 {
            return;
        }

        let plot = Rect::from_min_max(
            pos2(rect.min.x, rect.min.y + 20.0),
            pos2(rect.max.x - Y_LABEL_GUTTER, rect.max.y - X_LABEL_GUTTER),
        );
        let volume_h = plot.height() * VOLUME_HEIGHT_RATIO;
        let price_rect = Rect::from_min_max(
            plot.min,
            pos2(plot.max.x, plot.max.y - volume_h - PANE_GAP),
        );
        let volume_rect = Rect::from_min_max(pos2(plot.min.x, plot.max.y - volume_h), plot.max);

        painter.text(
            pos2(plot.center().x, rect.min.y + 2.0),
            Align2::CENTER_TOP,
            format!(
                "{} {} K-line",
                data.symbol.as_str().to_ascii_uppercase(),
                data.period.label()
            ),
            FontId::proportional(13.0),
            strong_color,
        );

        let mas: Vec<(usize, Vec<Option<f64>>, Color32)> = MA_WINDOWS
            .iter()
            .zip(self.ma_colors)
            .map(|(&w, color)| (w, moving_average(candles, w), color))
            .collect();

        // Price range across wicks, bodies and overlays.
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for c in candles {
            for v in [c.low, c.high, c.open, c.close].into_iter().flatten() {
                lo = lo.min(v);
                hi = hi.max(v);
            }
        }
        for (_, series, _) in &mas {
            for v in series.iter().flatten() {
                lo = lo.min(*v);
                hi = hi.max(*v);
            }
        }
        if !lo.is_finite() || !hi.is_finite() {
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                "No drawable values in this series",
                FontId::proportional(14.0),
                text_color,
            );
            return;
        }
        let span = hi - lo;
        let pad = if span > 0.0 {
            span * 0.05
        } else {
            hi.abs().max(1.0) * 0.01
        };
        lo -= pad;
        hi += pad;

        let max_vol = candles.iter().filter_map(|c| c.volume).max().unwrap_or(0);

        let slot = plot.width() / n as f32;
        let body_w = (slot * (1.0 - CANDLE_SPACING)).max(1.0);
        let x_center = |i: usize| plot.min.x + (i as f32 + 0.5) * slot;
        let y_price =
            |v: f64| price_rect.max.y - (((v - lo) / (hi - lo)) as f32) * price_rect.height();
        let y_vol = |v: u64| {
            if max_vol == 0 {
                volume_rect.max.y
            } else {
                volume_rect.max.y - ((v as f64 / max_vol as f64) as f32) * volume_rect.height()
            }
        };

        // Grid + price labels.
        for k in 0..=4 {
            let v = lo + (hi - lo) * f64::from(k) / 4.0;
            let y = y_price(v);
            painter.hline(
                Rangef::new(price_rect.min.x, price_rect.max.x),
                y,
                Stroke::new(0.5, grid_color),
            );
            painter.text(
                pos2(price_rect.max.x + 4.0, y),
                Align2::LEFT_CENTER,
                format!("{v:.2}"),
                FontId::proportional(10.0),
                text_color,
            );
        }

        // Date labels, thinned to roughly six.
        let step = (n / 6).max(1);
        for i in (0..n).step_by(step) {
            painter.text(
                pos2(x_center(i), plot.max.y + 4.0),
                Align2::CENTER_TOP,
                candles[i].datetime_utc().format("%Y-%m-%d").to_string(),
                FontId::proportional(10.0),
                text_color,
            );
        }

        for (i, c) in candles.iter().enumerate() {
            let x = x_center(i);
            let color = match (c.open, c.close) {
                (Some(o), Some(cl)) if cl < o => self.down,
                _ => self.up,
            };
            if let (Some(h), Some(l)) = (c.high, c.low) {
                painter.line_segment(
                    [pos2(x, y_price(h)), pos2(x, y_price(l))],
                    Stroke::new(1.0, color),
                );
            }
            if let (Some(o), Some(cl)) = (c.open, c.close) {
                let top = y_price(o.max(cl));
                let bottom = y_price(o.min(cl)).max(top + 1.0);
                let body = Rect::from_min_max(
                    pos2(x - body_w / 2.0, top),
                    pos2(x + body_w / 2.0, bottom),
                );
                painter.rect_filled(body, CornerRadius::ZERO, color);
            }
            if let Some(v) = c.volume {
                let bar = Rect::from_min_max(
                    pos2(x - body_w / 2.0, y_vol(v)),
                    pos2(x + body_w / 2.0, volume_rect.max.y),
                );
                painter.rect_filled(bar, CornerRadius::ZERO, color.gamma_multiply(0.7));
            }
        }

        // MA overlays; a missing value breaks the polyline.
        for (_, series, color) in &mas {
            let mut run: Vec<Pos2> = Vec::new();
            for (i, v) in series.iter().enumerate() {
                match v {
                    Some(v) => run.push(pos2(x_center(i), y_price(*v))),
                    None => flush_line(&painter, &mut run, *color),
                }
            }
            flush_line(&painter, &mut run, *color);
        }

        let mut legend_x = price_rect.min.x + 6.0;
        for (window, _, color) in &mas {
            let r = painter.text(
                pos2(legend_x, price_rect.min.y + 4.0),
                Align2::LEFT_TOP,
                format!("MA{window}"),
                FontId::proportional(11.0),
                *color,
            );
            legend_x = r.max.x + 10.0;
        }

        // Hover crosshair with an OHLCV readout.
        if let Some(pos) = response.hover_pos() {
            if plot.contains(pos) {
                let i = (((pos.x - plot.min.x) / slot).floor() as usize).min(n - 1);
                let c = &candles[i];
                painter.vline(
                    x_center(i),
                    Rangef::new(plot.min.y, plot.max.y),
                    Stroke::new(0.5, strong_color),
                );
                painter.text(
                    pos2(price_rect.min.x + 6.0, price_rect.min.y + 20.0),
                    Align2::LEFT_TOP,
                    format!(
                        "{}  O {}  H {}  L {}  C {}  V {}",
                        c.datetime_utc().format("%Y-%m-%d"),
                        fmt_price(c.open),
                        fmt_price(c.high),
                        fmt_price(c.low),
                        fmt_price(c.close),
                        fmt_volume(c.volume),
                    ),
                    FontId::monospace(11.0),
                    strong_color,
                );
            }
        }
    }
}

fn flush_line(painter: &egui::Painter, run: &mut Vec<Pos2>, color: Color32) {
    if run.len() >= 2 {
        painter.add(Shape::line(std::mem::take(run), Stroke::new(1.2, color)));
    } else {
        run.clear();
    }
}

fn fmt_price(v: Option<f64>) -> String {
    v.map_or_else(|| "—".to_owned(), |v| format!("{v:.2}"))
}

fn fmt_volume(v: Option<u64>) -> String {
    v.map_or_else(|| "—".to_owned(), |v| v.to_string())
}
