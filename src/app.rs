//! Scope controller and canvas renderer.
//!
//! [`ScopeApp`] owns the full widget state: the channel list, the stream
//! subscription and the running flag. Ingestion and drawing both happen on
//! the UI thread, once per frame:
//! - drain pending stream events into the channel buffers
//! - draw grid, watermark, traces and labels with the raw painter
//! - reschedule a repaint only while running, so stopping simply lets the
//!   redraw chain lapse

use std::sync::mpsc::Receiver;
use std::time::Duration;

use eframe::egui;
use egui::{Align2, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use crate::config::{GridStyle, ScopeConfig};
use crate::data::channel::Channel;
use crate::data::view::pixel_y;
use crate::ingest::{self, StreamStatus};
use crate::range_control;
use crate::sink::{StreamConnector, StreamEvent};

/// Smallest accepted time span; keeps the x scale finite.
const MIN_TIME_SPAN: f64 = 0.1;

/// Distance of range labels and readouts from the canvas edges.
const LABEL_INSET: f32 = 5.0;
/// Vertical spacing between stacked per-channel labels.
const LABEL_STACK: f32 = 20.0;

/// Egui app that renders live telemetry channels as scrolling traces.
pub struct ScopeApp {
    channels: Vec<Channel>,
    connector: StreamConnector,
    rx: Option<Receiver<StreamEvent>>,
    running: bool,
    time_span: f64,
    display_slots: usize,
    title: String,
    grid: GridStyle,
}

impl ScopeApp {
    /// Build a stopped scope from its configuration and a stream connector.
    pub fn new(config: ScopeConfig, connector: StreamConnector) -> Self {
        let ScopeConfig {
            signals,
            time_span,
            max_buffer_size,
            display_slots,
            title,
            grid,
            ..
        } = config;
        let channels = signals
            .into_iter()
            .map(|spec| Channel::new(spec, max_buffer_size))
            .collect();
        Self {
            channels,
            connector,
            rx: None,
            running: false,
            time_span: time_span.max(MIN_TIME_SPAN),
            display_slots,
            title,
            grid,
        }
    }

    /// Open a fresh stream subscription and enter the running state.
    /// No-op when already running.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.rx = Some((self.connector)());
        self.running = true;
        log::debug!("scope started, stream subscription open");
    }

    /// Leave the running state and drop the subscription.
    /// No-op when already stopped.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.rx = None;
        log::debug!("scope stopped, stream subscription closed");
    }

    /// Start when stopped, stop when running.
    pub fn toggle(&mut self) {
        if self.running {
            self.stop();
        } else {
            self.start();
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn time_span(&self) -> f64 {
        self.time_span
    }

    /// Change the rolling window width, clamped to a small positive floor.
    /// Applies from the next eviction and draw; retained samples are not
    /// re-buffered retroactively.
    pub fn set_time_span(&mut self, time_span: f64) {
        self.time_span = time_span.max(MIN_TIME_SPAN);
    }

    /// All configured channels, in slot order.
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    /// The channels that actually get drawn; the rest only buffer.
    pub fn displayed_channels(&self) -> impl Iterator<Item = &Channel> {
        self.channels.iter().take(self.display_slots)
    }

    /// Drain pending stream events into the channel buffers.
    ///
    /// Runs once per frame while the scope is running. A transport error or
    /// a closed channel stops the scope in place; the user has to restart
    /// explicitly.
    pub fn poll_stream(&mut self) {
        if !self.running {
            return;
        }
        let status = match &self.rx {
            Some(rx) => ingest::drain(rx, &mut self.channels, self.time_span),
            None => StreamStatus::Live,
        };
        if status == StreamStatus::Down {
            self.stop();
        }
    }

    /// Render the scope into an arbitrary egui container.
    ///
    /// This is the embeddable entry point; [`run_scope`] wraps it in a
    /// standalone native window.
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        let ctx = ui.ctx().clone();
        self.poll_stream();

        self.controls_ui(ui);
        self.canvas_ui(ui);

        if self.running {
            ctx.request_repaint_after(Duration::from_millis(16));
        }
    }

    fn controls_ui(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let label = if self.running { "Pause" } else { "Start" };
            if ui.button(label).clicked() {
                self.toggle();
            }
            ui.label("Time span (s):");
            let mut span = self.time_span;
            let resp = ui.add(egui::DragValue::new(&mut span).speed(0.5));
            if resp.changed() {
                self.set_time_span(span);
            }
        });
    }

    fn canvas_ui(&mut self, ui: &mut egui::Ui) {
        let size = ui.available_size();
        let size = Vec2::new(size.x, size.y.max(160.0));
        let (canvas, _response) = ui.allocate_exact_size(size, Sense::hover());
        let painter = ui.painter_at(canvas);

        self.draw_grid(&painter, canvas);
        self.draw_traces(&painter, canvas);
        self.range_labels_ui(ui, &painter, canvas);
        self.draw_readouts(&painter, canvas);
    }

    /// Background fill, grid lines and the watermark title.
    fn draw_grid(&self, painter: &egui::Painter, canvas: Rect) {
        let g = &self.grid;
        painter.rect_filled(canvas, egui::CornerRadius::ZERO, g.background);

        let stroke = Stroke::new(1.0, g.grid_color);
        if g.x_divisions > 0 {
            for i in 0..=g.x_divisions {
                let x = canvas.left() + canvas.width() * i as f32 / g.x_divisions as f32;
                painter.line_segment(
                    [Pos2::new(x, canvas.top()), Pos2::new(x, canvas.bottom())],
                    stroke,
                );
            }
        }
        if g.y_divisions > 0 {
            for i in 0..=g.y_divisions {
                let y = canvas.top() + canvas.height() * i as f32 / g.y_divisions as f32;
                painter.line_segment(
                    [Pos2::new(canvas.left(), y), Pos2::new(canvas.right(), y)],
                    stroke,
                );
            }
        }

        painter.text(
            canvas.center(),
            Align2::CENTER_CENTER,
            &self.title,
            FontId::proportional(g.title_size),
            g.title_color,
        );
    }

    /// Polyline per displayed channel. The x axis is anchored at the oldest
    /// retained sample; vertical positions come from the channel's view
    /// range. Off-canvas segments are left to the painter's clip rect.
    fn draw_traces(&self, painter: &egui::Painter, canvas: Rect) {
        let x_scale = canvas.width() as f64 / self.time_span;
        for channel in self.displayed_channels() {
            if channel.buffer.len() < 2 {
                continue;
            }
            let t0 = match channel.buffer.oldest() {
                Some(sample) => sample[0],
                None => continue,
            };
            let range = channel.view_range();
            let stroke = Stroke::new(self.grid.trace_width, channel.spec.color);
            let mut last: Option<Pos2> = None;
            for sample in channel.buffer.iter() {
                let x = canvas.left() + ((sample[0] - t0) * x_scale) as f32;
                let y = canvas.top() + pixel_y(sample[1], range, canvas.height());
                let point = Pos2::new(x, y);
                if let Some(prev) = last {
                    painter.line_segment([prev, point], stroke);
                }
                last = Some(point);
            }
        }
    }

    /// Per-channel view_max/view_min labels along the left edge. The label
    /// rects double as the scroll regions that drive zoom and offset.
    fn range_labels_ui(&mut self, ui: &egui::Ui, painter: &egui::Painter, canvas: Rect) {
        let font = FontId::proportional(self.grid.label_size);
        let slots = self.display_slots;
        for (slot, channel) in self.channels.iter_mut().take(slots).enumerate() {
            let (view_min, view_max) = channel.view_range();
            let color = channel.spec.color;
            let max_pos = Pos2::new(
                canvas.left() + LABEL_INSET,
                canvas.top() + LABEL_INSET + LABEL_STACK * slot as f32,
            );
            let min_pos = Pos2::new(
                canvas.left() + LABEL_INSET,
                canvas.bottom() - LABEL_INSET - LABEL_STACK * slot as f32,
            );
            let max_rect = painter.text(
                max_pos,
                Align2::LEFT_TOP,
                format!("{view_max:.1}"),
                font.clone(),
                color,
            );
            let min_rect = painter.text(
                min_pos,
                Align2::LEFT_BOTTOM,
                format!("{view_min:.1}"),
                font.clone(),
                color,
            );
            let id = ui.id().with(&channel.spec.name);
            range_control::handle_scroll_region(
                ui,
                max_rect.expand(4.0),
                id.with("max"),
                &mut channel.view,
            );
            range_control::handle_scroll_region(
                ui,
                min_rect.expand(4.0),
                id.with("min"),
                &mut channel.view,
            );
        }
    }

    /// Latest-value readouts at the top right, time span at the bottom right.
    fn draw_readouts(&self, painter: &egui::Painter, canvas: Rect) {
        let g = &self.grid;
        let font = FontId::proportional(g.label_size);
        for (slot, channel) in self.displayed_channels().enumerate() {
            if let Some(value) = channel.latest_value() {
                let text = if channel.spec.unit.is_empty() {
                    format!("{value:.1}")
                } else {
                    format!("{value:.1} {}", channel.spec.unit)
                };
                let pos = Pos2::new(
                    canvas.right() - LABEL_INSET,
                    canvas.top() + LABEL_INSET + LABEL_STACK * slot as f32,
                );
                painter.text(pos, Align2::RIGHT_TOP, text, font.clone(), channel.spec.color);
            }
        }
        painter.text(
            Pos2::new(canvas.right() - LABEL_INSET, canvas.bottom() - LABEL_INSET),
            Align2::RIGHT_BOTTOM,
            format!("{} s", self.time_span),
            font,
            g.text_color,
        );
    }
}

impl eframe::App for ScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}

/// Run the scope as a standalone native window.
///
/// Streaming starts immediately; the Pause button stops it and Start opens
/// a fresh subscription via the connector.
pub fn run_scope(mut config: ScopeConfig, connector: StreamConnector) -> eframe::Result<()> {
    let options = config.native_options.take().unwrap_or_else(|| eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([960.0, 540.0]),
        ..Default::default()
    });
    let title = config.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| {
            Ok(Box::new({
                let mut app = ScopeApp::new(config, connector);
                app.start();
                app
            }))
        }),
    )
}
