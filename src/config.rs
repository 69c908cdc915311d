//! Configuration types for the scope widget.

use egui::Color32;

// ─────────────────────────────────────────────────────────────────────────────
// SignalSpec – identity and scale of one telemetry signal
// ─────────────────────────────────────────────────────────────────────────────

/// Identity and full-scale range of one telemetry signal.
///
/// `name` doubles as the routing key: incoming frames feed the channel
/// whose name matches one of their fields. The base range is the analytic
/// full scale of the signal and never changes at runtime; zoom and offset
/// derive the visible sub-range from it.
#[derive(Debug, Clone)]
pub struct SignalSpec {
    /// Field name in incoming frames.
    pub name: String,
    /// Unit suffix for value readouts (e.g. "hPa", "°C"). Empty hides it.
    pub unit: String,
    /// Lower bound of the full-scale range.
    pub base_min: f64,
    /// Upper bound of the full-scale range.
    pub base_max: f64,
    /// Trace and label color.
    pub color: Color32,
}

impl SignalSpec {
    pub fn new(
        name: impl Into<String>,
        unit: impl Into<String>,
        base_min: f64,
        base_max: f64,
        color: Color32,
    ) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            base_min,
            base_max,
            color,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// GridStyle – canvas appearance
// ─────────────────────────────────────────────────────────────────────────────

/// Grid, watermark and label styling for the scope canvas.
#[derive(Debug, Clone)]
pub struct GridStyle {
    /// Number of vertical divisions across the time axis.
    pub x_divisions: usize,
    /// Number of horizontal divisions across the value axis.
    pub y_divisions: usize,
    /// Canvas fill behind the grid.
    pub background: Color32,
    /// Grid line color.
    pub grid_color: Color32,
    /// Watermark title color.
    pub title_color: Color32,
    /// Color of the time-span readout.
    pub text_color: Color32,
    /// Trace stroke width in pixels.
    pub trace_width: f32,
    /// Font size for range labels and value readouts.
    pub label_size: f32,
    /// Font size for the watermark title.
    pub title_size: f32,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            x_divisions: 20,
            y_divisions: 10,
            background: Color32::BLACK,
            grid_color: Color32::from_rgb(0x33, 0x33, 0x33),
            title_color: Color32::from_rgb(0x55, 0x55, 0x55),
            text_color: Color32::WHITE,
            trace_width: 2.0,
            label_size: 14.0,
            title_size: 64.0,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ScopeConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration for a scope instance.
pub struct ScopeConfig {
    /// Signals to display, in slot order. Signals beyond `display_slots`
    /// keep buffering but are never drawn.
    pub signals: Vec<SignalSpec>,
    /// Rolling time window, in the stream's time units.
    pub time_span: f64,
    /// Maximum number of samples retained per channel.
    pub max_buffer_size: usize,
    /// Number of channels rendered at once.
    pub display_slots: usize,
    /// Watermark title drawn behind the traces.
    pub title: String,
    /// Canvas styling.
    pub grid: GridStyle,
    /// Optional eframe native-window options for [`run_scope`].
    ///
    /// [`run_scope`]: crate::app::run_scope
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            signals: Vec::new(),
            time_span: 10.0,
            max_buffer_size: 10_000,
            display_slots: 4,
            title: "livescope".to_string(),
            grid: GridStyle::default(),
            native_options: None,
        }
    }
}
