//! Vertical view state and value-to-pixel mapping.

/// Interactive zoom/offset state for one channel's vertical scale.
///
/// Both fields are plain step counters driven by scroll gestures:
/// - `zoom` narrows the visible range exponentially; five steps halve it.
/// - `offset` shifts the visible range by a tenth of its current height
///   per step, so panning stays proportionate at any zoom level.
///
/// At `(0, 0)` the view reproduces the configured base range exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChannelView {
    pub zoom: i32,
    pub offset: i32,
}

impl ChannelView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Effective `(view_min, view_max)` for the given base range.
    ///
    /// The zoomed height is floored at a tiny positive fraction of the base
    /// range's magnitude so the result never collapses to zero width, even
    /// at extreme zoom counts where the exponential underflows or when the
    /// base range itself is degenerate.
    pub fn view_range(&self, base_min: f64, base_max: f64) -> (f64, f64) {
        let height = base_max - base_min;
        let zoomed = height / 2f64.powf(self.zoom as f64 / 5.0);
        let scale = height.abs().max(base_min.abs()).max(base_max.abs()).max(1.0);
        let zoomed = zoomed.max(scale * 1e-9);
        let shift = -zoomed * self.offset as f64 / 10.0;
        let margin = (height - zoomed) / 2.0;
        (base_min + margin - shift, base_max - margin - shift)
    }
}

/// Map a value into vertical pixel space: `view_min` lands on the bottom
/// edge (`canvas_height`), `view_max` on the top edge (`0`).
///
/// Values outside the view range map beyond the canvas on purpose; the
/// painter's clip rect takes care of them.
pub fn pixel_y(value: f64, (view_min, view_max): (f64, f64), canvas_height: f32) -> f32 {
    (canvas_height as f64 * (1.0 - (value - view_min) / (view_max - view_min))) as f32
}
