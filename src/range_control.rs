//! Scroll-wheel control of a channel's vertical zoom and offset.
//!
//! Each displayed channel exposes its min/max range labels as scroll
//! regions. One wheel notch over either label moves the view by exactly one
//! step: with the command modifier held the step goes to `zoom`, otherwise
//! to `offset`. Wheel-up is `+1` in both cases. Consumed gestures are
//! stripped from the input state so enclosing scroll areas stay still.

use egui::{CursorIcon, Sense, Vec2};

use crate::data::view::ChannelView;

/// One wheel step: `+1` for wheel-up, `-1` for wheel-down.
pub fn scroll_step(delta_y: f32) -> i32 {
    if delta_y > 0.0 {
        1
    } else {
        -1
    }
}

/// Apply one wheel step to a view. A zero delta is ignored.
pub fn apply_scroll(view: &mut ChannelView, delta_y: f32, zoom_modifier: bool) {
    if delta_y == 0.0 {
        return;
    }
    let step = scroll_step(delta_y);
    if zoom_modifier {
        view.zoom += step;
    } else {
        view.offset += step;
    }
}

/// Wire a label rect as a scroll region for one channel's vertical scale.
///
/// Returns `true` when a scroll gesture was consumed.
pub fn handle_scroll_region(
    ui: &egui::Ui,
    rect: egui::Rect,
    id: egui::Id,
    view: &mut ChannelView,
) -> bool {
    let response = ui.interact(rect, id, Sense::hover());
    if !response.hovered() {
        return false;
    }
    let (delta_y, zoom_modifier) = ui
        .ctx()
        .input(|i| (i.raw_scroll_delta.y, i.modifiers.command));
    // Cursor hints at the mode the next notch would take; purely cosmetic.
    ui.ctx().set_cursor_icon(if zoom_modifier {
        CursorIcon::ZoomIn
    } else {
        CursorIcon::ResizeVertical
    });
    if delta_y == 0.0 {
        return false;
    }
    apply_scroll(view, delta_y, zoom_modifier);
    // Strip the gesture so outer scroll areas don't also react to it.
    ui.ctx().input_mut(|i| {
        i.raw_scroll_delta = Vec2::ZERO;
        i.smooth_scroll_delta = Vec2::ZERO;
    });
    true
}
