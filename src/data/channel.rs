use crate::config::SignalSpec;
use crate::data::buffer::SignalBuffer;
use crate::data::view::ChannelView;

/// One display slot: a signal's metadata, its sample history and its
/// interactive vertical view state.
#[derive(Debug, Clone)]
pub struct Channel {
    pub spec: SignalSpec,
    pub buffer: SignalBuffer,
    pub view: ChannelView,
}

impl Channel {
    pub fn new(spec: SignalSpec, max_buffer_size: usize) -> Self {
        Self {
            spec,
            buffer: SignalBuffer::new(max_buffer_size),
            view: ChannelView::new(),
        }
    }

    /// Current `(view_min, view_max)` against this channel's base range.
    pub fn view_range(&self) -> (f64, f64) {
        self.view.view_range(self.spec.base_min, self.spec.base_max)
    }

    /// Value of the most recent sample, if any.
    pub fn latest_value(&self) -> Option<f64> {
        self.buffer.newest().map(|sample| sample[1])
    }
}
