//! Bounded per-signal sample storage with sliding-window eviction.

use std::collections::VecDeque;

/// Time-ordered `[t, value]` samples for a single signal.
///
/// The buffer is bounded twice over: a hard FIFO cap on the number of
/// samples, and a rolling time window applied via [`evict_to_window`]
/// after new data arrives. Timestamps are expected to be non-decreasing;
/// out-of-order input is tolerated but produces a malformed trace segment.
///
/// [`evict_to_window`]: SignalBuffer::evict_to_window
#[derive(Debug, Clone)]
pub struct SignalBuffer {
    samples: VecDeque<[f64; 2]>,
    max_len: usize,
}

impl SignalBuffer {
    /// Create an empty buffer holding at most `max_len` samples.
    pub fn new(max_len: usize) -> Self {
        Self {
            samples: VecDeque::new(),
            max_len,
        }
    }

    /// Append one sample, dropping the oldest when the cap is exceeded.
    pub fn push(&mut self, t: f64, value: f64) {
        self.samples.push_back([t, value]);
        if self.samples.len() > self.max_len {
            self.samples.pop_front();
        }
    }

    /// Drop samples that have aged out of the rolling window.
    ///
    /// A sample is popped while more than one sample remains and the
    /// *second-oldest* sample is already older than `time_span` relative to
    /// the newest one. This keeps exactly one sample beyond the window edge
    /// so the trace still spans the full canvas width at the left border.
    pub fn evict_to_window(&mut self, time_span: f64) {
        while self.samples.len() > 1 {
            let newest_t = self.samples[self.samples.len() - 1][0];
            if newest_t - self.samples[1][0] > time_span {
                self.samples.pop_front();
            } else {
                break;
            }
        }
    }

    /// Number of retained samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Maximum number of samples this buffer retains.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Oldest retained sample; anchors the time axis.
    pub fn oldest(&self) -> Option<[f64; 2]> {
        self.samples.front().copied()
    }

    /// Most recently appended sample.
    pub fn newest(&self) -> Option<[f64; 2]> {
        self.samples.back().copied()
    }

    /// Iterate samples oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &[f64; 2]> {
        self.samples.iter()
    }
}
