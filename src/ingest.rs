//! JSON frame decoding and routing into per-channel buffers.
//!
//! One [`StreamEvent::Message`] carries one frame: a flat JSON object with a
//! numeric `time` field plus arbitrarily named value fields. Fields are
//! routed to the channel whose signal name matches; everything else is
//! ignored. A malformed frame is logged and dropped without disturbing the
//! stream, while a transport error tears the session down.

use std::collections::BTreeMap;
use std::sync::mpsc::{Receiver, TryRecvError};

use serde::Deserialize;
use thiserror::Error;

use crate::data::channel::Channel;
use crate::sink::StreamEvent;

/// Why a frame could not be decoded.
#[derive(Debug, Error)]
pub enum FrameError {
    /// The body was not a JSON object we could decode.
    #[error("invalid frame: {0}")]
    Json(#[from] serde_json::Error),
    /// The object decoded but carried no usable timestamp.
    #[error("frame has no numeric `time` field")]
    MissingTime,
}

/// Raw wire shape; verified into [`Frame`] by [`parse_frame`].
#[derive(Debug, Deserialize)]
struct RawFrame {
    time: Option<f64>,
    #[serde(flatten)]
    fields: BTreeMap<String, serde_json::Value>,
}

/// One decoded telemetry frame.
///
/// `fields` keeps non-numeric values as-is; routing skips them per channel
/// so one bad field never invalidates the rest of the frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub time: f64,
    pub fields: BTreeMap<String, serde_json::Value>,
}

/// Decode one frame body.
pub fn parse_frame(body: &str) -> Result<Frame, FrameError> {
    let raw: RawFrame = serde_json::from_str(body)?;
    let time = raw.time.ok_or(FrameError::MissingTime)?;
    Ok(Frame {
        time,
        fields: raw.fields,
    })
}

/// Push a frame's matching fields into the channels, evicting each touched
/// buffer to the rolling window right away.
pub fn apply_frame(channels: &mut [Channel], frame: &Frame, time_span: f64) {
    for channel in channels.iter_mut() {
        if let Some(value) = frame.fields.get(&channel.spec.name) {
            if let Some(v) = value.as_f64() {
                channel.buffer.push(frame.time, v);
                channel.buffer.evict_to_window(time_span);
            } else {
                log::debug!(
                    "frame field '{}' is not numeric, skipping",
                    channel.spec.name
                );
            }
        }
    }
}

/// Result of one drain pass over the stream receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamStatus {
    /// Receiver drained; the stream remains usable.
    Live,
    /// Transport error or all producers gone; the scope should stop.
    Down,
}

/// Drain every pending event without blocking.
///
/// Malformed frames are logged and skipped. An in-band [`StreamEvent::Error`]
/// or a disconnected channel ends the pass immediately with
/// [`StreamStatus::Down`].
pub fn drain(rx: &Receiver<StreamEvent>, channels: &mut [Channel], time_span: f64) -> StreamStatus {
    loop {
        match rx.try_recv() {
            Ok(StreamEvent::Message(body)) => match parse_frame(&body) {
                Ok(frame) => apply_frame(channels, &frame, time_span),
                Err(err) => log::warn!("discarding malformed frame: {err}"),
            },
            Ok(StreamEvent::Error(message)) => {
                log::error!("telemetry stream error: {message}");
                return StreamStatus::Down;
            }
            Err(TryRecvError::Empty) => return StreamStatus::Live,
            Err(TryRecvError::Disconnected) => {
                log::warn!("telemetry stream closed by producer");
                return StreamStatus::Down;
            }
        }
    }
}
