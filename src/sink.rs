//! Stream event types and channels for feeding telemetry into the scope.
//!
//! Producers run on their own threads and push whole frames through a
//! standard `mpsc` channel:
//! - [`channel_stream`] creates a `(StreamSink, Receiver<StreamEvent>)` pair.
//! - [`StreamSink::send_json`] delivers one JSON frame per sample batch.
//! - [`StreamSink::send_error`] signals a transport failure in-band, which
//!   stops the scope on the next frame.
//!
//! The scope re-subscribes every time it is started, so it takes a
//! [`StreamConnector`] rather than a single receiver.

use std::sync::mpsc::{Receiver, SendError, Sender};

/// Messages sent over the channel to drive the scope.
#[derive(Debug, Clone)]
pub enum StreamEvent {
    /// One telemetry frame: a JSON object of numeric fields plus `time`.
    Message(String),
    /// Transport-level failure reported by the producer.
    Error(String),
}

/// Convenience sender for pushing telemetry frames into the scope.
#[derive(Clone)]
pub struct StreamSink {
    tx: Sender<StreamEvent>,
}

impl StreamSink {
    /// Send one frame. The body must be a JSON object with a numeric `time`
    /// field; malformed bodies are logged and discarded on the consumer side.
    pub fn send_json<S: Into<String>>(&self, body: S) -> Result<(), SendError<StreamEvent>> {
        self.tx.send(StreamEvent::Message(body.into()))
    }

    /// Report a transport failure. The consumer logs it and stops streaming;
    /// it does not reconnect on its own.
    pub fn send_error<S: Into<String>>(&self, message: S) -> Result<(), SendError<StreamEvent>> {
        self.tx.send(StreamEvent::Error(message.into()))
    }
}

/// Opens a fresh stream subscription; invoked once per scope start.
///
/// Starting the scope after a stop must yield a *new* receiver (the old one
/// was dropped on stop), which is why this is a factory and not a receiver.
pub type StreamConnector = Box<dyn FnMut() -> Receiver<StreamEvent> + Send + 'static>;

/// Create a new channel pair for streaming: `(StreamSink, Receiver<StreamEvent>)`.
pub fn channel_stream() -> (StreamSink, Receiver<StreamEvent>) {
    let (tx, rx) = std::sync::mpsc::channel();
    (StreamSink { tx }, rx)
}
