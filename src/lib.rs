//! Livescope crate root: re-exports and module wiring.
//!
//! This crate provides a live multi-channel telemetry scope built on
//! egui/eframe: a fixed grid of scrolling traces fed by a stream of JSON
//! telemetry frames, with per-channel zoom and offset driven by the mouse
//! wheel.
//!
//! Modules:
//! - `sink`: stream events and channels to feed frames
//! - `config`: signal, grid and scope configuration
//! - `data`: per-channel sample buffers and view mapping
//! - `ingest`: frame parsing and routing into channels
//! - `range_control`: wheel gestures over the range labels
//! - `app`: the scope controller, renderer and run helper

pub mod app;
pub mod config;
pub mod data;
pub mod ingest;
pub mod range_control;
pub mod sink;

// Public re-exports for a compact external API
pub use app::{run_scope, ScopeApp};
pub use config::{GridStyle, ScopeConfig, SignalSpec};
pub use sink::{channel_stream, StreamConnector, StreamEvent, StreamSink};
