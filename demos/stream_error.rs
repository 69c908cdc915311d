//! Example: Malformed frames and a dying stream
//!
//! What it demonstrates
//! - Malformed frames are logged and skipped; the traces keep scrolling.
//! - A transport error stops the scope; Start reconnects through the
//!   connector and streaming resumes.
//!
//! How to run
//! ```bash
//! RUST_LOG=livescope=debug cargo run --example stream_error
//! ```
//! Watch the log: a warning every few seconds for the garbage frames, then
//! after ~15 s an error and the scope pauses itself. Press Start to resume.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use egui::Color32;
use livescope::{channel_stream, run_scope, ScopeConfig, SignalSpec, StreamConnector};

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = ScopeConfig {
        signals: vec![SignalSpec::new(
            "signal",
            "V",
            -1.5,
            1.5,
            Color32::from_rgb(255, 221, 0),
        )],
        title: "flaky stream".into(),
        ..Default::default()
    };

    let connector: StreamConnector = Box::new(|| {
        let (sink, rx) = channel_stream();
        std::thread::spawn(move || {
            const FS_HZ: f64 = 25.0;
            let dt = Duration::from_millis(40);
            for n in 0u64.. {
                let t_s = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map(|d| d.as_secs_f64())
                    .unwrap_or(0.0);
                // Every 15 s the transport "dies"; the scope stops itself.
                if n > 0 && n % (15 * FS_HZ as u64) == 0 {
                    let _ = sink.send_error("simulated transport failure");
                    break;
                }
                // Every ~1.6 s a frame arrives garbled.
                let result = if n % 40 == 39 {
                    sink.send_json("{\"time\": 12, \"signal\": tru")
                } else {
                    let phase = n as f64 / FS_HZ;
                    let value = (0.4 * phase * std::f64::consts::TAU).sin();
                    sink.send_json(
                        serde_json::json!({ "time": t_s, "signal": value }).to_string(),
                    )
                };
                if result.is_err() {
                    break;
                }
                std::thread::sleep(dt);
            }
        });
        rx
    });

    run_scope(config, connector)
}
