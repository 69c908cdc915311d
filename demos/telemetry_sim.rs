//! Example: Simulated telemetry producer
//!
//! What it demonstrates
//! - Feeding the scope through `channel_stream()` and a `StreamConnector`.
//! - JSON frames carrying several named fields plus a shared `time` stamp.
//! - Pause/Start: pausing drops the subscription so the producer thread
//!   exits on its next send; Start asks the connector for a fresh stream.
//!
//! How to run
//! ```bash
//! cargo run --example telemetry_sim
//! ```
//! You should see pressure, temperature and yaw traces scrolling live.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use egui::Color32;
use livescope::{channel_stream, run_scope, ScopeConfig, SignalSpec, StreamConnector};
use rand::Rng;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = ScopeConfig {
        signals: vec![
            SignalSpec::new("pressure", "hPa", 980.0, 1050.0, Color32::from_rgb(255, 221, 0)),
            SignalSpec::new("temperature", "\u{b0}C", 15.0, 35.0, Color32::from_rgb(0, 200, 255)),
            SignalSpec::new("yaw", "\u{b0}", -180.0, 180.0, Color32::from_rgb(120, 255, 120)),
        ],
        title: "telemetry".into(),
        ..Default::default()
    };

    // Each invocation opens a fresh channel and spawns its own producer, so
    // restarting after a pause gets a live stream again.
    let connector: StreamConnector = Box::new(|| {
        let (sink, rx) = channel_stream();
        std::thread::spawn(move || {
            const FS_HZ: f64 = 50.0; // 50 Hz frame rate
            let dt = Duration::from_millis(20);
            let mut rng = rand::thread_rng();
            let mut n: u64 = 0;
            loop {
                let phase = n as f64 / FS_HZ;
                let t_s = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map(|d| d.as_secs_f64())
                    .unwrap_or(0.0);
                let pressure =
                    1013.0 + 8.0 * (0.05 * phase * std::f64::consts::TAU).sin() + rng.gen_range(-0.4..0.4);
                let temperature =
                    22.0 + 3.0 * (0.02 * phase * std::f64::consts::TAU).sin() + rng.gen_range(-0.1..0.1);
                let yaw = (phase * 12.0) % 360.0 - 180.0;
                let frame = serde_json::json!({
                    "time": t_s,
                    "pressure": pressure,
                    "temperature": temperature,
                    "yaw": yaw,
                })
                .to_string();
                // Receiver dropped means the scope paused or the UI closed
                if sink.send_json(frame).is_err() {
                    break;
                }
                n = n.wrapping_add(1);
                std::thread::sleep(dt);
            }
        });
        rx
    });

    // Run the UI until closed
    run_scope(config, connector)
}
