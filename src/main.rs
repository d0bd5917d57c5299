// SPDX-License-Identifier: MPL-2.0
//! Headless simulator: drives a notification manager at a fixed frame rate
//! with a slowly turning viewpoint and logs every surface write.
//!
//! ```text
//! vr-notify-sim [--message TEXT] [--severity info|warning|error] [--count N]
//!               [--fps N] [--config PATH] [--debug LEVEL]
//! ```

use std::path::PathBuf;
use std::time::Duration;

use log::{debug, info, warn};
use vr_notifications::config::{self, NotificationSettings};
use vr_notifications::domain::{Color, Pose, Vec3};
use vr_notifications::notifications::{
    LabelSurface, LayoutRefresh, NotificationManager, Severity, SharedViewpoint, SlotBindings,
    SlotSurface, SlotTransform,
};

const DEFAULT_FPS: u32 = 60;
const MAX_SIMULATED_SECS: f32 = 600.0;
/// Yaw speed of the simulated head, radians per second.
const HEAD_TURN_RATE: f32 = 0.4;
const HEAD_HEIGHT: f32 = 1.6;

struct Cli {
    message: Option<String>,
    severity: Severity,
    count: u32,
    fps: u32,
    config: Option<PathBuf>,
    debug: u8,
}

fn parse_cli() -> Result<Cli, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    let cli = Cli {
        message: args.opt_value_from_str("--message")?,
        severity: args
            .opt_value_from_str("--severity")?
            .unwrap_or_default(),
        count: args.opt_value_from_str("--count")?.unwrap_or(3),
        fps: args
            .opt_value_from_str("--fps")?
            .unwrap_or(DEFAULT_FPS)
            .max(1),
        config: args.opt_value_from_str("--config")?,
        debug: args.opt_value_from_str("--debug")?.unwrap_or(0),
    };
    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("Ignoring unexpected arguments: {rest:?}");
    }
    Ok(cli)
}

struct LoggingSlot;

impl SlotSurface for LoggingSlot {
    fn set_visible(&mut self, visible: bool) {
        info!("slot visible = {visible}");
    }

    fn set_scale(&mut self, scale: Vec3) {
        debug!("slot scale = {:.3}", scale.x);
    }

    fn set_transform(&mut self, transform: &SlotTransform) {
        debug!(
            "slot at ({:.2}, {:.2}, {:.2}) facing ({:.2}, {:.2}, {:.2})",
            transform.position.x,
            transform.position.y,
            transform.position.z,
            transform.forward.x,
            transform.forward.y,
            transform.forward.z
        );
    }
}

struct LoggingLabel;

impl LabelSurface for LoggingLabel {
    fn set_text(&mut self, text: &str) {
        info!("label text = {text:?}");
    }

    fn set_message_color(&mut self, color: Color) {
        debug!("label color = {color:?}");
    }

    fn set_background_color(&mut self, color: Color) {
        debug!("background color = {color:?}");
    }
}

struct LoggingLayout;

impl LayoutRefresh for LoggingLayout {
    fn refresh_layout(&mut self) {
        debug!("layout refresh requested");
    }
}

fn load_settings(path: Option<&PathBuf>) -> vr_notifications::error::Result<NotificationSettings> {
    match path {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    }
}

fn head_pose(time: f32) -> Pose {
    let yaw = time * HEAD_TURN_RATE;
    Pose::new(
        Vec3::new(0.0, HEAD_HEIGHT, 0.0),
        Vec3::new(yaw.sin(), 0.0, yaw.cos()),
        Vec3::UP,
    )
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = parse_cli()?;

    // RUST_LOG overrides --debug
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let settings = load_settings(cli.config.as_ref())?;
    let viewpoint = SharedViewpoint::new(Some(head_pose(0.0)));
    let mut manager = NotificationManager::new(
        settings,
        viewpoint.clone(),
        SlotBindings::new(LoggingSlot, LoggingLabel, LoggingLayout),
    )?;

    if let Some(message) = &cli.message {
        manager.send_message_with_severity(message, cli.severity);
    }
    for _ in 0..cli.count {
        manager.send_debug_message();
    }

    let dt = 1.0 / cli.fps as f32;
    let mut interval = tokio::time::interval(Duration::from_secs_f32(dt));
    loop {
        interval.tick().await;
        viewpoint.set(head_pose(manager.clock()));
        manager.tick(dt);

        let drained = manager.is_started()
            && !manager.is_executor_running()
            && !manager.is_message_showing()
            && manager.queued_count() == 0;
        if drained {
            break;
        }
        if manager.clock() > MAX_SIMULATED_SECS {
            warn!("Stopping after {MAX_SIMULATED_SECS}s of simulated time");
            break;
        }
    }

    let summary = manager.diagnostics().summary();
    info!(
        "Done after {:.2}s: {} shown, {} failed",
        manager.clock(),
        summary.count("shown"),
        summary.count("show_failed")
    );
    Ok(())
}
