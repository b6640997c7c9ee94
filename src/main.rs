//! Star Jar: fold wishes into paper stars and drop them into a glass jar
//!
//! - Type a wish, pick a paper color, submit
//! - Knot, wrap and puff the strip into a star
//! - The star falls into a physics-driven jar; click it to read the wish again

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod config;
mod fold;
mod geometry;
mod jar;
mod locale;
mod pick;
mod render;
mod rng;
mod star;
mod storage;
mod ui;

use app::AppState;
use config::AppConfig;
use fold::DeviceHaptics;
use macroquad::logging::info;
use macroquad::prelude::*;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Star Jar v{}", VERSION),
        window_width: 480,
        window_height: 800,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let config = AppConfig::load_or_default();
    let mut app = AppState::new(config, storage::default_backend(), Box::new(DeviceHaptics));

    info!("=== Star Jar v{} ===", VERSION);

    loop {
        let now_ms = macroquad::miniquad::date::now() * 1000.0;
        let dt = get_frame_time();

        app.update(now_ms, dt);
        app.frame(now_ms);

        next_frame().await;
    }
}
