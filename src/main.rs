mod adapters;
mod app;
mod core;
mod global_constants;
mod ports;


use std::process::ExitCode;

use crate::core::models::{ImageFormat, UserSettings};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::init();

    log::info!(
        "[MAIN] Starting {} {}",
        global_constants::APPLICATION_NAME,
        env!("CARGO_PKG_VERSION")
    );

    let format_override = match std::env::args().nth(1) {
        Some(argument) => match argument.parse::<ImageFormat>() {
            Ok(image_format) => Some(image_format),
            Err(error) => {
                log::error!("[MAIN] {}", error);
                return ExitCode::from(2);
            }
        },
        None => None,
    };

    let settings = UserSettings::load().unwrap_or_else(|e| {
        log::warn!("[MAIN] Failed to load settings: {}, using defaults", e);
        UserSettings::default()
    });

    let geoshot = app::GeoshotApp::build(settings);
    let result = geoshot.take_screenshot(format_override).await;
    app::report_outcome(&result);

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
