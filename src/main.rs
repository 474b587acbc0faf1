//! RelayView - scrollable elevation-profile visualization.
//!
//! Main entry point for the application.

use anyhow::Context;
use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use relayview::config::{load_config, VizConfig};
use relayview::route::Route;

mod app;

fn main() -> eframe::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting RelayView v{}", env!("CARGO_PKG_VERSION"));

    let (config, route) = match load_inputs() {
        Ok(inputs) => inputs,
        Err(e) => {
            tracing::error!("startup failed: {e:#}");
            std::process::exit(1);
        }
    };

    let title = if route.name.is_empty() {
        config.title.clone()
    } else {
        route.name.clone()
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title(title),
        ..Default::default()
    };

    eframe::run_native(
        "RelayView",
        options,
        Box::new(move |cc| Ok(Box::new(app::RelayViewApp::new(cc, route, config)))),
    )
}

/// Load configuration and the route document. An optional CLI argument
/// names a route file; otherwise the bundled route is used.
fn load_inputs() -> anyhow::Result<(VizConfig, Route)> {
    let config = load_config().context("loading configuration")?;

    let route = match std::env::args().nth(1) {
        Some(path) => {
            tracing::info!("loading route from {path}");
            Route::load(&path).with_context(|| format!("loading route file {path}"))?
        }
        None => Route::bundled(),
    };

    Ok((config, route))
}
