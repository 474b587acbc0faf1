//! Main application state and egui integration.

use eframe::egui;

use relayview::config::VizConfig;
use relayview::render;
use relayview::route::Route;
use relayview::scene::Scene;
use relayview::scroll::ScrollIntent;

use rand::{rngs::SmallRng, SeedableRng};

/// Main application state.
pub struct RelayViewApp {
    config: VizConfig,
    scene: Scene,
}

impl RelayViewApp {
    /// Create a new application instance from a validated route.
    pub fn new(cc: &eframe::CreationContext<'_>, route: Route, config: VizConfig) -> Self {
        let viewport_size = cc.egui_ctx.input(|i| i.viewport_rect().size());
        let mut rng = SmallRng::from_entropy();

        let scene = Scene::new(&route, &config, (viewport_size.x, viewport_size.y), &mut rng);
        tracing::info!(
            legs = scene.legs.len(),
            clouds = scene.clouds.len(),
            total_px = scene.viewport.total_pixel_width,
            "scene built"
        );

        Self { config, scene }
    }

    /// Fold the frame's input into one scroll intent. Held arrow keys
    /// contribute a fixed per-frame delta; a wheel event contributes
    /// its own delta, capped per event. Wheel-up (positive y) scrolls
    /// back toward the start.
    fn scroll_intent(&self, ctx: &egui::Context) -> ScrollIntent {
        ctx.input(|i| {
            ScrollIntent::default()
                .with_keys(
                    i.key_down(egui::Key::ArrowLeft),
                    i.key_down(egui::Key::ArrowRight),
                    self.config.scroll.scroll_speed,
                )
                .with_wheel(-i.raw_scroll_delta.y, self.config.scroll.max_wheel_step)
        })
    }
}

impl eframe::App for RelayViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let size = ctx.input(|i| i.viewport_rect().size());
        if size.x != self.scene.viewport.width || size.y != self.scene.viewport.height {
            self.scene.handle_resize(size.x, size.y);
        }

        let intent = self.scroll_intent(ctx);
        self.scene.scroll(intent);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                render::draw(ui.painter(), &self.scene);
            });

        // Key-hold scrolling needs a frame cadence even without new
        // input events.
        ctx.request_repaint();
    }
}
