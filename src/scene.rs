//! Scene: every positionable entity plus the viewport, built once from
//! a route and scrolled in lockstep.

use rand::Rng;

use crate::clouds::{spawn_clouds, Cloud};
use crate::config::VizConfig;
use crate::layout::{layout_route, total_pixel_width, LegShape, Scale};
use crate::route::{Route, RouteStats};
use crate::scroll::{ScrollIntent, ViewportState};

/// Banner kind, placed at the content edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Start,
    Finish,
}

impl BannerKind {
    pub fn label(&self) -> &'static str {
        match self {
            BannerKind::Start => "START",
            BannerKind::Finish => "FINISH",
        }
    }
}

/// Start or finish banner. Scrolls with the content.
#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    /// Current screen x of the banner pole (shifted on scroll)
    pub x: f32,
    pub kind: BannerKind,
}

/// The tick-marked distance ruler along the ground. Unlike the other
/// HUD overlays it spans the route itself, so it scrolls with the
/// content.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceBar {
    /// Current screen x of the route's first mile zero (shifted on
    /// scroll)
    pub x: f32,
    /// Pixel length of the full route
    pub length: f32,
}

/// All per-session visual state.
#[derive(Debug, Clone)]
pub struct Scene {
    pub legs: Vec<LegShape>,
    pub clouds: Vec<Cloud>,
    pub banners: [Banner; 2],
    pub distance_bar: DistanceBar,
    pub viewport: ViewportState,
    pub stats: RouteStats,
    pub scale: Scale,
    /// Route display name, drawn as the title
    pub route_name: String,
}

impl Scene {
    /// Build the scene once from a validated route.
    pub fn new(
        route: &Route,
        config: &VizConfig,
        viewport_size: (f32, f32),
        rng: &mut impl Rng,
    ) -> Self {
        let scale = Scale {
            width_mult: config.scale.width_mult,
            height_mult: config.scale.height_mult,
            mount_buffer: config.scale.mount_buffer,
        };

        let legs = layout_route(route, scale);
        let total = total_pixel_width(&legs, scale);
        let stats = route.stats();

        let clouds = spawn_clouds(rng, total, &config.scenery);

        let content_start = scale.mount_buffer;
        let content_end = total - scale.mount_buffer;
        let banners = [
            Banner {
                x: content_start,
                kind: BannerKind::Start,
            },
            Banner {
                x: content_end,
                kind: BannerKind::Finish,
            },
        ];

        let distance_bar = DistanceBar {
            x: content_start,
            length: content_end - content_start,
        };

        let viewport = ViewportState::new(
            viewport_size.0,
            viewport_size.1,
            config.scenery.ground_frac,
            total,
            scale.mount_buffer,
        );

        Self {
            legs,
            clouds,
            banners,
            distance_bar,
            viewport,
            stats,
            scale,
            route_name: route.name.clone(),
        }
    }

    /// Run one scroll request through the shared clamp and move every
    /// entity by the resulting shift.
    pub fn scroll(&mut self, intent: ScrollIntent) {
        if intent.is_none() {
            return;
        }
        let shift = self.viewport.scroll_by(intent.delta);
        if shift != 0.0 {
            self.shift_entities(shift);
        }
    }

    /// React to a window resize: recompute viewport-relative geometry
    /// and re-clamp the scroll offset.
    pub fn handle_resize(&mut self, width: f32, height: f32) {
        let shift = self.viewport.resize(width, height);
        if shift != 0.0 {
            self.shift_entities(shift);
        }
    }

    fn shift_entities(&mut self, shift: f32) {
        for leg in &mut self.legs {
            leg.x += shift;
        }
        for cloud in &mut self.clouds {
            cloud.x += shift;
        }
        for banner in &mut self.banners {
            banner.x += shift;
        }
        self.distance_bar.x += shift;
    }
}
