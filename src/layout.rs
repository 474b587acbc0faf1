//! Layout engine: converts route units (miles, feet) into pixel
//! geometry.
//!
//! Layout runs once after the route is loaded. The only field that
//! changes afterwards is each shape's `x`, which the scene shifts in
//! lockstep on every scroll event.

use egui::{pos2, Pos2};

use crate::route::Route;

/// Scale constants mapping route units to pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    /// Pixels per mile
    pub width_mult: f32,
    /// Pixels per foot of elevation
    pub height_mult: f32,
    /// Empty space reserved at each end of the scrollable content, in
    /// pixels, so the first/last leg never touches the viewport edge
    pub mount_buffer: f32,
}

impl Default for Scale {
    fn default() -> Self {
        Self {
            width_mult: 100.0,
            height_mult: 0.1,
            mount_buffer: 300.0,
        }
    }
}

/// Pixel geometry for one leg, produced once by [`layout_route`].
#[derive(Debug, Clone, PartialEq)]
pub struct LegShape {
    /// One-based leg number
    pub number: u32,
    /// Current screen x of the leg's left edge (shifted on scroll)
    pub x: f32,
    /// Pixel width (`dist * width_mult`)
    pub width: f32,
    /// Difficulty score, used for fill color
    pub difficulty: u32,
    /// Leg distance in miles, kept for labels
    pub dist: f64,
    /// Total climb in feet, kept for labels
    pub climb_total: f64,
    /// Highest point of the profile above ground, in pixels
    pub peak_height: f32,
    /// Profile samples as (dx from left edge, height above ground),
    /// both in pixels; the first sample is always (0, start height)
    pub profile: Vec<(f32, f32)>,
}

impl LegShape {
    /// Closed outline of the leg: bottom-left, one vertex per profile
    /// sample, bottom-right. Fill order matches the profile order.
    pub fn polygon(&self, ground_y: f32) -> Vec<Pos2> {
        let mut vertices = Vec::with_capacity(self.profile.len() + 2);
        vertices.push(pos2(self.x, ground_y));
        for &(dx, h) in &self.profile {
            vertices.push(pos2(self.x + dx, ground_y - h));
        }
        vertices.push(pos2(self.x + self.width, ground_y));
        vertices
    }

    /// Decompose the outline into one convex quad per profile
    /// interval. Concave profiles fill correctly when drawn quad by
    /// quad, which a single concave polygon would not.
    pub fn quads(&self, ground_y: f32) -> Vec<[Pos2; 4]> {
        self.profile
            .windows(2)
            .map(|pair| {
                let (dx0, h0) = pair[0];
                let (dx1, h1) = pair[1];
                [
                    pos2(self.x + dx0, ground_y),
                    pos2(self.x + dx0, ground_y - h0),
                    pos2(self.x + dx1, ground_y - h1),
                    pos2(self.x + dx1, ground_y),
                ]
            })
            .collect()
    }

    /// Screen x and height of the highest profile sample, for flag
    /// placement.
    pub fn peak(&self) -> (f32, f32) {
        let &(dx, h) = self
            .profile
            .iter()
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .expect("profile is never empty");
        (self.x + dx, h)
    }

    /// Whether any part of the leg is inside the viewport.
    pub fn visible(&self, viewport_width: f32) -> bool {
        self.x < viewport_width && self.x + self.width > 0.0
    }
}

/// Lay out every leg of a route left to right, starting at the mount
/// buffer. Leg i+1 begins exactly where leg i ends.
pub fn layout_route(route: &Route, scale: Scale) -> Vec<LegShape> {
    let mut shapes = Vec::with_capacity(route.legs.len());
    let mut current_x = scale.mount_buffer;

    for leg in &route.legs {
        debug_assert!(!leg.portions.is_empty(), "loader rejects empty legs");

        let width = leg.dist as f32 * scale.width_mult;

        let mut profile = Vec::with_capacity(leg.portions.len() + 1);
        profile.push((0.0, leg.start_elev as f32 * scale.height_mult));
        for portion in &leg.portions {
            profile.push((
                portion.end_dist as f32 * scale.width_mult,
                portion.end_elev as f32 * scale.height_mult,
            ));
        }

        let peak_height = profile
            .iter()
            .map(|&(_, h)| h)
            .fold(0.0, f32::max);

        shapes.push(LegShape {
            number: leg.number,
            x: current_x,
            width,
            difficulty: leg.difficulty,
            dist: leg.dist,
            climb_total: leg.climb_total,
            peak_height,
            profile,
        });

        current_x += width;
    }

    shapes
}

/// Total scrollable content width: leg widths plus the two symmetric
/// side buffers.
pub fn total_pixel_width(legs: &[LegShape], scale: Scale) -> f32 {
    legs.iter().map(|l| l.width).sum::<f32>() + 2.0 * scale.mount_buffer
}
