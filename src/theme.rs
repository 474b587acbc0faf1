//! Color palette and color interpolation.

use egui::Color32;

/// Fixed palette for the visualization.
pub struct Palette;

impl Palette {
    /// Daytime sky
    pub const SKY_DAY: Color32 = Color32::from_rgb(135, 206, 235);
    /// Night sky, reached mid-route
    pub const SKY_NIGHT: Color32 = Color32::from_rgb(8, 8, 24);
    /// Ground fill
    pub const GROUND: Color32 = Color32::from_rgb(155, 118, 83);
    /// Easiest-leg fill
    pub const EASIEST: Color32 = Color32::from_rgb(0, 184, 0);
    /// Hardest-leg fill
    pub const HARDEST: Color32 = Color32::from_rgb(254, 0, 0);
    /// Background-depth clouds
    pub const CLOUD_FAR: Color32 = Color32::from_rgba_premultiplied(228, 228, 232, 235);
    /// Foreground-depth clouds
    pub const CLOUD_NEAR: Color32 = Color32::from_rgba_premultiplied(250, 250, 252, 250);
    /// Text and tick marks
    pub const INK: Color32 = Color32::from_rgb(20, 20, 24);
    /// Banner cloth
    pub const BANNER: Color32 = Color32::from_rgb(220, 50, 47);
    /// HUD backdrop strips
    pub const HUD_BG: Color32 = Color32::from_rgba_premultiplied(255, 255, 255, 200);
    /// Scroll tracker fill
    pub const TRACKER_FILL: Color32 = Color32::from_rgb(66, 133, 244);
}

/// Linear interpolation between two colors in gamma space by a [0, 1]
/// fraction. The endpoints are returned exactly at t = 0 and t = 1.
pub fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgb(mix(a.r(), b.r()), mix(a.g(), b.g()), mix(a.b(), b.b()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        assert_eq!(
            lerp_color(Palette::EASIEST, Palette::HARDEST, 0.0),
            Palette::EASIEST
        );
        assert_eq!(
            lerp_color(Palette::EASIEST, Palette::HARDEST, 1.0),
            Palette::HARDEST
        );
    }

    #[test]
    fn out_of_range_fractions_clamp() {
        assert_eq!(
            lerp_color(Palette::SKY_DAY, Palette::SKY_NIGHT, -3.0),
            Palette::SKY_DAY
        );
        assert_eq!(
            lerp_color(Palette::SKY_DAY, Palette::SKY_NIGHT, 7.0),
            Palette::SKY_NIGHT
        );
    }
}
