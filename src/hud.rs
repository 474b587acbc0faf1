//! HUD overlays: difficulty gauge, distance and altitude rulers,
//! scroll tracker, and the day/night sky.
//!
//! Everything here is a pure function of the route statistics and the
//! viewport state; the renderer turns the results into paint calls.

use egui::Color32;

use crate::route::RouteStats;
use crate::scroll::ViewportState;
use crate::theme::{lerp_color, Palette};

/// Quarter-mile spacing of minor distance ticks.
const MINOR_TICK_MILES: f64 = 0.25;
/// Label spacing along the distance bar, in miles.
const LABEL_EVERY_MILES: u32 = 5;
/// Gap below which the final distance label replaces a 5-mile label.
const LABEL_COLLISION_MILES: f64 = 2.5;
/// Altitude ruler rounding, in feet.
const ALTITUDE_STEP_FT: f64 = 1000.0;
/// Scroll distance over which the altitude ruler fades out.
const ALTITUDE_FADE_PX: f32 = 400.0;
/// Opacity the altitude ruler fades down to mid-route.
const ALTITUDE_MIN_ALPHA: f32 = 0.35;

/// Colors of the difficulty gauge, one segment per difficulty value
/// from 0 to `max_difficulty` inclusive. Segment 0 is exactly the
/// easiest color, the last segment exactly the hardest.
pub fn gauge_segments(max_difficulty: u32) -> Vec<Color32> {
    (0..=max_difficulty)
        .map(|i| difficulty_color(i, max_difficulty))
        .collect()
}

/// Fill color for a difficulty score on the easiest→hardest ramp.
pub fn difficulty_color(difficulty: u32, max_difficulty: u32) -> Color32 {
    if max_difficulty == 0 {
        return Palette::EASIEST;
    }
    lerp_color(
        Palette::EASIEST,
        Palette::HARDEST,
        difficulty as f32 / max_difficulty as f32,
    )
}

/// One tick along the distance bar.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceTick {
    /// Position along the route, in miles
    pub mile: f64,
    /// Whole-mile ticks are major, quarter-mile ticks minor
    pub major: bool,
    /// Label drawn under the tick, where present
    pub label: Option<String>,
}

/// Ticks for the distance bar: minor every quarter mile, major every
/// whole mile, a label every 5 miles, and a final label at the exact
/// total distance (dropping a 5-mile label it would collide with).
pub fn distance_ticks(total_distance: f64) -> Vec<DistanceTick> {
    let quarters = (total_distance / MINOR_TICK_MILES).floor() as u64;
    let mut ticks: Vec<DistanceTick> = (0..=quarters)
        .map(|q| {
            let mile = q as f64 * MINOR_TICK_MILES;
            let major = q % 4 == 0;
            let whole = mile as u64 as f64 == mile;
            let labeled = major
                && whole
                && (mile as u32) % LABEL_EVERY_MILES == 0
                && total_distance - mile >= LABEL_COLLISION_MILES;
            DistanceTick {
                mile,
                major,
                label: labeled.then(|| format!("{} mi", mile as u32)),
            }
        })
        .collect();

    // Exact total, even when it is not on a quarter-mile boundary.
    if let Some(last) = ticks.last_mut() {
        if last.mile == total_distance {
            last.major = true;
            last.label = Some(format_miles(total_distance));
            return ticks;
        }
    }
    ticks.push(DistanceTick {
        mile: total_distance,
        major: true,
        label: Some(format_miles(total_distance)),
    });
    ticks
}

fn format_miles(miles: f64) -> String {
    if miles.fract() == 0.0 {
        format!("{} mi", miles as u64)
    } else {
        format!("{:.2} mi", miles)
    }
}

/// Geometry of the fixed altitude ruler near the left edge.
#[derive(Debug, Clone, PartialEq)]
pub struct AltitudeRuler {
    /// Display ceiling: max elevation rounded up to the next 1000 ft
    pub display_max_ft: f64,
    /// Major tick elevations (every 1000 ft, top inclusive)
    pub majors: Vec<f64>,
    /// Minor tick elevations (250/500/750 ft sub-marks)
    pub minors: Vec<f64>,
}

impl AltitudeRuler {
    pub fn new(max_elevation: f64) -> Self {
        let display_max_ft = (max_elevation / ALTITUDE_STEP_FT).ceil() * ALTITUDE_STEP_FT;
        let steps = (display_max_ft / ALTITUDE_STEP_FT) as u32;

        let majors = (1..=steps).map(|i| i as f64 * ALTITUDE_STEP_FT).collect();
        let minors = (0..steps)
            .flat_map(|i| {
                [250.0, 500.0, 750.0]
                    .into_iter()
                    .map(move |sub| i as f64 * ALTITUDE_STEP_FT + sub)
            })
            .collect();

        Self {
            display_max_ft,
            majors,
            minors,
        }
    }

    /// Ruler opacity for the current scroll offset: fully opaque at
    /// the start, fading to a fixed partial opacity so it does not
    /// obscure the profile mid-route.
    pub fn alpha(&self, current_pixel_position: f32) -> f32 {
        let fade = (current_pixel_position / ALTITUDE_FADE_PX).clamp(0.0, 1.0);
        1.0 - fade * (1.0 - ALTITUDE_MIN_ALPHA)
    }
}

/// Filled fraction of the scroll-position tracker.
pub fn tracker_fraction(viewport: &ViewportState) -> f32 {
    let scrollable = viewport.total_pixel_width - 2.0 * viewport.mount_buffer;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (viewport.current_pixel_position / scrollable).clamp(0.0, 1.0)
}

/// Sky color for the current scroll offset: day fades to near-black
/// over the first third of the scrollable range, stays dark through
/// the middle third, and returns to day over the final third.
pub fn sky_color(viewport: &ViewportState) -> Color32 {
    let max = viewport.max_scroll();
    if max <= 0.0 {
        return Palette::SKY_DAY;
    }
    let t = (viewport.current_pixel_position / max).clamp(0.0, 1.0);

    if t < 1.0 / 3.0 {
        lerp_color(Palette::SKY_DAY, Palette::SKY_NIGHT, t * 3.0)
    } else if t < 2.0 / 3.0 {
        Palette::SKY_NIGHT
    } else {
        lerp_color(Palette::SKY_NIGHT, Palette::SKY_DAY, (t - 2.0 / 3.0) * 3.0)
    }
}

/// Summary line for a leg's always-visible flag.
pub fn leg_flag_label(number: u32) -> String {
    format!("{number}")
}

/// Stats line drawn in the HUD corner.
pub fn route_summary(stats: &RouteStats) -> String {
    format!(
        "{:.1} mi total · max elevation {:.0} ft",
        stats.total_distance, stats.max_elevation
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gauge_has_one_segment_per_difficulty() {
        let segments = gauge_segments(3);
        assert_eq!(segments.len(), 4);
        assert_eq!(segments[0], Palette::EASIEST);
        assert_eq!(segments[3], Palette::HARDEST);
    }

    #[test]
    fn altitude_ruler_rounds_up_to_thousands() {
        let ruler = AltitudeRuler::new(1200.0);
        assert_eq!(ruler.display_max_ft, 2000.0);
        assert_eq!(ruler.majors, vec![1000.0, 2000.0]);
        assert_eq!(ruler.minors.len(), 6);
    }

    #[test]
    fn altitude_ruler_fades_but_never_vanishes() {
        let ruler = AltitudeRuler::new(500.0);
        assert_eq!(ruler.alpha(0.0), 1.0);
        assert_eq!(ruler.alpha(10_000.0), ALTITUDE_MIN_ALPHA);
        let mid = ruler.alpha(ALTITUDE_FADE_PX / 2.0);
        assert!(mid > ALTITUDE_MIN_ALPHA && mid < 1.0);
    }

    #[test]
    fn distance_ticks_label_every_five_miles_plus_total() {
        let ticks = distance_ticks(12.3);
        let labels: Vec<&str> = ticks
            .iter()
            .filter_map(|t| t.label.as_deref())
            .collect();
        // The 10-mile label sits within 2.5 miles of the end and is
        // superseded by the exact total.
        assert_eq!(labels, vec!["0 mi", "5 mi", "12.30 mi"]);

        let last = ticks.last().unwrap();
        assert_eq!(last.mile, 12.3);
        assert!(last.major);

        // 50 quarter-mile ticks (q = 0..=49), 13 of them on whole
        // miles; the appended total tick is major.
        let minors = ticks.iter().filter(|t| !t.major).count();
        assert_eq!(minors, 37);
    }

    #[test]
    fn final_label_supersedes_colliding_five_mile_label() {
        let ticks = distance_ticks(11.0);
        let labels: Vec<&str> = ticks
            .iter()
            .filter_map(|t| t.label.as_deref())
            .collect();
        // The 10-mile label is within 2.5 miles of the end and gives
        // way to the exact total.
        assert_eq!(labels, vec!["0 mi", "5 mi", "11 mi"]);
    }

    #[test]
    fn sky_is_day_at_both_ends_and_dark_midway() {
        let mut vp = crate::scroll::ViewportState::new(800.0, 600.0, 0.8, 3800.0, 300.0);
        assert_eq!(sky_color(&vp), Palette::SKY_DAY);

        vp.current_pixel_position = vp.max_scroll() / 2.0;
        assert_eq!(sky_color(&vp), Palette::SKY_NIGHT);

        vp.current_pixel_position = vp.max_scroll();
        assert_eq!(sky_color(&vp), Palette::SKY_DAY);
    }

    #[test]
    fn tracker_fraction_clamps_to_unit_range() {
        let mut vp = crate::scroll::ViewportState::new(800.0, 600.0, 0.8, 2000.0, 300.0);
        assert_eq!(tracker_fraction(&vp), 0.0);

        vp.current_pixel_position = 700.0;
        assert_eq!(tracker_fraction(&vp), 0.5);

        vp.current_pixel_position = 100_000.0;
        assert_eq!(tracker_fraction(&vp), 1.0);
    }
}
