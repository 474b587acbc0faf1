//! Immediate-mode renderer: turns the scene into egui paint calls.
//!
//! Draw order gives the two-layer depth illusion: sky, background
//! clouds, route polygons and flags, foreground clouds, ground,
//! banners, distance bar, then the fixed HUD overlays.

use egui::{pos2, vec2, Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke, StrokeKind};

use crate::clouds::{Cloud, Depth};
use crate::hud;
use crate::scene::{Banner, Scene};
use crate::theme::Palette;

const TITLE_Y: f32 = 24.0;
const TITLE_SIZE: f32 = 32.0;
const SUMMARY_SIZE: f32 = 13.0;
const FLAG_POLE_PX: f32 = 26.0;
const BANNER_POLE_PX: f32 = 90.0;
const BANNER_CLOTH_W: f32 = 70.0;
const BANNER_CLOTH_H: f32 = 22.0;
const MAJOR_TICK_PX: f32 = 10.0;
const MINOR_TICK_PX: f32 = 5.0;
const GAUGE_WIDTH: f32 = 160.0;
const GAUGE_HEIGHT: f32 = 14.0;
const TRACKER_WIDTH: f32 = 220.0;
const TRACKER_HEIGHT: f32 = 10.0;
const ALTITUDE_RULER_X: f32 = 46.0;

/// Draw one frame of the scene.
pub fn draw(painter: &Painter, scene: &Scene) {
    let vp = &scene.viewport;
    let ground_y = vp.ground_y();

    draw_sky(painter, scene);
    draw_clouds(painter, scene, Depth::Background);
    draw_legs(painter, scene, ground_y);
    draw_clouds(painter, scene, Depth::Foreground);
    draw_ground(painter, scene, ground_y);
    for banner in &scene.banners {
        draw_banner(painter, banner, vp.width, ground_y);
    }
    draw_distance_bar(painter, scene, ground_y);
    draw_title(painter, scene);
    draw_gauge(painter, scene);
    draw_altitude_ruler(painter, scene, ground_y);
    draw_tracker(painter, scene);
}

fn draw_sky(painter: &Painter, scene: &Scene) {
    let vp = &scene.viewport;
    let rect = Rect::from_min_size(Pos2::ZERO, vec2(vp.width, vp.height));
    painter.rect_filled(rect, 0.0, hud::sky_color(vp));
}

fn draw_clouds(painter: &Painter, scene: &Scene, depth: Depth) {
    for cloud in scene
        .clouds
        .iter()
        .filter(|c| c.depth == depth && c.visible(scene.viewport.width))
    {
        draw_cloud(painter, cloud);
    }
}

fn draw_cloud(painter: &Painter, cloud: &Cloud) {
    let color = match cloud.depth {
        Depth::Background => Palette::CLOUD_FAR,
        Depth::Foreground => Palette::CLOUD_NEAR,
    };
    let body = Rect::from_min_size(pos2(cloud.x, cloud.y), vec2(cloud.width, cloud.height));
    painter.rect_filled(body, cloud.height / 2.0, color);
    // A second lobe on top breaks up the capsule silhouette.
    painter.circle_filled(
        pos2(cloud.x + cloud.width * 0.4, cloud.y),
        cloud.height * 0.55,
        color,
    );
}

fn draw_legs(painter: &Painter, scene: &Scene, ground_y: f32) {
    for leg in scene
        .legs
        .iter()
        .filter(|l| l.visible(scene.viewport.width))
    {
        let fill = hud::difficulty_color(leg.difficulty, scene.stats.max_difficulty);
        for quad in leg.quads(ground_y) {
            painter.add(Shape::convex_polygon(quad.to_vec(), fill, Stroke::NONE));
        }
        draw_leg_flag(painter, leg.peak(), leg.number, ground_y);
    }
}

fn draw_leg_flag(painter: &Painter, peak: (f32, f32), number: u32, ground_y: f32) {
    let (peak_x, peak_h) = peak;
    let base = pos2(peak_x, ground_y - peak_h);
    let top = pos2(peak_x, base.y - FLAG_POLE_PX);

    painter.line_segment([base, top], Stroke::new(2.0, Palette::INK));
    painter.add(Shape::convex_polygon(
        vec![top, top + vec2(18.0, 5.0), top + vec2(0.0, 10.0)],
        Palette::BANNER,
        Stroke::NONE,
    ));
    painter.text(
        top + vec2(4.0, -2.0),
        Align2::LEFT_BOTTOM,
        hud::leg_flag_label(number),
        FontId::proportional(12.0),
        Palette::INK,
    );
}

fn draw_ground(painter: &Painter, scene: &Scene, ground_y: f32) {
    let vp = &scene.viewport;
    let rect = Rect::from_min_max(pos2(0.0, ground_y), pos2(vp.width, vp.height));
    painter.rect_filled(rect, 0.0, Palette::GROUND);
}

fn draw_banner(painter: &Painter, banner: &Banner, viewport_width: f32, ground_y: f32) {
    // Skip when the cloth is fully offscreen.
    let half_cloth = BANNER_CLOTH_W / 2.0;
    if banner.x + half_cloth < 0.0 || banner.x - half_cloth > viewport_width {
        return;
    }

    let base = pos2(banner.x, ground_y);
    let top = pos2(banner.x, ground_y - BANNER_POLE_PX);
    painter.line_segment([base, top], Stroke::new(3.0, Palette::INK));

    let cloth = Rect::from_center_size(
        top + vec2(0.0, BANNER_CLOTH_H / 2.0),
        vec2(BANNER_CLOTH_W, BANNER_CLOTH_H),
    );
    painter.rect_filled(cloth, 3.0, Palette::BANNER);
    painter.text(
        cloth.center(),
        Align2::CENTER_CENTER,
        banner.kind.label(),
        FontId::proportional(12.0),
        Color32::WHITE,
    );
}

fn draw_distance_bar(painter: &Painter, scene: &Scene, ground_y: f32) {
    let bar = &scene.distance_bar;
    if bar.x + bar.length < 0.0 || bar.x > scene.viewport.width {
        return;
    }

    painter.line_segment(
        [pos2(bar.x, ground_y), pos2(bar.x + bar.length, ground_y)],
        Stroke::new(2.0, Palette::INK),
    );

    for tick in hud::distance_ticks(scene.stats.total_distance) {
        let tx = bar.x + tick.mile as f32 * scene.scale.width_mult;
        if tx < 0.0 || tx > scene.viewport.width {
            continue;
        }
        let len = if tick.major {
            MAJOR_TICK_PX
        } else {
            MINOR_TICK_PX
        };
        painter.line_segment(
            [pos2(tx, ground_y), pos2(tx, ground_y + len)],
            Stroke::new(1.0, Palette::INK),
        );
        if let Some(label) = &tick.label {
            painter.text(
                pos2(tx, ground_y + MAJOR_TICK_PX + 4.0),
                Align2::CENTER_TOP,
                label,
                FontId::proportional(11.0),
                Color32::WHITE,
            );
        }
    }
}

fn draw_title(painter: &Painter, scene: &Scene) {
    let center_x = scene.viewport.width / 2.0;
    painter.text(
        pos2(center_x, TITLE_Y),
        Align2::CENTER_TOP,
        &scene.route_name,
        FontId::proportional(TITLE_SIZE),
        Palette::INK,
    );
    painter.text(
        pos2(center_x, TITLE_Y + TITLE_SIZE + 8.0),
        Align2::CENTER_TOP,
        hud::route_summary(&scene.stats),
        FontId::proportional(SUMMARY_SIZE),
        Palette::INK,
    );
}

fn draw_gauge(painter: &Painter, scene: &Scene) {
    let segments = hud::gauge_segments(scene.stats.max_difficulty);
    let origin = pos2(scene.viewport.width - GAUGE_WIDTH - 20.0, 20.0);

    let backdrop = Rect::from_min_size(
        origin - vec2(4.0, 4.0),
        vec2(GAUGE_WIDTH + 8.0, GAUGE_HEIGHT + 8.0),
    );
    painter.rect_filled(backdrop, 3.0, Palette::HUD_BG);

    let segment_width = GAUGE_WIDTH / segments.len() as f32;
    for (i, color) in segments.iter().enumerate() {
        let rect = Rect::from_min_size(
            origin + vec2(i as f32 * segment_width, 0.0),
            vec2(segment_width, GAUGE_HEIGHT),
        );
        painter.rect_filled(rect, 0.0, *color);
    }

    painter.text(
        origin + vec2(GAUGE_WIDTH / 2.0, GAUGE_HEIGHT + 8.0),
        Align2::CENTER_TOP,
        "difficulty",
        FontId::proportional(10.0),
        Palette::INK,
    );
}

fn draw_altitude_ruler(painter: &Painter, scene: &Scene, ground_y: f32) {
    let ruler = hud::AltitudeRuler::new(scene.stats.max_elevation);
    let alpha = ruler.alpha(scene.viewport.current_pixel_position);
    let ink = Palette::INK.gamma_multiply(alpha);

    let top_y = ground_y - ruler.display_max_ft as f32 * scene.scale.height_mult;
    painter.line_segment(
        [pos2(ALTITUDE_RULER_X, ground_y), pos2(ALTITUDE_RULER_X, top_y)],
        Stroke::new(2.0, ink),
    );

    for major in &ruler.majors {
        let y = ground_y - *major as f32 * scene.scale.height_mult;
        painter.line_segment(
            [
                pos2(ALTITUDE_RULER_X, y),
                pos2(ALTITUDE_RULER_X + MAJOR_TICK_PX, y),
            ],
            Stroke::new(1.5, ink),
        );
        painter.text(
            pos2(ALTITUDE_RULER_X + MAJOR_TICK_PX + 4.0, y),
            Align2::LEFT_CENTER,
            format!("{} ft", *major as u32),
            FontId::proportional(10.0),
            ink,
        );
    }
    for minor in &ruler.minors {
        let y = ground_y - *minor as f32 * scene.scale.height_mult;
        painter.line_segment(
            [
                pos2(ALTITUDE_RULER_X, y),
                pos2(ALTITUDE_RULER_X + MINOR_TICK_PX, y),
            ],
            Stroke::new(1.0, ink),
        );
    }
}

fn draw_tracker(painter: &Painter, scene: &Scene) {
    let vp = &scene.viewport;
    let origin = pos2((vp.width - TRACKER_WIDTH) / 2.0, vp.height - 24.0);
    let outline = Rect::from_min_size(origin, vec2(TRACKER_WIDTH, TRACKER_HEIGHT));

    painter.rect_filled(outline, 2.0, Palette::HUD_BG);
    let fraction = hud::tracker_fraction(vp);
    if fraction > 0.0 {
        let fill = Rect::from_min_size(origin, vec2(TRACKER_WIDTH * fraction, TRACKER_HEIGHT));
        painter.rect_filled(fill, 2.0, Palette::TRACKER_FILL);
    }
    painter.rect_stroke(
        outline,
        2.0,
        Stroke::new(1.0, Palette::INK),
        StrokeKind::Middle,
    );
}
