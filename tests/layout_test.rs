//! Integration tests for the layout engine.

use relayview::layout::{layout_route, total_pixel_width, Scale};
use relayview::route::{Route, SummaryRow};

fn scale(width_mult: f32, mount_buffer: f32) -> Scale {
    Scale {
        width_mult,
        height_mult: 0.1,
        mount_buffer,
    }
}

#[test]
fn two_leg_reference_layout() {
    let route = Route::from_summary(
        "ref",
        &[
            SummaryRow {
                number: 1,
                dist: 2.0,
                climb_total: 400.0,
                difficulty: 1,
            },
            SummaryRow {
                number: 2,
                dist: 1.5,
                climb_total: 800.0,
                difficulty: 2,
            },
        ],
    )
    .unwrap();

    let scale = scale(200.0, 300.0);
    let legs = layout_route(&route, scale);

    assert_eq!(legs[0].width, 400.0);
    assert_eq!(legs[1].width, 300.0);
    assert_eq!(legs[1].x, 300.0 + 400.0);
    assert_eq!(total_pixel_width(&legs, scale), 300.0 * 2.0 + 700.0);
}

#[test]
fn total_width_is_exact_for_the_bundled_route() {
    let route = Route::bundled();
    let scale = Scale::default();
    let legs = layout_route(&route, scale);

    let leg_sum: f32 = legs.iter().map(|l| l.width).sum();
    assert_eq!(
        total_pixel_width(&legs, scale),
        leg_sum + 2.0 * scale.mount_buffer
    );

    // Contiguity: every leg starts exactly where the previous ends.
    for pair in legs.windows(2) {
        assert_eq!(pair[1].x, pair[0].x + pair[0].width);
    }
}

#[test]
fn profiles_scale_elevation_to_pixels() {
    let route = Route::bundled();
    let legs = layout_route(&route, Scale::default());

    for (leg, source) in legs.iter().zip(&route.legs) {
        assert_eq!(leg.profile.len(), source.portions.len() + 1);
        assert_eq!(leg.profile[0].1, source.start_elev as f32 * 0.1);

        let highest = source
            .portions
            .iter()
            .map(|p| p.end_elev)
            .fold(source.start_elev, f64::max);
        assert_eq!(leg.peak_height, highest as f32 * 0.1);
    }
}

#[test]
fn offscreen_legs_are_culled() {
    let route = Route::bundled();
    let mut legs = layout_route(&route, Scale::default());

    assert!(legs[0].visible(800.0));

    legs[0].x = -legs[0].width - 1.0;
    assert!(!legs[0].visible(800.0));

    legs[0].x = 801.0;
    assert!(!legs[0].visible(800.0));
}
