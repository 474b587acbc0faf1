//! Integration tests for scroll clamping through the scene.

use rand::{rngs::SmallRng, SeedableRng};

use relayview::config::VizConfig;
use relayview::route::Route;
use relayview::scene::Scene;
use relayview::scroll::ScrollIntent;

fn bundled_scene() -> Scene {
    let route = Route::bundled();
    let mut rng = SmallRng::seed_from_u64(99);
    Scene::new(&route, &VizConfig::default(), (1280.0, 800.0), &mut rng)
}

#[test]
fn position_stays_in_range_over_arbitrary_sequences() {
    let mut scene = bundled_scene();
    let deltas = [
        350.0, -90.0, 10_000.0, -25.0, -10_000.0, 5.0, 640.0, -3.0, 99_999.0,
    ];

    for delta in deltas {
        scene.scroll(ScrollIntent { delta });
        let pos = scene.viewport.current_pixel_position;
        assert!(pos >= 0.0);
        assert!(pos <= scene.viewport.max_scroll());
    }
}

#[test]
fn unclamped_round_trip_restores_every_entity() {
    let mut scene = bundled_scene();
    scene.scroll(ScrollIntent { delta: 400.0 });

    let legs: Vec<f32> = scene.legs.iter().map(|l| l.x).collect();
    let clouds: Vec<f32> = scene.clouds.iter().map(|c| c.x).collect();
    let bar = scene.distance_bar.x;

    scene.scroll(ScrollIntent { delta: 130.0 });
    scene.scroll(ScrollIntent { delta: -130.0 });

    assert_eq!(legs, scene.legs.iter().map(|l| l.x).collect::<Vec<f32>>());
    assert_eq!(
        clouds,
        scene.clouds.iter().map(|c| c.x).collect::<Vec<f32>>()
    );
    assert_eq!(bar, scene.distance_bar.x);
}

#[test]
fn overshooting_wheel_event_lands_on_the_boundary() {
    let mut scene = bundled_scene();
    let max = scene.viewport.max_scroll();

    // Walk near the right edge, then request far past it. The clamp
    // moves content by exactly the remaining distance.
    scene.scroll(ScrollIntent { delta: max - 30.0 });
    scene.scroll(ScrollIntent { delta: 5_000.0 });
    assert_eq!(scene.viewport.current_pixel_position, max);

    // The last leg's right edge now sits one mount buffer from the
    // viewport's right edge.
    let last = scene.legs.last().unwrap();
    assert!(
        (last.x + last.width - (scene.viewport.width - scene.viewport.mount_buffer)).abs() < 0.01
    );
}

#[test]
fn no_entity_moves_once_clamped() {
    let mut scene = bundled_scene();
    let at_start: Vec<f32> = scene.legs.iter().map(|l| l.x).collect();

    scene.scroll(ScrollIntent { delta: -500.0 });

    assert_eq!(scene.viewport.current_pixel_position, 0.0);
    assert_eq!(
        at_start,
        scene.legs.iter().map(|l| l.x).collect::<Vec<f32>>()
    );
}

#[test]
fn resize_keeps_the_offset_valid() {
    let mut scene = bundled_scene();
    scene.scroll(ScrollIntent { delta: 1_000_000.0 });
    let old_max = scene.viewport.max_scroll();

    scene.handle_resize(1280.0 + 600.0, 900.0);

    assert!(scene.viewport.max_scroll() < old_max);
    assert_eq!(
        scene.viewport.current_pixel_position,
        scene.viewport.max_scroll()
    );
    assert_eq!(scene.viewport.ground_y(), 900.0 * 0.78);
}

#[test]
fn opposing_keys_cancel_out() {
    let mut scene = bundled_scene();
    let intent = ScrollIntent::default().with_keys(true, true, 10.0);
    assert!(intent.is_none());

    scene.scroll(intent);
    assert_eq!(scene.viewport.current_pixel_position, 0.0);
}
