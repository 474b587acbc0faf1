//! Decorative clouds, placed once at scene build and scrolled with the
//! content.

use rand::Rng;

use crate::config::ScenerySettings;

/// Draw layer for a decoration, assigned at creation. Background
/// clouds render behind the route polygons, foreground clouds in
/// front, giving a two-layer depth illusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    Background,
    Foreground,
}

/// One decorative cloud. Purely visual, no relation to route data.
#[derive(Debug, Clone, PartialEq)]
pub struct Cloud {
    /// Current screen x (shifted on scroll)
    pub x: f32,
    /// Screen y, fixed at spawn
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub depth: Depth,
}

impl Cloud {
    /// Whether any part of the cloud is inside the viewport.
    pub fn visible(&self, viewport_width: f32) -> bool {
        self.x < viewport_width && self.x + self.width > 0.0
    }
}

/// Place clouds across the full content width with random gaps inside
/// the configured spacing range and random vertical placement inside
/// the configured band. Depth alternates per spawn.
pub fn spawn_clouds(
    rng: &mut impl Rng,
    total_width: f32,
    scenery: &ScenerySettings,
) -> Vec<Cloud> {
    let mut clouds = Vec::new();
    let mut x = 0.0;
    let mut index = 0usize;

    while x < total_width {
        let y = if scenery.cloud_band_max > scenery.cloud_band_min {
            rng.gen_range(scenery.cloud_band_min..scenery.cloud_band_max).round()
        } else {
            scenery.cloud_band_min
        };

        clouds.push(Cloud {
            x,
            y,
            width: scenery.cloud_width,
            height: scenery.cloud_height,
            depth: if index % 2 == 0 {
                Depth::Background
            } else {
                Depth::Foreground
            },
        });

        // Whole-pixel gaps keep entity positions exactly reversible
        // under symmetric scroll deltas.
        let gap = if scenery.cloud_spacing_max > scenery.cloud_spacing_min {
            rng.gen_range(scenery.cloud_spacing_min..scenery.cloud_spacing_max).round()
        } else {
            scenery.cloud_spacing_min
        };
        // The walk must advance even if the settings degenerate to a
        // zero or negative step.
        x += (scenery.cloud_width + gap).max(1.0);
        index += 1;
    }

    clouds
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn clouds_span_content_and_respect_spacing() {
        let scenery = ScenerySettings::default();
        let mut rng = SmallRng::seed_from_u64(7);
        let clouds = spawn_clouds(&mut rng, 5000.0, &scenery);

        assert!(!clouds.is_empty());
        for pair in clouds.windows(2) {
            let gap = pair[1].x - (pair[0].x + pair[0].width);
            assert!(gap >= scenery.cloud_spacing_min);
            assert!(gap <= scenery.cloud_spacing_max);
        }
        for cloud in &clouds {
            assert!(cloud.y >= scenery.cloud_band_min);
            assert!(cloud.y <= scenery.cloud_band_max);
        }
        // Coverage reaches the far end of the content.
        let last = clouds.last().unwrap();
        assert!(last.x + last.width + scenery.cloud_spacing_max >= 5000.0);
    }

    #[test]
    fn degenerate_spacing_still_terminates() {
        let scenery = ScenerySettings {
            cloud_width: 0.0,
            cloud_spacing_min: 0.0,
            cloud_spacing_max: 0.0,
            ..ScenerySettings::default()
        };
        let mut rng = SmallRng::seed_from_u64(3);
        let clouds = spawn_clouds(&mut rng, 1000.0, &scenery);

        // One cloud per pixel of minimum advance, no more.
        assert_eq!(clouds.len(), 1000);
    }

    #[test]
    fn depth_alternates_per_spawn() {
        let mut rng = SmallRng::seed_from_u64(1);
        let clouds = spawn_clouds(&mut rng, 3000.0, &ScenerySettings::default());

        for (i, cloud) in clouds.iter().enumerate() {
            let expected = if i % 2 == 0 {
                Depth::Background
            } else {
                Depth::Foreground
            };
            assert_eq!(cloud.depth, expected);
        }
    }
}
