//! Route model: legs, elevation portions, and aggregate statistics.
//!
//! The route document is loaded once at startup and never mutated.
//! All invariants are checked at load time so that downstream layout
//! code can assume a well-formed route.

use serde::Deserialize;
use std::path::Path;

/// Tolerance used when comparing cumulative portion distances against
/// the leg's total distance.
const DIST_EPSILON: f64 = 1e-6;

/// One elevation sample interval within a leg's profile.
///
/// `end_dist` is cumulative within the leg, in miles. The start
/// elevation of a portion is the previous portion's `end_elev` (the
/// first portion starts at the leg's `start_elev`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Portion {
    /// Cumulative distance from the leg start, in miles
    pub end_dist: f64,
    /// Elevation at the end of this portion, in feet
    pub end_elev: f64,
}

/// One segment of the relay route.
#[derive(Debug, Clone, PartialEq)]
pub struct Leg {
    /// One-based leg number from the source document
    pub number: u32,
    /// Total leg distance in miles
    pub dist: f64,
    /// Total climb over the leg in feet
    pub climb_total: f64,
    /// Difficulty score (small positive integer, unitless)
    pub difficulty: u32,
    /// Elevation at the leg start, in feet
    pub start_elev: f64,
    /// Ordered elevation profile; cumulative distances strictly increase
    pub portions: Vec<Portion>,
}

/// A complete relay route.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Display name
    pub name: String,
    /// Ordered list of legs
    pub legs: Vec<Leg>,
}

/// Aggregate values derived from a route, computed once after load.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteStats {
    /// Maximum difficulty score over all legs
    pub max_difficulty: u32,
    /// Maximum elevation over all portions, in feet
    pub max_elevation: f64,
    /// Sum of leg distances, in miles
    pub total_distance: f64,
}

/// One row of the flat tabular route format (no per-portion detail).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryRow {
    /// One-based leg number
    pub number: u32,
    /// Leg distance in miles
    pub dist: f64,
    /// Total climb in feet
    pub climb_total: f64,
    /// Difficulty score
    pub difficulty: u32,
}

/// Route loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("route has no legs")]
    Empty,

    #[error("leg {leg} has no portions")]
    NoPortions { leg: u32 },

    #[error("leg {leg} portion distances are not strictly increasing")]
    NonMonotonic { leg: u32 },

    #[error("leg {leg} portions do not span the leg distance")]
    DistanceMismatch { leg: u32 },

    #[error("leg {leg} contains a negative distance or elevation")]
    Negative { leg: u32 },

    #[error("every leg has difficulty zero")]
    FlatDifficulty,

    #[error("failed to read route file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse route document: {0}")]
    Parse(#[from] serde_json::Error),
}

// Wire format of the structured route document.

#[derive(Debug, Deserialize)]
struct RawRoute {
    #[serde(default)]
    name: String,
    leg_list: Vec<RawLeg>,
}

#[derive(Debug, Deserialize)]
struct RawLeg {
    leg_num: u32,
    dist: f64,
    climb_total: f64,
    difficulty: u32,
    portions: Vec<RawPortion>,
}

#[derive(Debug, Deserialize)]
struct RawPortion {
    /// Only present on the first portion of a leg
    #[serde(default)]
    start_elev: Option<f64>,
    end_dist: f64,
    end_elev: f64,
}

impl Route {
    /// Parse and validate a structured route document.
    pub fn from_json(document: &str) -> Result<Self, RouteError> {
        let raw: RawRoute = serde_json::from_str(document)?;

        let legs = raw
            .leg_list
            .into_iter()
            .map(|leg| {
                let start_elev = leg
                    .portions
                    .first()
                    .and_then(|p| p.start_elev)
                    .unwrap_or(0.0);
                Leg {
                    number: leg.leg_num,
                    dist: leg.dist,
                    climb_total: leg.climb_total,
                    difficulty: leg.difficulty,
                    start_elev,
                    portions: leg
                        .portions
                        .into_iter()
                        .map(|p| Portion {
                            end_dist: p.end_dist,
                            end_elev: p.end_elev,
                        })
                        .collect(),
                }
            })
            .collect();

        let route = Route {
            name: raw.name,
            legs,
        };
        route.validate()?;
        Ok(route)
    }

    /// Read and parse a route document from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RouteError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// The route document bundled with the application.
    pub fn bundled() -> Self {
        // The bundled document is validated by tests; a parse failure
        // here is a packaging defect.
        Self::from_json(include_str!("../assets/legs.json"))
            .expect("bundled route document is invalid")
    }

    /// Adapt the flat tabular format (one row per leg, no elevation
    /// detail) by synthesizing a triangular profile per leg: sea level
    /// at both ends, a single peak of height `climb_total` at the
    /// midpoint.
    pub fn from_summary(name: &str, rows: &[SummaryRow]) -> Result<Self, RouteError> {
        let legs = rows
            .iter()
            .map(|row| Leg {
                number: row.number,
                dist: row.dist,
                climb_total: row.climb_total,
                difficulty: row.difficulty,
                start_elev: 0.0,
                portions: vec![
                    Portion {
                        end_dist: row.dist / 2.0,
                        end_elev: row.climb_total,
                    },
                    Portion {
                        end_dist: row.dist,
                        end_elev: 0.0,
                    },
                ],
            })
            .collect();

        let route = Route {
            name: name.to_string(),
            legs,
        };
        route.validate()?;
        Ok(route)
    }

    /// Check the route invariants, failing fast on the first violation.
    pub fn validate(&self) -> Result<(), RouteError> {
        if self.legs.is_empty() {
            return Err(RouteError::Empty);
        }

        for leg in &self.legs {
            if leg.portions.is_empty() {
                return Err(RouteError::NoPortions { leg: leg.number });
            }
            if leg.dist < 0.0 || leg.start_elev < 0.0 || leg.climb_total < 0.0 {
                return Err(RouteError::Negative { leg: leg.number });
            }

            let mut prev_dist = 0.0;
            for portion in &leg.portions {
                if portion.end_elev < 0.0 {
                    return Err(RouteError::Negative { leg: leg.number });
                }
                if portion.end_dist <= prev_dist {
                    return Err(RouteError::NonMonotonic { leg: leg.number });
                }
                prev_dist = portion.end_dist;
            }

            if (prev_dist - leg.dist).abs() > DIST_EPSILON {
                return Err(RouteError::DistanceMismatch { leg: leg.number });
            }
        }

        if self.legs.iter().all(|leg| leg.difficulty == 0) {
            return Err(RouteError::FlatDifficulty);
        }

        Ok(())
    }

    /// Compute the aggregate statistics for this route.
    pub fn stats(&self) -> RouteStats {
        let max_difficulty = self.legs.iter().map(|l| l.difficulty).max().unwrap_or(0);
        let max_elevation = self
            .legs
            .iter()
            .flat_map(|l| {
                std::iter::once(l.start_elev).chain(l.portions.iter().map(|p| p.end_elev))
            })
            .fold(0.0, f64::max);
        let total_distance = self.legs.iter().map(|l| l.dist).sum();

        RouteStats {
            max_difficulty,
            max_elevation,
            total_distance,
        }
    }
}
