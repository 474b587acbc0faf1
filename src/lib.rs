//! RelayView - scrollable elevation-profile visualization.
//!
//! Renders a multi-leg relay race route as a horizontally scrollable
//! elevation profile with difficulty coloring, distance and altitude
//! rulers, decorative clouds, and start/finish banners. The layout and
//! scroll math lives in the library; the binary wires it to eframe.

pub mod clouds;
pub mod config;
pub mod hud;
pub mod layout;
pub mod render;
pub mod route;
pub mod scene;
pub mod scroll;
pub mod theme;

// Re-export commonly used types
pub use layout::{layout_route, total_pixel_width, LegShape, Scale};
pub use route::{Route, RouteError, RouteStats};
pub use scene::Scene;
pub use scroll::{ScrollIntent, ViewportState};
