//! Flotation body outline and its immersion in the water half-plane.
//!
//! Each flotation body's cross-section is a closed curve assembled from a
//! short table of circular arcs ([`arc::FLOTATION_BODY`]). The right body uses
//! the table as-is, the left body is its mirror image in x. The submerged
//! area (overlap with [`clip::water_polygon`]) stands in for the immersed
//! volume per unit length.

pub mod arc;
pub mod clip;
pub mod cylinder;
pub mod polygon;

pub use arc::{build_polygon, build_polygon_into, ArcSegment, SweepDirection, FLOTATION_BODY};
pub use clip::{submerged_area, water_polygon, SubmergedAreaEvaluator};
pub use cylinder::cylinder_volume;
pub use polygon::Polygon;
