use crate::physics::clamp;

/// Immersed volume of an upright cylinder of radius `r` and height `h`
/// hanging below its top point at `top_y`, water surface at y = 0.
///
/// Flat, non-rotating stand-in for the clipped outline: used to cross-check
/// the polygon evaluator on bodies with straight sides.
pub fn cylinder_volume(top_y: f64, r: f64, h: f64) -> f64 {
    let depth = clamp(h - top_y, 0.0, h);
    std::f64::consts::PI * r * r * depth
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{submerged_area, water_polygon, Polygon};
    use nalgebra::Point2;

    #[test]
    fn full_volume() {
        let full = cylinder_volume(0.0, 1.0, 2.0);
        assert_eq!((full * 1e4).round() / 1e4, 6.2832);
        assert_eq!(cylinder_volume(-2.0, 1.0, 2.0), full);
        assert_eq!(cylinder_volume(-7.0, 1.0, 2.0), full);
    }

    #[test]
    fn dry_volume() {
        assert_eq!(cylinder_volume(5.0, 1.0, 2.0), 0.0);
        assert_eq!(cylinder_volume(2.0, 1.0, 2.0), 0.0);
        assert!(cylinder_volume(1.99, 1.0, 2.0) > 0.0);
    }

    #[test]
    fn partial_volume() {
        let v = cylinder_volume(1.3, 1.0, 2.0);
        assert!((v - std::f64::consts::PI * 0.7).abs() < 1e-12);
        assert_eq!((cylinder_volume(0.9, 1.0, 2.0) * 1e4).round() / 1e4, 3.4558);
    }

    #[test]
    fn matches_clipped_rectangle() {
        // Rectangle of width π·r² and height h has the same immersion law.
        let (r, h) = (1.0, 2.0);
        let width = std::f64::consts::PI * r * r;
        let water = water_polygon();
        for top in [-1.0, 0.0, 0.4, 1.3, 1.99, 2.0, 3.0] {
            let rect = Polygon::new(vec![
                Point2::new(0.0, top),
                Point2::new(width, top),
                Point2::new(width, top - h),
                Point2::new(0.0, top - h),
            ]);
            let clipped = submerged_area(&rect, &water);
            assert!(
                (clipped - cylinder_volume(top, r, h)).abs() < 1e-9,
                "top={top}: {clipped} vs {}",
                cylinder_volume(top, r, h)
            );
        }
    }
}
