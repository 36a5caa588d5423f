use nalgebra::Point2;

use super::polygon::{signed_area, Polygon};

/// Half width of the water rectangle, m.
pub const WATER_HALF_WIDTH: f64 = 1_000.0;

/// Depth of the water rectangle below the waterline, m.
pub const WATER_DEPTH: f64 = 1_000.0;

/// Water half-plane y <= 0, truncated to a rectangle large enough to contain
/// any reachable overlap with a flotation body.
pub fn water_polygon() -> Polygon {
    Polygon::new(vec![
        Point2::new(-WATER_HALF_WIDTH, 0.0),
        Point2::new(WATER_HALF_WIDTH, 0.0),
        Point2::new(WATER_HALF_WIDTH, -WATER_DEPTH),
        Point2::new(-WATER_HALF_WIDTH, -WATER_DEPTH),
    ])
}

/// Area of `body` inside the convex `water` polygon. The body must be simple.
pub fn submerged_area(body: &Polygon, water: &Polygon) -> f64 {
    let mut evaluator = SubmergedAreaEvaluator::with_water(water.clone());
    evaluator.area(body)
}

// ---------------------------------------------------------------------------
// Sutherland–Hodgman clipping against a convex window
// ---------------------------------------------------------------------------

/// Clips body outlines against a fixed water polygon, reusing its buffers
/// between calls.
#[derive(Debug, Clone)]
pub struct SubmergedAreaEvaluator {
    water: Polygon,
    orientation: f64,
    input: Vec<Point2<f64>>,
    output: Vec<Point2<f64>>,
}

impl Default for SubmergedAreaEvaluator {
    fn default() -> Self {
        Self::with_water(water_polygon())
    }
}

impl SubmergedAreaEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// `water` must be convex; either winding is accepted.
    pub fn with_water(water: Polygon) -> Self {
        let orientation = if water.signed_area() >= 0.0 { 1.0 } else { -1.0 };
        Self { water, orientation, input: Vec::new(), output: Vec::new() }
    }

    pub fn water(&self) -> &Polygon {
        &self.water
    }

    /// Overlap area of `body` with the water polygon.
    pub fn area(&mut self, body: &Polygon) -> f64 {
        self.clip(body);
        signed_area(&self.output).abs()
    }

    /// Clipped outline left by the last call to [`Self::area`].
    pub fn clipped(&self) -> &[Point2<f64>] {
        &self.output
    }

    fn clip(&mut self, body: &Polygon) {
        self.output.clear();
        self.output.extend_from_slice(&body.vertices);

        let orientation = self.orientation;
        let window = &self.water.vertices;
        for e in 0..window.len() {
            if self.output.is_empty() {
                break;
            }
            let c0 = window[e];
            let c1 = window[(e + 1) % window.len()];
            std::mem::swap(&mut self.input, &mut self.output);
            self.output.clear();

            let mut prev = self.input[self.input.len() - 1];
            let mut prev_in = inside(c0, c1, prev, orientation);
            for &cur in &self.input {
                let cur_in = inside(c0, c1, cur, orientation);
                if cur_in {
                    if !prev_in {
                        self.output.push(intersect(prev, cur, c0, c1));
                    }
                    self.output.push(cur);
                } else if prev_in {
                    self.output.push(intersect(prev, cur, c0, c1));
                }
                prev = cur;
                prev_in = cur_in;
            }
        }
    }
}

/// `p` lies on the interior side of the window edge c0→c1 (or on it).
fn inside(c0: Point2<f64>, c1: Point2<f64>, p: Point2<f64>, orientation: f64) -> bool {
    let edge = c1 - c0;
    let rel = p - c0;
    (edge.x * rel.y - edge.y * rel.x) * orientation >= 0.0
}

/// Point where segment s→e meets the line through c0→c1.
fn intersect(s: Point2<f64>, e: Point2<f64>, c0: Point2<f64>, c1: Point2<f64>) -> Point2<f64> {
    let edge = c1 - c0;
    let seg = e - s;
    let denom = edge.x * seg.y - edge.y * seg.x;
    if denom == 0.0 {
        return e;
    }
    let rel = c0 - s;
    let t = (edge.x * rel.y - edge.y * rel.x) / denom;
    s + seg * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::arc::{
        build_polygon, FLOTATION_BODY, FLOTATION_BODY_CROWN, FLOTATION_BODY_DEPTH,
    };
    use nalgebra::Vector2;
    use proptest::prelude::*;

    fn body_at(y: f64) -> Polygon {
        build_polygon(&FLOTATION_BODY, Vector2::new(3.0, y), false, 100)
    }

    fn square(x0: f64, y0: f64, side: f64) -> Polygon {
        Polygon::new(vec![
            Point2::new(x0, y0),
            Point2::new(x0 + side, y0),
            Point2::new(x0 + side, y0 + side),
            Point2::new(x0, y0 + side),
        ])
    }

    #[test]
    fn square_straddling_waterline() {
        let water = water_polygon();
        let sq = square(-1.0, -0.25, 1.0);
        assert!((submerged_area(&sq, &water) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn disjoint_body_is_dry() {
        let dry = body_at(FLOTATION_BODY_DEPTH + 0.5);
        assert_eq!(SubmergedAreaEvaluator::new().area(&dry), 0.0);
        let touching = body_at(FLOTATION_BODY_DEPTH);
        assert!(SubmergedAreaEvaluator::new().area(&touching) < 1e-9);
    }

    #[test]
    fn sunk_body_is_fully_counted() {
        let sunk = body_at(-FLOTATION_BODY_CROWN - 1.0);
        let area = SubmergedAreaEvaluator::new().area(&sunk);
        assert!((area - sunk.area()).abs() < 1e-9);
    }

    #[test]
    fn partial_immersion_is_strictly_between() {
        let body = body_at(1.5);
        let area = SubmergedAreaEvaluator::new().area(&body);
        assert!(area > 0.0 && area < body.area());
        // 1.5 m of the flat-sided lower half is wet: 2 m beam less two fillets
        let fillets = 2.0 * 0.25 * (1.0 - std::f64::consts::FRAC_PI_4);
        assert!((area - (2.0 * 1.5 - fillets)).abs() < 1e-3);
    }

    #[test]
    fn continuous_across_the_boundaries() {
        let mut eval = SubmergedAreaEvaluator::new();
        for edge in [FLOTATION_BODY_DEPTH, -FLOTATION_BODY_CROWN] {
            let below = eval.area(&body_at(edge - 1e-7));
            let above = eval.area(&body_at(edge + 1e-7));
            assert!((below - above).abs() < 1e-5, "jump at {edge}: {below} vs {above}");
        }
    }

    #[test]
    fn winding_of_water_does_not_matter() {
        let mut ccw = water_polygon();
        ccw.vertices.reverse();
        let body = body_at(0.7);
        let mut reversed = SubmergedAreaEvaluator::with_water(ccw.clone());
        assert_eq!(reversed.water(), &ccw);
        let a = reversed.area(&body);
        let b = SubmergedAreaEvaluator::new().area(&body);
        assert!((a - b).abs() < 1e-12);
    }

    #[test]
    fn clipped_outline_stays_below_waterline() {
        let mut eval = SubmergedAreaEvaluator::new();
        eval.area(&body_at(0.7));
        assert!(eval.clipped().iter().all(|v| v.y <= 1e-12));
    }

    proptest! {
        #[test]
        fn deeper_is_never_drier(y in -1.0f64..4.0, dy in 0.0f64..1.0) {
            let mut eval = SubmergedAreaEvaluator::new();
            let shallow = eval.area(&body_at(y));
            let deep = eval.area(&body_at(y - dy));
            prop_assert!(deep + 1e-9 >= shallow);
        }
    }
}
