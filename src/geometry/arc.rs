use nalgebra::{Point2, Vector2};

use super::polygon::Polygon;

// ---------------------------------------------------------------------------
// Arc segments
// ---------------------------------------------------------------------------

/// Sense in which an arc is swept from its start orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepDirection {
    Counterclockwise,
    Clockwise,
}

impl SweepDirection {
    pub fn sign(self) -> f64 {
        match self {
            SweepDirection::Counterclockwise => 1.0,
            SweepDirection::Clockwise => -1.0,
        }
    }
}

/// One circular piece of a flotation body outline, in the body's local frame
/// (origin at the attachment point).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSegment {
    pub name: &'static str,
    pub sweep: f64,         // rad, included angle
    pub radius: f64,        // m
    pub center_x: f64,      // m
    pub center_y: f64,      // m
    pub start: f64,         // rad, orientation of the first sample
    pub direction: SweepDirection,
}

impl ArcSegment {
    pub fn center(&self) -> Point2<f64> {
        Point2::new(self.center_x, self.center_y)
    }

    /// Angle of sample `idx` out of `count`, evenly spaced with both ends included.
    fn angle(&self, idx: usize, count: usize) -> f64 {
        let end = self.start + self.direction.sign() * self.sweep;
        if count < 2 {
            return self.start;
        }
        if idx == count - 1 {
            return end;
        }
        self.start + (end - self.start) * (idx as f64 / (count - 1) as f64)
    }
}

/// Segment whose samples are emitted last-to-first so the joined outline
/// keeps a single winding.
const REVERSED_SEGMENT: &str = "DE";

/// Half of the crown's included angle: asin(5/13), from the 5-12-13 triangle
/// between the crown centre and its end points.
const CROWN_HALF_SWEEP: f64 = 0.394_791_119_699_761_55;

/// Deepest local y of the outline (bottom of the lower corners).
pub const FLOTATION_BODY_DEPTH: f64 = 3.0;

/// Highest local y of the outline (top of the crown).
pub const FLOTATION_BODY_CROWN: f64 = 0.1;

/// Right-hand flotation body: a 2 m wide chamber with rounded corners of
/// 0.5 m and a 0.1 m crown, hanging 3 m below its attachment point. The
/// flanks and the keel are the straight closures between consecutive arcs.
pub const FLOTATION_BODY: [ArcSegment; 5] = [
    ArcSegment {
        name: "AB",
        sweep: std::f64::consts::FRAC_PI_2,
        radius: 0.5,
        center_x: 0.5,
        center_y: -0.5,
        start: std::f64::consts::FRAC_PI_2,
        direction: SweepDirection::Clockwise,
    },
    ArcSegment {
        name: "BC",
        sweep: std::f64::consts::FRAC_PI_2,
        radius: 0.5,
        center_x: 0.5,
        center_y: -2.5,
        start: 0.0,
        direction: SweepDirection::Clockwise,
    },
    ArcSegment {
        name: "CD",
        sweep: std::f64::consts::FRAC_PI_2,
        radius: 0.5,
        center_x: -0.5,
        center_y: -2.5,
        start: -std::f64::consts::FRAC_PI_2,
        direction: SweepDirection::Clockwise,
    },
    ArcSegment {
        name: "DE",
        sweep: std::f64::consts::FRAC_PI_2,
        radius: 0.5,
        center_x: -0.5,
        center_y: -0.5,
        start: std::f64::consts::FRAC_PI_2,
        direction: SweepDirection::Counterclockwise,
    },
    ArcSegment {
        name: "EA",
        sweep: 2.0 * CROWN_HALF_SWEEP,
        radius: 1.3,
        center_x: 0.0,
        center_y: -1.2,
        start: std::f64::consts::FRAC_PI_2 + CROWN_HALF_SWEEP,
        direction: SweepDirection::Clockwise,
    },
];

// ---------------------------------------------------------------------------
// Polygon assembly
// ---------------------------------------------------------------------------

/// Sample every segment at `sample_count` points, translate by `offset`,
/// negate x when `mirrored`, and concatenate in table order.
pub fn build_polygon(
    body: &[ArcSegment],
    offset: Vector2<f64>,
    mirrored: bool,
    sample_count: usize,
) -> Polygon {
    let mut polygon = Polygon::with_capacity(body.len() * sample_count);
    build_polygon_into(&mut polygon, body, offset, mirrored, sample_count);
    polygon
}

/// Same as [`build_polygon`], reusing the vertex buffer of `out`.
pub fn build_polygon_into(
    out: &mut Polygon,
    body: &[ArcSegment],
    offset: Vector2<f64>,
    mirrored: bool,
    sample_count: usize,
) {
    out.vertices.clear();
    for seg in body {
        let reversed = seg.name == REVERSED_SEGMENT;
        let center = seg.center() + offset;
        for j in 0..sample_count {
            let idx = if reversed { sample_count - 1 - j } else { j };
            let t = seg.angle(idx, sample_count);
            let x = center.x + seg.radius * t.cos();
            let y = center.y + seg.radius * t.sin();
            out.vertices.push(Point2::new(if mirrored { -x } else { x }, y));
        }
    }
}
