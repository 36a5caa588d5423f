use nalgebra::Point2;

/// Closed polygon, last vertex implicitly joined to the first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Point2<f64>>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point2<f64>>) -> Self {
        Self { vertices }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { vertices: Vec::with_capacity(capacity) }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Shoelace area, positive for counter-clockwise vertex order.
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.vertices)
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    pub fn lowest_y(&self) -> f64 {
        self.vertices.iter().map(|v| v.y).fold(f64::INFINITY, f64::min)
    }

    pub fn highest_y(&self) -> f64 {
        self.vertices.iter().map(|v| v.y).fold(f64::NEG_INFINITY, f64::max)
    }
}

pub(crate) fn signed_area(vertices: &[Point2<f64>]) -> f64 {
    if vertices.len() < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    let mut prev = vertices[vertices.len() - 1];
    for v in vertices {
        twice += prev.x * v.y - v.x * prev.y;
        prev = *v;
    }
    0.5 * twice
}
