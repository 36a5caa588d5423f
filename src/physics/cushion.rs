use nalgebra::Point2;

use crate::vehicle::Parameters;

/// Cushion measure W between the attachment points.
///
/// The cushion spans the chord A→B inset by one chamber radius at each end,
/// x_l = A.x + r to x_r = B.x − r. W is the trapezoid integral of the chord
/// height over that span, scaled to the cushion area:
/// W = S / (x_r − x_l) · ∫ y(x) dx = S · (y(x_l) + y(x_r)) / 2.
/// With both points at the clearance k this is S·k.
pub fn cushion_measure(params: &Parameters, a: &Point2<f64>, b: &Point2<f64>) -> f64 {
    let span = b.x - a.x;
    let height_at = |x: f64| a.y + (b.y - a.y) * (x - a.x) / span;
    let y_left = height_at(a.x + params.r);
    let y_right = height_at(b.x - params.r);
    params.s * 0.5 * (y_left + y_right)
}
