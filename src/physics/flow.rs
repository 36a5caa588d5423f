use nalgebra::{Complex, Point2};

use crate::error::{HoverError, Result};
use crate::vehicle::Parameters;

/// Cushion measures at or below this are treated as collapsed.
pub const MIN_CUSHION_MEASURE: f64 = 1e-9;

// ---------------------------------------------------------------------------
// Fan inflow: operating point on the fitted P(Q) parabola
// ---------------------------------------------------------------------------

/// Solve a·Q² + b·Q + (c − p) = 0 and return the real part of the root with
/// the larger real part. A negative discriminant continues into complex
/// arithmetic, so the result is always defined for a != 0.
pub fn inflow_rate(a: f64, b: f64, c: f64, pressure: f64) -> f64 {
    let disc = Complex::new(b * b - 4.0 * a * (c - pressure), 0.0).sqrt();
    let two_a = 2.0 * a;
    let r1 = (-b - disc) / two_a;
    let r2 = (-b + disc) / two_a;
    if r1.re >= r2.re { r1.re } else { r2.re }
}

// ---------------------------------------------------------------------------
// Leakage through the gap under the chambers
// ---------------------------------------------------------------------------

/// Orifice outflow xi·sqrt(2p/rho)·S_gap. `pressure` must be non-negative.
pub fn outflow_rate(xi: f64, rho: f64, pressure: f64, gap_area: f64) -> f64 {
    if gap_area == 0.0 {
        return 0.0;
    }
    xi * (2.0 * pressure / rho).sqrt() * gap_area
}

/// Gap opened by an attachment point lifted above the chamber height.
pub fn leak_gap_area(point: &Point2<f64>, h: f64) -> f64 {
    (point.y - h).max(0.0)
}

// ---------------------------------------------------------------------------
// Polytropic cushion pressure
// ---------------------------------------------------------------------------

/// dp/dt = (n·p_a / W)·(Q_in − Q_out − dW/dt)
pub fn pressure_rate(
    params: &Parameters,
    w: f64,
    q_in: f64,
    q_out: f64,
    dw_dt: f64,
    step: usize,
) -> Result<f64> {
    if w.is_nan() || w <= MIN_CUSHION_MEASURE {
        return Err(HoverError::DegenerateCushion { w, step });
    }
    Ok(params.n * params.p_a / w * (q_in - q_out - dw_dt))
}
