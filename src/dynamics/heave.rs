use nalgebra::Point2;

/// Distributes one step's heave increment over the attachment points.
///
/// Implement this to try other couplings between heave and pitch; the
/// integrator calls it once per step after updating the reference heave.
pub trait HeaveCoupling {
    /// Move `a` (left) and/or `b` (right) by the vertical increment `dy`.
    /// `gamma` is the pitch angle before this step's pitch update.
    fn apply(&mut self, a: &mut Point2<f64>, b: &mut Point2<f64>, dy: f64, gamma: f64);

    /// Human-readable name for logging/display.
    fn name(&self) -> &str {
        "unnamed"
    }
}

/// Both points follow the heave: the craft translates without tilting.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymmetricHeave;

impl HeaveCoupling for SymmetricHeave {
    fn apply(&mut self, a: &mut Point2<f64>, b: &mut Point2<f64>, dy: f64, _gamma: f64) {
        a.y += dy;
        b.y += dy;
    }

    fn name(&self) -> &str {
        "symmetric"
    }
}

/// Only the point on the side the craft is pitched towards moves: A for
/// positive pitch, B for negative, both when level.
#[derive(Debug, Clone, Copy, Default)]
pub struct PitchBiasedHeave;

impl HeaveCoupling for PitchBiasedHeave {
    fn apply(&mut self, a: &mut Point2<f64>, b: &mut Point2<f64>, dy: f64, gamma: f64) {
        if gamma > 0.0 {
            a.y += dy;
        } else if gamma < 0.0 {
            b.y += dy;
        } else {
            a.y += dy;
            b.y += dy;
        }
    }

    fn name(&self) -> &str {
        "pitch-biased"
    }
}
