use nalgebra::Vector2;

use crate::vehicle::Parameters;

// ---------------------------------------------------------------------------
// Vertical forces
// ---------------------------------------------------------------------------

/// Buoyant lift rho·g·V, V being the summed submerged area of both bodies.
pub fn buoyancy_force(params: &Parameters, volume: f64) -> f64 {
    params.rho * params.g * volume
}

/// Cushion lift S·p
pub fn pressure_force(params: &Parameters, pressure: f64) -> f64 {
    params.s * pressure
}

pub fn weight_force(params: &Parameters) -> f64 {
    params.m * params.g
}

/// d²y/dt² = (F_p + F_a − F_m) / m
pub fn heave_acceleration(params: &Parameters, pressure: f64, volume: f64) -> f64 {
    (pressure_force(params, pressure) + buoyancy_force(params, volume) - weight_force(params))
        / params.m
}

/// d²γ/dt² = F_a · l · cos / I
pub fn pitch_acceleration(params: &Parameters, volume: f64, cos_arm: f64) -> f64 {
    buoyancy_force(params, volume) * params.l * cos_arm / params.i
}

// ---------------------------------------------------------------------------
// Moment arm projection
// ---------------------------------------------------------------------------

/// Cosine of the angle between two vectors. NaN when either is zero.
pub fn cos_between(v1: &Vector2<f64>, v2: &Vector2<f64>) -> f64 {
    v1.dot(v2) / (v1.norm() * v2.norm())
}

/// Cosine between the left attachment point's position vector and vertical.
/// NaN for a point at the origin; callers must check.
pub fn pitch_torque_cosine(a: &Vector2<f64>) -> f64 {
    cos_between(a, &Vector2::y())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicle::ParametersBuilder;

    #[test]
    fn weight_of_bench_craft() {
        let p = ParametersBuilder::new().mass(8_000.0).gravity(9.81).build().unwrap();
        assert!((weight_force(&p) - 78_480.0).abs() < 1e-9);
    }

    #[test]
    fn massless_craft_weighs_nothing() {
        let p = Parameters { m: 0.0, g: 9.81, ..Parameters::default() };
        assert_eq!(weight_force(&p), 0.0);
    }

    #[test]
    fn hover_pressure_balances_weight() {
        let p = Parameters::default();
        assert!(heave_acceleration(&p, p.hover_pressure(), 0.0).abs() < 1e-12);
        assert!(heave_acceleration(&p, p.hover_pressure(), 1.0) > 0.0);
    }

    #[test]
    fn buoyancy_per_cubic_metre() {
        let p = Parameters::default();
        assert!((buoyancy_force(&p, 1.0) - 9_800.0).abs() < 1e-9);
        assert!((pressure_force(&p, 1_000.0) - 60_000.0).abs() < 1e-9);
    }

    #[test]
    fn diagonal_is_forty_five_degrees() {
        let c = cos_between(&Vector2::new(1.0, 1.0), &Vector2::new(0.0, 1.0));
        assert!((c - std::f64::consts::FRAC_PI_4.cos()).abs() < 1e-12);
    }

    #[test]
    fn orthogonal_parallel_opposite() {
        assert_eq!(cos_between(&Vector2::new(0.0, 100.0), &Vector2::new(100.0, 0.0)), 0.0);
        assert_eq!(cos_between(&Vector2::new(0.0, 3.0), &Vector2::new(0.0, 7.0)), 1.0);
        assert_eq!(cos_between(&Vector2::new(-10.0, 0.0), &Vector2::new(10.0, 0.0)), -1.0);
    }

    #[test]
    fn zero_vector_is_undefined() {
        assert!(cos_between(&Vector2::zeros(), &Vector2::zeros()).is_nan());
        assert!(pitch_torque_cosine(&Vector2::zeros()).is_nan());
    }

    #[test]
    fn pitch_arm_of_resting_point() {
        // A = (-3, 0.7): cos = 0.7 / sqrt(9.49)
        let c = pitch_torque_cosine(&Vector2::new(-3.0, 0.7));
        assert!((c - 0.7 / 9.49_f64.sqrt()).abs() < 1e-12);
        let p = Parameters::default();
        let expected = 9_800.0 * 3.0 * c / 250_000.0;
        assert!((pitch_acceleration(&p, 1.0, c) - expected).abs() < 1e-12);
    }
}
