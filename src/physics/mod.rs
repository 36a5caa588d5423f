pub mod cushion;
pub mod flow;
pub mod forces;

pub use cushion::cushion_measure;
pub use flow::{inflow_rate, leak_gap_area, outflow_rate, pressure_rate};
pub use forces::{
    buoyancy_force, cos_between, heave_acceleration, pitch_acceleration, pitch_torque_cosine,
    pressure_force, weight_force,
};

/// Lowest cushion pressure on the fitted fan curve, Pa.
pub const PRESSURE_MIN: f64 = 600.0;

/// Highest cushion pressure on the fitted fan curve, Pa.
pub const PRESSURE_MAX: f64 = 2964.0;

/// `value` limited to `[lo, hi]`.
pub fn clamp(value: f64, lo: f64, hi: f64) -> f64 {
    value.max(lo).min(hi)
}
