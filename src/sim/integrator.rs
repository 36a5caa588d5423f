use crate::dynamics::heave::HeaveCoupling;
use crate::dynamics::state::SimulationState;
use crate::error::{HoverError, Result};
use crate::physics::{self, PRESSURE_MAX, PRESSURE_MIN};

// ---------------------------------------------------------------------------
// Explicit Euler step: pressure → cushion → heave → pitch → geometry
// ---------------------------------------------------------------------------

/// Advance `state` by one fixed step of `state.config.eps`.
///
/// Each stage reads the values left by the previous step, except that the
/// heave force uses this step's pressure and the pitch torque uses this
/// step's heave of A. Recording and phase bookkeeping are left to the caller.
pub fn euler_step(state: &mut SimulationState, coupling: &mut dyn HeaveCoupling) -> Result<()> {
    let params = state.params;
    let eps = state.config.eps;
    let step = state.iteration;

    // Cushion pressure
    let q_in = physics::inflow_rate(params.a, params.b, params.c, state.p);
    let q_out = physics::outflow_rate(params.xi, params.rho, state.p, state.s_gap);
    let dp_dt = physics::pressure_rate(&params, state.w, q_in, q_out, state.dw_dt, step)?;
    state.p = physics::clamp(state.p + dp_dt * eps, PRESSURE_MIN, PRESSURE_MAX);

    // Cushion geometry and leak area
    let w = physics::cushion_measure(&params, &state.a, &state.b);
    state.dw_dt = (w - state.w) / eps;
    state.w = w;
    state.s_gap =
        physics::leak_gap_area(&state.a, params.h) + physics::leak_gap_area(&state.b, params.h);

    // Heave
    let volume = state.submerged_volume();
    state.volume = volume;
    let dy = physics::heave_acceleration(&params, state.p, volume) * eps;
    state.y += dy;
    coupling.apply(&mut state.a, &mut state.b, dy, state.gamma);

    // Pitch
    let cos_arm = physics::pitch_torque_cosine(&state.a.coords);
    if !cos_arm.is_finite() {
        return Err(HoverError::NumericDomain {
            what: "pitch moment arm of A is undefined",
            step,
        });
    }
    state.gamma += physics::pitch_acceleration(&params, volume, cos_arm) * eps;

    state.rebuild_bodies();
    Ok(())
}
