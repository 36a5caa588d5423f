use std::fmt;

use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use crate::error::{HoverError, Result};
use crate::geometry::{
    build_polygon, build_polygon_into, Polygon, SubmergedAreaEvaluator, FLOTATION_BODY,
};
use crate::physics::{self, PRESSURE_MAX, PRESSURE_MIN};
use crate::sim::recorder::TimeSeries;
use crate::vehicle::Parameters;

// ---------------------------------------------------------------------------
// Run configuration
// ---------------------------------------------------------------------------

/// Longest run accepted, in steps. The recorder holds five `f64` arrays of
/// this length.
pub const MAX_STEPS: usize = 100_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    pub t_end: f64,                 // s
    pub eps: f64,                   // s, fixed Euler step
    pub samples_per_segment: usize, // outline resolution per arc
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            t_end: 1_000.0,
            eps: 0.01,
            samples_per_segment: 100,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<()> {
        let ok = self.t_end.is_finite()
            && self.eps.is_finite()
            && self.t_end > 0.0
            && self.eps > 0.0
            && self.eps < self.t_end
            && self.samples_per_segment >= 2;
        let steps = self.step_count();
        if ok && steps.is_finite() && steps <= MAX_STEPS as f64 {
            Ok(())
        } else {
            Err(HoverError::InvalidConfig {
                t_end: self.t_end,
                eps: self.eps,
                samples: self.samples_per_segment,
            })
        }
    }

    /// Number of steps, ⌈t_end / eps⌉. A quotient that overshoots an integer
    /// only by rounding noise is not bumped to the next step.
    pub fn steps(&self) -> usize {
        self.step_count() as usize
    }

    fn step_count(&self) -> f64 {
        (self.t_end / self.eps * (1.0 - 1e-12)).ceil()
    }
}

// ---------------------------------------------------------------------------
// Simulation state
// ---------------------------------------------------------------------------

/// Lifecycle of a run. Only `Running` states are advanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Running,
    Completed,
}

/// Mutable aggregate advanced in place by the integrator.
#[derive(Debug, Clone)]
pub struct SimulationState {
    pub(crate) params: Parameters,
    pub(crate) config: SimConfig,
    pub(crate) steps: usize,
    pub(crate) phase: Phase,
    pub(crate) iteration: usize,

    pub(crate) p: f64,       // Pa, cushion pressure
    pub(crate) y: f64,       // m, heave
    pub(crate) gamma: f64,   // rad, pitch
    pub(crate) w: f64,       // cushion measure
    pub(crate) dw_dt: f64,
    pub(crate) s_gap: f64,   // leak gap
    pub(crate) volume: f64,  // summed submerged area of the last step

    pub(crate) a: Point2<f64>, // left attachment point
    pub(crate) b: Point2<f64>, // right attachment point

    pub(crate) left_body: Polygon,
    pub(crate) right_body: Polygon,
    pub(crate) evaluator: SubmergedAreaEvaluator,

    pub(crate) series: TimeSeries,
}

impl SimulationState {
    /// Initial condition: cushion carrying the full weight, craft level at
    /// clearance k, attachment points at x = ∓l.
    pub fn new(params: Parameters, config: SimConfig) -> Result<Self> {
        params.validate()?;
        config.validate()?;

        let steps = config.steps();
        let a = Point2::new(-params.l, params.k);
        let b = Point2::new(params.l, params.k);
        let p = physics::clamp(params.hover_pressure(), PRESSURE_MIN, PRESSURE_MAX);
        let w = physics::cushion_measure(&params, &a, &b);
        let s_gap = physics::leak_gap_area(&a, params.h) + physics::leak_gap_area(&b, params.h);

        let mut state = Self {
            params,
            config,
            steps,
            phase: Phase::Uninitialized,
            iteration: 0,
            p,
            y: params.k,
            gamma: 0.0,
            w,
            dw_dt: 0.0,
            s_gap,
            volume: 0.0,
            a,
            b,
            left_body: Polygon::default(),
            right_body: Polygon::default(),
            evaluator: SubmergedAreaEvaluator::new(),
            series: TimeSeries::with_len(steps),
        };
        state.rebuild_bodies();
        state.volume = state.submerged_volume();
        state.series.record(0, 0.0, state.y, state.p, state.gamma, state.w);

        log::debug!(
            "initial state: p={:.2} Pa, y={:.3} m, W={:.3}, V={:.4}, {} steps",
            state.p,
            state.y,
            state.w,
            state.volume,
            steps
        );
        Ok(state)
    }

    /// Left body mirrored onto A, right body placed on B.
    pub(crate) fn rebuild_bodies(&mut self) {
        let n = self.config.samples_per_segment;
        build_polygon_into(
            &mut self.left_body,
            &FLOTATION_BODY,
            Vector2::new(-self.a.x, self.a.y),
            true,
            n,
        );
        build_polygon_into(
            &mut self.right_body,
            &FLOTATION_BODY,
            Vector2::new(self.b.x, self.b.y),
            false,
            n,
        );
    }

    /// Summed submerged area of both bodies at their current placement.
    pub(crate) fn submerged_volume(&mut self) -> f64 {
        self.evaluator.area(&self.left_body) + self.evaluator.area(&self.right_body)
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Steps taken and total steps of the run.
    pub fn progress(&self) -> (usize, usize) {
        (self.iteration, self.steps)
    }

    pub fn left_body(&self) -> &Polygon {
        &self.left_body
    }

    pub fn right_body(&self) -> &Polygon {
        &self.right_body
    }

    /// Freshly sampled outline of the left body, for display.
    pub fn left_outline(&self) -> Polygon {
        build_polygon(
            &FLOTATION_BODY,
            Vector2::new(-self.a.x, self.a.y),
            true,
            self.config.samples_per_segment,
        )
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            time: self.iteration as f64 * self.config.eps,
            iteration: self.iteration,
            p: self.p,
            y: self.y,
            gamma: self.gamma,
            w: self.w,
            s_gap: self.s_gap,
            volume: self.volume,
            a: self.a,
            b: self.b,
        }
    }
}

// ---------------------------------------------------------------------------
// Scalar snapshot
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub time: f64,
    pub iteration: usize,
    pub p: f64,
    pub y: f64,
    pub gamma: f64,
    pub w: f64,
    pub s_gap: f64,
    pub volume: f64,
    pub a: Point2<f64>,
    pub b: Point2<f64>,
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Iteration {:>8}   t = {:.3} s", self.iteration, self.time)?;
        writeln!(f, "  p     = {:>12.3} Pa", self.p)?;
        writeln!(f, "  y     = {:>12.5} m", self.y)?;
        writeln!(f, "  gamma = {:>12.5} rad", self.gamma)?;
        writeln!(f, "  W     = {:>12.5}", self.w)?;
        writeln!(f, "  S_gap = {:>12.5}", self.s_gap)?;
        writeln!(f, "  V     = {:>12.5}", self.volume)?;
        writeln!(f, "  A     = ({:.4}, {:.5})", self.a.x, self.a.y)?;
        write!(f, "  B     = ({:.4}, {:.5})", self.b.x, self.b.y)
    }
}
