use crate::dynamics::heave::{HeaveCoupling, SymmetricHeave};
use crate::dynamics::state::{Phase, SimConfig, SimulationState, Snapshot};
use crate::error::{HoverError, Result};
use crate::vehicle::Parameters;
use super::integrator::euler_step;
use super::recorder::TimeSeries;

// ---------------------------------------------------------------------------
// Run lifecycle: Uninitialized → Running → Completed
// ---------------------------------------------------------------------------

impl SimulationState {
    /// Advance one step with the given heave coupling and record the result.
    ///
    /// The first call starts the run. Index k+1 of the time series receives
    /// the state reached after step k; the state after the final step is only
    /// kept in the snapshot.
    pub fn step_with(&mut self, coupling: &mut dyn HeaveCoupling) -> Result<()> {
        match self.phase {
            Phase::Completed => return Err(HoverError::AlreadyCompleted { total: self.steps }),
            Phase::Uninitialized => self.phase = Phase::Running,
            Phase::Running => {}
        }

        euler_step(self, coupling)?;
        self.iteration += 1;

        if self.iteration < self.steps {
            let t = self.iteration as f64 * self.config.eps;
            self.series.record(self.iteration, t, self.y, self.p, self.gamma, self.w);
        } else {
            self.phase = Phase::Completed;
        }
        Ok(())
    }

    /// One step with symmetric heave.
    pub fn step(&mut self) -> Result<()> {
        self.step_with(&mut SymmetricHeave)
    }

    /// Run every remaining step with symmetric heave.
    pub fn solve(&mut self) -> Result<()> {
        self.solve_with(&mut SymmetricHeave)
    }

    /// Run every remaining step with a custom heave coupling.
    pub fn solve_with(&mut self, coupling: &mut dyn HeaveCoupling) -> Result<()> {
        log::info!(
            "solving {} steps of {} s ({} heave)",
            self.steps - self.iteration,
            self.config.eps,
            coupling.name()
        );
        let report_every = (self.steps / 10).max(1);

        while self.phase != Phase::Completed {
            self.step_with(coupling)?;
            if self.iteration % report_every == 0 {
                log::debug!(
                    "step {}/{}: p={:.2} y={:.5} gamma={:.5} W={:.4}",
                    self.iteration,
                    self.steps,
                    self.p,
                    self.y,
                    self.gamma,
                    self.w
                );
            }
        }

        log::info!(
            "completed after {} steps: p={:.2} Pa, y={:.5} m, gamma={:.5} rad",
            self.iteration,
            self.p,
            self.y,
            self.gamma
        );
        Ok(())
    }

    /// Recorded series, available once the run has completed.
    pub fn results(&self) -> Result<&TimeSeries> {
        if self.phase == Phase::Completed {
            Ok(&self.series)
        } else {
            Err(HoverError::NotSolved { step: self.iteration, total: self.steps })
        }
    }

    /// Hand the recorded series over, consuming the state.
    pub fn into_results(self) -> Result<(TimeSeries, Snapshot)> {
        self.results()?;
        let snapshot = self.snapshot();
        Ok((self.series, snapshot))
    }
}

// ---------------------------------------------------------------------------
// Convenience entry points
// ---------------------------------------------------------------------------

/// Build, solve and return series plus final state.
pub fn simulate_with(
    params: &Parameters,
    config: &SimConfig,
    coupling: &mut dyn HeaveCoupling,
) -> Result<(TimeSeries, Snapshot)> {
    let mut state = SimulationState::new(*params, *config)?;
    state.solve_with(coupling)?;
    state.into_results()
}

/// Simulate with symmetric heave (convenience wrapper).
pub fn simulate(params: &Parameters, config: &SimConfig) -> Result<(TimeSeries, Snapshot)> {
    simulate_with(params, config, &mut SymmetricHeave)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamics::heave::PitchBiasedHeave;
    use crate::physics::{PRESSURE_MAX, PRESSURE_MIN};
    use crate::vehicle::presets;

    fn short_run() -> SimConfig {
        SimConfig { t_end: 2.0, eps: 1e-3, samples_per_segment: 40 }
    }

    #[test]
    fn results_before_solve_is_an_error() {
        let state = SimulationState::new(Parameters::default(), short_run()).unwrap();
        assert!(matches!(state.results(), Err(HoverError::NotSolved { step: 0, .. })));
    }

    #[test]
    fn partial_run_is_not_a_result() {
        let mut state = SimulationState::new(Parameters::default(), short_run()).unwrap();
        state.step().unwrap();
        assert_eq!(state.phase(), Phase::Running);
        assert!(matches!(state.results(), Err(HoverError::NotSolved { step: 1, .. })));
    }

    #[test]
    fn stepping_past_the_end_is_an_error() {
        let config = SimConfig { t_end: 0.01, eps: 0.004, samples_per_segment: 20 };
        let mut state = SimulationState::new(Parameters::default(), config).unwrap();
        state.solve().unwrap();
        assert_eq!(state.progress(), (3, 3));
        assert_eq!(state.phase(), Phase::Completed);
        assert!(matches!(state.step(), Err(HoverError::AlreadyCompleted { total: 3 })));
    }

    #[test]
    fn series_layout() {
        let config = SimConfig { t_end: 0.01, eps: 0.004, samples_per_segment: 20 };
        let mut state = SimulationState::new(Parameters::default(), config).unwrap();
        let initial = state.snapshot();
        state.step().unwrap();
        let after_first = state.snapshot();
        state.solve().unwrap();

        let ts = state.results().unwrap();
        assert_eq!(ts.len(), 3);
        assert_eq!(ts.t, vec![0.0, 0.004, 0.008]);
        assert_eq!(ts.y[0], initial.y);
        assert_eq!(ts.p[0], initial.p);
        assert_eq!(ts.y[1], after_first.y);
        assert_eq!(ts.gamma[1], after_first.gamma);
        // last step only lands in the snapshot
        assert!((state.snapshot().time - 0.012).abs() < 1e-12);
    }

    #[test]
    fn pressure_stays_on_the_fan_curve() {
        let (ts, last) = simulate(&Parameters::default(), &short_run()).unwrap();
        assert_eq!(ts.len(), 2_000);
        let (lo, hi) = ts.pressure_range();
        assert!(lo >= PRESSURE_MIN && hi <= PRESSURE_MAX);
        assert!((PRESSURE_MIN..=PRESSURE_MAX).contains(&last.p));
        assert!(last.w > 0.0);
        assert!(last.s_gap >= 0.0);
    }

    #[test]
    fn craft_settles_into_the_water() {
        // Weight exceeds cushion lift at the bottom of the fan curve, so the
        // bodies sink in until buoyancy makes up the difference.
        let (ts, last) = simulate(&Parameters::default(), &short_run()).unwrap();
        assert!(last.y < ts.y[0]);
        assert!(last.y > 0.0);
        assert!(last.volume > 9.0);
        assert_eq!(last.a.y, last.b.y);
    }

    #[test]
    fn leak_gap_closes_as_the_craft_settles() {
        let params = Parameters { k: 2.5, ..Parameters::default() };
        let mut state = SimulationState::new(params, short_run()).unwrap();
        let initial = state.snapshot().s_gap;
        assert!((initial - 1.0).abs() < 1e-12);

        while state.phase() != Phase::Completed {
            state.step().unwrap();
            let s = state.snapshot();
            assert!(s.s_gap >= 0.0, "negative gap at step {}", s.iteration);
        }
        let last = state.snapshot();
        assert!(last.y < params.k);
        assert!(last.s_gap < 0.5 * initial);
        assert!(last.p < params.hover_pressure());
    }

    #[test]
    fn pitch_accumulates_under_buoyancy() {
        let (ts, last) = simulate(&Parameters::default(), &short_run()).unwrap();
        assert!(last.gamma > 0.0);
        assert!(ts.gamma.windows(2).all(|w| w[1] >= w[0]));
    }

    #[test]
    fn pitch_biased_run_tilts_the_craft() {
        let (_, last) =
            simulate_with(&Parameters::default(), &short_run(), &mut PitchBiasedHeave).unwrap();
        assert!(last.a.y != last.b.y);
    }

    #[test]
    fn deterministic() {
        let (a, sa) = simulate(&presets::bench_rig(), &short_run()).unwrap();
        let (b, sb) = simulate(&presets::bench_rig(), &short_run()).unwrap();
        assert_eq!(a, b);
        assert_eq!(sa, sb);
    }

    #[test]
    fn reference_run_to_one_hundred_seconds() {
        let config = SimConfig { t_end: 100.0, eps: 1e-3, ..SimConfig::default() };
        let mut state = SimulationState::new(Parameters::default(), config).unwrap();
        state.solve().unwrap();
        let ts = state.results().unwrap();
        assert_eq!(ts.y.len(), 100_000);
        assert_eq!(ts.p.len(), ts.y.len());
        assert_eq!(ts.gamma.len(), ts.y.len());
        assert!(ts.p.iter().all(|p| (PRESSURE_MIN..=PRESSURE_MAX).contains(p)));
        assert!(ts.w.iter().all(|w| *w > 0.0));
    }
}
