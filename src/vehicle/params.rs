use serde::{Deserialize, Serialize};

use crate::error::{HoverError, Result};

// ---------------------------------------------------------------------------
// Parameter set: flat record of physical constants for one craft
// ---------------------------------------------------------------------------

/// Static vehicle and environment parameters. Read-only to the integrator.
///
/// JSON keys keep the short symbols used on the parameter forms
/// (`S` and `I` are upper case).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    pub m: f64,         // kg, craft mass
    pub rho: f64,       // kg/m^3, water density
    #[serde(rename = "S")]
    pub s: f64,         // m^2, cushion area
    pub g: f64,         // m/s^2
    pub n: f64,         // polytropic index
    pub p_a: f64,       // Pa, atmospheric pressure
    #[serde(rename = "I")]
    pub i: f64,         // kg·m^2, pitch moment of inertia
    pub l: f64,         // m, lever arm (half distance between attachment points)
    pub xi: f64,        // discharge coefficient
    pub a: f64,         // flow curve P(Q) = a·Q^2 + b·Q + c (signed)
    pub b: f64,
    pub c: f64,
    pub k: f64,         // m, clearance at rest
    pub h: f64,         // m, chamber height (leak threshold)
    pub r: f64,         // m, chamber radius
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            m: 16_000.0,
            rho: 1_000.0,
            s: 60.0,
            g: 9.8,
            n: 1.4,
            p_a: 101_300.0,
            i: 250_000.0,
            l: 3.0,
            xi: 1.0,
            a: 2.756_287,
            b: 48.461_925,
            c: 2_770.846_481,
            k: 0.7,
            h: 2.0,
            r: 1.0,
        }
    }
}

impl Parameters {
    /// Reject non-finite values, non-positive constants and a flat flow curve.
    /// The flow-curve coefficients are fitted offline and keep their sign.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("m", self.m),
            ("rho", self.rho),
            ("S", self.s),
            ("g", self.g),
            ("n", self.n),
            ("p_a", self.p_a),
            ("I", self.i),
            ("l", self.l),
            ("xi", self.xi),
            ("k", self.k),
            ("h", self.h),
            ("r", self.r),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(HoverError::InvalidParameter { name, value });
            }
        }
        if !self.a.is_finite() || self.a == 0.0 {
            return Err(HoverError::InvalidParameter { name: "a", value: self.a });
        }
        for (name, value) in [("b", self.b), ("c", self.c)] {
            if !value.is_finite() {
                return Err(HoverError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }

    /// Weight force m·g
    pub fn weight(&self) -> f64 {
        self.m * self.g
    }

    /// Cushion pressure that carries the full weight: m·g / S
    pub fn hover_pressure(&self) -> f64 {
        self.weight() / self.s
    }

    /// Cushion measure at rest, S·k
    pub fn initial_cushion_measure(&self) -> f64 {
        self.s * self.k
    }
}

// ---------------------------------------------------------------------------
// Parameter builder
// ---------------------------------------------------------------------------

pub struct ParametersBuilder {
    params: Parameters,
}

impl Default for ParametersBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ParametersBuilder {
    pub fn new() -> Self {
        Self { params: Parameters::default() }
    }

    pub fn mass(mut self, v: f64) -> Self { self.params.m = v; self }
    pub fn water_density(mut self, v: f64) -> Self { self.params.rho = v; self }
    pub fn cushion_area(mut self, v: f64) -> Self { self.params.s = v; self }
    pub fn gravity(mut self, v: f64) -> Self { self.params.g = v; self }
    pub fn polytropic_index(mut self, v: f64) -> Self { self.params.n = v; self }
    pub fn atmospheric_pressure(mut self, v: f64) -> Self { self.params.p_a = v; self }
    pub fn inertia(mut self, v: f64) -> Self { self.params.i = v; self }
    pub fn lever_arm(mut self, v: f64) -> Self { self.params.l = v; self }
    pub fn discharge(mut self, v: f64) -> Self { self.params.xi = v; self }
    pub fn clearance(mut self, v: f64) -> Self { self.params.k = v; self }
    pub fn chamber_height(mut self, v: f64) -> Self { self.params.h = v; self }
    pub fn chamber_radius(mut self, v: f64) -> Self { self.params.r = v; self }

    /// Flow curve coefficients of P(Q) = a·Q^2 + b·Q + c
    pub fn flow_curve(mut self, a: f64, b: f64, c: f64) -> Self {
        self.params.a = a;
        self.params.b = b;
        self.params.c = c;
        self
    }

    pub fn build(self) -> Result<Parameters> {
        self.params.validate()?;
        Ok(self.params)
    }
}

// ---------------------------------------------------------------------------
// Preset craft
// ---------------------------------------------------------------------------

pub mod presets {
    use super::*;

    /// 16 t reference craft with the fitted fan curve.
    pub fn reference() -> Parameters {
        Parameters::default()
    }

    /// Lighter 8 t test bench: S = 40 m^2, l = 6 m, I = 120 000 kg·m^2.
    pub fn bench_rig() -> Parameters {
        Parameters {
            m: 8_000.0,
            s: 40.0,
            g: 9.81,
            i: 120_000.0,
            l: 6.0,
            ..Parameters::default()
        }
    }
}
