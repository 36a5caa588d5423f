// ---------------------------------------------------------------------------
// Time-series recorder: parallel arrays sized once per run
// ---------------------------------------------------------------------------

/// One recorded step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub t: f64,
    pub y: f64,
    pub p: f64,
    pub gamma: f64,
    pub w: f64,
}

/// Parallel per-step arrays. Index 0 is the initial condition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeries {
    pub t: Vec<f64>,
    pub y: Vec<f64>,
    pub p: Vec<f64>,
    pub gamma: Vec<f64>,
    pub w: Vec<f64>,
}

impl TimeSeries {
    /// Zero-filled arrays of exactly `len` entries.
    pub fn with_len(len: usize) -> Self {
        Self {
            t: vec![0.0; len],
            y: vec![0.0; len],
            p: vec![0.0; len],
            gamma: vec![0.0; len],
            w: vec![0.0; len],
        }
    }

    /// Overwrite slot `i`. Callers stay within `len()`; release builds ignore
    /// an out-of-range index.
    pub fn record(&mut self, i: usize, t: f64, y: f64, p: f64, gamma: f64, w: f64) {
        debug_assert!(i < self.len(), "record index {i} past series of {}", self.len());
        if i >= self.len() {
            return;
        }
        self.t[i] = t;
        self.y[i] = y;
        self.p[i] = p;
        self.gamma[i] = gamma;
        self.w[i] = w;
    }

    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    pub fn row(&self, i: usize) -> Option<Sample> {
        (i < self.len()).then(|| Sample {
            t: self.t[i],
            y: self.y[i],
            p: self.p[i],
            gamma: self.gamma[i],
            w: self.w[i],
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = Sample> + '_ {
        (0..self.len()).filter_map(move |i| self.row(i))
    }

    /// (min, max) of the recorded pressure.
    pub fn pressure_range(&self) -> (f64, f64) {
        range(&self.p)
    }

    pub fn heave_range(&self) -> (f64, f64) {
        range(&self.y)
    }
}

fn range(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
}
