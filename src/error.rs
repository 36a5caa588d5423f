use thiserror::Error;

/// Errors raised while configuring or advancing a simulation run.
#[derive(Error, Debug)]
pub enum HoverError {
    /// Run configuration cannot produce a positive number of steps
    #[error("Invalid run configuration: t_end={t_end}, eps={eps}, samples_per_segment={samples}")]
    InvalidConfig {
        t_end: f64,
        eps: f64,
        samples: usize,
    },

    /// A physical parameter is non-finite or outside its domain
    #[error("Invalid parameter {name} = {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// Cushion measure collapsed, the pressure equation divides by it
    #[error("Cushion measure W = {w} is not positive at step {step}")]
    DegenerateCushion { w: f64, step: usize },

    /// A kernel produced a value with no physical meaning
    #[error("Numeric domain error at step {step}: {what}")]
    NumericDomain { what: &'static str, step: usize },

    /// Results requested before the run completed
    #[error("Simulation has not been solved yet (step {step} of {total})")]
    NotSolved { step: usize, total: usize },

    /// Step requested after the run finished
    #[error("Simulation already completed after {total} steps")]
    AlreadyCompleted { total: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HoverError>;
