pub mod integrator;
pub mod recorder;
pub mod runner;

pub use integrator::euler_step;
pub use recorder::{Sample, TimeSeries};
pub use runner::{simulate, simulate_with};
