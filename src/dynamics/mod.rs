pub mod heave;
pub mod state;

pub use heave::{HeaveCoupling, PitchBiasedHeave, SymmetricHeave};
pub use state::{Phase, SimConfig, SimulationState, Snapshot, MAX_STEPS};
