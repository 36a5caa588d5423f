pub mod dynamics;
pub mod error;
pub mod geometry;
pub mod io;
pub mod physics;
pub mod sim;
pub mod vehicle;

pub use error::{HoverError, Result};

// Flat re-exports for the common entry points
pub mod prelude {
    pub use crate::dynamics::{
        HeaveCoupling, Phase, PitchBiasedHeave, SimConfig, SimulationState, Snapshot,
        SymmetricHeave,
    };
    pub use crate::error::{HoverError, Result};
    pub use crate::sim::{simulate, simulate_with, TimeSeries};
    pub use crate::vehicle::{presets, Parameters, ParametersBuilder};
}
