pub mod params;

pub use params::{presets, Parameters, ParametersBuilder};
