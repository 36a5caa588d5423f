use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dynamics::state::{SimConfig, Snapshot};
use crate::error::Result;
use crate::sim::recorder::TimeSeries;
use crate::vehicle::Parameters;

// ---------------------------------------------------------------------------
// Parameter files
// ---------------------------------------------------------------------------

/// Parse and validate a parameter record. Every field is required.
pub fn read_parameters<R: Read>(reader: R) -> Result<Parameters> {
    let params: Parameters = serde_json::from_reader(reader)?;
    params.validate()?;
    Ok(params)
}

pub fn load_parameters<P: AsRef<Path>>(path: P) -> Result<Parameters> {
    let file = File::open(path.as_ref())?;
    let params = read_parameters(BufReader::new(file))?;
    log::info!("loaded parameters from {}", path.as_ref().display());
    Ok(params)
}

pub fn write_parameters<W: Write>(writer: W, params: &Parameters) -> Result<()> {
    serde_json::to_writer_pretty(writer, params)?;
    Ok(())
}

pub fn save_parameters<P: AsRef<Path>>(path: P, params: &Parameters) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    write_parameters(&mut writer, params)?;
    writer.flush()?;
    log::info!("saved parameters to {}", path.as_ref().display());
    Ok(())
}

// ---------------------------------------------------------------------------
// Run summary
// ---------------------------------------------------------------------------

/// Final state and series extremes of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub parameters: Parameters,
    pub config: SimConfig,
    pub steps: usize,
    pub final_state: FinalState,
    pub extremes: Extremes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalState {
    pub time: f64,
    pub p: f64,
    pub y: f64,
    pub gamma: f64,
    #[serde(rename = "W")]
    pub w: f64,
    pub s_gap: f64,
    pub volume: f64,
    pub a: [f64; 2],
    pub b: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extremes {
    pub p_min: f64,
    pub p_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl RunSummary {
    pub fn new(
        params: &Parameters,
        config: &SimConfig,
        series: &TimeSeries,
        last: &Snapshot,
    ) -> Self {
        let (p_min, p_max) = series.pressure_range();
        let (y_min, y_max) = series.heave_range();
        Self {
            parameters: *params,
            config: *config,
            steps: last.iteration,
            final_state: FinalState {
                time: last.time,
                p: last.p,
                y: last.y,
                gamma: last.gamma,
                w: last.w,
                s_gap: last.s_gap,
                volume: last.volume,
                a: [last.a.x, last.a.y],
                b: [last.b.x, last.b.y],
            },
            extremes: Extremes { p_min, p_max, y_min, y_max },
        }
    }
}

pub fn write_summary<W: Write>(writer: W, summary: &RunSummary) -> Result<()> {
    serde_json::to_writer_pretty(writer, summary)?;
    Ok(())
}

pub fn write_summary_file<P: AsRef<Path>>(path: P, summary: &RunSummary) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_summary(&mut writer, summary)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HoverError;
    use crate::sim;

    #[test]
    fn parameters_survive_a_file_cycle() {
        let params = Parameters { m: 12_345.0, a: -3.8, ..Parameters::default() };
        let mut buf = Vec::new();
        write_parameters(&mut buf, &params).unwrap();
        let back = read_parameters(buf.as_slice()).unwrap();
        assert_eq!(back, params);
    }

    #[test]
    fn missing_field_is_a_configuration_error() {
        let mut value = serde_json::to_value(Parameters::default()).unwrap();
        value.as_object_mut().unwrap().remove("xi");
        let text = value.to_string();
        let err = read_parameters(text.as_bytes()).unwrap_err();
        assert!(matches!(err, HoverError::Json(_)));
        assert!(err.to_string().contains("xi"));
    }

    #[test]
    fn out_of_domain_value_is_rejected() {
        let params = Parameters { rho: -1.0, ..Parameters::default() };
        let text = serde_json::to_string(&params).unwrap();
        let err = read_parameters(text.as_bytes()).unwrap_err();
        assert!(matches!(err, HoverError::InvalidParameter { name: "rho", .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_parameters("/nonexistent/hovercraft/params.json").unwrap_err();
        assert!(matches!(err, HoverError::Io(_)));
    }

    #[test]
    fn summary_json() {
        let params = Parameters::default();
        let config = SimConfig { t_end: 0.05, eps: 0.01, samples_per_segment: 20 };
        let (ts, last) = sim::simulate(&params, &config).unwrap();
        let summary = RunSummary::new(&params, &config, &ts, &last);
        assert_eq!(summary.steps, 5);

        let mut buf = Vec::new();
        write_summary(&mut buf, &summary).unwrap();
        let json = String::from_utf8(buf).unwrap();
        assert!(json.contains("\"final_state\""));
        assert!(json.contains("\"W\""));
        assert!(json.contains("\"p_max\""));

        let back: RunSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, summary);
    }
}
