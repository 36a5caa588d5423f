use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use hovercraft_sim::dynamics::{
    HeaveCoupling, PitchBiasedHeave, SimConfig, SimulationState, SymmetricHeave,
};
use hovercraft_sim::io::{csv, json};
use hovercraft_sim::physics::{PRESSURE_MAX, PRESSURE_MIN};
use hovercraft_sim::vehicle::Parameters;
use hovercraft_sim::Result;

/// Heave, pitch and cushion pressure of an air-cushion craft on twin flotation bodies
#[derive(Parser, Debug)]
#[command(name = "hovercraft-sim")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Parameter file (JSON); the reference craft is used when omitted
    #[arg(short, long)]
    params: Option<PathBuf>,

    /// Simulated time, s
    #[arg(long, default_value_t = 100.0)]
    t_end: f64,

    /// Fixed Euler step, s
    #[arg(long, default_value_t = 0.001)]
    eps: f64,

    /// Outline samples per arc segment
    #[arg(long, default_value_t = 100)]
    samples: usize,

    /// Write the recorded time series to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write a JSON run summary to this file
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Save the parameters in use to this JSON file
    #[arg(long)]
    save_params: Option<PathBuf>,

    /// Move only the attachment point on the pitched side
    #[arg(long)]
    pitch_biased: bool,

    /// Log filter when RUST_LOG is unset (error, warn, info, debug, trace)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let params = match &cli.params {
        Some(path) => json::load_parameters(path)?,
        None => Parameters::default(),
    };
    if let Some(path) = &cli.save_params {
        json::save_parameters(path, &params)?;
    }

    let config = SimConfig {
        t_end: cli.t_end,
        eps: cli.eps,
        samples_per_segment: cli.samples,
    };

    let mut coupling: Box<dyn HeaveCoupling> = if cli.pitch_biased {
        Box::new(PitchBiasedHeave)
    } else {
        Box::new(SymmetricHeave)
    };

    // -----------------------------------------------------------------------
    // Run simulation
    // -----------------------------------------------------------------------
    let mut state = SimulationState::new(params, config)?;
    state.solve_with(coupling.as_mut())?;
    let series = state.results()?;
    let last = state.snapshot();

    // -----------------------------------------------------------------------
    // Print results
    // -----------------------------------------------------------------------
    println!();
    println!("====================================================================");
    println!("  AIR-CUSHION CRAFT SETTLING ({} heave)", coupling.name());
    println!("====================================================================");
    println!();
    println!("  Craft Parameters");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Mass:          {:>9.0} kg    Cushion area: {:>8.1} m^2",
        params.m, params.s
    );
    println!(
        "  Lever arm:     {:>9.2} m     Inertia:      {:>8.0} kg·m^2",
        params.l, params.i
    );
    println!(
        "  Clearance:     {:>9.2} m     Chamber h/r:  {:>5.2} / {:.2} m",
        params.k, params.h, params.r
    );
    println!(
        "  Hover p:       {:>9.1} Pa    Fan curve:    {:.4} Q^2 + {:.4} Q + {:.2}",
        params.hover_pressure(),
        params.a,
        params.b,
        params.c
    );
    println!();

    println!("  Time Series");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>9}  {:>9}  {:>10}  {:>10}  {:>9}",
        "t (s)", "y (m)", "p (Pa)", "gamma", "W"
    );
    println!("  {}", "─".repeat(56));

    let sample_interval = (series.len() / 30).max(1);
    for (i, s) in series.iter().enumerate() {
        if i % sample_interval != 0 && i != series.len() - 1 {
            continue;
        }
        let marker = if s.p <= PRESSURE_MIN || s.p >= PRESSURE_MAX { "*" } else { "" };
        println!(
            "  {:>9.3}  {:>9.5}  {:>10.2}{:1} {:>10.5}  {:>9.4}",
            s.t, s.y, s.p, marker, s.gamma, s.w
        );
    }
    println!();

    let (p_min, p_max) = series.pressure_range();
    let (y_min, y_max) = series.heave_range();
    println!("  Final State");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!("{last}");
    println!();
    println!("  Pressure range: {:.2} .. {:.2} Pa   (* = on the fan-curve limit)", p_min, p_max);
    println!("  Heave range:    {:.5} .. {:.5} m", y_min, y_max);
    println!();
    println!("  Simulation: {} steps, eps={} s", last.iteration, config.eps);
    println!("====================================================================");
    println!();

    if let Some(path) = &cli.csv {
        csv::write_series_file(path, series)?;
        log::info!("wrote {} rows to {}", series.len(), path.display());
    }
    if let Some(path) = &cli.summary {
        let summary = json::RunSummary::new(&params, &config, series, &last);
        json::write_summary_file(path, &summary)?;
        log::info!("wrote summary to {}", path.display());
    }

    Ok(())
}
