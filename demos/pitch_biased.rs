use nalgebra::Point2;

use hovercraft_sim::dynamics::{HeaveCoupling, PitchBiasedHeave, SimConfig, SymmetricHeave};
use hovercraft_sim::sim;
use hovercraft_sim::vehicle::Parameters;

/// Splits the heave increment between the two points, giving the side the
/// craft leans towards a larger share.
struct WeightedHeave {
    bias: f64,
}

impl HeaveCoupling for WeightedHeave {
    fn apply(&mut self, a: &mut Point2<f64>, b: &mut Point2<f64>, dy: f64, gamma: f64) {
        let share = self.bias * gamma.signum();
        a.y += dy * (1.0 + share);
        b.y += dy * (1.0 - share);
    }

    fn name(&self) -> &str {
        "weighted"
    }
}

fn main() {
    env_logger::init();

    let params = Parameters::default();
    let config = SimConfig { t_end: 5.0, eps: 1e-3, samples_per_segment: 60 };

    let mut couplings: Vec<Box<dyn HeaveCoupling>> = vec![
        Box::new(SymmetricHeave),
        Box::new(PitchBiasedHeave),
        Box::new(WeightedHeave { bias: 0.25 }),
    ];

    println!("Settling for {} s with eps = {} s", config.t_end, config.eps);
    println!();
    println!(
        "  {:<14} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "coupling", "y (m)", "A.y (m)", "B.y (m)", "gamma", "p (Pa)"
    );
    println!("  {}", "-".repeat(69));

    for coupling in couplings.iter_mut() {
        let name = coupling.name().to_owned();
        match sim::simulate_with(&params, &config, coupling.as_mut()) {
            Ok((_, last)) => println!(
                "  {:<14} {:>10.5} {:>10.5} {:>10.5} {:>10.5} {:>10.2}",
                name, last.y, last.a.y, last.b.y, last.gamma, last.p
            ),
            Err(e) => println!("  {:<14} failed: {e}", name),
        }
    }
}
