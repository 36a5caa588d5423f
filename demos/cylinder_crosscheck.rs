use nalgebra::{Point2, Vector2};

use hovercraft_sim::geometry::{
    build_polygon, cylinder_volume, Polygon, SubmergedAreaEvaluator, FLOTATION_BODY,
};

/// Rectangle of width π·r² hanging below `top`: its clipped area follows the
/// same law as an upright cylinder of radius r.
fn equivalent_rectangle(top: f64, r: f64, h: f64) -> Polygon {
    let width = std::f64::consts::PI * r * r;
    Polygon::new(vec![
        Point2::new(0.0, top),
        Point2::new(width, top),
        Point2::new(width, top - h),
        Point2::new(0.0, top - h),
    ])
}

fn main() {
    let (r, h) = (1.0, 2.0);
    let mut evaluator = SubmergedAreaEvaluator::new();
    let water = evaluator.water();
    let (depth, surface) = (water.lowest_y(), water.highest_y());

    println!("Immersion of a cylinder (r = {r} m, h = {h} m) and one flotation body");
    println!("Water from y = {depth} m up to the surface at y = {surface} m");
    println!();
    println!(
        "  {:>8} {:>12} {:>12} {:>10} {:>12}",
        "top (m)", "cylinder", "clipped", "error", "body"
    );
    println!("  {}", "-".repeat(58));

    let mut worst: f64 = 0.0;
    for i in 0..=16 {
        let top = -0.5 + 0.25 * i as f64;
        let exact = cylinder_volume(top, r, h);
        let clipped = evaluator.area(&equivalent_rectangle(top, r, h));
        let outline = build_polygon(&FLOTATION_BODY, Vector2::new(0.0, top), false, 100);
        let body = evaluator.area(&outline);
        let error = (clipped - exact).abs();
        worst = worst.max(error);
        println!(
            "  {:>8.2} {:>12.6} {:>12.6} {:>10.2e} {:>12.6}",
            top, exact, clipped, error, body
        );
    }

    println!();
    println!("  Largest deviation: {worst:.3e}");
}
