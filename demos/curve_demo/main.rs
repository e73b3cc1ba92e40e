//! Curve demo — samples a weighted random batch of curves and prints each
//! curve and its derivative over one period.
//!
//! ```text
//! cargo run --example curve_demo            # entropy-seeded batch
//! cargo run --example curve_demo -- 42      # reproducible batch
//! ```

use paracurve::curve::Curve;
use paracurve::math::Point3;
use paracurve::sampling::{factor_sweep, random_curves, ShapeKind};
use paracurve::ParacurveError;

const CURVE_COUNT: usize = 15;
const SWEEP_STEPS: usize = 8;

fn main() -> Result<(), ParacurveError> {
    // Default: WARN for everything, INFO for paracurve.
    // Override with RUST_LOG env var (e.g. RUST_LOG=paracurve=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("paracurve=info".parse().unwrap_or_default())
        .add_directive("curve_demo=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let seed: Option<u64> = std::env::args().nth(1).and_then(|arg| arg.parse().ok());

    // The repeated ellipse entry accumulates to a 40-weight share.
    let weights = [
        (ShapeKind::Circle, 30.0),
        (ShapeKind::Ellipse, 30.0),
        (ShapeKind::Helix, 10.0),
        (ShapeKind::Ellipse, 10.0),
    ];
    let curves = random_curves(CURVE_COUNT, &weights, seed)?;

    for curve in &curves {
        let derivative = curve.derivative();
        println!("{}:", curve.name());
        for factor in factor_sweep(SWEEP_STEPS) {
            let point = match curve.evaluate(factor) {
                Ok(point) => point,
                Err(err) => {
                    tracing::warn!(curve = curve.name(), factor, %err, "evaluation failed");
                    continue;
                }
            };
            match derivative.evaluate(factor) {
                Ok(tangent) => {
                    println!("  {}\t: {}", format_point(&point), format_point(&tangent));
                }
                Err(err) => {
                    tracing::warn!(curve = curve.name(), factor, %err, "degenerate tangent");
                    println!("  {}\t: (degenerate)", format_point(&point));
                }
            }
        }
        println!();
    }

    let mut radii: Vec<f64> = curves
        .iter()
        .filter_map(|curve| match curve {
            Curve::Circle(circle) => Some(circle.radius()),
            _ => None,
        })
        .collect();
    radii.sort_by(f64::total_cmp);

    let total: f64 = radii.iter().sum();
    println!("{} circles, radius sum {total:.3}", radii.len());
    Ok(())
}

fn format_point(point: &Point3) -> String {
    format!("({:.3}, {:.3}, {:.3})", point.x, point.y, point.z)
}
