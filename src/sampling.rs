use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::curve::Curve;
use crate::error::{Result, SamplingError};

/// Largest radius a randomly generated circle may have.
pub const MAX_CIRCLE_RADIUS: f64 = 6160.0;
/// Largest x-extent a randomly generated ellipse may have.
pub const MAX_ELLIPSE_X_EXTENT: f64 = 3300.0;
/// Largest y-extent a randomly generated ellipse may have.
pub const MAX_ELLIPSE_Y_EXTENT: f64 = 8300.0;
/// Largest radius a randomly generated helix may have.
pub const MAX_HELIX_RADIUS: f64 = 5110.0;
/// Largest rise per turn a randomly generated helix may have.
pub const MAX_HELIX_STEP_HEIGHT: f64 = 960.0;
/// Exclusive upper bound on a randomly generated helix's turn count.
pub const MAX_HELIX_TURNS: u32 = 150;

/// The shape families the random generator can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// A circle with a random radius.
    Circle,
    /// An ellipse with random extents.
    Ellipse,
    /// A helix with random radius, rise, and turn count.
    Helix,
}

/// Generates `count` random curves drawn from `weights`.
///
/// Entries repeating a kind accumulate their weights. A zero weight keeps
/// the kind out of the batch entirely; an empty list yields an empty batch.
/// With `seed` given the batch is reproducible; otherwise the generator is
/// seeded from entropy.
///
/// # Errors
///
/// Returns an error if a weight is negative, not finite, or all accumulated
/// weights are zero.
pub fn random_curves(
    count: usize,
    weights: &[(ShapeKind, f64)],
    seed: Option<u64>,
) -> Result<Vec<Curve>> {
    let merged = accumulate(weights);
    if merged.is_empty() {
        return Ok(Vec::new());
    }
    let distribution = WeightedIndex::new(merged.iter().map(|(_, weight)| *weight))
        .map_err(SamplingError::from)?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut curves = Vec::with_capacity(count);
    for _ in 0..count {
        let (kind, _) = merged[distribution.sample(&mut rng)];
        curves.push(random_curve(kind, &mut rng)?);
    }
    Ok(curves)
}

/// Returns the `count` evenly spaced factors `0, 1/count, ..., (count-1)/count`.
#[allow(clippy::cast_precision_loss)]
pub fn factor_sweep(count: usize) -> impl Iterator<Item = f64> {
    (0..count).map(move |i| i as f64 / count as f64)
}

/// Merges repeated kinds, summing their weights, preserving first-seen order.
fn accumulate(weights: &[(ShapeKind, f64)]) -> Vec<(ShapeKind, f64)> {
    let mut merged: Vec<(ShapeKind, f64)> = Vec::new();
    for &(kind, weight) in weights {
        match merged.iter_mut().find(|(seen, _)| *seen == kind) {
            Some((_, total)) => *total += weight,
            None => merged.push((kind, weight)),
        }
    }
    merged
}

fn random_curve(kind: ShapeKind, rng: &mut StdRng) -> Result<Curve> {
    match kind {
        ShapeKind::Circle => Curve::circle(rng.gen::<f64>() * MAX_CIRCLE_RADIUS),
        ShapeKind::Ellipse => Curve::ellipse(
            rng.gen::<f64>() * MAX_ELLIPSE_X_EXTENT,
            rng.gen::<f64>() * MAX_ELLIPSE_Y_EXTENT,
        ),
        ShapeKind::Helix => Curve::helix(
            rng.gen::<f64>() * MAX_HELIX_RADIUS,
            rng.gen::<f64>() * MAX_HELIX_STEP_HEIGHT,
            rng.gen_range(0..MAX_HELIX_TURNS),
        ),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_reproduces_the_batch() {
        let weights = [(ShapeKind::Circle, 1.0), (ShapeKind::Helix, 1.0)];
        let a = random_curves(20, &weights, Some(7)).unwrap();
        let b = random_curves(20, &weights, Some(7)).unwrap();
        assert_eq!(a.len(), 20);
        for (left, right) in a.iter().zip(&b) {
            assert_eq!(left.name(), right.name());
            for i in 0..4 {
                let t = f64::from(i) * 0.25;
                let gap = (left.evaluate(t).unwrap() - right.evaluate(t).unwrap()).norm();
                assert!(gap < 1e-15);
            }
        }
    }

    #[test]
    fn zero_weight_kinds_never_appear() {
        let weights = [(ShapeKind::Circle, 1.0), (ShapeKind::Ellipse, 0.0)];
        let batch = random_curves(50, &weights, Some(3)).unwrap();
        assert!(batch.iter().all(|c| matches!(c, Curve::Circle(_))));
    }

    #[test]
    fn repeated_kinds_accumulate() {
        let merged = accumulate(&[
            (ShapeKind::Circle, 30.0),
            (ShapeKind::Ellipse, 30.0),
            (ShapeKind::Helix, 10.0),
            (ShapeKind::Ellipse, 10.0),
        ]);
        assert_eq!(merged.len(), 3);
        assert_eq!(merged[1], (ShapeKind::Ellipse, 40.0));
    }

    #[test]
    fn empty_weights_yield_an_empty_batch() {
        assert!(random_curves(10, &[], Some(1)).unwrap().is_empty());
    }

    #[test]
    fn all_zero_weights_are_rejected() {
        let weights = [(ShapeKind::Circle, 0.0), (ShapeKind::Helix, 0.0)];
        assert!(random_curves(5, &weights, Some(1)).is_err());
    }

    #[test]
    fn negative_weights_are_rejected() {
        assert!(random_curves(5, &[(ShapeKind::Circle, -1.0)], Some(1)).is_err());
    }

    #[test]
    fn generated_parameters_respect_the_caps() {
        let weights = [
            (ShapeKind::Circle, 1.0),
            (ShapeKind::Ellipse, 1.0),
            (ShapeKind::Helix, 1.0),
        ];
        for curve in random_curves(100, &weights, Some(11)).unwrap() {
            match curve {
                Curve::Circle(c) => {
                    assert!((0.0..MAX_CIRCLE_RADIUS).contains(&c.radius()));
                }
                Curve::Ellipse(e) => {
                    assert!((0.0..MAX_ELLIPSE_X_EXTENT).contains(&e.x_extent()));
                    assert!((0.0..MAX_ELLIPSE_Y_EXTENT).contains(&e.y_extent()));
                }
                Curve::Helix(h) => {
                    assert!((0.0..MAX_HELIX_RADIUS).contains(&h.radius()));
                    assert!((0.0..MAX_HELIX_STEP_HEIGHT).contains(&h.step_height()));
                    assert!(h.turns() < MAX_HELIX_TURNS);
                }
                other => panic!("unexpected kind {}", other.name()),
            }
        }
    }

    #[test]
    fn factor_sweep_covers_one_period_exclusively() {
        let factors: Vec<f64> = factor_sweep(8).collect();
        assert_eq!(factors.len(), 8);
        assert!((factors[0] - 0.0).abs() < 1e-15);
        assert!((factors[7] - 0.875).abs() < 1e-15);
        assert!(factors.iter().all(|f| (0.0..1.0).contains(f)));
    }
}
