use crate::error::Result;
use crate::math::vector::unit;
use crate::math::Point3;

use super::Curve;

/// Parameter-space half-step for the central difference.
///
/// Large enough to stay clear of catastrophic cancellation, small enough to
/// track the true tangent of the smooth periodic curves in scope.
pub const CENTRAL_DIFF_STEP: f64 = 1e-3;

/// Central-difference tangent of an arbitrary [`Curve`].
///
/// `T(t) = unit(base(t - h) - base(t + h))` with `h = CENTRAL_DIFF_STEP`.
/// The subtraction order (before minus after) is fixed so that the
/// numerical direction agrees in sign with the closed-form tangents.
///
/// Owns a frozen snapshot of its base curve, so the base's later owners
/// cannot affect it. Differentiating a `NumericTangent` wraps it in another
/// one; each extra order roughly doubles the floating-point error.
#[derive(Debug, Clone)]
pub struct NumericTangent {
    base: Box<Curve>,
}

impl NumericTangent {
    /// Creates a numerical tangent over a snapshot of `base`.
    #[must_use]
    pub fn new(base: Curve) -> Self {
        Self {
            base: Box::new(base),
        }
    }

    /// Returns the curve being differentiated.
    #[must_use]
    pub fn base(&self) -> &Curve {
        &self.base
    }

    /// Evaluates the tangent direction at `factor`, anchored at the origin.
    ///
    /// # Errors
    ///
    /// Returns an error if a base evaluation fails, or if the two sample
    /// points coincide (a degenerate base curve) and no direction exists.
    pub fn evaluate(&self, factor: f64) -> Result<Point3> {
        let before = self.base.evaluate(factor - CENTRAL_DIFF_STEP)?;
        let after = self.base.evaluate(factor + CENTRAL_DIFF_STEP)?;
        let tangent = unit(&(before - after))?;
        Ok(Point3::from(tangent))
    }
}
