mod circle;
mod ellipse;
mod helix;
mod numeric;

pub use circle::{Circle, CircleTangent};
pub use ellipse::{Ellipse, EllipseTangent};
pub use helix::{Helix, HelixTangent};
pub use numeric::{NumericTangent, CENTRAL_DIFF_STEP};

use crate::error::{CurveError, Result};
use crate::math::Point3;

/// Validates that a shape parameter is non-negative.
fn non_negative(parameter: &'static str, value: f64) -> Result<f64> {
    if value < 0.0 {
        return Err(CurveError::NegativeParameter { parameter, value }.into());
    }
    Ok(value)
}

/// A parametric 3D curve.
///
/// The parameter (`factor`) is normalized so that one unit covers a full
/// period of the closed curves and one turn of the helix. Each shape has a
/// closed-form tangent variant; differentiating a tangent variant falls back
/// to the central-difference [`NumericTangent`], so derivatives of any order
/// exist. Curves are immutable after construction — [`Curve::derivative`]
/// and [`Clone`] always return new objects.
#[derive(Debug, Clone)]
pub enum Curve {
    /// A circle in the X-Y plane.
    Circle(Circle),
    /// The unit tangent field of a circle.
    CircleTangent(CircleTangent),
    /// An axis-aligned ellipse in the X-Y plane.
    Ellipse(Ellipse),
    /// The tangent field of an ellipse.
    EllipseTangent(EllipseTangent),
    /// A helix rising along +Z.
    Helix(Helix),
    /// The unit tangent field of a helix.
    HelixTangent(HelixTangent),
    /// A central-difference tangent of any curve.
    Numeric(NumericTangent),
}

impl Curve {
    /// Creates a circle of the given radius.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is negative.
    pub fn circle(radius: f64) -> Result<Self> {
        Ok(Self::Circle(Circle::new(radius)?))
    }

    /// Creates an axis-aligned ellipse with the given extents.
    ///
    /// # Errors
    ///
    /// Returns an error if either extent is negative.
    pub fn ellipse(x_extent: f64, y_extent: f64) -> Result<Self> {
        Ok(Self::Ellipse(Ellipse::new(x_extent, y_extent)?))
    }

    /// Creates a helix with the given radius, rise per turn, and turn count.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is negative.
    pub fn helix(radius: f64, step_height: f64, turns: u32) -> Result<Self> {
        Ok(Self::Helix(Helix::new(radius, step_height, turns)?))
    }

    /// Evaluates the curve at normalized parameter `factor`.
    ///
    /// No bounds are enforced; factors outside `[0, 1)` extrapolate
    /// periodically (closed shapes) or linearly (the helix rise).
    ///
    /// # Errors
    ///
    /// Returns an error if a tangent evaluation degenerates to a zero-length
    /// direction (for example on a zero-radius circle).
    pub fn evaluate(&self, factor: f64) -> Result<Point3> {
        match self {
            Self::Circle(c) => Ok(c.evaluate(factor)),
            Self::CircleTangent(c) => Ok(c.evaluate(factor)),
            Self::Ellipse(e) => Ok(e.evaluate(factor)),
            Self::EllipseTangent(e) => e.evaluate(factor),
            Self::Helix(h) => Ok(h.evaluate(factor)),
            Self::HelixTangent(h) => Ok(h.evaluate(factor)),
            Self::Numeric(n) => n.evaluate(factor),
        }
    }

    /// Returns the first derivative of the curve with respect to the factor.
    ///
    /// Shapes return their closed-form tangent curve; tangent curves (and
    /// numerical tangents) wrap a snapshot of themselves in a
    /// [`NumericTangent`], so repeated differentiation always succeeds.
    #[must_use]
    pub fn derivative(&self) -> Self {
        match self {
            Self::Circle(c) => Self::CircleTangent(c.tangent_curve()),
            Self::Ellipse(e) => Self::EllipseTangent(e.tangent_curve()),
            Self::Helix(h) => Self::HelixTangent(h.tangent_curve()),
            Self::CircleTangent(_)
            | Self::EllipseTangent(_)
            | Self::HelixTangent(_)
            | Self::Numeric(_) => Self::Numeric(NumericTangent::new(self.clone())),
        }
    }

    /// Returns a diagnostic label for the curve kind.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Circle(_) => "circle",
            Self::CircleTangent(_) => "circle tangent",
            Self::Ellipse(_) => "ellipse",
            Self::EllipseTangent(_) => "ellipse tangent",
            Self::Helix(_) => "helix",
            Self::HelixTangent(_) => "helix tangent",
            Self::Numeric(_) => "numeric tangent",
        }
    }
}
