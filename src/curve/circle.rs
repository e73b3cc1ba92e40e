use std::f64::consts::TAU;

use crate::error::Result;
use crate::math::rotation::euler_rotation;
use crate::math::Point3;

use super::non_negative;

/// A circle of given radius in the X-Y plane.
///
/// `P(t) = R_z(t * 2π) * (0, radius, 0)` — the sweep starts on the +Y axis
/// and heads toward +X. One factor unit covers a full period; values outside
/// `[0, 1)` extrapolate periodically.
#[derive(Debug, Clone)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is negative. A zero radius builds a
    /// valid degenerate circle; only its tangent fails, at evaluation time.
    pub fn new(radius: f64) -> Result<Self> {
        Ok(Self {
            radius: non_negative("radius", radius)?,
        })
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the closed-form tangent curve of this circle.
    #[must_use]
    pub fn tangent_curve(&self) -> CircleTangent {
        CircleTangent {
            radius: self.radius,
        }
    }

    /// Evaluates the circle at normalized parameter `factor`.
    #[must_use]
    pub fn evaluate(&self, factor: f64) -> Point3 {
        let start = Point3::new(0.0, self.radius, 0.0);
        euler_rotation(0.0, 0.0, factor * TAU) * start
    }
}

/// The unit tangent field of a [`Circle`].
///
/// `T(t) = R_z((t - 0.25) * 2π) * (0, 1, 0)` — the tangent direction a
/// quarter period out of phase with the circle, independent of radius.
#[derive(Debug, Clone)]
pub struct CircleTangent {
    radius: f64,
}

impl CircleTangent {
    /// Creates the tangent curve for a circle of the given radius.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is negative.
    pub fn new(radius: f64) -> Result<Self> {
        Ok(Self {
            radius: non_negative("radius", radius)?,
        })
    }

    /// Returns the radius of the underlying circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Evaluates the tangent direction at `factor`, anchored at the origin.
    #[must_use]
    pub fn evaluate(&self, factor: f64) -> Point3 {
        let start = Point3::new(0.0, 1.0, 0.0);
        euler_rotation(0.0, 0.0, (factor - 0.25) * TAU) * start
    }
}
