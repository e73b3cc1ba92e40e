use std::f64::consts::TAU;

use crate::error::Result;
use crate::math::rotation::euler_rotation;
use crate::math::{Point3, Vector3};

use super::non_negative;

/// A helix rising along +Z.
///
/// `P(t) = R_z(t * 2π) * (0, radius, 0) + (0, 0, t * step_height)` — a
/// circular sweep plus a linear rise of `step_height` per full turn. One
/// factor unit covers one turn; `turns` bounds the total sweep for finite
/// renderings but does not enter the formula.
#[derive(Debug, Clone)]
pub struct Helix {
    radius: f64,
    step_height: f64,
    turns: u32,
}

impl Helix {
    /// Creates a new helix.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is negative. The step height may take
    /// any sign (a negative step descends).
    pub fn new(radius: f64, step_height: f64, turns: u32) -> Result<Self> {
        Ok(Self {
            radius: non_negative("radius", radius)?,
            step_height,
            turns,
        })
    }

    /// Returns the radius of the helix.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the rise per full turn.
    #[must_use]
    pub fn step_height(&self) -> f64 {
        self.step_height
    }

    /// Returns the number of turns the helix spans.
    #[must_use]
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Returns the closed-form tangent curve of this helix.
    #[must_use]
    pub fn tangent_curve(&self) -> HelixTangent {
        HelixTangent {
            radius: self.radius,
            step_height: self.step_height,
            turns: self.turns,
        }
    }

    /// Evaluates the helix at normalized parameter `factor`.
    #[must_use]
    pub fn evaluate(&self, factor: f64) -> Point3 {
        let rim = euler_rotation(0.0, 0.0, factor * TAU) * Point3::new(0.0, self.radius, 0.0);
        rim + Vector3::new(0.0, 0.0, factor * self.step_height)
    }
}

/// The unit tangent field of a [`Helix`].
///
/// Rotates `(1, 0, 0)` by Euler angles `(pitch, 0, t * 2π)` and negates the
/// result, where `pitch = -atan2(step_height, circumference)` inclines the
/// tangent to account for the rise per turn. Constant unit magnitude by
/// construction.
#[derive(Debug, Clone)]
pub struct HelixTangent {
    radius: f64,
    step_height: f64,
    turns: u32,
}

impl HelixTangent {
    /// Creates the tangent curve for a helix with the given parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is negative.
    pub fn new(radius: f64, step_height: f64, turns: u32) -> Result<Self> {
        Ok(Self {
            radius: non_negative("radius", radius)?,
            step_height,
            turns,
        })
    }

    /// Returns the radius of the underlying helix.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the rise per full turn of the underlying helix.
    #[must_use]
    pub fn step_height(&self) -> f64 {
        self.step_height
    }

    /// Returns the number of turns the underlying helix spans.
    #[must_use]
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Evaluates the tangent direction at `factor`, anchored at the origin.
    #[must_use]
    pub fn evaluate(&self, factor: f64) -> Point3 {
        let circumference = self.radius * TAU;
        let pitch = -f64::atan2(self.step_height, circumference);
        let swept = euler_rotation(pitch, 0.0, factor * TAU) * Point3::new(1.0, 0.0, 0.0);
        Point3::from(-swept.coords)
    }
}
