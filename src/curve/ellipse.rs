use std::f64::consts::TAU;

use crate::error::Result;
use crate::math::rotation::euler_rotation;
use crate::math::vector::unit;
use crate::math::{Point3, Vector3};

use super::non_negative;

/// An axis-aligned ellipse in the X-Y plane.
///
/// `P(t) = R_z(t * 2π) * (0, 1, 0)`, scaled component-wise by
/// `(x_extent, y_extent, 1)`. The rim starts on the +Y axis at the full
/// y-extent and sweeps toward +X.
#[derive(Debug, Clone)]
pub struct Ellipse {
    x_extent: f64,
    y_extent: f64,
}

impl Ellipse {
    /// Creates a new ellipse.
    ///
    /// # Errors
    ///
    /// Returns an error if either extent is negative. Zero extents build a
    /// valid degenerate ellipse; only its tangent can fail, at evaluation
    /// time, where the rim passes through the origin.
    pub fn new(x_extent: f64, y_extent: f64) -> Result<Self> {
        Ok(Self {
            x_extent: non_negative("x_extent", x_extent)?,
            y_extent: non_negative("y_extent", y_extent)?,
        })
    }

    /// Returns the extent along the X axis.
    #[must_use]
    pub fn x_extent(&self) -> f64 {
        self.x_extent
    }

    /// Returns the extent along the Y axis.
    #[must_use]
    pub fn y_extent(&self) -> f64 {
        self.y_extent
    }

    /// Returns the closed-form tangent curve of this ellipse.
    #[must_use]
    pub fn tangent_curve(&self) -> EllipseTangent {
        EllipseTangent {
            x_extent: self.x_extent,
            y_extent: self.y_extent,
        }
    }

    /// Evaluates the ellipse at normalized parameter `factor`.
    #[must_use]
    pub fn evaluate(&self, factor: f64) -> Point3 {
        let rim = euler_rotation(0.0, 0.0, factor * TAU) * Point3::new(0.0, 1.0, 0.0);
        Point3::new(rim.x * self.x_extent, rim.y * self.y_extent, rim.z)
    }
}

/// The tangent field of an [`Ellipse`].
///
/// Normalizes the rim point, then crosses the plane normal `(0, 0, 1)` with
/// it, rotating the radial direction a quarter turn within the plane. Exact
/// for circular extents; for eccentric ellipses the direction is only a
/// first-order approximation, kept as-is because the numerical fallback is
/// the ground truth.
#[derive(Debug, Clone)]
pub struct EllipseTangent {
    x_extent: f64,
    y_extent: f64,
}

impl EllipseTangent {
    /// Creates the tangent curve for an ellipse of the given extents.
    ///
    /// # Errors
    ///
    /// Returns an error if either extent is negative.
    pub fn new(x_extent: f64, y_extent: f64) -> Result<Self> {
        Ok(Self {
            x_extent: non_negative("x_extent", x_extent)?,
            y_extent: non_negative("y_extent", y_extent)?,
        })
    }

    /// Returns the extent along the X axis.
    #[must_use]
    pub fn x_extent(&self) -> f64 {
        self.x_extent
    }

    /// Returns the extent along the Y axis.
    #[must_use]
    pub fn y_extent(&self) -> f64 {
        self.y_extent
    }

    /// Evaluates the tangent direction at `factor`, anchored at the origin.
    ///
    /// # Errors
    ///
    /// Returns an error if the rim point lies at the origin (zero extents,
    /// or one zero extent at its singular factors), where the radial
    /// direction is undefined.
    pub fn evaluate(&self, factor: f64) -> Result<Point3> {
        let rim = euler_rotation(0.0, 0.0, factor * TAU) * Point3::new(0.0, 1.0, 0.0);
        let scaled = Vector3::new(rim.x * self.x_extent, rim.y * self.y_extent, rim.z);
        let radial = unit(&scaled)?;
        Ok(Point3::from(Vector3::z().cross(&radial)))
    }
}
