use super::{Rotation3, Vector3};

/// Builds a rotation from Euler angles about the X, Y, and Z axes.
///
/// The factors compose as `X * Y * Z`, so the Z rotation is the first one
/// applied to a vector. Sweep direction is fixed by the anchor mapping:
/// a `z` angle of `π/2` takes `+Y` to `+X`, and an `x` angle of `π/2`
/// takes `+Y` to `-Z`.
#[must_use]
pub fn euler_rotation(x: f64, y: f64, z: f64) -> Rotation3 {
    Rotation3::from_axis_angle(&Vector3::x_axis(), -x)
        * Rotation3::from_axis_angle(&Vector3::y_axis(), -y)
        * Rotation3::from_axis_angle(&Vector3::z_axis(), -z)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;
    use std::f64::consts::{FRAC_PI_2, TAU};

    #[test]
    fn quarter_turn_about_z_takes_y_to_x() {
        let r = euler_rotation(0.0, 0.0, FRAC_PI_2);
        let v = r * Vector3::new(0.0, 1.0, 0.0);
        assert!((v - Vector3::new(1.0, 0.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn quarter_turn_about_x_takes_y_down() {
        let r = euler_rotation(FRAC_PI_2, 0.0, 0.0);
        let v = r * Vector3::new(0.0, 1.0, 0.0);
        assert!((v - Vector3::new(0.0, 0.0, -1.0)).norm() < 1e-12);
    }

    #[test]
    fn z_rotation_applies_before_x() {
        // +Y goes to +X under the Z quarter turn, and +X is fixed by the
        // X rotation. The reversed order would land on -Z instead.
        let r = euler_rotation(FRAC_PI_2, 0.0, FRAC_PI_2);
        let v = r * Vector3::new(0.0, 1.0, 0.0);
        assert!((v - Vector3::new(1.0, 0.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn full_turn_is_identity() {
        let r = euler_rotation(0.0, 0.0, TAU);
        let v = r * Vector3::new(0.3, -1.7, 2.5);
        assert!((v - Vector3::new(0.3, -1.7, 2.5)).norm() < 1e-9);
    }

    #[test]
    fn rotation_preserves_length() {
        let r = euler_rotation(0.4, 1.1, -2.3);
        let v = r * Vector3::new(3.0, 4.0, 12.0);
        assert!((v.norm() - 13.0).abs() < TOLERANCE);
    }
}
