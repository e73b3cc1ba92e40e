use crate::error::{CurveError, Result};

use super::{Vector3, TOLERANCE};

/// Returns the unit-length vector pointing along `v`.
///
/// # Errors
///
/// Returns an error if `v` is shorter than the geometric tolerance.
pub fn unit(v: &Vector3) -> Result<Vector3> {
    let len = v.norm();
    if len < TOLERANCE {
        return Err(CurveError::ZeroVector.into());
    }
    Ok(v / len)
}
