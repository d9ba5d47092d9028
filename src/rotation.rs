//! Rotation matrices and the sonar-to-cartesian beam-vector convention.
//!
//! The core treats `boresight` and `imu2nav` as opaque orthonormal 3x3
//! rotations supplied by the vessel-attitude collaborator (out of scope,
//! see the top-level crate documentation); it never constructs them
//! itself.

use nalgebra::{Matrix3, Vector3};

/// A 3x3 orthonormal rotation matrix.
pub type Rotation3 = Matrix3<f64>;

/// A 3-component Cartesian vector.
pub type Vec3 = Vector3<f64>;

/// Map sonar-frame along-track/across-track beam angles to a unit vector
/// in the sonar's mechanical frame.
///
/// This is the sonar-to-cartesian convention: `(sin(a) cos(g), sin(g),
/// cos(a) cos(g))`.
/// A host integration may supply a different convention upstream of the
/// [`crate::launch`] resolver; this function is the default the core
/// ships with when no host convention is substituted.
///
/// # Arguments
/// `along_track` : `f64`
/// - along-track beam angle alpha, in radians.
///
/// `across_track` : `f64`
/// - across-track beam angle gamma, in radians.
pub fn beam_unit_vector(along_track: f64, across_track: f64) -> Vec3 {
    let (sin_a, cos_a) = along_track.sin_cos();
    let (sin_g, cos_g) = across_track.sin_cos();
    Vec3::new(sin_a * cos_g, sin_g, cos_a * cos_g)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_angles_point_along_the_boresight_axis() {
        let v = beam_unit_vector(0.0, 0.0);
        assert!((v.x - 0.0).abs() < 1e-12);
        assert!((v.y - 0.0).abs() < 1e-12);
        assert!((v.z - 1.0).abs() < 1e-12);
    }

    #[test]
    fn beam_vector_is_unit_length() {
        let v = beam_unit_vector(0.3, -0.7);
        assert!((v.norm() - 1.0).abs() < 1e-12);
    }
}
