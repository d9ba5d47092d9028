//! The launch-vector resolver: maps sonar-frame beam angles into a
//! navigation-frame azimuth and depression angle.

use crate::rotation::{beam_unit_vector, Rotation3};

/// The resolved geometry of a beam's launch direction, expressed in the
/// local navigation (NED) frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaunchGeometry {
    /// `sin` of the horizontal azimuth.
    pub sin_az: f64,
    /// `cos` of the horizontal azimuth.
    pub cos_az: f64,
    /// Depression angle `beta_0`, measured from the horizontal, positive
    /// downward, in radians.
    pub depression: f64,
}

/// Resolve a beam's (along-track, across-track) sonar-frame angles into
/// navigation-frame azimuth and depression.
///
/// # Arguments
/// `along_track`, `across_track` : `f64`
/// - beam angles in the sonar frame, in radians.
///
/// `boresight` : `&Rotation3`
/// - rotation from the mechanical sonar frame to the IMU frame.
///
/// `imu2nav` : `&Rotation3`
/// - rotation from the IMU frame to the local navigation frame.
///
/// # Returns
/// `LaunchGeometry` with `sin_az`/`cos_az` both `0.0` for a nadir-looking
/// ray (zero horizontal component), and `depression = asin(v_n.z)`.
pub fn resolve(
    along_track: f64,
    across_track: f64,
    boresight: &Rotation3,
    imu2nav: &Rotation3,
) -> LaunchGeometry {
    let v_s = beam_unit_vector(along_track, across_track);
    let v_n = imu2nav * (boresight * v_s);

    let h = (v_n.x * v_n.x + v_n.y * v_n.y).sqrt();
    let (sin_az, cos_az) = if h > 0.0 {
        (v_n.x / h, v_n.y / h)
    } else {
        (0.0, 0.0)
    };
    let depression = v_n.z.clamp(-1.0, 1.0).asin();

    LaunchGeometry {
        sin_az,
        cos_az,
        depression,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nadir_beam_with_identity_rotations_has_full_depression() {
        let identity = Rotation3::identity();
        let geo = resolve(0.0, 0.0, &identity, &identity);
        assert!((geo.depression - std::f64::consts::FRAC_PI_2).abs() < 1e-9);
        assert_eq!(geo.sin_az, 0.0);
        assert_eq!(geo.cos_az, 0.0);
    }

    #[test]
    fn oblique_across_track_beam_rotates_into_azimuth() {
        let identity = Rotation3::identity();
        let geo = resolve(0.0, std::f64::consts::FRAC_PI_6, &identity, &identity);
        // sonar frame: (sin(0)*cos(g), sin(g), cos(0)*cos(g)) = (0, sin(g), cos(g))
        // h = |sin(g)| = sin(g), so sin_az = 0, cos_az = 1.
        assert!((geo.sin_az - 0.0).abs() < 1e-9);
        assert!((geo.cos_az - 1.0).abs() < 1e-9);
        assert!((geo.depression - std::f64::consts::FRAC_PI_3).abs() < 1e-9);
    }
}
