//! End-to-end scenarios exercising the public `ray_trace`/
//! `planar_ray_trace` entry points against concrete sound-velocity
//! profiles and launch geometries.

use std::f64::consts::FRAC_PI_6;

use sonarbeam_trace::{
    error::Error, layer, planar_ray_trace, ray_trace, Rotation3, SoundSpeedProfile, StaticPing,
};

mod helper;
use helper::assert_close;

const RANGE_TOL: f64 = 1e-4;
const TIME_TOL: f64 = 1e-7;

#[test]
/// Isovelocity, nadir beam: a vertical beam in a uniform 1500 m/s water
/// column closes the one-way budget straight down.
fn isovelocity_nadir_beam() {
    let svp = SoundSpeedProfile::new(vec![0.0, 1000.0], vec![1500.0, 1500.0]).unwrap();
    let ping = StaticPing::new(0.2, 1500.0, 0.0, 0.0, 0.0);
    let identity = Rotation3::identity();

    let point = ray_trace(&ping, &svp, &identity, &identity).unwrap();
    assert_close(point.x_n, 0.0, RANGE_TOL, "x_n");
    assert_close(point.y_e, 0.0, RANGE_TOL, "y_e");
    assert_close(point.z_d, 150.0, RANGE_TOL, "z_d");

    let planar = planar_ray_trace(&ping, &svp, &identity, &identity).unwrap();
    let total_time: f64 = planar.layer_travel_times().iter().sum();
    assert_close(total_time, ping.two_way_travel_time() / 2.0, TIME_TOL, "travel time closure");
}

#[test]
/// Isovelocity, oblique beam: in a uniform water column the radial
/// distance traveled in one-way budget `T` is `c * T` regardless of
/// launch angle.
fn isovelocity_oblique_beam() {
    let svp = SoundSpeedProfile::new(vec![0.0, 1000.0], vec![1500.0, 1500.0]).unwrap();
    let ping = StaticPing::new(0.2, 1500.0, 0.0, 0.0, FRAC_PI_6);
    let identity = Rotation3::identity();

    let planar = planar_ray_trace(&ping, &svp, &identity, &identity).unwrap();
    let radial_sq = planar.point.x_range.powi(2) + planar.point.z_depth.powi(2);
    assert_close(radial_sq, (1500.0 * 0.1_f64).powi(2), 1e-4, "X^2 + Z^2");
}

#[test]
/// Two-layer constant-celerity refraction: Snell's constant is preserved
/// across the boundary and the depth accumulator reflects both the
/// refracted layer and the remaining tail.
fn two_layer_refraction() {
    let svp = SoundSpeedProfile::new(vec![0.0, 50.0, 200.0], vec![1500.0, 1450.0, 1450.0]).unwrap();
    let identity = Rotation3::identity();

    // With along_track = 0, depression = asin(cos(across_track)); an
    // across-track angle of pi/6 resolves to a 60-degree depression
    // (sin(60 deg) == cos(30 deg)), matching the 60-degree beam the
    // scenario specifies.
    let ping = StaticPing::new(0.3, 1500.0, 0.0, 0.0, FRAC_PI_6);

    let planar = planar_ray_trace(&ping, &svp, &identity, &identity).unwrap();
    assert!(planar.point.z_depth > 50.0, "ray must pass the first boundary");
    assert!(planar.point.z_depth < 200.0, "tail must not reach the profile's base");

    let total_time: f64 = planar.layer_travel_times().iter().sum();
    assert_close(total_time, 0.15, TIME_TOL, "travel time closure");
}

#[test]
/// Transducer below deepest sample: Step 1 is skipped (no sample above
/// the transducer to seed from) and Step 2 is empty (no interior layer
/// remains below the transducer), so the full budget is spent on the
/// straight-line tail at the surface speed.
fn transducer_below_deepest_sample() {
    let svp = SoundSpeedProfile::new(vec![0.0, 100.0], vec![1500.0, 1480.0]).unwrap();
    let ping = StaticPing::new(0.08, 1475.0, 150.0, 0.0, 0.0);
    let identity = Rotation3::identity();

    let planar = planar_ray_trace(&ping, &svp, &identity, &identity).unwrap();
    assert_eq!(planar.segments.len(), 1, "only the terminal tail should be committed");
    assert_close(planar.point.z_depth, 1475.0 * 0.04, 1e-6, "tail depth at surface speed");
}

#[test]
/// Constant-gradient layer: the closed-form circular-arc formula of 4.A
/// must reproduce a first-order numerical integration of
/// `dz/dt = c(z) sin(beta(z))` over the same span, to within a
/// centimeter. This exercises the primitive directly (not the
/// integrator's commit/tail bookkeeping), since the closed form
/// only covers a layer crossed in full -- a budget that expires
/// mid-layer falls back to the straight-line tail by design and is
/// covered separately by `two_layer_refraction`.
fn constant_gradient_matches_numerical_integration() {
    let c0 = 1500.0;
    let c1 = 1520.0;
    let gradient = (c1 - c0) / 1000.0;
    // A near-vertical beam: depression of exactly pi/2 would make the
    // layer's radius of curvature infinite (k == 0), so k is taken from
    // the same floating-point cos(pi/2) the launch geometry would
    // produce, which is small but nonzero.
    let k = std::f64::consts::FRAC_PI_2.cos() / c0;

    let closed_form = layer::constant_gradient(c0, c1, gradient, k, 0).unwrap();

    let dt = 1e-5;
    let mut z = 0.0_f64;
    let mut t = 0.0_f64;
    while t < closed_form.delta_time() {
        let c = c0 + gradient * z;
        let cos_beta = k * c;
        let sin_beta = (1.0 - cos_beta * cos_beta).max(0.0).sqrt();
        z += c * sin_beta * dt;
        t += dt;
    }

    assert_close(closed_form.delta_depth(), z, 1e-2, "numerical vs closed-form depth");
}

#[test]
/// Degenerate SVP: two consecutive samples at the same depth is rejected
/// as `InvalidSvp`, identifying the conflicting depths.
fn degenerate_svp_is_rejected() {
    let err = SoundSpeedProfile::new(vec![50.0, 50.0], vec![1500.0, 1490.0]).unwrap_err();
    assert_eq!(
        err,
        Error::InvalidSvp {
            depth_a: 50.0,
            depth_b: 50.0
        }
    );
}
