//! Top-level ray-trace entry points.
//!
//! Each call here is a pure function of its four inputs: it performs no
//! I/O, holds no state between calls, and may be invoked concurrently
//! from independent threads as long as each thread owns its own `Ping`
//! and output buffers (the `Svp` and rotations may be shared by
//! reference). See the crate-level documentation for the concurrency
//! model.

use crate::config::TraceConfig;
use crate::error::Result;
use crate::integrator::{self, IntegrationResult};
use crate::launch::{self, LaunchGeometry};
use crate::output::{self, NavPoint, PlanarTrace};
use crate::ping::Ping;
use crate::rotation::Rotation3;
use crate::svp::Svp;

fn launch_and_integrate(
    ping: &dyn Ping,
    svp: &dyn Svp,
    boresight: &Rotation3,
    imu2nav: &Rotation3,
    config: &TraceConfig,
    collect_segments: bool,
) -> Result<(LaunchGeometry, IntegrationResult)> {
    let geometry = launch::resolve(
        ping.along_track_angle(),
        ping.across_track_angle(),
        boresight,
        imu2nav,
    );
    let accumulated = integrator::integrate(
        ping,
        svp,
        geometry.depression,
        config.gradient_epsilon(),
        config.time_closure_tolerance(),
        collect_segments,
    )?;
    Ok((geometry, accumulated))
}

/// Trace a single ping to a 3-D navigation-frame point.
///
/// # Arguments
/// `ping` : `&dyn Ping`
/// - the shot to trace.
///
/// `svp` : `&dyn Svp`
/// - the sound-velocity profile to refract through.
///
/// `boresight` : `&Rotation3`
/// - rotation from the mechanical sonar frame to the IMU frame.
///
/// `imu2nav` : `&Rotation3`
/// - rotation from the IMU frame to the local navigation frame.
///
/// # Errors
/// See [`crate::error::Error`]: an empty or degenerate SVP, or a layer
/// that would require the beam to turn horizontal.
pub fn ray_trace(
    ping: &dyn Ping,
    svp: &dyn Svp,
    boresight: &Rotation3,
    imu2nav: &Rotation3,
) -> Result<NavPoint> {
    ray_trace_with_config(ping, svp, boresight, imu2nav, &TraceConfig::default())
}

/// As [`ray_trace`], with an explicit [`TraceConfig`].
pub fn ray_trace_with_config(
    ping: &dyn Ping,
    svp: &dyn Svp,
    boresight: &Rotation3,
    imu2nav: &Rotation3,
    config: &TraceConfig,
) -> Result<NavPoint> {
    let (geometry, accumulated) =
        launch_and_integrate(ping, svp, boresight, imu2nav, config, false)?;
    Ok(output::shape_3d(
        accumulated.x_range,
        accumulated.z_depth,
        geometry.sin_az,
        geometry.cos_az,
    ))
}

/// Trace a single ping to a planar `(range, depth)` decomposition, with
/// the per-layer segments and travel times that produced it.
///
/// `planar_ray_trace` and [`ray_trace`] agree on `(X, Z)` for the same
/// inputs: `ray_trace(...) == (X * sin_az, X * cos_az, Z)` where
/// `sin_az`/`cos_az` are resolved the same way in both.
///
/// # Errors
/// See [`ray_trace`].
pub fn planar_ray_trace(
    ping: &dyn Ping,
    svp: &dyn Svp,
    boresight: &Rotation3,
    imu2nav: &Rotation3,
) -> Result<PlanarTrace> {
    planar_ray_trace_with_config(ping, svp, boresight, imu2nav, &TraceConfig::default())
}

/// As [`planar_ray_trace`], with an explicit [`TraceConfig`].
pub fn planar_ray_trace_with_config(
    ping: &dyn Ping,
    svp: &dyn Svp,
    boresight: &Rotation3,
    imu2nav: &Rotation3,
    config: &TraceConfig,
) -> Result<PlanarTrace> {
    let (_, accumulated) = launch_and_integrate(ping, svp, boresight, imu2nav, config, true)?;
    Ok(output::shape_planar(
        accumulated.x_range,
        accumulated.z_depth,
        accumulated.segments,
    ))
}
