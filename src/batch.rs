//! Tracing a bundle of independent pings in parallel.
//!
//! Every entry point in [`crate::trace`] is a pure function of its
//! inputs, so a bundle of pings against a shared, read-only [`Svp`] can
//! be dispatched across a `rayon` thread pool: each worker owns its own
//! `Ping` and output slot, and the profile is shared by reference.

use rayon::prelude::*;

use crate::error::Result;
use crate::output::NavPoint;
use crate::ping::Ping;
use crate::rotation::Rotation3;
use crate::svp::Svp;
use crate::trace::ray_trace;

/// Trace every ping in `pings` against the same `svp`/`boresight`/
/// `imu2nav`, in parallel, preserving input order in the output.
///
/// A failure on one ping (e.g. total internal reflection) does not
/// abort the others; it is reported at that ping's position.
pub fn trace_many<P: Ping + Sync>(
    pings: &[P],
    svp: &(dyn Svp + Sync),
    boresight: &Rotation3,
    imu2nav: &Rotation3,
) -> Vec<Result<NavPoint>> {
    pings
        .par_iter()
        .map(|ping| ray_trace(ping, svp, boresight, imu2nav))
        .collect()
}
