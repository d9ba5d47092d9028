//! The ray integrator: the spine of the core.
//!
//! Walks the sound-velocity profile from the transducer depth, committing
//! one closed-form layer segment at a time (via [`crate::layer`]) until
//! the one-way travel-time budget is exhausted, then closes the ray with
//! a straight-line terminal tail.

use crate::error::Result;
use crate::layer;
use crate::output::LayerSegment;
use crate::ping::Ping;
use crate::svp::Svp;

/// The accumulated result of integrating a ray through the SVP: the
/// final horizontal range and depth, plus (when requested) the ordered
/// list of committed per-layer segments.
#[derive(Clone, Debug, PartialEq)]
pub struct IntegrationResult {
    /// Accumulated horizontal range, in meters.
    pub x_range: f64,
    /// Accumulated depth, in meters.
    pub z_depth: f64,
    /// Per-layer segments in integration order. Empty unless
    /// `collect_segments` was requested (see [`integrate`]); a planar
    /// trace needs these, a 3-D trace does not.
    pub segments: Vec<LayerSegment>,
}

/// Integrate a ray from the transducer down through `svp`, stopping at
/// the one-way travel-time budget implied by `ping`.
///
/// # Arguments
/// `ping` : `&dyn Ping`
/// - the shot: supplies the one-way travel-time budget, the surface
///   sound speed, and the transducer depth.
///
/// `svp` : `&dyn Svp`
/// - the layered medium to integrate through.
///
/// `depression` : `f64`
/// - the launch depression angle `beta_0`, in radians, positive
///   downward (from [`crate::launch::resolve`]).
///
/// `gradient_epsilon` : `f64`
/// - the constant-celerity/constant-gradient classification tolerance
///   (see [`crate::config::TraceConfig`]).
///
/// `time_closure_tolerance` : `f64`
/// - the tolerance, in seconds, the travel-time closure assertion below
///   is checked against; never used by the closed-form arithmetic itself
///   (see [`crate::config::TraceConfig::time_closure_tolerance`]).
///
/// `collect_segments` : `bool`
/// - when `true`, every committed segment (Step-1 seed, interior layers,
///   Step-3 tail) is appended to the returned segment list, in
///   integration order; the 3-D-only caller can skip this allocation.
///
/// # Errors
/// `Error::InvalidGeometry` if any committed layer would require the
/// beam to turn horizontal (total internal reflection).
///
/// # Notes on the Step-1 seed / Step-2 predicate.
/// If the transducer-to-first-boundary seed (Step 1) would overshoot the
/// one-way budget, it is *not* committed, and the travel-time accumulator
/// is *not* left carrying the seed's uncommitted time into Step 2's loop
/// predicate -- a naive implementation could let time that was never
/// spent count against the remaining budget. Step 2 starts from a clean
/// `t_cum == 0.0` at `i == j0` regardless of whether the seed was
/// skipped, and the terminal tail (Step 3) always closes the budget
/// exactly.
pub fn integrate(
    ping: &dyn Ping,
    svp: &dyn Svp,
    depression: f64,
    gradient_epsilon: f64,
    time_closure_tolerance: f64,
    collect_segments: bool,
) -> Result<IntegrationResult> {
    let one_way_budget = ping.two_way_travel_time() / 2.0;
    let c_surface = ping.surface_sound_speed();
    let transducer_depth = ping.transducer_depth();
    let k = depression.cos() / c_surface;

    let mut x_range = 0.0;
    let mut z_depth = 0.0;
    let mut segments = Vec::new();

    if one_way_budget <= 0.0 {
        tracing::debug!("zero or negative one-way budget: degenerate point at transducer");
        return Ok(IntegrationResult {
            x_range,
            z_depth,
            segments,
        });
    }

    let n = svp.size();
    let depths = svp.depths();
    let speeds = svp.speeds();
    let gradients = svp.sound_speed_gradient();
    let j0 = svp.layer_index_for_depth(transducer_depth);

    let mut t_cum = 0.0_f64;
    let mut i = j0;

    // Step 1: transducer-to-first-boundary seed.
    if j0 < n {
        let target_depth = depths[j0];
        let dz_to_boundary = target_depth - transducer_depth;
        if dz_to_boundary > 0.0 {
            let g_star = (speeds[j0] - c_surface) / dz_to_boundary;
            let seed = layer::propagate(
                transducer_depth,
                target_depth,
                c_surface,
                speeds[j0],
                g_star,
                k,
                gradient_epsilon,
                j0,
            )?;
            if t_cum + seed.delta_time() <= one_way_budget {
                x_range += seed.delta_range();
                z_depth += seed.delta_depth();
                t_cum += seed.delta_time();
                if collect_segments {
                    segments.push(seed);
                }
                tracing::debug!(layer = j0, dt = seed.delta_time(), "committed Step-1 seed");
            } else {
                tracing::warn!(
                    layer = j0,
                    seed_dt = seed.delta_time(),
                    budget = one_way_budget,
                    "Step-1 seed exceeds one-way budget, skipping with a clean accumulator"
                );
            }
        }
    }

    // Step 2: interior layers.
    while i + 1 < n {
        let seg = layer::propagate(
            depths[i],
            depths[i + 1],
            speeds[i],
            speeds[i + 1],
            gradients[i],
            k,
            gradient_epsilon,
            i,
        )?;
        if t_cum + seg.delta_time() <= one_way_budget {
            x_range += seg.delta_range();
            z_depth += seg.delta_depth();
            t_cum += seg.delta_time();
            if collect_segments {
                segments.push(seg);
            }
            tracing::debug!(layer = i, dt = seg.delta_time(), "committed interior layer");
            i += 1;
        } else {
            break;
        }
    }

    // Step 3: terminal tail.
    let tau = one_way_budget - t_cum;
    let c_last = if j0 < n { speeds[i] } else { c_surface };
    if tau > 0.0 {
        let tail = layer::terminal_tail(c_last, tau, k, i)?;
        x_range += tail.delta_range();
        z_depth += tail.delta_depth();
        if collect_segments {
            segments.push(tail);
        }
        t_cum += tail.delta_time();
        tracing::debug!(layer = i, tau, "committed terminal tail, budget closed");
    }

    let closure_error = (t_cum - one_way_budget).abs();
    debug_assert!(
        closure_error <= time_closure_tolerance,
        "travel-time closure exceeded tolerance: {closure_error} > {time_closure_tolerance}"
    );
    tracing::debug!(
        closure_error,
        time_closure_tolerance,
        "travel-time budget closure checked"
    );

    Ok(IntegrationResult {
        x_range,
        z_depth,
        segments,
    })
}
