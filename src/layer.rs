//! Closed-form propagation across a single sound-velocity-profile layer.
//!
//! Three pure numeric primitives, parameterised by Snell's constant
//! `k = cos(beta_0) / c_0`. By Snell's law, at any depth with local speed
//! `c`, `cos(beta) = k * c`. None of these functions hold state; they are
//! the arithmetic the integrator in [`crate::integrator`] drives layer by
//! layer.

use crate::error::{Error, Result};
use crate::output::LayerSegment;

/// Below this magnitude (s^-1), [`classify`] treats a layer as
/// constant-celerity rather than constant-gradient. Mirrors
/// [`crate::config::TraceConfig::gradient_epsilon`]'s default.
pub const GRADIENT_EPSILON: f64 = 1e-6;

/// The propagation regime a layer is driven with.
///
/// This is per-layer data, not a per-call mode: a direct branch on
/// `|gradient| < epsilon` is clearer and faster than a virtual dispatch
/// between two closed, mutually exclusive regimes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Regime {
    /// The layer's sound speed is (effectively) constant; the ray
    /// travels in a straight line.
    ConstantCelerity,
    /// The layer's sound speed varies linearly with depth; the ray is a
    /// circular arc.
    ConstantGradient,
}

/// Decide which regime a layer's gradient falls into.
///
/// # Arguments
/// `gradient` : `f64`
/// - the layer's sound-speed gradient, in (m/s) per meter.
///
/// `epsilon` : `f64`
/// - the classification tolerance; below this magnitude the layer is
///   constant-celerity.
pub fn classify(gradient: f64, epsilon: f64) -> Regime {
    if gradient.abs() < epsilon {
        Regime::ConstantCelerity
    } else {
        Regime::ConstantGradient
    }
}

/// `sin(beta)` given `cos(beta) = k * c`, checked for total internal
/// reflection.
///
/// # Errors
/// `Error::InvalidGeometry` when `|k * c| >= 1`, i.e. `sin(beta)` would be
/// non-real: the beam has turned horizontal at this layer.
fn sin_beta(k: f64, c: f64, layer: usize) -> Result<f64> {
    let cos_beta = k * c;
    let sin_sq = 1.0 - cos_beta * cos_beta;
    if sin_sq <= 0.0 {
        return Err(Error::InvalidGeometry {
            layer,
            k_c: cos_beta,
        });
    }
    Ok(sin_sq.sqrt())
}

/// Propagate across a layer of constant sound speed `c` from depth `z0`
/// to depth `z1`.
///
/// # Arguments
/// `z0`, `z1` : `f64`
/// - top and bottom depth of the layer, in meters.
///
/// `c` : `f64`
/// - the layer's (constant) sound speed, in meters per second.
///
/// `k` : `f64`
/// - Snell's constant for this ray.
///
/// `layer` : `usize`
/// - the layer index, carried only for error reporting.
///
/// # Errors
/// `Error::InvalidGeometry` when the ray would turn horizontal in this
/// layer (total internal reflection).
pub fn constant_celerity(z0: f64, z1: f64, c: f64, k: f64, layer: usize) -> Result<LayerSegment> {
    let dz = z1 - z0;
    let sin_b = sin_beta(k, c, layer)?;
    let dt = dz / (c * sin_b);
    let dr = k * c * c * dt;
    Ok(LayerSegment::new(dr, dz, dt))
}

/// Propagate across a layer with linear sound-speed gradient `g`, from
/// top speed `c0` to bottom speed `c1`. The ray is a circular arc of
/// radius `R = 1 / (k * g)`.
///
/// The radius is computed from the *signed* gradient, not its magnitude:
/// `d(cos beta)/dz = k * g` falls out of differentiating Snell's law
/// along the path, and keeping `g`'s sign is what makes `Delta z` come
/// out equal to `z1 - z0` (the layer's own depth span) for a layer with
/// a negative gradient, not just a positive one. Using `|g|` here (a
/// literal reading some summaries of this formula give) flips the sign
/// of `Delta z` whenever sound speed decreases with depth; see
/// `DESIGN.md` for the worked counter-example.
///
/// # Arguments
/// `c0`, `c1` : `f64`
/// - sound speed at the top and bottom of the layer, in meters per second.
///
/// `g` : `f64`
/// - the layer's sound-speed gradient, in (m/s) per meter. Must satisfy
///   `|g| >= GRADIENT_EPSILON`; see [`classify`].
///
/// `k` : `f64`
/// - Snell's constant for this ray.
///
/// `layer` : `usize`
/// - the layer index, carried only for error reporting.
///
/// # Errors
/// `Error::InvalidGeometry` when the ray would turn horizontal at either
/// boundary of this layer.
pub fn constant_gradient(c0: f64, c1: f64, g: f64, k: f64, layer: usize) -> Result<LayerSegment> {
    let radius = 1.0 / (k * g);
    let cos_b0 = k * c0;
    let cos_b1 = k * c1;
    let sin_b0 = sin_beta(k, c0, layer)?;
    let sin_b1 = sin_beta(k, c1, layer)?;

    let dt = ((1.0 / g) * ((c1 / c0) * (1.0 + sin_b0) / (1.0 + sin_b1)).ln()).abs();
    let dz = radius * (cos_b1 - cos_b0);
    let dr = radius * (sin_b0 - sin_b1);
    Ok(LayerSegment::new(dr, dz, dt))
}

/// Dispatch to [`constant_celerity`] or [`constant_gradient`] depending on
/// `gradient`'s magnitude relative to `epsilon`. For the constant-celerity
/// branch, `top_speed` is used as the (constant) layer speed: a
/// near-zero gradient is treated as no gradient at all.
#[allow(clippy::too_many_arguments)]
pub fn propagate(
    z0: f64,
    z1: f64,
    top_speed: f64,
    bottom_speed: f64,
    gradient: f64,
    k: f64,
    epsilon: f64,
    layer: usize,
) -> Result<LayerSegment> {
    match classify(gradient, epsilon) {
        Regime::ConstantCelerity => constant_celerity(z0, z1, top_speed, k, layer),
        Regime::ConstantGradient => constant_gradient(top_speed, bottom_speed, gradient, k, layer),
    }
}

/// The terminal straight-line tail: after the last complete layer, the
/// remaining one-way budget `tau` is traversed at speed `c_last` without
/// further refraction.
///
/// # Arguments
/// `c_last` : `f64`
/// - sound speed at the depth the tail starts from, in meters per second.
///
/// `tau` : `f64`
/// - remaining one-way travel-time budget, in seconds.
///
/// `k` : `f64`
/// - Snell's constant for this ray.
///
/// `layer` : `usize`
/// - the layer index the tail starts from, carried only for error
///   reporting.
///
/// # Errors
/// `Error::InvalidGeometry` when the ray would be horizontal at `c_last`.
pub fn terminal_tail(c_last: f64, tau: f64, k: f64, layer: usize) -> Result<LayerSegment> {
    let cos_b = k * c_last;
    let sin_b = sin_beta(k, c_last, layer)?;
    let dr = c_last * tau * cos_b;
    let dz = c_last * tau * sin_b;
    Ok(LayerSegment::new(dr, dz, tau))
}
