//! Error types for the ray-tracing core.

use thiserror::Error;

/// Errors produced while tracing a ray through a sound-velocity profile.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    /// Two consecutive SVP samples share the same depth, which makes the
    /// per-interval gradient (and the layer-index lookup) undefined.
    #[error("degenerate sound-velocity profile: samples at depths {depth_a} and {depth_b} coincide")]
    InvalidSvp {
        /// Depth of the first of the two conflicting samples, in meters.
        depth_a: f64,
        /// Depth of the second of the two conflicting samples, in meters.
        depth_b: f64,
    },
    /// The sound-velocity profile has no samples at all; there is nothing
    /// to trace through.
    #[error("sound-velocity profile is empty")]
    EmptySvp,
    /// `|k * c| >= 1` in some layer, so `sin(beta)` would be non-real: the
    /// beam has turned horizontal and the input ping is unphysical.
    #[error("total internal reflection in layer {layer}: |k * c| = {k_c} >= 1")]
    InvalidGeometry {
        /// Index of the layer (or the transducer seed, reported against
        /// the layer index the seed target belongs to) where the
        /// violation was detected.
        layer: usize,
        /// The offending value of `k * c`.
        k_c: f64,
    },
}

/// Crate-local result alias, as threaded through every public entry point.
pub type Result<T> = std::result::Result<T, Error>;
