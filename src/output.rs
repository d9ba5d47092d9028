//! Output shapes assembled from an accumulated ray.
//!
//! Two forms are specified: a single 3-D navigation-frame point, and a
//! planar `(range, depth)` decomposition accompanied by the per-layer
//! segments and travel times that produced it.

use serde::{Deserialize, Serialize};

/// A single committed layer's contribution to the ray, in integration
/// order: a `(delta_range, delta_depth)` pair plus the travel time it
/// consumed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayerSegment {
    delta_range: f64,
    delta_depth: f64,
    delta_time: f64,
}

impl LayerSegment {
    /// Construct a segment from its three scalar components.
    pub fn new(delta_range: f64, delta_depth: f64, delta_time: f64) -> Self {
        LayerSegment {
            delta_range,
            delta_depth,
            delta_time,
        }
    }

    /// Horizontal range covered by this layer, in meters.
    pub fn delta_range(&self) -> f64 {
        self.delta_range
    }

    /// Depth covered by this layer, in meters.
    pub fn delta_depth(&self) -> f64 {
        self.delta_depth
    }

    /// Travel time consumed by this layer, in seconds.
    pub fn delta_time(&self) -> f64 {
        self.delta_time
    }
}

/// A 3-D point in the local navigation (North-East-Down) frame, in
/// meters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavPoint {
    /// North component, in meters.
    pub x_n: f64,
    /// East component, in meters.
    pub y_e: f64,
    /// Down component, in meters.
    pub z_d: f64,
}

/// A 2-D `(range, depth)` point, before azimuthal orientation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanarPoint {
    /// Horizontal range from the transducer, in meters.
    pub x_range: f64,
    /// Depth below the surface, in meters.
    pub z_depth: f64,
}

/// The planar-mode result: the final `(range, depth)` point, plus the
/// ordered list of per-layer segments that produced it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanarTrace {
    /// The accumulated `(range, depth)` point.
    pub point: PlanarPoint,
    /// Per-layer segments, in integration order (Step-1 seed, interior
    /// layers, Step-3 tail).
    pub segments: Vec<LayerSegment>,
}

impl PlanarTrace {
    /// Per-layer travel times, in integration order; `sum == T` exactly
    /// (the one-way travel-time budget).
    pub fn layer_travel_times(&self) -> Vec<f64> {
        self.segments.iter().map(LayerSegment::delta_time).collect()
    }
}

/// Assemble the 3-D navigation-frame point from the accumulated
/// `(X, Z)` range/depth and the azimuth resolved by
/// [`crate::launch::resolve`].
///
/// The horizontal range `X` is projected onto the NED horizontal plane
/// by azimuth; depth flows straight into the D axis.
pub fn shape_3d(x_range: f64, z_depth: f64, sin_az: f64, cos_az: f64) -> NavPoint {
    NavPoint {
        x_n: x_range * sin_az,
        y_e: x_range * cos_az,
        z_d: z_depth,
    }
}

/// Assemble the planar-mode result from the accumulated `(X, Z)` and the
/// ordered segment list produced during integration.
pub fn shape_planar(x_range: f64, z_depth: f64, segments: Vec<LayerSegment>) -> PlanarTrace {
    PlanarTrace {
        point: PlanarPoint { x_range, z_depth },
        segments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_3d_projects_range_by_azimuth() {
        let p = shape_3d(100.0, 50.0, 0.6, 0.8);
        assert_eq!(p.x_n, 60.0);
        assert_eq!(p.y_e, 80.0);
        assert_eq!(p.z_d, 50.0);
    }

    #[test]
    fn planar_travel_times_follow_segment_order() {
        let segs = vec![
            LayerSegment::new(1.0, 2.0, 0.1),
            LayerSegment::new(3.0, 4.0, 0.2),
        ];
        let trace = shape_planar(4.0, 6.0, segs);
        assert_eq!(trace.layer_travel_times(), vec![0.1, 0.2]);
        assert_eq!(trace.point.x_range, 4.0);
        assert_eq!(trace.point.z_depth, 6.0);
    }
}
