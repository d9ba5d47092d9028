//! Acoustic ray-tracing core for hydrographic survey processing.
//!
//! Given a sonar ping (a measured two-way travel time and a pair of
//! sonar-frame launch angles), the vessel's orientation (a boresight and
//! an IMU-to-navigation rotation), and a sound-velocity profile of the
//! water column, this crate computes the geometric location of the
//! seabed return in a local North-East-Down navigation frame.
//!
//! The physics: Snell's-law refraction through a piecewise-layered
//! medium with two propagation regimes (constant celerity and constant
//! gradient, [`layer`]), integrated layer by layer ([`integrator`]) until
//! the one-way travel-time budget is exhausted, then closed with a
//! straight-line tail. [`launch`] maps the sonar-frame beam direction
//! into a navigation-frame azimuth and depression; [`output`] assembles
//! either a single 3-D point or a planar `(range, depth)` decomposition
//! with per-layer segments.
//!
//! Out of scope, consumed here only through the [`ping::Ping`] and
//! [`svp::Svp`] traits: parsing manufacturer sonar formats, SVP
//! acquisition/smoothing, vessel attitude fusion, geodetic transforms,
//! sidescan imagery, and any CLI or persistence. Every entry point is a
//! pure function of its inputs -- no I/O, no state carried between
//! calls -- so independent ray traces may be dispatched across threads
//! as long as each thread owns its own [`ping::Ping`] and output buffers;
//! [`svp::Svp`] is read-only and may be shared by reference (see
//! [`batch::trace_many`] for a `rayon`-backed bundle helper). An output
//! may optionally be serialized to json via [`write_json::WriteJson`];
//! the core itself never writes to disk.

#![deny(missing_docs)]

pub mod batch;
pub mod config;
pub mod error;
pub mod integrator;
pub mod launch;
pub mod layer;
pub mod output;
pub mod ping;
pub mod rotation;
pub mod svp;
pub mod trace;
pub mod write_json;

pub use error::{Error, Result};
pub use output::{LayerSegment, NavPoint, PlanarPoint, PlanarTrace};
pub use ping::{Ping, StaticPing};
pub use rotation::{Rotation3, Vec3};
pub use svp::{SoundSpeedProfile, Svp};
pub use trace::{planar_ray_trace, planar_ray_trace_with_config, ray_trace, ray_trace_with_config};
pub use write_json::WriteJson;
