//! Tuning knobs for the ray integrator.
//!
//! The closed-form propagation primitives in [`crate::layer`] are exact
//! and carry no configuration of their own; the only "dials" the core
//! exposes are the tolerance used to classify a layer as constant-celerity
//! vs. constant-gradient, and the tolerance used by the integrator's
//! internal travel-time-closure checks.

use derive_builder::Builder;

/// Tunable tolerances for a ray trace.
///
/// # Examples
/// ```
/// use sonarbeam_trace::config::TraceConfig;
///
/// let cfg = TraceConfig::default();
/// assert_eq!(cfg.gradient_epsilon(), 1e-6);
/// ```
#[derive(Builder, Clone, Copy, Debug, PartialEq)]
pub struct TraceConfig {
    /// Below this magnitude (s^-1) a layer's sound-speed gradient is
    /// treated as zero and propagated with the constant-celerity
    /// primitive instead of the constant-gradient one.
    #[builder(default = "1e-6")]
    gradient_epsilon: f64,
    /// Tolerance (seconds) used only by the integrator's own travel-time
    /// closure assertions and diagnostic logging; never by the closed-form
    /// arithmetic itself.
    #[builder(default = "1e-9")]
    time_closure_tolerance: f64,
}

impl Default for TraceConfig {
    fn default() -> Self {
        TraceConfigBuilder::default()
            .build()
            .expect("all TraceConfig fields carry defaults")
    }
}

impl TraceConfig {
    /// Start building a custom [`TraceConfig`].
    pub fn builder() -> TraceConfigBuilder {
        TraceConfigBuilder::default()
    }

    /// The gradient-classification tolerance, in s^-1.
    pub fn gradient_epsilon(&self) -> f64 {
        self.gradient_epsilon
    }

    /// The travel-time closure tolerance, in seconds.
    pub fn time_closure_tolerance(&self) -> f64 {
        self.time_closure_tolerance
    }
}
