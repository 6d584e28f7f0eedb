// src/config.rs - Caller-facing configuration and entry-gate validation
use anyhow::{bail, Result};

use crate::models::weights::WeightOverrides;

/// Geo proximity score decays to zero at this distance unless overridden.
pub const DEFAULT_MAX_DISTANCE_METERS: f64 = 500.0;
/// Spatial candidate window handed to the retriever, in degrees of
/// latitude/longitude (roughly 1.1 km at the equator).
pub const DEFAULT_CANDIDATE_WINDOW_DEGREES: f64 = 0.01;
/// Total scores at or above this land in the `warn` bucket.
pub const DEFAULT_WARN_CUTOFF: f64 = 0.50;
/// Total scores at or above this land in the `high` bucket; more than one
/// high-tier candidate flags the check as ambiguous.
pub const DEFAULT_HIGH_CUTOFF: f64 = 0.85;

/// Per-invocation configuration. The duplicate threshold is always
/// caller-supplied; everything else has a sensible default.
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Best total at or above this is declared a duplicate. Must be in [0,1].
    pub threshold: f64,
    pub max_distance_meters: f64,
    pub candidate_window_degrees: f64,
    pub warn_cutoff: f64,
    pub high_cutoff: f64,
    pub weights: WeightOverrides,
}

impl MatchConfig {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            max_distance_meters: DEFAULT_MAX_DISTANCE_METERS,
            candidate_window_degrees: DEFAULT_CANDIDATE_WINDOW_DEGREES,
            warn_cutoff: DEFAULT_WARN_CUTOFF,
            high_cutoff: DEFAULT_HIGH_CUTOFF,
            weights: WeightOverrides::default(),
        }
    }

    /// Rejects malformed configuration before any candidate is scored, so a
    /// bad threshold is not discovered halfway through a sweep. Weight
    /// overrides are validated separately once resolved into a profile.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            bail!("Duplicate threshold must be in [0,1], got {}", self.threshold);
        }
        if self.max_distance_meters <= 0.0 || !self.max_distance_meters.is_finite() {
            bail!(
                "max_distance_meters must be positive and finite, got {}",
                self.max_distance_meters
            );
        }
        if self.candidate_window_degrees <= 0.0 || !self.candidate_window_degrees.is_finite() {
            bail!(
                "candidate_window_degrees must be positive and finite, got {}",
                self.candidate_window_degrees
            );
        }
        if !(0.0..=1.0).contains(&self.warn_cutoff) || !(0.0..=1.0).contains(&self.high_cutoff) {
            bail!(
                "Similarity cutoffs must be in [0,1], got warn={} high={}",
                self.warn_cutoff,
                self.high_cutoff
            );
        }
        if self.warn_cutoff > self.high_cutoff {
            bail!(
                "warn cutoff {} exceeds high cutoff {}",
                self.warn_cutoff,
                self.high_cutoff
            );
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new(0.7)
    }
}
