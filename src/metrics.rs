//! Derived per-player metrics and their normalisation onto the unit interval.
//!
//! The formulas are deliberately simple proxies for the familiar box-score statistics; they are
//! not the regulation definitions.

use serde::{Deserialize, Serialize};

pub const PER_CAP: f64 = 30.0;
pub const TRUE_SHOOTING_CAP: f64 = 1.0;
pub const AST_TO_TOV_CAP: f64 = 3.0;
pub const USAGE_CAP: f64 = 40.0;
pub const BPM_BOUND: f64 = 10.0;

/// Number of sub-metrics blended into a player's score.
const COMPONENTS: f64 = 5.0;

/// Rounds `value` to `places` decimal places, resolving ties to the even neighbour.
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round_ties_even() / scale
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub per: f64,
    pub true_shooting: f64,
    pub ast_to_tov: f64,
    pub usage: f64,
    pub bpm: f64,
}

/// [Metrics] mapped onto `[0, 1]` using fixed caps. BPM is mapped from `[-10, 10]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalisedMetrics {
    pub per: f64,
    pub true_shooting: f64,
    pub ast_to_tov: f64,
    pub usage: f64,
    pub bpm: f64,
}
impl NormalisedMetrics {
    /// Equal-weighted mean of the normalised components.
    pub fn score(&self) -> f64 {
        (self.per + self.true_shooting + self.ast_to_tov + self.usage + self.bpm) / COMPONENTS
    }
}

fn cap(value: f64, cap: f64) -> f64 {
    value.clamp(0.0, cap) / cap
}

impl From<&Metrics> for NormalisedMetrics {
    fn from(metrics: &Metrics) -> Self {
        Self {
            per: cap(metrics.per, PER_CAP),
            true_shooting: cap(metrics.true_shooting, TRUE_SHOOTING_CAP),
            ast_to_tov: cap(metrics.ast_to_tov, AST_TO_TOV_CAP),
            usage: cap(metrics.usage, USAGE_CAP),
            bpm: (metrics.bpm.clamp(-BPM_BOUND, BPM_BOUND) + BPM_BOUND) / (2.0 * BPM_BOUND),
        }
    }
}
