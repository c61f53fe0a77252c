//! Configuration, per-step outcomes, and errors for the axis search.

use std::fmt;

use nalgebra::Vector3;

/// Search configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchCfg {
    /// Total axes in the result, locked ones included.
    pub axis_count: usize,
    /// Seed for the proposal stream (initial free axes and all jitters).
    pub seed: u32,
    /// Jitter radius of the first step.
    pub initial_perturbation: f64,
    /// Consecutive rejections tolerated before the radius halves.
    pub stagnation_limit: usize,
    /// The search stops once the radius is at or below this value.
    pub min_perturbation: f64,
}

impl SearchCfg {
    /// Unit-sphere tuning: long plateaus, stop at `1e-5`.
    pub fn sphere(axis_count: usize) -> Self {
        Self {
            axis_count,
            seed: 0,
            initial_perturbation: 2.0,
            stagnation_limit: 1000,
            min_perturbation: 1e-5,
        }
    }

    /// Image tuning: each evaluation is costly, so shrink sooner and keep
    /// halving down to the smallest normal `f32`.
    pub fn image(axis_count: usize) -> Self {
        Self {
            axis_count,
            seed: 0,
            initial_perturbation: 1.0,
            stagnation_limit: 100,
            min_perturbation: f32::MIN_POSITIVE as f64,
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }
}

/// What a single `AxisSearch::step` did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepOutcome {
    /// The proposal beat the incumbent and replaced it.
    Accepted { score: f64 },
    /// The proposal lost; the stagnation counter advanced.
    Rejected { score: f64 },
    /// The proposal lost and exhausted the stagnation budget; `perturbation`
    /// is the new (halved) radius.
    Shrunk { score: f64, perturbation: f64 },
}

/// Progress notifications forwarded by `AxisSearch::run_with`.
#[derive(Clone, Copy, Debug)]
pub enum SearchEvent<'a> {
    Improved {
        iteration: usize,
        score: f64,
        axes: &'a [Vector3<f64>],
    },
    Shrunk {
        iteration: usize,
        perturbation: f64,
    },
}

/// Final state of a finished search.
#[derive(Clone, Debug)]
pub struct SearchResult {
    pub axes: Vec<Vector3<f64>>,
    pub score: f64,
    /// Objective evaluations performed.
    pub iterations: usize,
    /// Proposals that replaced the incumbent.
    pub accepted: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    InvalidParams { reason: String },
}

impl SearchError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid search params: {reason}"),
        }
    }
}

impl std::error::Error for SearchError {}
