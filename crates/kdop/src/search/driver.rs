//! The search state machine: initialize, then propose/evaluate/decide per step.

use nalgebra::Vector3;

use super::types::{SearchCfg, SearchError, SearchEvent, SearchResult, StepOutcome};
use crate::objective::Objective;
use crate::rng::Pcg;

/// Greedy perturb-and-shrink minimizer over unit axis sets.
///
/// The first `locked` axes are fixed for the whole run; the rest are free.
pub struct AxisSearch<O> {
    cfg: SearchCfg,
    objective: O,
    rng: Pcg,
    locked: usize,
    best_axes: Vec<Vector3<f64>>,
    best_score: f64,
    perturbation: f64,
    stagnation: usize,
    iterations: usize,
    accepted: usize,
}

impl<O: Objective> AxisSearch<O> {
    /// Validate `cfg`, normalize `locked`, and draw the free axes from the
    /// sphere. No objective evaluation happens here.
    pub fn new(cfg: SearchCfg, locked: &[Vector3<f64>], objective: O) -> Result<Self, SearchError> {
        validate(&cfg, locked)?;
        let mut rng = Pcg::new(cfg.seed);
        let mut best_axes: Vec<Vector3<f64>> = locked.iter().map(|a| a.normalize()).collect();
        while best_axes.len() < cfg.axis_count {
            best_axes.push(rng.sample_sphere());
        }
        Ok(Self {
            cfg,
            objective,
            rng,
            locked: locked.len(),
            best_axes,
            best_score: f64::INFINITY,
            perturbation: cfg.initial_perturbation,
            stagnation: 0,
            iterations: 0,
            accepted: 0,
        })
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.perturbation <= self.cfg.min_perturbation
    }

    #[inline]
    pub fn best_axes(&self) -> &[Vector3<f64>] {
        &self.best_axes
    }

    /// `+inf` until the first step.
    #[inline]
    pub fn best_score(&self) -> f64 {
        self.best_score
    }

    #[inline]
    pub fn perturbation(&self) -> f64 {
        self.perturbation
    }

    #[inline]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    #[inline]
    pub fn locked_count(&self) -> usize {
        self.locked
    }

    /// One propose → evaluate → accept/reject cycle.
    pub fn step(&mut self) -> StepOutcome {
        let candidate = self.propose();
        let score = self.objective.evaluate(&candidate);
        self.iterations += 1;

        // NaN never compares below the incumbent, so it counts as a rejection.
        if score < self.best_score {
            self.best_axes = candidate;
            self.best_score = score;
            self.stagnation = 0;
            self.accepted += 1;
            return StepOutcome::Accepted { score };
        }

        self.stagnation += 1;
        if self.stagnation > self.cfg.stagnation_limit {
            self.perturbation *= 0.5;
            self.stagnation = 0;
            return StepOutcome::Shrunk {
                score,
                perturbation: self.perturbation,
            };
        }
        StepOutcome::Rejected { score }
    }

    /// Step until finished.
    pub fn run(self) -> SearchResult {
        self.run_with(|_| {})
    }

    /// Step until finished, reporting improvements and shrinks to `on_event`.
    pub fn run_with<F>(mut self, mut on_event: F) -> SearchResult
    where
        F: FnMut(SearchEvent<'_>),
    {
        while !self.is_finished() {
            match self.step() {
                StepOutcome::Accepted { score } => on_event(SearchEvent::Improved {
                    iteration: self.iterations,
                    score,
                    axes: &self.best_axes,
                }),
                StepOutcome::Shrunk { perturbation, .. } => on_event(SearchEvent::Shrunk {
                    iteration: self.iterations,
                    perturbation,
                }),
                StepOutcome::Rejected { .. } => {}
            }
        }
        self.into_result()
    }

    pub fn into_result(self) -> SearchResult {
        SearchResult {
            axes: self.best_axes,
            score: self.best_score,
            iterations: self.iterations,
            accepted: self.accepted,
        }
    }

    /// Jitter every free axis of the incumbent. A jitter that cancels the
    /// axis exactly leaves it unchanged.
    fn propose(&mut self) -> Vec<Vector3<f64>> {
        let mut next = self.best_axes.clone();
        for axis in next.iter_mut().skip(self.locked) {
            let moved = *axis + self.perturbation * self.rng.sample_sphere();
            if let Some(unit) = moved.try_normalize(0.0) {
                *axis = unit;
            }
        }
        next
    }
}

fn validate(cfg: &SearchCfg, locked: &[Vector3<f64>]) -> Result<(), SearchError> {
    if cfg.axis_count == 0 {
        return Err(SearchError::invalid("axis_count must be at least 1"));
    }
    if locked.len() > cfg.axis_count {
        return Err(SearchError::invalid(format!(
            "{} locked axes exceed axis_count {}",
            locked.len(),
            cfg.axis_count
        )));
    }
    for (i, a) in locked.iter().enumerate() {
        let n = a.norm();
        if !n.is_finite() || n == 0.0 {
            return Err(SearchError::invalid(format!(
                "locked axis {i} has no direction (length {n})"
            )));
        }
    }
    let positive = |x: f64| x.is_finite() && x > 0.0;
    if !positive(cfg.initial_perturbation) || !positive(cfg.min_perturbation) {
        return Err(SearchError::invalid(
            "perturbation limits must be positive and finite",
        ));
    }
    if cfg.initial_perturbation <= cfg.min_perturbation {
        return Err(SearchError::invalid(format!(
            "initial_perturbation {} must exceed min_perturbation {}",
            cfg.initial_perturbation, cfg.min_perturbation
        )));
    }
    Ok(())
}
