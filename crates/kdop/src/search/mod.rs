//! Perturb-and-shrink search over k-DOP axis directions.
//!
//! Purpose
//! - Find `axis_count` unit directions (some optionally locked) that minimize
//!   an `Objective`, e.g. the k-DOP volume around the unit sphere or the mean
//!   volume over image color neighborhoods.
//!
//! Why this design
//! - Greedy random search: each step jitters every free axis of the best set
//!   by `perturbation · (uniform sphere direction)` and renormalizes. Strict
//!   improvements replace the best set; after `stagnation_limit` consecutive
//!   failures the perturbation halves. The run ends once it drops to
//!   `min_perturbation`.
//! - All randomness flows through one explicit `Pcg` seeded from the config,
//!   so a run is reproducible whenever its objective is.
//! - The driver never logs. `AxisSearch::run_with` hands `SearchEvent`s to a
//!   caller closure; the CLI turns them into `tracing` records.
//!
//! Layout
//! - `types.rs` (config, outcomes, errors), `driver.rs` (the state machine).

mod driver;
mod types;

pub use driver::AxisSearch;
pub use types::{SearchCfg, SearchError, SearchEvent, SearchResult, StepOutcome};
