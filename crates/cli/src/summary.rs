//! Result files of a finished search: the JSON summary and its
//! `<stem>.provenance.json` sidecar.

use anyhow::{Context, Result};
use kdop::search::SearchResult;
use kdop::Vec3;
use serde::Serialize;
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub mode: &'static str,
    pub axis_count: usize,
    pub locked: usize,
    pub seed: u32,
    pub score: f64,
    pub iterations: usize,
    pub accepted: usize,
    pub axes: Vec<[f64; 3]>,
}

impl RunSummary {
    /// `axes` are the axes as printed (snapped, for the sphere variant).
    pub fn new(
        mode: &'static str,
        locked: usize,
        seed: u32,
        result: &SearchResult,
        axes: &[Vec3<f64>],
    ) -> Self {
        Self {
            mode,
            axis_count: axes.len(),
            locked,
            seed,
            score: result.score,
            iterations: result.iterations,
            accepted: result.accepted,
            axes: axes.iter().map(|a| [a.x, a.y, a.z]).collect(),
        }
    }
}

/// Where and from which build a summary was written.
#[derive(Debug, Serialize)]
struct Provenance<'a> {
    code_rev: String,
    kdop_version: &'static str,
    callsite: Callsite,
    mode: &'static str,
    params: &'a serde_json::Value,
    score: f64,
    outputs: [String; 1],
}

#[derive(Debug, Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

/// Write `summary` to `out` and the provenance sidecar next to it. Returns the
/// sidecar path. The recorded call site is the caller of this function.
#[track_caller]
pub fn write_summary(
    out: &Path,
    summary: &RunSummary,
    params: serde_json::Value,
) -> Result<PathBuf> {
    let caller = Location::caller();
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out, serde_json::to_vec_pretty(summary)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let record = Provenance {
        code_rev: code_rev(),
        kdop_version: kdop::VERSION,
        callsite: Callsite {
            file: caller.file(),
            line: caller.line(),
        },
        mode: summary.mode,
        params: &params,
        score: summary.score,
        outputs: [out.to_string_lossy().into_owned()],
    };
    let sidecar = sidecar_path(out);
    fs::write(&sidecar, serde_json::to_vec_pretty(&record)?)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    Ok(sidecar)
}

/// `runs/best.json` -> `runs/best.provenance.json`.
fn sidecar_path(out: &Path) -> PathBuf {
    let mut name = out
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("result"));
    name.push(".provenance.json");
    out.with_file_name(name)
}

/// `GIT_COMMIT` (build time, then run time) or `git rev-parse HEAD`;
/// `unknown` outside a checkout.
fn code_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty())
        .or_else(|| {
            Command::new("git")
                .args(["rev-parse", "HEAD"])
                .output()
                .ok()
                .filter(|out| out.status.success())
                .and_then(|out| String::from_utf8(out.stdout).ok())
                .map(|s| s.trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}
