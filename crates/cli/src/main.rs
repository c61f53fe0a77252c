use anyhow::{ensure, Context, Result};
use clap::{Args, Parser, Subcommand};
use kdop::api::{
    format_glsl_axes, snap_axes, AxisSearch, ColorImage, ExecMode, ImageObjective,
    ImageObjectiveCfg, SearchCfg, SearchEvent, SphereObjective,
};
use kdop::Vec3;
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod summary;

use summary::{write_summary, RunSummary};

/// Components below this magnitude are zeroed before printing sphere axes.
const SNAP_THRESHOLD: f64 = 5e-3;

#[derive(Parser)]
#[command(name = "kdop-axes", version)]
#[command(about = "Search k-DOP axis directions that keep bounding volumes small")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Minimize the volume of the k-DOP around the unit sphere
    Sphere {
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Minimize the mean k-DOP volume of 3x3 color neighborhoods of an image
    Image {
        /// PNG or JPEG input
        image: PathBuf,
        #[command(flatten)]
        common: CommonArgs,
        /// Base seed of the pixel samples (shared by every evaluation)
        #[arg(long, default_value_t = 0)]
        sample_seed: u32,
        /// Neighborhoods averaged per evaluation
        #[arg(long, default_value_t = 10_000)]
        samples: usize,
        /// Sum samples in order on one thread (bit-reproducible)
        #[arg(long)]
        sequential: bool,
    },
}

#[derive(Args)]
struct CommonArgs {
    /// Total number of axes, locked ones included
    axis_count: usize,
    /// Locked axes as a flat list `x y z [x y z ...]`; a short last group is zero-filled
    #[arg(allow_negative_numbers = true)]
    forced: Vec<f64>,
    /// Seed of the proposal stream
    #[arg(long, default_value_t = 0)]
    seed: u32,
    /// Write a JSON summary (and a provenance sidecar next to it)
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cmd = match Cmd::try_parse() {
        Ok(cmd) => cmd,
        Err(err) => {
            // --help/--version print to stdout and succeed; real parse errors exit 1.
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Sphere { common } => sphere(common),
        Action::Image {
            image,
            common,
            sample_seed,
            samples,
            sequential,
        } => run_image(image, common, sample_seed, samples, sequential),
    }
}

fn sphere(args: CommonArgs) -> Result<()> {
    let locked = parse_forced(&args.forced);
    tracing::info!(
        axis_count = args.axis_count,
        locked = locked.len(),
        seed = args.seed,
        "sphere search"
    );
    let cfg = SearchCfg::sphere(args.axis_count).with_seed(args.seed);
    let search =
        AxisSearch::new(cfg, &locked, SphereObjective).context("configuring sphere search")?;
    let result = search.run_with(log_event);
    let axes = snap_axes(&result.axes, SNAP_THRESHOLD);

    let header = format!("Finished with best volume = {:.6}", result.score);
    print!("{}", final_report(&header, &axes));

    if let Some(out) = &args.out {
        let summary = RunSummary::new("sphere", locked.len(), args.seed, &result, &axes);
        let params = json!({
            "axis_count": args.axis_count,
            "forced": args.forced,
            "seed": args.seed,
            "snap_threshold": SNAP_THRESHOLD,
        });
        let sidecar = write_summary(out, &summary, params)?;
        tracing::info!(out = %out.display(), sidecar = %sidecar.display(), "wrote summary");
    }
    Ok(())
}

fn run_image(
    path: PathBuf,
    args: CommonArgs,
    sample_seed: u32,
    samples: usize,
    sequential: bool,
) -> Result<()> {
    ensure!(samples > 0, "--samples must be at least 1");
    let rgb = image::open(&path)
        .with_context(|| format!("decoding image {}", path.display()))?
        .to_rgb8();
    let (w, h) = rgb.dimensions();
    let color = ColorImage::new(w as usize, h as usize, rgb.into_raw())?;
    let (width, height) = (color.width(), color.height());
    let mode = if sequential {
        ExecMode::Sequential
    } else {
        ExecMode::Parallel
    };
    let objective = ImageObjective::new(
        color,
        ImageObjectiveCfg {
            samples,
            seed: sample_seed,
            mode,
            ..ImageObjectiveCfg::default()
        },
    )
    .with_context(|| format!("preparing {}", path.display()))?;

    let locked = parse_forced(&args.forced);
    tracing::info!(
        image = %path.display(),
        width,
        height,
        axis_count = args.axis_count,
        locked = locked.len(),
        samples = objective.cfg().samples,
        mode = ?objective.cfg().mode,
        "image search"
    );
    let cfg = SearchCfg::image(args.axis_count).with_seed(args.seed);
    let search = AxisSearch::new(cfg, &locked, &objective).context("configuring image search")?;
    let result = search.run_with(log_event);

    print!("{}", final_report("Finished axis optimization", &result.axes));

    if let Some(out) = &args.out {
        let summary = RunSummary::new("image", locked.len(), args.seed, &result, &result.axes);
        let params = json!({
            "image": path.to_string_lossy(),
            "axis_count": args.axis_count,
            "forced": args.forced,
            "seed": args.seed,
            "sample_seed": sample_seed,
            "samples": samples,
            "sequential": sequential,
        });
        let sidecar = write_summary(out, &summary, params)?;
        tracing::info!(out = %out.display(), sidecar = %sidecar.display(), "wrote summary");
    }
    Ok(())
}

fn log_event(event: SearchEvent<'_>) {
    match event {
        SearchEvent::Improved {
            iteration,
            score,
            axes,
        } => {
            let axes: Vec<[f64; 3]> = axes.iter().map(|a| [a.x, a.y, a.z]).collect();
            tracing::info!(iteration, score, axes = ?axes, "picked new best axes");
        }
        SearchEvent::Shrunk {
            iteration,
            perturbation,
        } => tracing::info!(iteration, perturbation, "shrinking step size"),
    }
}

/// Stdout block of a finished run: one header line, then the shader axes.
fn final_report(header: &str, axes: &[Vec3<f64>]) -> String {
    format!("{header}\n{}", format_glsl_axes(axes))
}

/// Group a flat float list into axes of three; a short last group is
/// zero-filled.
fn parse_forced(values: &[f64]) -> Vec<Vec3<f64>> {
    values
        .chunks(3)
        .map(|c| {
            let get = |i: usize| c.get(i).copied().unwrap_or(0.0);
            Vec3::new(get(0), get(1), get(2))
        })
        .collect()
}
