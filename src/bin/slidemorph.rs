use std::{
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use serde::{Serialize, Serializer as _};

#[derive(Parser, Debug)]
#[command(name = "slidemorph", version)]
struct Cli {
    /// Log planning decisions (same as RUST_LOG=debug).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load a deck and report slide/element counts.
    Validate(DeckArgs),
    /// Print the directive list for one transition as JSON.
    Plan(TransitionArgs),
    /// Print the frame at one instant of a transition as JSON.
    Sample(SampleArgs),
    /// Print one JSON frame per step until the transition completes.
    Timeline(TimelineArgs),
}

#[derive(Args, Debug)]
struct DeckArgs {
    /// Deck JSON (`{"slides": [...]}`).
    #[arg(long)]
    deck: PathBuf,
}

#[derive(Args, Debug)]
struct TransitionArgs {
    #[command(flatten)]
    deck: DeckArgs,

    /// Source slide index (0-based).
    #[arg(long)]
    from: usize,

    /// Target slide index (0-based).
    #[arg(long)]
    to: usize,

    /// Options JSON; flags below override its fields.
    #[arg(long)]
    options: Option<PathBuf>,

    /// Collapse every directive into a short cross-fade.
    #[arg(long)]
    reduced_motion: bool,

    /// Delay between staggered elements.
    #[arg(long)]
    stagger_ms: Option<f64>,

    /// Per-element transition length.
    #[arg(long)]
    duration_ms: Option<f64>,

    /// Per-element opacity fade length.
    #[arg(long)]
    opacity_ms: Option<f64>,
}

#[derive(Args, Debug)]
struct SampleArgs {
    #[command(flatten)]
    transition: TransitionArgs,

    /// Milliseconds since the transition began.
    #[arg(long)]
    at: f64,
}

#[derive(Args, Debug)]
struct TimelineArgs {
    #[command(flatten)]
    transition: TransitionArgs,

    /// Milliseconds between frames.
    #[arg(long, default_value_t = 100.0)]
    step: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Plan(args) => cmd_plan(args),
        Command::Sample(args) => cmd_sample(args),
        Command::Timeline(args) => cmd_timeline(args),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_deck(path: &Path) -> anyhow::Result<slidemorph::Deck> {
    slidemorph::Deck::from_path(path).with_context(|| format!("load deck '{}'", path.display()))
}

fn resolve_options(args: &TransitionArgs) -> anyhow::Result<slidemorph::MorphOptions> {
    let mut opts = match &args.options {
        Some(path) => slidemorph::MorphOptions::from_path(path)
            .with_context(|| format!("load options '{}'", path.display()))?,
        None => slidemorph::MorphOptions::default(),
    };
    if args.reduced_motion {
        opts.reduced_motion = true;
    }
    if let Some(ms) = args.stagger_ms {
        opts.stagger_step_ms = ms;
    }
    if let Some(ms) = args.duration_ms {
        opts.element_duration_ms = ms;
    }
    if let Some(ms) = args.opacity_ms {
        opts.opacity_duration_ms = ms;
    }
    opts.validate()?;
    Ok(opts)
}

fn plan_for(args: &TransitionArgs) -> anyhow::Result<slidemorph::TransitionPlan> {
    let deck = read_deck(&args.deck.deck)?;
    let opts = resolve_options(args)?;
    let prev = &deck.slide(args.from)?.keyframe;
    let next = &deck.slide(args.to)?.keyframe;
    Ok(slidemorph::begin_transition(prev, next, &opts)?)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value).context("write JSON to stdout")?;
    writeln!(out).context("write JSON to stdout")?;
    Ok(())
}

fn cmd_validate(args: DeckArgs) -> anyhow::Result<()> {
    let deck = read_deck(&args.deck)?;
    let elements: usize = deck.slides().iter().map(|s| s.keyframe.len()).sum();
    println!("ok: {} slides, {elements} elements", deck.len());
    for (i, slide) in deck.slides().iter().enumerate() {
        println!("  slide {i}: {} elements", slide.keyframe.len());
    }
    Ok(())
}

fn cmd_plan(args: TransitionArgs) -> anyhow::Result<()> {
    let plan = plan_for(&args)?;
    print_json(&plan)
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let plan = plan_for(&args.transition)?;
    print_json(&slidemorph::sample(&plan, args.at))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TimedFrame {
    elapsed_ms: f64,
    #[serde(flatten)]
    frame: slidemorph::RenderableFrame,
}

const MAX_TIMELINE_FRAMES: f64 = 100_000.0;

fn cmd_timeline(args: TimelineArgs) -> anyhow::Result<()> {
    if !(args.step.is_finite() && args.step > 0.0) {
        anyhow::bail!("--step must be a positive number of milliseconds");
    }
    let plan = plan_for(&args.transition)?;
    let completion_ms = plan.completion_ms();
    if completion_ms / args.step > MAX_TIMELINE_FRAMES {
        anyhow::bail!(
            "--step {} over {completion_ms}ms exceeds {MAX_TIMELINE_FRAMES} frames",
            args.step
        );
    }

    let mut done = false;
    let frames = (0u64..).map_while(|k| {
        if done {
            return None;
        }
        let elapsed_ms = (k as f64 * args.step).min(completion_ms);
        done = slidemorph::is_complete(&plan, elapsed_ms);
        Some(TimedFrame {
            elapsed_ms,
            frame: slidemorph::sample(&plan, elapsed_ms),
        })
    });

    let mut out = std::io::BufWriter::new(std::io::stdout().lock());
    let mut ser = serde_json::Serializer::pretty(&mut out);
    (&mut ser)
        .collect_seq(frames)
        .context("write JSON to stdout")?;
    writeln!(out).context("write JSON to stdout")?;
    out.flush().context("flush stdout")?;
    Ok(())
}
