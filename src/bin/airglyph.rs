use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "airglyph", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play the animation headless through the CPU rasterizer until Ctrl+C.
    Play(PlayArgs),
    /// Print one frame's composition as JSON.
    Compose(ComposeArgs),
}

#[derive(Parser, Debug)]
struct SourceArgs {
    /// CSV with the station record schema. Falls back to synthetic records when absent or
    /// unreadable.
    #[arg(long)]
    data: Option<PathBuf>,

    /// JSON run configuration.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Visualization variant (overrides the config).
    #[arg(long, value_enum)]
    variant: Option<VariantChoice>,

    /// Seed for geometry and synthetic data (overrides the config).
    #[arg(long)]
    seed: Option<u64>,

    /// Days of synthetic records (overrides the config).
    #[arg(long)]
    days: Option<u32>,
}

#[derive(Parser, Debug)]
struct PlayArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Tick interval in milliseconds (overrides config and variant).
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Stop after this many frames.
    #[arg(long)]
    frames: Option<u64>,

    /// Font file used for labels; labels are skipped without one.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Output width in pixels (overrides the config).
    #[arg(long)]
    width: Option<u32>,

    /// Output height in pixels (overrides the config).
    #[arg(long)]
    height: Option<u32>,
}

#[derive(Parser, Debug)]
struct ComposeArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Frame index (0-based, wraps around the timeline).
    #[arg(long, default_value_t = 0)]
    frame: u64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum VariantChoice {
    Abstract,
    Stations,
}

impl From<VariantChoice> for airglyph::Variant {
    fn from(v: VariantChoice) -> Self {
        match v {
            VariantChoice::Abstract => Self::Abstract,
            VariantChoice::Stations => Self::Stations,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Play(args) => cmd_play(args),
        Command::Compose(args) => cmd_compose(args),
    }
}

fn load_config(args: &SourceArgs) -> anyhow::Result<airglyph::ArtConfig> {
    let mut cfg = match &args.config {
        Some(path) => airglyph::ArtConfig::load(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => airglyph::ArtConfig::default(),
    };
    if let Some(v) = args.variant {
        cfg.variant = v.into();
    }
    if args.seed.is_some() {
        cfg.seed = args.seed;
    }
    if let Some(days) = args.days {
        cfg.synthetic.days = days;
    }
    Ok(cfg)
}

fn prepare(args: &SourceArgs, cfg: &airglyph::ArtConfig) -> anyhow::Result<airglyph::Scheduler> {
    cfg.validate().context("validate config")?;

    let seed = cfg.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, variant = ?cfg.variant, "run configured");

    let mut data_rng = StdRng::seed_from_u64(seed);
    let (store, origin) =
        airglyph::load_records(args.data.as_deref(), &cfg.synthetic, &mut data_rng)
            .context("load records")?;
    tracing::info!(?origin, records = store.len(), "records ready");
    let composer = cfg.composer().context("build composer")?;

    Ok(airglyph::Scheduler::new(
        store,
        airglyph::StationLayout::beijing(),
        composer,
        cfg.interval(),
        seed,
    ))
}

fn read_font(path: &Path) -> anyhow::Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("read font '{}'", path.display()))
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    let mut cfg = load_config(&args.source)?;
    if args.interval_ms.is_some() {
        cfg.interval_ms = args.interval_ms;
    }
    if let Some(w) = args.width {
        cfg.canvas.width = w;
    }
    if let Some(h) = args.height {
        cfg.canvas.height = h;
    }

    let mut scheduler = prepare(&args.source, &cfg)?;

    let font = args.font.as_deref().map(read_font).transpose()?;
    let opts = airglyph::CpuRendererOpts {
        canvas: cfg.canvas,
        font,
    };
    let mut renderer = airglyph::CpuRenderer::new(opts, airglyph::DigestSink::new())
        .context("create cpu renderer")?;

    let cancel = airglyph::CancelToken::new();
    let c = cancel.clone();
    ctrlc::set_handler(move || c.cancel()).context("install Ctrl+C handler")?;

    eprintln!("playing, press Ctrl+C to stop");
    let summary = scheduler
        .run(
            &mut renderer,
            &cancel,
            &mut airglyph::SleepPacer::new(),
            args.frames,
        )
        .context("animation failed")?;

    eprintln!("stopped after {} frames ({:?})", summary.ticks, summary.reason);
    Ok(())
}

fn cmd_compose(args: ComposeArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.source)?;
    let mut scheduler = prepare(&args.source, &cfg)?;
    scheduler.start().context("start scheduler")?;

    scheduler.seek(args.frame);
    let comp = scheduler.preview().context("no frame to compose")?;

    let stdout = std::io::stdout();
    serde_json::to_writer_pretty(stdout.lock(), &comp).context("write composition JSON")?;
    println!();
    Ok(())
}
