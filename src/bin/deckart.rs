use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "deckart", version)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render SVG art for every deck entry and update its image reference.
    Render(RenderArgs),
    /// Print the seed-driven choices for one or more entry ids.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Deck JSON file, updated in place.
    #[arg(long, default_value = "deck.json")]
    deck: PathBuf,

    /// Output directory for SVG files.
    #[arg(long, default_value = "cards")]
    cards_dir: PathBuf,

    /// Directory used in image references (defaults to --cards-dir).
    #[arg(long)]
    image_dir: Option<String>,

    /// Render entries on a worker pool.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Entry ids.
    #[arg(required = true)]
    ids: Vec<String>,

    /// Print the plans as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("install tracing subscriber")
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut catalog = deckart::Catalog::from_path(&args.deck)
        .with_context(|| format!("load deck '{}'", args.deck.display()))?;

    let image_dir = match args.image_dir {
        Some(dir) => dir,
        None => default_image_dir(&args.cards_dir)?,
    };

    let mut sink = deckart::DirSink::create(&args.cards_dir)
        .with_context(|| format!("create cards dir '{}'", args.cards_dir.display()))?;

    let opts = deckart::UpdateOpts {
        image_dir,
        parallel: args.parallel,
        threads: args.threads,
    };

    let report = deckart::update_catalog(&mut catalog, &mut sink, &opts)?;

    catalog
        .save(&args.deck)
        .with_context(|| format!("save deck '{}'", args.deck.display()))?;

    eprintln!(
        "generated {} SVG file(s) in {}",
        report.rendered,
        args.cards_dir.display()
    );
    Ok(())
}

fn default_image_dir(cards_dir: &Path) -> anyhow::Result<String> {
    anyhow::ensure!(
        !cards_dir.has_root(),
        "--image-dir is required when --cards-dir is absolute ('{}')",
        cards_dir.display()
    );
    Ok(cards_dir.to_string_lossy().replace('\\', "/"))
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let plans: Vec<_> = args
        .ids
        .iter()
        .map(|id| (id.as_str(), deckart::ArtPlan::for_id(id)))
        .collect();

    if args.json {
        let map: serde_json::Map<String, serde_json::Value> = plans
            .iter()
            .map(|(id, plan)| Ok(((*id).to_string(), serde_json::to_value(plan)?)))
            .collect::<Result<_, serde_json::Error>>()
            .context("encode plans")?;
        println!("{}", serde_json::to_string_pretty(&map)?);
        return Ok(());
    }

    for (id, plan) in &plans {
        let pose = plan.params.pose;
        println!("{id}:");
        println!("  seed:     {}", plan.seed);
        println!("  palette:  {}", plan.palette_index);
        println!("  icon:     {}", plan.icon);
        println!(
            "  offset:   ({}, {})",
            plan.params.offset_x, plan.params.offset_y
        );
        println!(
            "  pose:     body={} ear={} eye={}",
            pose.body_shift, pose.ear_shift, pose.eye_shift
        );
    }
    Ok(())
}
