use std::{
    fs::File,
    io::{self, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use keymotion::{Animation, Encoder, ModelBuilder, SvgEncoder, SvgOptions, TextEncoder, Tick};

#[derive(Parser, Debug)]
#[command(name = "keymotion", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Re-emit the animation in the text motion format.
    Text(TextArgs),
    /// Export the animation as an SVG document.
    Svg(SvgArgs),
    /// Print every shape's interpolated state at one tick.
    State(StateArgs),
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Input animation (text format).
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct TextArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SvgArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Ticks per second.
    #[arg(long, default_value_t = 1)]
    speed: u32,
}

#[derive(Parser, Debug)]
struct StateArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Tick to sample.
    #[arg(long)]
    tick: u64,

    /// Emit JSON instead of one line per shape.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Text(args) => cmd_text(args),
        Command::Svg(args) => cmd_svg(args),
        Command::State(args) => cmd_state(args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn load(input: &InputArgs) -> anyhow::Result<Animation> {
    let model = keymotion::read_path(&input.in_path, ModelBuilder::new())
        .with_context(|| format!("load animation '{}'", input.in_path.display()))?;
    tracing::info!(
        shapes = model.len(),
        end_tick = %model.end_tick(),
        "animation loaded"
    );
    Ok(model)
}

fn emit(encoder: &impl Encoder, model: &Animation, out: Option<&Path>) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let file =
                File::create(path).with_context(|| format!("create '{}'", path.display()))?;
            encoder
                .write_to(model, &mut BufWriter::new(file))
                .with_context(|| format!("write '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => encoder.write_to(model, &mut io::stdout().lock())?,
    }
    Ok(())
}

fn cmd_text(args: TextArgs) -> anyhow::Result<()> {
    let model = load(&args.input)?;
    emit(&TextEncoder, &model, args.out.as_deref())
}

fn cmd_svg(args: SvgArgs) -> anyhow::Result<()> {
    let model = load(&args.input)?;
    let encoder = SvgEncoder::new(SvgOptions { tempo: args.speed })?;
    emit(&encoder, &model, args.out.as_deref())
}

fn cmd_state(args: StateArgs) -> anyhow::Result<()> {
    let model = load(&args.input)?;
    let tick = Tick(args.tick);
    let mut stdout = io::stdout().lock();

    if args.json {
        let views = model.shapes_at_tick(tick);
        let states: Vec<_> = model
            .iter()
            .zip(&views)
            .map(|(shape, view)| {
                serde_json::json!({
                    "name": shape.name(),
                    "kind": shape.kind(),
                    "state": view.as_ref().and_then(|v| v.state()),
                })
            })
            .collect();
        serde_json::to_writer_pretty(&mut stdout, &states).context("serialize states")?;
        writeln!(stdout)?;
        return Ok(());
    }

    for (name, state) in model.states_at(tick) {
        match state {
            Some(kf) => {
                let (p, d, c) = (kf.position(), kf.dimensions(), kf.color());
                writeln!(
                    stdout,
                    "{name} x={} y={} w={} h={} fill={c}",
                    p.x,
                    p.y,
                    d.width(),
                    d.height()
                )?;
            }
            None => writeln!(stdout, "{name} -")?,
        }
    }
    Ok(())
}
