use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use doodleboard::util::Bounds;
use doodleboard::{Config, DrawingBoard, replay};

#[derive(Parser, Debug)]
#[command(name = "doodleboard")]
#[command(version, about = "Freehand drawing surface tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay a pointer event script and save the result as PNG
    Replay(ReplayArgs),
}

#[derive(Args, Debug)]
struct ReplayArgs {
    /// Event script to replay (one event per line, e.g. `down 10 10`)
    #[arg(value_name = "SCRIPT")]
    script: PathBuf,

    /// Where to write the resulting PNG
    #[arg(long, short = 'o', value_name = "PNG")]
    output: PathBuf,

    /// Container width used when the script has no `init` line
    #[arg(long, default_value_t = 400.0)]
    width: f64,

    /// Container height used when the script has no `init` line
    #[arg(long, default_value_t = 300.0)]
    height: f64,

    /// Config file to read tool defaults from (defaults to the user config)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Replay(args) => run_replay(&args),
    }
}

fn run_replay(args: &ReplayArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|err| {
            log::warn!("Falling back to default config: {err:#}");
            Config::default()
        }),
    };

    let source = fs::read_to_string(&args.script)
        .with_context(|| format!("Failed to read script {}", args.script.display()))?;
    let commands = replay::parse_script(&source)
        .with_context(|| format!("Invalid script {}", args.script.display()))?;

    let mut board = DrawingBoard::from_config(&config);
    if !commands
        .iter()
        .any(|command| matches!(command, replay::Command::Init { .. }))
    {
        board.initialize(&Bounds::sized(args.width, args.height));
    }

    let summary = replay::run(&mut board, &commands);
    log::info!(
        "Replayed {} events ({} strokes, {} touch events claimed)",
        summary.commands,
        summary.strokes,
        summary.prevented
    );

    write_drawing(&board, &args.output)?;

    let (width, height) = board.surface().dimensions().unwrap_or_default();
    println!("Wrote {}x{} drawing to {}", width, height, args.output.display());
    Ok(())
}

fn write_drawing(board: &DrawingBoard, path: &Path) -> Result<()> {
    let file = fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    board
        .surface()
        .write_png(&mut writer)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush {}", path.display()))?;
    Ok(())
}
