use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use element_app::game_loop::{self, LoopConfig};
use element_app::input::{AutoPlayer, InputSource, ScriptedInput};
use element_app::surface::{JsonSurface, LogSurface, RenderSurface};
use element_core::level::LevelConfig;

const USAGE: &str = "usage: element [LEVEL.json] [--ticks N] [--seed N] [--idle] [--fast] [--json]";

struct Args {
    level_path: Option<PathBuf>,
    max_ticks: Option<u64>,
    seed: u64,
    idle: bool,
    paced: bool,
    json: bool,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        level_path: None,
        max_ticks: None,
        seed: 0,
        idle: false,
        paced: true,
        json: false,
    };
    let mut iter = env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--ticks" => {
                let value = iter.next().context("--ticks needs a value")?;
                let ticks = value
                    .parse()
                    .with_context(|| format!("bad tick count {value:?}"))?;
                args.max_ticks = Some(ticks);
            }
            "--seed" => {
                let value = iter.next().context("--seed needs a value")?;
                args.seed = value.parse().with_context(|| format!("bad seed {value:?}"))?;
            }
            "--idle" => args.idle = true,
            "--fast" => args.paced = false,
            "--json" => args.json = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            flag if flag.starts_with("--") => bail!("unknown flag {flag}\n{USAGE}"),
            path => args.level_path = Some(PathBuf::from(path)),
        }
    }
    Ok(args)
}

fn main() -> Result<()> {
    // Logs go to stderr so `--json` leaves stdout as clean JSON lines.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args()?;

    let level = match &args.level_path {
        Some(path) => LevelConfig::load(path)?,
        None => LevelConfig::default(),
    };

    let mut input: Box<dyn InputSource> = if args.idle {
        Box::new(ScriptedInput::new())
    } else {
        Box::new(AutoPlayer::new(args.seed, level.map_bounds))
    };
    let mut engine = game_loop::init_engine(level)?;
    let mut surface: Box<dyn RenderSurface> = if args.json {
        Box::new(JsonSurface::new(std::io::stdout().lock()))
    } else {
        Box::new(LogSurface::default())
    };

    let summary = game_loop::run(
        &mut engine,
        input.as_mut(),
        surface.as_mut(),
        LoopConfig {
            max_ticks: args.max_ticks,
            paced: args.paced,
        },
    )?;

    info!(
        ticks = summary.ticks,
        quit = summary.quit,
        hp = summary.final_status.hp,
        gold = summary.final_status.gold,
        level = summary.final_status.level,
        events = summary.events,
        "session finished"
    );
    Ok(())
}
