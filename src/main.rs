use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tui_arcade::audio::{AudioSink, Silent, TerminalBell};
use tui_arcade::game::{
    ArcadeConfig, CollectGame, SnakeVariant, StepSnakeGame, TrailSnakeGame,
};
use tui_arcade::logging;
use tui_arcade::modes::PlayMode;

#[derive(Parser)]
#[command(name = "tui_arcade")]
#[command(version, about = "Collect-the-dot and Snake in the terminal")]
struct Cli {
    /// Game to play
    #[arg(long, default_value = "snake")]
    game: GameKind,

    /// Snake body implementation
    #[arg(long)]
    variant: Option<Variant>,

    /// JSON file with game constants
    #[arg(long)]
    config: Option<PathBuf>,

    /// Snake grid cells per side
    #[arg(long)]
    tiles: Option<i32>,

    /// Snake ticks per second
    #[arg(long)]
    speed: Option<u32>,

    /// Outline bounding boxes in the collect game
    #[arg(long)]
    debug: bool,

    /// Do not ring the terminal bell
    #[arg(long)]
    mute: bool,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
enum GameKind {
    /// Move the square and pick up dots
    Collect,
    /// Classic grid snake
    Snake,
}

#[derive(Clone, Copy, ValueEnum)]
enum Variant {
    /// Head plus trimmed head history
    Trail,
    /// Body vector stepped by the velocity
    Step,
}

impl From<Variant> for SnakeVariant {
    fn from(variant: Variant) -> Self {
        match variant {
            Variant::Trail => SnakeVariant::Trail,
            Variant::Step => SnakeVariant::Step,
        }
    }
}

fn build_config(cli: &Cli) -> Result<ArcadeConfig> {
    let mut config = match &cli.config {
        Some(path) => ArcadeConfig::load(path)?,
        None => ArcadeConfig::default(),
    };

    // Command line flags win over the file
    if let Some(variant) = cli.variant {
        config.snake.variant = variant.into();
    }
    if let Some(tiles) = cli.tiles {
        config.snake.tile_count = tiles;
    }
    if let Some(speed) = cli.speed {
        config.snake.speed = speed;
    }
    if cli.debug {
        config.collect.debug = true;
    }

    Ok(config.sanitized())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.log_file.as_deref())?;
    let config = build_config(&cli)?;
    tracing::debug!(?config, "configuration resolved");

    let audio: Box<dyn AudioSink> = if cli.mute {
        Box::new(Silent)
    } else {
        Box::new(TerminalBell)
    };

    // Dispatch to the selected game
    match cli.game {
        GameKind::Collect => {
            PlayMode::new(CollectGame::new(config.collect), audio)
                .run()
                .await?
        }
        GameKind::Snake => match config.snake.variant {
            SnakeVariant::Trail => {
                PlayMode::new(TrailSnakeGame::new(config.snake), audio)
                    .run()
                    .await?
            }
            SnakeVariant::Step => {
                PlayMode::new(StepSnakeGame::new(config.snake), audio)
                    .run()
                    .await?
            }
        },
    }

    Ok(())
}
