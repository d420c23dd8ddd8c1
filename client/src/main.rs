mod agent;
mod app;
mod colors;
mod config;
mod game;
mod headless;
mod input;

use std::path::PathBuf;

use clap::Parser;
use snake_engine::config::Validate;
use snake_engine::{log, logger};

use config::{ControllerKind, get_config_manager};

#[derive(Parser)]
#[command(name = "snake_client")]
struct Args {
    /// YAML config file, `snake_config.yaml` next to the executable by default
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, value_enum)]
    controller: Option<ControllerKind>,
    /// Play in the terminal instead of opening a window
    #[arg(long)]
    headless: bool,
    #[arg(long, default_value_t = 1000)]
    max_ticks: u32,
    #[arg(long)]
    use_log_prefix: bool,
    /// Write the effective settings back to the config file
    #[arg(long)]
    save_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let manager = get_config_manager(args.config);
    let mut config = manager.get_config()?;
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(controller) = args.controller {
        config.controller = controller;
    }
    config.validate()?;
    if args.save_config {
        manager.set_config(&config)?;
    }

    let prefix = if args.use_log_prefix {
        Some("Snake".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, config.log_level);

    let board = game::start_board(config.board, config.seed)?;
    log!(
        "Starting {}x{} board with seed {} ({:?})",
        config.board.height,
        config.board.width,
        board.seed(),
        config.controller
    );

    if args.headless {
        headless::run(board, &config, args.max_ticks)?;
        return Ok(());
    }

    app::run(config, board)?;
    Ok(())
}
