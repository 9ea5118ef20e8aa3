use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use unscramble::cli::Cli;
use unscramble::core::engine::Engine;
use unscramble::games::unscramble::{GameState, UnscrambleGame, WordBank};

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.init_logging()?;

    // 1. Configuration problems are fatal before the terminal is touched
    let config = cli.game_config()?;
    let state = GameState::new(WordBank::default(), config, cli.rng())
        .context("invalid game configuration")?;
    info!(?config, "starting unscramble");

    // 2. Run the game
    let mut terminal = ratatui::init();
    let result = Engine::new(UnscrambleGame::new(state)).run(&mut terminal);
    ratatui::restore();

    let game = result?;
    println!("👋 Final score: {}", game.state().score());
    Ok(())
}
