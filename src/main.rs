//! Swapples terminal runner (default binary).
//!
//! A thin line-oriented shell around the engine: prints the board, reads one
//! move token per line, prints the running score. After an accepted move the
//! board is shown after every clear and every refill of the cascade. `quit` or
//! end of input exits.
//!
//! Usage: `swapples [config.toml]`

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::Result;
use log::{debug, info};

use swapples::config::{AppConfig, DEFAULT_CONFIG_PATH};
use swapples::core::{Board, ColorSource, Grid};
use swapples::term::TerminalRenderer;

fn main() -> Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let config = AppConfig::load_or_default(&path)?;

    let mut board = Board::new(config.board)?;
    let mut term = TerminalRenderer::new(config.color && io::stdout().is_terminal());
    term.draw(board.grid())?;

    run(&mut board, &mut term)?;

    info!(
        "game over after {} move(s), final score {}",
        board.moves_played(),
        board.total_score()
    );
    Ok(())
}

fn run<S: ColorSource>(board: &mut Board<S>, term: &mut TerminalRenderer) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();
    let mut frames: Vec<Grid> = Vec::new();

    loop {
        print!("move: ");
        io::stdout().flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }
        let token = line.trim();
        if token == "quit" {
            return Ok(());
        }

        frames.clear();
        let result = board.apply_move_observed(token, |step, grid| {
            debug!("cascade {:?}", step);
            frames.push(grid.clone());
        });

        match result {
            Ok(_) => {
                // A rejected swap is rolled back and shows only the unchanged board
                if frames.is_empty() {
                    term.draw(board.grid())?;
                }
                for frame in &frames {
                    term.draw(frame)?;
                }
                println!("score = {}", board.total_score());
            }
            Err(err) => eprintln!("Illegal move: {}", err),
        }
    }
}
