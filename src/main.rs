//! Strictly Rooms - command-line front end
//!
//! Inspects a configuration and plays demo games against the computer.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use strictly_rooms::{Board, Config, Outcome, Position, Registry, RoomId};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = Config::from_file(&cli.config)?;
    let registry = Registry::from_config(config.tic_tac_toe());

    match cli.command {
        Command::Rooms => list_rooms(&registry),
        Command::Demo { room } => run_demo(&registry, RoomId::from(room)),
    }
}

/// Print the configured rooms
fn list_rooms(registry: &Registry) -> Result<()> {
    println!("{}", registry.label());
    for room in registry.eligible_rooms() {
        println!("  {room}");
    }
    Ok(())
}

/// Scripted challenger: first empty square in row-major order
fn first_empty(board: &Board) -> Option<Position> {
    Position::ALL.into_iter().find(|pos| board.is_empty(*pos))
}

/// Play one game in `room` and print each turn
#[instrument(skip(registry))]
fn run_demo(registry: &Registry, room: RoomId) -> Result<()> {
    let mut report = registry.start_game(room)?;
    println!("{}\n", report.board());

    while *report.outcome() == Outcome::InProgress {
        let Some(pos) = first_empty(report.board()) else {
            anyhow::bail!("No empty square left on an unfinished board");
        };
        info!(%pos, "Challenger plays");
        report = registry.submit_move(room, pos.row(), pos.col())?;
        println!("{}\n", report.board());
    }

    println!("Game over: {}", report.outcome());
    Ok(())
}
