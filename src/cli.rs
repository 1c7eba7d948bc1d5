//! Command-line interface for strictly_rooms.

use clap::{Parser, Subcommand};

/// Strictly Rooms - per-room tic-tac-toe engine
#[derive(Parser, Debug)]
#[command(name = "strictly_rooms")]
#[command(about = "Per-room tic-tac-toe against a computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the rooms allowed to play
    Rooms,

    /// Play a scripted game in a room and print every turn
    Demo {
        /// Room to play in
        #[arg(short, long)]
        room: i64,
    },
}
