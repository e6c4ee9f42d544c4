//! CLI frontend for the Alien Artifact text adventure.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "aa",
    about = "Alien Artifact — a text adventure aboard a stricken starship",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the adventure (the default when no subcommand is given)
    Play,

    /// Print the room table: exits and items for every room
    Rooms,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => commands::play::run(),
        Commands::Rooms => commands::rooms::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
