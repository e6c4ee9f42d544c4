//! The interactive game loop over stdin/stdout.

use std::io::{self, BufRead, Write};

use colored::Colorize;

use aa_game::{Ending, Flow, GameSession, map, render};

/// Start a session on the fixed ship map and loop until the game ends.
pub fn run() -> Result<(), String> {
    let mut session = GameSession::new(map::ship());

    println!(
        "{}",
        render::instructions(session.world().total_collectible_items())
    );
    println!();
    println!("{}", render::status(session.world(), session.player()));

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("\nEnter your move: ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        match session.process(&line) {
            Ok(turn) => match turn.flow {
                Flow::Continue => println!("{}", turn.text),
                Flow::Over(Ending::Quit) => {
                    println!("{}", turn.text);
                    break;
                }
                Flow::Over(Ending::Victory) => {
                    println!("{}", turn.text.green());
                    break;
                }
                Flow::Over(Ending::Defeat) => {
                    println!("{}", turn.text.red());
                    break;
                }
            },
            Err(e) => println!("{}", e.to_string().yellow()),
        }
    }

    Ok(())
}
