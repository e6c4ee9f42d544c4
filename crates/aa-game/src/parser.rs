//! Command parsing for player input.

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Exit the game.
    Quit,
    /// Redisplay the instructions.
    Help,
    /// Show the current room, inventory, and visible item.
    Status,
    /// Move through an exit.
    Go {
        /// The typed direction, matched against exit labels later.
        target: String,
    },
    /// Pick up an item.
    Get {
        /// The requested item name, matched case-insensitively later.
        item: String,
    },
    /// Input was empty after normalization.
    Empty,
    /// Unrecognized input.
    Unknown {
        /// The normalized original input.
        input: String,
    },
}

/// Collapse internal whitespace runs to single spaces and trim the ends.
pub fn normalize(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parse a line of player input into a [`Command`].
///
/// Dispatch is case-insensitive. Keyword commands (`quit`, `help`,
/// `status`) match the whole normalized input only; `go` and `get` require
/// an argument after the verb. Anything else is [`Command::Unknown`].
pub fn parse_command(input: &str) -> Command {
    let input = normalize(input);
    if input.is_empty() {
        return Command::Empty;
    }

    if input.eq_ignore_ascii_case("quit") {
        return Command::Quit;
    }
    if input.eq_ignore_ascii_case("help") {
        return Command::Help;
    }
    if input.eq_ignore_ascii_case("status") {
        return Command::Status;
    }

    if let Some((verb, rest)) = input.split_once(' ') {
        if verb.eq_ignore_ascii_case("go") {
            return Command::Go {
                target: rest.to_string(),
            };
        }
        if verb.eq_ignore_ascii_case("get") {
            return Command::Get {
                item: rest.to_string(),
            };
        }
    }

    Command::Unknown { input }
}
