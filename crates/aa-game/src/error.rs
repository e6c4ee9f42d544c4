use thiserror::Error;

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

/// Recoverable, player-facing errors.
///
/// Every variant's `Display` text is the exact message shown to the player.
/// None of these are fatal: the frontend prints the message and the loop
/// continues with the game state unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Input was empty after whitespace normalization.
    #[error("Please enter a command. Type 'help' for options.")]
    EmptyCommand,

    /// The `go` target is not an exit of the current room.
    #[error("You can't go that way. Try a different direction.")]
    InvalidDirection,

    /// The `get` target does not match the current room's item.
    #[error("There is no such item here to get.")]
    NoSuchItem,

    /// Attempt to collect the villain's item.
    #[error("You can't collect the villain! Focus on survival.")]
    VillainPickup,

    /// Attempt to collect an item already held. Defensive: normally
    /// unreachable since collection clears the room's item.
    #[error("You already collected the {0}.")]
    AlreadyCollected(String),

    /// Input matched none of the recognized verbs.
    #[error("Invalid command. Type 'help' to see available commands.")]
    UnknownCommand,
}
