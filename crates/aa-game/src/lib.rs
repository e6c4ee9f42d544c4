//! Game engine for Alien Artifact.
//!
//! A single-session text adventure: the player moves through a fixed room
//! graph, collects artifacts, and triggers the win/lose check by entering
//! the villain room. Parsing, validation, state mutation, and rendering are
//! separate steps so each can be tested on its own.

/// Error types for the game engine.
pub mod error;
/// The fixed ship map the game is played on.
pub mod map;
/// Command parsing for player input.
pub mod parser;
/// Player state management.
pub mod player;
/// Player-facing text rendering.
pub mod render;
/// Game session management.
pub mod session;

pub use error::{GameError, GameResult};
pub use parser::{Command, parse_command};
pub use player::PlayerState;
pub use session::{Ending, Flow, GameSession, Turn};
