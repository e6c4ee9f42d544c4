//! Core types for Alien Artifact: directions, rooms, and the world model.
//!
//! This crate defines the static room graph the game is played on. A
//! [`World`] is immutable after construction apart from one controlled
//! mutation: clearing a room's item slot when the player collects it.

/// Compass directions used as exit labels between rooms.
pub mod direction;
/// Error types used throughout the crate.
pub mod error;
/// A single room with named exits and an optional item slot.
pub mod room;
/// The world model that owns the room graph.
pub mod world;

/// Re-export direction type.
pub use direction::Direction;
/// Re-export error types.
pub use error::{WorldError, WorldResult};
/// Re-export room type.
pub use room::Room;
/// Re-export world model type.
pub use world::World;
