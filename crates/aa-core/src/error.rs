use crate::direction::Direction;

/// Alias for `Result<T, WorldError>`.
pub type WorldResult<T> = Result<T, WorldError>;

/// Errors that can occur when constructing or querying a world.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// The requested room name does not exist in the world.
    #[error("room not found: \"{0}\"")]
    RoomNotFound(String),

    /// A room with the same name already exists.
    #[error("room already exists: \"{0}\"")]
    DuplicateRoom(String),

    /// An exit references a room name that does not exist.
    #[error("exit {direction} of \"{room}\" leads to unknown room \"{target}\"")]
    DanglingExit {
        /// The room the exit belongs to.
        room: String,
        /// The exit's direction label.
        direction: Direction,
        /// The unresolved target room name.
        target: String,
    },

    /// The designated villain room does not hold the villain item.
    #[error("villain room \"{room}\" does not hold \"{item}\"")]
    VillainMisplaced {
        /// The designated villain room.
        room: String,
        /// The expected villain item name.
        item: String,
    },
}
