use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::direction::Direction;

/// A single room: a node in the world graph with named exits and at most
/// one collectible item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    name: String,
    exits: BTreeMap<Direction, String>,
    item: Option<String>,
}

impl Room {
    /// Create a room with no exits and no item.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exits: BTreeMap::new(),
            item: None,
        }
    }

    /// Add an exit leading to the named room.
    pub fn with_exit(mut self, direction: Direction, target: impl Into<String>) -> Self {
        self.exits.insert(direction, target.into());
        self
    }

    /// Place an item in the room's item slot.
    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.item = Some(item.into());
        self
    }

    /// The room's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All exits from this room, keyed by direction.
    pub fn exits(&self) -> &BTreeMap<Direction, String> {
        &self.exits
    }

    /// The room this exit leads to, if the exit exists.
    pub fn exit(&self, direction: Direction) -> Option<&str> {
        self.exits.get(&direction).map(String::as_str)
    }

    /// The item currently in the room, if any.
    pub fn item(&self) -> Option<&str> {
        self.item.as_deref()
    }

    /// Clear the item slot. Idempotent: a no-op on an already-empty room.
    pub(crate) fn clear_item(&mut self) {
        self.item = None;
    }
}
