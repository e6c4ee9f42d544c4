//! Player state management.

/// The player's mutable state: current room and collected items.
#[derive(Debug, Clone)]
pub struct PlayerState {
    /// Name of the room the player is in. Always a valid world key.
    pub location: String,
    /// Collected item names, in collection order. Never contains
    /// duplicates or the villain's item.
    pub inventory: Vec<String>,
}

impl PlayerState {
    /// Create a new player state at the given room.
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            inventory: Vec::new(),
        }
    }

    /// Check if the player holds an item.
    pub fn has_item(&self, name: &str) -> bool {
        self.inventory.iter().any(|held| held == name)
    }

    /// Add an item to the inventory. A held item is not added twice.
    pub fn add_item(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.has_item(&name) {
            self.inventory.push(name);
        }
    }
}
