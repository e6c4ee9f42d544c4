use std::collections::HashMap;

use crate::direction::Direction;
use crate::error::{WorldError, WorldResult};
use crate::room::Room;

/// The central world model: the fixed room graph plus the designated start
/// and villain rooms.
///
/// A `World` is validated on construction and immutable thereafter, except
/// for [`World::clear_item`], the single controlled mutation used when the
/// player collects an item.
#[derive(Debug, Clone)]
pub struct World {
    rooms: HashMap<String, Room>,
    // Insertion order, for stable listings
    order: Vec<String>,
    start_room: String,
    villain_room: String,
    villain_item: String,
    total_collectible_items: usize,
}

impl World {
    /// Build a world from rooms, validating the graph.
    ///
    /// Checks that room names are unique, that the start and villain rooms
    /// exist, that the villain room holds the villain item, and that every
    /// exit references an existing room. The collectible count (all items
    /// except the villain's) is computed here once; collecting items later
    /// does not change it.
    pub fn new(
        rooms: Vec<Room>,
        start_room: impl Into<String>,
        villain_room: impl Into<String>,
        villain_item: impl Into<String>,
    ) -> WorldResult<Self> {
        let start_room = start_room.into();
        let villain_room = villain_room.into();
        let villain_item = villain_item.into();

        let mut map: HashMap<String, Room> = HashMap::with_capacity(rooms.len());
        let mut order = Vec::with_capacity(rooms.len());
        for room in rooms {
            if map.contains_key(room.name()) {
                return Err(WorldError::DuplicateRoom(room.name().to_string()));
            }
            order.push(room.name().to_string());
            map.insert(room.name().to_string(), room);
        }

        if !map.contains_key(&start_room) {
            return Err(WorldError::RoomNotFound(start_room));
        }
        let villain = map
            .get(&villain_room)
            .ok_or_else(|| WorldError::RoomNotFound(villain_room.clone()))?;
        if villain.item() != Some(villain_item.as_str()) {
            return Err(WorldError::VillainMisplaced {
                room: villain_room,
                item: villain_item,
            });
        }

        for room in map.values() {
            for (direction, target) in room.exits() {
                if !map.contains_key(target) {
                    return Err(WorldError::DanglingExit {
                        room: room.name().to_string(),
                        direction: *direction,
                        target: target.clone(),
                    });
                }
            }
        }

        let total_collectible_items = map
            .values()
            .filter_map(Room::item)
            .filter(|item| *item != villain_item)
            .count();

        Ok(Self {
            rooms: map,
            order,
            start_room,
            villain_room,
            villain_item,
            total_collectible_items,
        })
    }

    /// Get a room by name.
    pub fn room(&self, name: &str) -> Option<&Room> {
        self.rooms.get(name)
    }

    /// The room an exit leads to, if `room` has an exit in that direction.
    pub fn exit(&self, room: &str, direction: Direction) -> Option<&str> {
        self.rooms.get(room).and_then(|r| r.exit(direction))
    }

    /// The item currently in a room, or `None` if already collected or
    /// never present.
    pub fn item(&self, room: &str) -> Option<&str> {
        self.rooms.get(room).and_then(Room::item)
    }

    /// Remove the item from a room. Idempotent: clearing an empty room is
    /// a no-op.
    pub fn clear_item(&mut self, room: &str) {
        if let Some(room) = self.rooms.get_mut(room) {
            room.clear_item();
        }
    }

    /// The designated start room.
    pub fn start_room(&self) -> &str {
        &self.start_room
    }

    /// The designated villain room. Entering it ends the game.
    pub fn villain_room(&self) -> &str {
        &self.villain_room
    }

    /// The villain's item name. Never collectible.
    pub fn villain_item(&self) -> &str {
        &self.villain_item
    }

    /// Count of all non-villain items present at construction. This is the
    /// win threshold, not a live count.
    pub fn total_collectible_items(&self) -> usize {
        self.total_collectible_items
    }

    /// Number of rooms in the world.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// All rooms, in the order they were added.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.order.iter().filter_map(|name| self.rooms.get(name))
    }
}
