//! The fixed ship map the game is played on.
//!
//! Nine rooms, six collectible artifacts, one villain. The adjacency is
//! directed and intentionally asymmetric: Reactor Access is a dead end with
//! only the way back North, and the Reactor Core is reachable only East
//! from the Observation Deck.

use aa_core::{Direction, Room, World};

/// The room the player starts in.
pub const START_ROOM: &str = "Bridge";
/// The room whose entry triggers the win/lose check.
pub const VILLAIN_ROOM: &str = "Reactor Core";
/// The villain. Present as the Reactor Core's item, never collectible.
pub const VILLAIN_ITEM: &str = "Alien Stalker";

/// Build the fixed nine-room ship map.
pub fn ship() -> World {
    use Direction::{East, North, South, West};

    let rooms = vec![
        Room::new("Bridge")
            .with_exit(South, "Engineering Bay")
            .with_exit(East, "Observation Deck")
            .with_exit(West, "Crew Quarters"),
        Room::new("Engineering Bay")
            .with_exit(North, "Bridge")
            .with_exit(South, "Cargo Hold")
            .with_item("Xenotech Circuit"),
        Room::new("Cargo Hold")
            .with_exit(North, "Engineering Bay")
            .with_exit(East, "Airlock")
            .with_item("Plasma Core"),
        Room::new("Airlock")
            .with_exit(West, "Cargo Hold")
            .with_exit(North, "Med Lab")
            .with_item("Holo Map"),
        Room::new("Med Lab")
            .with_exit(South, "Airlock")
            .with_exit(West, "Observation Deck")
            .with_item("Stasis Key"),
        Room::new("Observation Deck")
            .with_exit(West, "Bridge")
            .with_exit(South, "Med Lab")
            .with_exit(East, "Reactor Core")
            .with_item("Artifact Shard"),
        Room::new("Crew Quarters")
            .with_exit(East, "Bridge")
            .with_exit(South, "Reactor Access")
            .with_item("Quantum Relic"),
        // Dead end: no onward path toward the Reactor Core from here.
        Room::new("Reactor Access").with_exit(North, "Crew Quarters"),
        Room::new("Reactor Core")
            .with_exit(West, "Observation Deck")
            .with_item(VILLAIN_ITEM),
    ];

    World::new(rooms, START_ROOM, VILLAIN_ROOM, VILLAIN_ITEM)
        .expect("the built-in ship map is valid")
}
