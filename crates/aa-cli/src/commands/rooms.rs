//! Print the fixed map as a table.

use comfy_table::{ContentArrangement, Table};

use aa_game::map;

/// Render every room with its exits and item.
pub fn run() -> Result<(), String> {
    let world = map::ship();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Room", "Exits", "Item"]);

    for room in world.rooms() {
        let name = if room.name() == world.start_room() {
            format!("{} (start)", room.name())
        } else {
            room.name().to_string()
        };

        let exits = room
            .exits()
            .iter()
            .map(|(direction, target)| format!("{direction} -> {target}"))
            .collect::<Vec<_>>()
            .join(", ");
        let exits = if exits.is_empty() {
            "—".to_string()
        } else {
            exits
        };

        let item = match room.item() {
            Some(item) if item == world.villain_item() => format!("{item} (villain)"),
            Some(item) => item.to_string(),
            None => "—".to_string(),
        };

        table.add_row(vec![name, exits, item]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} rooms, {} artifacts to collect",
        world.room_count(),
        world.total_collectible_items()
    );

    Ok(())
}
