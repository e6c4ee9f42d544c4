//! Player-facing text: the instructions banner, the status block, and the
//! ending messages.
//!
//! Everything here is a pure function of world and player state; nothing
//! mutates and nothing prints. The frontend decides what to do with the
//! rendered text.

use aa_core::World;

use crate::player::PlayerState;

/// The instructions banner shown at startup and on `help`.
pub fn instructions(total_items: usize) -> String {
    [
        "=====================================",
        "     ALIEN ARTIFACT: TEXT ADVENTURE",
        "=====================================",
        "Objective:",
        &format!("  Collect all {total_items} alien artifacts before you enter the Villain's room."),
        "",
        "Commands:",
        "  go North | go South | go East | go West",
        "  get <item name>",
        "  status          (show current room, inventory, and visible item)",
        "  help            (show these instructions again)",
        "  quit            (exit the game)",
    ]
    .join("\n")
}

/// The status block: current room, inventory, and the visible item if any.
pub fn status(world: &World, player: &PlayerState) -> String {
    let mut output = String::from("-----------------------------\n");
    output.push_str(&format!("You are in: {}\n", player.location));
    output.push_str(&format!(
        "Inventory: {}\n",
        inventory_line(&player.inventory)
    ));
    if let Some(item) = world.item(&player.location) {
        output.push_str(&format!("You see a {item}\n"));
    }
    output.push_str("-----------------------------");
    output
}

/// Render the inventory for display: `[empty]` or a comma-separated list.
pub fn inventory_line(inventory: &[String]) -> String {
    if inventory.is_empty() {
        "[empty]".to_string()
    } else {
        inventory.join(", ")
    }
}

/// Confirmation printed after a successful pickup.
pub fn collected(item: &str, inventory: &[String]) -> String {
    format!(
        "{item} collected! Inventory now: {}",
        inventory_line(inventory)
    )
}

/// The victory message for entering the villain room fully equipped.
pub fn victory(world: &World) -> String {
    format!(
        ">>> You enter the {room}, fully equipped with all artifacts.\n\
         You confront the {villain} and prevail!\n\
         \n\
         Congratulations! You collected all artifacts and saved the ship!\n\
         Thanks for playing the game. Hope you enjoyed it.",
        room = world.villain_room(),
        villain = world.villain_item(),
    )
}

/// The defeat message for entering the villain room under-equipped.
pub fn defeat(world: &World) -> String {
    format!(
        ">>> ALERT: You have entered the {room} without all artifacts!\n\
         The {villain} emerges from the shadows...\n\
         NOM NOM... GAME OVER!\n\
         Thanks for playing the game. Hope you enjoyed it.",
        room = world.villain_room(),
        villain = world.villain_item(),
    )
}

/// The farewell printed on `quit`.
pub fn farewell() -> &'static str {
    "Exiting game. Thanks for playing!"
}
