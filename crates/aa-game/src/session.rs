//! Game session management.
//!
//! A [`GameSession`] owns the world and the player state and resolves one
//! command per call. Every command is fully resolved within a single input
//! line; the only terminal transitions are `quit` and entering the villain
//! room.

use aa_core::{Direction, Room, World};

use crate::error::{GameError, GameResult};
use crate::parser::{Command, parse_command};
use crate::player::PlayerState;
use crate::render;

/// The three ways a game ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// The player quit.
    Quit,
    /// The player entered the villain room fully equipped.
    Victory,
    /// The player entered the villain room under-equipped.
    Defeat,
}

/// How a processed turn leaves the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// The loop continues with another input line.
    Continue,
    /// The game is over; no further input is processed.
    Over(Ending),
}

/// Feedback from one processed turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    /// The text to show the player.
    pub text: String,
    /// The resulting control flow.
    pub flow: Flow,
}

impl Turn {
    fn next(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            flow: Flow::Continue,
        }
    }

    fn over(text: impl Into<String>, ending: Ending) -> Self {
        Self {
            text: text.into(),
            flow: Flow::Over(ending),
        }
    }
}

/// A single game session: the world plus the player's state.
pub struct GameSession {
    world: World,
    player: PlayerState,
}

impl GameSession {
    /// Start a session with the player in the world's start room.
    pub fn new(world: World) -> Self {
        let player = PlayerState::new(world.start_room());
        Self { world, player }
    }

    /// Get the world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get the player state.
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Get a mutable reference to the player state.
    pub fn player_mut(&mut self) -> &mut PlayerState {
        &mut self.player
    }

    /// Parse one line of input and resolve it.
    pub fn process(&mut self, input: &str) -> GameResult<Turn> {
        self.execute(parse_command(input))
    }

    /// Resolve a parsed command against the current state.
    ///
    /// `Err` values are recoverable player-facing messages; the state is
    /// unchanged and the loop should continue.
    pub fn execute(&mut self, command: Command) -> GameResult<Turn> {
        match command {
            Command::Quit => Ok(Turn::over(render::farewell(), Ending::Quit)),
            Command::Help => Ok(Turn::next(render::instructions(
                self.world.total_collectible_items(),
            ))),
            Command::Status => Ok(Turn::next(render::status(&self.world, &self.player))),
            Command::Go { target } => self.do_move(&target),
            Command::Get { item } => self.do_get(&item),
            Command::Empty => Err(GameError::EmptyCommand),
            Command::Unknown { .. } => Err(GameError::UnknownCommand),
        }
    }

    fn here(&self) -> &Room {
        self.world
            .room(&self.player.location)
            .expect("player location is always a valid room")
    }

    fn do_move(&mut self, target: &str) -> GameResult<Turn> {
        let direction = Direction::parse(target).ok_or(GameError::InvalidDirection)?;
        let destination = self
            .here()
            .exit(direction)
            .ok_or(GameError::InvalidDirection)?
            .to_string();

        self.player.location = destination;

        if self.player.location == self.world.villain_room() {
            // Win/lose check fires on entry; either way the game is over
            if self.player.inventory.len() >= self.world.total_collectible_items() {
                Ok(Turn::over(render::victory(&self.world), Ending::Victory))
            } else {
                Ok(Turn::over(render::defeat(&self.world), Ending::Defeat))
            }
        } else {
            Ok(Turn::next(render::status(&self.world, &self.player)))
        }
    }

    fn do_get(&mut self, requested: &str) -> GameResult<Turn> {
        let item = match self.here().item() {
            Some(item) if item.eq_ignore_ascii_case(requested) => item.to_string(),
            _ => return Err(GameError::NoSuchItem),
        };

        if item == self.world.villain_item() {
            return Err(GameError::VillainPickup);
        }
        if self.player.has_item(&item) {
            return Err(GameError::AlreadyCollected(item));
        }

        self.player.add_item(item.clone());
        self.world.clear_item(&self.player.location);
        Ok(Turn::next(render::collected(&item, &self.player.inventory)))
    }
}

#[cfg(test)]
mod tests {
    use crate::map;

    use super::*;

    fn session() -> GameSession {
        GameSession::new(map::ship())
    }

    /// Collect every artifact and stop one move short of the Reactor Core.
    fn fully_equipped() -> GameSession {
        let mut session = session();
        let script = [
            "go South",
            "get Xenotech Circuit",
            "go South",
            "get Plasma Core",
            "go East",
            "get Holo Map",
            "go North",
            "get Stasis Key",
            "go West",
            "get Artifact Shard",
            "go West",
            "go West",
            "get Quantum Relic",
            "go East",
            "go East",
        ];
        for input in script {
            session.process(input).unwrap();
        }
        session
    }

    #[test]
    fn starts_at_the_start_room_with_empty_inventory() {
        let session = session();
        assert_eq!(session.player().location, "Bridge");
        assert!(session.player().inventory.is_empty());
    }

    #[test]
    fn move_and_move_back_restores_location() {
        let mut session = session();
        session.process("go South").unwrap();
        assert_eq!(session.player().location, "Engineering Bay");
        session.process("go North").unwrap();
        assert_eq!(session.player().location, "Bridge");
    }

    #[test]
    fn one_way_dead_end_has_no_onward_exit() {
        let mut session = session();
        session.process("go West").unwrap();
        session.process("go South").unwrap();
        assert_eq!(session.player().location, "Reactor Access");

        let result = session.process("go South");
        assert_eq!(result, Err(GameError::InvalidDirection));
        assert_eq!(session.player().location, "Reactor Access");
    }

    #[test]
    fn invalid_direction_leaves_state_unchanged() {
        let mut session = session();
        let result = session.process("go North");
        assert_eq!(result, Err(GameError::InvalidDirection));
        assert_eq!(session.player().location, "Bridge");
        assert!(session.player().inventory.is_empty());
    }

    #[test]
    fn direction_abbreviations_are_not_exits() {
        let mut session = session();
        let result = session.process("go s");
        assert_eq!(result, Err(GameError::InvalidDirection));
        assert_eq!(session.player().location, "Bridge");
    }

    #[test]
    fn movement_is_case_insensitive_and_whitespace_tolerant() {
        let mut session = session();
        let turn = session.process("   gO    sOuTh  ").unwrap();
        assert_eq!(session.player().location, "Engineering Bay");
        assert_eq!(turn.flow, Flow::Continue);
        assert!(turn.text.contains("You are in: Engineering Bay"));
    }

    #[test]
    fn collecting_clears_the_room_and_fills_the_inventory() {
        let mut session = session();
        session.process("go South").unwrap();

        let turn = session.process("get Xenotech Circuit").unwrap();
        assert!(
            turn.text
                .contains("Xenotech Circuit collected! Inventory now: Xenotech Circuit")
        );
        assert_eq!(session.player().inventory, vec!["Xenotech Circuit"]);
        assert_eq!(session.world().item("Engineering Bay"), None);

        // A second attempt fails: the room is empty now
        let result = session.process("get Xenotech Circuit");
        assert_eq!(result, Err(GameError::NoSuchItem));
        assert_eq!(session.player().inventory.len(), 1);
    }

    #[test]
    fn get_matches_case_insensitively() {
        let mut session = session();
        session.process("go South").unwrap();
        session.process("go South").unwrap();
        session.process("get PLASMA core").unwrap();
        assert_eq!(session.player().inventory, vec!["Plasma Core"]);
    }

    #[test]
    fn get_with_wrong_name_fails() {
        let mut session = session();
        session.process("go South").unwrap();
        let result = session.process("get Plasma Core");
        assert_eq!(result, Err(GameError::NoSuchItem));
        assert!(session.player().inventory.is_empty());
    }

    #[test]
    fn get_in_an_itemless_room_fails() {
        let mut session = session();
        let result = session.process("get Holo Map");
        assert_eq!(result, Err(GameError::NoSuchItem));
    }

    #[test]
    fn holo_map_scenario() {
        let mut session = session();
        session.process("go South").unwrap();
        session.process("go South").unwrap();
        session.process("go East").unwrap();
        session.process("get Holo Map").unwrap();

        assert_eq!(session.player().inventory, vec!["Holo Map"]);
        let status = session.process("status").unwrap();
        assert!(status.text.contains("Inventory: Holo Map"));
        assert!(!status.text.contains("You see a Holo Map"));
    }

    #[test]
    fn entering_the_villain_room_under_equipped_is_defeat() {
        let mut session = session();
        session.process("go East").unwrap();
        let turn = session.process("go East").unwrap();

        assert_eq!(turn.flow, Flow::Over(Ending::Defeat));
        assert!(turn.text.contains("GAME OVER"));
        assert_eq!(session.player().location, "Reactor Core");
    }

    #[test]
    fn entering_the_villain_room_fully_equipped_is_victory() {
        let mut session = fully_equipped();
        assert_eq!(session.player().location, "Observation Deck");
        assert_eq!(session.player().inventory.len(), 6);

        let turn = session.process("go East").unwrap();
        assert_eq!(turn.flow, Flow::Over(Ending::Victory));
        assert!(turn.text.contains("Congratulations!"));
    }

    #[test]
    fn five_artifacts_are_not_enough() {
        let mut session = fully_equipped();
        // Drop one artifact to fall below the threshold
        session.player_mut().inventory.pop();

        let turn = session.process("go East").unwrap();
        assert_eq!(turn.flow, Flow::Over(Ending::Defeat));
    }

    #[test]
    fn villain_item_can_never_be_collected() {
        // The fixed map ends the game on villain-room entry before any
        // `get` can run, so exercise the guard with the player placed
        // directly in the villain's room.
        let rooms = vec![Room::new("Lair").with_item("Alien Stalker")];
        let world = World::new(rooms, "Lair", "Lair", "Alien Stalker").unwrap();
        let mut session = GameSession::new(world);

        let result = session.process("get Alien Stalker");
        assert_eq!(result, Err(GameError::VillainPickup));
        assert!(session.player().inventory.is_empty());
        assert_eq!(session.world().item("Lair"), Some("Alien Stalker"));
    }

    #[test]
    fn duplicate_pickup_is_reported_not_repeated() {
        // Defensive branch: unreachable in normal play since collection
        // clears the room, so seed the inventory by hand.
        let mut session = session();
        session.player_mut().add_item("Xenotech Circuit");
        session.process("go South").unwrap();

        let result = session.process("get Xenotech Circuit");
        assert_eq!(
            result,
            Err(GameError::AlreadyCollected("Xenotech Circuit".to_string()))
        );
        assert_eq!(session.player().inventory.len(), 1);
        assert_eq!(
            session.world().item("Engineering Bay"),
            Some("Xenotech Circuit")
        );
    }

    #[test]
    fn quit_ends_the_game() {
        let mut session = session();
        let turn = session.process("quit").unwrap();
        assert_eq!(turn.flow, Flow::Over(Ending::Quit));
        assert!(turn.text.contains("Thanks for playing"));
    }

    #[test]
    fn help_reprints_the_instructions() {
        let mut session = session();
        let turn = session.process("help").unwrap();
        assert_eq!(turn.flow, Flow::Continue);
        assert!(turn.text.contains("Collect all 6 alien artifacts"));
    }

    #[test]
    fn empty_and_unknown_inputs_are_recoverable() {
        let mut session = session();
        assert_eq!(session.process("   "), Err(GameError::EmptyCommand));
        assert_eq!(session.process("dance"), Err(GameError::UnknownCommand));
        assert_eq!(session.player().location, "Bridge");
    }
}
