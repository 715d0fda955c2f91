use crate::{
    common::GameError, player::Player, player_computer::ComputerPlayer,
    player_human::HumanPlayer,
};

/// Construct a player from a kind selector. Accepts case-insensitive
/// `"human"` or `"computer"`; anything else is a configuration error.
pub fn create_player(kind: &str, name: &str) -> Result<Box<dyn Player>, GameError> {
    match kind.to_ascii_lowercase().as_str() {
        "human" => Ok(Box::new(HumanPlayer::new(name))),
        "computer" => Ok(Box::new(ComputerPlayer::new(name))),
        _ => Err(GameError::UnknownPlayerKind(kind.to_string())),
    }
}
