mod common;
mod config;
mod dice;
mod factory;
mod game;
mod logging;
mod player;
mod player_computer;
mod player_human;
mod timed_game;

pub use common::*;
pub use config::*;
pub use dice::*;
pub use factory::*;
pub use game::*;
pub use logging::init_logging;
pub use player::*;
pub use player_computer::*;
pub use player_human::*;
pub use timed_game::*;
