use std::time::Duration;

/// Score a player must reach to win the game.
pub const TARGET_SCORE: u32 = 100;
/// Turn total a computer player aims for before holding.
pub const CPU_HOLD_DEFAULT: u32 = 25;
/// Wall-clock limit applied by `TimedGame::new`.
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(60);
