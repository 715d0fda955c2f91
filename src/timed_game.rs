use std::time::{Duration, Instant};

use crate::{
    config::DEFAULT_TIME_LIMIT,
    game::{Game, GameStatus},
    player::Player,
};

/// Wraps a `Game` with a wall-clock limit. The deadline is checked only at
/// turn boundaries, so a turn already underway always completes; reaching the
/// target score inside such a turn still wins outright.
pub struct TimedGame {
    game: Game,
    limit: Duration,
}

impl TimedGame {
    /// Wrap with the default 60-second limit.
    pub fn new(game: Game) -> Self {
        Self::with_limit(game, DEFAULT_TIME_LIMIT)
    }

    pub fn with_limit(game: Game, limit: Duration) -> Self {
        Self { game, limit }
    }

    /// Play until someone reaches the target score or the clock runs out.
    /// At timeout the higher score wins; an exact tie goes to player 0.
    pub fn play(&mut self) -> &dyn Player {
        let start = Instant::now();
        let mut turn = 0;
        loop {
            if start.elapsed() >= self.limit {
                log::debug!("time limit {:?} reached after {} turns", self.limit, turn);
                println!("\nTime is up!");
                let (s1, s2) = (self.game.player(0).score(), self.game.player(1).score());
                if s1 == s2 {
                    let winner = self.game.player(0);
                    println!(
                        "Tie on points ({}). {} wins by tiebreak.",
                        s1,
                        winner.name()
                    );
                    return winner;
                }
                let winner = self.game.player(if s1 > s2 { 0 } else { 1 });
                println!("Leader at time up: {}", winner.name());
                return winner;
            }
            let idx = turn % 2;
            if self.game.play_turn(idx) == GameStatus::Won {
                println!("\n{} wins!", self.game.player(idx).name());
                return self.game.player(idx);
            }
            turn += 1;
        }
    }
}
