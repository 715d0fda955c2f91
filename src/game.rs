use crate::{config::TARGET_SCORE, dice::DieRoller, player::Player};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
}

/// Core game loop holding exactly two players and the shared die.
///
/// Turn order alternates strictly from player 0, including turns that earn
/// nothing; the loop only exits once a score reaches `TARGET_SCORE`.
pub struct Game {
    players: [Box<dyn Player>; 2],
    dice: Box<dyn DieRoller>,
}

impl Game {
    pub fn new(p1: Box<dyn Player>, p2: Box<dyn Player>, dice: Box<dyn DieRoller>) -> Self {
        Self {
            players: [p1, p2],
            dice,
        }
    }

    /// Immutable view of one player; `idx` is 0 or 1.
    pub fn player(&self, idx: usize) -> &dyn Player {
        self.players[idx].as_ref()
    }

    /// Run one turn for `idx`, banking the earned points.
    pub fn play_turn(&mut self, idx: usize) -> GameStatus {
        let current = &mut self.players[idx];
        let earned = current.take_turn(self.dice.as_mut());
        current.add_points(earned);
        log::debug!(
            "{} earned {} (total {})",
            current.name(),
            earned,
            current.score()
        );
        println!("{} total score: {}", current.name(), current.score());
        if current.score() >= TARGET_SCORE {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    /// Play until a player reaches the target score and return the winner.
    pub fn play(&mut self) -> &dyn Player {
        let mut turn = 0;
        loop {
            let idx = turn % 2;
            if self.play_turn(idx) == GameStatus::Won {
                println!("\n{} wins!", self.players[idx].name());
                return self.players[idx].as_ref();
            }
            turn += 1;
        }
    }
}
