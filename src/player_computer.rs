use crate::{
    config::{CPU_HOLD_DEFAULT, TARGET_SCORE},
    dice::DieRoller,
    player::Player,
};

/// Deterministic computer player: keeps rolling until the turn total reaches
/// `min(CPU_HOLD_DEFAULT, TARGET_SCORE - score)`, so it never chases more
/// points than it needs to win.
pub struct ComputerPlayer {
    name: String,
    score: u32,
}

impl ComputerPlayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
        }
    }
}

impl Player for ComputerPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn score(&self) -> u32 {
        self.score
    }

    fn add_points(&mut self, earned: u32) {
        self.score += earned;
    }

    fn take_turn(&mut self, dice: &mut dyn DieRoller) -> u32 {
        let threshold = CPU_HOLD_DEFAULT.min(TARGET_SCORE.saturating_sub(self.score));
        log::debug!("{} holds at threshold {}", self.name, threshold);
        println!(
            "\n{}'s turn (CPU). Score = {}, threshold = {}",
            self.name, self.score, threshold
        );
        let mut turn_total = 0;
        while turn_total < threshold {
            let roll = dice.roll();
            println!("{} rolled {}", self.name, roll);
            if roll == 1 {
                println!("Pig! CPU turn ends with 0.");
                return 0;
            }
            turn_total += u32::from(roll);
        }
        println!("{} holds with {}", self.name, turn_total);
        turn_total
    }
}
