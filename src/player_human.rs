use std::io::{self, BufRead, BufReader, Write};

use crate::{dice::DieRoller, player::Player};

/// Interactive player driven from a line-oriented input source. `new` wires
/// stdin; tests swap in a scripted reader the same way the dice source is
/// swapped.
pub struct HumanPlayer {
    name: String,
    score: u32,
    input: Box<dyn BufRead>,
}

impl HumanPlayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_input(name, Box::new(BufReader::new(io::stdin())))
    }

    pub fn with_input(name: impl Into<String>, input: Box<dyn BufRead>) -> Self {
        Self {
            name: name.into(),
            score: 0,
            input,
        }
    }

    /// Read one trimmed line. `None` means the input source is exhausted.
    fn read_choice(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_ascii_lowercase()),
        }
    }
}

impl Player for HumanPlayer {
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
        let mut turn_total = 0;
        println!("\n{}'s turn. Current score = {}", self.name, self.score);
        loop {
            print!("Roll or Hold? (r/h): ");
            let _ = io::stdout().flush();
            let choice = match self.read_choice() {
                Some(choice) => choice,
                // Input exhausted: bank whatever the turn earned so far.
                None => {
                    println!("\n{} holds with {} this turn.", self.name, turn_total);
                    return turn_total;
                }
            };
            match choice.as_str() {
                "h" => {
                    println!("{} holds with {} this turn.", self.name, turn_total);
                    return turn_total;
                }
                "r" => {
                    let roll = dice.roll();
                    println!("Rolled: {}", roll);
                    if roll == 1 {
                        println!("Pig! Turn ends with 0.");
                        return 0;
                    }
                    turn_total += u32::from(roll);
                    println!("Turn total: {}", turn_total);
                }
                _ => println!("Please type 'r' or 'h'."),
            }
        }
    }
}
