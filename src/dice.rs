use rand::Rng;

/// Source of six-sided die outcomes. Injected into the game so tests can
/// substitute a deterministic sequence.
pub trait DieRoller {
    /// Produce one die throw, uniformly distributed over 1..=6.
    fn roll(&mut self) -> u8;
}

/// Production roller backed by any `rand` generator. The binaries seed a
/// `SmallRng` so games are reproducible with `--seed`.
pub struct RngRoller<R: Rng> {
    rng: R,
}

impl<R: Rng> RngRoller<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> DieRoller for RngRoller<R> {
    fn roll(&mut self) -> u8 {
        self.rng.random_range(1..=6)
    }
}

/// Replays a fixed sequence of outcomes, cycling once exhausted.
pub struct ScriptedRoller {
    rolls: Vec<u8>,
    next: usize,
}

impl ScriptedRoller {
    /// Values outside 1..=6 or an empty script are a programming error.
    pub fn new(rolls: Vec<u8>) -> Self {
        assert!(!rolls.is_empty(), "scripted roller needs at least one roll");
        debug_assert!(rolls.iter().all(|r| (1..=6).contains(r)));
        Self { rolls, next: 0 }
    }
}

impl DieRoller for ScriptedRoller {
    fn roll(&mut self) -> u8 {
        let roll = self.rolls[self.next % self.rolls.len()];
        self.next += 1;
        roll
    }
}
