use crate::dice::DieRoller;

/// Interface implemented by different player types.
///
/// A player only decides how its turn plays out; banking the points it earned
/// is the game loop's job, via `add_points`.
pub trait Player {
    /// Display name used in prompts and result lines.
    fn name(&self) -> &str;

    /// Total score banked so far.
    fn score(&self) -> u32;

    /// Fold a completed turn's earnings into the score. Called by the game
    /// loop exactly once per turn.
    fn add_points(&mut self, earned: u32);

    /// Play one turn and return the points earned. Rolling a 1 forfeits the
    /// turn and returns 0; holding returns the accumulated turn total.
    fn take_turn(&mut self, dice: &mut dyn DieRoller) -> u32;
}

impl std::fmt::Debug for dyn Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name())
            .field("score", &self.score())
            .finish()
    }
}
