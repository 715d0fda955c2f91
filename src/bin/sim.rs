use pig::{ComputerPlayer, Game, RngRoller};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let rng = SmallRng::seed_from_u64(seed);
    let mut game = Game::new(
        Box::new(ComputerPlayer::new("Player 1")),
        Box::new(ComputerPlayer::new("Player 2")),
        Box::new(RngRoller::new(rng)),
    );
    let winner = game.play().name().to_string();

    let result = json!({
        "seed": seed,
        "winner": winner,
        "scores": {
            "Player 1": game.player(0).score(),
            "Player 2": game.player(1).score(),
        },
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
