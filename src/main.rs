use clap::Parser;
use pig::{create_player, init_logging, Game, RngRoller, TimedGame};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Pig dice game: first to 100 wins", long_about = None)]
struct Cli {
    /// Kind of player 1: human or computer.
    #[arg(long)]
    player1: String,

    /// Kind of player 2: human or computer.
    #[arg(long)]
    player2: String,

    /// Enable the 60-second timed mode (leader at time up wins).
    #[arg(long)]
    timed: bool,

    /// Fix RNG seed for reproducible games (e.g., --seed 12345).
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let p1 = create_player(&cli.player1, "Player 1")?;
    let p2 = create_player(&cli.player2, "Player 2")?;

    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let rng = match cli.seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };

    let game = Game::new(p1, p2, Box::new(RngRoller::new(rng)));
    let (name, score) = if cli.timed {
        let mut timed = TimedGame::new(game);
        let winner = timed.play();
        (winner.name().to_string(), winner.score())
    } else {
        let mut game = game;
        let winner = game.play();
        (winner.name().to_string(), winner.score())
    };

    println!("\nWinner: {} (Score: {})", name, score);
    Ok(())
}
