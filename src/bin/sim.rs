#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use rand::{rngs::SmallRng, Rng, SeedableRng};
#[cfg(feature = "std")]
use serde_json::json;
#[cfg(feature = "std")]
use tictacshift::{Coordinate, Direction, Game, GameStatus};

/// One legal option for the random-policy player.
#[cfg(feature = "std")]
#[derive(Clone, Copy)]
enum Choice {
    Shift(Direction),
    Place(Coordinate),
}

/// Apply a uniformly random legal action for the player. Returns false when
/// no action is legal (does not occur in reachable states).
#[cfg(feature = "std")]
fn random_player_action(game: &mut Game, rng: &mut SmallRng) -> bool {
    let mut options = Vec::new();
    for dir in Direction::ALL {
        if game.viewport().shifted(dir).is_some() {
            options.push(Choice::Shift(dir));
        }
    }
    for &cell in game.strip().cells() {
        if game.board().is_empty_cell(cell) {
            options.push(Choice::Place(cell));
        }
    }
    if options.is_empty() {
        return false;
    }
    match options[rng.random_range(0..options.len())] {
        Choice::Shift(dir) => game.player_shift(dir, rng),
        Choice::Place(cell) => game.player_place(cell, rng),
    }
}

/// Pit a random-policy player against the heuristic CPU and print a JSON
/// summary, for eyeballing how strong the heuristic is.
#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <games>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: u64 = args[2].parse()?;

    let mut player_wins = 0u64;
    let mut cpu_wins = 0u64;
    let mut unfinished = 0u64;
    let mut total_actions = 0u64;

    for i in 0..games {
        let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(i));
        let mut game = Game::new();
        let mut actions = 0u64;
        while !game.is_over() && actions < 500 {
            if !random_player_action(&mut game, &mut rng) {
                break;
            }
            actions += 1;
        }
        total_actions += actions;
        match game.status() {
            GameStatus::PlayerWon => player_wins += 1,
            GameStatus::CpuWon => cpu_wins += 1,
            GameStatus::InProgress => unfinished += 1,
        }
    }

    let result = json!({
        "games": games,
        "player_wins": player_wins,
        "cpu_wins": cpu_wins,
        "unfinished": unfinished,
        "avg_player_actions": total_actions as f64 / games as f64,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
