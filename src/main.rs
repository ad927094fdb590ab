#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::io::{self, Write};
#[cfg(feature = "std")]
use tictacshift::{
    init_logging, print_status, print_visible, Coordinate, Direction, Game,
};

/// Tic-Tac-Shift: slide a 3x3 viewport over a 20x20 board and race the CPU
/// to three in a row inside the revealed strips.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Fix the RNG seed for reproducible games (e.g., --seed 12345).
    #[arg(long)]
    seed: Option<u64>,
}

#[cfg(feature = "std")]
fn parse_command(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();
    match parts.next()? {
        "w" | "up" => Some(Command::Shift(Direction::Up)),
        "s" | "down" => Some(Command::Shift(Direction::Down)),
        "a" | "left" => Some(Command::Shift(Direction::Left)),
        "d" | "right" => Some(Command::Shift(Direction::Right)),
        "p" | "place" => {
            let x = parts.next()?.parse().ok()?;
            let y = parts.next()?.parse().ok()?;
            Some(Command::Place(Coordinate::new(x, y)))
        }
        "r" | "restart" => Some(Command::Restart),
        "q" | "quit" => Some(Command::Quit),
        _ => None,
    }
}

#[cfg(feature = "std")]
enum Command {
    Shift(Direction),
    Place(Coordinate),
    Restart,
    Quit,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };
    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }

    println!("Tic-Tac-Shift");
    println!("Commands: w/a/s/d (shift), p <x> <y> (place in strip), r (restart), q (quit)");

    let mut game = Game::new();
    loop {
        print_visible(&game);
        print_status(&game);

        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_command(line) {
            Some(Command::Shift(dir)) => {
                if !game.player_shift(dir, &mut rng) {
                    println!("Illegal shift");
                }
            }
            Some(Command::Place(cell)) => {
                if !game.player_place(cell, &mut rng) {
                    println!("Illegal placement");
                }
            }
            Some(Command::Restart) => {
                game = Game::new();
                println!("New game started");
            }
            Some(Command::Quit) => break,
            None => println!("Invalid input"),
        }
    }
    Ok(())
}
