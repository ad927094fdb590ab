#![cfg(feature = "std")]

//! Text rendering of the clamped 5×5 visible window.

use crate::common::Coordinate;
use crate::config::VISIBLE_SIZE;
use crate::game::{Game, Turn};

/// Print the visible window with absolute board coordinates. Viewport cells
/// are parenthesized, strip cells bracketed, everything else padded.
pub fn print_visible(game: &Game) {
    let (vx, vy) = game.viewport().visible_origin();

    print!("    ");
    for x in vx..vx + VISIBLE_SIZE {
        print!(" {:^3}", x);
    }
    println!();
    for y in vy..vy + VISIBLE_SIZE {
        print!("{:3} ", y);
        for x in vx..vx + VISIBLE_SIZE {
            let cell = Coordinate::new(x, y);
            let mark = match game.board().at(x, y) {
                Some(m) => m.as_char(),
                None => '.',
            };
            if game.strip().contains(cell) {
                print!(" [{}]", mark);
            } else if game.viewport().contains(cell) {
                print!(" ({})", mark);
            } else {
                print!("  {} ", mark);
            }
        }
        println!();
    }
}

/// Print the one-line status panel under the board.
pub fn print_status(game: &Game) {
    if game.is_over() {
        println!("{}", game.message());
        return;
    }
    let turn = match game.current() {
        Turn::Player => "You (X)",
        Turn::Cpu => "CPU (O)",
    };
    let viewport = game.viewport();
    print!("Turn: {}  Viewport: ({}, {})", turn, viewport.x, viewport.y);
    if game.current() == Turn::Player && !game.strip().is_empty() {
        print!("  (optional: place in strip)");
    }
    println!();
}
