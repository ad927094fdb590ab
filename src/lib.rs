#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod ai;
mod board;
mod cellset;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod ui;
mod viewport;
mod win;

pub use ai::*;
pub use board::*;
pub use cellset::CellSet;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use ui::*;
pub use viewport::*;
pub use win::*;
