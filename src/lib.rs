//! Timed navigation through randomly generated perfect mazes.
//!
//! The core is [`grid::Grid`], carved by [`generator::generate`] with an
//! iterative backtracker, plus [`player::Player`] and [`session::Session`].
//! [`game::Game`] owns all three; the terminal shell lives in [`render`]
//! and [`input`].

pub mod cell;
pub mod config;
pub mod error;
pub mod game;
pub mod generator;
pub mod grid;
pub mod input;
pub mod level;
pub mod logging;
pub mod player;
pub mod render;
pub mod session;

pub use cell::{Cell, Dir, Pos, Walls};
pub use error::{Error, Result};
pub use game::{Game, MoveOutcome};
pub use generator::{generate, RandomChoice, ScriptedChoice};
pub use grid::Grid;
pub use level::Difficulty;
pub use player::Player;
pub use session::{Countdown, Session, TickOutcome, TimerState};
