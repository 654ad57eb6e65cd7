//! worldventure: a maze quiz game core.
//!
//! A level is a grid of typed cells (usually a randomly carved perfect maze)
//! plus an ordered list of questions. A [`GameSession`] walks a [`Player`]
//! through it, asking the pending question on Question cells, until the
//! player reaches the Goal, runs out of lives, or quits.
//!
//! All randomness comes in through `&mut impl rand::Rng`, so seeding a
//! `StdRng` makes levels reproducible.

pub mod banks;
pub mod cell;
pub mod config;
pub mod error;
pub mod game;
pub mod level;
pub mod maze;
pub mod player;
pub mod position;
pub mod question;
pub mod validate;

pub use cell::{Cell, Grid};
pub use error::{Error, Result};
pub use game::{Encounter, GameSession, GameState, Outcome};
pub use level::{Level, Tier};
pub use player::Player;
pub use position::{Direction, Position};
pub use question::{Fact, Question, QuestionBank};
