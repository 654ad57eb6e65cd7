//! The game session state machine.
//!
//! A session moves `NotStarted -> Running -> Ended` and never goes back.
//! Only [`GameSession::start`] can fail; everything else answers `false` or
//! `None` on bad input so the front end can keep going.

use tracing::{debug, info};

use crate::cell::{Cell, Grid};
use crate::error::{Error, Result};
use crate::level::Level;
use crate::player::Player;
use crate::position::{Direction, Position};
use crate::question::{normalize_answer, Fact, Question};
use crate::validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    NotStarted,
    Running,
    Ended,
}

/// How an ended session finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
    Quit,
}

/// What the player is standing on, as far as the front end cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encounter<'a> {
    Nothing,
    Question(&'a Question),
    Fact(&'a Fact),
    Goal,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    player: Player,
    level: Level,
    state: GameState,
    pending: usize,
    outcome: Option<Outcome>,
}

impl GameSession {
    /// Places the player on the level's start cell.
    pub fn new(mut player: Player, level: Level) -> Self {
        player.move_to(level.start());
        Self {
            player,
            level,
            state: GameState::NotStarted,
            pending: 0,
            outcome: None,
        }
    }

    pub fn can_start(&self) -> bool {
        validate::can_start(Some(&self.player), self.level.questions())
    }

    pub fn start(&mut self) -> Result<()> {
        match self.state {
            GameState::Running => Ok(()),
            GameState::Ended => Err(Error::SessionEnded),
            GameState::NotStarted => {
                if !self.can_start() {
                    return Err(Error::CannotStart);
                }
                self.state = GameState::Running;
                info!(
                    player = self.player.name(),
                    level = self.level.name(),
                    questions = self.level.questions().len(),
                    "session started"
                );
                Ok(())
            }
        }
    }

    /// Ends the session. Safe to call any number of times.
    pub fn terminate(&mut self) {
        if self.state == GameState::Ended {
            return;
        }
        let outcome = if self.at_goal() { Outcome::Won } else { Outcome::Quit };
        self.end(outcome);
    }

    fn end(&mut self, outcome: Outcome) {
        self.state = GameState::Ended;
        self.outcome = Some(outcome);
        info!(
            ?outcome,
            score = self.player.score(),
            lives = self.player.lives(),
            "session ended"
        );
    }

    pub fn is_running(&self) -> bool {
        self.state == GameState::Running
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// `None` until the session has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Moves one cell if the destination is inside the grid and not a wall.
    /// Returns false, leaving the position untouched, otherwise or when the
    /// session is not running.
    pub fn try_move(&mut self, dir: impl Into<Option<Direction>>) -> bool {
        let Some(dir) = dir.into() else {
            return false;
        };
        if !self.is_running() {
            return false;
        }

        let from = self.player.position();
        match self.level.grid().walkable_neighbor(from, dir) {
            Some(to) => {
                self.player.move_to(to);
                debug!(?dir, from = %from, to = %to, "moved");
                true
            }
            None => {
                debug!(?dir, from = %from, "move rejected");
                false
            }
        }
    }

    /// The question waiting to be answered, if any remain.
    pub fn current_question(&self) -> Option<&Question> {
        self.level.questions().get(self.pending)
    }

    pub fn pending_index(&self) -> usize {
        self.pending
    }

    /// Expected answer text for the pending question. Falls back to the
    /// correct option when the level stores no text for it.
    pub fn expected_answer(&self) -> Option<&str> {
        let question = self.current_question()?;
        match self.level.expected_answers().get(self.pending) {
            Some(text) if !text.is_empty() => Some(text.as_str()),
            _ => question.correct_option(),
        }
    }

    /// Resolves the pending question with an option index.
    pub fn answer(&mut self, selected: usize) -> bool {
        let Some(question) = self.current_question() else {
            return false;
        };
        let correct = question.is_correct(selected);
        self.resolve(correct)
    }

    /// Resolves the pending question with typed text, compared
    /// case-insensitively after trimming.
    pub fn answer_text(&mut self, text: &str) -> bool {
        let Some(expected) = self.expected_answer() else {
            return false;
        };
        let correct = normalize_answer(text) == normalize_answer(expected);
        self.resolve(correct)
    }

    fn resolve(&mut self, correct: bool) -> bool {
        if !self.is_running() {
            return false;
        }
        let Some(points) = self.current_question().map(Question::points) else {
            return false;
        };

        if correct {
            self.player.add_points(points);
            self.pending += 1;
            debug!(points, score = self.player.score(), "correct answer");
        } else {
            self.player.lose_life();
            debug!(lives = self.player.lives(), "wrong answer");
            if !self.player.is_alive() {
                self.end(Outcome::Lost);
            }
        }
        correct
    }

    pub fn at_goal(&self) -> bool {
        self.grid().get(self.player.position()) == Some(Cell::Goal)
    }

    /// Classifies the player's current cell. Question cells only count while a
    /// question is pending. Each Info cell maps to a fixed fact by its
    /// row-major rank.
    pub fn encounter(&self) -> Encounter<'_> {
        let pos = self.player.position();
        match self.grid().get(pos) {
            Some(Cell::Question) => self
                .current_question()
                .map_or(Encounter::Nothing, Encounter::Question),
            Some(Cell::Info) => self.fact_at(pos).map_or(Encounter::Nothing, Encounter::Fact),
            Some(Cell::Goal) => Encounter::Goal,
            _ => Encounter::Nothing,
        }
    }

    fn fact_at(&self, pos: Position) -> Option<&Fact> {
        let facts = self.level.facts();
        if facts.is_empty() {
            return None;
        }
        let rank = self
            .grid()
            .positions_of(Cell::Info)
            .take_while(|p| *p != pos)
            .count();
        facts.get(rank % facts.len())
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn level_name(&self) -> &str {
        self.level.name()
    }

    pub fn grid(&self) -> &Grid {
        self.level.grid()
    }
}
