use std::fmt;
use std::str::FromStr;

use rand::Rng;
use tracing::debug;

use crate::banks;
use crate::cell::{Cell, Grid};
use crate::error::{Error, Result};
use crate::maze;
use crate::position::Position;
use crate::question::{normalize_answer, Fact, Question, QuestionBank};

/// Everything a session needs from a level: layout, questions in the order
/// they are asked, and the expected free-text answer for each question.
#[derive(Debug, Clone)]
pub struct Level {
    name: String,
    grid: Grid,
    start: Position,
    questions: Vec<Question>,
    answers: Vec<String>,
    facts: Vec<Fact>,
}

impl Level {
    /// Validates the layout: exactly one Start, exactly one Goal, and one
    /// expected answer per question.
    pub fn new(
        name: impl Into<String>,
        grid: Grid,
        questions: Vec<Question>,
        answers: Vec<String>,
    ) -> Result<Self> {
        let starts: Vec<Position> = grid.positions_of(Cell::Start).collect();
        if starts.len() != 1 {
            return Err(Error::InvalidLevel(format!(
                "expected exactly one start cell, found {}",
                starts.len()
            )));
        }
        let goals = grid.count(Cell::Goal);
        if goals != 1 {
            return Err(Error::InvalidLevel(format!(
                "expected exactly one goal cell, found {goals}"
            )));
        }
        if questions.len() != answers.len() {
            return Err(Error::InvalidLevel(format!(
                "{} questions but {} expected answers",
                questions.len(),
                answers.len()
            )));
        }

        Ok(Self {
            name: name.into(),
            grid,
            start: starts[0],
            questions,
            answers: answers.iter().map(|a| normalize_answer(a)).collect(),
            facts: Vec::new(),
        })
    }

    /// A hand-authored layout: open floor, Start at the origin, the given
    /// walls, and one Question cell per question plus the Goal scattered over
    /// what is left. Fails when there is not enough floor.
    pub fn fixed(
        name: impl Into<String>,
        rows: usize,
        cols: usize,
        walls: &[Position],
        questions: Vec<Question>,
        answers: Vec<String>,
        rng: &mut impl Rng,
    ) -> Result<Self> {
        let mut grid = maze::base_grid(rows, cols, walls);
        maze::place_questions_and_goal(&mut grid, rng, questions.len())?;
        Self::new(name, grid, questions, answers)
    }

    /// A generated maze holding one Question cell per drawn question. When the
    /// maze runs out of room, surplus questions are dropped so cells and
    /// questions stay paired.
    pub fn from_maze(
        name: impl Into<String>,
        rng: &mut impl Rng,
        size: usize,
        bank: &QuestionBank,
        draw: usize,
        infos: usize,
    ) -> Result<Self> {
        let (mut questions, mut answers) = bank.draw(rng, draw);
        let grid = maze::generate(rng, size, questions.len(), infos)?;

        let placed = grid.count(Cell::Question);
        if placed < questions.len() {
            debug!(placed, drawn = questions.len(), "dropping unplaced questions");
            questions.truncate(placed);
            answers.truncate(placed);
        }
        Self::new(name, grid, questions, answers)
    }

    pub fn with_facts(mut self, facts: Vec<Fact>) -> Self {
        self.facts = facts;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn expected_answers(&self) -> &[String] {
        &self.answers
    }

    pub fn facts(&self) -> &[Fact] {
        &self.facts
    }

    /// Question cells in row-major order.
    pub fn question_cells(&self) -> Vec<Position> {
        self.grid.positions_of(Cell::Question).collect()
    }
}

/// Difficulty tiers offered by the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Basic,
    Intermediate,
    Advanced,
    Legend,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::Basic, Tier::Intermediate, Tier::Advanced, Tier::Legend];

    pub fn label(self) -> &'static str {
        match self {
            Tier::Basic => "Basic",
            Tier::Intermediate => "Intermediate",
            Tier::Advanced => "Advanced",
            Tier::Legend => "Legend",
        }
    }

    /// Builds a fresh level for this tier.
    pub fn level(self, rng: &mut impl Rng) -> Result<Level> {
        let level = match self {
            Tier::Basic => Level::from_maze(self.label(), rng, 8, &banks::basic(), 5, 6)?,
            Tier::Intermediate => intermediate()?,
            Tier::Advanced => Level::from_maze(self.label(), rng, 32, &banks::advanced(), 8, 102)?,
            Tier::Legend => Level::from_maze(self.label(), rng, 64, &banks::legend(), 10, 409)?,
        };
        Ok(level.with_facts(banks::facts()))
    }
}

fn intermediate() -> Result<Level> {
    let mut grid = maze::base_grid(6, 6, &[Position::new(1, 1), Position::new(2, 2)]);
    grid.set(Position::new(5, 5), Cell::Goal);
    for pos in [Position::new(1, 3), Position::new(2, 4), Position::new(3, 1)] {
        grid.set(pos, Cell::Question);
    }

    let (questions, answers) = banks::intermediate().all();
    Level::new(Tier::Intermediate.label(), grid, questions, answers)
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "basic" | "beginner" | "basico" | "principiante" => Ok(Tier::Basic),
            "intermediate" | "intermedio" => Ok(Tier::Intermediate),
            "advanced" | "avanzado" => Ok(Tier::Advanced),
            "legend" | "leyenda" => Ok(Tier::Legend),
            _ => Err(Error::UnknownTier(s.to_string())),
        }
    }
}
