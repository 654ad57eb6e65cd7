//! Level layout generation.
//!
//! Two placement policies live here and deliberately behave differently:
//!
//! - [`generate`] carves a perfect maze and scatters special cells by
//!   rejection sampling. When the retry budget runs out it keeps whatever it
//!   managed to place.
//! - [`place_questions_and_goal`] works on a hand-authored [`base_grid`] and
//!   draws positions without replacement. It refuses outright when the grid is
//!   too small.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

use crate::cell::{Cell, Grid};
use crate::error::{Error, Result};
use crate::position::{Direction, Position};

/// Placement attempts allowed per requested special cell.
pub const RETRY_FACTOR: usize = 10;

/// Smallest maze that leaves room for a goal besides the start.
pub const MIN_MAZE_SIZE: usize = 3;

/// Generates a `size`×`size` perfect maze with a Start at the origin, one Goal,
/// and up to `questions` Question and `infos` Info cells.
///
/// Every non-wall cell is reachable from the start and there are no loops.
pub fn generate(rng: &mut impl Rng, size: usize, questions: usize, infos: usize) -> Result<Grid> {
    if size < MIN_MAZE_SIZE {
        return Err(Error::MazeTooSmall { size });
    }

    let mut grid = Grid::new(size, size, Cell::Wall);
    carve_passages(&mut grid, rng);
    grid.set(Position::ORIGIN, Cell::Start);

    let goal = place_goal(&mut grid, rng);
    let placed_questions = scatter(&mut grid, rng, Cell::Question, questions, goal);
    let placed_infos = scatter(&mut grid, rng, Cell::Info, infos, goal);

    debug!(
        size,
        open = size * size - grid.count(Cell::Wall),
        goal = %goal,
        questions = placed_questions,
        infos = placed_infos,
        "generated maze"
    );
    Ok(grid)
}

struct Frame {
    pos: Position,
    dirs: [Direction; 4],
    next: usize,
}

fn open_cell(grid: &mut Grid, pos: Position, rng: &mut impl Rng) -> Frame {
    grid.set(pos, Cell::Free);
    let mut dirs = Direction::ALL;
    dirs.shuffle(rng);
    Frame { pos, dirs, next: 0 }
}

/// Recursive backtracking on the half-resolution lattice, driven by an explicit
/// stack. Each cell tries its four two-step neighbours in a shuffled order and
/// carves through the wall between them when the target is still solid.
fn carve_passages(grid: &mut Grid, rng: &mut impl Rng) {
    let mut stack = vec![open_cell(grid, Position::ORIGIN, rng)];

    while let Some(frame) = stack.last_mut() {
        if frame.next == frame.dirs.len() {
            stack.pop();
            continue;
        }
        let dir = frame.dirs[frame.next];
        frame.next += 1;
        let pos = frame.pos;

        let Some(between) = pos.step(dir) else {
            continue;
        };
        let Some(target) = between.step(dir) else {
            continue;
        };
        if grid.get(target) == Some(Cell::Wall) {
            grid.set(between, Cell::Free);
            stack.push(open_cell(grid, target, rng));
        }
    }
}

/// Redraws uniformly until it hits an open cell other than the origin. Callers
/// guarantee at least one such cell exists.
fn place_goal(grid: &mut Grid, rng: &mut impl Rng) -> Position {
    loop {
        let pos = Position::new(rng.gen_range(0..grid.rows()), rng.gen_range(0..grid.cols()));
        if pos != Position::ORIGIN && grid.get(pos) != Some(Cell::Wall) {
            grid.set(pos, Cell::Goal);
            return pos;
        }
    }
}

fn scatter(grid: &mut Grid, rng: &mut impl Rng, kind: Cell, count: usize, goal: Position) -> usize {
    let budget = count * RETRY_FACTOR;
    let mut placed = 0;
    let mut attempts = 0;

    while placed < count && attempts < budget {
        let pos = Position::new(rng.gen_range(0..grid.rows()), rng.gen_range(0..grid.cols()));
        if grid.get(pos) == Some(Cell::Free) && pos != Position::ORIGIN && pos != goal {
            grid.set(pos, kind);
            placed += 1;
        }
        attempts += 1;
    }

    if placed < count {
        warn!(?kind, requested = count, placed, "placement budget exhausted");
    }
    placed
}

/// An all-Free grid with the Start at the origin and walls at `walls`.
/// Out-of-bounds walls and a wall on the origin are ignored.
pub fn base_grid(rows: usize, cols: usize, walls: &[Position]) -> Grid {
    let mut grid = Grid::new(rows, cols, Cell::Free);
    grid.set(Position::ORIGIN, Cell::Start);
    for &pos in walls {
        if pos != Position::ORIGIN {
            grid.set(pos, Cell::Wall);
        }
    }
    grid
}

/// Turns `questions` random Free cells into Questions and one more into the
/// Goal, sampling without replacement.
pub fn place_questions_and_goal(grid: &mut Grid, rng: &mut impl Rng, questions: usize) -> Result<()> {
    let mut free: Vec<Position> = grid.positions_of(Cell::Free).collect();
    if free.len() < questions + 1 {
        return Err(Error::NotEnoughFreeCells {
            requested: questions,
            available: free.len(),
        });
    }

    free.shuffle(rng);
    for &pos in &free[..questions] {
        grid.set(pos, Cell::Question);
    }
    grid.set(free[questions], Cell::Goal);
    Ok(())
}
