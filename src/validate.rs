//! Input and precondition checks shared by the session and the front end.

use crate::cell::Grid;
use crate::level::Tier;
use crate::player::Player;
use crate::position::{Direction, Position};
use crate::question::Question;

pub const MAX_NAME_LEN: usize = 20;

/// Non-empty after trimming, at most 20 characters, ASCII letters, digits and
/// spaces only.
pub fn is_valid_name(name: &str) -> bool {
    let name = name.trim();
    !name.is_empty()
        && name.chars().count() <= MAX_NAME_LEN
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == ' ')
}

pub fn is_valid_tier_label(label: &str) -> bool {
    label.parse::<Tier>().is_ok()
}

/// The destination must exist and must not be a wall.
pub fn can_move(grid: &Grid, from: Position, dir: Direction) -> bool {
    grid.walkable_neighbor(from, dir).is_some()
}

pub fn can_start(player: Option<&Player>, questions: &[Question]) -> bool {
    match player {
        Some(p) => is_valid_name(p.name()) && !questions.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;
    use rstest::rstest;

    #[rstest]
    #[case("Alice", true)]
    #[case("  Bob 42  ", true)]
    #[case("Ana Maria", true)]
    #[case("", false)]
    #[case("   ", false)]
    #[case("Mal@Nombre", false)]
    #[case("José", false)]
    #[case("abcdefghijklmnopqrstu", false)]
    #[case("abcdefghijklmnopqrst", true)]
    fn name_rules(#[case] name: &str, #[case] ok: bool) {
        assert_eq!(is_valid_name(name), ok);
    }

    #[rstest]
    #[case("basic", true)]
    #[case(" Intermedio ", true)]
    #[case("ADVANCED", true)]
    #[case("leyenda", true)]
    #[case("expert", false)]
    #[case("", false)]
    fn tier_labels(#[case] label: &str, #[case] ok: bool) {
        assert_eq!(is_valid_tier_label(label), ok);
    }

    #[test]
    fn moves_blocked_by_walls_and_edges() {
        let grid = Grid::from_rows(vec![
            vec![Cell::Start, Cell::Wall],
            vec![Cell::Free, Cell::Goal],
        ])
        .unwrap();
        assert!(can_move(&grid, Position::ORIGIN, Direction::Down));
        assert!(!can_move(&grid, Position::ORIGIN, Direction::Right));
        assert!(!can_move(&grid, Position::ORIGIN, Direction::Up));
        assert!(!can_move(&grid, Position::new(1, 1), Direction::Down));
        assert!(!can_move(&Grid::new(0, 0, Cell::Free), Position::ORIGIN, Direction::Down));
    }

    #[test]
    fn start_requires_player_name_and_questions() {
        let questions = vec![Question::free_text("q", 10)];
        let good = Player::new("Alice", "Basic");
        let bad = Player::new("Mal@Nombre", "Basic");
        assert!(can_start(Some(&good), &questions));
        assert!(!can_start(Some(&bad), &questions));
        assert!(!can_start(Some(&good), &[]));
        assert!(!can_start(None, &questions));
    }
}
