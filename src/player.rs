use crate::position::Position;

pub const STARTING_LIVES: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    level: String,
    lives: u32,
    score: u32,
    position: Position,
}

impl Player {
    pub fn new(name: impl Into<String>, level: impl Into<String>) -> Self {
        Self::with_lives(name, level, STARTING_LIVES)
    }

    pub fn with_lives(name: impl Into<String>, level: impl Into<String>, lives: u32) -> Self {
        Self {
            name: name.into(),
            level: level.into(),
            lives,
            score: 0,
            position: Position::ORIGIN,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> &str {
        &self.level
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_alive(&self) -> bool {
        self.lives > 0
    }

    pub(crate) fn move_to(&mut self, pos: Position) {
        self.position = pos;
    }

    pub(crate) fn add_points(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    pub(crate) fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_player_defaults() {
        let p = Player::new("Alice", "Basic");
        assert_eq!(p.lives(), 3);
        assert_eq!(p.score(), 0);
        assert_eq!(p.position(), Position::ORIGIN);
        assert_eq!(p.level(), "Basic");
        assert!(p.is_alive());
    }

    #[test]
    fn lives_floor_at_zero() {
        let mut p = Player::with_lives("Bob", "Basic", 1);
        p.lose_life();
        p.lose_life();
        assert_eq!(p.lives(), 0);
        assert!(!p.is_alive());
    }

    #[test]
    fn points_accumulate() {
        let mut p = Player::new("Carol", "Basic");
        p.add_points(10);
        p.add_points(0);
        p.add_points(15);
        assert_eq!(p.score(), 25);
    }
}
