use rand::rngs::StdRng;
use rand::SeedableRng;
use rstest::rstest;
use worldventure::question::normalize_answer;
use worldventure::{Cell, Encounter, GameSession, Player, Position, Tier};

#[rstest]
#[case(Tier::Basic, 8)]
#[case(Tier::Intermediate, 6)]
#[case(Tier::Advanced, 32)]
#[case(Tier::Legend, 64)]
fn every_tier_builds_a_playable_level(#[case] tier: Tier, #[case] size: usize) {
    let mut rng = StdRng::seed_from_u64(2024);
    let level = tier.level(&mut rng).unwrap();

    assert_eq!(level.name(), tier.label());
    assert_eq!(level.grid().rows(), size);
    assert_eq!(level.grid().cols(), size);
    assert_eq!(level.start(), Position::ORIGIN);
    assert_eq!(level.grid().count(Cell::Goal), 1);
    assert!(!level.questions().is_empty());
    assert_eq!(level.question_cells().len(), level.questions().len());
    assert_eq!(level.expected_answers().len(), level.questions().len());
    assert!(level.grid().is_connected_from(level.start()));
    assert!(!level.facts().is_empty());
}

#[rstest]
#[case(Tier::Basic)]
#[case(Tier::Advanced)]
#[case(Tier::Legend)]
fn maze_tiers_never_repeat_a_question(#[case] tier: Tier) {
    for seed in 0..8 {
        let level = tier.level(&mut StdRng::seed_from_u64(seed)).unwrap();
        let mut prompts: Vec<&str> = level.questions().iter().map(|q| q.prompt()).collect();
        let drawn = prompts.len();
        prompts.sort_unstable();
        prompts.dedup();
        assert_eq!(prompts.len(), drawn);
    }
}

#[test]
fn expected_answers_are_stored_normalized() {
    let mut rng = StdRng::seed_from_u64(5);
    for tier in Tier::ALL {
        let level = tier.level(&mut rng).unwrap();
        for answer in level.expected_answers() {
            assert_eq!(answer, &normalize_answer(answer));
        }
    }
}

#[test]
fn intermediate_layout_is_fixed() {
    let level = Tier::Intermediate.level(&mut StdRng::seed_from_u64(0)).unwrap();
    let grid = level.grid();

    assert_eq!(grid.get(Position::new(1, 1)), Some(Cell::Wall));
    assert_eq!(grid.get(Position::new(2, 2)), Some(Cell::Wall));
    assert_eq!(grid.get(Position::new(5, 5)), Some(Cell::Goal));
    assert_eq!(
        level.question_cells(),
        vec![Position::new(1, 3), Position::new(2, 4), Position::new(3, 1)]
    );
    assert_eq!(level.expected_answers(), ["house", "run", "water"]);
    assert!(level.questions().iter().all(|q| q.is_free_text() && q.points() == 12));
}

#[test]
fn intermediate_ignores_the_rng() {
    let a = Tier::Intermediate.level(&mut StdRng::seed_from_u64(1)).unwrap();
    let b = Tier::Intermediate.level(&mut StdRng::seed_from_u64(2)).unwrap();
    assert_eq!(a.grid(), b.grid());
}

#[test]
fn seeded_tiers_are_reproducible() {
    let a = Tier::Advanced.level(&mut StdRng::seed_from_u64(77)).unwrap();
    let b = Tier::Advanced.level(&mut StdRng::seed_from_u64(77)).unwrap();
    assert_eq!(a.grid(), b.grid());
    assert_eq!(a.questions(), b.questions());
}

#[test]
fn info_cells_surface_facts() {
    let level = Tier::Basic.level(&mut StdRng::seed_from_u64(3)).unwrap();
    let Some(info) = level.grid().positions_of(Cell::Info).next() else {
        return;
    };

    // Walk there along the maze: BFS parents from the start.
    let grid = level.grid();
    let cols = grid.cols();
    let mut parent = vec![None; grid.rows() * cols];
    let mut queue = std::collections::VecDeque::from([level.start()]);
    let mut seen = vec![false; grid.rows() * cols];
    seen[0] = true;
    while let Some(pos) = queue.pop_front() {
        for dir in worldventure::Direction::ALL {
            if let Some(next) = grid.walkable_neighbor(pos, dir) {
                let idx = next.row * cols + next.col;
                if !seen[idx] {
                    seen[idx] = true;
                    parent[idx] = Some((pos, dir));
                    queue.push_back(next);
                }
            }
        }
    }
    let mut path = Vec::new();
    let mut at = info;
    while let Some((prev, dir)) = parent[at.row * cols + at.col] {
        path.push(dir);
        at = prev;
    }
    path.reverse();

    let mut session = GameSession::new(Player::new("Alice", "Basic"), level);
    session.start().unwrap();
    for dir in path {
        assert!(session.try_move(dir));
    }
    assert_eq!(session.player().position(), info);
    assert!(matches!(session.encounter(), Encounter::Fact(_)));
}

#[rstest]
#[case("Basic", Tier::Basic)]
#[case("principiante", Tier::Basic)]
#[case("INTERMEDIO", Tier::Intermediate)]
#[case(" legend ", Tier::Legend)]
fn tiers_parse_from_labels(#[case] label: &str, #[case] tier: Tier) {
    assert_eq!(label.parse::<Tier>(), Ok(tier));
    assert_eq!(tier.to_string().parse::<Tier>(), Ok(tier));
}
