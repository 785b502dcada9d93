//! Hold manager tests

use blockfall::core::{
    Game, HeldPiece, HoldPolicy, PieceGenerator, RulesConfig, SequenceGenerator, Tetromino,
};
use blockfall::types::{CellState, GameAction, PieceKind, Rotation, Spin};

/// Generator stub that always returns the same kind and counts draws.
struct Fixed {
    kind: PieceKind,
    draws: usize,
}

impl PieceGenerator for Fixed {
    fn next_piece(&mut self) -> PieceKind {
        self.draws += 1;
        self.kind
    }
}

#[test]
fn test_hold_round_trip_with_stubbed_generator() {
    let mut game = Game::new(
        Fixed {
            kind: PieceKind::Z,
            draws: 0,
        },
        RulesConfig::default(),
    );
    assert!(game.spawn(PieceKind::L, Rotation::North));

    assert!(game.apply_action(GameAction::Hold));
    assert_eq!(
        game.held(),
        Some(HeldPiece {
            kind: PieceKind::L,
            rotation: Rotation::North
        })
    );
    assert_eq!(game.active(), Some(Tetromino::new(PieceKind::Z, Rotation::North)));

    assert!(game.apply_action(GameAction::Hold));
    assert_eq!(game.active(), Some(Tetromino::new(PieceKind::L, Rotation::North)));
    assert_eq!(game.held().unwrap().kind, PieceKind::Z);

    assert!(game.apply_action(GameAction::Hold));
    assert_eq!(game.active().unwrap().kind, PieceKind::Z);
    assert_eq!(game.held().unwrap().kind, PieceKind::L);
    assert_eq!(game.board().filled_count(), 4);
}

#[test]
fn test_swap_respawns_at_spawn_position() {
    let mut game = Game::new(SequenceGenerator::new([PieceKind::T, PieceKind::I]), RulesConfig::default());
    game.spawn_next();
    for _ in 0..6 {
        game.soft_drop();
    }
    game.move_right();
    assert!(game.hold());
    assert!(game.move_left());
    assert!(game.hold());

    // T comes back at the spawn anchor, not where it was held from.
    assert_eq!(game.active(), Some(Tetromino::new(PieceKind::T, Rotation::North)));
    assert_eq!(game.board().filled_count(), 4);
}

#[test]
fn test_held_rotation_is_kept() {
    let mut game = Game::new(SequenceGenerator::new([PieceKind::J, PieceKind::O]), RulesConfig::default());
    game.spawn_next();
    game.soft_drop();
    assert!(game.rotate(Spin::Half));
    game.hold();

    let held = game.held().unwrap();
    assert_eq!(held.rotation, Rotation::South);
    // J South: .JJ. / .J.. / .J.. / ....
    assert_eq!(held.pattern()[0], [false, true, true, false]);
    assert_eq!(held.pattern()[2], [false, true, false, false]);
}

#[test]
fn test_hold_without_active_piece_is_noop() {
    let mut game = Game::new(SequenceGenerator::repeat(PieceKind::T), RulesConfig::default());
    assert!(!game.hold());
    assert!(game.held().is_none());
}

#[test]
fn test_once_per_piece_policy() {
    let config = RulesConfig {
        hold_policy: HoldPolicy::OncePerPiece,
        ..RulesConfig::default()
    };
    let mut game = Game::new(SequenceGenerator::new([PieceKind::S, PieceKind::Z]), config);
    game.spawn_next();

    assert!(game.hold());
    assert!(!game.can_hold());
    assert!(!game.hold());
    assert!(!game.snapshot().can_hold);

    assert!(game.apply_and_spawn(GameAction::HardDrop));
    assert!(game.can_hold());
}

#[test]
fn test_unlimited_policy_allows_repeated_holds() {
    let mut game = Game::new(SequenceGenerator::new([PieceKind::S, PieceKind::Z]), RulesConfig::default());
    game.spawn_next();
    for _ in 0..5 {
        assert!(game.hold());
        assert!(game.can_hold());
    }
}

#[test]
fn test_fresh_draw_blocked_at_spawn_tops_out() {
    let mut game = Game::new(SequenceGenerator::new([PieceKind::I, PieceKind::O]), RulesConfig::default());
    game.spawn_next();
    for _ in 0..10 {
        game.soft_drop();
    }
    game.board_mut().set(5, 1, CellState::Definitive).unwrap();

    assert!(game.hold());
    assert!(game.is_game_over());
    assert!(game.active().is_none());
    assert_eq!(game.held().unwrap().kind, PieceKind::I);
    assert!(game.preview().is_empty());
}
