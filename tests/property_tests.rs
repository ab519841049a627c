//! Property tests for board generation and turn rules.

use proptest::prelude::*;

use memory_chess::{
    Board, BoardConfig, Color, ComputerAgent, GameConfig, GameError, GameRng, PickError, Player,
    TurnEngine,
};

/// Valid board configurations: (grid size, color count, tiles per color).
fn valid_config() -> impl Strategy<Value = BoardConfig> {
    prop_oneof![
        Just((1usize, 1usize, 1usize)),
        Just((2, 1, 4)),
        Just((2, 2, 2)),
        Just((2, 4, 1)),
        Just((3, 3, 3)),
        Just((4, 2, 8)),
        Just((4, 4, 4)),
        Just((6, 6, 6)),
        Just((6, 4, 9)),
    ]
    .prop_map(|(grid, colors, per_color)| {
        let colors: Vec<Color> = (0..colors as u8).map(Color::new).collect();
        BoardConfig::new(grid, &colors, per_color)
    })
}

fn check_invariants(engine: &TurnEngine) {
    let total = engine.board().len() as u32;
    let remaining = engine.board().remaining() as u32;
    assert_eq!(engine.scores().total() + remaining, total);
    assert_eq!(engine.is_over(), remaining == 0);
    assert!(engine.board().tiles().all(|tile| !tile.is_revealed()));
}

proptest! {
    #[test]
    fn board_holds_exact_color_multiset(config in valid_config(), seed in any::<u64>()) {
        let board = Board::initialize(&config, &mut GameRng::new(seed)).unwrap();

        prop_assert_eq!(Some(board.len()), config.cell_count());
        let counts = board.color_counts();
        prop_assert_eq!(counts.len(), config.colors.len());
        for color in &config.colors {
            prop_assert_eq!(counts[color], config.tiles_per_color);
        }
    }

    #[test]
    fn mismatched_sizing_is_rejected(grid in 1usize..8, colors in 1u8..8, per_color in 1usize..12) {
        let palette: Vec<Color> = (0..colors).map(Color::new).collect();
        let config = BoardConfig::new(grid, &palette, per_color);
        prop_assume!(colors as usize * per_color != grid * grid);

        let err = TurnEngine::new(GameConfig::new(config), 0).unwrap_err();
        prop_assert!(matches!(err, GameError::Config(_)), "unexpected error");
    }

    #[test]
    fn turn_rules_hold_through_a_whole_game(config in valid_config(), seed in any::<u64>()) {
        let mut engine = TurnEngine::new(GameConfig::new(config), seed).unwrap();
        let mut agent = ComputerAgent::new();
        let total = engine.board().len();
        let mut matches = 0;

        check_invariants(&engine);
        while !engine.is_over() {
            let before = engine.active_player();
            let score = engine.scores()[before];

            let outcome = engine.play_turn(&mut agent).unwrap().unwrap();
            check_invariants(&engine);

            prop_assert_eq!(outcome.player, before);
            if outcome.matched {
                matches += 1;
                prop_assert!(engine.board().tile(outcome.tile).unwrap().is_removed());
                prop_assert_eq!(engine.scores()[before], score + 1);
                if !engine.is_over() {
                    prop_assert_eq!(engine.active_player(), before);
                }
            } else {
                prop_assert_eq!(engine.active_player(), before.other());
                prop_assert_eq!(engine.scores()[before], score);
            }
        }

        prop_assert_eq!(matches, total);
        prop_assert!(engine.result().is_some());
    }

    #[test]
    fn removed_tiles_stay_unpickable(seed in any::<u64>()) {
        let config = GameConfig::new(BoardConfig::new(2, &[Color::RED, Color::BLUE], 2))
            .with_starting_player(Player::Computer);
        let mut engine = TurnEngine::new(config, seed).unwrap();
        let mut agent = ComputerAgent::new();

        let removed = loop {
            let outcome = engine.play_turn(&mut agent).unwrap().unwrap();
            if outcome.matched {
                break outcome.tile;
            }
        };
        prop_assume!(!engine.is_over());
        engine.roll().unwrap();

        let snapshot = engine.snapshot();
        for _ in 0..2 {
            prop_assert_eq!(
                engine.pick_tile(removed).unwrap_err(),
                GameError::InvalidPick(PickError::Removed(removed))
            );
            prop_assert_eq!(&engine.snapshot(), &snapshot);
        }
    }
}
