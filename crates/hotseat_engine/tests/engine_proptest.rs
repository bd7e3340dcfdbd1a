//! Property tests over arbitrary move sequences.

use hotseat_engine::{Engine, GameStatus};
use proptest::prelude::*;

proptest! {
    #[test]
    fn turn_alternates_and_rejections_are_no_ops(
        moves in prop::collection::vec(0usize..12, 0..40)
    ) {
        let mut engine = Engine::new();
        for index in moves {
            let before = engine.clone();
            match engine.apply_move(index) {
                None => {
                    prop_assert_eq!(&engine, &before);
                }
                Some(outcome) => {
                    prop_assert_eq!(outcome.player, before.to_move());
                    prop_assert_eq!(engine.history().len(), before.history().len() + 1);
                    match outcome.status {
                        GameStatus::InProgress => {
                            prop_assert_eq!(engine.to_move(), before.to_move().opponent());
                            prop_assert_eq!(engine.score(), before.score());
                        }
                        _ => {
                            prop_assert_eq!(engine.to_move(), before.to_move());
                            prop_assert_eq!(
                                engine.score().games_played(),
                                before.score().games_played() + 1
                            );
                        }
                    }
                }
            }
            prop_assert_eq!(engine.board().occupied(), engine.history().len());
        }
    }

    #[test]
    fn games_tally_once_across_restarts(
        games in prop::collection::vec(prop::collection::vec(0usize..9, 0..12), 1..6)
    ) {
        let mut engine = Engine::new();
        let mut finished = 0;
        for moves in games {
            for index in moves {
                engine.apply_move(index);
            }
            if engine.is_over() {
                finished += 1;
            }
            engine.restart_game();
        }
        prop_assert_eq!(engine.score().games_played(), finished);
    }
}
