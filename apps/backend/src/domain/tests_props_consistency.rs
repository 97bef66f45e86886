//! Property-based tests for match invariants over random command sequences.

use proptest::prelude::*;

use crate::domain::match_state::{Match, MoveOutcome};
use crate::domain::test_gens::{self, Cmd};
use crate::domain::test_prelude;

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: grid and rosters always agree, whatever is thrown at the match.
    #[test]
    fn prop_board_and_rosters_agree(cmds in test_gens::command_sequence()) {
        let mut game = Match::new();
        for cmd in cmds {
            let _ = apply(&mut game, cmd);
            prop_assert!(game.board().check_consistency().is_ok(), "{:?}", game.board());
        }
    }

    /// Property: a rejected command leaves the match exactly as it was,
    /// including whose turn it is.
    #[test]
    fn prop_rejections_do_not_mutate(cmds in test_gens::command_sequence()) {
        let mut game = Match::new();
        for cmd in cmds {
            let before = game.clone();
            if apply(&mut game, cmd).is_err() {
                prop_assert_eq!(&game, &before);
            }
        }
    }

    /// Property: the turn only changes on accepted setup or moves, and an
    /// accepted non-winning move always hands the turn over.
    #[test]
    fn prop_turn_changes_only_on_acceptance(cmds in test_gens::command_sequence()) {
        let mut game = Match::new();
        for cmd in cmds {
            let before = game.current_player();
            let is_move = matches!(cmd, Cmd::Move { .. });
            match apply(&mut game, cmd) {
                Err(()) => prop_assert_eq!(game.current_player(), before),
                Ok(Some(MoveOutcome::Continued { .. })) if is_move => {
                    prop_assert_eq!(game.current_player(), before.opponent());
                }
                Ok(_) => {}
            }
        }
    }

    /// Property: every accepted move appends exactly one log line, and a
    /// win or reset empties the log.
    #[test]
    fn prop_log_tracks_accepted_moves(cmds in test_gens::command_sequence()) {
        let mut game = Match::new();
        for cmd in cmds {
            let before = game.log().len();
            match apply(&mut game, cmd) {
                Ok(Some(MoveOutcome::Continued { .. })) => {
                    prop_assert_eq!(game.log().len(), before + 1);
                }
                Ok(Some(MoveOutcome::Won { .. })) => prop_assert!(game.log().is_empty()),
                Ok(None) | Err(()) => {}
            }
        }
    }
}

/// Applies one command. `Ok(Some(_))` for accepted moves, `Ok(None)` for
/// accepted setup/reset.
fn apply(game: &mut Match, cmd: Cmd) -> Result<Option<MoveOutcome>, ()> {
    match cmd {
        Cmd::Setup(names) => game.setup(&names).map(|_| None).map_err(|_| ()),
        Cmd::Move { character, code } => game
            .play_move(&character, &code)
            .map(Some)
            .map_err(|_| ()),
        Cmd::Reset => {
            game.reset();
            Ok(None)
        }
    }
}
