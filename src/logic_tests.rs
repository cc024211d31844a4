#[cfg(test)]
mod tests {
    use crate::core::{setup_from_strings, Move, PlayerId, Position, Rank};
    use crate::errors::GameError;
    use crate::game::{GameState, GameStatus};
    use crate::logic::evaluate;
    use crate::player::ai::{AIConfig, MinimaxAI};
    use crate::{compute_best_move, new_game};

    fn state_from(rows: &[&str], player: PlayerId) -> GameState {
        GameState::from_board(setup_from_strings(rows), player)
    }

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    /// Reference minimax without pruning, mirroring the engine's enumeration
    /// order and leaf conventions. Alpha-beta must return the same value.
    fn plain_minimax(state: &GameState, depth: usize, perspective: PlayerId) -> f64 {
        match state.status {
            GameStatus::Won(winner) => {
                return if winner == perspective {
                    f64::INFINITY
                } else {
                    f64::NEG_INFINITY
                }
            }
            GameStatus::Draw => return 0.0,
            GameStatus::Ongoing => {}
        }
        if depth == 0 {
            return evaluate(state, perspective);
        }
        let moves = state.legal_moves();
        assert!(!moves.is_empty(), "ongoing state must have moves");

        let maximizing = state.current_player == perspective;
        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        for mv in moves {
            let mut next = state.clone();
            next.apply(&mv).expect("enumerated move must apply");
            let value = plain_minimax(&next, depth - 1, perspective);
            best = if maximizing {
                best.max(value)
            } else {
                best.min(value)
            };
        }
        best
    }

    #[test]
    fn test_initial_state() {
        let state = new_game();
        assert_eq!(state.tokens, [12, 12]);
        assert_eq!(state.kings, [0, 0]);
        assert_eq!(state.current_player, PlayerId::Player1);
        assert_eq!(state.turn, 0);
        assert_eq!(state.continuation, None);
        assert_eq!(state.status, GameStatus::Ongoing);
    }

    #[test]
    fn test_initial_moves_and_enumeration_order() {
        let state = new_game();
        let moves = state.legal_moves();

        // Only the third rank can move; 7 steps in row-major scan order.
        assert_eq!(moves.len(), 7);
        assert_eq!(moves[0], Move::step(pos(2, 0), pos(3, 1)));
        assert!(moves.iter().all(|mv| !mv.is_jump()));

        // The enumeration is stable across calls.
        assert_eq!(moves, state.legal_moves());
    }

    #[test]
    fn test_token_counts_mirror_board() {
        let mut state = state_from(
            &[
                "r . . . . . . .",
                ". . . . . . . .",
                ". . r . . . . .",
                ". . . b . . . .",
                ". . . . . . . .",
                ". b . . . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
            ],
            PlayerId::Player1,
        );
        assert_eq!(state.tokens[0], state.board.count_pieces(PlayerId::Player1));
        assert_eq!(state.tokens[1], state.board.count_pieces(PlayerId::Player2));

        let jump = Move::jump(pos(2, 2), pos(4, 4), vec![pos(3, 3)]);
        state.apply(&jump).expect("jump is legal");

        assert_eq!(state.tokens, [2, 1]);
        assert_eq!(state.tokens[0], state.board.count_pieces(PlayerId::Player1));
        assert_eq!(state.tokens[1], state.board.count_pieces(PlayerId::Player2));
    }

    #[test]
    fn test_mandatory_capture_suppresses_steps() {
        let state = state_from(
            &[
                "r . . . . . . .",
                ". . . . . . . .",
                ". . r . . . . .",
                ". . . b . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
            ],
            PlayerId::Player1,
        );
        let moves = state.legal_moves();

        // The man at (0,0) has free steps, but the available jump wins.
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0], Move::jump(pos(2, 2), pos(4, 4), vec![pos(3, 3)]));
    }

    #[test]
    fn test_double_jump_is_one_move() {
        let state = state_from(
            &[
                "r . . . . . . .",
                ". b . . . . . .",
                ". . . . . . . .",
                ". . . b . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
            ],
            PlayerId::Player1,
        );
        let moves = state.legal_moves();

        assert_eq!(moves.len(), 1, "prefixes of the chain must not be yielded");
        assert_eq!(
            moves[0],
            Move::jump(pos(0, 0), pos(4, 4), vec![pos(1, 1), pos(3, 3)])
        );
    }

    #[test]
    fn test_branching_chains_yield_separate_moves() {
        let state = state_from(
            &[
                ". . r . . . . .",
                ". b . b . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
            ],
            PlayerId::Player1,
        );
        let moves = state.legal_moves();

        assert_eq!(moves.len(), 2);
        assert_eq!(moves[0], Move::jump(pos(0, 2), pos(2, 4), vec![pos(1, 3)]));
        assert_eq!(moves[1], Move::jump(pos(0, 2), pos(2, 0), vec![pos(1, 1)]));
    }

    #[test]
    fn test_man_cannot_jump_backward() {
        let state = state_from(
            &[
                "b . . . . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
                ". . . b . . . .",
                ". . . . r . . .",
                ". . . . . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
            ],
            PlayerId::Player1,
        );
        let moves = state.legal_moves();

        // The opposing man at (3,3) is behind the man at (4,4): no capture.
        assert!(moves.iter().all(|mv| !mv.is_jump()));
        assert!(moves.iter().all(|mv| mv.to != pos(2, 2)));
    }

    #[test]
    fn test_king_jumps_backward() {
        let state = state_from(
            &[
                "b . . . . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
                ". . . b . . . .",
                ". . . . R . . .",
                ". . . . . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
            ],
            PlayerId::Player1,
        );
        let moves = state.legal_moves();

        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0], Move::jump(pos(4, 4), pos(2, 2), vec![pos(3, 3)]));
    }

    #[test]
    fn test_promotion_on_far_row() {
        let mut state = state_from(
            &[
                ". . . . . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
                ". . . . . . b .",
                ". . . . . . . b",
                ". . r . . . . .",
                ". . . . . . . .",
            ],
            PlayerId::Player1,
        );

        state
            .apply(&Move::step(pos(6, 2), pos(7, 3)))
            .expect("step to the far row is legal");

        let piece = state.board.get_piece(pos(7, 3)).expect("piece moved");
        assert_eq!(piece.rank, Rank::King);
        assert_eq!(state.kings, [1, 0]);
        assert_eq!(state.current_player, PlayerId::Player2);
        assert_eq!(state.status, GameStatus::Ongoing);

        // After the reply, the new king may move backward.
        state
            .apply(&Move::step(pos(4, 6), pos(3, 5)))
            .expect("quiet reply");
        let moves = state.legal_moves();
        assert!(moves.contains(&Move::step(pos(7, 3), pos(6, 2))));
        assert!(moves.contains(&Move::step(pos(7, 3), pos(6, 4))));
    }

    #[test]
    fn test_promotion_can_hold_the_turn() {
        let mut state = state_from(
            &[
                "r . . . . . . .",
                ". . . . . . . .",
                ". . . . . . . b",
                ". . . . . . . .",
                ". . . . . . . .",
                ". r . . . . . .",
                ". . b . b . . .",
                ". . . . . . . .",
            ],
            PlayerId::Player1,
        );

        let moves = state.legal_moves();
        assert_eq!(moves.len(), 1);
        let chain = moves[0].clone();
        assert_eq!(chain, Move::jump(pos(5, 1), pos(7, 3), vec![pos(6, 2)]));
        state.apply(&chain).expect("capture into the far row");

        // The landing promoted, and the fresh king can capture on: the turn
        // is held for the same side.
        assert_eq!(state.board.get_piece(pos(7, 3)).map(|p| p.rank), Some(Rank::King));
        assert_eq!(state.kings, [1, 0]);
        assert_eq!(state.continuation, Some(pos(7, 3)));
        assert_eq!(state.current_player, PlayerId::Player1);
        assert_eq!(state.status, GameStatus::Ongoing);

        // Only chains from the held square are legal now.
        let moves = state.legal_moves();
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0], Move::jump(pos(7, 3), pos(5, 5), vec![pos(6, 4)]));

        // Any other piece is rejected before mutation.
        let err = state.apply(&Move::step(pos(0, 0), pos(1, 1)));
        assert_eq!(err, Err(GameError::ContinuationRequired(pos(7, 3))));

        let finish = moves[0].clone();
        state.apply(&finish).expect("continuation chain");
        assert_eq!(state.continuation, None);
        assert_eq!(state.current_player, PlayerId::Player2);
        assert_eq!(state.tokens, [2, 1]);
        assert_eq!(state.status, GameStatus::Ongoing);
    }

    #[test]
    fn test_decline_continuation_passes_the_turn() {
        let mut state = state_from(
            &[
                "r . . . . . . .",
                ". . . . . . . .",
                ". . . . . . . b",
                ". . . . . . . .",
                ". . . . . . . .",
                ". r . . . . . .",
                ". . b . b . . .",
                ". . . . . . . .",
            ],
            PlayerId::Player1,
        );
        let chain = state.legal_moves()[0].clone();
        state.apply(&chain).expect("capture into the far row");
        assert_eq!(state.continuation, Some(pos(7, 3)));
        let turn = state.turn;

        state.decline_continuation();
        assert_eq!(state.continuation, None);
        assert_eq!(state.current_player, PlayerId::Player2);
        assert_eq!(state.turn, turn + 1);
        assert_eq!(state.status, GameStatus::Ongoing);
    }

    #[test]
    fn test_invalid_move_rejection_is_idempotent() {
        let mut state = new_game();
        let before = state.clone();

        // Wrong distance for a step.
        let bad = Move::step(pos(2, 0), pos(4, 0));
        assert_eq!(state.apply(&bad), Err(GameError::NotInLegalSet));
        assert_eq!(state, before);
        assert_eq!(state.apply(&bad), Err(GameError::NotInLegalSet));
        assert_eq!(state, before);

        // Occupied destination is caught as well.
        let occupied = Move::step(pos(1, 1), pos(2, 2));
        assert_eq!(
            state.apply(&occupied),
            Err(GameError::DestinationOccupied(pos(2, 2)))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_step_rejected_while_jump_available() {
        let mut state = state_from(
            &[
                "r . . . . . . .",
                ". . . . . . . .",
                ". . r . . . . .",
                ". . . b . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
            ],
            PlayerId::Player1,
        );
        let before = state.clone();

        let step = Move::step(pos(0, 0), pos(1, 1));
        assert_eq!(state.apply(&step), Err(GameError::NotInLegalSet));
        assert_eq!(state, before);
    }

    #[test]
    fn test_no_tokens_means_loss() {
        let state = state_from(
            &[
                "r . . . . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
            ],
            PlayerId::Player2,
        );
        assert_eq!(state.status, GameStatus::Won(PlayerId::Player1));
        assert!(state.legal_moves().is_empty());

        let mut state = state;
        let err = state.apply(&Move::step(pos(0, 0), pos(1, 1)));
        assert_eq!(err, Err(GameError::GameOver));
    }

    #[test]
    fn test_cornered_side_loses() {
        // The black man at (7,0) can neither step nor jump.
        let state = state_from(
            &[
                ". . . . . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
                ". . r . . . . .",
                ". r . . . . . .",
                "b . . . . . . .",
            ],
            PlayerId::Player2,
        );
        assert_eq!(state.status, GameStatus::Won(PlayerId::Player1));
    }

    #[test]
    fn test_one_piece_each_is_a_draw() {
        let state = state_from(
            &[
                "r . . . . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
                ". . . . . . . b",
            ],
            PlayerId::Player1,
        );
        assert_eq!(state.status, GameStatus::Draw);
    }

    #[test]
    fn test_evaluate_formula() {
        let state = state_from(
            &[
                ". r . r . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
                ". . . . R . . .",
                ". . . . . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
                "b . . . . . . .",
            ],
            PlayerId::Player1,
        );
        assert_eq!(evaluate(&state, PlayerId::Player1), 2.5);
        assert_eq!(evaluate(&state, PlayerId::Player2), -2.5);
    }

    #[test]
    fn test_alpha_beta_matches_plain_minimax_from_start() {
        let state = new_game();
        let engine = MinimaxAI::with_depth(PlayerId::Player1, "minimax", 3);
        let (value, best) = engine
            .search(&state, 3, f64::NEG_INFINITY, f64::INFINITY)
            .expect("search succeeds");

        assert_eq!(value, plain_minimax(&state, 3, PlayerId::Player1));
        assert!(best.is_some());
    }

    #[test]
    fn test_alpha_beta_matches_plain_minimax_in_tactics() {
        // Black to move with four available captures.
        let state = state_from(
            &[
                ". . . . . . . .",
                ". . . . . . . .",
                ". r . r . r . .",
                ". . b . b . . .",
                ". . . . . . . .",
                ". . . . . . b .",
                ". . . . . . . .",
                ". . . . . . . .",
            ],
            PlayerId::Player2,
        );
        for depth in 1..=4 {
            let engine = MinimaxAI::with_depth(PlayerId::Player2, "minimax", depth);
            let (value, _) = engine
                .search(&state, depth, f64::NEG_INFINITY, f64::INFINITY)
                .expect("search succeeds");
            assert_eq!(
                value,
                plain_minimax(&state, depth, PlayerId::Player2),
                "pruning changed the value at depth {}",
                depth
            );
        }
    }

    #[test]
    fn test_tied_moves_keep_the_first() {
        // At depth 1 from the start no capture is possible, so every child
        // evaluates to 0 and the first enumerated move must win the tie.
        let state = new_game();
        let moves = state.legal_moves();
        let (value, best) = compute_best_move(&state, 1, PlayerId::Player1).expect("search");
        assert_eq!(value, 0.0);
        assert_eq!(best, Some(moves[0].clone()));

        // Deterministic across runs.
        let (_, again) = compute_best_move(&state, 1, PlayerId::Player1).expect("search");
        assert_eq!(best, again);
    }

    #[test]
    fn test_search_prefers_the_winning_capture() {
        let state = state_from(
            &[
                "r . . . . . . .",
                ". . . . . . . .",
                ". . r . . . . .",
                ". . . b . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
            ],
            PlayerId::Player1,
        );
        let (value, best) = compute_best_move(&state, 3, PlayerId::Player1).expect("search");
        assert_eq!(value, f64::INFINITY);
        assert_eq!(
            best,
            Some(Move::jump(pos(2, 2), pos(4, 4), vec![pos(3, 3)]))
        );
    }

    #[test]
    fn test_search_on_finished_game() {
        let state = state_from(
            &[
                "r . . . . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
            ],
            PlayerId::Player2,
        );
        let (value, best) = compute_best_move(&state, 3, PlayerId::Player1).expect("search");
        assert_eq!(value, f64::INFINITY);
        assert_eq!(best, None);

        let (value, _) = compute_best_move(&state, 3, PlayerId::Player2).expect("search");
        assert_eq!(value, f64::NEG_INFINITY);
    }

    #[test]
    fn test_search_reports_generator_inconsistency() {
        let mut state = state_from(
            &[
                ". . . . . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
                ". . r . . . . .",
                ". r . . . . . .",
                "b . . . . . . .",
            ],
            PlayerId::Player2,
        );
        // Force an ongoing status onto a stalemated position.
        state.status = GameStatus::Ongoing;
        let err = compute_best_move(&state, 2, PlayerId::Player2);
        assert_eq!(err, Err(GameError::NoLegalMoves));
    }

    #[test]
    fn test_state_snapshot_roundtrip() {
        let mut state = new_game();
        state
            .apply(&Move::step(pos(2, 0), pos(3, 1)))
            .expect("opening step");

        let json = serde_json::to_string(&state).expect("serialize");
        let restored: GameState = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(state, restored);
    }

    #[test]
    fn test_public_api_surface() {
        let mut state = new_game();
        let moves = crate::legal_moves(&state);
        assert_eq!(moves.len(), 7);

        let status = crate::apply_move(&mut state, &moves[0]).expect("opening move");
        assert_eq!(status, GameStatus::Ongoing);
        assert_eq!(crate::status(&state), GameStatus::Ongoing);
        assert_eq!(state.current_player, PlayerId::Player2);
    }

    #[test]
    fn test_ai_config_defaults() {
        // No ai_config.json is shipped; the default must kick in.
        let config = AIConfig::load_or_default();
        assert_eq!(config.search_depth, 5);
    }
}
