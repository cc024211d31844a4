use crate::core::{Move, PlayerId};
use crate::errors::GameError;
use crate::game::{GameState, GameStatus};
use crate::logic::evaluate;
use crate::player::PlayerController;

pub struct MinimaxAI {
    pub player_id: PlayerId,
    pub name: String,
    pub depth: usize,
}

impl MinimaxAI {
    pub fn new(player_id: PlayerId, name: &str) -> Self {
        Self::with_depth(player_id, name, 5)
    }

    pub fn with_depth(player_id: PlayerId, name: &str, depth: usize) -> Self {
        Self {
            player_id,
            name: name.to_string(),
            depth,
        }
    }

    /// Depth-limited minimax with alpha-beta pruning. Returns the value of
    /// `state` for `self.player_id` together with the move attaining it
    /// (`None` at leaf nodes). Each candidate is played out on its own clone
    /// of the state, so sibling branches never share mutable state.
    pub fn search(
        &self,
        state: &GameState,
        depth: usize,
        mut alpha: f64,
        mut beta: f64,
    ) -> Result<(f64, Option<Move>), GameError> {
        match state.status {
            GameStatus::Won(winner) => {
                let value = if winner == self.player_id {
                    f64::INFINITY
                } else {
                    f64::NEG_INFINITY
                };
                return Ok((value, None));
            }
            GameStatus::Draw => return Ok((0.0, None)),
            GameStatus::Ongoing => {}
        }
        if depth == 0 {
            return Ok((evaluate(state, self.player_id), None));
        }

        let moves = state.legal_moves();
        if moves.is_empty() {
            // Terminal detection and move generation disagree.
            return Err(GameError::NoLegalMoves);
        }

        // A held capture chain keeps the turn, so the node type follows the
        // side to move rather than the recursion depth.
        let maximizing = state.current_player == self.player_id;
        let mut best_value = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        let mut best_move = None;

        for mv in moves {
            let mut next = state.clone();
            next.apply(&mv)?;
            let (value, _) = self.search(&next, depth - 1, alpha, beta)?;

            if maximizing {
                // Ties keep the first move encountered.
                if best_move.is_none() || value > best_value {
                    best_value = value;
                    best_move = Some(mv);
                }
                alpha = alpha.max(best_value);
            } else {
                if best_move.is_none() || value < best_value {
                    best_value = value;
                    best_move = Some(mv);
                }
                beta = beta.min(best_value);
            }
            if beta <= alpha {
                break;
            }
        }

        Ok((best_value, best_move))
    }
}

impl PlayerController for MinimaxAI {
    fn choose_move(&self, state: &GameState, legal_moves: &[Move]) -> Option<Move> {
        if legal_moves.is_empty() {
            return None;
        }
        match self.search(state, self.depth, f64::NEG_INFINITY, f64::INFINITY) {
            Ok((_, mv)) => mv.or_else(|| legal_moves.first().cloned()),
            Err(_) => legal_moves.first().cloned(),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
