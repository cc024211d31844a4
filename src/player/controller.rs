use crate::core::Move;
use crate::game::GameState;

/// プレイヤー操作のtrait
pub trait PlayerController {
    fn choose_move(&self, state: &GameState, legal_moves: &[Move]) -> Option<Move>;
    fn name(&self) -> &str;
}
