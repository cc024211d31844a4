//! Checkers rules engine with a minimax (alpha-beta) computer player.
//!
//! The engine core (`core`, `logic`, `game`, `player::ai`) is pure state
//! manipulation: it never touches the terminal. The driver layer (`display`,
//! `player::tui`, the `checkers-ai` binary) consumes read-only snapshots of
//! [`GameState`] and feeds user intents back in as [`Move`]s.

pub mod core;
pub mod display;
pub mod errors;
pub mod game;
pub mod logic;
pub mod player;

#[cfg(test)]
mod logic_tests;

pub use crate::core::{Board, Move, Piece, PlayerId, Position, Rank};
pub use crate::errors::GameError;
pub use crate::game::{Game, GameState, GameStatus};

/// 標準配置の新規対局 (Player1 先手)
pub fn new_game() -> GameState {
    GameState::new()
}

/// 手番側の合法手 (入力検証やハイライト用)
pub fn legal_moves(state: &GameState) -> Vec<Move> {
    state.legal_moves()
}

/// 一手を適用し、更新後の進行状態を返す
pub fn apply_move(state: &mut GameState, mv: &Move) -> Result<GameStatus, GameError> {
    state.apply(mv)?;
    Ok(state.status)
}

/// perspective 視点の minimax 探索。局面の評価値と最善手を返す
pub fn compute_best_move(
    state: &GameState,
    depth: usize,
    perspective: PlayerId,
) -> Result<(f64, Option<Move>), GameError> {
    let engine = player::ai::MinimaxAI::with_depth(perspective, "minimax", depth);
    engine.search(state, depth, f64::NEG_INFINITY, f64::INFINITY)
}

pub fn status(state: &GameState) -> GameStatus {
    state.status
}
