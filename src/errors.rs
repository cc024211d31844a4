//! Errors used throughout the engine.
//!
//! `GameError` is the single error type returned by game logic and search.
//! The `InvalidMove`-style variants are recoverable: `GameState::apply`
//! rejects the move before touching any state, so the caller can simply ask
//! the user (or AI) for another move. `NoLegalMoves` signals an internal
//! inconsistency between terminal detection and move generation and is not
//! expected to be reachable.

use crate::core::Position;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("destination {0} is occupied")]
    DestinationOccupied(Position),

    #[error("no piece of the moving side at {0}")]
    OriginMismatch(Position),

    #[error("square {0} does not hold an opposing piece")]
    BadCaptureSquare(Position),

    #[error("the capture chain from {0} must be continued")]
    ContinuationRequired(Position),

    #[error("move is not in the legal move set")]
    NotInLegalSet,

    #[error("the game is already over")]
    GameOver,

    #[error("no legal moves in an ongoing position")]
    NoLegalMoves,
}
