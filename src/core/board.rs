use super::piece::{Piece, Rank};
use super::types::{PlayerId, Position};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 盤面
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub width: usize,
    pub height: usize,
    /// 駒の位置
    #[serde(with = "crate::core::serialization")]
    pub pieces: HashMap<Position, Piece>,
    pub last_move: Option<crate::core::Move>,
}

impl Board {
    pub fn new(width: usize, height: usize) -> Self {
        Board {
            width,
            height,
            pieces: HashMap::new(),
            last_move: None,
        }
    }

    pub fn place_piece(&mut self, pos: Position, piece: Piece) {
        self.pieces.insert(pos, piece);
    }

    pub fn get_piece(&self, pos: Position) -> Option<&Piece> {
        self.pieces.get(&pos)
    }

    pub fn remove_piece(&mut self, pos: Position) -> Option<Piece> {
        self.pieces.remove(&pos)
    }

    /// player の駒の位置を行優先の走査順で返す (HashMap の列挙順には依存しない)
    pub fn piece_positions(&self, player: PlayerId) -> Vec<Position> {
        let mut positions = Vec::new();
        for row in 0..self.height {
            for col in 0..self.width {
                let pos = Position::new(row, col);
                if let Some(piece) = self.get_piece(pos) {
                    if piece.owner == player {
                        positions.push(pos);
                    }
                }
            }
        }
        positions
    }

    pub fn count_pieces(&self, player: PlayerId) -> usize {
        self.pieces.values().filter(|p| p.owner == player).count()
    }

    pub fn count_kings(&self, player: PlayerId) -> usize {
        self.pieces
            .values()
            .filter(|p| p.owner == player && p.rank == Rank::King)
            .count()
    }
}
