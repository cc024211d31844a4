use super::types::PlayerId;
use serde::{Deserialize, Serialize};

/// 駒の位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Man,
    King,
}

/// 駒
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub owner: PlayerId,
    pub rank: Rank,
}

impl Piece {
    pub fn new(owner: PlayerId, rank: Rank) -> Self {
        Piece { owner, rank }
    }

    /// その駒が移動・ジャンプできる対角方向の一覧 (Man は前方のみ、King は全方向)
    pub fn step_directions(&self) -> &'static [(i32, i32)] {
        const ALL: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
        const DOWN: [(i32, i32); 2] = [(1, 1), (1, -1)];
        const UP: [(i32, i32); 2] = [(-1, 1), (-1, -1)];

        match (self.rank, self.owner) {
            (Rank::King, _) => &ALL,
            (Rank::Man, PlayerId::Player1) => &DOWN,
            (Rank::Man, PlayerId::Player2) => &UP,
        }
    }

    pub fn promoted(&self) -> Piece {
        Piece {
            owner: self.owner,
            rank: Rank::King,
        }
    }

    pub fn display_char(&self) -> char {
        match (self.owner, self.rank) {
            (PlayerId::Player1, Rank::Man) => 'r',
            (PlayerId::Player1, Rank::King) => 'R',
            (PlayerId::Player2, Rank::Man) => 'b',
            (PlayerId::Player2, Rank::King) => 'B',
        }
    }
}
