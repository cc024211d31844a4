use super::types::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 一手 (単純移動または連続ジャンプ)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    /// ジャンプで取った相手駒の位置 (ジャンプ順)
    pub captured: Vec<Position>,
}

impl Move {
    pub fn step(from: Position, to: Position) -> Self {
        Move {
            from,
            to,
            captured: Vec::new(),
        }
    }

    pub fn jump(from: Position, to: Position, captured: Vec<Position>) -> Self {
        Move { from, to, captured }
    }

    pub fn is_jump(&self) -> bool {
        !self.captured.is_empty()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.captured.is_empty() {
            write!(f, "{} -> {}", self.from, self.to)
        } else {
            write!(
                f,
                "{} -> {} (x{})",
                self.from,
                self.to,
                self.captured.len()
            )
        }
    }
}
