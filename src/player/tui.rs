use crate::core::{Move, PlayerId};
use crate::display::{render_board, DisplayState};
use crate::game::GameState;
use crate::player::PlayerController;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use std::time::Duration;

pub struct TuiController {
    player_id: PlayerId,
    name: String,
}

impl TuiController {
    pub fn new(player_id: PlayerId, name: &str) -> Self {
        Self {
            player_id,
            name: name.to_string(),
        }
    }

    fn destinations(legal_moves: &[Move], from: crate::core::Position) -> Vec<crate::core::Position> {
        legal_moves
            .iter()
            .filter(|mv| mv.from == from)
            .map(|mv| mv.to)
            .collect()
    }
}

impl PlayerController for TuiController {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, state: &GameState, legal_moves: &[Move]) -> Option<Move> {
        let mut disp = DisplayState::default();
        disp.last_move = state.board.last_move.clone();
        disp.perspective = self.player_id;
        disp.status_msg = Some(format!("{}'s turn ({:?})", self.name, self.player_id));

        // 初期カーソルは動かせる駒に合わせる
        if let Some(mv) = legal_moves.first() {
            disp.cursor = mv.from;
        }

        // 連続ジャンプ中はその駒しか動かせないので選択済みにしておく
        if let Some(held) = state.continuation {
            disp.cursor = held;
            disp.selected = Some(held);
            disp.highlights = Self::destinations(legal_moves, held);
        }

        loop {
            render_board(state, &disp);
            print!("[Arrows]: Move | [Enter]: Select | [Esc]: Cancel | [q]: Resign\r\n");

            if !event::poll(Duration::from_millis(100)).unwrap_or(false) {
                continue;
            }
            let key = match event::read() {
                Ok(Event::Key(KeyEvent { code, .. })) => code,
                _ => continue,
            };

            match key {
                KeyCode::Char('q') => return None,
                KeyCode::Esc => {
                    if state.continuation.is_none() {
                        disp.selected = None;
                        disp.highlights.clear();
                    }
                }
                KeyCode::Up => {
                    if disp.cursor.row > 0 {
                        disp.cursor.row -= 1;
                    }
                }
                KeyCode::Down => {
                    if disp.cursor.row < state.board.height - 1 {
                        disp.cursor.row += 1;
                    }
                }
                KeyCode::Left => {
                    if disp.cursor.col > 0 {
                        disp.cursor.col -= 1;
                    }
                }
                KeyCode::Right => {
                    if disp.cursor.col < state.board.width - 1 {
                        disp.cursor.col += 1;
                    }
                }
                KeyCode::Enter | KeyCode::Char(' ') => {
                    if let Some(from) = disp.selected {
                        if from == disp.cursor && state.continuation.is_none() {
                            disp.selected = None;
                            disp.highlights.clear();
                            continue;
                        }
                        // 同じ from/to を持つチェーンが複数ある場合は列挙順の先頭
                        if let Some(mv) = legal_moves
                            .iter()
                            .find(|mv| mv.from == from && mv.to == disp.cursor)
                        {
                            return Some(mv.clone());
                        }
                    } else if let Some(piece) = state.board.get_piece(disp.cursor) {
                        if piece.owner == self.player_id {
                            let targets = Self::destinations(legal_moves, disp.cursor);
                            if !targets.is_empty() {
                                disp.selected = Some(disp.cursor);
                                disp.highlights = targets;
                            }
                        }
                    }
                }
                _ => {}
            }
        }
    }
}
