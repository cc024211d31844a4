use crate::core::{setup_from_strings, standard_setup, Board, Move, PlayerId, Position, Rank};
use crate::display::{render_board, DisplayState};
use crate::errors::GameError;
use crate::logic;
use crate::player::PlayerController;
use serde::{Deserialize, Serialize};

/// 対局の進行状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Ongoing,
    Won(PlayerId),
    Draw,
}

/// ゲーム状態 (盤面 + 手番 + 駒数の帳簿)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub current_player: PlayerId,
    pub turn: usize,
    /// 生存駒数 [Player1, Player2]。常に盤面と一致する
    pub tokens: [usize; 2],
    pub kings: [usize; 2],
    /// 連続ジャンプ中の駒。セットされている間は手番は変わらない
    pub continuation: Option<Position>,
    pub status: GameStatus,
}

impl GameState {
    /// 標準配置の新規対局 (Player1 先手)
    pub fn new() -> Self {
        Self::from_board(setup_from_strings(&standard_setup()), PlayerId::Player1)
    }

    /// 任意の盤面から開始する (駒数は盤面から数え直す)
    pub fn from_board(board: Board, current_player: PlayerId) -> Self {
        let tokens = [
            board.count_pieces(PlayerId::Player1),
            board.count_pieces(PlayerId::Player2),
        ];
        let kings = [
            board.count_kings(PlayerId::Player1),
            board.count_kings(PlayerId::Player2),
        ];
        let mut state = GameState {
            board,
            current_player,
            turn: 0,
            tokens,
            kings,
            continuation: None,
            status: GameStatus::Ongoing,
        };
        state.status = logic::check_winner(&state);
        state
    }

    /// 手番側の合法手 (連続ジャンプ中はその駒からのチェーンに限る)
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.status != GameStatus::Ongoing {
            return Vec::new();
        }
        logic::legal_moves(&self.board, self.current_player, self.continuation)
    }

    /// 一手を適用する。不正な手は状態を変更せずに拒否する
    pub fn apply(&mut self, mv: &Move) -> Result<(), GameError> {
        self.validate(mv)?;

        let piece = match self.board.remove_piece(mv.from) {
            Some(piece) => piece,
            None => return Err(GameError::OriginMismatch(mv.from)),
        };

        for &square in &mv.captured {
            if self.board.remove_piece(square).is_some() {
                self.tokens[self.current_player.opponent().index()] -= 1;
            }
        }

        let piece = if piece.rank == Rank::Man
            && mv.to.row == logic::crown_row(&self.board, self.current_player)
        {
            self.kings[self.current_player.index()] += 1;
            piece.promoted()
        } else {
            piece
        };
        self.board.place_piece(mv.to, piece);
        self.board.last_move = Some(mv.clone());

        // 取った直後に同じ駒で更に取れるなら手番を渡さない
        if !mv.captured.is_empty()
            && !logic::jump_chains_from(&self.board, self.current_player, mv.to).is_empty()
        {
            self.continuation = Some(mv.to);
        } else {
            self.continuation = None;
            self.next_turn();
        }

        self.status = logic::check_winner(self);
        Ok(())
    }

    /// 保留中の連続ジャンプを放棄して手番を渡す
    pub fn decline_continuation(&mut self) {
        if self.continuation.take().is_some() {
            self.next_turn();
            self.status = logic::check_winner(self);
        }
    }

    fn next_turn(&mut self) {
        self.turn += 1;
        self.current_player = self.current_player.opponent();
    }

    fn validate(&self, mv: &Move) -> Result<(), GameError> {
        if self.status != GameStatus::Ongoing {
            return Err(GameError::GameOver);
        }
        match self.board.get_piece(mv.from) {
            Some(piece) if piece.owner == self.current_player => {}
            _ => return Err(GameError::OriginMismatch(mv.from)),
        }
        if self.board.get_piece(mv.to).is_some() {
            return Err(GameError::DestinationOccupied(mv.to));
        }
        for &square in &mv.captured {
            match self.board.get_piece(square) {
                Some(piece) if piece.owner != self.current_player => {}
                _ => return Err(GameError::BadCaptureSquare(square)),
            }
        }
        if let Some(held) = self.continuation {
            if mv.from != held {
                return Err(GameError::ContinuationRequired(held));
            }
        }
        if !self.legal_moves().contains(mv) {
            return Err(GameError::NotInLegalSet);
        }
        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerspectiveMode {
    Fixed(PlayerId),
    AutoFlip,
}

/// 対局ループ
pub struct Game {
    pub state: GameState,
    pub perspective_mode: PerspectiveMode,
}

impl Game {
    pub fn new() -> Self {
        Game {
            state: GameState::new(),
            perspective_mode: PerspectiveMode::Fixed(PlayerId::Player1),
        }
    }

    pub fn play(&mut self, p1: &dyn PlayerController, p2: &dyn PlayerController) {
        loop {
            let mut disp = DisplayState::default();
            disp.show_cursor = false;
            disp.perspective = match self.perspective_mode {
                PerspectiveMode::Fixed(player) => player,
                PerspectiveMode::AutoFlip => self.state.current_player,
            };
            disp.last_move = self.state.board.last_move.clone();

            // 終局チェック
            match self.state.status {
                GameStatus::Won(winner) => {
                    let name = if winner == PlayerId::Player1 {
                        p1.name()
                    } else {
                        p2.name()
                    };
                    disp.status_msg = Some(format!("{} ({:?}) wins! Press any key.", name, winner));
                    render_board(&self.state, &disp);
                    let _ = crossterm::event::read();
                    break;
                }
                GameStatus::Draw => {
                    disp.status_msg = Some("It's a stalemate! Press any key.".to_string());
                    render_board(&self.state, &disp);
                    let _ = crossterm::event::read();
                    break;
                }
                GameStatus::Ongoing => {}
            }

            let controller: &dyn PlayerController = match self.state.current_player {
                PlayerId::Player1 => p1,
                PlayerId::Player2 => p2,
            };

            // 合法手生成 (Ongoing なら必ず1手以上ある)
            let moves = self.state.legal_moves();

            if controller.name().contains("AI") {
                disp.status_msg = Some(format!(
                    "{} ({:?}) is thinking...",
                    controller.name(),
                    self.state.current_player
                ));
                render_board(&self.state, &disp);

                // 思考ウェイト中に終了判定
                let timeout = std::time::Duration::from_millis(600);
                if crossterm::event::poll(timeout).unwrap_or(false) {
                    if let Ok(crossterm::event::Event::Key(key)) = crossterm::event::read() {
                        if key.code == crossterm::event::KeyCode::Char('q') {
                            print!("Interrupted by user.\r\n");
                            break;
                        }
                    }
                }
            }

            match controller.choose_move(&self.state, &moves) {
                Some(mv) => {
                    if let Err(err) = self.state.apply(&mv) {
                        disp.status_msg =
                            Some(format!("{} played an invalid move: {}", controller.name(), err));
                        render_board(&self.state, &disp);
                        let _ = crossterm::event::read();
                        break;
                    }
                }
                None => {
                    disp.status_msg = Some(format!(
                        "{:?} resigned. {:?} wins! Press any key.",
                        self.state.current_player,
                        self.state.current_player.opponent()
                    ));
                    render_board(&self.state, &disp);
                    let _ = crossterm::event::read();
                    break;
                }
            }
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
