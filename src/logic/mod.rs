use crate::core::{Board, Move, Piece, PlayerId, Position};
use crate::game::{GameState, GameStatus};

/// 合法手生成 (ジャンプが存在する場合はジャンプのみ)
pub fn legal_moves(board: &Board, player: PlayerId, continuation: Option<Position>) -> Vec<Move> {
    if let Some(from) = continuation {
        return jump_chains_from(board, player, from);
    }
    let jumps = jump_chains(board, player);
    if !jumps.is_empty() {
        return jumps;
    }
    simple_moves(board, player)
}

/// 単純移動の列挙 (ジャンプが無い場合のみ合法)
pub fn simple_moves(board: &Board, player: PlayerId) -> Vec<Move> {
    let mut moves = Vec::new();
    for from in board.piece_positions(player) {
        if let Some(piece) = board.get_piece(from) {
            for &(d_row, d_col) in piece.step_directions() {
                if let Some(to) = offset_pos(from, d_row, d_col, board) {
                    if board.get_piece(to).is_none() {
                        moves.push(Move::step(from, to));
                    }
                }
            }
        }
    }
    moves
}

/// 連続ジャンプの列挙 (極大チェーンのみ)
pub fn jump_chains(board: &Board, player: PlayerId) -> Vec<Move> {
    let mut moves = Vec::new();
    for from in board.piece_positions(player) {
        moves.extend(jump_chains_from(board, player, from));
    }
    moves
}

/// 指定マスの駒から始まる連続ジャンプの列挙
pub fn jump_chains_from(board: &Board, player: PlayerId, from: Position) -> Vec<Move> {
    let mut moves = Vec::new();
    if let Some(piece) = board.get_piece(from) {
        if piece.owner == player {
            let piece = *piece;
            let mut captured = Vec::new();
            extend_chain(board, &piece, from, from, &mut captured, &mut moves);
        }
    }
    moves
}

/// current から更にジャンプできる限り深さ優先で伸ばし、伸ばせなくなった地点で
/// チェーンを確定する。チェーン中は成らない (成りは着地後の処理)。
fn extend_chain(
    board: &Board,
    piece: &Piece,
    origin: Position,
    current: Position,
    captured: &mut Vec<Position>,
    out: &mut Vec<Move>,
) {
    let mut extended = false;
    for &(d_row, d_col) in piece.step_directions() {
        let over = match offset_pos(current, d_row, d_col, board) {
            Some(pos) => pos,
            None => continue,
        };
        let to = match offset_pos(over, d_row, d_col, board) {
            Some(pos) => pos,
            None => continue,
        };
        let target = match board.get_piece(over) {
            Some(target) => target,
            None => continue,
        };
        // 同じ駒を二度は取れない (King が循環しないための打ち切り条件)
        if target.owner == piece.owner
            || captured.contains(&over)
            || board.get_piece(to).is_some()
        {
            continue;
        }

        extended = true;
        captured.push(over);
        extend_chain(board, piece, origin, to, captured, out);
        captured.pop();
    }

    if !extended && !captured.is_empty() {
        out.push(Move::jump(origin, current, captured.clone()));
    }
}

/// 成りの段 (相手側の最終行)
pub fn crown_row(board: &Board, player: PlayerId) -> usize {
    match player {
        PlayerId::Player1 => board.height - 1,
        PlayerId::Player2 => 0,
    }
}

/// 勝敗判定
pub fn check_winner(state: &GameState) -> GameStatus {
    if state.tokens[PlayerId::Player1.index()] == 0 {
        return GameStatus::Won(PlayerId::Player2);
    }
    if state.tokens[PlayerId::Player2.index()] == 0 {
        return GameStatus::Won(PlayerId::Player1);
    }
    // 手番側が動けなければ負け (連続ジャンプ中は判定しない)
    if state.continuation.is_none()
        && legal_moves(&state.board, state.current_player, None).is_empty()
    {
        return GameStatus::Won(state.current_player.opponent());
    }
    if state.tokens == [1, 1] {
        return GameStatus::Draw;
    }
    GameStatus::Ongoing
}

/// 評価関数 (perspective 視点の駒数差 + 0.5 * King 数差)
pub fn evaluate(state: &GameState, perspective: PlayerId) -> f64 {
    let me = perspective.index();
    let them = perspective.opponent().index();
    (state.tokens[me] as f64 - state.tokens[them] as f64)
        + 0.5 * (state.kings[me] as f64 - state.kings[them] as f64)
}

fn offset_pos(pos: Position, d_row: i32, d_col: i32, board: &Board) -> Option<Position> {
    let row = pos.row as i32 + d_row;
    let col = pos.col as i32 + d_col;
    if row >= 0 && row < board.height as i32 && col >= 0 && col < board.width as i32 {
        Some(Position::new(row as usize, col as usize))
    } else {
        None
    }
}
