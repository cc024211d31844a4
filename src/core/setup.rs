use crate::core::{Board, Piece, PlayerId, Position, Rank};

/// 文字列配列から盤面を初期化する
pub fn setup_from_strings(setup: &[&str]) -> Board {
    let height = setup.len();
    let width = if height > 0 {
        setup[0].split_whitespace().count()
    } else {
        0
    };
    let mut board = Board::new(width, height);

    for (row, line) in setup.iter().enumerate() {
        for (col, s) in line.split_whitespace().enumerate() {
            if s == "." {
                continue;
            }
            if let Some(piece) = parse_piece(s) {
                board.place_piece(Position::new(row, col), piece);
            }
        }
    }
    board
}

/// 1文字表記のパース (小文字 = Man, 大文字 = King)
fn parse_piece(s: &str) -> Option<Piece> {
    let ch = s.chars().next()?;
    let rank = if ch.is_uppercase() {
        Rank::King
    } else {
        Rank::Man
    };
    match ch.to_ascii_lowercase() {
        'r' => Some(Piece::new(PlayerId::Player1, rank)),
        'b' => Some(Piece::new(PlayerId::Player2, rank)),
        _ => None,
    }
}

/// 標準の初期配置 (各12枚)
pub fn standard_setup() -> Vec<&'static str> {
    vec![
        "r . r . r . r .",
        ". r . r . r . r",
        "r . r . r . r .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". b . b . b . b",
        "b . b . b . b .",
        ". b . b . b . b",
    ]
}
