use crate::core::{Move, PlayerId, Position};
use crate::game::GameState;
use crossterm::{cursor, execute, style::Stylize, terminal};
use std::io::stdout;

pub struct DisplayState {
    pub cursor: Position,
    pub selected: Option<Position>,
    pub highlights: Vec<Position>,
    pub status_msg: Option<String>,
    pub last_move: Option<Move>,
    pub perspective: PlayerId,
    pub show_cursor: bool,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            cursor: Position::default(),
            selected: None,
            highlights: Vec::new(),
            status_msg: None,
            last_move: None,
            perspective: PlayerId::default(),
            show_cursor: true,
        }
    }
}

impl DisplayState {
    pub fn new() -> Self {
        Self::default()
    }
}

pub fn render_board(state: &GameState, disp: &DisplayState) {
    let board = &state.board;
    let mut out = stdout();

    // 画面クリア（スクロール防止）
    execute!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )
    .unwrap();

    print!("=== Checkers ===\r\n");
    if let Some(msg) = &disp.status_msg {
        print!("{}\r\n", msg.clone().bold().yellow());
    } else {
        print!("\r\n");
    }
    print!("\r\n");

    // 列ラベル
    print!("    ");
    for j in 0..board.width {
        let col = if disp.perspective == PlayerId::Player1 {
            j
        } else {
            board.width - 1 - j
        };
        print!("  {} ", col);
    }
    print!("\r\n");

    print!("   +{}+\r\n", "----".repeat(board.width));

    for i in 0..board.height {
        let row = if disp.perspective == PlayerId::Player1 {
            i
        } else {
            board.height - 1 - i
        };

        print!("{:2} |", row);
        for j in 0..board.width {
            let col = if disp.perspective == PlayerId::Player1 {
                j
            } else {
                board.width - 1 - j
            };

            let pos = Position::new(row, col);
            let piece = board.get_piece(pos);
            let is_cursor = disp.show_cursor && disp.cursor == pos;
            let is_selected = disp.selected == Some(pos);
            let is_highlight = disp.highlights.contains(&pos);
            let is_last_move = match &disp.last_move {
                Some(mv) => mv.from == pos || mv.to == pos,
                None => false,
            };

            let char_str = match piece {
                Some(p) => p.display_char().to_string(),
                None => ".".to_string(),
            };

            let (prefix, suffix) = if is_cursor {
                ("[", "]")
            } else if is_selected {
                ("|", "|")
            } else if is_highlight {
                ("(", ")")
            } else if is_last_move {
                ("{", "}")
            } else {
                (" ", " ")
            };

            let cell_text = format!("{} {}{}", prefix, char_str, suffix);

            if is_cursor {
                print!("{}", cell_text.yellow());
            } else if is_selected {
                print!("{}", cell_text.cyan());
            } else if is_highlight {
                print!("{}", cell_text.green());
            } else if is_last_move {
                print!("{}", cell_text.dark_yellow());
            } else if let Some(p) = piece {
                if p.owner == PlayerId::Player1 {
                    print!("{}", cell_text.red());
                } else {
                    print!("{}", cell_text.blue());
                }
            } else {
                print!("{}", cell_text);
            }
        }
        print!("|\r\n");
    }
    print!("   +{}+\r\n", "----".repeat(board.width));

    render_score(state);
}

fn render_score(state: &GameState) {
    let p1 = PlayerId::Player1.index();
    let p2 = PlayerId::Player2.index();
    print!(
        "{}   {}\r\n",
        format!("r: {} (K {})", state.tokens[p1], state.kings[p1]).red(),
        format!("b: {} (K {})", state.tokens[p2], state.kings[p2]).blue()
    );
    print!("\r\n");
}
