use checkers_ai::core::PlayerId;
use checkers_ai::game::{Game, PerspectiveMode};
use checkers_ai::player::ai::{AIConfig, MinimaxAI, RandomAI};
use checkers_ai::player::TuiController;
use crossterm::{execute, terminal};
use std::io;

fn main() -> anyhow::Result<()> {
    // ターミナル初期化
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen)?;

    let res = run();

    // ターミナル復帰
    execute!(io::stdout(), terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    res
}

fn run() -> anyhow::Result<()> {
    use crossterm::event::{self, Event, KeyCode};
    use std::time::Duration;

    print!("=== Checkers ===\r\n");

    print!("\r\nSelect mode:\r\n");
    print!("1. Play vs AI\r\n");
    print!("2. AI vs AI\r\n");
    print!("3. Two Player\r\n");

    let mode = loop {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('1') => break "vs_ai",
                    KeyCode::Char('2') => break "ai_vs_ai",
                    KeyCode::Char('3') => break "two_player",
                    KeyCode::Char('q') => return Ok(()),
                    _ => {}
                }
            }
        }
    };

    let config = AIConfig::load_or_default();
    let mut game = Game::new();

    match mode {
        "vs_ai" => {
            let ai = MinimaxAI::with_depth(PlayerId::Player1, "Minimax AI", config.search_depth);
            let human = TuiController::new(PlayerId::Player2, "You");
            game.perspective_mode = PerspectiveMode::Fixed(PlayerId::Player2);
            game.play(&ai, &human);
        }
        "ai_vs_ai" => {
            let p1 = MinimaxAI::with_depth(PlayerId::Player1, "Minimax AI", config.search_depth);
            let p2 = RandomAI::new(PlayerId::Player2, "Random AI");
            game.play(&p1, &p2);
        }
        _ => {
            let p1 = TuiController::new(PlayerId::Player1, "Red");
            let p2 = TuiController::new(PlayerId::Player2, "Blue");
            game.perspective_mode = PerspectiveMode::AutoFlip;
            game.play(&p1, &p2);
        }
    }

    Ok(())
}
