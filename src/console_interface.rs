use crate::core::{Direction, EngineInput, Error, GridPuzzleEngine, INPUT_POLL_INTERVAL, Result};
use crate::models::GameRenderState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<()> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &GameRenderState,
) -> Result<()> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        let game_text = render_game_to_string(state.engine);
        let title = format!(
            "Sokoban | moves {} | pushes {}",
            state.engine.move_count(),
            state.engine.push_count()
        );
        let game_paragraph = Paragraph::new(game_text)
            .block(Block::default().borders(Borders::ALL).title(title))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, chunks[0]);

        let instructions = if state.engine.is_won() {
            "You Win! R to play again, Q to quit."
        } else {
            "WASD or Arrow keys to move, U undo, R reset, Space rotate, Q quit"
        };

        let instructions = if let Some(message) = &state.message {
            format!("{} | {}", instructions, message)
        } else {
            instructions.to_string()
        };

        let instructions = if let Some(status) = &state.last_status {
            format!("{} | Last: {:?}", instructions, status)
        } else {
            instructions
        };

        let instruction_paragraph = Paragraph::new(instructions)
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[1]);
    })?;
    Ok(())
}

pub fn render_game_to_string(engine: &GridPuzzleEngine) -> String {
    engine.grid().to_string()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsoleInput {
    Engine(EngineInput),
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input() -> Result<ConsoleInput> {
    if event::poll(INPUT_POLL_INTERVAL)? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(key_to_input(code));
        }
    }
    Ok(ConsoleInput::Timeout)
}

pub fn key_to_input(code: KeyCode) -> ConsoleInput {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
            ConsoleInput::Engine(EngineInput::Move(Direction::Up))
        }
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
            ConsoleInput::Engine(EngineInput::Move(Direction::Down))
        }
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
            ConsoleInput::Engine(EngineInput::Move(Direction::Left))
        }
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
            ConsoleInput::Engine(EngineInput::Move(Direction::Right))
        }
        KeyCode::Char('r') | KeyCode::Char('R') => ConsoleInput::Engine(EngineInput::Reset),
        KeyCode::Char('u') | KeyCode::Char('U') | KeyCode::Backspace => {
            ConsoleInput::Engine(EngineInput::Undo)
        }
        KeyCode::Char(' ') => ConsoleInput::Engine(EngineInput::RotateView),
        _ => ConsoleInput::Unknown,
    }
}

/// Parses a move string such as `ddrulur`. Whitespace is ignored.
pub fn parse_moves(moves: &str) -> Result<Vec<Direction>> {
    moves
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .map(|ch| Direction::from_letter(ch).ok_or_else(|| Error::Config(format!("unknown move {:?}", ch))))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_moves_reads_letters_in_either_case() {
        use Direction::*;
        assert_eq!(vec![Down, Up, Left, Right], parse_moves("dU l\nR").unwrap());
    }

    #[test]
    fn grid_renders_in_text_notation() {
        let engine = GridPuzzleEngine::new(crate::core::Level::parse("#@$.#\n# * #").unwrap());
        assert_eq!("#@$.#\n# * #\n", render_game_to_string(&engine));
    }

    #[test]
    fn space_rotates_the_view() {
        assert_eq!(ConsoleInput::Engine(EngineInput::RotateView), key_to_input(KeyCode::Char(' ')));
        assert_eq!(ConsoleInput::Engine(EngineInput::Move(Direction::Up)), key_to_input(KeyCode::Char('w')));
        assert_eq!(ConsoleInput::Engine(EngineInput::Reset), key_to_input(KeyCode::Char('R')));
        assert_eq!(ConsoleInput::Unknown, key_to_input(KeyCode::Char('x')));
    }

    #[test]
    fn parse_moves_rejects_unknown_letters() {
        assert!(matches!(parse_moves("ddx"), Err(Error::Config(_))));
    }
}
