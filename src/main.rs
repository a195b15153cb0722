// Terminal Sokoban on top of the grid engine
// Controls: W/A/S/D or arrow keys, U undo, R reset, Q quit.
// Tiles: '#' wall, '@' player, '$' box, '.' target, '*' box on target, '+' player on target, ' ' floor.

use grid_puzzle::config::EngineConfig;
use grid_puzzle::console_interface::ConsoleInput::*;
use grid_puzzle::console_interface::{
    cleanup_terminal, handle_input, parse_moves, render_game, render_game_to_string, setup_terminal,
};
use grid_puzzle::core::{GridPuzzleEngine, InputOutcome, Level};
use grid_puzzle::json_export::snapshot_to_json;
use grid_puzzle::models::GameRenderState;
use log::{error, info};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let switch = args.next().unwrap_or("interactive".to_string());
    let rest: Vec<String> = args.collect();

    let config = EngineConfig::from_env().map_err(|e| {
        error!("failed to load config: {}", e);
        e
    })?;

    match switch.as_str() {
        "replay" => {
            let Some(moves) = rest.first() else {
                return Err("usage: grid_puzzle replay <moves> [LEVEL_FILE]".into());
            };
            let engine = load_engine(rest.get(1), config)?;
            run_replay(engine, moves)?;
        }
        "export" => {
            let engine = load_engine(rest.first(), config)?;
            println!("{}", snapshot_to_json(&engine)?);
        }
        "interactive" => {
            let engine = load_engine(rest.first(), config)?;
            run_interactive(engine)?;
        }
        _ => {
            println!(
                "Unknown mode: {}. Use 'interactive', 'replay' or 'export'. defaulting to interactive",
                switch
            );
            let engine = load_engine(rest.first(), config)?;
            run_interactive(engine)?;
        }
    }

    Ok(())
}

fn load_engine(level_file: Option<&String>, config: EngineConfig) -> Result<GridPuzzleEngine, Box<dyn std::error::Error>> {
    let level = match level_file {
        Some(path) => {
            info!("reading level from {}", path);
            Level::parse(&std::fs::read_to_string(path)?)
        }
        None => Level::embedded(),
    }
    .map_err(|e| {
        error!("could not load level: {}", e);
        e
    })?;
    Ok(GridPuzzleEngine::from_level(level, config))
}

fn run_replay(mut engine: GridPuzzleEngine, moves: &str) -> Result<(), Box<dyn std::error::Error>> {
    for dir in parse_moves(moves)? {
        let result = engine.attempt_move(dir);
        if result.is_blocked() {
            println!("{:?}: blocked", dir);
        }
    }
    print!("{}", render_game_to_string(&engine));
    println!(
        "moves: {}, pushes: {}, won: {}",
        engine.move_count(),
        engine.push_count(),
        engine.is_won()
    );
    Ok(())
}

fn run_interactive(mut engine: GridPuzzleEngine) -> Result<(), Box<dyn std::error::Error>> {
    let mut terminal = setup_terminal()?;
    let result = interactive_loop(&mut engine, &mut terminal);
    cleanup_terminal()?;
    result
}

fn interactive_loop(
    engine: &mut GridPuzzleEngine,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    render_game(terminal, &GameRenderState { engine: &*engine, message: None, last_status: None })?;

    loop {
        match handle_input()? {
            Quit => break,
            Engine(input) => {
                let (message, last_status) = match engine.apply(input) {
                    InputOutcome::Move(result) => (None, Some(result.status)),
                    InputOutcome::Reset => (Some("Level reset".to_string()), None),
                    InputOutcome::Undone(true) => (Some("Undid last move".to_string()), None),
                    InputOutcome::Undone(false) => (Some("Nothing to undo".to_string()), None),
                    InputOutcome::Ignored => (None, None),
                };
                render_game(terminal, &GameRenderState { engine: &*engine, message, last_status })?;
            }
            Timeout | Unknown => {}
        }
    }

    Ok(())
}
