use serde::{Deserialize, Serialize};

use crate::core::{GridPuzzleEngine, Position, Result};

/// Read-only view of the engine handed to renderers once per move or frame.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub width: i32,
    pub height: i32,
    /// One string per row, in the level text notation.
    pub rows: Vec<String>,
    pub player: Position,
    pub boxes: Vec<Position>,
    pub targets: Vec<Position>,
    pub won: bool,
    pub moves: usize,
    pub pushes: usize,
}

impl Snapshot {
    pub fn from_engine(engine: &GridPuzzleEngine) -> Self {
        let rows: Vec<String> = engine
            .grid()
            .rows()
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect();
        let mut boxes = engine.boxes().to_vec();
        boxes.sort();
        Snapshot {
            width: engine.grid().width(),
            height: engine.grid().height(),
            rows,
            player: engine.player(),
            boxes,
            targets: engine.targets().to_vec(),
            won: engine.is_won(),
            moves: engine.move_count(),
            pushes: engine.push_count(),
        }
    }
}

pub fn snapshot_to_json(engine: &GridPuzzleEngine) -> Result<String> {
    Ok(serde_json::to_string_pretty(&engine.snapshot())?)
}
