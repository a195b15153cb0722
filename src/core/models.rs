use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Wall,
    Box,
    Player,
    Target,
    BoxOnTarget,
    PlayerOnTarget,
}

/// Grid coordinate, `x` is the column and `z` the row (row 0 on top).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub z: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EngineInput {
    Move(Direction),
    Reset,
    Undo,
    /// Purely cosmetic, the engine accepts and ignores it.
    RotateView,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveStatus {
    Moved,
    Pushed,
    Blocked,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayState {
    Playing,
    Won,
}

/// A single cell whose contents changed during a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridChange {
    pub position: Position,
    pub cell: Cell,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveResult {
    pub status: MoveStatus,
    pub won: bool,
    pub changes: Vec<GridChange>,
}

impl MoveResult {
    pub fn blocked(won: bool) -> Self {
        MoveResult {
            status: MoveStatus::Blocked,
            won,
            changes: Vec::new(),
        }
    }

    pub fn is_blocked(&self) -> bool {
        self.status == MoveStatus::Blocked
    }
}

/// What an engine input did, as reported by [`crate::core::GridPuzzleEngine::apply`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputOutcome {
    Move(MoveResult),
    Reset,
    Undone(bool),
    Ignored,
}
