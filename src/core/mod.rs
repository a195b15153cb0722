mod model_helpers;
mod models;
mod update;
mod bounded_grid;
mod consts;
mod bounds;
mod engine;
mod error;
mod level;

pub use models::{Cell, Direction, EngineInput, GridChange, InputOutcome, MoveResult, MoveStatus, PlayState, Position};
pub use consts::*;
pub use bounded_grid::BoundedGrid;
pub use bounds::BoundsOriginRoot;
pub use engine::GridPuzzleEngine;
pub use error::{Error, InvalidLevel, Result};
pub use level::Level;
pub use update::{apply_changes, is_solved, resolve_move, Resolution};
