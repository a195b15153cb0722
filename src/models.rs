use crate::core::{GridPuzzleEngine, MoveStatus};

pub struct GameRenderState<'a> {
    pub engine: &'a GridPuzzleEngine,
    pub message: Option<String>,
    pub last_status: Option<MoveStatus>,
}
